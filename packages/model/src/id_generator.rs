use crate::{ElementId, ElementType, Layout};

/// Largest suffix adopted from a loaded layout; bigger ones are ignored so
/// the counter cannot be pushed to overflow
pub const MAX_RESUMED_SUFFIX: u64 = u32::MAX as u64;

/// Sequential placeholder ids of the form `{type}_{n}`.
///
/// The counter only moves forward, so an id handed out once is never handed
/// out again in the same session, even after its element was deleted.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    count: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting after every numeric suffix already used in `layout`
    pub fn resuming(layout: &Layout) -> Self {
        let mut gen = Self::new();
        gen.resume_after(layout);
        gen
    }

    /// Advance past ids present in `layout` (e.g. after loading a template)
    pub fn resume_after(&mut self, layout: &Layout) {
        let highest = layout
            .placeholders
            .iter()
            .filter_map(|el| numeric_suffix(el.id.as_str()))
            .filter(|n| *n <= MAX_RESUMED_SUFFIX)
            .max()
            .unwrap_or(0);
        self.count = self.count.max(highest);
    }

    /// Next id for `element_type` that is not taken in `layout`
    pub fn next_id(&mut self, element_type: ElementType, layout: &Layout) -> ElementId {
        loop {
            self.count += 1;
            let id = ElementId::new(format!("{}_{}", element_type, self.count));
            if !layout.contains(&id) {
                return id;
            }
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

fn numeric_suffix(id: &str) -> Option<u64> {
    id.rsplit_once('_').and_then(|(_, n)| n.parse().ok())
}
