use crate::{CardFormat, ElementId, ModelError, PlaceholderElement, Side};

/// Slack for float rounding when an element sits flush against an edge
const BOUNDS_EPSILON: f64 = 1e-6;

/// A card's placeholder set, its physical format and the face being edited.
///
/// `placeholders` is kept in draw order: later elements paint on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub placeholders: Vec<PlaceholderElement>,
    pub format: CardFormat,
    pub active_side: Side,
}

impl Layout {
    pub fn new(format: CardFormat) -> Self {
        Self {
            placeholders: Vec::new(),
            format,
            active_side: Side::Front,
        }
    }

    pub fn with_placeholders(mut self, placeholders: Vec<PlaceholderElement>) -> Self {
        self.placeholders = placeholders;
        self
    }

    pub fn get(&self, id: &ElementId) -> Option<&PlaceholderElement> {
        self.placeholders.iter().find(|el| &el.id == id)
    }

    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut PlaceholderElement> {
        self.placeholders.iter_mut().find(|el| &el.id == id)
    }

    /// Draw-order index of an element
    pub fn position(&self, id: &ElementId) -> Option<usize> {
        self.placeholders.iter().position(|el| &el.id == id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.position(id).is_some()
    }

    /// Append an element on top of the draw order
    pub fn insert(&mut self, element: PlaceholderElement) -> Result<(), ModelError> {
        if self.contains(&element.id) {
            return Err(ModelError::DuplicateId(element.id));
        }
        self.placeholders.push(element);
        Ok(())
    }

    /// Write a working copy back over the element with identity `id`,
    /// keeping its draw-order slot. Returns the previous value.
    pub fn replace(
        &mut self,
        id: &ElementId,
        element: PlaceholderElement,
    ) -> Result<PlaceholderElement, ModelError> {
        let index = self
            .position(id)
            .ok_or_else(|| ModelError::ElementNotFound(id.clone()))?;

        if &element.id != id && self.contains(&element.id) {
            return Err(ModelError::DuplicateId(element.id));
        }

        Ok(std::mem::replace(&mut self.placeholders[index], element))
    }

    pub fn remove(&mut self, id: &ElementId) -> Result<PlaceholderElement, ModelError> {
        let index = self
            .position(id)
            .ok_or_else(|| ModelError::ElementNotFound(id.clone()))?;
        Ok(self.placeholders.remove(index))
    }

    /// Elements of one face, in draw order
    pub fn side_elements(&self, side: Side) -> Vec<&PlaceholderElement> {
        self.placeholders.iter().filter(|el| el.side == side).collect()
    }

    pub fn current_side_elements(&self) -> Vec<&PlaceholderElement> {
        self.side_elements(self.active_side)
    }

    pub fn has_elements_on(&self, side: Side) -> bool {
        self.placeholders.iter().any(|el| el.side == side)
    }

    /// Move an element to the end of the draw order (painted last)
    pub fn bring_to_front(&mut self, id: &ElementId) -> Result<(), ModelError> {
        let element = self.remove(id)?;
        self.placeholders.push(element);
        Ok(())
    }

    /// Move an element to the start of the draw order (painted first)
    pub fn send_to_back(&mut self, id: &ElementId) -> Result<(), ModelError> {
        let element = self.remove(id)?;
        self.placeholders.insert(0, element);
        Ok(())
    }

    /// Canvas size in pixels of either face
    pub fn canvas_size(&self, scale: f64) -> (f64, f64) {
        (self.format.canvas_width(scale), self.format.canvas_height(scale))
    }

    /// An element is valid when it has a positive size and lies entirely
    /// inside the canvas. Nothing is corrected here.
    pub fn is_in_bounds(&self, element: &PlaceholderElement, scale: f64) -> bool {
        let (canvas_width, canvas_height) = self.canvas_size(scale);
        element.width > 0.0
            && element.height > 0.0
            && element.x >= 0.0
            && element.y >= 0.0
            && element.right() <= canvas_width + BOUNDS_EPSILON
            && element.bottom() <= canvas_height + BOUNDS_EPSILON
    }

    /// Ids of every element that fails [`Layout::is_in_bounds`]
    pub fn out_of_bounds(&self, scale: f64) -> Vec<ElementId> {
        self.placeholders
            .iter()
            .filter(|el| !self.is_in_bounds(el, scale))
            .map(|el| el.id.clone())
            .collect()
    }
}
