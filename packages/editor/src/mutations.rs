//! # Layout Mutations
//!
//! Every change to a card layout is one of these values. A mutation is
//! validated against the current layout before anything is touched, so a
//! failed mutation leaves the document exactly as it was.
//!
//! ## Mutation Semantics
//!
//! ### Geometry
//! - `MoveElement` / `ResizeElement` write the given numbers as-is
//! - Clamping and snapping belong to the gesture that produced them
//! - Out-of-bounds results are flagged by validation, never corrected
//!
//! ### Align
//! - Needs at least two distinct existing elements
//! - Only the aligned axis changes
//!
//! ### Z-order
//! - Draw order is the placeholder order; last is painted on top

use crate::geometry::{align_rects, Alignment, Rect};
use badgecraft_model::{
    CardFormat, DataRecord, ElementId, Layout, ModelError, PlaceholderElement, Side,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic layout operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a new placeholder on top of the draw order
    AddPlaceholder { element: PlaceholderElement },

    /// Write an edited working copy back over the element with the same id
    ReplaceElement { element: PlaceholderElement },

    RemoveElement { id: ElementId },

    MoveElement { id: ElementId, x: f64, y: f64 },

    ResizeElement { id: ElementId, width: f64, height: f64 },

    Align { ids: Vec<ElementId>, alignment: Alignment },

    BringToFront { id: ElementId },

    SendToBack { id: ElementId },

    /// Change the physical card format. Coordinates are not migrated.
    SetFormat { format: CardFormat },

    SwitchSide { side: Side },

    SetRecord { record: DataRecord },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("Duplicate element id: {0}")]
    DuplicateId(ElementId),

    #[error("Alignment needs at least 2 elements, got {0}")]
    AlignmentNeedsTwo(usize),

    #[error("Invalid size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },

    #[error(transparent)]
    Model(ModelError),
}

impl From<ModelError> for MutationError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::ElementNotFound(id) => MutationError::ElementNotFound(id),
            ModelError::DuplicateId(id) => MutationError::DuplicateId(id),
            other => MutationError::Model(other),
        }
    }
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    /// Document version after the mutation
    pub version: u64,
}

impl Mutation {
    /// Check the mutation against `layout` without changing anything
    pub fn validate(&self, layout: &Layout) -> Result<(), MutationError> {
        match self {
            Mutation::AddPlaceholder { element } => {
                if layout.contains(&element.id) {
                    return Err(MutationError::DuplicateId(element.id.clone()));
                }
                Ok(())
            }

            Mutation::ReplaceElement { element } => require(layout, &element.id),

            Mutation::RemoveElement { id }
            | Mutation::MoveElement { id, .. }
            | Mutation::BringToFront { id }
            | Mutation::SendToBack { id } => require(layout, id),

            Mutation::ResizeElement { id, width, height } => {
                require(layout, id)?;
                if *width <= 0.0 || *height <= 0.0 || !width.is_finite() || !height.is_finite() {
                    return Err(MutationError::InvalidSize {
                        width: *width,
                        height: *height,
                    });
                }
                Ok(())
            }

            Mutation::Align { ids, .. } => {
                let mut distinct: Vec<&ElementId> = Vec::new();
                for id in ids {
                    require(layout, id)?;
                    if !distinct.contains(&id) {
                        distinct.push(id);
                    }
                }
                if distinct.len() < 2 {
                    return Err(MutationError::AlignmentNeedsTwo(distinct.len()));
                }
                Ok(())
            }

            Mutation::SetFormat { .. } | Mutation::SwitchSide { .. } | Mutation::SetRecord { .. } => {
                Ok(())
            }
        }
    }

    /// Validate, then apply to the layout and bound record
    pub fn apply(&self, layout: &mut Layout, record: &mut DataRecord) -> Result<(), MutationError> {
        self.validate(layout)?;

        match self {
            Mutation::AddPlaceholder { element } => layout.insert(element.clone())?,

            Mutation::ReplaceElement { element } => {
                layout.replace(&element.id, element.clone())?;
            }

            Mutation::RemoveElement { id } => {
                layout.remove(id)?;
            }

            Mutation::MoveElement { id, x, y } => {
                let el = layout
                    .get_mut(id)
                    .ok_or_else(|| MutationError::ElementNotFound(id.clone()))?;
                el.x = *x;
                el.y = *y;
            }

            Mutation::ResizeElement { id, width, height } => {
                let el = layout
                    .get_mut(id)
                    .ok_or_else(|| MutationError::ElementNotFound(id.clone()))?;
                el.width = *width;
                el.height = *height;
            }

            Mutation::Align { ids, alignment } => Self::apply_align(layout, ids, *alignment)?,

            Mutation::BringToFront { id } => layout.bring_to_front(id)?,

            Mutation::SendToBack { id } => layout.send_to_back(id)?,

            Mutation::SetFormat { format } => layout.format = format.clone(),

            Mutation::SwitchSide { side } => layout.active_side = *side,

            Mutation::SetRecord { record: new_record } => *record = new_record.clone(),
        }

        Ok(())
    }

    fn apply_align(layout: &mut Layout, ids: &[ElementId], alignment: Alignment) -> Result<(), MutationError> {
        let mut targets: Vec<&ElementId> = Vec::new();
        for id in ids {
            if !targets.contains(&id) {
                targets.push(id);
            }
        }

        let rects = targets
            .iter()
            .map(|id| {
                layout
                    .get(id)
                    .map(Rect::from)
                    .ok_or_else(|| MutationError::ElementNotFound((*id).clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (id, rect) in targets.into_iter().zip(align_rects(&rects, alignment)) {
            if let Some(el) = layout.get_mut(id) {
                el.x = rect.x;
                el.y = rect.y;
            }
        }
        Ok(())
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddPlaceholder { .. } => "add_placeholder",
            Mutation::ReplaceElement { .. } => "replace_element",
            Mutation::RemoveElement { .. } => "remove_element",
            Mutation::MoveElement { .. } => "move_element",
            Mutation::ResizeElement { .. } => "resize_element",
            Mutation::Align { .. } => "align",
            Mutation::BringToFront { .. } => "bring_to_front",
            Mutation::SendToBack { .. } => "send_to_back",
            Mutation::SetFormat { .. } => "set_format",
            Mutation::SwitchSide { .. } => "switch_side",
            Mutation::SetRecord { .. } => "set_record",
        }
    }
}

fn require(layout: &Layout, id: &ElementId) -> Result<(), MutationError> {
    if layout.contains(id) {
        Ok(())
    } else {
        Err(MutationError::ElementNotFound(id.clone()))
    }
}
