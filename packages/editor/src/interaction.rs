//! # Interaction
//!
//! Pointer and keyboard handling for an [`EditSession`].
//!
//! ```text
//!          pointer-down (body)            pointer-move
//!   Idle ───────────────────────▶ Moving ─────────────▶ snap, clamp, write
//!    ▲  ───────────────────────▶ Resizing
//!    │     pointer-down (handle)      │
//!    └──── pointer-up / Escape ───────┘
//! ```
//!
//! Gestures write straight into the document on every move; there is no
//! separate commit step. Hit testing is the host's job: it tells us what was
//! under the pointer through [`PointerTarget`]. Every handler returns the
//! [`Action`]s the host should react to.

use crate::geometry::{clamp_axis, drag_position, resize_size, Point, Rect};
use crate::surface::PresentationSurface;
use crate::{EditSession, Mutation};
use badgecraft_model::ElementId;
use tracing::{debug, warn};

/// Nudge distance for arrow keys
pub const NUDGE_STEP: f64 = 1.0;

/// Nudge distance for arrow keys with Shift held
pub const NUDGE_STEP_LARGE: f64 = 10.0;

/// What the pointer went down on
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    /// Empty canvas
    Canvas,
    /// The body of a placeholder
    Body(ElementId),
    /// The bottom-right resize handle of a placeholder
    ResizeHandle(ElementId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Delete,
    Backspace,
    Escape,
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Delete" => Key::Delete,
            "Backspace" => Key::Backspace,
            "Escape" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// Gesture state machine
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    #[default]
    Idle,
    Moving {
        id: ElementId,
        start: Point,
        origin: Rect,
    },
    Resizing {
        id: ElementId,
        start: Point,
        origin: Rect,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InputState::Idle)
    }
}

/// Actions returned from input handlers for the host to process
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectionChanged,
    ElementMoved { id: ElementId, x: f64, y: f64 },
    ElementResized { id: ElementId, width: f64, height: f64 },
    ElementRemoved { id: ElementId },
    /// Pointer released; `changed` tells whether the geometry differs from
    /// where the gesture started
    GestureEnded { id: ElementId, changed: bool },
    /// Escape pressed mid-gesture; the start geometry is back
    GestureCancelled { id: ElementId },
}

impl<S: PresentationSurface> EditSession<S> {
    pub fn on_pointer_down(&mut self, point: Point, target: PointerTarget, modifiers: Modifiers) -> Vec<Action> {
        // one gesture at a time
        if !self.input.is_idle() {
            return Vec::new();
        }

        match target {
            PointerTarget::Canvas => {
                if self.selection.is_empty() {
                    Vec::new()
                } else {
                    self.deselect();
                    vec![Action::SelectionChanged]
                }
            }
            PointerTarget::Body(id) if modifiers.shift => match self.toggle_multi_select(&id) {
                Ok(()) => vec![Action::SelectionChanged],
                Err(_) => Vec::new(),
            },
            PointerTarget::Body(id) => match self.begin_gesture(&id, point) {
                Some(origin) => {
                    self.input = InputState::Moving { id, start: point, origin };
                    vec![Action::SelectionChanged]
                }
                None => Vec::new(),
            },
            PointerTarget::ResizeHandle(id) => match self.begin_gesture(&id, point) {
                Some(origin) => {
                    self.input = InputState::Resizing { id, start: point, origin };
                    vec![Action::SelectionChanged]
                }
                None => Vec::new(),
            },
        }
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        let grid = self.settings.grid_size;
        let canvas = self.canvas_size();

        match self.input.clone() {
            InputState::Idle => Vec::new(),
            InputState::Moving { id, start, origin } => {
                let (x, y) = drag_position(origin, point.delta_from(start), grid, canvas);
                match self.apply(Mutation::MoveElement { id: id.clone(), x, y }) {
                    Ok(_) => vec![Action::ElementMoved { id, x, y }],
                    Err(e) => self.drop_gesture(&id, e),
                }
            }
            InputState::Resizing { id, start, origin } => {
                let (width, height) = resize_size(origin, point.delta_from(start), grid, canvas);
                match self.apply(Mutation::ResizeElement {
                    id: id.clone(),
                    width,
                    height,
                }) {
                    Ok(_) => vec![Action::ElementResized { id, width, height }],
                    Err(e) => self.drop_gesture(&id, e),
                }
            }
        }
    }

    pub fn on_pointer_up(&mut self, _point: Point) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Moving { id, origin, .. } | InputState::Resizing { id, origin, .. } => {
                let changed = self
                    .layout()
                    .get(&id)
                    .map(|el| Rect::from(el) != origin)
                    .unwrap_or(false);
                debug!(id = %id, changed, "Gesture ended");
                vec![Action::GestureEnded { id, changed }]
            }
        }
    }

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        let step = if modifiers.shift { NUDGE_STEP_LARGE } else { NUDGE_STEP };

        match key {
            Key::ArrowLeft => self.nudge(-step, 0.0),
            Key::ArrowRight => self.nudge(step, 0.0),
            Key::ArrowUp => self.nudge(0.0, -step),
            Key::ArrowDown => self.nudge(0.0, step),
            Key::Delete | Key::Backspace => {
                let Some(id) = self.selection.primary.clone() else {
                    return Vec::new();
                };
                self.cancel_gesture();
                match self.delete_element(&id) {
                    Ok(()) => vec![Action::ElementRemoved { id }, Action::SelectionChanged],
                    Err(_) => Vec::new(),
                }
            }
            Key::Escape => {
                if let Some(id) = self.abort_gesture() {
                    return vec![Action::GestureCancelled { id }];
                }
                if self.selection.is_empty() {
                    Vec::new()
                } else {
                    self.deselect();
                    vec![Action::SelectionChanged]
                }
            }
            Key::Other(_) => Vec::new(),
        }
    }

    /// Forget any gesture in flight, leaving geometry where it is
    pub fn cancel_gesture(&mut self) {
        self.input = InputState::Idle;
    }

    /// Stop the gesture in flight and put its element back where it started
    fn abort_gesture(&mut self) -> Option<ElementId> {
        let (id, origin) = match std::mem::take(&mut self.input) {
            InputState::Idle => return None,
            InputState::Moving { id, origin, .. } | InputState::Resizing { id, origin, .. } => {
                (id, origin)
            }
        };

        let restore = [
            Mutation::MoveElement {
                id: id.clone(),
                x: origin.x,
                y: origin.y,
            },
            Mutation::ResizeElement {
                id: id.clone(),
                width: origin.width,
                height: origin.height,
            },
        ];
        for mutation in restore {
            if let Err(e) = self.apply(mutation) {
                warn!(id = %id, error = %e, "Could not restore gesture start");
            }
        }
        debug!(id = %id, "Gesture cancelled");
        Some(id)
    }

    fn begin_gesture(&mut self, id: &ElementId, point: Point) -> Option<Rect> {
        let origin = self.layout().get(id).map(Rect::from)?;
        self.selection.primary = Some(id.clone());
        debug!(id = %id, x = point.x, y = point.y, "Gesture started");
        Some(origin)
    }

    fn drop_gesture(&mut self, id: &ElementId, error: crate::EditorError) -> Vec<Action> {
        warn!(id = %id, error = %error, "Dropping gesture");
        self.input = InputState::Idle;
        Vec::new()
    }

    fn nudge(&mut self, dx: f64, dy: f64) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        let Some(id) = self.selection.primary.clone() else {
            return Vec::new();
        };
        let Some(rect) = self.layout().get(&id).map(Rect::from) else {
            return Vec::new();
        };

        let (canvas_width, canvas_height) = self.canvas_size();
        let x = clamp_axis(rect.x + dx, rect.width, canvas_width);
        let y = clamp_axis(rect.y + dy, rect.height, canvas_height);

        match self.apply(Mutation::MoveElement { id: id.clone(), x, y }) {
            Ok(_) => vec![Action::ElementMoved { id, x, y }],
            Err(_) => Vec::new(),
        }
    }
}
