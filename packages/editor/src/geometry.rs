//! # Geometry
//!
//! Pure helpers behind dragging, resizing and alignment. Nothing here touches
//! a document; callers feed in numbers and write the results back through
//! mutations.

use badgecraft_model::PlaceholderElement;
use serde::{Deserialize, Serialize};

/// Grid used when snapping is enabled and nothing else is configured
pub const DEFAULT_GRID_SIZE: f64 = 5.0;

/// Smallest width/height a resize gesture can produce
pub const MIN_ELEMENT_SIZE: f64 = 1.0;

/// Point in canvas space (pixels)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`
    pub fn delta_from(&self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Axis-aligned box in canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

impl From<&PlaceholderElement> for Rect {
    fn from(el: &PlaceholderElement) -> Self {
        Rect::new(el.x, el.y, el.width, el.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

/// Round `value` to the nearest multiple of `grid`; a non-positive grid
/// leaves it alone
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).round() * grid
}

/// Keep `[pos, pos + size]` inside `[0, bound]` as far as possible.
/// An element larger than the bound is pinned to 0.
pub fn clamp_axis(pos: f64, size: f64, bound: f64) -> f64 {
    pos.clamp(0.0, (bound - size).max(0.0))
}

/// Line every rect up on one edge or centre line. Only the axis named by
/// `alignment` changes; sizes never do.
pub fn align_rects(rects: &[Rect], alignment: Alignment) -> Vec<Rect> {
    if rects.is_empty() {
        return Vec::new();
    }
    let count = rects.len() as f64;

    let mut aligned = rects.to_vec();
    match alignment {
        Alignment::Left => {
            let left = rects.iter().map(|r| r.x).fold(f64::INFINITY, f64::min);
            aligned.iter_mut().for_each(|r| r.x = left);
        }
        Alignment::Right => {
            let right = rects.iter().map(Rect::right).fold(f64::NEG_INFINITY, f64::max);
            aligned.iter_mut().for_each(|r| r.x = right - r.width);
        }
        Alignment::Center => {
            let center = rects.iter().map(Rect::center_x).sum::<f64>() / count;
            aligned.iter_mut().for_each(|r| r.x = center - r.width / 2.0);
        }
        Alignment::Top => {
            let top = rects.iter().map(|r| r.y).fold(f64::INFINITY, f64::min);
            aligned.iter_mut().for_each(|r| r.y = top);
        }
        Alignment::Bottom => {
            let bottom = rects.iter().map(Rect::bottom).fold(f64::NEG_INFINITY, f64::max);
            aligned.iter_mut().for_each(|r| r.y = bottom - r.height);
        }
        Alignment::Middle => {
            let middle = rects.iter().map(Rect::center_y).sum::<f64>() / count;
            aligned.iter_mut().for_each(|r| r.y = middle - r.height / 2.0);
        }
    }
    aligned
}

/// Position of a dragged element: origin plus pointer delta, snapped, then
/// clamped into the canvas
pub fn drag_position(origin: Rect, delta: (f64, f64), grid: Option<f64>, canvas: (f64, f64)) -> (f64, f64) {
    let mut x = origin.x + delta.0;
    let mut y = origin.y + delta.1;
    if let Some(grid) = grid {
        x = snap_to_grid(x, grid);
        y = snap_to_grid(y, grid);
    }
    (
        clamp_axis(x, origin.width, canvas.0),
        clamp_axis(y, origin.height, canvas.1),
    )
}

/// Size of an element resized from its bottom-right handle. Never smaller
/// than [`MIN_ELEMENT_SIZE`]; the far edge stays inside the canvas.
pub fn resize_size(origin: Rect, delta: (f64, f64), grid: Option<f64>, canvas: (f64, f64)) -> (f64, f64) {
    let mut width = origin.width + delta.0;
    let mut height = origin.height + delta.1;
    if let Some(grid) = grid {
        width = snap_to_grid(width, grid);
        height = snap_to_grid(height, grid);
    }
    (
        fit_extent(width, origin.x, canvas.0),
        fit_extent(height, origin.y, canvas.1),
    )
}

fn fit_extent(size: f64, pos: f64, bound: f64) -> f64 {
    size.min((bound - pos).max(MIN_ELEMENT_SIZE)).max(MIN_ELEMENT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(57.0, 5.0), 55.0);
        assert_eq!(snap_to_grid(58.0, 5.0), 60.0);
        assert_eq!(snap_to_grid(57.3, 0.0), 57.3);
        assert_eq!(snap_to_grid(57.3, -5.0), 57.3);
    }

    #[test]
    fn test_clamp_axis() {
        assert_eq!(clamp_axis(-10.0, 50.0, 200.0), 0.0);
        assert_eq!(clamp_axis(180.0, 50.0, 200.0), 150.0);
        assert_eq!(clamp_axis(20.0, 300.0, 200.0), 0.0);
    }

    #[test]
    fn test_align_left_and_right() {
        let rects = vec![
            Rect::new(30.0, 0.0, 10.0, 10.0),
            Rect::new(10.0, 20.0, 40.0, 10.0),
            Rect::new(50.0, 40.0, 20.0, 10.0),
        ];

        let left = align_rects(&rects, Alignment::Left);
        assert!(left.iter().all(|r| r.x == 10.0));
        assert_eq!(left[1].y, 20.0);

        let right = align_rects(&rects, Alignment::Right);
        assert_eq!(right.iter().map(|r| r.right()).collect::<Vec<_>>(), vec![70.0; 3]);
    }

    #[test]
    fn test_align_center_uses_mean_of_centres() {
        let rects = vec![Rect::new(0.0, 0.0, 20.0, 10.0), Rect::new(100.0, 0.0, 40.0, 10.0)];
        let centered = align_rects(&rects, Alignment::Center);

        // centres 10 and 120
        assert_eq!(centered[0].x, 55.0);
        assert_eq!(centered[1].x, 45.0);
        assert_eq!(centered[0].center_x(), centered[1].center_x());
    }

    #[test]
    fn test_align_vertical() {
        let rects = vec![Rect::new(0.0, 10.0, 10.0, 10.0), Rect::new(0.0, 40.0, 10.0, 30.0)];
        assert!(align_rects(&rects, Alignment::Top).iter().all(|r| r.y == 10.0));
        let bottom = align_rects(&rects, Alignment::Bottom);
        assert_eq!((bottom[0].y, bottom[1].y), (60.0, 40.0));
        let middle = align_rects(&rects, Alignment::Middle);
        assert_eq!(middle[0].center_y(), middle[1].center_y());
    }

    #[test]
    fn test_drag_snaps_then_clamps() {
        let origin = Rect::new(50.0, 50.0, 100.0, 20.0);
        assert_eq!(drag_position(origin, (7.0, 7.0), Some(5.0), (400.0, 300.0)), (55.0, 55.0));
        assert_eq!(drag_position(origin, (7.0, 7.0), None, (400.0, 300.0)), (57.0, 57.0));
        assert_eq!(drag_position(origin, (1000.0, -80.0), Some(5.0), (400.0, 300.0)), (300.0, 0.0));
    }

    #[test]
    fn test_resize_limits() {
        let origin = Rect::new(350.0, 10.0, 30.0, 30.0);
        let (w, h) = resize_size(origin, (100.0, -200.0), None, (400.0, 300.0));
        assert_eq!((w, h), (50.0, 1.0));
    }
}
