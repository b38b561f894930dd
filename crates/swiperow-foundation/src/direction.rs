//! Drag-direction classification.
//!
//! A gesture resolves its direction at most once, from the angle between
//! the drag origin and the current point, bucketed into eight octants.
//! Horizontal octants additionally require the matching action panel to
//! exist, so a drag toward nothing stays unclassified.

use swiperow_core::Point;

/// Resolved direction of a drag. `Unknown` until the pointer travels past
/// a start threshold; immutable for the rest of the gesture afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragDirection {
    #[default]
    Unknown,
    Up,
    Down,
    Left,
    Right,
}

impl DragDirection {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, DragDirection::Left | DragDirection::Right)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, DragDirection::Up | DragDirection::Down)
    }

    /// The public swipe direction, for horizontal drags only.
    pub fn swipe_direction(&self) -> Option<SwipeDirection> {
        match self {
            DragDirection::Left => Some(SwipeDirection::Left),
            DragDirection::Right => Some(SwipeDirection::Right),
            _ => None,
        }
    }
}

/// Direction carried by swipe notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Classifies the drag from `origin` to `current`.
///
/// Movement within both start thresholds returns `Unknown` and defers
/// classification to a later sample. The octant index is
/// `round(8 * angle / 2pi + 8) mod 8` with ties rounded to even, so an
/// exact 22.5 degree diagonal resolves deterministically. Octant 0 (right)
/// requires leading content, octant 4 (left) requires trailing content;
/// without it the drag stays unclassified.
pub fn classify(
    origin: Point,
    current: Point,
    swipe_start_px: f32,
    scroll_start_px: f32,
    has_leading: bool,
    has_trailing: bool,
) -> DragDirection {
    let delta = current - origin;
    let horizontal = delta.x.abs();
    let vertical = delta.y.abs();

    if horizontal <= swipe_start_px && vertical <= scroll_start_px {
        return DragDirection::Unknown;
    }

    let angle = delta.y.atan2(delta.x);
    match octant(angle) {
        0 if has_leading && horizontal > swipe_start_px => DragDirection::Right,
        1..=3 if vertical > scroll_start_px => DragDirection::Down,
        4 if has_trailing && horizontal > swipe_start_px => DragDirection::Left,
        5..=7 if vertical > scroll_start_px => DragDirection::Up,
        _ => DragDirection::Unknown,
    }
}

/// Buckets an angle (radians, from `atan2`) into octants 0..8, octant 0
/// centered on the positive x axis. Ties at exact 22.5 degree boundaries
/// round to even.
pub fn octant(angle: f32) -> u32 {
    ((8.0 * angle) / std::f32::consts::TAU + 8.0).round_ties_even() as u32 % 8
}
