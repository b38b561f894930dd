//! Pointer input samples delivered to a row's gesture controller.
//!
//! Hosts forward pointer-down/move/up and touch-start/move/end streams.
//! Touch streams must deliver only the first active touch point; secondary
//! touches never reach the controller.

use std::cell::Cell;

use crate::geometry::Point;

/// Identifies one pointer (mouse, or one touch contact) for the duration
/// of a gesture.
pub type PointerId = u64;

/// One pointer coordinate sample.
///
/// Carries a consumed flag the controller sets once a move belongs to a
/// horizontal swipe; the host then suppresses the event's default scrolling
/// behavior.
#[derive(Debug, Clone)]
pub struct PointerSample {
    position: Point,
    consumed: Cell<bool>,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            consumed: Cell::new(false),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }
}
