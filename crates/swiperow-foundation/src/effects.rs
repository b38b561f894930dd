//! Effects returned from every controller entry point.
//!
//! The controller never touches a renderer or a scheduler directly; it
//! returns instructions the host adapter applies in order. Scheduling
//! effects keep the invariant of at most one pending frame per row.

use smallvec::SmallVec;
use swiperow_animation::Animation;
use swiperow_core::PanelEnd;

/// Ordered effects produced by one controller entry point.
pub type Effects = SmallVec<[Effect; 4]>;

/// Timers the controller may schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerId {
    /// Delayed callback of a destructive action, fired after the removal
    /// animation has had time to play.
    DestructiveCallback,
}

/// One instruction for the host adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Schedule one animation-frame callback; the host calls
    /// [`frame`](crate::gesture::SwipeGestureController::frame) when it
    /// fires. Never issued while a frame is already pending.
    RequestFrame,
    /// Cancel the pending animation-frame callback.
    CancelFrame,
    /// Remove any in-flight return/remove animation from the row, leaving
    /// plain per-frame geometry writes in control.
    ClearAnimation,
    /// Start a timer; the host calls
    /// [`timer_fired`](crate::gesture::SwipeGestureController::timer_fired)
    /// when it elapses.
    StartTimer { timer: TimerId, delay_ms: u64 },
    /// Cancel a previously started timer.
    CancelTimer { timer: TimerId },
    /// Apply the row's visual state for this frame.
    Render(VisualFrame),
    /// Play an animation on the row.
    Animate(Animation),
}

/// Class-level toggles applied alongside the frame geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualFlags {
    /// The leading panel is resting at its natural width.
    pub leading_open: bool,
    /// The trailing panel is resting at its natural width.
    pub trailing_open: bool,
    /// The offset has crossed the commit threshold toward this end.
    pub armed: Option<PanelEnd>,
    /// Outlook-style emphasis while armed.
    pub scaled: bool,
    /// The row is logically removed and animating out.
    pub removed: bool,
}

/// Visual state of one row for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualFrame {
    /// Horizontal translation of the row content in pixels.
    pub content_offset: f32,
    /// Revealed width of the leading panel.
    pub leading_width: f32,
    /// Revealed width of the trailing panel.
    pub trailing_width: f32,
    pub flags: VisualFlags,
}
