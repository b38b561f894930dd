//! Shared leaf types for Swiperow: geometry, pointer input, and time.

pub mod geometry;
pub mod input;
pub mod time;

// Re-export commonly used items
pub use geometry::{
    swipe_progress_percent, MeasureTarget, PanelEnd, Point, RowMetrics, WidthProvider,
};
pub use input::{PointerId, PointerSample};
pub use time::{Clock, ManualClock, MonotonicClock};

pub mod prelude {
    pub use crate::geometry::{MeasureTarget, PanelEnd, Point, RowMetrics, WidthProvider};
    pub use crate::input::{PointerId, PointerSample};
    pub use crate::time::{Clock, MonotonicClock};
}
