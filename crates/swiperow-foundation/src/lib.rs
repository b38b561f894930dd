//! Swipe gesture engine: the per-row drag state machine, its effects, and
//! cross-row coordination.
//!
//! One [`SwipeGestureController`] per list row consumes pointer samples and
//! frame/timer ticks and returns [`Effects`]: render instructions and
//! scheduling requests a thin host adapter applies. A [`RowCoordinator`]
//! keeps at most one row's action panel open across a list.

pub mod config;
pub mod coordinator;
pub mod direction;
pub mod effects;
pub mod gesture;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use config::{
    ListConfig, ListStyle, PanelConfig, RowCallbacks, RowConfig, RowOverrides, RowPanels,
    SwipeAction,
};
pub use coordinator::{RowCoordinator, RowId};
pub use direction::{DragDirection, SwipeDirection};
pub use effects::{Effect, Effects, TimerId, VisualFlags, VisualFrame};
pub use gesture::SwipeGestureController;

pub mod prelude {
    pub use crate::config::{
        ListConfig, ListStyle, PanelConfig, RowCallbacks, RowConfig, RowOverrides, RowPanels,
        SwipeAction,
    };
    pub use crate::coordinator::{RowCoordinator, RowId};
    pub use crate::direction::SwipeDirection;
    pub use crate::effects::{Effect, Effects, TimerId, VisualFlags, VisualFrame};
    pub use crate::gesture::SwipeGestureController;
    pub use swiperow_core::prelude::*;
}
