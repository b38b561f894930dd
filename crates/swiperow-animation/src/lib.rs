//! Animation vocabulary for Swiperow.
//!
//! The engine never runs an interpolation loop itself; it hands hosts a
//! playable [`Animation`] instruction and the easing/keyframe metadata
//! needed to drive it.

pub mod easing;
pub mod swipe;


pub use easing::Easing;
pub use swipe::{
    flick_back_track, ActionAnimation, Animation, AnimationSpec, KeyframeTrack,
    FLICK_BACK_DURATION_MS, REMOVE_DURATION_MS, RETURN_DURATION_MS,
};
