//! Swipe action animations: return snaps, destructive removal, and the
//! Outlook-style flick back.

use swiperow_core::PanelEnd;

use crate::easing::Easing;

/// Duration of the linear return snap.
pub const RETURN_DURATION_MS: u64 = 300;

/// Duration of the destructive removal slide.
pub const REMOVE_DURATION_MS: u64 = 350;

/// Duration of the flick-back keyframe animation.
pub const FLICK_BACK_DURATION_MS: u64 = 500;

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::linear(RETURN_DURATION_MS)
    }
}

/// What plays after a swipe action fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionAnimation {
    /// Snap the row content back to rest.
    Return,
    /// Slide the row off-screen and collapse it.
    Remove,
}

impl ActionAnimation {
    /// Destructive actions remove the row, everything else returns it.
    pub fn for_action(destructive: bool) -> Self {
        if destructive {
            ActionAnimation::Remove
        } else {
            ActionAnimation::Return
        }
    }
}

/// A normalized keyframe track: (fraction, value) pairs with fractions
/// ascending from 0 to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack {
    frames: Vec<(f32, f32)>,
}

impl KeyframeTrack {
    /// Builds a track from ascending (fraction, value) pairs. The first
    /// fraction must be 0 and the last 1.
    pub fn new(frames: Vec<(f32, f32)>) -> Self {
        assert!(frames.len() >= 2, "keyframe track needs at least two frames");
        assert_eq!(frames[0].0, 0.0, "keyframe track must start at fraction 0");
        assert_eq!(
            frames[frames.len() - 1].0,
            1.0,
            "keyframe track must end at fraction 1"
        );
        Self { frames }
    }

    /// Value at an eased fraction, piecewise-linearly interpolated.
    pub fn sample(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        let mut previous = self.frames[0];
        for &frame in &self.frames[1..] {
            if fraction <= frame.0 {
                let span = frame.0 - previous.0;
                if span == 0.0 {
                    return frame.1;
                }
                let local = (fraction - previous.0) / span;
                return previous.1 + (frame.1 - previous.1) * local;
            }
            previous = frame;
        }
        previous.1
    }

    /// Final resting value of the track.
    pub fn end_value(&self) -> f32 {
        self.frames[self.frames.len() - 1].1
    }
}

/// Overshoot fraction of the flick-back: how far past rest the content
/// swings before settling.
const FLICK_BACK_OVERSHOOT: f32 = 0.08;

/// Keyframe track for the Outlook-style flick back: from the current
/// offset, swing slightly past rest, then settle at 0.
pub fn flick_back_track(from: f32) -> KeyframeTrack {
    KeyframeTrack::new(vec![
        (0.0, from),
        (0.65, -from * FLICK_BACK_OVERSHOOT),
        (1.0, 0.0),
    ])
}

/// A playable animation instruction handed to the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Animation {
    /// Animate the row content to the given offset; panel widths animate
    /// to the carried values.
    Return {
        to: f32,
        leading_width: f32,
        trailing_width: f32,
        spec: AnimationSpec,
    },
    /// Keyframe flick back to rest. The host reports completion; only then
    /// does the controller reset its offset.
    FlickBack {
        track: KeyframeTrack,
        spec: AnimationSpec,
    },
    /// Destructive removal: translate the content fully off-screen and
    /// expand the revealed panel over the vacated space.
    Remove {
        translate_to: f32,
        expand: PanelEnd,
        width: f32,
        spec: AnimationSpec,
    },
}

impl Animation {
    pub fn snap_return(to: f32, leading_width: f32, trailing_width: f32) -> Self {
        Animation::Return {
            to,
            leading_width,
            trailing_width,
            spec: AnimationSpec::linear(RETURN_DURATION_MS),
        }
    }

    pub fn flick_back(from: f32) -> Self {
        Animation::FlickBack {
            track: flick_back_track(from),
            spec: AnimationSpec::tween(FLICK_BACK_DURATION_MS, Easing::EaseOut),
        }
    }

    pub fn remove(translate_to: f32, expand: PanelEnd) -> Self {
        Animation::Remove {
            translate_to,
            expand,
            width: translate_to.abs(),
            spec: AnimationSpec::linear(REMOVE_DURATION_MS),
        }
    }
}
