//! Per-row swipe gesture controller.
//!
//! One controller owns one row's drag lifecycle: it classifies the drag,
//! tracks the horizontal offset, recomputes derived visual state at a
//! throttled cadence, and decides at drag end whether to commit an action
//! or snap back. All work happens on the host's event thread; frame and
//! timer callbacks come back through [`frame`] and [`timer_fired`].
//!
//! [`frame`]: SwipeGestureController::frame
//! [`timer_fired`]: SwipeGestureController::timer_fired

use std::rc::Rc;

use swiperow_animation::{ActionAnimation, Animation};
use swiperow_core::{
    swipe_progress_percent, Clock, PanelEnd, Point, PointerId, PointerSample, RowMetrics,
};

use crate::config::{ListStyle, RowCallbacks, RowConfig, RowPanels, SwipeAction};
use crate::coordinator::{RowCoordinator, RowId};
use crate::direction::{classify, DragDirection};
use crate::effects::{Effect, Effects, TimerId, VisualFlags, VisualFrame};

/// Minimum time between applied frame updates (~60 Hz).
const FPS_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Pointer travel beyond which a release is a drag remnant, not a tap.
const CLICK_SLOP_PX: f32 = 10.0;

/// Mutable state of one gesture, reset when a drag starts on a fully
/// closed row.
#[derive(Debug, Clone, Copy)]
struct GestureState {
    /// Pointer position at gesture start; `None` means no drag in flight.
    origin: Option<Point>,
    direction: DragDirection,
    /// Signed horizontal displacement of the row content.
    offset: f32,
    leading_open: bool,
    trailing_open: bool,
    /// Set while the offset is past the commit threshold toward this end.
    armed: Option<PanelEnd>,
    /// Last reported progress percent, for duplicate suppression.
    previous_progress: u8,
}

impl GestureState {
    fn rest() -> Self {
        Self {
            origin: None,
            direction: DragDirection::Unknown,
            offset: 0.0,
            leading_open: false,
            trailing_open: false,
            armed: None,
            previous_progress: 0,
        }
    }

    fn reset(&mut self) {
        *self = Self::rest();
    }

    fn any_open(&self) -> bool {
        self.leading_open || self.trailing_open
    }
}

/// Once an action has fired for a drag, no further trigger transitions
/// happen for that drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriggerPhase {
    Idle,
    Triggered,
}

/// Drag state machine for one swipeable row.
pub struct SwipeGestureController {
    config: RowConfig,
    panels: RowPanels,
    metrics: RowMetrics,
    callbacks: RowCallbacks,
    clock: Rc<dyn Clock>,
    coordinator: Option<(Rc<RowCoordinator>, RowId)>,

    state: GestureState,
    trigger: TriggerPhase,
    /// The pointer driving the current drag; later pointers are ignored.
    active_pointer: Option<PointerId>,
    /// At most one animation-frame callback is outstanding; further move
    /// events coalesce into it.
    frame_pending: bool,
    /// Timestamp of the last applied frame (or drag start).
    last_frame_ms: u64,
    /// Where the pointer went down, for the tap-vs-drag slop check.
    press_point: Option<Point>,
    /// Last observed pointer position.
    last_point: Option<Point>,
    /// Destructive callback parked until its timer fires.
    pending_destructive: Option<Rc<dyn Fn()>>,
    /// An Outlook flick-back is playing; the offset resets on completion.
    awaiting_flick_back: bool,
    removed: bool,
}

impl SwipeGestureController {
    pub fn new(
        config: RowConfig,
        panels: RowPanels,
        metrics: RowMetrics,
        callbacks: RowCallbacks,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            panels,
            metrics,
            callbacks,
            clock,
            coordinator: None,
            state: GestureState::rest(),
            trigger: TriggerPhase::Idle,
            active_pointer: None,
            frame_pending: false,
            last_frame_ms: 0,
            press_point: None,
            last_point: None,
            pending_destructive: None,
            awaiting_flick_back: false,
            removed: false,
        }
    }

    /// Wires this row into a list-wide coordinator. The row's own
    /// registration id lets the coordinator skip it when closing others.
    pub fn attach_coordinator(&mut self, coordinator: Rc<RowCoordinator>, id: RowId) {
        self.coordinator = Some((coordinator, id));
    }

    /// Current signed content offset in pixels.
    pub fn offset(&self) -> f32 {
        self.state.offset
    }

    /// The panel resting open, if any.
    pub fn open_panel(&self) -> Option<PanelEnd> {
        if self.state.leading_open {
            Some(PanelEnd::Leading)
        } else if self.state.trailing_open {
            Some(PanelEnd::Trailing)
        } else {
            None
        }
    }

    /// The end whose action is armed for commit, if any.
    pub fn armed(&self) -> Option<PanelEnd> {
        self.state.armed
    }

    /// Whether the current drag has classified as a horizontal swipe.
    pub fn is_swiping(&self) -> bool {
        !self.config.block_swipe
            && self.state.origin.is_some()
            && self.state.direction.is_horizontal()
    }

    /// A drag went down on this row. Resets state on a closed row, or
    /// synthesizes the origin so a drag on a pinned-open row continues
    /// from the open position. Closes every other open row in the list
    /// before this row's first frame can commit any offset.
    pub fn drag_start(&mut self, pointer: PointerId, sample: &PointerSample) -> Effects {
        let mut effects = Effects::new();
        if self.active_pointer.is_some() {
            // Only the first touch point drives the gesture.
            return effects;
        }
        self.active_pointer = Some(pointer);

        if !self.state.any_open() {
            self.state.reset();
            self.trigger = TriggerPhase::Idle;
        }

        let position = sample.position();
        let start_offset = if self.state.leading_open {
            -self.metrics.leading_width
        } else if self.state.trailing_open {
            self.metrics.trailing_width
        } else {
            0.0
        };
        self.state.origin = Some(Point::new(position.x + start_offset, position.y));
        self.press_point = Some(position);
        self.last_point = Some(position);

        if let Some((coordinator, id)) = &self.coordinator {
            coordinator.drag_started(*id);
        }

        self.last_frame_ms = self.clock.now_ms();
        effects.push(Effect::ClearAnimation);
        self.schedule_frame(&mut effects);
        effects
    }

    /// A pointer moved during a drag. Resolves the direction on the first
    /// sample past a start threshold; afterwards a horizontal swipe
    /// consumes the sample and updates the offset, a vertical scroll is
    /// left alone for the rest of the gesture.
    pub fn drag_move(&mut self, sample: &PointerSample) -> Effects {
        let mut effects = Effects::new();
        if self.active_pointer.is_none() {
            return effects;
        }
        let Some(origin) = self.state.origin else {
            return effects;
        };

        let position = sample.position();
        self.last_point = Some(position);

        if self.state.direction == DragDirection::Unknown {
            self.state.direction = classify(
                origin,
                position,
                self.config.swipe_start_threshold_px,
                self.config.scroll_start_threshold_px,
                self.panels.has(PanelEnd::Leading),
                self.panels.has(PanelEnd::Trailing),
            );
            if self.state.direction != DragDirection::Unknown {
                log::debug!("drag classified as {:?}", self.state.direction);
            }
            if self.is_swiping() {
                if let Some(direction) = self.state.direction.swipe_direction() {
                    self.callbacks.swipe_start(direction);
                }
            }
        }

        if self.is_swiping() {
            sample.consume();
            let max_swipe = self.metrics.max_swipe(self.config.max_swipe_fraction);
            self.state.offset = (position.x - origin.x).clamp(-max_swipe, max_swipe);
            self.schedule_frame(&mut effects);
        }
        effects
    }

    /// The drag's pointer went up. A gesture that never classified as a
    /// swipe is a no-op. An armed gesture commits its action; otherwise
    /// the row animates back to the pinned-open offset or fully to rest.
    pub fn drag_end(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.active_pointer.take().is_none() {
            return effects;
        }
        if !self.is_swiping() {
            return effects;
        }
        let Some(direction) = self.state.direction.swipe_direction() else {
            return effects;
        };

        let armed_action = if self.trigger == TriggerPhase::Idle {
            self.state
                .armed
                .and_then(|end| self.panels.main_action(end).cloned().map(|a| (end, a)))
        } else {
            None
        };

        if let Some((end, action)) = armed_action {
            let trigger_effects = self.trigger_action(end, &action);
            effects.extend(trigger_effects);
        } else if self.state.any_open() {
            let to = if self.state.leading_open {
                self.metrics.leading_width
            } else {
                -self.metrics.trailing_width
            };
            self.state.offset = to;
            let animation = self.play_return(to);
            effects.push(Effect::Animate(animation));
        } else {
            self.state.reset();
            let animation = self.play_return(0.0);
            effects.push(Effect::Animate(animation));
        }

        self.callbacks.swipe_end(direction);
        effects
    }

    /// The scheduled animation frame fired. Applies the throttled derived
    /// state update; a stale frame after the drag ended is a no-op.
    pub fn frame(&mut self) -> Effects {
        self.frame_pending = false;
        let mut effects = Effects::new();
        if !self.is_swiping() {
            return effects;
        }

        let now = self.clock.now_ms();
        if now.saturating_sub(self.last_frame_ms) as f64 <= FPS_INTERVAL_MS {
            return effects;
        }

        self.update_derived_state();
        effects.push(Effect::Render(self.current_frame()));
        self.report_progress();
        self.last_frame_ms = self.clock.now_ms();
        effects
    }

    /// A scheduled timer elapsed.
    pub fn timer_fired(&mut self, timer: TimerId) {
        match timer {
            TimerId::DestructiveCallback => {
                if let Some(callback) = self.pending_destructive.take() {
                    callback();
                }
            }
        }
    }

    /// The host finished playing a flick-back animation; only now does the
    /// content rest at offset zero.
    pub fn animation_done(&mut self) -> Effects {
        let mut effects = Effects::new();
        if !self.awaiting_flick_back {
            return effects;
        }
        self.awaiting_flick_back = false;
        self.state.offset = 0.0;
        self.state.leading_open = false;
        self.state.trailing_open = false;
        effects.push(Effect::Render(self.current_frame()));
        effects
    }

    /// An action in a revealed panel was clicked directly.
    pub fn action_pressed(&mut self, end: PanelEnd, index: usize) -> Effects {
        let Some(action) = self
            .panels
            .panel(end)
            .and_then(|panel| panel.actions.get(index))
            .cloned()
        else {
            return Effects::new();
        };
        self.trigger_action(end, &action)
    }

    /// A plain click on the row content. Forwarded to the consumer unless
    /// a panel is pinned open, a swipe is in progress, or the pointer
    /// traveled more than the tap slop between press and release. Returns
    /// whether the click was forwarded.
    pub fn click(&self) -> bool {
        if self.state.any_open() {
            return false;
        }
        if self.active_pointer.is_some() && self.is_swiping() {
            return false;
        }
        if let (Some(press), Some(release)) = (self.press_point, self.last_point) {
            if press.distance_to(release) > CLICK_SLOP_PX {
                return false;
            }
        }
        self.callbacks.click();
        true
    }

    /// Close-me entry point used by the coordinator: an open row animates
    /// back to rest immediately; a closed row is untouched.
    pub fn close(&mut self) -> Effects {
        let mut effects = Effects::new();
        if !self.state.any_open() {
            return effects;
        }
        log::debug!("closing row on coordinator request");
        self.state.reset();
        if self.frame_pending {
            self.frame_pending = false;
            effects.push(Effect::CancelFrame);
        }
        let animation = self.play_return(0.0);
        effects.push(Effect::Animate(animation));
        effects
    }

    /// The row is going away. Cancels the pending frame and destructive
    /// timer so no callback fires afterwards. The host deregisters the
    /// row from its coordinator.
    pub fn unmount(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.frame_pending {
            self.frame_pending = false;
            effects.push(Effect::CancelFrame);
        }
        if self.pending_destructive.take().is_some() {
            effects.push(Effect::CancelTimer {
                timer: TimerId::DestructiveCallback,
            });
        }
        self.active_pointer = None;
        self.awaiting_flick_back = false;
        self.state.reset();
        effects
    }

    fn schedule_frame(&mut self, effects: &mut Effects) {
        if !self.frame_pending {
            self.frame_pending = true;
            effects.push(Effect::RequestFrame);
        }
    }

    /// Steps 1-4 of the per-frame computation: illegal-direction zeroing,
    /// iOS panel-open tracking, and commit arming.
    fn update_derived_state(&mut self) {
        let swiping_left = self.state.offset < 0.0;
        let swiping_right = self.state.offset > 0.0;

        if swiping_left {
            if !self.panels.has(PanelEnd::Trailing) {
                // Nothing to reveal on this side.
                self.state.offset = 0.0;
            } else if self.config.style == ListStyle::Ios {
                self.state.trailing_open =
                    self.state.offset.abs() > self.metrics.trailing_width;
                self.state.leading_open = false;
            }
        }

        if swiping_right {
            if !self.panels.has(PanelEnd::Leading) {
                self.state.offset = 0.0;
            } else if self.config.style == ListStyle::Ios {
                self.state.leading_open = self.state.offset > self.metrics.leading_width;
                self.state.trailing_open = false;
            }
        }

        if self.config.full_swipe_active() {
            let threshold = self.metrics.content_width * self.config.commit_threshold_fraction;
            let armed = if self.state.offset < -threshold {
                Some(PanelEnd::Trailing)
            } else if self.state.offset > threshold {
                Some(PanelEnd::Leading)
            } else {
                None
            };
            if armed != self.state.armed {
                log::debug!("commit arming changed: {:?} -> {:?}", self.state.armed, armed);
                self.state.armed = armed;
            }
        }
    }

    /// Steps 5-6: panel widths track the offset, content translates by it.
    fn current_frame(&self) -> VisualFrame {
        VisualFrame {
            content_offset: self.state.offset,
            leading_width: self.state.offset.max(0.0),
            trailing_width: (-self.state.offset).max(0.0),
            flags: self.visual_flags(),
        }
    }

    fn visual_flags(&self) -> VisualFlags {
        VisualFlags {
            leading_open: self.state.leading_open,
            trailing_open: self.state.trailing_open,
            armed: self.state.armed,
            scaled: self.config.style == ListStyle::Outlook && self.state.armed.is_some(),
            removed: self.removed,
        }
    }

    /// Step 7: progress percent, reported only on change. A zero-width
    /// row keeps its previous value.
    fn report_progress(&mut self) {
        let Some(percent) = swipe_progress_percent(self.metrics.content_width, self.state.offset)
        else {
            return;
        };
        if percent == self.state.previous_progress {
            return;
        }
        self.state.previous_progress = percent;
        if let Some(direction) = self.state.direction.swipe_direction() {
            self.callbacks.swipe_progress(percent, direction);
        }
    }

    /// Fires a swipe action once per drag: notifies the consumer, then
    /// either parks the destructive callback behind its timer while the
    /// removal animation plays, or invokes the callback now and returns
    /// the row to rest with the style's return animation.
    fn trigger_action(&mut self, end: PanelEnd, action: &SwipeAction) -> Effects {
        let mut effects = Effects::new();
        if self.trigger == TriggerPhase::Triggered {
            return effects;
        }
        self.trigger = TriggerPhase::Triggered;
        log::debug!(
            "action triggered on {:?} end (destructive: {})",
            end,
            action.destructive
        );
        self.callbacks.action_triggered(action.destructive);

        match ActionAnimation::for_action(action.destructive) {
            ActionAnimation::Remove => {
                self.pending_destructive = Some(Rc::clone(&action.on_click));
                self.removed = true;
                self.state.armed = Some(end);
                let translate_to = self.metrics.content_width * end.sign();
                effects.push(Effect::Render(self.current_frame()));
                effects.push(Effect::Animate(Animation::remove(translate_to, end)));
                effects.push(Effect::StartTimer {
                    timer: TimerId::DestructiveCallback,
                    delay_ms: self.config.destructive_delay_ms,
                });
            }
            ActionAnimation::Return => {
                (action.on_click)();
                if self.config.style == ListStyle::Outlook {
                    self.awaiting_flick_back = true;
                    effects.push(Effect::Animate(Animation::flick_back(self.state.offset)));
                } else {
                    self.state.offset = 0.0;
                    let animation = self.play_return(0.0);
                    effects.push(Effect::Animate(animation));
                }
            }
        }
        effects
    }

    /// Builds the return animation toward `to`, clearing the open flags
    /// when the row returns fully to rest. Non-iOS styles always snap the
    /// content home and collapse both panels.
    fn play_return(&mut self, to: f32) -> Animation {
        let ios = self.config.style == ListStyle::Ios;
        let leading_width = if to != 0.0 && ios && self.state.leading_open {
            self.metrics.leading_width
        } else {
            0.0
        };
        let trailing_width = if to != 0.0 && ios && self.state.trailing_open {
            self.metrics.trailing_width
        } else {
            0.0
        };
        if to == 0.0 {
            self.state.leading_open = false;
            self.state.trailing_open = false;
        }
        Animation::snap_return(if ios { to } else { 0.0 }, leading_width, trailing_width)
    }
}

impl std::fmt::Debug for SwipeGestureController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeGestureController")
            .field("config", &self.config)
            .field("metrics", &self.metrics)
            .field("state", &self.state)
            .field("trigger", &self.trigger)
            .field("active_pointer", &self.active_pointer)
            .field("frame_pending", &self.frame_pending)
            .finish_non_exhaustive()
    }
}
