mod coordinator_tests;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swiperow_core::{ManualClock, PanelEnd, PointerSample, RowMetrics};

use crate::config::{
    ListConfig, ListStyle, PanelConfig, RowCallbacks, RowConfig, RowOverrides, RowPanels,
    SwipeAction,
};
use crate::direction::SwipeDirection;
use crate::effects::Effects;
use crate::gesture::SwipeGestureController;

pub(crate) const ROW_WIDTH: f32 = 360.0;
pub(crate) const LEADING_WIDTH: f32 = 80.0;
pub(crate) const TRAILING_WIDTH: f32 = 120.0;

/// Records every notification a row emits.
#[derive(Default)]
pub(crate) struct Recorder {
    pub starts: RefCell<Vec<SwipeDirection>>,
    pub progress: RefCell<Vec<(u8, SwipeDirection)>>,
    pub ends: RefCell<Vec<SwipeDirection>>,
    pub actions: RefCell<Vec<bool>>,
    pub clicks: Cell<usize>,
    pub leading_fires: Cell<usize>,
    pub trailing_fires: Cell<usize>,
}

impl Recorder {
    pub fn callbacks(self: &Rc<Self>) -> RowCallbacks {
        let starts = Rc::clone(self);
        let progress = Rc::clone(self);
        let ends = Rc::clone(self);
        let actions = Rc::clone(self);
        let clicks = Rc::clone(self);
        RowCallbacks {
            on_swipe_start: Some(Rc::new(move |direction| {
                starts.starts.borrow_mut().push(direction)
            })),
            on_swipe_progress: Some(Rc::new(move |percent, direction| {
                progress.progress.borrow_mut().push((percent, direction))
            })),
            on_swipe_end: Some(Rc::new(move |direction| {
                ends.ends.borrow_mut().push(direction)
            })),
            on_action_triggered: Some(Rc::new(move |destructive| {
                actions.actions.borrow_mut().push(destructive)
            })),
            on_click: Some(Rc::new(move || clicks.clicks.set(clicks.clicks.get() + 1))),
        }
    }
}

pub(crate) struct RowOptions {
    pub style: ListStyle,
    pub full_swipe: bool,
    pub block_swipe: bool,
    pub leading: bool,
    pub trailing: bool,
    pub destructive_trailing: bool,
    pub max_swipe_fraction: Option<f32>,
    pub metrics: RowMetrics,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            style: ListStyle::Android,
            full_swipe: false,
            block_swipe: false,
            leading: true,
            trailing: true,
            destructive_trailing: false,
            max_swipe_fraction: None,
            metrics: RowMetrics::new(ROW_WIDTH, LEADING_WIDTH, TRAILING_WIDTH),
        }
    }
}

pub(crate) struct TestRow {
    pub controller: SwipeGestureController,
    pub clock: Rc<ManualClock>,
    pub recorder: Rc<Recorder>,
}

pub(crate) fn build_row(options: RowOptions) -> TestRow {
    let recorder: Rc<Recorder> = Rc::new(Recorder::default());
    let clock = Rc::new(ManualClock::new());

    let leading = options.leading.then(|| {
        let fires = Rc::clone(&recorder);
        PanelConfig::new(vec![SwipeAction::new(move || {
            fires.leading_fires.set(fires.leading_fires.get() + 1)
        })])
    });
    let trailing = options.trailing.then(|| {
        let fires = Rc::clone(&recorder);
        let action = SwipeAction::new(move || {
            fires.trailing_fires.set(fires.trailing_fires.get() + 1)
        });
        let action = if options.destructive_trailing {
            action.destructive()
        } else {
            action
        };
        PanelConfig::new(vec![action])
    });

    let config = RowConfig::resolve(
        &ListConfig::default(),
        RowOverrides {
            style: Some(options.style),
            full_swipe: Some(options.full_swipe),
            max_swipe_fraction: options.max_swipe_fraction,
            block_swipe: options.block_swipe,
            ..Default::default()
        },
    );

    let controller = SwipeGestureController::new(
        config,
        RowPanels { leading, trailing },
        options.metrics,
        recorder.callbacks(),
        clock.clone(),
    );

    TestRow {
        controller,
        clock,
        recorder,
    }
}

impl TestRow {
    pub fn press(&mut self, x: f32, y: f32) -> Effects {
        self.controller.drag_start(1, &PointerSample::new(x, y))
    }

    /// Moves the pointer; returns the effects and whether the sample was
    /// consumed.
    pub fn move_to(&mut self, x: f32, y: f32) -> (Effects, bool) {
        let sample = PointerSample::new(x, y);
        let effects = self.controller.drag_move(&sample);
        (effects, sample.is_consumed())
    }

    /// Advances past the frame throttle and runs the scheduled frame.
    pub fn tick(&mut self) -> Effects {
        self.clock.advance(17);
        self.controller.frame()
    }

    pub fn release(&mut self) -> Effects {
        self.controller.drag_end()
    }

    /// One full horizontal drag by `by` pixels from a fixed start point,
    /// with a frame applied before release.
    pub fn swipe(&mut self, by: f32) -> Effects {
        self.press(200.0, 20.0);
        self.move_to(200.0 + by, 20.0);
        self.tick();
        self.release()
    }

    /// Drags just past the panel width so an iOS row pins it open.
    pub fn pin_open(&mut self, end: PanelEnd) -> Effects {
        let width = match end {
            PanelEnd::Leading => LEADING_WIDTH,
            PanelEnd::Trailing => TRAILING_WIDTH,
        };
        self.swipe(end.sign() * (width + 10.0))
    }
}
