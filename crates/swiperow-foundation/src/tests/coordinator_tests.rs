use std::cell::RefCell;
use std::rc::Rc;

use swiperow_core::{ManualClock, PanelEnd, PointerSample, RowMetrics};

use crate::config::{ListConfig, PanelConfig, RowCallbacks, RowConfig, RowOverrides, RowPanels};
use crate::config::{ListStyle, SwipeAction};
use crate::coordinator::{RowCoordinator, RowId};
use crate::effects::Effect;
use crate::gesture::SwipeGestureController;
use swiperow_animation::Animation;

const TRAILING_WIDTH: f32 = 123.0;

struct ListRow {
    controller: Rc<RefCell<SwipeGestureController>>,
    /// Effects emitted by coordinator-driven closes.
    close_effects: Rc<RefCell<Vec<Effect>>>,
    id: RowId,
    clock: Rc<ManualClock>,
}

fn mount_row(coordinator: &Rc<RowCoordinator>) -> ListRow {
    let clock = Rc::new(ManualClock::new());
    let config = RowConfig::resolve(
        &ListConfig::default(),
        RowOverrides {
            style: Some(ListStyle::Ios),
            full_swipe: Some(false),
            ..Default::default()
        },
    );
    let panels = RowPanels {
        leading: None,
        trailing: Some(PanelConfig::new(vec![SwipeAction::new(|| {})])),
    };
    let metrics = RowMetrics::new(360.0, 0.0, TRAILING_WIDTH);
    let controller = Rc::new(RefCell::new(SwipeGestureController::new(
        config,
        panels,
        metrics,
        RowCallbacks::default(),
        clock.clone(),
    )));

    let close_effects: Rc<RefCell<Vec<Effect>>> = Rc::new(RefCell::new(Vec::new()));
    let id = {
        let controller = Rc::clone(&controller);
        let sink = Rc::clone(&close_effects);
        coordinator.register(Rc::new(move || {
            let effects = controller.borrow_mut().close();
            sink.borrow_mut().extend(effects);
        }))
    };
    controller
        .borrow_mut()
        .attach_coordinator(Rc::clone(coordinator), id);

    ListRow {
        controller,
        close_effects,
        id,
        clock,
    }
}

impl ListRow {
    /// Pins the trailing panel open with a drag past its width.
    fn pin_trailing_open(&self) {
        let mut controller = self.controller.borrow_mut();
        controller.drag_start(1, &PointerSample::new(250.0, 20.0));
        controller.drag_move(&PointerSample::new(250.0 - TRAILING_WIDTH - 10.0, 20.0));
        drop(controller);
        self.clock.advance(17);
        let mut controller = self.controller.borrow_mut();
        controller.frame();
        controller.drag_end();
    }
}

#[test]
fn starting_a_drag_closes_other_open_rows_synchronously() {
    let coordinator = Rc::new(RowCoordinator::new());
    let row_a = mount_row(&coordinator);
    let row_b = mount_row(&coordinator);

    row_a.pin_trailing_open();
    assert_eq!(row_a.controller.borrow().offset(), -TRAILING_WIDTH);

    // Row B's drag start must close row A before B schedules its first
    // frame, so A can never flash stale open state.
    let effects = row_b
        .controller
        .borrow_mut()
        .drag_start(1, &PointerSample::new(250.0, 20.0));
    assert_eq!(row_a.controller.borrow().offset(), 0.0);
    assert_eq!(row_a.controller.borrow().open_panel(), None);
    assert!(row_a
        .close_effects
        .borrow()
        .iter()
        .any(|e| matches!(e, Effect::Animate(Animation::Return { to, .. }) if *to == 0.0)));
    assert!(effects.iter().any(|e| matches!(e, Effect::RequestFrame)));
}

#[test]
fn the_dragged_row_is_not_asked_to_close_itself() {
    let coordinator = Rc::new(RowCoordinator::new());
    let row = mount_row(&coordinator);
    row.pin_trailing_open();

    // Re-dragging the open row keeps it open (the drag continues from the
    // pinned offset) and no close effects are recorded for it.
    row.controller
        .borrow_mut()
        .drag_start(1, &PointerSample::new(250.0, 20.0));
    assert!(row.close_effects.borrow().is_empty());
    assert_eq!(
        row.controller.borrow().open_panel(),
        Some(PanelEnd::Trailing)
    );
}

#[test]
fn closed_rows_ignore_the_close_request() {
    let coordinator = Rc::new(RowCoordinator::new());
    let row_a = mount_row(&coordinator);
    let row_b = mount_row(&coordinator);

    // Neither row is open; coordinating is a no-op.
    coordinator.drag_started(row_b.id);
    assert!(row_a.close_effects.borrow().is_empty());
    assert_eq!(row_a.controller.borrow().offset(), 0.0);
}

#[test]
fn coordination_is_a_no_op_with_zero_or_one_rows() {
    let coordinator = Rc::new(RowCoordinator::new());
    let ghost = coordinator.register(Rc::new(|| {}));
    coordinator.deregister(ghost);
    coordinator.drag_started(ghost);

    let row = mount_row(&coordinator);
    row.controller
        .borrow_mut()
        .drag_start(1, &PointerSample::new(250.0, 20.0));
    assert!(row.close_effects.borrow().is_empty());
}

#[test]
fn deregistered_rows_are_left_alone() {
    let coordinator = Rc::new(RowCoordinator::new());
    let row_a = mount_row(&coordinator);
    let row_b = mount_row(&coordinator);

    row_a.pin_trailing_open();
    coordinator.deregister(row_a.id);

    row_b
        .controller
        .borrow_mut()
        .drag_start(1, &PointerSample::new(250.0, 20.0));
    assert_eq!(
        row_a.controller.borrow().open_panel(),
        Some(PanelEnd::Trailing)
    );
}
