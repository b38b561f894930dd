//! Cross-row coordination: at most one row's action panel is
//! interactively open at a time.
//!
//! Rows register a close-me handle at mount and deregister at unmount.
//! When any row's drag starts, every other registered row is asked to
//! close, synchronously, before the new drag's first frame runs. Handles
//! are expected to no-op when their row is already closed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rustc_hash::FxHashMap;

/// Registration handle for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

/// Registry of close-me handles for the rows of one list. Owned by the
/// list and shared with its rows via `Rc`; no global state.
#[derive(Default)]
pub struct RowCoordinator {
    rows: RefCell<FxHashMap<u64, Rc<dyn Fn()>>>,
    next_id: Cell<u64>,
}

impl RowCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a row's close-me handle and returns its id.
    pub fn register(&self, close: Rc<dyn Fn()>) -> RowId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.rows.borrow_mut().insert(id, close);
        RowId(id)
    }

    /// Removes a row; its handle will never be invoked again.
    pub fn deregister(&self, id: RowId) {
        self.rows.borrow_mut().remove(&id.0);
    }

    /// A drag started on `active`; closes every other registered row.
    /// Safe with zero or one registered rows. Handles are collected before
    /// invocation so one may register or deregister rows reentrantly.
    pub fn drag_started(&self, active: RowId) {
        let handles: Vec<Rc<dyn Fn()>> = self
            .rows
            .borrow()
            .iter()
            .filter(|(id, _)| **id != active.0)
            .map(|(_, handle)| Rc::clone(handle))
            .collect();
        if !handles.is_empty() {
            log::debug!("drag started on row {:?}, closing {} other row(s)", active, handles.len());
        }
        for handle in handles {
            handle();
        }
    }
}

impl std::fmt::Debug for RowCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowCoordinator")
            .field("rows", &self.rows.borrow().len())
            .finish()
    }
}
