//! View-State Store
//!
//! The client-held snapshot a presentation layer renders. Only the
//! Synchronizer writes to it, and `records` is only ever replaced wholesale.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Record;
use crate::source::RecordSource;

/// Snapshot of one application's view state
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<R: Record, D, C> {
    /// Most recently fetched record list
    pub records: Vec<R>,
    /// Record under detail/edit focus
    pub focused: Option<R>,
    /// Active form fields
    pub draft: D,
    /// Form is editing `focused` rather than creating
    pub editing: bool,
    /// At least one operation is in flight
    pub loading: bool,
    /// Last failure message, replaced on every failure
    pub error: Option<String>,
    /// Record awaiting delete confirmation
    pub pending_delete: Option<R::Id>,
    /// Backend-computed summaries (category counts)
    pub summaries: Vec<C>,
}

impl<R: Record, D: Default, C> Default for ViewState<R, D, C> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            focused: None,
            draft: D::default(),
            editing: false,
            loading: false,
            error: None,
            pending_delete: None,
            summaries: Vec::new(),
        }
    }
}

impl<R: Record, D, C> ViewState<R, D, C> {
    pub fn is_pending_delete(&self, id: &R::Id) -> bool {
        self.pending_delete.as_ref() == Some(id)
    }

    pub fn focused_id(&self) -> Option<R::Id> {
        self.focused.as_ref().map(Record::id)
    }
}

pub type StateOf<S> = ViewState<
    <S as RecordSource>::Record,
    <S as RecordSource>::Draft,
    <S as RecordSource>::Summary,
>;

/// Where the Synchronizer keeps its view state.
///
/// Tests use `Rc<RefCell<_>>`; the UI wraps a reactive signal.
pub trait ViewStore<R: Record, D, C> {
    fn update(&self, f: impl FnOnce(&mut ViewState<R, D, C>));

    fn with<T>(&self, f: impl FnOnce(&ViewState<R, D, C>) -> T) -> T;

    fn snapshot(&self) -> ViewState<R, D, C>
    where
        D: Clone,
        C: Clone,
    {
        self.with(Clone::clone)
    }
}

impl<R: Record, D, C> ViewStore<R, D, C> for Rc<RefCell<ViewState<R, D, C>>> {
    fn update(&self, f: impl FnOnce(&mut ViewState<R, D, C>)) {
        f(&mut self.borrow_mut());
    }

    fn with<T>(&self, f: impl FnOnce(&ViewState<R, D, C>) -> T) -> T {
        f(&self.borrow())
    }
}
