//! Reactive view-state store
//!
//! Puts each app's `ViewState` in an `RwSignal` so components re-render
//! from it, and keeps the app's Synchronizer in a local `StoredValue` so
//! a `Copy` handle can be captured by event handlers.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use ledger_sync::{
    Record, RecordSource, StateOf, SyncResult, Synchronizer, ViewState, ViewStore,
};

/// `ViewStore` over a Leptos signal
pub struct SignalStore<R: Record, D, C>(RwSignal<ViewState<R, D, C>>)
where
    ViewState<R, D, C>: Send + Sync;

impl<R: Record, D: 'static, C: 'static> ViewStore<R, D, C> for SignalStore<R, D, C>
where
    ViewState<R, D, C>: Send + Sync,
{
    fn update(&self, f: impl FnOnce(&mut ViewState<R, D, C>)) {
        self.0.update(f);
    }

    fn with<T>(&self, f: impl FnOnce(&ViewState<R, D, C>) -> T) -> T {
        self.0.with_untracked(f)
    }
}

pub type StoreOf<S> = SignalStore<
    <S as RecordSource>::Record,
    <S as RecordSource>::Draft,
    <S as RecordSource>::Summary,
>;

pub type SyncOf<S> = Synchronizer<S, StoreOf<S>>;

/// Copyable handle on one app's Synchronizer and its state signal
pub struct SyncHandle<S>
where
    S: RecordSource + 'static,
    StateOf<S>: Send + Sync,
{
    sync: StoredValue<Rc<SyncOf<S>>, LocalStorage>,
    state: RwSignal<StateOf<S>>,
    label: &'static str,
}

impl<S> Clone for SyncHandle<S>
where
    S: RecordSource + 'static,
    StateOf<S>: Send + Sync,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SyncHandle<S>
where
    S: RecordSource + 'static,
    StateOf<S>: Send + Sync,
{
}

impl<S> SyncHandle<S>
where
    S: RecordSource + 'static,
    StateOf<S>: Send + Sync,
{
    pub fn new(label: &'static str, source: S) -> Self {
        let state = RwSignal::new(StateOf::<S>::default());
        let sync = Rc::new(Synchronizer::new(source, SignalStore(state)));
        Self {
            sync: StoredValue::new_local(sync),
            state,
            label,
        }
    }

    /// Read-only view for rendering
    pub fn state(&self) -> RwSignal<StateOf<S>> {
        self.state
    }

    /// Run a synchronous Synchronizer helper.
    pub fn local<T>(&self, f: impl FnOnce(&SyncOf<S>) -> T) -> T {
        self.sync.with_value(|sync| f(sync.as_ref()))
    }

    /// Spawn a remote operation. Failures are already in the store; they
    /// are only logged here.
    pub fn run<T, F, Fut>(&self, f: F)
    where
        F: FnOnce(Rc<SyncOf<S>>) -> Fut,
        Fut: Future<Output = SyncResult<T>> + 'static,
    {
        let sync = self.sync.get_value();
        let label = self.label;
        let task = f(sync);
        spawn_local(async move {
            if let Err(e) = task.await {
                web_sys::console::warn_1(&format!("[{}] {}", label, e).into());
            }
        });
    }
}
