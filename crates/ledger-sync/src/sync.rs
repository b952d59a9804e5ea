//! Synchronizer
//!
//! Mediates between user gestures and gateway commands. Every remote
//! operation runs the same protocol:
//!
//! ```text
//! begin (loading, clear error) -> invoke -> success: apply data
//!                                      -> failure: set error, keep records/focus
//!                 -> end (loading cleared once nothing is in flight)
//! ```
//!
//! and also hands its outcome back to the caller as a `SyncResult`.
//!
//! Mutations never patch `records`; they trigger a full reload, and the form
//! and focus are only reset once that reload has landed. Each reload
//! takes a ticket, and a reply older than the last applied reload is dropped,
//! so a slow stale list cannot overwrite a newer one.

use std::cell::Cell;

use tracing::{debug, warn};

use crate::draft::{Draft, ValidationError};
use crate::error::{Action, SyncError, SyncErrorKind, SyncResult};
use crate::source::{FilterCriterion, IdOf, RecordSource};
use crate::store::ViewStore;

/// Decision taken by the user on a delete prompt, passed as data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// Reply of a list operation
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<R> {
    pub records: Vec<R>,
    /// False when a newer reload had already landed and this reply was dropped
    pub applied: bool,
}

pub struct Synchronizer<S, V> {
    source: S,
    store: V,
    in_flight: Cell<usize>,
    reloads_issued: Cell<u64>,
    reloads_applied: Cell<u64>,
}

impl<S, V> Synchronizer<S, V>
where
    S: RecordSource,
    V: ViewStore<S::Record, S::Draft, S::Summary>,
{
    pub fn new(source: S, store: V) -> Self {
        Self {
            source,
            store,
            in_flight: Cell::new(0),
            reloads_issued: Cell::new(0),
            reloads_applied: Cell::new(0),
        }
    }

    pub fn store(&self) -> &V {
        &self.store
    }

    /// Number of operations currently awaiting the gateway
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    // ========================
    // Remote operations
    // ========================

    /// Replace `records` with the full list.
    pub async fn list_all(&self) -> SyncResult<Listing<S::Record>> {
        self.begin();
        let result = self.reload_records().await;
        self.end(Action::Load, result)
    }

    /// Replace `records` with the subset matching `filter`.
    ///
    /// The "all" criterion is exactly `list_all`.
    pub async fn list_filtered(&self, filter: S::Filter) -> SyncResult<Listing<S::Record>> {
        if filter.is_all() {
            return self.list_all().await;
        }

        self.begin();
        let ticket = self.issue_ticket();
        let result = match self.source.list_filtered(&filter).await {
            Ok(records) => {
                let applied = self.apply_records(ticket, records.clone());
                Ok(Listing { records, applied })
            }
            Err(e) => Err(e.into()),
        };
        self.end(Action::Load, result)
    }

    /// Composite load of records and summaries.
    ///
    /// A failure in either call surfaces as one generic message.
    pub async fn refresh(&self) -> SyncResult<()> {
        self.begin();
        let result = self.reload_all().await;
        self.end(Action::Refresh, result)
    }

    /// Focus a single record. An absent record leaves the focus untouched.
    pub async fn fetch_one(&self, id: IdOf<S>) -> SyncResult<Option<S::Record>> {
        self.begin();
        let result = match self.source.fetch_one(&id).await {
            Ok(Some(record)) => {
                self.store.update(|s| s.focused = Some(record.clone()));
                Ok(Some(record))
            }
            Ok(None) => {
                debug!(%id, "fetch returned no {}", S::NOUN);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        };
        self.end(Action::Fetch, result)
    }

    /// Validate `draft`, create the record, reload, then reset the form.
    pub async fn create(&self, draft: S::Draft) -> SyncResult<()> {
        self.begin();
        let result = self.create_inner(draft).await;
        self.end(Action::Create, result)
    }

    async fn create_inner(&self, draft: S::Draft) -> Result<(), SyncErrorKind> {
        let payload = draft.validate()?;
        self.source.create(payload).await?;
        self.reload_all().await?;
        self.store.update(|s| s.draft = S::Draft::default());
        Ok(())
    }

    /// Validate `draft`, update record `id`, reload, then leave edit mode.
    pub async fn update(&self, id: IdOf<S>, draft: S::Draft) -> SyncResult<()> {
        self.begin();
        let result = self.update_inner(id, draft).await;
        self.end(Action::Update, result)
    }

    async fn update_inner(&self, id: IdOf<S>, draft: S::Draft) -> Result<(), SyncErrorKind> {
        let payload = draft.validate()?;
        self.source.update(&id, payload).await?;
        self.reload_all().await?;
        self.store.update(|s| {
            s.draft = S::Draft::default();
            s.focused = None;
            s.editing = false;
        });
        Ok(())
    }

    /// Delete record `id` if and only if the user confirmed.
    ///
    /// Returns whether the delete command was issued and succeeded. An edit
    /// in progress on another record keeps its focus and draft.
    pub async fn remove(&self, id: IdOf<S>, decision: Confirmation) -> SyncResult<bool> {
        if decision == Confirmation::Declined {
            debug!(%id, "delete declined");
            self.store.update(|s| {
                if s.is_pending_delete(&id) {
                    s.pending_delete = None;
                }
            });
            return Ok(false);
        }

        self.begin();
        // The prompt is answered whatever the outcome.
        self.store.update(|s| {
            if s.is_pending_delete(&id) {
                s.pending_delete = None;
            }
        });
        let result = self.remove_inner(id).await;
        self.end(Action::Delete, result)
    }

    async fn remove_inner(&self, id: IdOf<S>) -> Result<bool, SyncErrorKind> {
        self.source.delete(&id).await?;
        self.reload_all().await?;
        self.store.update(|s| {
            let mirrored = s.focused_id().as_ref() == Some(&id);
            if mirrored {
                s.draft = S::Draft::default();
                s.editing = false;
                s.focused = None;
            } else if !s.editing {
                s.focused = None;
            }
        });
        Ok(true)
    }

    /// First phase of a delete: remember which record awaits confirmation.
    pub fn request_remove(&self, id: IdOf<S>) {
        self.store.update(|s| s.pending_delete = Some(id));
    }

    /// Second phase of a delete: act on the pending request, if any.
    pub async fn confirm_remove(&self, decision: Confirmation) -> SyncResult<bool> {
        let pending = self.store.with(|s| s.pending_delete.clone());
        match pending {
            Some(id) => self.remove(id, decision).await,
            None => Ok(false),
        }
    }

    /// Route a form submission to `create` or `update` depending on edit mode.
    pub async fn submit(&self) -> SyncResult<()> {
        let (draft, editing, focused) =
            self.store
                .with(|s| (s.draft.clone(), s.editing, s.focused_id()));
        match (editing, focused) {
            (false, _) => self.create(draft).await,
            (true, Some(id)) => self.update(id, draft).await,
            (true, None) => {
                self.begin();
                self.end(Action::Update, Err(ValidationError::NothingSelected.into()))
            }
        }
    }

    // ========================
    // Local state helpers
    // ========================

    /// Open the form in edit mode for `record`.
    pub fn start_editing(&self, record: &S::Record) {
        let draft = S::Draft::from_record(record);
        self.store.update(|s| {
            s.focused = Some(record.clone());
            s.draft = draft;
            s.editing = true;
        });
    }

    pub fn cancel_editing(&self) {
        self.store.update(|s| {
            s.draft = S::Draft::default();
            s.focused = None;
            s.editing = false;
            s.error = None;
        });
    }

    pub fn edit_draft(&self, f: impl FnOnce(&mut S::Draft)) {
        self.store.update(|s| f(&mut s.draft));
    }

    /// Close the detail overlay.
    pub fn close_detail(&self) {
        self.store.update(|s| {
            if !s.editing {
                s.focused = None;
            }
        });
    }

    pub fn dismiss_error(&self) {
        self.store.update(|s| s.error = None);
    }

    // ========================
    // Protocol
    // ========================

    fn begin(&self) {
        self.in_flight.set(self.in_flight.get() + 1);
        self.store.update(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn end<T>(&self, action: Action, result: Result<T, SyncErrorKind>) -> SyncResult<T> {
        let remaining = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(remaining);
        let loading = remaining > 0;

        match result {
            Ok(value) => {
                self.store.update(|s| {
                    s.loading = loading;
                    s.error = None;
                });
                Ok(value)
            }
            Err(kind) => {
                let err = SyncError::new(action, S::NOUN, S::PLURAL, kind);
                warn!(error = %err, "{} operation failed", S::NOUN);
                let message = err.to_string();
                self.store.update(|s| {
                    s.loading = loading;
                    s.error = Some(message);
                });
                Err(err)
            }
        }
    }

    fn issue_ticket(&self) -> u64 {
        let ticket = self.reloads_issued.get() + 1;
        self.reloads_issued.set(ticket);
        ticket
    }

    /// Apply a reload reply unless a newer one has already landed.
    fn apply_records(&self, ticket: u64, records: Vec<S::Record>) -> bool {
        if ticket < self.reloads_applied.get() {
            debug!(ticket, applied = self.reloads_applied.get(), "dropping stale reload");
            return false;
        }
        self.reloads_applied.set(ticket);
        self.store.update(|s| s.records = records);
        true
    }

    async fn reload_records(&self) -> Result<Listing<S::Record>, SyncErrorKind> {
        let ticket = self.issue_ticket();
        let records = self.source.list_all().await?;
        let applied = self.apply_records(ticket, records.clone());
        Ok(Listing { records, applied })
    }

    /// Full reload of records and summaries. Nothing is applied unless both
    /// calls succeed.
    async fn reload_all(&self) -> Result<(), SyncErrorKind> {
        let ticket = self.issue_ticket();
        let records = self.source.list_all().await?;
        let summaries = self.source.summaries().await?;
        if self.apply_records(ticket, records) {
            self.store.update(|s| s.summaries = summaries);
        }
        Ok(())
    }
}
