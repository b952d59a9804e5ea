//! Synchronizer Tests
//!
//! Drives the Synchronizer against an in-memory bridge that answers the same
//! commands as the desktop backend. Replies are computed when a command is
//! invoked; a gate can hold the reply back to simulate a slow backend.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, HashSet, VecDeque};
    use std::convert::Infallible;
    use std::rc::Rc;

    use async_trait::async_trait;
    use serde_json::{json, Value};
    use tokio::sync::oneshot;

    use crate::commands::{GetAllNotes, GetProducts};
    use crate::{
        call, CategoryFilter, Confirmation, GatewayError, InvokeBridge, Note, NoteDraft, NoteSource,
        Product, ProductDraft, ProductSource, Synchronizer, ViewState, ViewStore,
    };

    // ========================
    // In-memory backend
    // ========================

    #[derive(Default)]
    struct MemoryBackend {
        notes: RefCell<Vec<Note>>,
        products: RefCell<Vec<Product>>,
        next_id: Cell<i64>,
        calls: RefCell<Vec<String>>,
        failing: RefCell<HashSet<String>>,
        gates: RefCell<HashMap<String, VecDeque<oneshot::Receiver<()>>>>,
    }

    impl MemoryBackend {
        fn fail(&self, command: &str) {
            self.failing.borrow_mut().insert(command.to_string());
        }

        fn heal(&self, command: &str) {
            self.failing.borrow_mut().remove(command);
        }

        /// Hold back the reply of the next `command` until the sender fires.
        fn gate(&self, command: &str) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.gates
                .borrow_mut()
                .entry(command.to_string())
                .or_default()
                .push_back(rx);
            tx
        }

        fn calls_to(&self, command: &str) -> usize {
            self.calls.borrow().iter().filter(|c| *c == command).count()
        }

        fn assign_id(&self) -> i64 {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            id
        }

        fn seed_note(&self, title: &str, content: &str) -> Note {
            let id = self.assign_id();
            let note = Note {
                id,
                title: title.to_string(),
                content: content.to_string(),
                created_at: format!("2026-10-18 09:00:{id:02}"),
            };
            self.notes.borrow_mut().push(note.clone());
            note
        }

        fn seed_product(&self, name: &str, category: &str, quantity: i32, price: f64) -> Product {
            let id = self.assign_id();
            let product = Product {
                id: format!("prod-{id}"),
                name: name.to_string(),
                category: category.to_string(),
                quantity,
                price,
                created_at: format!("2026-10-18T09:00:{id:02}Z"),
                updated_at: format!("2026-10-18T09:00:{id:02}Z"),
            };
            self.products.borrow_mut().push(product.clone());
            product
        }

        fn dispatch(&self, command: &str, args: Value) -> Result<Value, GatewayError> {
            if self.failing.borrow().contains(command) {
                return Err(GatewayError::Rejected("database is locked".to_string()));
            }

            let reply = match command {
                "get_all_notes" => json!(*self.notes.borrow()),
                "get_note" => {
                    let id = args["id"].as_i64();
                    json!(self.notes.borrow().iter().find(|n| Some(n.id) == id))
                }
                "create_note" => {
                    let payload = &args["payload"];
                    let title = payload["title"].as_str().unwrap_or_default();
                    let content = payload["content"].as_str().unwrap_or_default();
                    if title.is_empty() || content.is_empty() {
                        return Err(GatewayError::Rejected("Invalid input: empty note".into()));
                    }
                    json!(self.seed_note(title, content).id)
                }
                "update_note" => {
                    let payload = &args["payload"];
                    let id = payload["id"].as_i64();
                    let mut notes = self.notes.borrow_mut();
                    let note = notes
                        .iter_mut()
                        .find(|n| Some(n.id) == id)
                        .ok_or_else(|| GatewayError::Rejected("Not found: note".into()))?;
                    note.title = payload["title"].as_str().unwrap_or_default().to_string();
                    note.content = payload["content"].as_str().unwrap_or_default().to_string();
                    Value::Null
                }
                "delete_note" => {
                    let id = args["id"].as_i64();
                    let mut notes = self.notes.borrow_mut();
                    let before = notes.len();
                    notes.retain(|n| Some(n.id) != id);
                    if notes.len() == before {
                        return Err(GatewayError::Rejected("Not found: note".into()));
                    }
                    Value::Null
                }
                "get_products" => json!(*self.products.borrow()),
                "get_one_product" => {
                    let id = args["id"].as_str();
                    json!(self.products.borrow().iter().find(|p| Some(p.id.as_str()) == id))
                }
                "get_products_by_category" => {
                    let category = args["category"].as_str();
                    let matching: Vec<Product> = self
                        .products
                        .borrow()
                        .iter()
                        .filter(|p| Some(p.category.as_str()) == category)
                        .cloned()
                        .collect();
                    json!(matching)
                }
                "get_categories" => {
                    let mut counts: Vec<(String, i32)> = Vec::new();
                    for product in self.products.borrow().iter() {
                        match counts.iter_mut().find(|(name, _)| *name == product.category) {
                            Some((_, count)) => *count += 1,
                            None => counts.push((product.category.clone(), 1)),
                        }
                    }
                    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
                    let categories: Vec<Value> = counts
                        .into_iter()
                        .map(|(name, count)| json!({"name": name, "count": count}))
                        .collect();
                    Value::Array(categories)
                }
                "create_product" => {
                    let quantity = args["quantity"]
                        .as_i64()
                        .ok_or_else(|| GatewayError::Rejected("invalid args `quantity`".into()))?;
                    let price = args["price"]
                        .as_f64()
                        .ok_or_else(|| GatewayError::Rejected("invalid args `price`".into()))?;
                    let product = self.seed_product(
                        args["name"].as_str().unwrap_or_default(),
                        args["category"].as_str().unwrap_or_default(),
                        quantity as i32,
                        price,
                    );
                    json!(product)
                }
                "update_product" => {
                    let id = args["id"].as_str();
                    let mut products = self.products.borrow_mut();
                    let product = products
                        .iter_mut()
                        .find(|p| Some(p.id.as_str()) == id)
                        .ok_or_else(|| GatewayError::Rejected("Product not found".into()))?;
                    product.name = args["name"].as_str().unwrap_or_default().to_string();
                    product.category = args["category"].as_str().unwrap_or_default().to_string();
                    product.quantity = args["quantity"].as_i64().unwrap_or_default() as i32;
                    product.price = args["price"].as_f64().unwrap_or_default();
                    Value::Null
                }
                "delete_product" => {
                    let id = args["id"].as_str();
                    let mut products = self.products.borrow_mut();
                    let before = products.len();
                    products.retain(|p| Some(p.id.as_str()) != id);
                    if products.len() == before {
                        return Err(GatewayError::Rejected("Product not found".into()));
                    }
                    Value::Null
                }
                other => return Err(GatewayError::Transport(format!("unknown command {other}"))),
            };
            Ok(reply)
        }
    }

    #[async_trait(?Send)]
    impl InvokeBridge for MemoryBackend {
        async fn invoke(&self, command: &str, args: Value) -> Result<Value, GatewayError> {
            self.calls.borrow_mut().push(command.to_string());
            let reply = self.dispatch(command, args);
            let gate = self
                .gates
                .borrow_mut()
                .get_mut(command)
                .and_then(VecDeque::pop_front);
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            reply
        }
    }

    // ========================
    // Fixtures
    // ========================

    type NoteState = Rc<RefCell<ViewState<Note, NoteDraft, Infallible>>>;
    type NoteSync = Synchronizer<NoteSource<Rc<MemoryBackend>>, NoteState>;
    type ProductState = Rc<RefCell<ViewState<Product, ProductDraft, crate::Category>>>;
    type ProductSync = Synchronizer<ProductSource<Rc<MemoryBackend>>, ProductState>;

    fn setup_notes() -> (Rc<MemoryBackend>, NoteSync) {
        let backend = Rc::new(MemoryBackend::default());
        let sync = Synchronizer::new(NoteSource::new(backend.clone()), NoteState::default());
        (backend, sync)
    }

    fn setup_products() -> (Rc<MemoryBackend>, ProductSync) {
        let backend = Rc::new(MemoryBackend::default());
        backend.seed_product("Laptop", "Electronics", 3, 999.0);
        backend.seed_product("Headphones", "Electronics", 10, 59.5);
        backend.seed_product("Hammer", "Tools", 7, 12.25);
        let sync = Synchronizer::new(ProductSource::new(backend.clone()), ProductState::default());
        (backend, sync)
    }

    // ========================
    // Notes
    // ========================

    #[tokio::test]
    async fn test_create_note_appears_after_reload() {
        let (backend, sync) = setup_notes();

        sync.create(NoteDraft::new("A", "B")).await.expect("create failed");

        let state = sync.store().snapshot();
        assert_eq!(state.records.len(), 1);
        let note = &state.records[0];
        assert_eq!(note.title, "A");
        assert_eq!(note.content, "B");
        assert!(note.id > 0);
        assert!(!note.created_at.is_empty());
        assert_eq!(state.draft, NoteDraft::default());
        assert_eq!(state.error, None);
        assert!(!state.loading);

        // Full-reload consistency: the cache equals an independent listing.
        let listed = call(&*backend, &GetAllNotes).await.unwrap();
        assert_eq!(state.records, listed);
        assert_eq!(backend.calls_to("create_note"), 1);
        assert_eq!(backend.calls_to("get_all_notes"), 2);
    }

    #[tokio::test]
    async fn test_update_note_leaves_edit_mode() {
        let (backend, sync) = setup_notes();
        let note = backend.seed_note("Draft", "first body");
        sync.list_all().await.unwrap();

        sync.start_editing(&note);
        sync.edit_draft(|d| d.title = "Final".to_string());
        assert!(sync.store().with(|s| s.editing));

        sync.submit().await.expect("update failed");

        let state = sync.store().snapshot();
        assert_eq!(state.records[0].title, "Final");
        assert_eq!(state.records[0].content, "first body");
        assert_eq!(state.focused, None);
        assert!(!state.editing);
        assert_eq!(state.draft, NoteDraft::default());
        assert_eq!(state.records, call(&*backend, &GetAllNotes).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_without_confirmation_never_calls_delete() {
        let (backend, sync) = setup_notes();
        let note = backend.seed_note("Keep", "me");
        sync.list_all().await.unwrap();

        assert_eq!(sync.remove(note.id, Confirmation::Declined).await, Ok(false));

        sync.request_remove(note.id);
        assert!(sync.store().with(|s| s.is_pending_delete(&note.id)));
        assert_eq!(sync.confirm_remove(Confirmation::Declined).await, Ok(false));

        assert_eq!(backend.calls_to("delete_note"), 0);
        let state = sync.store().snapshot();
        assert_eq!(state.pending_delete, None);
        assert_eq!(state.records.len(), 1);
    }

    #[tokio::test]
    async fn test_confirmed_remove_reloads_and_clears_focus() {
        let (backend, sync) = setup_notes();
        let doomed = backend.seed_note("Old", "stale");
        backend.seed_note("New", "fresh");
        sync.list_all().await.unwrap();
        sync.fetch_one(doomed.id).await.unwrap();

        sync.request_remove(doomed.id);
        assert_eq!(sync.confirm_remove(Confirmation::Confirmed).await, Ok(true));

        let state = sync.store().snapshot();
        assert_eq!(backend.calls_to("delete_note"), 1);
        assert_eq!(state.focused, None);
        assert_eq!(state.pending_delete, None);
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].title, "New");
        assert_eq!(state.records, call(&*backend, &GetAllNotes).await.unwrap());
    }

    #[tokio::test]
    async fn test_deleting_edited_record_discards_draft() {
        let (backend, sync) = setup_notes();
        let note = backend.seed_note("Editing", "body");
        sync.list_all().await.unwrap();
        sync.start_editing(&note);

        sync.remove(note.id, Confirmation::Confirmed).await.unwrap();

        let state = sync.store().snapshot();
        assert!(!state.editing);
        assert_eq!(state.draft, NoteDraft::default());
        assert!(state.records.is_empty());
    }

    #[tokio::test]
    async fn test_deleting_other_record_keeps_edit_in_progress() {
        let (backend, sync) = setup_notes();
        let edited = backend.seed_note("Edited", "body");
        let other = backend.seed_note("Other", "body");
        sync.list_all().await.unwrap();
        sync.start_editing(&edited);
        sync.edit_draft(|d| d.title = "Changed".to_string());

        sync.remove(other.id, Confirmation::Confirmed).await.unwrap();

        let state = sync.store().snapshot();
        assert!(state.editing);
        assert_eq!(state.focused.as_ref().map(|n| n.id), Some(edited.id));
        assert_eq!(state.draft.title, "Changed");

        sync.submit().await.expect("update failed");

        assert_eq!(backend.calls_to("update_note"), 1);
        let state = sync.store().snapshot();
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].title, "Changed");
        assert!(!state.editing);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_edit_submit_without_focus_reports_error() {
        let (backend, sync) = setup_notes();
        sync.store().update(|s| {
            s.editing = true;
            s.focused = None;
        });

        let err = sync.submit().await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Error updating note: no record is selected for editing"
        );
        assert_eq!(backend.calls_to("update_note"), 0);
        assert_eq!(backend.calls_to("create_note"), 0);
        let state = sync.store().snapshot();
        assert_eq!(state.error.as_deref(), Some(err.to_string().as_str()));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_fetch_missing_note_keeps_focus() {
        let (backend, sync) = setup_notes();
        let note = backend.seed_note("Focus", "me");

        let fetched = sync.fetch_one(note.id).await.unwrap();
        assert_eq!(fetched.as_ref(), Some(&note));
        assert_eq!(sync.store().with(|s| s.focused.clone()), Some(note.clone()));

        assert_eq!(sync.fetch_one(404).await, Ok(None));
        let state = sync.store().snapshot();
        assert_eq!(state.focused, Some(note));
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_failed_update_preserves_records_and_focus() {
        let (backend, sync) = setup_notes();
        let note = backend.seed_note("Stable", "body");
        sync.list_all().await.unwrap();
        sync.start_editing(&note);
        let before = sync.store().snapshot();

        backend.fail("update_note");
        let err = sync
            .update(note.id, NoteDraft::new("Changed", "body"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error updating note: database is locked");

        let after = sync.store().snapshot();
        assert_eq!(after.records, before.records);
        assert_eq!(after.focused, before.focused);
        assert!(after.editing);
        assert!(!after.loading);
        assert_eq!(
            after.error.as_deref(),
            Some("Error updating note: database is locked")
        );
    }

    #[tokio::test]
    async fn test_failed_reload_after_create_keeps_draft_and_records() {
        let (backend, sync) = setup_notes();
        backend.seed_note("Existing", "body");
        sync.list_all().await.unwrap();

        backend.fail("get_all_notes");
        let draft = NoteDraft::new("Second", "body");
        sync.edit_draft(|d| *d = draft.clone());
        let err = sync.create(draft.clone()).await.unwrap_err();
        assert_eq!(err.context, "Error creating note");

        let state = sync.store().snapshot();
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.draft, draft);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_error_replaced_then_cleared_by_success() {
        let (backend, sync) = setup_notes();

        backend.fail("get_all_notes");
        sync.list_all().await.unwrap_err();
        assert_eq!(
            sync.store().with(|s| s.error.clone()).as_deref(),
            Some("Failed to load notes: database is locked")
        );

        let err = sync.create(NoteDraft::new("", "body")).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            sync.store().with(|s| s.error.clone()).as_deref(),
            Some("Error creating note: title is required")
        );
        assert_eq!(backend.calls_to("create_note"), 0);

        backend.heal("get_all_notes");
        sync.list_all().await.unwrap();
        assert_eq!(sync.store().with(|s| s.error.clone()), None);
    }

    #[tokio::test]
    async fn test_cancel_and_dismiss_clear_error() {
        let (backend, sync) = setup_notes();
        let note = backend.seed_note("N", "c");
        backend.fail("get_note");
        sync.fetch_one(note.id).await.unwrap_err();
        sync.dismiss_error();
        assert_eq!(sync.store().with(|s| s.error.clone()), None);

        sync.start_editing(&note);
        sync.fetch_one(note.id).await.unwrap_err();
        sync.cancel_editing();
        let state = sync.store().snapshot();
        assert_eq!(state.error, None);
        assert_eq!(state.focused, None);
        assert!(!state.editing);
    }

    #[tokio::test]
    async fn test_loading_spans_the_gateway_call() {
        let (backend, sync) = setup_notes();
        backend.seed_note("Slow", "reply");
        let release = backend.gate("get_all_notes");

        assert!(!sync.store().with(|s| s.loading));
        let (result, ()) = futures::join!(sync.list_all(), async {
            assert!(sync.store().with(|s| s.loading));
            assert_eq!(sync.in_flight(), 1);
            release.send(()).unwrap();
        });

        assert_eq!(result.unwrap().records.len(), 1);
        assert!(!sync.store().with(|s| s.loading));
        assert_eq!(sync.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_stale_reload_does_not_overwrite_newer_one() {
        let (backend, sync) = setup_notes();
        backend.seed_note("A", "first");
        let release = backend.gate("get_all_notes");

        let (stale, ()) = futures::join!(sync.list_all(), async {
            // A second reload starts later but resolves first.
            backend.seed_note("B", "second");
            let fresh = sync.list_all().await.unwrap();
            assert_eq!(fresh.records.len(), 2);
            assert!(fresh.applied);
            assert!(sync.store().with(|s| s.loading));
            release.send(()).unwrap();
        });

        // The late reply still reaches its caller but not the store.
        let stale = stale.unwrap();
        assert_eq!(stale.records.len(), 1);
        assert!(!stale.applied);
        let state = sync.store().snapshot();
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.records, call(&*backend, &GetAllNotes).await.unwrap());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_overlapping_creates_keep_latest_reload() {
        let (backend, sync) = setup_notes();
        // Holds the reload that follows the first create.
        let release = backend.gate("get_all_notes");

        let (first, ()) = futures::join!(sync.create(NoteDraft::new("A", "first")), async {
            sync.create(NoteDraft::new("B", "second"))
                .await
                .expect("second create failed");
            assert_eq!(sync.store().with(|s| s.records.len()), 2);
            release.send(()).unwrap();
        });

        first.expect("first create failed");
        assert_eq!(backend.calls_to("create_note"), 2);
        assert_eq!(backend.calls_to("get_all_notes"), 2);
        // The first reload resolved last and saw only "A"; it is dropped.
        let state = sync.store().snapshot();
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.records, call(&*backend, &GetAllNotes).await.unwrap());
        assert_eq!(state.draft, NoteDraft::default());
        assert!(!state.loading);
        assert_eq!(sync.in_flight(), 0);
    }

    // ========================
    // Products
    // ========================

    #[tokio::test]
    async fn test_stale_filtered_reply_is_dropped() {
        let (backend, sync) = setup_products();
        let release = backend.gate("get_products_by_category");

        let (electronics, ()) = futures::join!(
            sync.list_filtered(CategoryFilter::from("Electronics")),
            async {
                let tools = sync
                    .list_filtered(CategoryFilter::from("Tools"))
                    .await
                    .unwrap();
                assert!(tools.applied);
                release.send(()).unwrap();
            }
        );

        let electronics = electronics.unwrap();
        assert_eq!(electronics.records.len(), 2);
        assert!(!electronics.applied);
        let state = sync.store().snapshot();
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].name, "Hammer");
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_filtered_reply_older_than_full_list_is_dropped() {
        let (backend, sync) = setup_products();
        let release = backend.gate("get_products_by_category");

        let (electronics, ()) = futures::join!(
            sync.list_filtered(CategoryFilter::from("Electronics")),
            async {
                let everything = sync.list_all().await.unwrap();
                assert!(everything.applied);
                release.send(()).unwrap();
            }
        );

        assert!(!electronics.unwrap().applied);
        let state = sync.store().snapshot();
        assert_eq!(state.records, call(&*backend, &GetProducts).await.unwrap());
    }

    #[tokio::test]
    async fn test_filter_by_category_and_all_sentinel() {
        let (backend, sync) = setup_products();

        let electronics = sync
            .list_filtered(CategoryFilter::from("Electronics"))
            .await
            .unwrap();
        assert_eq!(electronics.records.len(), 2);
        assert!(electronics.applied);
        assert!(sync
            .store()
            .with(|s| s.records.iter().all(|p| p.category == "Electronics")));
        assert_eq!(backend.calls_to("get_products_by_category"), 1);

        let everything = sync.list_filtered(CategoryFilter::from("all")).await.unwrap();
        assert_eq!(everything.records.len(), 3);
        assert_eq!(sync.store().with(|s| s.records.len()), 3);
        assert_eq!(backend.calls_to("get_products"), 1);
        assert_eq!(backend.calls_to("get_products_by_category"), 1);
    }

    #[tokio::test]
    async fn test_malformed_quantity_surfaces_as_error() {
        let (backend, sync) = setup_products();
        sync.list_all().await.unwrap();
        let target = sync.store().with(|s| s.records[0].clone());
        let before = sync.store().snapshot();

        let result = sync
            .update(target.id.clone(), ProductDraft::new("Laptop", "Electronics", "abc", "999"))
            .await;

        let err = result.unwrap_err();
        assert!(err.is_validation());
        let after = sync.store().snapshot();
        assert_eq!(
            after.error.as_deref(),
            Some("Error updating product: quantity must be a whole number, got \"abc\"")
        );
        assert_eq!(after.records, before.records);
        assert!(!after.loading);
        assert_eq!(backend.calls_to("update_product"), 0);
    }

    #[tokio::test]
    async fn test_update_product_reloads_full_list() {
        let (backend, sync) = setup_products();
        sync.list_filtered(CategoryFilter::from("Tools")).await.unwrap();
        let hammer = sync.store().with(|s| s.records[0].clone());

        sync.start_editing(&hammer);
        sync.edit_draft(|d| d.quantity = "8".to_string());
        sync.submit().await.unwrap();

        let state = sync.store().snapshot();
        assert_eq!(state.records.len(), 3);
        let updated = state.records.iter().find(|p| p.id == hammer.id).unwrap();
        assert_eq!(updated.quantity, 8);
        assert_eq!(state.records, call(&*backend, &GetProducts).await.unwrap());
    }

    #[tokio::test]
    async fn test_refresh_loads_records_and_categories() {
        let (_backend, sync) = setup_products();

        sync.refresh().await.unwrap();

        let state = sync.store().snapshot();
        assert_eq!(state.records.len(), 3);
        assert_eq!(state.summaries.len(), 2);
        assert_eq!(state.summaries[0].name, "Electronics");
        assert_eq!(state.summaries[0].count, 2);
    }

    #[tokio::test]
    async fn test_refresh_partial_failure_is_one_generic_error() {
        let (backend, sync) = setup_products();
        sync.refresh().await.unwrap();
        backend.seed_product("Saw", "Tools", 1, 20.0);

        backend.fail("get_categories");
        let err = sync.refresh().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load data: database is locked");

        // Neither half of the composite load was applied.
        let state = sync.store().snapshot();
        assert_eq!(state.records.len(), 3);
        assert_eq!(state.summaries.len(), 2);
    }

    #[tokio::test]
    async fn test_create_product_refreshes_categories() {
        let (backend, sync) = setup_products();
        sync.refresh().await.unwrap();

        sync.create(ProductDraft::new("Glue", "Supplies", "4", "3.75"))
            .await
            .unwrap();

        let state = sync.store().snapshot();
        assert_eq!(state.records.len(), 4);
        assert!(state.summaries.iter().any(|c| c.name == "Supplies" && c.count == 1));
        assert_eq!(backend.calls_to("create_product"), 1);
    }

    #[tokio::test]
    async fn test_backend_rejection_surfaces_verbatim() {
        let (backend, sync) = setup_products();
        sync.list_all().await.unwrap();

        let err = sync
            .remove("prod-missing".to_string(), Confirmation::Confirmed)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error deleting product: Product not found");
        assert_eq!(backend.calls_to("delete_product"), 1);
        assert_eq!(sync.store().with(|s| s.records.len()), 3);
    }
}
