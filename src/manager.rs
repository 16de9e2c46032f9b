//! Effect Runner
//!
//! Executes the requests the session state asks for and turns the result into
//! a [`Completion`]. Each effect resumes exactly once.

use crate::api::ItemStoreApi;
use crate::session::{Completion, Effect};

/// Run one effect against the store
pub async fn perform(api: &dyn ItemStoreApi, effect: Effect) -> Completion {
    match effect {
        Effect::ListItems => {
            log::debug!("[API] Listing items");
            Completion::Listed(api.list_items().await)
        }
        Effect::CreateItem(new_item) => {
            log::debug!("[API] Creating item '{}'", new_item.name());
            Completion::Created(api.create_item(&new_item).await)
        }
        Effect::DeleteItem(id) => {
            log::debug!("[API] Deleting item {}", id);
            Completion::Deleted(id, api.delete_item(id).await)
        }
        Effect::CheckHealth => {
            log::debug!("[API] Checking health");
            Completion::HealthChecked(api.check_health().await)
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::memory::{Call, MemoryItemStore};
    use crate::api::{ApiError, Operation};
    use crate::models::{HealthStatus, Item, ItemId};
    use crate::session::{FormField, Intent, ListView, SessionState};

    /// Dispatch and wait for the request, holding the state throughout
    async fn drive(state: &mut SessionState, api: &dyn ItemStoreApi, intent: Intent) {
        if let Some(effect) = state.dispatch(intent) {
            let completion = perform(api, effect).await;
            state.complete(completion);
        }
    }

    fn item(id: ItemId, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            description: None,
        }
    }

    async fn create(state: &mut SessionState, api: &MemoryItemStore, name: &str, description: &str) {
        state.form.set(FormField::Name, name.to_string());
        state.form.set(FormField::Description, description.to_string());
        drive(state, api, Intent::SubmitCreate).await;
    }

    #[tokio::test]
    async fn test_scenario_pen_and_notebook() {
        let api = MemoryItemStore::with_items(vec![item(1, "Pen")]);
        let mut state = SessionState::new();

        drive(&mut state, &api, Intent::Load).await;
        match state.list_view() {
            ListView::Items(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].name, "Pen");
                assert_eq!(items[0].description_line(), None);
            }
            other => panic!("expected items, got {:?}", other),
        }

        create(&mut state, &api, "Notebook", "").await;
        assert_eq!(state.items, vec![item(1, "Pen"), item(2, "Notebook")]);
        assert!(state.form.name.is_empty());
        assert!(state.form.description.is_empty());

        drive(&mut state, &api, Intent::RequestDelete(1)).await;
        drive(&mut state, &api, Intent::ConfirmDelete).await;
        assert_eq!(state.items, vec![item(2, "Notebook")]);

        let calls_before = api.calls().len();
        create(&mut state, &api, "  ", "").await;
        assert_eq!(api.calls().len(), calls_before);
        assert_eq!(state.error.as_deref(), Some("Item name is required"));
        assert_eq!(state.items.len(), 1);
    }

    #[tokio::test]
    async fn test_each_create_adds_exactly_one() {
        let api = MemoryItemStore::default();
        let mut state = SessionState::new();
        drive(&mut state, &api, Intent::Load).await;

        let names = ["Pen", "  Cup", "Box  ", "\tLamp\n"];
        for (i, name) in names.iter().enumerate() {
            create(&mut state, &api, name, "note").await;
            assert_eq!(state.items.len(), i + 1);
            assert!(state.items.iter().any(|it| it.name == name.trim()));
        }
        assert_eq!(state.items, api.items());
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let api = MemoryItemStore::with_items(vec![item(1, "Pen"), item(2, "Cup")]);
        let mut state = SessionState::new();
        drive(&mut state, &api, Intent::Load).await;

        drive(&mut state, &api, Intent::RequestDelete(2)).await;
        drive(&mut state, &api, Intent::CancelDelete).await;
        drive(&mut state, &api, Intent::ConfirmDelete).await;

        assert_eq!(api.calls(), vec![Call::List]);
        assert_eq!(state.items.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_each_item() {
        let items: Vec<_> = (1..=4).map(|i| item(i, &format!("Item {}", i))).collect();
        let api = MemoryItemStore::with_items(items.clone());
        let mut state = SessionState::new();
        drive(&mut state, &api, Intent::Load).await;

        for target in &items {
            let before = state.items.len();
            drive(&mut state, &api, Intent::RequestDelete(target.id)).await;
            drive(&mut state, &api, Intent::ConfirmDelete).await;
            assert_eq!(state.items.len(), before - 1);
            assert!(!state.contains(target.id));
        }
        assert!(state.items.is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_null_description() {
        let api = MemoryItemStore::default();
        let mut state = SessionState::new();
        create(&mut state, &api, " Notebook ", "   ").await;

        assert_eq!(
            api.calls(),
            vec![Call::Create {
                name: "Notebook".into(),
                description: None
            }]
        );
    }

    #[tokio::test]
    async fn test_failed_list_keeps_loaded_items() {
        let api = MemoryItemStore::with_items(vec![item(1, "Pen")]);
        let mut state = SessionState::new();
        drive(&mut state, &api, Intent::Load).await;

        api.fail_next_with(ApiError::Transport {
            operation: Operation::ListItems,
            message: "connection refused".into(),
        });
        drive(&mut state, &api, Intent::Load).await;

        assert_eq!(state.items, vec![item(1, "Pen")]);
        assert!(state.error.as_deref().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn test_failed_create_then_success() {
        let api = MemoryItemStore::default();
        let mut state = SessionState::new();

        api.fail_next(Operation::CreateItem, 503);
        create(&mut state, &api, "Pen", "").await;
        assert!(state.items.is_empty());
        assert_eq!(state.form.name, "Pen");
        assert!(state.error.is_some());

        drive(&mut state, &api, Intent::SubmitCreate).await;
        assert_eq!(state.items.len(), 1);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_failed_delete_then_success() {
        let api = MemoryItemStore::with_items(vec![item(1, "Pen")]);
        let mut state = SessionState::new();
        drive(&mut state, &api, Intent::Load).await;

        api.fail_next(Operation::DeleteItem, 500);
        drive(&mut state, &api, Intent::RequestDelete(1)).await;
        drive(&mut state, &api, Intent::ConfirmDelete).await;
        assert_eq!(state.items.len(), 1);
        assert!(state.error.is_some());

        drive(&mut state, &api, Intent::RequestDelete(1)).await;
        drive(&mut state, &api, Intent::ConfirmDelete).await;
        assert!(state.items.is_empty());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_health_check() {
        let api = MemoryItemStore::default();
        let mut state = SessionState::new();

        drive(&mut state, &api, Intent::CheckHealth).await;
        assert_eq!(state.health, HealthStatus::Unhealthy);
        assert!(state.error.is_none());

        api.set_health("healthy");
        drive(&mut state, &api, Intent::CheckHealth).await;
        assert_eq!(state.health.label(), "healthy");
    }
}
