//! Application Context
//!
//! Shared session store and item store client provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ItemStoreApi;
use crate::manager;
use crate::session::Intent;
use crate::store::{new_session_store, SessionStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// UI session state
    pub store: SessionStore,
    /// Remote item store client
    api: StoredValue<Arc<dyn ItemStoreApi>>,
}

impl AppContext {
    pub fn new(api: Arc<dyn ItemStoreApi>) -> Self {
        Self {
            store: new_session_store(),
            api: StoredValue::new(api),
        }
    }

    /// Apply a user intent and run the request it needs, if any
    ///
    /// State is only written before the request and from its completion.
    /// Nothing cancels the request; a completion that lands after unmount hits
    /// a disposed store and is dropped.
    pub fn dispatch(&self, intent: Intent) {
        let Some(effect) = self.store.try_update(|state| state.dispatch(intent)).flatten() else {
            return;
        };

        let Some(api) = self.api.try_get_value() else {
            return;
        };
        let store = self.store;
        spawn_local(async move {
            let completion = manager::perform(api.as_ref(), effect).await;
            store.update(|state| state.complete(completion));
        });
    }
}

/// Get the app context provided by [`crate::app::App`]
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
