//! Session Store
//!
//! Wraps [`SessionState`] in a Leptos `reactive_stores` store so views can
//! subscribe to single fields.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::session::{FormField, SessionState, SessionStateStoreFields};

/// Type alias for the store
pub type SessionStore = Store<SessionState>;

pub fn new_session_store() -> SessionStore {
    Store::new(SessionState::new())
}

/// Write one form input without touching the rest of the session
///
/// Ignored while a create is in flight.
pub fn store_edit_form(store: &SessionStore, field: FormField, value: String) {
    if store.with_untracked(|state| state.form_locked()) {
        return;
    }
    store.form().write().set(field, value);
}
