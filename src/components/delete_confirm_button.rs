//! Delete Confirm Button Component
//!
//! Inline delete confirmation: nothing is sent until the user confirms.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::ItemId;
use crate::session::{Intent, SessionStateStoreFields};

/// Inline delete confirmation button
///
/// Shows "Delete" initially. When clicked, asks "Delete this item?" with
/// confirm/cancel buttons. Only one item can be awaiting confirmation at a
/// time; asking about another item replaces the question.
#[component]
pub fn DeleteConfirmButton(item_id: ItemId) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let confirming = move || store.confirming_delete().get() == Some(item_id);
    let deleting = move || store.with(|state| state.is_deleting(item_id));

    view! {
        <Show when=move || !confirming()>
            <button
                class="btn-delete"
                disabled=deleting
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.dispatch(Intent::RequestDelete(item_id));
                }
            >
                {move || if deleting() { "Deleting..." } else { "Delete" }}
            </button>
        </Show>
        <Show when=confirming>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete this item?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.dispatch(Intent::ConfirmDelete);
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.dispatch(Intent::CancelDelete);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
