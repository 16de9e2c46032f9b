//! Error Banner Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::session::{Intent, SessionStateStoreFields};

/// Single replaceable error message with a dismiss button
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    move || {
        store.error().get().map(|message| view! {
            <div class="error-message" role="alert">
                <span>{message}</span>
                <button
                    class="error-dismiss"
                    title="Dismiss"
                    on:click=move |_| ctx.dispatch(Intent::DismissError)
                >
                    "×"
                </button>
            </div>
        })
    }
}
