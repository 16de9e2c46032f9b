//! Backend Health Badge

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::session::SessionStateStoreFields;

/// "Backend Status: ..." indicator; purely informational
#[component]
pub fn HealthBadge() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div class="status">
            <span class=move || store.health().with(|h| h.css_class())></span>
            <span>"Backend Status: " {move || store.health().with(|h| h.label().to_string())}</span>
        </div>
    }
}
