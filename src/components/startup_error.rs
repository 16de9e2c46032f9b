//! Startup Error View

use leptos::prelude::*;

/// Shown instead of the app when it cannot be configured
#[component]
pub fn StartupError(message: String) -> impl IntoView {
    view! {
        <div class="item-container">
            <h1>"Item Management"</h1>
            <div class="error-message" role="alert">
                <span>{message}</span>
            </div>
        </div>
    }
}
