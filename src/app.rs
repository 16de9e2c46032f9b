//! Item Manager App
//!
//! Root component: health header, create form, error banner, and item list.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::ItemStoreApi;
use crate::components::{ErrorBanner, HealthBadge, ItemList, NewItemForm};
use crate::context::AppContext;
use crate::session::Intent;

#[component]
pub fn App(api: Arc<dyn ItemStoreApi>) -> impl IntoView {
    let ctx = AppContext::new(api);

    // Provide context to all children
    provide_context(ctx);

    // Load items and check backend health once on mount
    Effect::new(move |_| {
        log::info!("[APP] Mounted, loading items");
        ctx.dispatch(Intent::Load);
        ctx.dispatch(Intent::CheckHealth);
    });

    view! {
        <div class="item-container">
            <header>
                <h1>"Item Management"</h1>
                <HealthBadge />
            </header>

            <main>
                <NewItemForm />
                <ErrorBanner />
                <ItemList />
            </main>
        </div>
    }
}
