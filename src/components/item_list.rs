//! Item List Component
//!
//! Renders the item collection as cards, or a loading/empty placeholder.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Item;
use crate::session::{Intent, ListView, SessionStateStoreFields};

#[derive(Clone, Copy, PartialEq)]
enum ListMode {
    Loading,
    Empty,
    Items,
}

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let mode = move || {
        store.with(|state| match state.list_view() {
            ListView::Loading => ListMode::Loading,
            ListView::Empty => ListMode::Empty,
            ListView::Items(_) => ListMode::Items,
        })
    };
    let loading = move || store.pending().get().loading;

    view! {
        <div class="items-container">
            <div class="items-header">
                <h2>"Items List"</h2>
                <button
                    class="btn-refresh"
                    disabled=loading
                    on:click=move |_| ctx.dispatch(Intent::Load)
                >
                    "Refresh"
                </button>
            </div>
            {move || match mode() {
                ListMode::Loading => view! { <div class="loading">"Loading items..."</div> }.into_any(),
                ListMode::Empty => view! {
                    <div class="no-items">"No items found. Add your first item above!"</div>
                }.into_any(),
                ListMode::Items => view! {
                    <div class="items-list">
                        <For
                            each=move || store.items().get()
                            key=|item| (item.id, item.name.clone(), item.description.clone())
                            children=move |item| view! { <ItemCard item=item /> }
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

/// One item: name, optional description line, id, and delete control
#[component]
fn ItemCard(item: Item) -> impl IntoView {
    let description = item.description_line().map(|d| view! { <p>{d.to_string()}</p> });

    view! {
        <div class="item-card">
            <div class="item-content">
                <h3>{item.name.clone()}</h3>
                {description}
                <span class="item-id">"ID: " {item.id}</span>
            </div>
            <DeleteConfirmButton item_id=item.id />
        </div>
    }
}
