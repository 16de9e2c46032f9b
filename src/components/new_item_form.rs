//! New Item Form Component
//!
//! Form for creating new items with an optional description.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::session::{FormField, Intent, SessionStateStoreFields};
use crate::store::store_edit_form;

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let locked = move || store.pending().with(|pending| pending.creating);

    let create_item = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Intent::SubmitCreate);
    };

    view! {
        <div class="form-container">
            <h2>"Add New Item"</h2>
            <form class="new-item-form" on:submit=create_item>
                <div class="form-group">
                    <label for="name">"Name *"</label>
                    <input
                        id="name"
                        type="text"
                        placeholder="Enter item name"
                        prop:value=move || store.form().with(|form| form.name.clone())
                        disabled=locked
                        on:input=move |ev| store_edit_form(&store, FormField::Name, event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="description">"Description"</label>
                    <input
                        id="description"
                        type="text"
                        placeholder="Enter item description (optional)"
                        prop:value=move || store.form().with(|form| form.description.clone())
                        disabled=locked
                        on:input=move |ev| store_edit_form(&store, FormField::Description, event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn-primary" disabled=locked>
                    {move || if locked() { "Adding..." } else { "Add Item" }}
                </button>
            </form>
        </div>
    }
}
