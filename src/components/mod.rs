//! UI Components
//!
//! Leptos components of the item manager view.

mod delete_confirm_button;
mod error_banner;
mod health_badge;
mod item_list;
mod new_item_form;
mod startup_error;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use health_badge::HealthBadge;
pub use item_list::ItemList;
pub use new_item_form::NewItemForm;
pub use startup_error::StartupError;
