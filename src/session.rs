//! UI Session State
//!
//! Everything the item manager view shows lives in [`SessionState`]. User
//! intents go through [`SessionState::dispatch`], which may ask for an
//! [`Effect`]; the effect's outcome comes back as a [`Completion`] through
//! [`SessionState::complete`]. Both are synchronous, so the whole
//! synchronization contract is testable without a browser.

use std::collections::BTreeSet;

use reactive_stores::Store;

use crate::api::ApiError;
use crate::models::{HealthReport, HealthStatus, Item, ItemId, NewItem};

/// Raw text of the create form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
}

impl ItemForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Description => self.description = value,
        }
    }
}

/// Requests in flight, per operation kind
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pending {
    pub loading: bool,
    pub creating: bool,
    pub deleting: BTreeSet<ItemId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Load,
    SubmitCreate,
    /// Ask before deleting; nothing is sent yet
    RequestDelete(ItemId),
    ConfirmDelete,
    CancelDelete,
    CheckHealth,
    DismissError,
}

/// Work the runner must perform against the item store
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    ListItems,
    CreateItem(NewItem),
    DeleteItem(ItemId),
    CheckHealth,
}

/// Outcome of an [`Effect`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    Listed(Result<Vec<Item>, ApiError>),
    Created(Result<Item, ApiError>),
    Deleted(ItemId, Result<(), ApiError>),
    HealthChecked(Result<HealthReport, ApiError>),
}

/// What the list area should show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading,
    Empty,
    Items(&'a [Item]),
}

/// Per-mount state of the item manager view
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// Server listing order, then append order for created items
    pub items: Vec<Item>,
    pub form: ItemForm,
    pub pending: Pending,
    pub error: Option<String>,
    pub health: HealthStatus,
    /// Item waiting for the user to confirm deletion
    pub confirming_delete: Option<ItemId>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a user intent, returning the request to issue, if any
    pub fn dispatch(&mut self, intent: Intent) -> Option<Effect> {
        match intent {
            Intent::Load => {
                if self.pending.loading {
                    return None;
                }
                self.pending.loading = true;
                self.error = None;
                Some(Effect::ListItems)
            }
            Intent::SubmitCreate => {
                if self.pending.creating {
                    return None;
                }
                match NewItem::from_input(&self.form.name, &self.form.description) {
                    Ok(new_item) => {
                        self.pending.creating = true;
                        self.error = None;
                        Some(Effect::CreateItem(new_item))
                    }
                    Err(err) => {
                        self.error = Some(err.to_string());
                        None
                    }
                }
            }
            Intent::RequestDelete(id) => {
                if self.contains(id) {
                    self.confirming_delete = Some(id);
                }
                None
            }
            Intent::ConfirmDelete => {
                let id = self.confirming_delete.take()?;
                if !self.contains(id) || !self.pending.deleting.insert(id) {
                    return None;
                }
                self.error = None;
                Some(Effect::DeleteItem(id))
            }
            Intent::CancelDelete => {
                self.confirming_delete = None;
                None
            }
            Intent::CheckHealth => {
                if self.health == HealthStatus::Checking {
                    return None;
                }
                self.health = HealthStatus::Checking;
                Some(Effect::CheckHealth)
            }
            Intent::DismissError => {
                self.error = None;
                None
            }
        }
    }

    /// Reconcile with the outcome of a finished request
    pub fn complete(&mut self, completion: Completion) {
        match completion {
            Completion::Listed(result) => {
                self.pending.loading = false;
                match result {
                    Ok(items) => {
                        log::info!("[SESSION] Loaded {} items", items.len());
                        self.items = items;
                        // Confirmation for an item the server no longer lists is stale
                        if self.confirming_delete.is_some_and(|id| !self.contains(id)) {
                            self.confirming_delete = None;
                        }
                        self.error = None;
                    }
                    Err(err) => self.fail(err),
                }
            }
            Completion::Created(result) => {
                self.pending.creating = false;
                match result {
                    Ok(item) => {
                        log::info!("[SESSION] Created item {}", item.id);
                        self.items.push(item);
                        self.form = ItemForm::default();
                        self.error = None;
                    }
                    Err(err) => self.fail(err),
                }
            }
            Completion::Deleted(id, result) => {
                self.pending.deleting.remove(&id);
                match result {
                    Ok(()) => {
                        log::info!("[SESSION] Deleted item {}", id);
                        self.items.retain(|item| item.id != id);
                        if self.confirming_delete == Some(id) {
                            self.confirming_delete = None;
                        }
                        self.error = None;
                    }
                    Err(err) => self.fail(err),
                }
            }
            Completion::HealthChecked(result) => {
                self.health = match result {
                    Ok(report) => HealthStatus::Reported(report.status),
                    Err(err) => {
                        log::warn!("[SESSION] {}", err);
                        HealthStatus::Unhealthy
                    }
                };
            }
        }
    }

    fn fail(&mut self, err: ApiError) {
        log::error!("[SESSION] {}", err);
        self.error = Some(err.user_message());
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn list_view(&self) -> ListView<'_> {
        if self.items.is_empty() {
            if self.pending.loading {
                ListView::Loading
            } else {
                ListView::Empty
            }
        } else {
            ListView::Items(&self.items)
        }
    }

    /// Create form inputs and button are locked while a create is in flight
    pub fn form_locked(&self) -> bool {
        self.pending.creating
    }

    pub fn is_deleting(&self, id: ItemId) -> bool {
        self.pending.deleting.contains(&id)
    }
}
