//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{ReorderIntent, TaskId, TaskList};

/// Which partition is on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Active,
    Completed,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every task, persisted after each change
    pub tasks: TaskList,
    /// Selected tab
    pub tab: Tab,
}

impl AppState {
    pub fn new(tasks: TaskList) -> Self {
        Self {
            tasks,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new active task
pub fn store_create_task(store: &AppStore, title: String, description: String) {
    store.tasks().write().create(title, description);
}

/// Flip a task between active and completed
pub fn store_toggle_task(store: &AppStore, id: &TaskId) {
    store.tasks().write().toggle_complete(id);
}

/// Remove a task by ID
pub fn store_delete_task(store: &AppStore, id: &TaskId) {
    store.tasks().write().delete(id);
}

/// Apply a committed touch drag
pub fn store_reorder_tasks(store: &AppStore, intent: ReorderIntent) {
    store.tasks().write().reorder(intent.from, intent.to);
}

/// Apply a desktop drop of `dragged` onto `target`
pub fn store_move_task(store: &AppStore, dragged: &TaskId, target: &TaskId) {
    store.tasks().write().move_active_by_id(dragged, target);
}

/// Switch the visible partition
pub fn store_select_tab(store: &AppStore, tab: Tab) {
    *store.tab().write() = tab;
}
