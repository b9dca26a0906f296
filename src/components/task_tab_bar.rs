//! Task Tab Bar Component
//!
//! Switches between the active and completed partitions.

use leptos::prelude::*;

use crate::store::{store_select_tab, use_app_store, AppStateStoreFields, Tab};

/// Active / Completed tab bar
#[component]
pub fn TaskTabBar() -> impl IntoView {
    let store = use_app_store();

    let tab_button = move |tab: Tab, label: &'static str| {
        let count = move || {
            let tasks = store.tasks().read();
            match tab {
                Tab::Active => tasks.active_count(),
                Tab::Completed => tasks.completed_count(),
            }
        };
        let tab_class = move || {
            if store.tab().get() == tab { "task-tab active" } else { "task-tab" }
        };

        view! {
            <button class=tab_class on:click=move |_| store_select_tab(&store, tab)>
                {label} " (" {count} ")"
            </button>
        }
    };

    view! {
        <div class="task-tab-bar">
            {tab_button(Tab::Active, "Active")}
            {tab_button(Tab::Completed, "Completed")}
        </div>
    }
}
