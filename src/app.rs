//! Cookie Todo Frontend App
//!
//! Loads the task cookie on mount, renders the two partitions and writes the
//! collection back after every change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{LogPanel, NewTaskForm, TaskListView, TaskTabBar};
use crate::cookie_jar::browser_persistence;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let persistence = browser_persistence();
    let tasks = persistence.load();
    log::info!("[APP] Loaded {} tasks", tasks.len());

    let store = Store::new(AppState::new(tasks));
    provide_context(store);

    // Write-through: runs once for the hydrated list, then after each mutation
    Effect::new(move |_| {
        let tasks = store.tasks().read();
        persistence.save(&tasks);
    });

    let active_count = move || store.tasks().read().active_count();
    let completed_count = move || store.tasks().read().completed_count();

    view! {
        <div class="app-layout">
            <main class="main-content">
                <header class="app-header">
                    <h1>"To-do list"</h1>
                    <p class="app-subtitle">"Organise your tasks"</p>
                </header>

                <NewTaskForm />

                <div class="stats">
                    <div class="stat">
                        <div class="stat-value active">{active_count}</div>
                        <div class="stat-label">"Active tasks"</div>
                    </div>
                    <div class="stat">
                        <div class="stat-value completed">{completed_count}</div>
                        <div class="stat-label">"Completed tasks"</div>
                    </div>
                </div>

                <TaskTabBar />

                <TaskListView />

                <LogPanel />
            </main>
        </div>
    }
}
