//! Task Card Component
//!
//! One task: completion toggle, title, description, timestamps and delete.

use chrono::{DateTime, Local, Utc};
use leptos::prelude::*;
use todo_core::Task;

use crate::components::DeleteConfirmButton;
use crate::store::{store_delete_task, store_toggle_task, use_app_store};

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%d.%m.%Y %H:%M").to_string()
}

/// A single task card
#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let store = use_app_store();

    let completed = task.completed;
    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();
    let created = format_timestamp(task.created_at);
    let finished = task.completed_at.map(format_timestamp);
    let description = (!task.description.is_empty()).then(|| task.description.clone());

    view! {
        <div class=if completed { "task-card completed" } else { "task-card" }>
            <button
                class=if completed { "task-check checked" } else { "task-check" }
                on:click=move |_| store_toggle_task(&store, &toggle_id)
            >
                {if completed { "✓" } else { "" }}
            </button>

            <div class="task-body">
                <h3 class="task-title">{task.title.clone()}</h3>
                {description.map(|text| view! { <p class="task-description">{text}</p> })}
                <div class="task-dates">
                    <span>"Created: " {created}</span>
                    {finished.map(|when| view! { <span>"Completed: " {when}</span> })}
                </div>
            </div>

            <div class="task-actions">
                {(!completed).then(|| view! { <span class="drag-hint">"⇅ Drag"</span> })}
                <DeleteConfirmButton on_confirm=Callback::new(move |_: ()| store_delete_task(&store, &delete_id)) />
            </div>
        </div>
    }
}
