//! New Task Form Component
//!
//! Title and description inputs for creating a task.

use leptos::prelude::*;

use crate::store::{store_create_task, use_app_store};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get().trim().to_string();
        if text.is_empty() { return; }

        store_create_task(&store, text, description.get().trim().to_string());
        set_title.set(String::new());
        set_description.set(String::new());
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Task title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || title.get().trim().is_empty()>"Add task"</button>
        </form>
    }
}
