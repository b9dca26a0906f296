//! Task List View Component
//!
//! Shows the partition for the selected tab. Active rows can be reordered by
//! touch (leptos-dragdrop) or by native HTML5 drag on desktop.

use leptos::prelude::*;
use todo_core::{Task, TaskId};

use crate::components::TaskCard;
use crate::store::{store_move_task, store_reorder_tasks, use_app_store, AppStateStoreFields, Tab};

use leptos_dragdrop::*;

/// Task list for the selected tab
#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();

    // Create DnD signals
    let dnd = create_dnd_signals();

    // Committed touch drags go straight to the store
    bind_global_touch(dnd, move |intent| {
        log::info!("[DND] Touch reorder: {} -> {}", intent.from, intent.to);
        store_reorder_tasks(&store, intent);
    });

    let partition = Memo::new(move |_| store.tasks().read().partition());

    view! {
        <div class="task-list">
            {move || match store.tab().get() {
                Tab::Active => {
                    let active = partition.get().active;
                    if active.is_empty() {
                        view! { <p class="empty-list">"No active tasks"</p> }.into_any()
                    } else {
                        view! { <ActiveRows tasks=active dnd=dnd /> }.into_any()
                    }
                }
                Tab::Completed => {
                    let completed = partition.get().completed;
                    if completed.is_empty() {
                        view! { <p class="empty-list">"No completed tasks"</p> }.into_any()
                    } else {
                        completed
                            .into_iter()
                            .map(|task| view! { <TaskCard task=task /> })
                            .collect_view()
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

/// Active tasks in priority order, each a drag source and drop target
#[component]
fn ActiveRows(tasks: Vec<Task>, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();
    let (dragging_id, set_dragging_id) = signal(None::<TaskId>);
    let len = tasks.len();

    tasks
        .into_iter()
        .enumerate()
        .map(|(index, task)| {
            let drag_id = task.id.clone();
            let target_id = task.id.clone();
            let row_id = task.id.clone();

            let on_touchstart = make_on_touchstart(dnd, index, false, len);

            let on_dragstart = move |ev: web_sys::DragEvent| {
                set_drag_payload(&ev, drag_id.as_str());
                set_dragging_id.set(Some(drag_id.clone()));
            };

            let on_drop = move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                if let Some(dragged) = drag_payload(&ev) {
                    log::info!("[DND] Drop: dragged={}, target={}", dragged, target_id);
                    store_move_task(&store, &TaskId::from(dragged), &target_id);
                }
                set_dragging_id.set(None);
            };

            let row_class = move || {
                let mut c = String::from("task-row");
                if dnd.is_dragging(index) || dragging_id.get().as_ref() == Some(&row_id) {
                    c.push_str(" dragging");
                }
                c
            };

            view! {
                <div
                    class=row_class
                    data-task-index=index.to_string()
                    style=move || dnd.row_style(index)
                    draggable="true"
                    on:touchstart=on_touchstart
                    on:dragstart=on_dragstart
                    on:dragover=move |ev: web_sys::DragEvent| allow_drop(&ev)
                    on:drop=on_drop
                    on:dragend=move |_| set_dragging_id.set(None)
                >
                    <TaskCard task=task />
                </div>
            }
        })
        .collect_view()
}
