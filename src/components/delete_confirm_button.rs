//! Delete Confirm Button Component
//!
//! Two-press delete: the first press arms the button, the second deletes.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use todo_core::config::DELETE_CONFIRM_TIMEOUT_MS;

/// Inline delete button with press-again confirmation
///
/// The armed state falls back after a few seconds without a second press.
///
/// # Arguments
/// * `on_confirm` - Callback to execute when the second press lands
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if confirm_delete.get_untracked() {
            set_confirm_delete.set(false);
            on_confirm.run(());
        } else {
            set_confirm_delete.set(true);
            // The row may be gone by the time this fires
            Timeout::new(DELETE_CONFIRM_TIMEOUT_MS, move || {
                let _ = set_confirm_delete.try_set(false);
            })
            .forget();
        }
    };

    view! {
        <button
            class=move || if confirm_delete.get() { "delete-btn confirm" } else { "delete-btn" }
            title=move || if confirm_delete.get() { "Press again to delete" } else { "Delete task" }
            on:click=on_click
        >
            {move || if confirm_delete.get() { "Delete?" } else { "×" }}
        </button>
    }
}
