//! Log Panel Component
//!
//! Collapsible view of the rolling logger's buffer.

use leptos::prelude::*;

/// Recent log lines, refreshed each time the panel is opened
#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());

    view! {
        <details class="log-panel" on:toggle=move |_| set_lines.set(rolling_logger::recent())>
            <summary>"Log"</summary>
            <pre class="log-lines">{move || lines.get().join("\n")}</pre>
        </details>
    }
}
