//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod log_panel;
mod new_task_form;
mod task_card;
mod task_list_view;
mod task_tab_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use log_panel::LogPanel;
pub use new_task_form::NewTaskForm;
pub use task_card::TaskCard;
pub use task_list_view::TaskListView;
pub use task_tab_bar::TaskTabBar;
