//! UI Components
//!
//! Reusable Leptos components.

mod delete_modal;
mod filter_tabs;
mod new_task_form;
mod task_list;
mod task_row;
mod theme_toggle;

pub use delete_modal::DeleteModal;
pub use filter_tabs::FilterTabs;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use theme_toggle::{apply_theme, load_theme, ThemeToggle};
