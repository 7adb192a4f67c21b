//! UI Components
//!
//! Reusable Leptos components.

mod dashboard;
mod delete_confirm_button;
mod filter_bar;
mod login_form;
mod register_form;
mod route_guard;
mod search_bar;
mod status_chart;
mod task_form;
mod task_item;
mod task_list;
mod toaster;

pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use route_guard::{PublicOnly, RequireAuth};
pub use search_bar::SearchBar;
pub use status_chart::StatusChart;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use toaster::Toaster;
