//! UI Components

mod delete_confirm_button;
mod error_banner;
pub mod inventory;
mod log_panel;
pub mod notes;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use log_panel::LogPanel;
