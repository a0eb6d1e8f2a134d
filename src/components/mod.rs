//! Reusable UI components.

pub mod admin_shell;
pub mod full_page_loader;
pub mod session_guard;
