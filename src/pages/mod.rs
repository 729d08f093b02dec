//! Page components, one per routed view.

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod reset_password;
pub mod section;
pub mod settings;
