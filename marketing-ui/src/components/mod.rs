//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod badge;
pub mod loading;
pub mod modal;
pub mod nav;
pub mod toast;

pub use badge::{ComplianceBadge, ComplianceDetail, StatusBadge};
pub use loading::Loading;
pub use modal::Modal;
pub use nav::Nav;
pub use toast::Toast;
