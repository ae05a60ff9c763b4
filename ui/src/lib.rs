//! Shared UI crate for MindPulse: the analysis data model, the metrics
//! deriver and every report view. Platform crates only launch it.

pub mod core;
pub mod i18n;
pub mod report;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
