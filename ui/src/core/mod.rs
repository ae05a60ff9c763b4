//! Platform-agnostic building blocks shared by the report views.

pub mod analysis;
pub mod error;
pub mod format;
pub mod platform;
