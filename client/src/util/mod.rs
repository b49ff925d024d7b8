//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure list logic
//! (filters, stats, export) from page and component code so both stay
//! testable without a browser.

pub mod auth;
pub mod dark_mode;
pub mod export;
pub mod filters;
pub mod format;
pub mod i18n;
pub mod listing;
pub mod stats;
pub mod storage;
pub mod upload;
pub mod validate;
