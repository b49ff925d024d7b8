//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome, tables, charts and dialogs while
//! reading/writing shared state from Leptos context providers. Pure helpers
//! (chart geometry, carousel stepping, map URLs) live beside the component
//! that uses them so they can be tested without a browser.

pub mod carousel;
pub mod charts;
pub mod craftsmen_table;
pub mod create_admin_modal;
pub mod export_buttons;
pub mod form;
pub mod job_details_modal;
pub mod jobs_table;
pub mod layout;
pub mod modal;
pub mod notices;
pub mod pager;
pub mod pending_verifications;
pub mod service_modal;
pub mod services_table;
pub mod stat_card;
pub mod user_details_modal;
pub mod user_table;
