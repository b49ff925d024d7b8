//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `users`, `refresh`, `ui`, `notice`) so
//! individual components can depend on small focused models. Each model is
//! provided once from the root `App` as an `RwSignal` context. `collection`
//! holds the page-scoped jobs and services lists.

pub mod auth;
pub mod collection;
pub mod notice;
pub mod refresh;
pub mod ui;
pub mod users;
