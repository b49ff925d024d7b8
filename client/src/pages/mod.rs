//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Every page except login renders inside the admin layout.

pub mod craftsmen;
pub mod login;
pub mod orders;
pub mod overview;
pub mod profile;
pub mod services;
pub mod users;
