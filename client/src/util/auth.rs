//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page and the login page apply the same redirect rules, so
//! the decisions live here as pure functions with one Effect installer each.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// True once the session has been read and it is not an admin session.
pub fn should_redirect_to_login(state: &AuthState) -> bool {
    !state.loading && !state.is_admin()
}

/// True once an admin session is known to exist.
pub fn should_leave_login(state: &AuthState) -> bool {
    !state.loading && state.is_admin()
}

/// Landing route for `/`.
pub fn root_target(state: &AuthState) -> &'static str {
    if state.is_admin() { "/dashboard" } else { "/login" }
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/login` whenever auth has loaded without an admin session.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_to_login) {
            navigate("/login", replace());
        }
    });
}

/// Send an already signed-in admin from `/login` to the dashboard.
pub fn install_login_bypass<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_leave_login) {
            navigate("/dashboard", replace());
        }
    });
}
