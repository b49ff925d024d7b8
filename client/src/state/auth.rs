//! Auth-session state for the signed-in administrator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The session is mirrored to
//! `localStorage` under `token` and `user` so a reload keeps the admin signed
//! in; the API layer reads the token from there for every request.
//!
//! A stored session whose user is not an admin is discarded on restore.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{LoginPayload, Role, User};
use crate::util::storage;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Authentication state tracking the current session and restore status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the stored session has been read in the browser.
    pub loading: bool,
}

/// Rebuild a session from raw storage values. Only admins qualify.
pub fn session_from_parts(token: Option<String>, user_json: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.trim().is_empty())?;
    let user: User = serde_json::from_str(&user_json?).ok()?;
    (user.role == Role::Admin).then_some(Session { token, user })
}

/// Bearer token of the stored session, if any.
pub fn stored_token() -> Option<String> {
    storage::load_string(TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

impl AuthState {
    /// State before the browser session has been read.
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    /// Read the session from storage, clearing it on role mismatch.
    pub fn restore() -> Self {
        let token = storage::load_string(TOKEN_KEY);
        let user_json = storage::load_string(USER_KEY);
        let had_something = token.is_some() || user_json.is_some();
        let session = session_from_parts(token, user_json);
        if session.is_none() && had_something {
            clear_storage();
        }
        Self { session, loading: false }
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.user.role == Role::Admin)
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Start a session from a login response and persist it.
    pub fn sign_in(&mut self, payload: LoginPayload) {
        storage::save_string(TOKEN_KEY, &payload.token);
        storage::save_json(USER_KEY, &payload.user);
        self.session = Some(Session { token: payload.token, user: payload.user });
        self.loading = false;
    }

    /// Drop the session locally and in storage.
    pub fn sign_out(&mut self) {
        clear_storage();
        self.session = None;
        self.loading = false;
    }

    /// Swap in the user record returned by a profile update.
    pub fn replace_user(&mut self, user: User) {
        if let Some(session) = self.session.as_mut() {
            storage::save_json(USER_KEY, &user);
            session.user = user;
        }
    }
}

fn clear_storage() {
    storage::remove(TOKEN_KEY);
    storage::remove(USER_KEY);
}
