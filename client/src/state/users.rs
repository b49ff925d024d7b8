//! Shared user cache.
//!
//! DESIGN
//! ======
//! All users are fetched once per session and shared by the users page, the
//! craftsmen page, the overview stats, and the job modal (which resolves
//! client/craftsman ids through [`UsersState::get_by_id`]). Mutations patch the
//! cached record in place instead of refetching the full list.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::net::types::User;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

impl UsersState {
    pub fn get_by_id(&self, id: &str) -> Option<&User> {
        self.items.iter().find(|u| u.id == id)
    }

    pub fn craftsmen(&self) -> impl Iterator<Item = &User> {
        self.items.iter().filter(|u| u.is_craftsman())
    }

    /// Flip the ban flag of one user. Returns false when the id is unknown.
    pub fn set_banned(&mut self, id: &str, banned: bool) -> bool {
        let Some(user) = self.items.iter_mut().find(|u| u.id == id) else {
            return false;
        };
        user.is_banned = banned;
        if !banned {
            user.is_banned_reason = None;
        }
        true
    }

    /// Last fetch failed; pages derived from the cache show a fetch error.
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<User>, String>) {
        self.loading = false;
        self.loaded = true;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }
}

/// Fetch (or refetch) the cache from `GET /admin/users`.
pub fn reload(users: RwSignal<UsersState>) {
    users.update(UsersState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_users().await.map_err(|e| {
            log::error!("user list fetch failed: {e}");
            e.to_string()
        });
        users.update(|s| s.finish_load(result));
    });
}

/// Fetch once unless the cache is already loaded or loading.
pub fn ensure_loaded(users: RwSignal<UsersState>) {
    let idle = users.with_untracked(|s| !s.loaded && !s.loading);
    if idle {
        reload(users);
    }
}
