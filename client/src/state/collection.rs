//! Page-scoped remote collections (jobs, services).
//!
//! Unlike the user cache these are fetched by the page that shows them and
//! dropped with it. Mutations patch `items` in place.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl<T> Collection<T> {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a fetch result. A failure keeps whatever was shown before.
    pub fn finish(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// Nothing to show yet because the first fetch is still running.
    pub fn is_initial_load(&self) -> bool {
        self.loading && self.items.is_empty()
    }
}

/// Run `fetch` and store its result in `target`. `what` names the
/// collection in log lines.
pub fn load<T, F, Fut>(target: RwSignal<Collection<T>>, what: &'static str, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    target.update(Collection::begin);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch().await.map_err(|e| {
            log::error!("{what} fetch failed: {e}");
            e.to_string()
        });
        target.update(|c| c.finish(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (what, fetch);
}
