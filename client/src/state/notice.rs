//! Toast notices and the confirmation dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Destructive actions ask for confirmation first; every mutation ends with a
//! success or error notice. Both are driven through this one context so any
//! component can raise them and the layout renders them once.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

/// Pending confirmation. `on_confirm` runs only if the admin accepts.
#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub danger: bool,
    pub on_confirm: Callback<()>,
}

#[derive(Clone, Default)]
pub struct NoticeState {
    pub notices: Vec<Notice>,
    pub confirm: Option<ConfirmRequest>,
    next_id: u64,
}

impl NoticeState {
    /// Queue a notice and return its id for later dismissal.
    pub fn push(&mut self, kind: NoticeKind, title: impl Into<String>, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice { id, kind, title: title.into(), text: text.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }
}

/// Notice/confirm helpers bound to the shared [`NoticeState`] signal.
#[derive(Clone, Copy)]
pub struct Notices(RwSignal<NoticeState>);

impl Notices {
    pub fn success(self, title: impl Into<String>, text: impl Into<String>) {
        self.raise(NoticeKind::Success, title.into(), text.into());
    }

    pub fn error(self, title: impl Into<String>, text: impl Into<String>) {
        self.raise(NoticeKind::Error, title.into(), text.into());
    }

    fn raise(self, kind: NoticeKind, title: String, text: String) {
        let mut id = 0;
        self.0.update(|s| id = s.push(kind, title, text));
        #[cfg(feature = "hydrate")]
        {
            let state = self.0;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(4_000).await;
                state.update(|s| s.dismiss(id));
            });
        }
    }

    pub fn dismiss(self, id: u64) {
        self.0.update(|s| s.dismiss(id));
    }

    pub fn confirm(self, request: ConfirmRequest) {
        self.0.update(|s| s.confirm = Some(request));
    }

    /// Close the dialog, running the callback when `accepted`.
    pub fn resolve(self, accepted: bool) {
        let mut pending = None;
        self.0.update(|s| pending = s.confirm.take());
        if accepted {
            if let Some(request) = pending {
                request.on_confirm.run(());
            }
        }
    }

    pub fn signal(self) -> RwSignal<NoticeState> {
        self.0
    }
}

/// Notice helpers from context; call inside a component.
pub fn use_notices() -> Notices {
    Notices(expect_context::<RwSignal<NoticeState>>())
}
