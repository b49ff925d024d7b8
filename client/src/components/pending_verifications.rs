//! Pending craftsman verifications with document viewer and decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list comes from `GET /admin/verifications` and is refetched whenever
//! the shared [`RefreshTrigger`] changes. A decision removes the item locally
//! right away, bumps the trigger, and reloads the user cache so the craftsmen
//! stats, charts and table pick up the new status.

#[cfg(test)]
#[path = "pending_verifications_test.rs"]
mod pending_verifications_test;

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::net::api::VerificationAction;
use crate::net::types::{User, VerificationDoc};
use crate::state::notice::{ConfirmRequest, Notices, use_notices};
use crate::state::refresh::RefreshTrigger;
use crate::state::ui::{Tr, use_tr};
use crate::state::users::UsersState;
use crate::util::listing::remove_by;

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Whether a document URL points at an image the viewer can inline.
pub fn is_image_url(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or("");
    path.rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Move `index` by `delta` within `0..len`, stopping at either end.
pub fn step_clamped(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}

/// Drop a decided craftsman from the pending list, keeping the rest in order.
pub fn settle_decision(pending: &mut Vec<User>, id: &str) -> bool {
    remove_by(pending, id, |u| u.id.as_str())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListPhase {
    Loading,
    Ready,
    Failed,
}

#[component]
pub fn PendingVerifications() -> impl IntoView {
    let tr = use_tr();
    let notices = use_notices();
    let refresh = expect_context::<RwSignal<RefreshTrigger>>();
    let users_state = expect_context::<RwSignal<UsersState>>();

    let items = RwSignal::new(Vec::<User>::new());
    let phase = RwSignal::new(ListPhase::Loading);
    let viewing = RwSignal::new(None::<User>);

    Effect::new(move || {
        let _generation = refresh.get().generation;
        phase.set(ListPhase::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_verifications().await {
                Ok(list) => {
                    items.set(list);
                    phase.set(ListPhase::Ready);
                }
                Err(e) => {
                    log::warn!("verification list fetch failed: {e}");
                    phase.set(ListPhase::Failed);
                }
            }
        });
    });

    let decide = move |user: &User, action: VerificationAction| {
        confirm_decision(Decision { items, refresh, users_state, notices, tr }, user, action);
    };

    let rows = move || {
        items
            .get()
            .into_iter()
            .map(|user| {
                let for_docs = user.clone();
                let for_approve = user.clone();
                let for_reject = user.clone();
                let service = user
                    .craftsman_info
                    .as_ref()
                    .and_then(|i| i.service.as_ref())
                    .and_then(|s| s.name(tr.lang()).map(str::to_owned))
                    .unwrap_or_else(|| tr.t("common.not_available").to_owned());
                let doc_count = user.craftsman_info.as_ref().map_or(0, |i| i.verification_docs.len());
                view! {
                    <li class="pending__item">
                        <img class="avatar" src=user.avatar_url() alt=""/>
                        <div class="pending__info">
                            <strong>{user.display_name().to_owned()}</strong>
                            <span class="muted">{user.email.clone()}</span>
                            <span class="muted">{service}</span>
                        </div>
                        <div class="pending__actions">
                            <button class="btn btn--small" on:click=move |_| viewing.set(Some(for_docs.clone()))>
                                {format!("{} ({doc_count})", tr.t("craftsmen.view_documents"))}
                            </button>
                            <button
                                class="btn btn--small btn--success"
                                on:click=move |_| decide(&for_approve, VerificationAction::Approve)
                            >
                                {tr.t("craftsmen.approve")}
                            </button>
                            <button
                                class="btn btn--small btn--danger"
                                on:click=move |_| decide(&for_reject, VerificationAction::Reject)
                            >
                                {tr.t("craftsmen.reject")}
                            </button>
                        </div>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <section class="panel pending">
            <h2 class="panel__title">{move || tr.t("craftsmen.pending_title")}</h2>
            {move || match phase.get() {
                ListPhase::Loading => view! { <p class="loading">{tr.t("common.loading")}</p> }.into_any(),
                ListPhase::Failed => view! { <p class="error">{tr.t("common.fetch_error")}</p> }.into_any(),
                ListPhase::Ready if items.with(Vec::is_empty) => {
                    view! { <p class="empty">{tr.t("craftsmen.no_pending")}</p> }.into_any()
                }
                ListPhase::Ready => view! { <ul class="pending__list">{rows}</ul> }.into_any(),
            }}
        </section>

        {move || {
            viewing
                .get()
                .map(|user| {
                    view! { <DocumentViewer user=user on_close=Callback::new(move |()| viewing.set(None))/> }
                })
        }}
    }
}

/// Signals a verification decision touches.
#[derive(Clone, Copy)]
struct Decision {
    items: RwSignal<Vec<User>>,
    refresh: RwSignal<RefreshTrigger>,
    users_state: RwSignal<UsersState>,
    notices: Notices,
    tr: Tr,
}

fn confirm_decision(ctx: Decision, user: &User, action: VerificationAction) {
    let tr = ctx.tr;
    let id = user.id.clone();
    let name = user.display_name().to_owned();
    let (title, text, label) = match action {
        VerificationAction::Approve => {
            ("craftsmen.confirm_approve_title", "craftsmen.confirm_approve_text", "craftsmen.approve")
        }
        VerificationAction::Reject => {
            ("craftsmen.confirm_reject_title", "craftsmen.confirm_reject_text", "craftsmen.reject")
        }
    };
    ctx.notices.confirm(ConfirmRequest {
        title: tr.t(title).to_owned(),
        text: tr.tf(text, &[("name", &name)]),
        confirm_label: tr.t(label).to_owned(),
        danger: action == VerificationAction::Reject,
        on_confirm: Callback::new(move |()| submit_decision(ctx, id.clone(), action)),
    });
}

fn submit_decision(ctx: Decision, id: String, action: VerificationAction) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Decision { items, refresh, users_state, notices, tr } = ctx;
        match crate::net::api::decide_verification(&id, action).await {
            Ok(()) => {
                items.update(|list| {
                    settle_decision(list, &id);
                });
                let key = match action {
                    VerificationAction::Approve => "craftsmen.approve_success",
                    VerificationAction::Reject => "craftsmen.reject_success",
                };
                notices.success(tr.t("common.success"), tr.t(key));
                refresh.update(RefreshTrigger::bump);
                crate::state::users::reload(users_state);
            }
            Err(e) => {
                log::warn!("verification {} for {id} failed: {e}", action.as_str());
                notices.error(tr.t("common.error"), e.user_message(tr.t("craftsmen.action_error")));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ctx, id, action);
    }
}

/// Pages through a craftsman's verification documents one at a time.
#[component]
fn DocumentViewer(user: User, on_close: Callback<()>) -> impl IntoView {
    let tr = use_tr();
    let docs: Vec<VerificationDoc> = user.craftsman_info.map(|i| i.verification_docs).unwrap_or_default();
    let len = docs.len();
    let docs = StoredValue::new(docs);
    let index = RwSignal::new(0_usize);
    let name = if user.full_name.trim().is_empty() { user.email } else { user.full_name };

    let current = move || docs.with_value(|d| d.get(index.get()).cloned());

    let body = move || match current() {
        None => view! { <p class="empty">{tr.t("craftsmen.no_documents")}</p> }.into_any(),
        Some(doc) => {
            let preview = if is_image_url(&doc.doc_url) {
                view! { <img class="doc-viewer__image" src=doc.doc_url.clone() alt=doc.doc_name.clone()/> }.into_any()
            } else {
                view! { <div class="doc-viewer__placeholder">"📄"</div> }.into_any()
            };
            view! {
                <div class="doc-viewer__frame">{preview}</div>
                <div class="doc-viewer__meta">
                    <strong>{doc.doc_name.clone()}</strong>
                    <span class="muted">{doc.doc_type.clone()}</span>
                    <a class="btn btn--small" href=doc.doc_url target="_blank" rel="noopener noreferrer">
                        {tr.t("craftsmen.open_document")}
                    </a>
                </div>
            }
                .into_any()
        }
    };

    view! {
        <Modal
            title=move || tr.tf("craftsmen.documents_title", &[("name", &name)])
            on_close=on_close
            wide=true
        >
            <div class="doc-viewer">
                {body}
                <Show when=move || { len > 1 }>
                    <div class="doc-viewer__nav">
                        <button
                            class="btn"
                            disabled=move || index.get() == 0
                            on:click=move |_| index.update(|i| *i = step_clamped(*i, -1, len))
                        >
                            {move || tr.t("common.previous")}
                        </button>
                        <span>
                            {move || {
                                tr.tf(
                                    "craftsmen.document_of",
                                    &[("current", &(index.get() + 1).to_string()), ("total", &len.to_string())],
                                )
                            }}
                        </span>
                        <button
                            class="btn"
                            disabled=move || index.get() + 1 >= len
                            on:click=move |_| index.update(|i| *i = step_clamped(*i, 1, len))
                        >
                            {move || tr.t("common.next")}
                        </button>
                    </div>
                </Show>
            </div>
        </Modal>
    }
}
