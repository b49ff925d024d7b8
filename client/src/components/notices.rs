//! Renders the toast stack and the shared confirmation dialog.
//!
//! Mounted once by the dashboard layout; everything else raises notices
//! through [`crate::state::notice::Notices`].

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, use_notices};
use crate::state::ui::use_tr;

#[component]
pub fn NoticeHost() -> impl IntoView {
    let tr = use_tr();
    let notices = use_notices();
    let state = notices.signal();

    let toasts = move || {
        state
            .get()
            .notices
            .into_iter()
            .map(|n| {
                let id = n.id;
                let tone = match n.kind {
                    NoticeKind::Success => "toast--success",
                    NoticeKind::Error => "toast--error",
                };
                view! {
                    <div class=format!("toast {tone}") role="status">
                        <div class="toast__body">
                            <strong class="toast__title">{n.title}</strong>
                            <p class="toast__text">{n.text}</p>
                        </div>
                        <button class="toast__close" aria-label="dismiss" on:click=move |_| notices.dismiss(id)>
                            "×"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    let confirm = move || {
        state.get().confirm.map(|req| {
            let confirm_class = if req.danger { "btn btn--danger" } else { "btn btn--primary" };
            view! {
                <div class="dialog-backdrop" on:click=move |_| notices.resolve(false)>
                    <div class="dialog dialog--confirm" role="alertdialog" on:click=move |ev| ev.stop_propagation()>
                        <div class="dialog__header">
                            <h2>{req.title}</h2>
                        </div>
                        <div class="dialog__body">
                            <p>{req.text}</p>
                        </div>
                        <div class="dialog__footer">
                            <button class="btn" on:click=move |_| notices.resolve(false)>
                                {move || tr.t("common.cancel")}
                            </button>
                            <button class=confirm_class on:click=move |_| notices.resolve(true)>
                                {req.confirm_label}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="toast-stack">{toasts}</div>
        {confirm}
    }
}
