//! Users table: search/status/role filters, paging, ban toggling, export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared user cache; a successful ban or unban patches the cached
//! record so the craftsmen page and the stats see the change without a
//! refetch.

use leptos::prelude::*;

use crate::components::export_buttons::ExportButtons;
use crate::components::pager::{PageSizeSelect, PagerControls};
use crate::components::user_details_modal::UserDetailsModal;
use crate::net::types::{Role, User};
use crate::state::notice::{ConfirmRequest, Notices, use_notices};
use crate::state::ui::{Tr, use_tr};
use crate::state::users::UsersState;
use crate::util::export;
use crate::util::filters::{UserFilter, ban_key, role_options};
use crate::util::format::format_date;
use crate::util::i18n::{ban_label, role_label};
use crate::util::listing::{Choice, Pager, USER_PAGE_SIZES};

/// Ask for confirmation, then ban or unban `user`.
pub fn confirm_ban_toggle(users_state: RwSignal<UsersState>, notices: Notices, tr: Tr, user: &User) {
    let banned = !user.is_banned;
    let id = user.id.clone();
    let name = user.display_name().to_owned();
    let (title, text, label) = if banned {
        ("users.confirm_ban_title", "users.confirm_ban_text", "users.ban")
    } else {
        ("users.confirm_unban_title", "users.confirm_unban_text", "users.unban")
    };
    notices.confirm(ConfirmRequest {
        title: tr.t(title).to_owned(),
        text: tr.tf(text, &[("name", &name)]),
        confirm_label: tr.t(label).to_owned(),
        danger: banned,
        on_confirm: Callback::new(move |()| apply_ban(users_state, notices, tr, id.clone(), banned)),
    });
}

fn apply_ban(users_state: RwSignal<UsersState>, notices: Notices, tr: Tr, id: String, banned: bool) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::set_user_banned(&id, banned).await {
            Ok(()) => {
                users_state.update(|s| {
                    s.set_banned(&id, banned);
                });
                let key = if banned { "users.ban_success" } else { "users.unban_success" };
                notices.success(tr.t("common.success"), tr.t(key));
            }
            Err(e) => {
                log::warn!("ban toggle for {id} failed: {e}");
                notices.error(tr.t("common.error"), e.user_message(tr.t("users.action_error")));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (users_state, notices, tr, id, banned);
    }
}

#[component]
pub fn UserTable() -> impl IntoView {
    let tr = use_tr();
    let notices = use_notices();
    let users_state = expect_context::<RwSignal<UsersState>>();

    let filter = RwSignal::new(UserFilter::default());
    let pager = RwSignal::new(Pager::new(USER_PAGE_SIZES[0]));
    let selected = RwSignal::new(None::<User>);

    let filtered = Memo::new(move |_| {
        let lang = tr.lang();
        filter.with(|f| users_state.with(|s| f.apply(&s.items, lang)))
    });
    let total = Signal::derive(move || filtered.with(Vec::len));

    // Any filter change starts over at page 1.
    let back_to_first = move || pager.update(Pager::reset);

    let roles = move || {
        let lang = tr.lang();
        users_state
            .with(|s| role_options(&s.items))
            .into_iter()
            .map(|raw| {
                let label = role_label(lang, &Role::from(raw.clone()));
                view! { <option value=raw>{label}</option> }
            })
            .collect_view()
    };

    let rows = move || {
        let lang = tr.lang();
        filtered.with(|list| {
            pager
                .get()
                .slice(list)
                .iter()
                .cloned()
                .map(|user| {
                    let for_details = user.clone();
                    let for_ban = user.clone();
                    let banned = user.is_banned;
                    view! {
                        <tr>
                            <td class="cell-user">
                                <img class="avatar avatar--sm" src=user.avatar_url() alt=""/>
                                <span>{user.display_name().to_owned()}</span>
                            </td>
                            <td>{user.email.clone()}</td>
                            <td>{user.phone().to_owned()}</td>
                            <td>{role_label(lang, &user.role)}</td>
                            <td>
                                <span class="badge" class:badge--danger=banned class:badge--success=!banned>
                                    {ban_label(lang, banned)}
                                </span>
                            </td>
                            <td>{user.country().to_owned()}</td>
                            <td>{format_date(user.created_at.as_deref(), lang).unwrap_or_default()}</td>
                            <td class="cell-actions">
                                <button
                                    class="btn btn--small"
                                    on:click=move |_| selected.set(Some(for_details.clone()))
                                >
                                    {tr.t("users.view_details")}
                                </button>
                                <button
                                    class="btn btn--small"
                                    class:btn--danger=!banned
                                    class:btn--success=banned
                                    on:click=move |_| confirm_ban_toggle(users_state, notices, tr, &for_ban)
                                >
                                    {if banned { tr.t("users.unban") } else { tr.t("users.ban") }}
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    let build_export = Callback::new(move |_pdf: bool| export::users_table(&filtered.get_untracked(), tr.lang()));

    view! {
        <section class="panel">
            <div class="filters">
                <input
                    class="input filters__search"
                    type="search"
                    placeholder=move || tr.t("users.search_placeholder")
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| {
                        filter.update(|f| f.search = event_target_value(&ev));
                        back_to_first();
                    }
                />
                <select
                    class="select"
                    prop:value=move || filter.with(|f| f.status.select_value().to_owned())
                    on:change=move |ev| {
                        filter.update(|f| f.status = Choice::from_select(&event_target_value(&ev)));
                        back_to_first();
                    }
                >
                    <option value="all">{move || tr.t("common.all_statuses")}</option>
                    <option value=ban_key(false)>{move || ban_label(tr.lang(), false)}</option>
                    <option value=ban_key(true)>{move || ban_label(tr.lang(), true)}</option>
                </select>
                <select
                    class="select"
                    prop:value=move || filter.with(|f| f.role.select_value().to_owned())
                    on:change=move |ev| {
                        filter.update(|f| f.role = Choice::from_select(&event_target_value(&ev)));
                        back_to_first();
                    }
                >
                    <option value="all">{move || tr.t("users.all_roles")}</option>
                    {roles}
                </select>
                <PageSizeSelect pager=pager sizes=&USER_PAGE_SIZES/>
                <ExportButtons build_table=build_export/>
            </div>

            <Show
                when=move || users_state.with(|s| !(s.loading && s.items.is_empty()))
                fallback=move || view! { <div class="loading">{move || tr.t("common.loading")}</div> }
            >
                <Show
                    when=move || { total.get() > 0 }
                    fallback=move || view! { <p class="empty">{move || tr.t("users.no_users")}</p> }
                >
                    <div class="table-wrap">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{move || tr.t("common.name")}</th>
                                    <th>{move || tr.t("common.email")}</th>
                                    <th>{move || tr.t("common.phone")}</th>
                                    <th>{move || tr.t("common.role")}</th>
                                    <th>{move || tr.t("common.status")}</th>
                                    <th>{move || tr.t("common.country")}</th>
                                    <th>{move || tr.t("common.created_at")}</th>
                                    <th>{move || tr.t("common.actions")}</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                </Show>
            </Show>
            <PagerControls pager=pager total=total/>
        </section>

        {move || {
            selected
                .get()
                .map(|user| {
                    view! { <UserDetailsModal user=user on_close=Callback::new(move |()| selected.set(None))/> }
                })
        }}
    }
}
