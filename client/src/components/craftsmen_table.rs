//! Craftsmen table with verification/ban/skill/city filters.

use leptos::prelude::*;

use crate::components::export_buttons::ExportButtons;
use crate::components::pager::{PageSizeSelect, PagerControls};
use crate::components::user_details_modal::UserDetailsModal;
use crate::components::user_table::confirm_ban_toggle;
use crate::net::types::{User, VerificationStatus};
use crate::state::notice::use_notices;
use crate::state::ui::use_tr;
use crate::state::users::UsersState;
use crate::util::export;
use crate::util::filters::{CraftsmanFilter, ban_key, city_options, craftsman_skill, skill_options};
use crate::util::format::format_rating;
use crate::util::i18n::{ban_label, verification_label};
use crate::util::listing::{Choice, Pager, USER_PAGE_SIZES};

/// Badge modifier for a verification state.
pub fn verification_tone(status: &VerificationStatus) -> &'static str {
    match status {
        VerificationStatus::Verified => "badge--success",
        VerificationStatus::Rejected => "badge--danger",
        VerificationStatus::Pending | VerificationStatus::Other(_) => "badge--warning",
    }
}

#[component]
pub fn CraftsmenTable() -> impl IntoView {
    let tr = use_tr();
    let notices = use_notices();
    let users_state = expect_context::<RwSignal<UsersState>>();

    let filter = RwSignal::new(CraftsmanFilter::default());
    let pager = RwSignal::new(Pager::new(USER_PAGE_SIZES[0]));
    let selected = RwSignal::new(None::<User>);

    let filtered = Memo::new(move |_| {
        let lang = tr.lang();
        filter.with(|f| users_state.with(|s| f.apply(&s.items, lang)))
    });
    let total = Signal::derive(move || filtered.with(Vec::len));
    let back_to_first = move || pager.update(Pager::reset);

    let options = |values: Vec<String>| {
        values
            .into_iter()
            .map(|v| { let label = v.clone(); view! { <option value=v>{label}</option> } })
            .collect_view()
    };
    let skills = move || options(users_state.with(|s| skill_options(&s.items, tr.lang())));
    let cities = move || options(users_state.with(|s| city_options(&s.items)));

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
                    let status = user.verification_status();
                    view! {
                        <tr>
                            <td class="cell-user">
                                <img class="avatar avatar--sm" src=user.avatar_url() alt=""/>
                                <span>{user.display_name().to_owned()}</span>
                            </td>
                            <td>{user.email.clone()}</td>
                            <td>{user.phone().to_owned()}</td>
                            <td>
                                {craftsman_skill(&user, lang)
                                    .map_or_else(|| tr.t("common.not_available").to_owned(), str::to_owned)}
                            </td>
                            <td>{user.city().to_owned()}</td>
                            <td>
                                <span class=format!("badge {}", verification_tone(&status))>
                                    {verification_label(lang, &status)}
                                </span>
                            </td>
                            <td>{format_rating(user.rating).unwrap_or_else(|| "-".to_owned())}</td>
                            <td>
                                <span class="badge" class:badge--danger=banned class:badge--success=!banned>
                                    {ban_label(lang, banned)}
                                </span>
                            </td>
                            <td class="cell-actions">
                                <button
                                    class="btn btn--small"
                                    on:click=move |_| selected.set(Some(for_details.clone()))
                                >
                                    {tr.t("common.view")}
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

    let build_export = Callback::new(move |_pdf: bool| export::craftsmen_table(&filtered.get_untracked(), tr.lang()));

    view! {
        <section class="panel">
            <div class="filters">
                <input
                    class="input filters__search"
                    type="search"
                    placeholder=move || tr.t("craftsmen.search_placeholder")
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| {
                        filter.update(|f| f.search = event_target_value(&ev));
                        back_to_first();
                    }
                />
                <select
                    class="select"
                    prop:value=move || filter.with(|f| f.verification.select_value().to_owned())
                    on:change=move |ev| {
                        filter.update(|f| f.verification = Choice::from_select(&event_target_value(&ev)));
                        back_to_first();
                    }
                >
                    <option value="all">{move || tr.t("craftsmen.all_verification")}</option>
                    {[VerificationStatus::Pending, VerificationStatus::Verified, VerificationStatus::Rejected]
                        .into_iter()
                        .map(|status| {
                            let value = status.as_str().to_owned();
                            view! { <option value=value>{move || verification_label(tr.lang(), &status)}</option> }
                        })
                        .collect_view()}
                </select>
                <select
                    class="select"
                    prop:value=move || filter.with(|f| f.ban.select_value().to_owned())
                    on:change=move |ev| {
                        filter.update(|f| f.ban = Choice::from_select(&event_target_value(&ev)));
                        back_to_first();
                    }
                >
                    <option value="all">{move || tr.t("craftsmen.all_ban")}</option>
                    <option value=ban_key(false)>{move || ban_label(tr.lang(), false)}</option>
                    <option value=ban_key(true)>{move || ban_label(tr.lang(), true)}</option>
                </select>
                <select
                    class="select"
                    prop:value=move || filter.with(|f| f.skill.select_value().to_owned())
                    on:change=move |ev| {
                        filter.update(|f| f.skill = Choice::from_select(&event_target_value(&ev)));
                        back_to_first();
                    }
                >
                    <option value="all">{move || tr.t("craftsmen.all_skills")}</option>
                    {skills}
                </select>
                <select
                    class="select"
                    prop:value=move || filter.with(|f| f.city.select_value().to_owned())
                    on:change=move |ev| {
                        filter.update(|f| f.city = Choice::from_select(&event_target_value(&ev)));
                        back_to_first();
                    }
                >
                    <option value="all">{move || tr.t("craftsmen.all_cities")}</option>
                    {cities}
                </select>
                <PageSizeSelect pager=pager sizes=&USER_PAGE_SIZES/>
                <ExportButtons build_table=build_export/>
            </div>

            <Show
                when=move || { total.get() > 0 }
                fallback=move || view! { <p class="empty">{move || tr.t("craftsmen.no_craftsmen")}</p> }
            >
                <div class="table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{move || tr.t("common.name")}</th>
                                <th>{move || tr.t("common.email")}</th>
                                <th>{move || tr.t("common.phone")}</th>
                                <th>{move || tr.t("users.service")}</th>
                                <th>{move || tr.t("common.city")}</th>
                                <th>{move || tr.t("users.verification_status")}</th>
                                <th>{move || tr.t("common.rating")}</th>
                                <th>{move || tr.t("common.status")}</th>
                                <th>{move || tr.t("common.actions")}</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
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
