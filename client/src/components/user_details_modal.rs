//! Read-only detail view of one user, including craftsman data when present.

use leptos::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::modal::Modal;
use crate::net::types::User;
use crate::state::ui::use_tr;
use crate::util::format::{format_date, format_date_time, format_money, format_rating};
use crate::util::i18n::{ban_label, role_label, verification_label};

/// One `label: value` row. Blank values show the "not available" text.
#[component]
pub fn DetailRow(#[prop(into)] label: Signal<String>, #[prop(into)] value: Signal<String>) -> impl IntoView {
    let tr = use_tr();
    view! {
        <div class="detail-row">
            <span class="detail-row__label">{move || label.get()}</span>
            <span class="detail-row__value">
                {move || {
                    let v = value.get();
                    if v.trim().is_empty() { tr.t("common.not_available").to_owned() } else { v }
                }}
            </span>
        </div>
    }
}

#[component]
pub fn UserDetailsModal(user: User, on_close: Callback<()>) -> impl IntoView {
    let tr = use_tr();
    let user = StoredValue::new(user);

    let text = move |f: fn(&User) -> String| move || user.with_value(f);
    let date = move |f: fn(&User) -> Option<String>| {
        move || user.with_value(|u| format_date(f(u).as_deref(), tr.lang())).unwrap_or_default()
    };
    let date_time = move |f: fn(&User) -> Option<String>| {
        move || user.with_value(|u| format_date_time(f(u).as_deref(), tr.lang())).unwrap_or_default()
    };

    let banned = user.with_value(|u| u.is_banned);
    let has_wallet = user.with_value(|u| u.wallet.is_some());
    let has_logs = user.with_value(|u| u.user_logs.is_some());
    let craftsman = user.with_value(|u| u.craftsman_info.clone());

    let craftsman_section = craftsman.map(|info| {
        let service = move || {
            user.with_value(|u| {
                u.craftsman_info
                    .as_ref()
                    .and_then(|i| i.service.as_ref())
                    .and_then(|s| s.name(tr.lang()).map(str::to_owned))
                    .unwrap_or_default()
            })
        };
        let status = info.verification_status.clone();
        let docs = info
            .verification_docs
            .iter()
            .map(|doc| {
                let name = if doc.doc_name.trim().is_empty() { doc.doc_url.clone() } else { doc.doc_name.clone() };
                view! {
                    <li>
                        <a href=doc.doc_url.clone() target="_blank" rel="noopener noreferrer">{name}</a>
                        <span class="muted">{format!(" {}", doc.doc_type)}</span>
                    </li>
                }
            })
            .collect_view();
        let has_docs = !info.verification_docs.is_empty();
        let portfolio = info.portfolio_image_urls.clone();
        let has_portfolio = !portfolio.is_empty();
        let skills = info.skills.join(", ");
        let bio = info.bio.clone().unwrap_or_default();

        view! {
            <section class="details__section">
                <h3>{move || tr.t("users.craftsman_info")}</h3>
                <DetailRow label=move || tr.t("users.service").to_owned() value=service/>
                <DetailRow label=move || tr.t("users.skills").to_owned() value=skills/>
                <DetailRow label=move || tr.t("users.bio").to_owned() value=bio/>
                <DetailRow
                    label=move || tr.t("users.verification_status").to_owned()
                    value=move || verification_label(tr.lang(), &status)
                />
                <h4>{move || tr.t("users.documents")}</h4>
                {if has_docs {
                    view! { <ul class="details__docs">{docs}</ul> }.into_any()
                } else {
                    view! { <p class="muted">{move || tr.t("craftsmen.no_documents")}</p> }.into_any()
                }}
                {has_portfolio
                    .then(|| {
                        view! {
                            <h4>{move || tr.t("users.portfolio")}</h4>
                            <Carousel images=portfolio alt="portfolio"/>
                        }
                    })}
            </section>
        }
    });

    view! {
        <Modal title=move || tr.t("users.details_title").to_owned() on_close=on_close wide=true>
            <div class="details">
                <header class="details__header">
                    <img class="avatar avatar--lg" src=user.with_value(User::avatar_url) alt=""/>
                    <div>
                        <h3 class="details__name">{user.with_value(|u| u.display_name().to_owned())}</h3>
                        <p class="muted">{user.with_value(|u| u.email.clone())}</p>
                        <span class="badge">{move || user.with_value(|u| role_label(tr.lang(), &u.role))}</span>
                        <span class="badge" class:badge--danger=banned class:badge--success=!banned>
                            {move || ban_label(tr.lang(), banned)}
                        </span>
                    </div>
                </header>

                <section class="details__section">
                    <DetailRow label=move || tr.t("common.phone").to_owned() value=text(|u| u.phone().to_owned())/>
                    <DetailRow label=move || tr.t("common.country").to_owned() value=text(|u| u.country().to_owned())/>
                    <DetailRow
                        label=move || tr.t("users.address").to_owned()
                        value=text(|u| u.address.as_ref().map(|a| a.short_line()).unwrap_or_default())
                    />
                    <DetailRow
                        label=move || tr.t("common.rating").to_owned()
                        value=text(|u| format_rating(u.rating).unwrap_or_default())
                    />
                    <DetailRow
                        label=move || tr.t("common.rating_count").to_owned()
                        value=text(|u| u.rating_count.map(|c| c.to_string()).unwrap_or_default())
                    />
                    <DetailRow label=move || tr.t("users.joined").to_owned() value=date(|u| u.created_at.clone())/>
                    <DetailRow
                        label=move || tr.t("common.updated_at").to_owned()
                        value=date(|u| u.updated_at.clone())
                    />
                    {banned
                        .then(|| {
                            view! {
                                <DetailRow
                                    label=move || tr.t("users.ban_reason").to_owned()
                                    value=text(|u| u.is_banned_reason.clone().unwrap_or_default())
                                />
                            }
                        })}
                </section>

                {has_wallet
                    .then(|| {
                        view! {
                            <section class="details__section">
                                <h3>{move || tr.t("users.wallet")}</h3>
                                <DetailRow
                                    label=move || tr.t("users.balance").to_owned()
                                    value=text(|u| u.wallet.as_ref().map(|w| format_money(w.balance)).unwrap_or_default())
                                />
                                <DetailRow
                                    label=move || tr.t("users.withdrawable").to_owned()
                                    value=text(|u| {
                                        u.wallet.as_ref().map(|w| format_money(w.withdrawable_balance)).unwrap_or_default()
                                    })
                                />
                            </section>
                        }
                    })}

                {has_logs
                    .then(|| {
                        view! {
                            <section class="details__section">
                                <h3>{move || tr.t("users.logs")}</h3>
                                <DetailRow
                                    label=move || tr.t("users.last_login").to_owned()
                                    value=date_time(|u| u.user_logs.as_ref().and_then(|l| l.last_login.clone()))
                                />
                                <DetailRow
                                    label=move || tr.t("users.last_logout").to_owned()
                                    value=date_time(|u| u.user_logs.as_ref().and_then(|l| l.last_logout.clone()))
                                />
                                <DetailRow
                                    label=move || tr.t("users.last_ip").to_owned()
                                    value=text(|u| u.user_logs.as_ref().and_then(|l| l.last_ip.clone()).unwrap_or_default())
                                />
                            </section>
                        }
                    })}

                {craftsman_section}
            </div>
        </Modal>
    }
}
