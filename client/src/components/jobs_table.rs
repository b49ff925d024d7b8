//! Jobs table with status/service/payment filters and the details modal.

use leptos::prelude::*;

use crate::components::export_buttons::ExportButtons;
use crate::components::job_details_modal::JobDetailsModal;
use crate::components::pager::{PageSizeSelect, PagerControls};
use crate::net::types::{Job, JobStatus, PaymentType};
use crate::state::ui::use_tr;
use crate::state::users::UsersState;
use crate::util::export::{self, person_name};
use crate::util::filters::{JobFilter, job_service_name, job_service_options, job_status_options, payment_options};
use crate::util::format::{format_date, truncate};
use crate::util::i18n::{job_status_label, payment_label};
use crate::util::listing::{Choice, JOB_PAGE_SIZES, Pager};

/// Badge modifier for a job state.
pub fn job_status_tone(status: &JobStatus) -> &'static str {
    match status {
        JobStatus::Completed => "badge--success",
        JobStatus::Cancelled | JobStatus::Disputed => "badge--danger",
        JobStatus::Hired | JobStatus::OnTheWay => "badge--info",
        JobStatus::Posted | JobStatus::Quoted | JobStatus::Other(_) => "badge--warning",
    }
}

#[component]
pub fn JobsTable(#[prop(into)] jobs: Signal<Vec<Job>>) -> impl IntoView {
    let tr = use_tr();
    let users_state = expect_context::<RwSignal<UsersState>>();

    let filter = RwSignal::new(JobFilter::default());
    let pager = RwSignal::new(Pager::new(JOB_PAGE_SIZES[0]));
    let selected = RwSignal::new(None::<String>);

    let filtered = Memo::new(move |_| {
        let lang = tr.lang();
        filter.with(|f| jobs.with(|list| f.apply(list, lang)))
    });
    let total = Signal::derive(move || filtered.with(Vec::len));
    let back_to_first = move || pager.update(Pager::reset);

    let showing = move || {
        let shown = pager.get().slice(&filtered.get()).len();
        tr.tf(
            "requests.showing",
            &[("shown", &shown.to_string()), ("total", &jobs.with(Vec::len).to_string())],
        )
    };

    let status_options = move || {
        let lang = tr.lang();
        jobs.with(|list| job_status_options(list))
            .into_iter()
            .map(|raw| {
                let label = job_status_label(lang, &JobStatus::from(raw.clone()));
                view! { <option value=raw>{label}</option> }
            })
            .collect_view()
    };
    let service_options = move || {
        jobs.with(|list| job_service_options(list, tr.lang()))
            .into_iter()
            .map(|name| { let label = name.clone(); view! { <option value=name>{label}</option> } })
            .collect_view()
    };
    let payment_choices = move || {
        let lang = tr.lang();
        jobs.with(|list| payment_options(list))
            .into_iter()
            .map(|raw| {
                let label = payment_label(lang, &PaymentType::from(raw.clone()));
                view! { <option value=raw>{label}</option> }
            })
            .collect_view()
    };

    let rows = move || {
        let lang = tr.lang();
        let na = tr.t("common.not_available");
        filtered.with(|list| {
            users_state.with(|users| {
                pager
                    .get()
                    .slice(list)
                    .iter()
                    .map(|job| {
                        let id = job.id.clone();
                        let client = person_name(job.client.as_ref(), &users.items).unwrap_or_else(|| na.to_owned());
                        let craftsman = person_name(job.craftsman.as_ref(), &users.items)
                            .unwrap_or_else(|| tr.t("requests.not_assigned").to_owned());
                        view! {
                            <tr>
                                <td class="cell-mono" title=job.id.clone()>{truncate(&job.id, 8)}</td>
                                <td title=job.title.clone()>{truncate(&job.title, 30)}</td>
                                <td>{job_service_name(job, lang).map_or_else(|| tr.t("requests.no_service").to_owned(), str::to_owned)}</td>
                                <td>
                                    <span class=format!("badge {}", job_status_tone(&job.status))>
                                        {job_status_label(lang, &job.status)}
                                    </span>
                                </td>
                                <td>{job.payment_type.as_ref().map_or_else(|| na.to_owned(), |p| payment_label(lang, p))}</td>
                                <td>{client}</td>
                                <td>{craftsman}</td>
                                <td>
                                    {format_date(job.job_date.as_deref(), lang)
                                        .unwrap_or_else(|| tr.t("requests.not_scheduled").to_owned())}
                                </td>
                                <td>{format_date(job.created_at.as_deref(), lang).unwrap_or_default()}</td>
                                <td class="cell-actions">
                                    <button class="btn btn--small" on:click=move |_| selected.set(Some(id.clone()))>
                                        {tr.t("common.view")}
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()
            })
        })
    };

    let build_export = Callback::new(move |pdf: bool| {
        users_state.with_untracked(|users| export::jobs_table(&filtered.get_untracked(), &users.items, tr.lang(), pdf))
    });

    view! {
        <section class="panel">
            <div class="filters">
                <input
                    class="input filters__search"
                    type="search"
                    placeholder=move || tr.t("requests.search_placeholder")
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
                    {status_options}
                </select>
                <select
                    class="select"
                    prop:value=move || filter.with(|f| f.service.select_value().to_owned())
                    on:change=move |ev| {
                        filter.update(|f| f.service = Choice::from_select(&event_target_value(&ev)));
                        back_to_first();
                    }
                >
                    <option value="all">{move || tr.t("requests.all_services")}</option>
                    {service_options}
                </select>
                <select
                    class="select"
                    prop:value=move || filter.with(|f| f.payment.select_value().to_owned())
                    on:change=move |ev| {
                        filter.update(|f| f.payment = Choice::from_select(&event_target_value(&ev)));
                        back_to_first();
                    }
                >
                    <option value="all">{move || tr.t("requests.all_payment_types")}</option>
                    {payment_choices}
                </select>
                <PageSizeSelect pager=pager sizes=&JOB_PAGE_SIZES/>
                <ExportButtons build_table=build_export/>
            </div>

            <p class="muted table-summary">{showing}</p>

            <Show
                when=move || { total.get() > 0 }
                fallback=move || view! { <p class="empty">{move || tr.t("requests.no_jobs")}</p> }
            >
                <div class="table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{move || tr.t("requests.job_id")}</th>
                                <th>{move || tr.t("requests.job_title")}</th>
                                <th>{move || tr.t("requests.service")}</th>
                                <th>{move || tr.t("common.status")}</th>
                                <th>{move || tr.t("requests.payment_type")}</th>
                                <th>{move || tr.t("requests.client")}</th>
                                <th>{move || tr.t("requests.craftsman")}</th>
                                <th>{move || tr.t("requests.job_date")}</th>
                                <th>{move || tr.t("common.created_at")}</th>
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
                .map(|job_id| {
                    view! { <JobDetailsModal job_id=job_id on_close=Callback::new(move |()| selected.set(None))/> }
                })
        }}
    }
}
