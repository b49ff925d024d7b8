//! Services page: catalog stats, usage charts, and catalog CRUD.
//!
//! Create/edit/delete patch the page's service list in place so the table,
//! stats and charts update without a refetch.

use leptos::prelude::*;

use crate::components::charts::{BarChart, ChartCard};
use crate::components::layout::DashboardLayout;
use crate::components::service_modal::{ServiceDetailsModal, ServiceModal};
use crate::components::services_table::ServicesTable;
use crate::components::stat_card::StatCard;
use crate::net::types::{Job, Service};
use crate::state::collection::{self, Collection};
use crate::state::notice::{ConfirmRequest, Notices, use_notices};
use crate::state::ui::{Tr, use_tr};
use crate::state::users::UsersState;
use crate::util::listing::{remove_by, upsert_by};
use crate::util::stats::{self, ChartPoint, ServiceStats};

#[derive(Clone, Debug, PartialEq)]
enum ServiceDialog {
    Create,
    Edit(Service),
    View(Service),
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <ServicesContent/>
        </DashboardLayout>
    }
}

fn confirm_delete(services: RwSignal<Collection<Service>>, notices: Notices, tr: Tr, service: &Service) {
    let id = service.id.clone();
    let name = service.name.pick(tr.lang()).to_owned();
    notices.confirm(ConfirmRequest {
        title: tr.t("services.confirm_delete_title").to_owned(),
        text: tr.tf("services.confirm_delete_text", &[("name", &name)]),
        confirm_label: tr.t("common.delete").to_owned(),
        danger: true,
        on_confirm: Callback::new(move |()| {
            let id = id.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_service(&id).await {
                    Ok(()) => {
                        services.update(|c| {
                            remove_by(&mut c.items, &id, |s| s.id.as_str());
                        });
                        notices.success(tr.t("common.success"), tr.t("services.delete_success"));
                    }
                    Err(e) => {
                        log::warn!("delete service {id} failed: {e}");
                        notices.error(tr.t("common.error"), e.user_message(tr.t("services.delete_error")));
                    }
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (id, services);
        }),
    });
}

#[component]
fn ServicesContent() -> impl IntoView {
    let tr = use_tr();
    let notices = use_notices();
    let users_state = expect_context::<RwSignal<UsersState>>();

    let services = RwSignal::new(Collection::<Service>::default());
    let jobs = RwSignal::new(Collection::<Job>::default());
    collection::load(services, "services", crate::net::api::fetch_services);
    collection::load(jobs, "jobs", crate::net::api::fetch_jobs);

    let dialog = RwSignal::new(None::<ServiceDialog>);

    let counts = Memo::new(move |_| services.with(|s| users_state.with(|u| stats::service_stats(&s.items, &u.items))));
    let stat = move |pick: fn(&ServiceStats) -> usize| move || counts.with(pick).to_string();

    let usage = Memo::new(move |_| {
        let lang = tr.lang();
        services.with(|s| users_state.with(|u| stats::service_usage(&s.items, &u.items, lang)))
    });
    let usage_points = Signal::derive(move || {
        usage.with(|list| {
            list.iter()
                .map(|u| {
                    #[allow(clippy::cast_precision_loss)]
                    let value = u.craftsmen as f64;
                    ChartPoint { label: u.name.clone(), value }
                })
                .collect::<Vec<_>>()
        })
    });
    let most_requested = Signal::derive(move || {
        let lang = tr.lang();
        jobs.with(|j| services.with(|s| stats::jobs_per_service(&j.items, &s.items, lang)))
    });
    let ratings = Signal::derive(move || {
        let lang = tr.lang();
        users_state.with(|u| services.with(|s| stats::ratings_by_service(&u.items, &s.items, lang)))
    });

    let usage_legend = move || {
        usage
            .get()
            .into_iter()
            .map(|u| {
                let share = tr.tf(
                    "services.craftsmen_share",
                    &[("count", &u.craftsmen.to_string()), ("percent", &format!("{:.1}", u.percent))],
                );
                view! {
                    <li class="chart-legend__item">
                        <span class="chart-legend__label">{u.name}</span>
                        <span class="chart-legend__value">{share}</span>
                    </li>
                }
            })
            .collect_view()
    };

    let items = Signal::derive(move || services.with(|s| s.items.clone()));
    let on_saved = Callback::new(move |saved: Service| {
        services.update(|c| upsert_by(&mut c.items, saved, |s| s.id.as_str()));
    });
    let close = Callback::new(move |()| dialog.set(None));

    let dialog_view = move || {
        dialog.get().map(|d| match d {
            ServiceDialog::Create => view! { <ServiceModal service=None on_saved=on_saved on_close=close/> }.into_any(),
            ServiceDialog::Edit(service) => {
                view! { <ServiceModal service=Some(service) on_saved=on_saved on_close=close/> }.into_any()
            }
            ServiceDialog::View(service) => {
                let used_by = users_state.with_untracked(|u| {
                    stats::craftsmen_per_service_id(&u.items).get(service.id.as_str()).copied().unwrap_or(0)
                });
                view! { <ServiceDetailsModal service=service craftsmen=used_by on_close=close/> }.into_any()
            }
        })
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>{move || tr.t("services.title")}</h1>
                <button class="btn btn--primary" on:click=move |_| dialog.set(Some(ServiceDialog::Create))>
                    {move || tr.t("services.add")}
                </button>
            </header>

            <div class="stat-grid">
                <StatCard label=move || tr.t("services.stat_total").to_owned() value=stat(|s| s.total) icon="🧰"/>
                <StatCard
                    label=move || tr.t("services.stat_active").to_owned()
                    value=stat(|s| s.active)
                    icon="✔"
                    tone="success"
                />
                <StatCard
                    label=move || tr.t("services.stat_unused").to_owned()
                    value=stat(|s| s.unused)
                    icon="○"
                    tone="warning"
                />
            </div>

            <div class="chart-grid">
                <ChartCard title=move || tr.t("services.chart_usage").to_owned()>
                    <BarChart points=usage_points horizontal=true/>
                    <ul class="chart-legend">{usage_legend}</ul>
                </ChartCard>
                <ChartCard title=move || tr.t("services.chart_most_requested").to_owned()>
                    <BarChart points=most_requested color="var(--color-accent)"/>
                </ChartCard>
                <ChartCard title=move || tr.t("services.chart_ratings").to_owned()>
                    <BarChart points=ratings max=5.0 color="var(--color-warning)"/>
                </ChartCard>
            </div>

            {move || {
                services.with(|s| {
                    if s.is_initial_load() {
                        Some(view! { <p class="loading">{tr.t("common.loading")}</p> }.into_any())
                    } else if s.error.is_some() {
                        Some(view! { <p class="error">{tr.t("common.fetch_error")}</p> }.into_any())
                    } else {
                        None
                    }
                })
            }}

            <ServicesTable
                services=items
                on_view=Callback::new(move |s: Service| dialog.set(Some(ServiceDialog::View(s))))
                on_edit=Callback::new(move |s: Service| dialog.set(Some(ServiceDialog::Edit(s))))
                on_delete=Callback::new(move |s: Service| confirm_delete(services, notices, tr, &s))
            />

            {dialog_view}
        </div>
    }
}
