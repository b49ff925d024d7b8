//! Orders page: job lifecycle stats and the jobs table.

use leptos::prelude::*;

use crate::components::jobs_table::JobsTable;
use crate::components::layout::DashboardLayout;
use crate::components::stat_card::StatCard;
use crate::net::types::Job;
use crate::state::collection::{self, Collection};
use crate::state::ui::use_tr;
use crate::util::format::today_key;
use crate::util::stats::{self, JobStats};

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <OrdersContent/>
        </DashboardLayout>
    }
}

#[component]
fn OrdersContent() -> impl IntoView {
    let tr = use_tr();
    let jobs = RwSignal::new(Collection::<Job>::default());
    collection::load(jobs, "jobs", crate::net::api::fetch_jobs);

    let today = today_key();
    let counts = Memo::new(move |_| jobs.with(|j| stats::job_stats(&j.items, &today)));
    let stat = move |pick: fn(&JobStats) -> usize| move || counts.with(pick).to_string();
    let items = Signal::derive(move || jobs.with(|j| j.items.clone()));

    view! {
        <div class="page">
            <header class="page__header">
                <h1>{move || tr.t("requests.title")}</h1>
            </header>

            <div class="stat-grid">
                <StatCard label=move || tr.t("requests.stat_total").to_owned() value=stat(|s| s.total) icon="📋"/>
                <StatCard
                    label=move || tr.t("requests.stat_in_progress").to_owned()
                    value=stat(|s| s.in_progress)
                    icon="🚚"
                    tone="info"
                />
                <StatCard
                    label=move || tr.t("requests.stat_awaiting").to_owned()
                    value=stat(|s| s.awaiting_offers)
                    icon="⏳"
                    tone="warning"
                />
                <StatCard
                    label=move || tr.t("requests.stat_completed").to_owned()
                    value=stat(|s| s.completed)
                    icon="🏁"
                    tone="success"
                />
                <StatCard
                    label=move || tr.t("requests.stat_cancelled").to_owned()
                    value=stat(|s| s.cancelled)
                    icon="✖"
                    tone="danger"
                />
                <StatCard
                    label=move || tr.t("requests.stat_disputed").to_owned()
                    value=stat(|s| s.disputed)
                    icon="⚠"
                    tone="danger"
                />
                <StatCard
                    label=move || tr.t("requests.stat_today").to_owned()
                    value=stat(|s| s.created_today)
                    icon="📅"
                    tone="info"
                />
            </div>

            {move || {
                jobs.with(|j| {
                    if j.is_initial_load() {
                        Some(view! { <p class="loading">{tr.t("common.loading")}</p> }.into_any())
                    } else if j.error.is_some() {
                        Some(view! { <p class="error">{tr.t("common.fetch_error")}</p> }.into_any())
                    } else {
                        None
                    }
                })
            }}

            <JobsTable jobs=items/>
        </div>
    }
}
