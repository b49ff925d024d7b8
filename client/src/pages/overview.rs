//! Dashboard overview: headline stats and trend charts.

use leptos::prelude::*;

use crate::components::charts::{BarChart, ChartCard, LineChart, PieChart};
use crate::components::layout::DashboardLayout;
use crate::components::stat_card::StatCard;
use crate::net::types::{Job, Service};
use crate::state::collection::{self, Collection};
use crate::state::ui::use_tr;
use crate::state::users::UsersState;
use crate::util::format::today_key;
use crate::util::stats::{self, OverviewStats};

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <OverviewContent/>
        </DashboardLayout>
    }
}

#[component]
fn OverviewContent() -> impl IntoView {
    let tr = use_tr();
    let users_state = expect_context::<RwSignal<UsersState>>();
    let jobs = RwSignal::new(Collection::<Job>::default());
    let services = RwSignal::new(Collection::<Service>::default());

    collection::load(jobs, "jobs", crate::net::api::fetch_jobs);
    collection::load(services, "services", crate::net::api::fetch_services);

    let today = today_key();
    let overview = Memo::new(move |_| {
        users_state.with(|u| jobs.with(|j| stats::overview_stats(&u.items, &j.items, &today)))
    });
    let stat = move |pick: fn(&OverviewStats) -> String| move || overview.with(pick);

    let by_month = Signal::derive(move || jobs.with(|j| stats::jobs_by_month(&j.items)));
    let growth = Signal::derive(move || users_state.with(|u| stats::user_growth(&u.items)));
    let by_service = Signal::derive(move || {
        let lang = tr.lang();
        users_state.with(|u| {
            services.with(|s| stats::craftsmen_by_service(&u.items, &s.items, lang, tr.t("common.unknown")))
        })
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>{move || tr.t("overview.title")}</h1>
            </header>

            <Show when=move || jobs.with(|j| j.error.is_some()) || users_state.with(UsersState::failed)>
                <p class="error">{move || tr.t("common.fetch_error")}</p>
            </Show>

            <div class="stat-grid">
                <StatCard
                    label=move || tr.t("overview.stat_users").to_owned()
                    value=stat(|s| s.users.to_string())
                    icon="👥"
                />
                <StatCard
                    label=move || tr.t("overview.stat_verified_craftsmen").to_owned()
                    value=stat(|s| s.verified_craftsmen.to_string())
                    icon="✔"
                    tone="success"
                />
                <StatCard
                    label=move || tr.t("overview.stat_jobs").to_owned()
                    value=stat(|s| s.jobs.to_string())
                    icon="📋"
                    tone="info"
                />
                <StatCard
                    label=move || tr.t("overview.stat_jobs_today").to_owned()
                    value=stat(|s| s.jobs_today.to_string())
                    icon="📅"
                    tone="info"
                />
                <StatCard
                    label=move || tr.t("overview.stat_completed").to_owned()
                    value=stat(|s| s.completed.to_string())
                    icon="🏁"
                    tone="success"
                />
                <StatCard
                    label=move || tr.t("overview.stat_ongoing").to_owned()
                    value=stat(|s| s.ongoing.to_string())
                    icon="⏳"
                    tone="warning"
                />
                <StatCard
                    label=move || tr.t("overview.stat_cancelled").to_owned()
                    value=stat(|s| s.cancelled.to_string())
                    icon="✖"
                    tone="danger"
                />
                <StatCard
                    label=move || tr.t("overview.stat_average_rating").to_owned()
                    value=stat(|s| format!("{:.2}", s.average_rating))
                    icon="★"
                    tone="warning"
                />
            </div>

            <div class="chart-grid">
                <ChartCard title=move || tr.t("overview.chart_jobs_by_month").to_owned()>
                    <BarChart points=by_month/>
                </ChartCard>
                <ChartCard title=move || tr.t("overview.chart_user_growth").to_owned()>
                    <LineChart points=growth/>
                </ChartCard>
                <ChartCard title=move || tr.t("overview.chart_craftsmen_by_category").to_owned()>
                    <PieChart points=by_service/>
                </ChartCard>
            </div>
        </div>
    }
}
