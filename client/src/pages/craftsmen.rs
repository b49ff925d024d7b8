//! Craftsmen page: verification stats, pending reviews, charts and table.
//!
//! Stats and charts derive from the shared user cache, which the pending
//! verifications panel reloads after every decision.

use leptos::prelude::*;

use crate::components::charts::{BarChart, ChartCard, PieChart};
use crate::components::craftsmen_table::CraftsmenTable;
use crate::components::layout::DashboardLayout;
use crate::components::pending_verifications::PendingVerifications;
use crate::components::stat_card::StatCard;
use crate::state::ui::use_tr;
use crate::state::users::UsersState;
use crate::util::i18n::verification_label;
use crate::util::stats::{self, ChartPoint, CraftsmanStats};

#[component]
pub fn CraftsmenPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <CraftsmenContent/>
        </DashboardLayout>
    }
}

#[component]
fn CraftsmenContent() -> impl IntoView {
    let tr = use_tr();
    let users_state = expect_context::<RwSignal<UsersState>>();

    let counts = Memo::new(move |_| users_state.with(|s| stats::craftsman_stats(&s.items)));
    let stat = move |pick: fn(&CraftsmanStats) -> usize| move || counts.with(pick).to_string();

    let cities = Signal::derive(move || {
        let unknown = tr.t("common.unknown");
        users_state.with(|s| stats::top_cities(&s.items, unknown))
    });
    let verification = Signal::derive(move || {
        let lang = tr.lang();
        users_state.with(|s| {
            stats::verification_distribution(&s.items)
                .into_iter()
                .map(|(status, n)| {
                    #[allow(clippy::cast_precision_loss)]
                    let value = n as f64;
                    ChartPoint { label: verification_label(lang, &status), value }
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>{move || tr.t("craftsmen.title")}</h1>
            </header>

            <Show when=move || users_state.with(UsersState::failed)>
                <p class="error">{move || tr.t("common.fetch_error")}</p>
            </Show>

            <div class="stat-grid">
                <StatCard
                    label=move || tr.t("craftsmen.stat_total").to_owned()
                    value=stat(|s| s.total)
                    icon="🛠"
                />
                <StatCard
                    label=move || tr.t("craftsmen.stat_pending").to_owned()
                    value=stat(|s| s.pending)
                    icon="⏳"
                    tone="warning"
                />
                <StatCard
                    label=move || tr.t("craftsmen.stat_verified").to_owned()
                    value=stat(|s| s.verified)
                    icon="✔"
                    tone="success"
                />
                <StatCard
                    label=move || tr.t("craftsmen.stat_rejected").to_owned()
                    value=stat(|s| s.rejected)
                    icon="✖"
                    tone="danger"
                />
                <StatCard
                    label=move || tr.t("craftsmen.stat_banned").to_owned()
                    value=stat(|s| s.banned)
                    icon="⛔"
                    tone="danger"
                />
            </div>

            <PendingVerifications/>

            <div class="chart-grid">
                <ChartCard title=move || tr.t("craftsmen.chart_top_cities").to_owned()>
                    <BarChart points=cities horizontal=true/>
                </ChartCard>
                <ChartCard title=move || tr.t("craftsmen.chart_verification").to_owned()>
                    <PieChart points=verification/>
                </ChartCard>
            </div>

            <CraftsmenTable/>
        </div>
    }
}
