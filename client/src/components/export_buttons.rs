//! CSV / PDF export buttons for table views.

use leptos::prelude::*;

use crate::state::notice::use_notices;
use crate::state::ui::use_tr;
use crate::util::export::{self, ExportTable};

/// Two buttons that build the current (filtered) table and download it.
/// `build_table` receives `true` for the PDF variant so callers can pick a compact
/// column set there.
#[component]
pub fn ExportButtons(build_table: Callback<bool, ExportTable>) -> impl IntoView {
    let tr = use_tr();
    let notices = use_notices();

    let run = move |pdf: bool| {
        let table = build_table.run(pdf);
        let result = if pdf { export::export_pdf(&table) } else { export::export_csv(&table) };
        if let Err(e) = result {
            #[cfg(feature = "hydrate")]
            log::error!("export of {} failed: {e}", table.file_stem);
            notices.error(tr.t("common.error"), e.to_string());
        }
    };

    view! {
        <div class="export-buttons">
            <button class="btn btn--outline" on:click=move |_| run(false)>
                {move || tr.t("common.export_csv")}
            </button>
            <button class="btn btn--outline" on:click=move |_| run(true)>
                {move || tr.t("common.export_pdf")}
            </button>
        </div>
    }
}
