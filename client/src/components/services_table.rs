//! Service catalog table. Row actions are reported to the owning page.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::pager::{PageSizeSelect, PagerControls};
use crate::net::types::Service;
use crate::state::ui::use_tr;
use crate::state::users::UsersState;
use crate::util::filters::ServiceFilter;
use crate::util::format::{format_date, truncate};
use crate::util::listing::{Pager, SERVICE_PAGE_SIZE, USER_PAGE_SIZES};
use crate::util::stats::craftsmen_per_service_id;

#[component]
pub fn ServicesTable(
    #[prop(into)] services: Signal<Vec<Service>>,
    on_view: Callback<Service>,
    on_edit: Callback<Service>,
    on_delete: Callback<Service>,
) -> impl IntoView {
    let tr = use_tr();
    let users_state = expect_context::<RwSignal<UsersState>>();

    let filter = RwSignal::new(ServiceFilter::default());
    let pager = RwSignal::new(Pager::new(SERVICE_PAGE_SIZE));

    let filtered = Memo::new(move |_| {
        let lang = tr.lang();
        filter.with(|f| services.with(|list| f.apply(list, lang)))
    });
    let total = Signal::derive(move || filtered.with(Vec::len));

    let rows = move || {
        let lang = tr.lang();
        let counts: HashMap<String, usize> = users_state.with(|s| {
            craftsmen_per_service_id(&s.items).into_iter().map(|(id, n)| (id.to_owned(), n)).collect()
        });
        filtered.with(|list| {
            pager
                .get()
                .slice(list)
                .iter()
                .cloned()
                .map(|service| {
                    let used_by = counts.get(&service.id).copied().unwrap_or(0);
                    let image = service.image.clone().filter(|url| !url.trim().is_empty());
                    let name = service.name.pick(lang).to_owned();
                    let description = service.description.pick(lang).to_owned();
                    let created = format_date(service.created_at.as_deref(), lang).unwrap_or_default();
                    let (for_view, for_edit, for_delete) = (service.clone(), service.clone(), service);
                    view! {
                        <tr>
                            <td>
                                {image
                                    .map_or_else(
                                        || view! { <span class="thumb thumb--empty">"🧰"</span> }.into_any(),
                                        |src| view! { <img class="thumb" src=src alt=""/> }.into_any(),
                                    )}
                            </td>
                            <td>{name}</td>
                            <td title=description.clone()>{truncate(&description, 60)}</td>
                            <td>{used_by.to_string()}</td>
                            <td>{created}</td>
                            <td class="cell-actions">
                                <button class="btn btn--small" on:click=move |_| on_view.run(for_view.clone())>
                                    {tr.t("common.view")}
                                </button>
                                <button class="btn btn--small" on:click=move |_| on_edit.run(for_edit.clone())>
                                    {tr.t("common.edit")}
                                </button>
                                <button
                                    class="btn btn--small btn--danger"
                                    on:click=move |_| on_delete.run(for_delete.clone())
                                >
                                    {tr.t("common.delete")}
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="panel">
            <div class="filters">
                <input
                    class="input filters__search"
                    type="search"
                    placeholder=move || tr.t("services.search_placeholder")
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| {
                        filter.update(|f| f.search = event_target_value(&ev));
                        pager.update(Pager::reset);
                    }
                />
                <PageSizeSelect pager=pager sizes=&USER_PAGE_SIZES/>
            </div>

            <Show
                when=move || { total.get() > 0 }
                fallback=move || view! { <p class="empty">{move || tr.t("services.no_services")}</p> }
            >
                <div class="table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{move || tr.t("services.image")}</th>
                                <th>{move || tr.t("services.name")}</th>
                                <th>{move || tr.t("services.description")}</th>
                                <th>{move || tr.t("nav.craftsmen")}</th>
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
    }
}
