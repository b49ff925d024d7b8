//! Pagination controls and page-size selector for table views.

use leptos::prelude::*;

use crate::state::ui::use_tr;
use crate::util::listing::Pager;

/// Previous / numbered / next buttons. Hidden when everything fits on one page.
#[component]
pub fn PagerControls(pager: RwSignal<Pager>, #[prop(into)] total: Signal<usize>) -> impl IntoView {
    let tr = use_tr();

    let page_label = move || {
        let len = total.get();
        let p = pager.get();
        tr.tf(
            "common.page_of",
            &[
                ("page", &p.effective_page(len).to_string()),
                ("total", &p.total_pages(len).to_string()),
            ],
        )
    };

    view! {
        <Show when=move || pager.get().has_controls(total.get())>
            <nav class="pager">
                <button
                    class="btn pager__btn"
                    disabled=move || !pager.get().can_prev(total.get())
                    on:click=move |_| pager.update(|p| p.prev(total.get_untracked()))
                >
                    {move || tr.t("common.previous")}
                </button>
                {move || {
                    let len = total.get();
                    let current = pager.get();
                    let active_page = current.effective_page(len);
                    (1..=current.total_pages(len))
                        .map(|n| {
                            view! {
                                <button
                                    class="btn pager__page"
                                    class:pager__page--active=n == active_page
                                    on:click=move |_| pager.update(|p| p.go_to(n, total.get_untracked()))
                                >
                                    {n.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="btn pager__btn"
                    disabled=move || !pager.get().can_next(total.get())
                    on:click=move |_| pager.update(|p| p.next(total.get_untracked()))
                >
                    {move || tr.t("common.next")}
                </button>
                <span class="pager__info">{page_label}</span>
            </nav>
        </Show>
    }
}

/// Items-per-page dropdown. Changing it returns to page 1.
#[component]
pub fn PageSizeSelect(pager: RwSignal<Pager>, sizes: &'static [usize]) -> impl IntoView {
    let tr = use_tr();

    view! {
        <label class="page-size">
            <span class="page-size__label">{move || tr.t("common.per_page")}</span>
            <select
                class="select"
                prop:value=move || pager.get().per_page.to_string()
                on:change=move |ev| {
                    if let Ok(n) = event_target_value(&ev).parse::<usize>() {
                        pager.update(|p| p.set_per_page(n));
                    }
                }
            >
                {sizes
                    .iter()
                    .map(|n| view! { <option value=n.to_string()>{n.to_string()}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
