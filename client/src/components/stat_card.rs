//! Single headline number with label and glyph.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] value: Signal<String>,
    icon: &'static str,
    /// Palette modifier (`primary`, `success`, `warning`, `danger`, `info`).
    #[prop(default = "primary")]
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{tone}")>
            <span class="stat-card__icon" aria-hidden="true">{icon}</span>
            <div class="stat-card__body">
                <span class="stat-card__value">{move || value.get()}</span>
                <span class="stat-card__label">{move || label.get()}</span>
            </div>
        </div>
    }
}
