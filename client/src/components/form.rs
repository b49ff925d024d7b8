//! Labeled input with inline validation message.

use leptos::prelude::*;

use crate::state::ui::use_tr;
use crate::util::validate::FormErrors;

/// Error key recorded for `field`, if any.
pub fn field_error(errors: RwSignal<FormErrors>, field: &'static str) -> Signal<Option<&'static str>> {
    Signal::derive(move || errors.with(|e| e.get(field).copied()))
}

#[component]
pub fn TextField(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// i18n key of the current validation error.
    #[prop(into, optional)]
    error: Option<Signal<Option<&'static str>>>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] multiline: bool,
    /// Fixed text direction, for fields that hold one specific language.
    #[prop(optional)]
    dir: Option<&'static str>,
) -> impl IntoView {
    let tr = use_tr();
    let message = move || error.and_then(|e| e.get()).map(|key| tr.t(key));
    let invalid = move || message().is_some();

    let input = if multiline {
        view! {
            <textarea
                class="input input--multiline"
                class:input--invalid=invalid
                dir=dir
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
            .into_any()
    } else {
        view! {
            <input
                class="input"
                class:input--invalid=invalid
                type=kind
                dir=dir
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
            .into_any()
    };

    view! {
        <label class="field">
            <span class="field__label">{move || label.get()}</span>
            {input}
            <span class="field__error">{message}</span>
        </label>
    }
}
