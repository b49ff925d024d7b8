//! Shared dialog frame: backdrop, header with close button, body.

use leptos::prelude::*;

/// Modal dialog. Clicking the backdrop or pressing Escape closes it.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                class:dialog--wide=wide
                role="dialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h2>{move || title.get()}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) aria-label="close">
                        "×"
                    </button>
                </div>
                <div class="dialog__body">{children()}</div>
            </div>
        </div>
    }
}
