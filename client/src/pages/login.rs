//! Admin login page: email + password against the internal-account endpoint.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::{UiState, apply_language, use_tr};
use crate::util::auth::install_login_bypass;
use crate::util::validate::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = use_tr();

    install_login_bypass(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(key) = validate_login(&email_value, &password_value) {
            info.set(tr.t(key).to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                // The login bypass effect moves on to the dashboard.
                Ok(payload) => auth.update(|a| a.sign_in(payload)),
                Err(e) => {
                    log::warn!("login failed: {e}");
                    info.set(e.localized_message(tr.lang(), "login.failed"));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    let toggle_language = move |_| {
        let next = ui.get_untracked().language.toggled();
        apply_language(next);
        ui.update(|u| u.language = next);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <button class="btn btn--ghost login-card__language" on:click=toggle_language>
                    {move || ui.get().language.toggled().code().to_uppercase()}
                </button>
                <h1>{move || tr.t("login.title")}</h1>
                <p class="login-card__subtitle">{move || tr.t("login.subtitle")}</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">{move || tr.t("login.email")}</span>
                        <input
                            class="login-input"
                            type="email"
                            autocomplete="username"
                            placeholder="admin@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">{move || tr.t("login.password")}</span>
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { tr.t("login.signing_in") } else { tr.t("login.submit") }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message login-message--error">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// `/`: send the visitor to the dashboard or the login page.
#[component]
pub fn RootRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading {
            navigate(
                crate::util::auth::root_target(&state),
                leptos_router::NavigateOptions { replace: true, ..Default::default() },
            );
        }
    });

    let tr = use_tr();
    view! { <div class="loading">{move || tr.t("common.loading")}</div> }
}
