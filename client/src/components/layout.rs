//! Dashboard shell: sidebar navigation, top bar, and the admin guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page renders inside [`DashboardLayout`]. The layout owns
//! the redirect to `/login`, warms the shared user cache once an admin session
//! is confirmed, and mounts the notice host. Page content is not mounted (and
//! therefore fetches nothing) until the session check passes.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::notices::NoticeHost;
use crate::state::auth::AuthState;
use crate::state::notice::{ConfirmRequest, use_notices};
use crate::state::ui::{UiState, apply_language, use_tr};
use crate::state::users::{self, UsersState};
use crate::util::auth::install_admin_redirect;
use crate::util::i18n::role_label;

/// Sidebar entries as `(path, i18n key, glyph)`.
const NAV_ITEMS: [(&str, &str, &str); 5] = [
    ("/dashboard", "nav.dashboard", "▦"),
    ("/users", "nav.users", "👥"),
    ("/craftsmen", "nav.craftsmen", "🛠"),
    ("/orders", "nav.requests", "📋"),
    ("/services", "nav.services", "🧰"),
];

/// Whether `pathname` belongs to the section rooted at `target`.
pub fn is_active(pathname: &str, target: &str) -> bool {
    pathname == target || pathname.strip_prefix(target).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn DashboardLayout(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let users_state = expect_context::<RwSignal<UsersState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = use_tr();

    install_admin_redirect(auth, use_navigate());

    Effect::new(move || {
        if auth.with(AuthState::is_admin) {
            users::ensure_loaded(users_state);
        }
    });

    view! {
        <div class="layout" class:layout--collapsed=move || !ui.get().sidebar_open>
            <Sidebar/>
            <div class="layout__main">
                <TopBar/>
                <main class="layout__content">
                    <Show
                        when=move || auth.with(AuthState::is_admin)
                        fallback=move || view! { <div class="loading">{move || tr.t("common.loading")}</div> }
                    >
                        {children()}
                    </Show>
                </main>
            </div>
            <NoticeHost/>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let tr = use_tr();
    let pathname = use_location().pathname;

    let links = NAV_ITEMS
        .into_iter()
        .map(|(path, key, glyph)| {
            view! {
                <a
                    href=path
                    class="sidebar__link"
                    class:sidebar__link--active=move || is_active(&pathname.get(), path)
                >
                    <span class="sidebar__glyph" aria-hidden="true">{glyph}</span>
                    <span class="sidebar__label">{move || tr.t(key)}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">{move || tr.t("app.title")}</div>
            <nav class="sidebar__nav">{links}</nav>
            <UserSection/>
        </aside>
    }
}

#[component]
fn TopBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = use_tr();

    let toggle_dark = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let toggle_language = move |_| {
        let next = ui.get_untracked().language.toggled();
        apply_language(next);
        ui.update(|u| u.language = next);
    };

    view! {
        <header class="topbar">
            <button
                class="btn topbar__menu"
                title=move || tr.t("nav.menu")
                on:click=move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open)
            >
                "☰"
            </button>
            <span class="topbar__spacer"></span>
            <button class="btn topbar__language" title=move || tr.t("nav.language") on:click=toggle_language>
                {move || ui.get().language.toggled().code().to_uppercase()}
            </button>
            <button
                class="btn topbar__dark-toggle"
                title=move || if ui.get().dark_mode { tr.t("nav.light_mode") } else { tr.t("nav.dark_mode") }
                on:click=toggle_dark
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}

#[component]
fn UserSection() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tr = use_tr();
    let notices = use_notices();

    let name = move || auth.with(|a| a.user().map(|u| u.display_name().to_owned()).unwrap_or_default());
    let role = move || auth.with(|a| a.user().map(|u| role_label(tr.lang(), &u.role)).unwrap_or_default());
    let avatar = move || auth.with(|a| a.user().map(crate::net::types::User::avatar_url).unwrap_or_default());

    let on_logout = move |_| {
        notices.confirm(ConfirmRequest {
            title: tr.t("logout.confirm_title").to_owned(),
            text: tr.t("logout.confirm_text").to_owned(),
            confirm_label: tr.t("nav.logout").to_owned(),
            danger: true,
            on_confirm: Callback::new(move |()| {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(crate::net::api::logout());
                // The layout's admin guard performs the redirect to /login.
                auth.update(AuthState::sign_out);
            }),
        });
    };

    view! {
        <div class="sidebar__user">
            <a href="/profile" class="sidebar__profile">
                <img class="avatar avatar--sm" src=avatar alt=""/>
                <span class="sidebar__user-text">
                    <span class="sidebar__user-name">{name}</span>
                    <span class="sidebar__user-role">{role}</span>
                </span>
            </a>
            <button class="btn btn--ghost sidebar__logout" on:click=on_logout>
                {move || tr.t("nav.logout")}
            </button>
        </div>
    }
}
