//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    craftsmen::CraftsmenPage,
    login::{LoginPage, RootRedirect},
    orders::OrdersPage,
    overview::OverviewPage,
    profile::ProfilePage,
    services::ServicesPage,
    users::UsersPage,
};
use crate::state::{
    auth::AuthState,
    notice::NoticeState,
    refresh::RefreshTrigger,
    ui::{UiState, apply_language, read_language},
    users::UsersState,
};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" dir="ltr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared contexts and sets up client-side routing. The stored
/// session and display preferences are restored once the app is running in
/// the browser; until then auth stays `pending` so guards hold off.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let users = RwSignal::new(UsersState::default());
    let refresh = RwSignal::new(RefreshTrigger::default());
    let ui = RwSignal::new(UiState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(auth);
    provide_context(users);
    provide_context(refresh);
    provide_context(ui);
    provide_context(notices);

    Effect::new(move |_| {
        auth.set(AuthState::restore());
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        let language = read_language();
        apply_language(language);
        ui.update(|u| {
            u.dark_mode = dark;
            u.language = language;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/marketplace-admin.css"/>
        <Title text="Marketplace Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=OverviewPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("orders") view=OrdersPage/>
                <Route path=StaticSegment("craftsmen") view=CraftsmenPage/>
                <Route path=StaticSegment("services") view=ServicesPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
