//! Users page: the full user table and admin account creation.

use leptos::prelude::*;

use crate::components::create_admin_modal::CreateAdminModal;
use crate::components::layout::DashboardLayout;
use crate::components::user_table::UserTable;
use crate::state::ui::use_tr;
use crate::state::users::UsersState;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <UsersContent/>
        </DashboardLayout>
    }
}

#[component]
fn UsersContent() -> impl IntoView {
    let tr = use_tr();
    let users_state = expect_context::<RwSignal<UsersState>>();
    let creating = RwSignal::new(false);

    view! {
        <div class="page">
            <header class="page__header">
                <h1>{move || tr.t("users.title")}</h1>
                <button class="btn btn--primary" on:click=move |_| creating.set(true)>
                    {move || tr.t("users.create_admin")}
                </button>
            </header>

            <Show when=move || users_state.with(UsersState::failed)>
                <p class="error">{move || tr.t("common.fetch_error")}</p>
            </Show>

            <UserTable/>

            <Show when=move || creating.get()>
                <CreateAdminModal on_close=Callback::new(move |()| creating.set(false))/>
            </Show>
        </div>
    }
}
