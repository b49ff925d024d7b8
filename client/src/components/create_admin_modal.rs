//! Form for creating another admin or moderator account.

use leptos::prelude::*;

use crate::components::form::{TextField, field_error};
use crate::components::modal::Modal;
use crate::net::types::Role;
use crate::state::notice::use_notices;
use crate::state::ui::use_tr;
use crate::state::users::UsersState;
use crate::util::i18n::role_label;
use crate::util::validate::{AdminDraft, FormErrors};

#[component]
pub fn CreateAdminModal(on_close: Callback<()>) -> impl IntoView {
    let tr = use_tr();
    let notices = use_notices();
    let users_state = expect_context::<RwSignal<UsersState>>();

    let draft = RwSignal::new(AdminDraft::default());
    let errors = RwSignal::new(FormErrors::new());
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let request = match draft.get_untracked().validate() {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FormErrors::new());
        saving.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_admin(&request).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    notices.success(tr.t("common.success"), tr.t("admin.success"));
                    crate::state::users::reload(users_state);
                    on_close.run(());
                }
                Err(e) => {
                    log::warn!("create admin failed: {e}");
                    notices.error(tr.t("common.error"), e.user_message(tr.t("admin.error")));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, notices, users_state);
            saving.set(false);
        }
    };

    let role_options = [Role::Admin, Role::Moderator]
        .into_iter()
        .map(|role| {
            let value = role.as_str().to_owned();
            view! { <option value=value>{move || role_label(tr.lang(), &role)}</option> }
        })
        .collect_view();

    view! {
        <Modal title=move || tr.t("admin.title").to_owned() on_close=on_close>
            <form class="form" on:submit=on_submit>
                <TextField
                    label=move || tr.t("admin.full_name").to_owned()
                    value=move || draft.with(|d| d.full_name.clone())
                    on_input=Callback::new(move |v: String| draft.update(|d| d.full_name = v))
                    error=field_error(errors, "full_name")
                />
                <TextField
                    label=move || tr.t("common.email").to_owned()
                    value=move || draft.with(|d| d.email.clone())
                    on_input=Callback::new(move |v: String| draft.update(|d| d.email = v))
                    error=field_error(errors, "email")
                    kind="email"
                />
                <TextField
                    label=move || tr.t("admin.phone_optional").to_owned()
                    value=move || draft.with(|d| d.phone.clone())
                    on_input=Callback::new(move |v: String| draft.update(|d| d.phone = v))
                    kind="tel"
                />
                <TextField
                    label=move || tr.t("admin.password").to_owned()
                    value=move || draft.with(|d| d.password.clone())
                    on_input=Callback::new(move |v: String| draft.update(|d| d.password = v))
                    error=field_error(errors, "password")
                    kind="password"
                />
                <label class="field">
                    <span class="field__label">{move || tr.t("common.role")}</span>
                    <select
                        class="select"
                        prop:value=move || draft.with(|d| d.role.clone())
                        on:change=move |ev| draft.update(|d| d.role = event_target_value(&ev))
                    >
                        {role_options}
                    </select>
                    <span class="field__error">
                        {move || errors.with(|e| e.get("role").map(|key| tr.t(key)))}
                    </span>
                </label>
                <div class="dialog__footer">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        {move || tr.t("common.cancel")}
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                        {move || if saving.get() { tr.t("common.saving") } else { tr.t("admin.submit") }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
