//! Signed-in admin's profile: read-only view with an inline edit form.

use leptos::prelude::*;

use crate::components::form::{TextField, field_error};
use crate::components::layout::DashboardLayout;
use crate::components::user_details_modal::DetailRow;
use crate::state::auth::AuthState;
use crate::state::notice::use_notices;
use crate::state::ui::use_tr;
use crate::state::users::UsersState;
use crate::util::format::format_date;
use crate::util::i18n::role_label;
use crate::util::upload::{self, UploadFile};
use crate::util::validate::{FormErrors, ProfileDraft, split_full_name};

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <ProfileContent/>
        </DashboardLayout>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let tr = use_tr();
    let auth = expect_context::<RwSignal<AuthState>>();
    let editing = RwSignal::new(false);

    let field = move |pick: fn(&crate::net::types::User) -> String| {
        move || {
            auth.with(|a| a.user().map(pick)).filter(|v| !v.trim().is_empty()).unwrap_or_else(|| tr.t("profile.not_provided").to_owned())
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>{move || tr.t("profile.title")}</h1>
                <Show when=move || !editing.get()>
                    <button class="btn btn--primary" on:click=move |_| editing.set(true)>
                        {move || tr.t("profile.edit")}
                    </button>
                </Show>
            </header>

            <section class="panel profile">
                <div class="profile__header">
                    <img
                        class="avatar avatar--lg"
                        src=move || auth.with(|a| a.user().map(crate::net::types::User::avatar_url).unwrap_or_default())
                        alt=""
                    />
                    <div>
                        <h2>{move || auth.with(|a| a.user().map(|u| u.display_name().to_owned()).unwrap_or_default())}</h2>
                        <span class="badge">
                            {move || auth.with(|a| a.user().map(|u| role_label(tr.lang(), &u.role)).unwrap_or_default())}
                        </span>
                    </div>
                </div>

                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <DetailRow
                                label=move || tr.t("profile.first_name").to_owned()
                                value=field(|u| split_full_name(&u.full_name).0)
                            />
                            <DetailRow
                                label=move || tr.t("profile.last_name").to_owned()
                                value=field(|u| split_full_name(&u.full_name).1)
                            />
                            <DetailRow label=move || tr.t("common.email").to_owned() value=field(|u| u.email.clone())/>
                            <DetailRow
                                label=move || tr.t("common.phone").to_owned()
                                value=field(|u| u.phone().to_owned())
                            />
                            <DetailRow
                                label=move || tr.t("users.joined").to_owned()
                                value=move || {
                                    auth.with(|a| a.user().and_then(|u| format_date(u.created_at.as_deref(), tr.lang())))
                                        .unwrap_or_else(|| tr.t("profile.not_provided").to_owned())
                                }
                            />
                        }
                    }
                >
                    <ProfileForm on_done=Callback::new(move |()| editing.set(false))/>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn ProfileForm(on_done: Callback<()>) -> impl IntoView {
    let tr = use_tr();
    let notices = use_notices();
    let auth = expect_context::<RwSignal<AuthState>>();
    let users_state = expect_context::<RwSignal<UsersState>>();

    let initial = auth.with_untracked(|a| a.user().map(ProfileDraft::from_user).unwrap_or_default());
    let draft = RwSignal::new(initial);
    let errors = RwSignal::new(FormErrors::new());
    let picture = RwSignal::new_local(None::<UploadFile>);
    let picture_error = RwSignal::new(None::<&'static str>);
    let saving = RwSignal::new(false);

    let finish = Callback::new(move |()| {
        if let Some(file) = picture.get_untracked() {
            upload::release(&file);
        }
        on_done.run(());
    });

    let on_file = move |ev: leptos::ev::Event| match upload::from_change_event(&ev) {
        Ok(picked) => {
            if let Some(old) = picture.get_untracked() {
                upload::release(&old);
            }
            picture.set(picked);
            picture_error.set(None);
        }
        Err(key) => picture_error.set(Some(key)),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        if let Err(found) = current.validate() {
            errors.set(found);
            return;
        }
        errors.set(FormErrors::new());
        saving.set(true);
        #[cfg(feature = "hydrate")]
        {
            let file = picture.get_untracked();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::update_profile(&current, file.as_ref()).await;
                saving.set(false);
                match result {
                    Ok(user) => {
                        users_state.update(|s| crate::util::listing::upsert_by(&mut s.items, user.clone(), |u| u.id.as_str()));
                        auth.update(|a| a.replace_user(user));
                        notices.success(tr.t("common.success"), tr.t("profile.update_success"));
                        finish.run(());
                    }
                    Err(e) => {
                        log::warn!("profile update failed: {e}");
                        notices.error(tr.t("common.error"), e.user_message(tr.t("profile.update_error")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, notices, users_state);
            saving.set(false);
        }
    };

    let preview = move || picture.with(|p| p.as_ref().map(|f| f.preview_url.clone()));

    view! {
        <form class="form" on:submit=on_submit>
            <TextField
                label=move || tr.t("profile.first_name").to_owned()
                value=move || draft.with(|d| d.first_name.clone())
                on_input=Callback::new(move |v: String| draft.update(|d| d.first_name = v))
                error=field_error(errors, "first_name")
            />
            <TextField
                label=move || tr.t("profile.last_name").to_owned()
                value=move || draft.with(|d| d.last_name.clone())
                on_input=Callback::new(move |v: String| draft.update(|d| d.last_name = v))
                error=field_error(errors, "last_name")
            />
            <TextField
                label=move || tr.t("common.email").to_owned()
                value=move || draft.with(|d| d.email.clone())
                on_input=Callback::new(move |v: String| draft.update(|d| d.email = v))
                error=field_error(errors, "email")
                kind="email"
            />
            <TextField
                label=move || tr.t("common.phone").to_owned()
                value=move || draft.with(|d| d.phone.clone())
                on_input=Callback::new(move |v: String| draft.update(|d| d.phone = v))
                kind="tel"
            />
            <label class="field">
                <span class="field__label">{move || tr.t("profile.picture")}</span>
                <input class="input" type="file" accept="image/*" on:change=on_file/>
                <span class="field__error">{move || picture_error.get().map(|key| tr.t(key))}</span>
            </label>
            {move || preview().map(|src| view! { <img class="image-preview avatar avatar--lg" src=src alt=""/> })}
            <div class="dialog__footer">
                <button type="button" class="btn" on:click=move |_| finish.run(())>
                    {move || tr.t("common.cancel")}
                </button>
                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { tr.t("common.saving") } else { tr.t("common.save") }}
                </button>
            </div>
        </form>
    }
}
