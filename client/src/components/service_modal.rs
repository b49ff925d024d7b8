//! Create/edit form for a catalog service, plus its read-only detail view.
//!
//! The image is optional on both create and edit; a picked file is previewed
//! through a `blob:` URL that is released when the dialog closes.

use leptos::prelude::*;

use crate::components::form::{TextField, field_error};
use crate::components::modal::Modal;
use crate::components::user_details_modal::DetailRow;
use crate::net::types::Service;
use crate::state::notice::use_notices;
use crate::state::ui::use_tr;
use crate::util::format::format_date;
use crate::util::i18n::Language;
use crate::util::upload::{self, UploadFile};
use crate::util::validate::{FormErrors, ServiceDraft};

#[component]
pub fn ServiceModal(
    /// Service being edited; `None` creates a new one.
    service: Option<Service>,
    on_saved: Callback<Service>,
    on_close: Callback<()>,
) -> impl IntoView {
    let tr = use_tr();
    let notices = use_notices();

    let editing_id = service.as_ref().map(|s| s.id.clone());
    let existing_image = service.as_ref().and_then(|s| s.image.clone()).filter(|url| !url.trim().is_empty());
    let draft = RwSignal::new(service.as_ref().map(ServiceDraft::from_service).unwrap_or_default());
    let errors = RwSignal::new(FormErrors::new());
    let image = RwSignal::new_local(None::<UploadFile>);
    let image_error = RwSignal::new(None::<&'static str>);
    let saving = RwSignal::new(false);
    let is_edit = editing_id.is_some();

    let close = Callback::new(move |()| {
        if let Some(file) = image.get_untracked() {
            upload::release(&file);
        }
        on_close.run(());
    });

    let on_file = move |ev: leptos::ev::Event| match upload::from_change_event(&ev) {
        Ok(picked) => {
            if let Some(old) = image.get_untracked() {
                upload::release(&old);
            }
            image.set(picked);
            image_error.set(None);
        }
        Err(key) => image_error.set(Some(key)),
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
            let id = editing_id.clone();
            let file = image.get_untracked();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::save_service(id.as_deref(), &current, file.as_ref()).await;
                saving.set(false);
                match result {
                    Ok(saved) => {
                        let key = if id.is_some() { "services.update_success" } else { "services.create_success" };
                        notices.success(tr.t("common.success"), tr.t(key));
                        on_saved.run(saved);
                        close.run(());
                    }
                    Err(e) => {
                        log::warn!("service save failed: {e}");
                        notices.error(tr.t("common.error"), e.user_message(tr.t("services.save_error")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, notices, on_saved, &editing_id);
            saving.set(false);
        }
    };

    let preview = move || {
        image
            .with(|picked| picked.as_ref().map(|f| f.preview_url.clone()))
            .or_else(|| existing_image.clone())
    };

    let name_error = field_error(errors, "name");
    let description_error = field_error(errors, "description");

    view! {
        <Modal
            title=move || tr.t(if is_edit { "services.edit_title" } else { "services.create_title" }).to_owned()
            on_close=close
        >
            <form class="form" on:submit=on_submit>
                <TextField
                    label=move || tr.t("services.name_en").to_owned()
                    value=move || draft.with(|d| d.name_en.clone())
                    on_input=Callback::new(move |v: String| draft.update(|d| d.name_en = v))
                    error=name_error
                    dir="ltr"
                />
                <TextField
                    label=move || tr.t("services.name_ar").to_owned()
                    value=move || draft.with(|d| d.name_ar.clone())
                    on_input=Callback::new(move |v: String| draft.update(|d| d.name_ar = v))
                    dir="rtl"
                />
                <TextField
                    label=move || tr.t("services.description_en").to_owned()
                    value=move || draft.with(|d| d.description_en.clone())
                    on_input=Callback::new(move |v: String| draft.update(|d| d.description_en = v))
                    error=description_error
                    multiline=true
                    dir="ltr"
                />
                <TextField
                    label=move || tr.t("services.description_ar").to_owned()
                    value=move || draft.with(|d| d.description_ar.clone())
                    on_input=Callback::new(move |v: String| draft.update(|d| d.description_ar = v))
                    multiline=true
                    dir="rtl"
                />
                <label class="field">
                    <span class="field__label">{move || tr.t("services.image")}</span>
                    <input class="input" type="file" accept="image/*" on:change=on_file/>
                    <span class="field__error">{move || image_error.get().map(|key| tr.t(key))}</span>
                </label>
                {move || preview().map(|src| view! { <img class="image-preview" src=src alt=""/> })}
                <div class="dialog__footer">
                    <button type="button" class="btn" on:click=move |_| close.run(())>
                        {move || tr.t("common.cancel")}
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                        {move || if saving.get() { tr.t("common.saving") } else { tr.t("common.save") }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
pub fn ServiceDetailsModal(
    service: Service,
    /// Craftsmen offering this service.
    craftsmen: usize,
    on_close: Callback<()>,
) -> impl IntoView {
    let tr = use_tr();
    let service = StoredValue::new(service);
    let image = service.with_value(|s| s.image.clone()).filter(|url| !url.trim().is_empty());

    let localized = move |pick: fn(&Service, Language) -> String| {
        move || service.with_value(|s| pick(s, tr.lang()))
    };

    view! {
        <Modal title=move || tr.t("services.details_title").to_owned() on_close=on_close>
            <div class="details">
                {image.map(|src| view! { <img class="details__image" src=src alt=""/> })}
                <DetailRow
                    label=move || tr.t("services.name").to_owned()
                    value=localized(|s, lang| s.name.pick(lang).to_owned())
                />
                <DetailRow
                    label=move || tr.t("services.description").to_owned()
                    value=localized(|s, lang| s.description.pick(lang).to_owned())
                />
                <DetailRow
                    label=move || tr.t("services.name_en").to_owned()
                    value=service.with_value(|s| s.name.en.clone())
                />
                <DetailRow
                    label=move || tr.t("services.name_ar").to_owned()
                    value=service.with_value(|s| s.name.ar.clone())
                />
                <DetailRow label=move || tr.t("nav.craftsmen").to_owned() value=craftsmen.to_string()/>
                <DetailRow
                    label=move || tr.t("common.created_at").to_owned()
                    value=localized(|s, lang| format_date(s.created_at.as_deref(), lang).unwrap_or_default())
                />
                <DetailRow
                    label=move || tr.t("common.updated_at").to_owned()
                    value=localized(|s, lang| format_date(s.updated_at.as_deref(), lang).unwrap_or_default())
                />
            </div>
        </Modal>
    }
}
