//! File-input glue for image uploads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Service images and profile pictures are picked with an `<input type=file>`
//! and previewed before submit. The browser `File` handle is kept beside its
//! metadata so the multipart request can attach it later; signals holding an
//! [`UploadFile`] are local (`RwSignal::new_local`) because the handle is not
//! `Send`.

#[derive(Clone, Debug)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    /// `blob:` URL for the preview thumbnail.
    pub preview_url: String,
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

/// Read the first selected file from a file-input `change` event.
///
/// Returns `Ok(None)` when the selection was cleared.
///
/// # Errors
///
/// Returns the i18n key from [`crate::util::validate::validate_image`] when the file is rejected.
pub fn from_change_event(ev: &leptos::ev::Event) -> Result<Option<UploadFile>, &'static str> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return Ok(None);
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return Ok(None);
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = file.size() as u64;
        let mime = file.type_();
        if let Err(key) = crate::util::validate::validate_image(&mime, size) {
            input.set_value("");
            return Err(key);
        }
        let preview_url = web_sys::Url::create_object_url_with_blob(&file).unwrap_or_default();
        Ok(Some(UploadFile { name: file.name(), mime, size, preview_url, file }))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        Ok(None)
    }
}

/// Release the preview URL once the upload is discarded or sent.
pub fn release(upload: &UploadFile) {
    #[cfg(feature = "hydrate")]
    {
        if upload.preview_url.starts_with("blob:") {
            let _ = web_sys::Url::revoke_object_url(&upload.preview_url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = upload;
    }
}
