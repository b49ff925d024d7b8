//! Local UI chrome state (theme, language, sidebar).
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of domain state so pages only read the
//! pieces they render. [`Tr`] wraps the shared signal so views can translate
//! reactively with `move || tr.t("key")`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

use crate::util::i18n::{self, Language};
use crate::util::storage;

pub const LANGUAGE_KEY: &str = "language";

/// UI state for theme, language and sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub language: Language,
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: false, language: Language::En, sidebar_open: true }
    }
}

/// Stored language preference, English when absent or unrecognized.
pub fn read_language() -> Language {
    storage::load_string(LANGUAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

/// Persist `lang` and apply `lang`/`dir` on the `<html>` element.
pub fn apply_language(lang: Language) {
    storage::save_string(LANGUAGE_KEY, lang.code());
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("lang", lang.code());
            let _ = el.set_attribute("dir", lang.dir());
        }
    }
}

/// Reactive translator bound to the shared [`UiState`].
#[derive(Clone, Copy)]
pub struct Tr(RwSignal<UiState>);

impl Tr {
    pub fn lang(self) -> Language {
        self.0.with(|ui| ui.language)
    }

    pub fn t(self, key: &'static str) -> &'static str {
        i18n::t(self.lang(), key)
    }

    pub fn tf(self, key: &'static str, args: &[(&str, &str)]) -> String {
        i18n::tf(self.lang(), key, args)
    }
}

/// Translator from context; call inside a component.
pub fn use_tr() -> Tr {
    Tr(expect_context::<RwSignal<UiState>>())
}
