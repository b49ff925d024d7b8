//! Display formatting for dates, money, ratings and long text.
//!
//! Backend timestamps are ISO-8601 strings. In the browser they are rendered
//! through `Date` in the current locale; elsewhere the date prefix is used
//! as-is, which keeps these helpers testable without a JS runtime.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::util::i18n::Language;

/// `YYYY-MM-DD` prefix of an ISO timestamp, if it has one.
pub fn date_part(raw: &str) -> Option<&str> {
    let head = raw.trim().get(..10)?;
    let bytes = head.as_bytes();
    let shaped = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
    shaped.then_some(head)
}

/// `YYYY-MM` bucket used by the monthly charts.
pub fn month_key(raw: &str) -> Option<&str> {
    date_part(raw).map(|d| &d[..7])
}

/// Calendar day of `raw` in the viewer's timezone, as `YYYY-MM-DD`.
pub fn local_day_key(raw: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw.trim()));
        if date.get_time().is_nan() {
            return None;
        }
        Some(day_key_of(&date))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        date_part(raw).map(str::to_owned)
    }
}

/// Today's date in the viewer's timezone. Empty outside the browser.
pub fn today_key() -> String {
    #[cfg(feature = "hydrate")]
    {
        day_key_of(&js_sys::Date::new_0())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

#[cfg(feature = "hydrate")]
fn day_key_of(date: &js_sys::Date) -> String {
    format!("{:04}-{:02}-{:02}", date.get_full_year(), date.get_month() + 1, date.get_date())
}

/// Short localized date, or `None` for a missing/unparseable timestamp.
pub fn format_date(raw: Option<&str>, lang: Language) -> Option<String> {
    let raw = raw.map(str::trim).filter(|r| !r.is_empty())?;
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if date.get_time().is_nan() {
            return None;
        }
        Some(String::from(date.to_locale_date_string(locale(lang), &wasm_bindgen::JsValue::UNDEFINED)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
        date_part(raw).map(str::to_owned)
    }
}

/// Localized date and time.
pub fn format_date_time(raw: Option<&str>, lang: Language) -> Option<String> {
    let raw = raw.map(str::trim).filter(|r| !r.is_empty())?;
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if date.get_time().is_nan() {
            return None;
        }
        Some(String::from(date.to_locale_string(locale(lang), &wasm_bindgen::JsValue::UNDEFINED)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
        let day = date_part(raw)?;
        match raw.get(11..16) {
            Some(time) if time.as_bytes().get(2) == Some(&b':') => Some(format!("{day} {time}")),
            _ => Some(day.to_owned()),
        }
    }
}

#[cfg(feature = "hydrate")]
fn locale(lang: Language) -> &'static str {
    match lang {
        Language::En => "en-US",
        Language::Ar => "ar-EG",
    }
}

/// First `max` characters, with `...` appended when something was cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let head: String = text.chars().take(max).collect();
    format!("{head}...")
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// One-decimal rating, `None` when the user has never been rated.
pub fn format_rating(rating: Option<f64>) -> Option<String> {
    rating.filter(|r| r.is_finite()).map(|r| format!("{r:.1}"))
}
