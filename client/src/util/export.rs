//! CSV and PDF export of filtered table views.
//!
//! DESIGN
//! ======
//! Every page builds one [`ExportTable`] (localized headers plus string rows)
//! from its filtered list. The table is then serialized with `csv` or laid out
//! as a paginated landscape A4 document with `printpdf`, and handed to the
//! browser as a Blob download.
//!
//! TRADE-OFFS
//! ==========
//! The PDF uses the built-in Helvetica faces so no font file ships with the
//! bundle. Those faces have no Arabic glyphs; Arabic exports read correctly in
//! CSV only.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::net::types::{Job, User, UserRef};
use crate::util::filters::craftsman_skill;
use crate::util::format::{format_date, truncate};
use crate::util::i18n::{Language, ban_label, job_status_label, payment_label, role_label, t, verification_label};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const PAGE_WIDTH_MM: f32 = 297.0;
const PAGE_HEIGHT_MM: f32 = 210.0;
const MARGIN_MM: f32 = 12.0;
const TITLE_PT: f32 = 14.0;
const CELL_PT: f32 = 8.0;
const ROW_MM: f32 = 6.0;
/// Approximate Helvetica advance at [`CELL_PT`].
const CHAR_MM: f32 = 1.5;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv export failed: {0}")]
    CsvFlush(String),
    #[error("pdf export failed: {0}")]
    Pdf(String),
    #[error("download failed: {0}")]
    Download(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportTable {
    pub title: String,
    /// Download name without extension.
    pub file_stem: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    /// CSV bytes with a UTF-8 BOM so spreadsheet apps detect Arabic text.
    pub fn to_csv(&self) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.into_inner().map_err(|e| ExportError::CsvFlush(e.to_string()))
    }

    /// Single-table PDF, header repeated on every page.
    pub fn to_pdf(&self) -> Result<Vec<u8>, ExportError> {
        let (doc, first_page, first_layer) =
            PdfDocument::new(&self.title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "table");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?;

        let columns = self.headers.len().max(1);
        #[allow(clippy::cast_precision_loss)]
        let column_mm = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / columns as f32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let max_chars = ((column_mm / CHAR_MM) as usize).max(4) - 1;

        let mut pages = vec![(first_page, first_layer)];
        let rows_per_page = rows_per_page();
        let chunks: Vec<&[Vec<String>]> = if self.rows.is_empty() {
            vec![&[]]
        } else {
            self.rows.chunks(rows_per_page).collect()
        };
        for _ in 1..chunks.len() {
            pages.push(doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "table"));
        }

        for ((page, layer), rows) in pages.into_iter().zip(chunks) {
            let layer = doc.get_page(page).get_layer(layer);
            let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
            layer.use_text(self.title.as_str(), TITLE_PT, Mm(MARGIN_MM), Mm(y), &bold);
            y -= ROW_MM * 1.5;

            for (i, header) in self.headers.iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let x = MARGIN_MM + column_mm * i as f32;
                layer.use_text(truncate(header, max_chars), CELL_PT, Mm(x), Mm(y), &bold);
            }
            for row in rows {
                y -= ROW_MM;
                for (i, cell) in row.iter().enumerate().take(columns) {
                    #[allow(clippy::cast_precision_loss)]
                    let x = MARGIN_MM + column_mm * i as f32;
                    layer.use_text(truncate(cell, max_chars), CELL_PT, Mm(x), Mm(y), &regular);
                }
            }
        }

        doc.save_to_bytes().map_err(pdf_error)
    }
}

fn pdf_error(err: impl std::fmt::Display) -> ExportError {
    ExportError::Pdf(err.to_string())
}

fn rows_per_page() -> usize {
    let body_mm = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM - ROW_MM * 2.5;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rows = (body_mm / ROW_MM) as usize;
    rows.max(1)
}

// =============================================================================
// TABLE BUILDERS
// =============================================================================

fn or_na(value: Option<String>, lang: Language) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| t(lang, "common.not_available").to_owned())
}

pub fn users_table(users: &[User], lang: Language) -> ExportTable {
    let headers = [
        "common.name",
        "common.email",
        "common.phone",
        "common.country",
        "common.role",
        "common.status",
        "common.rating",
        "common.rating_count",
        "common.created_at",
    ];
    ExportTable {
        title: t(lang, "export.users_title").to_owned(),
        file_stem: "users".to_owned(),
        headers: headers.iter().map(|&k| t(lang, k).to_owned()).collect(),
        rows: users
            .iter()
            .map(|u| {
                vec![
                    u.full_name.clone(),
                    u.email.clone(),
                    u.phone().to_owned(),
                    u.country().to_owned(),
                    role_label(lang, &u.role),
                    ban_label(lang, u.is_banned).to_owned(),
                    u.rating.map(|r| r.to_string()).unwrap_or_default(),
                    u.rating_count.map(|n| n.to_string()).unwrap_or_default(),
                    or_na(format_date(u.created_at.as_deref(), lang), lang),
                ]
            })
            .collect(),
    }
}

pub fn craftsmen_table(craftsmen: &[User], lang: Language) -> ExportTable {
    let headers = [
        "common.name",
        "common.email",
        "common.phone",
        "common.city",
        "users.service",
        "users.verification_status",
        "common.status",
        "common.created_at",
    ];
    ExportTable {
        title: t(lang, "export.craftsmen_title").to_owned(),
        file_stem: "craftsmen".to_owned(),
        headers: headers.iter().map(|&k| t(lang, k).to_owned()).collect(),
        rows: craftsmen
            .iter()
            .map(|u| {
                vec![
                    u.full_name.clone(),
                    u.email.clone(),
                    u.phone().to_owned(),
                    u.city().to_owned(),
                    craftsman_skill(u, lang).unwrap_or(t(lang, "common.unknown")).to_owned(),
                    verification_label(lang, &u.verification_status()),
                    ban_label(lang, u.is_banned).to_owned(),
                    or_na(format_date(u.created_at.as_deref(), lang), lang),
                ]
            })
            .collect(),
    }
}

/// Display name of a job participant, using the user cache for bare ids.
pub fn person_name(reference: Option<&UserRef>, users: &[User]) -> Option<String> {
    let reference = reference?;
    let user = match reference.populated() {
        Some(user) => Some(user),
        None => users.iter().find(|u| u.id == reference.id()),
    }?;
    Some(user.display_name().to_owned()).filter(|n| !n.trim().is_empty())
}

/// Jobs table. The full layout carries every column; the compact one
/// (PDF) shortens ids and titles to fit the page.
pub fn jobs_table(jobs: &[Job], users: &[User], lang: Language, compact: bool) -> ExportTable {
    let headers: &[&'static str] = if compact {
        &[
            "requests.job_id",
            "requests.job_title",
            "requests.service",
            "common.status",
            "requests.payment_type",
            "requests.client",
            "requests.craftsman",
            "common.created_at",
        ]
    } else {
        &[
            "requests.job_id",
            "requests.job_title",
            "requests.description",
            "requests.service",
            "common.status",
            "requests.payment_type",
            "requests.client",
            "requests.craftsman",
            "requests.address",
            "common.created_at",
            "requests.job_date",
        ]
    };
    let rows = jobs
        .iter()
        .map(|job| {
            let service = job
                .service
                .as_ref()
                .and_then(|s| s.name(lang))
                .unwrap_or(t(lang, "requests.no_service"))
                .to_owned();
            let status = job_status_label(lang, &job.status);
            let payment = job.payment_type.as_ref().map(|p| payment_label(lang, p)).unwrap_or_default();
            let client = person_name(job.client.as_ref(), users).unwrap_or_else(|| t(lang, "common.unknown").to_owned());
            let craftsman =
                person_name(job.craftsman.as_ref(), users).unwrap_or_else(|| t(lang, "requests.not_assigned").to_owned());
            let created = or_na(format_date(job.created_at.as_deref(), lang), lang);
            if compact {
                vec![
                    truncate(&job.id, 8),
                    truncate(&job.title, 20),
                    service,
                    status,
                    payment,
                    client,
                    craftsman,
                    created,
                ]
            } else {
                vec![
                    job.id.clone(),
                    job.title.clone(),
                    job.description.clone(),
                    service,
                    status,
                    payment,
                    client,
                    craftsman,
                    job.address.as_ref().map(|a| a.short_line()).unwrap_or_default(),
                    created,
                    format_date(job.job_date.as_deref(), lang)
                        .unwrap_or_else(|| t(lang, "requests.not_scheduled").to_owned()),
                ]
            }
        })
        .collect();
    ExportTable {
        title: t(lang, "export.jobs_title").to_owned(),
        file_stem: "jobs".to_owned(),
        headers: headers.iter().map(|&k| t(lang, k).to_owned()).collect(),
        rows,
    }
}

// =============================================================================
// DOWNLOAD
// =============================================================================

/// Offer `bytes` to the browser as a file download.
pub fn download(file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), ExportError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let fail = |e: wasm_bindgen::JsValue| ExportError::Download(format!("{e:?}"));
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::of1(&array);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(fail)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(fail)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ExportError::Download("no document".to_owned()))?;
        let anchor = document
            .create_element("a")
            .map_err(fail)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ExportError::Download("anchor cast".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, mime, bytes);
        Ok(())
    }
}

/// Serialize and download `table` as `<stem>.csv`.
pub fn export_csv(table: &ExportTable) -> Result<(), ExportError> {
    let bytes = table.to_csv()?;
    download(&format!("{}.csv", table.file_stem), "text/csv;charset=utf-8", &bytes)
}

/// Serialize and download `table` as `<stem>.pdf`.
pub fn export_pdf(table: &ExportTable) -> Result<(), ExportError> {
    let bytes = table.to_pdf()?;
    download(&format!("{}.pdf", table.file_stem), "application/pdf", &bytes)
}
