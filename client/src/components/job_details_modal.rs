//! Job details: photos, info, location with map, people, timeline, quotes.
//!
//! The job and its quotes are fetched by id when the modal opens; client and
//! craftsman ids that arrive unpopulated are resolved through the user cache.

#[cfg(test)]
#[path = "job_details_modal_test.rs"]
mod job_details_modal_test;

use leptos::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::modal::Modal;
use crate::components::user_details_modal::DetailRow;
use crate::net::types::{Job, Quote, QuoteStatus};
use crate::state::ui::use_tr;
use crate::state::users::UsersState;
use crate::util::export::person_name;
use crate::util::format::{format_date, format_date_time, format_money};
use crate::util::i18n::{Language, job_status_label, payment_label, quote_status_label};

/// Half-size of the embedded map's bounding box, in degrees.
const MAP_SPAN: f64 = 0.01;

/// OpenStreetMap embed URL centred on the job with a marker.
pub fn osm_embed_url(lat: f64, lng: f64) -> String {
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={},{},{},{}&layer=mapnik&marker={lat},{lng}",
        lng - MAP_SPAN,
        lat - MAP_SPAN,
        lng + MAP_SPAN,
        lat + MAP_SPAN,
    )
}

/// Full-page OpenStreetMap link for the job location.
pub fn osm_link(lat: f64, lng: f64) -> String {
    format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=16/{lat}/{lng}")
}

/// Timeline entries as `(i18n key, formatted date)`, skipping absent dates.
pub fn timeline(job: &Job, lang: Language) -> Vec<(&'static str, String)> {
    [
        ("common.created_at", job.created_at.as_deref(), true),
        ("requests.job_date", job.job_date.as_deref(), false),
        ("common.updated_at", job.updated_at.as_deref(), true),
    ]
    .into_iter()
    .filter_map(|(key, raw, with_time)| {
        let text = if with_time { format_date_time(raw, lang) } else { format_date(raw, lang) };
        text.map(|t| (key, t))
    })
    .collect()
}

/// Badge modifier for a quote state.
pub fn quote_tone(status: &QuoteStatus) -> &'static str {
    match status {
        QuoteStatus::Accepted => "badge--success",
        QuoteStatus::Declined => "badge--danger",
        QuoteStatus::Submitted | QuoteStatus::Other(_) => "badge--info",
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Loaded {
    Loading,
    Ready(Box<Job>, Vec<Quote>),
    Missing,
}

#[component]
pub fn JobDetailsModal(job_id: String, on_close: Callback<()>) -> impl IntoView {
    let tr = use_tr();
    let users_state = expect_context::<RwSignal<UsersState>>();
    let loaded = RwSignal::new(Loaded::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let job = crate::net::api::fetch_job(&job_id).await;
        let quotes = crate::net::api::fetch_job_quotes(&job_id).await;
        let next = match job {
            Ok(job) => Loaded::Ready(
                Box::new(job),
                quotes.unwrap_or_else(|e| {
                    log::warn!("quotes for job {job_id} unavailable: {e}");
                    Vec::new()
                }),
            ),
            Err(e) => {
                log::warn!("job {job_id} fetch failed: {e}");
                Loaded::Missing
            }
        };
        loaded.set(next);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = job_id;

    let body = move || match loaded.get() {
        Loaded::Loading => view! { <p class="loading">{tr.t("common.loading")}</p> }.into_any(),
        Loaded::Missing => view! { <p class="error">{tr.t("requests.job_not_found")}</p> }.into_any(),
        Loaded::Ready(job, quotes) => {
            let lang = tr.lang();
            let (client, craftsman) = users_state.with(|s| {
                (person_name(job.client.as_ref(), &s.items), person_name(job.craftsman.as_ref(), &s.items))
            });
            view! { <JobBody job=*job quotes=quotes lang=lang client=client craftsman=craftsman/> }.into_any()
        }
    };

    view! {
        <Modal title=move || tr.t("requests.details_title").to_owned() on_close=on_close wide=true>
            {body}
        </Modal>
    }
}

#[component]
fn JobBody(
    job: Job,
    quotes: Vec<Quote>,
    lang: Language,
    client: Option<String>,
    craftsman: Option<String>,
) -> impl IntoView {
    let tr = use_tr();
    let na = || tr.t("common.not_available").to_owned();

    let photos = if job.photos.is_empty() {
        view! { <p class="muted">{tr.t("requests.no_photos")}</p> }.into_any()
    } else {
        view! { <Carousel images=job.photos.clone() alt="job photo"/> }.into_any()
    };

    let service = job
        .service
        .as_ref()
        .and_then(|s| s.name(lang).map(str::to_owned))
        .unwrap_or_else(|| tr.t("requests.no_service").to_owned());
    let payment = job.payment_type.as_ref().map_or_else(na, |p| payment_label(lang, p));
    let address = job.address.as_ref().map(|a| a.short_line()).unwrap_or_default();

    let location = job.location.as_ref().and_then(|l| l.lat_lng()).map(|(lat, lng)| {
        view! {
            <DetailRow label=tr.t("requests.coordinates").to_owned() value=format!("{lat:.5}, {lng:.5}")/>
            {view! { <iframe class="map-embed" src=osm_embed_url(lat, lng) title="map"></iframe> }.attr("loading", "lazy")}
            <a class="btn btn--small" href=osm_link(lat, lng) target="_blank" rel="noopener noreferrer">
                {tr.t("requests.open_map")}
            </a>
        }
    });

    let timeline_items = timeline(&job, lang)
        .into_iter()
        .map(|(key, when)| {
            view! {
                <li class="timeline__item">
                    <span class="timeline__label">{tr.t(key)}</span>
                    <span class="timeline__date">{when}</span>
                </li>
            }
        })
        .collect_view();

    let quote_rows = quotes
        .iter()
        .map(|q| {
            let who = q
                .craftsman
                .as_ref()
                .and_then(|c| c.populated().map(|u| u.display_name().to_owned()))
                .unwrap_or_else(|| q.craftsman.as_ref().map(|c| c.id().to_owned()).unwrap_or_else(na));
            view! {
                <tr>
                    <td>{who}</td>
                    <td>{format_money(q.price)}</td>
                    <td>
                        <span class=format!("badge {}", quote_tone(&q.status))>{quote_status_label(lang, &q.status)}</span>
                    </td>
                    <td>{q.notes.clone().unwrap_or_default()}</td>
                    <td>{format_date(q.created_at.as_deref(), lang).unwrap_or_default()}</td>
                </tr>
            }
        })
        .collect_view();
    let has_quotes = !quotes.is_empty();

    view! {
        <div class="job-details">
            <section class="details__section">
                <h3>{tr.t("requests.photos")}</h3>
                {photos}
            </section>

            <section class="details__section">
                <h3 class="details__name">{job.title.clone()}</h3>
                <p>{job.description.clone()}</p>
                <DetailRow label=tr.t("requests.job_id").to_owned() value=job.id.clone()/>
                <DetailRow label=tr.t("common.status").to_owned() value=job_status_label(lang, &job.status)/>
                <DetailRow label=tr.t("requests.service").to_owned() value=service/>
                <DetailRow label=tr.t("requests.payment_type").to_owned() value=payment/>
            </section>

            <section class="details__section">
                <h3>{tr.t("requests.location")}</h3>
                <DetailRow label=tr.t("requests.address").to_owned() value=address/>
                {location}
            </section>

            <section class="details__section">
                <h3>{tr.t("requests.people")}</h3>
                <DetailRow label=tr.t("requests.client").to_owned() value=client.unwrap_or_default()/>
                <DetailRow
                    label=tr.t("requests.craftsman").to_owned()
                    value=craftsman.unwrap_or_else(|| tr.t("requests.not_assigned").to_owned())
                />
            </section>

            <section class="details__section">
                <h3>{tr.t("requests.timeline")}</h3>
                <ul class="timeline">{timeline_items}</ul>
            </section>

            <section class="details__section">
                <h3>{tr.t("requests.quotes")}</h3>
                {if has_quotes {
                    view! {
                        <table class="table table--compact">
                            <thead>
                                <tr>
                                    <th>{tr.t("requests.craftsman")}</th>
                                    <th>{tr.t("requests.price")}</th>
                                    <th>{tr.t("common.status")}</th>
                                    <th>{tr.t("requests.notes")}</th>
                                    <th>{tr.t("common.created_at")}</th>
                                </tr>
                            </thead>
                            <tbody>{quote_rows}</tbody>
                        </table>
                    }
                        .into_any()
                } else {
                    view! { <p class="muted">{tr.t("requests.no_quotes")}</p> }.into_any()
                }}
            </section>
        </div>
    }
}
