//! Inline SVG charts: vertical/horizontal bars, line, and pie.
//!
//! DESIGN
//! ======
//! Geometry is computed by pure functions over [`ChartPoint`] series in a
//! fixed `400x240` view box; the components only map shapes to SVG elements.
//! The SVG scales to its container width through `viewBox`.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use std::f64::consts::PI;

use leptos::prelude::*;

use crate::state::ui::use_tr;
use crate::util::stats::ChartPoint;

pub const VIEW_W: f64 = 400.0;
pub const VIEW_H: f64 = 240.0;
const PAD_LEFT: f64 = 36.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 34.0;
const HBAR_LABEL_W: f64 = 96.0;

pub const PALETTE: [&str; 6] = [
    "var(--color-primary)",
    "var(--color-success)",
    "var(--color-warning)",
    "var(--color-destructive)",
    "var(--color-accent)",
    "var(--color-info)",
];

/// Integer values print without decimals, others with at most two.
pub fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}").trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

fn scale_max(points: &[ChartPoint], max: Option<f64>) -> f64 {
    let top = max.unwrap_or_else(|| points.iter().map(|p| p.value).fold(0.0, f64::max));
    if top > 0.0 { top } else { 1.0 }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub value: String,
}

/// Column bars, bottom-aligned. `max` fixes the top of the scale.
#[allow(clippy::cast_precision_loss)]
pub fn column_layout(points: &[ChartPoint], max: Option<f64>) -> Vec<BarShape> {
    if points.is_empty() {
        return Vec::new();
    }
    let top = scale_max(points, max);
    let plot_w = VIEW_W - PAD_LEFT - PAD_RIGHT;
    let plot_h = VIEW_H - PAD_TOP - PAD_BOTTOM;
    let slot = plot_w / points.len() as f64;
    let width = (slot * 0.7).min(40.0);
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let height = (p.value.max(0.0) / top).min(1.0) * plot_h;
            BarShape {
                x: PAD_LEFT + i as f64 * slot + (slot - width) / 2.0,
                y: VIEW_H - PAD_BOTTOM - height,
                width,
                height,
                label: p.label.clone(),
                value: format_value(p.value),
            }
        })
        .collect()
}

/// Row bars growing rightwards from the label gutter.
#[allow(clippy::cast_precision_loss)]
pub fn row_layout(points: &[ChartPoint], max: Option<f64>) -> Vec<BarShape> {
    if points.is_empty() {
        return Vec::new();
    }
    let top = scale_max(points, max);
    let plot_w = VIEW_W - HBAR_LABEL_W - PAD_RIGHT - 24.0;
    let plot_h = VIEW_H - PAD_TOP - PAD_TOP;
    let slot = plot_h / points.len() as f64;
    let height = (slot * 0.7).min(24.0);
    points
        .iter()
        .enumerate()
        .map(|(i, p)| BarShape {
            x: HBAR_LABEL_W,
            y: PAD_TOP + i as f64 * slot + (slot - height) / 2.0,
            width: (p.value.max(0.0) / top).min(1.0) * plot_w,
            height,
            label: p.label.clone(),
            value: format_value(p.value),
        })
        .collect()
}

/// `x,y` pairs for an SVG polyline through the series.
#[allow(clippy::cast_precision_loss)]
pub fn line_path(points: &[ChartPoint]) -> Vec<(f64, f64)> {
    let top = scale_max(points, None);
    let plot_w = VIEW_W - PAD_LEFT - PAD_RIGHT;
    let plot_h = VIEW_H - PAD_TOP - PAD_BOTTOM;
    let step = if points.len() > 1 { plot_w / (points.len() - 1) as f64 } else { 0.0 };
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if points.len() > 1 { PAD_LEFT + i as f64 * step } else { PAD_LEFT + plot_w / 2.0 };
            (x, VIEW_H - PAD_BOTTOM - (p.value.max(0.0) / top) * plot_h)
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub path: String,
    pub color: &'static str,
    pub label: String,
    pub value: String,
    /// Share of the whole, `0.0..=1.0`.
    pub fraction: f64,
}

/// Pie slices clockwise from twelve o'clock. Non-positive values are skipped.
pub fn pie_slices(points: &[ChartPoint], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = -PI / 2.0;
    points
        .iter()
        .filter(|p| p.value > 0.0)
        .enumerate()
        .map(|(i, p)| {
            let fraction = p.value / total;
            let path = if fraction >= 0.9999 {
                format!(
                    "M {cx:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {bottom:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {top:.2} Z",
                    top = cy - r,
                    bottom = cy + r,
                )
            } else {
                let end = angle + fraction * 2.0 * PI;
                let (x1, y1) = (cx + r * angle.cos(), cy + r * angle.sin());
                let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
                let large = u8::from(fraction > 0.5);
                angle = end;
                format!("M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large} 1 {x2:.2} {y2:.2} Z")
            };
            PieSlice {
                path,
                color: PALETTE[i % PALETTE.len()],
                label: p.label.clone(),
                value: format_value(p.value),
                fraction,
            }
        })
        .collect()
}

fn short_label(label: &str) -> String {
    crate::util::format::truncate(label, 12)
}

// =============================================================================
// COMPONENTS
// =============================================================================

/// Titled card around a chart.
#[component]
pub fn ChartCard(#[prop(into)] title: Signal<String>, #[prop(optional)] wide: bool, children: Children) -> impl IntoView {
    view! {
        <section class="chart-card" class:chart-card--wide=wide>
            <h3 class="chart-card__title">{move || title.get()}</h3>
            {children()}
        </section>
    }
}

#[component]
fn EmptyChart() -> impl IntoView {
    let tr = use_tr();
    view! { <p class="chart-empty">{move || tr.t("common.no_data")}</p> }
}

/// Bar chart; `horizontal` lays bars out as rows with labels on the left.
#[component]
pub fn BarChart(
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
    #[prop(optional)] horizontal: bool,
    #[prop(optional)] max: Option<f64>,
    #[prop(default = PALETTE[0])] color: &'static str,
) -> impl IntoView {
    move || {
        let series = points.get();
        if series.is_empty() {
            return view! { <EmptyChart/> }.into_any();
        }
        let bars = if horizontal { row_layout(&series, max) } else { column_layout(&series, max) };
        let shapes = bars
            .into_iter()
            .map(|bar| {
                let (label_x, label_y, anchor) = if horizontal {
                    (bar.x - 6.0, bar.y + bar.height / 2.0 + 4.0, "end")
                } else {
                    (bar.x + bar.width / 2.0, VIEW_H - PAD_BOTTOM + 14.0, "middle")
                };
                let (value_x, value_y, value_anchor) = if horizontal {
                    (bar.x + bar.width + 4.0, bar.y + bar.height / 2.0 + 4.0, "start")
                } else {
                    (bar.x + bar.width / 2.0, bar.y - 4.0, "middle")
                };
                view! {
                    <g class="chart__bar">
                        <title>{format!("{}: {}", bar.label, bar.value)}</title>
                        <rect
                            x=format!("{:.2}", bar.x)
                            y=format!("{:.2}", bar.y)
                            width=format!("{:.2}", bar.width)
                            height=format!("{:.2}", bar.height)
                            rx="4"
                            fill=color
                        ></rect>
                        <text class="chart__label" x=format!("{label_x:.2}") y=format!("{label_y:.2}") text-anchor=anchor>
                            {short_label(&bar.label)}
                        </text>
                        <text class="chart__value" x=format!("{value_x:.2}") y=format!("{value_y:.2}") text-anchor=value_anchor>
                            {bar.value}
                        </text>
                    </g>
                }
            })
            .collect_view();
        view! {
            <svg class="chart" viewBox=format!("0 0 {VIEW_W} {VIEW_H}") role="img">
                <line
                    class="chart__axis"
                    x1=format!("{PAD_LEFT}")
                    y1=format!("{}", VIEW_H - PAD_BOTTOM)
                    x2=format!("{}", VIEW_W - PAD_RIGHT)
                    y2=format!("{}", VIEW_H - PAD_BOTTOM)
                ></line>
                {shapes}
            </svg>
        }
            .into_any()
    }
}

/// Line chart with a dot per point.
#[component]
pub fn LineChart(
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
    #[prop(default = PALETTE[1])] color: &'static str,
) -> impl IntoView {
    move || {
        let series = points.get();
        if series.is_empty() {
            return view! { <EmptyChart/> }.into_any();
        }
        let coords = line_path(&series);
        let polyline = coords.iter().map(|(x, y)| format!("{x:.2},{y:.2}")).collect::<Vec<_>>().join(" ");
        let dots = coords
            .into_iter()
            .zip(series)
            .map(|((x, y), p)| {
                view! {
                    <g class="chart__point">
                        <title>{format!("{}: {}", p.label, format_value(p.value))}</title>
                        <circle cx=format!("{x:.2}") cy=format!("{y:.2}") r="3.5" fill=color></circle>
                        <text
                            class="chart__label"
                            x=format!("{x:.2}")
                            y=format!("{}", VIEW_H - PAD_BOTTOM + 14.0)
                            text-anchor="middle"
                        >
                            {short_label(&p.label)}
                        </text>
                    </g>
                }
            })
            .collect_view();
        view! {
            <svg class="chart" viewBox=format!("0 0 {VIEW_W} {VIEW_H}") role="img">
                <polyline points=polyline fill="none" stroke=color stroke-width="3"></polyline>
                {dots}
            </svg>
        }
            .into_any()
    }
}

/// Pie chart with a legend listing label, value and share.
#[component]
pub fn PieChart(#[prop(into)] points: Signal<Vec<ChartPoint>>) -> impl IntoView {
    move || {
        let series = points.get();
        let slices = pie_slices(&series, VIEW_W / 2.0, VIEW_H / 2.0, 90.0);
        if slices.is_empty() {
            return view! { <EmptyChart/> }.into_any();
        }
        let legend = slices
            .iter()
            .map(|s| {
                let share = format!("{:.1}%", s.fraction * 100.0);
                view! {
                    <li class="chart-legend__item">
                        <span class="chart-legend__swatch" style=format!("background:{}", s.color)></span>
                        <span class="chart-legend__label">{s.label.clone()}</span>
                        <span class="chart-legend__value">{format!("{} ({share})", s.value)}</span>
                    </li>
                }
            })
            .collect_view();
        let paths = slices
            .into_iter()
            .map(|s| {
                view! {
                    <path d=s.path fill=s.color class="chart__slice">
                        <title>{format!("{}: {}", s.label, s.value)}</title>
                    </path>
                }
            })
            .collect_view();
        view! {
            <div class="chart-pie">
                <svg class="chart" viewBox=format!("0 0 {VIEW_W} {VIEW_H}") role="img">{paths}</svg>
                <ul class="chart-legend">{legend}</ul>
            </div>
        }
            .into_any()
    }
}
