use super::*;

fn series(values: &[(&str, f64)]) -> Vec<ChartPoint> {
    values.iter().map(|(label, value)| ChartPoint { label: (*label).to_owned(), value: *value }).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn format_value_drops_needless_decimals() {
    assert_eq!(format_value(3.0), "3");
    assert_eq!(format_value(2.5), "2.5");
    assert_eq!(format_value(4.25), "4.25");
    assert_eq!(format_value(0.0), "0");
}

#[test]
fn column_layout_scales_to_largest_value() {
    let bars = column_layout(&series(&[("a", 2.0), ("b", 4.0)]), None);
    assert_eq!(bars.len(), 2);
    assert!(close(bars[1].height, 190.0));
    assert!(close(bars[0].height, 95.0));
    assert!(close(bars[1].y, 16.0));
    assert!(close(bars[0].width, 40.0));
    assert!(close(bars[0].x, 104.0));
    assert_eq!(bars[1].value, "4");
}

#[test]
fn column_layout_respects_fixed_maximum() {
    let bars = column_layout(&series(&[("b", 4.0)]), Some(5.0));
    assert!(close(bars[0].height, 152.0));
}

#[test]
fn column_layout_handles_all_zero_series() {
    let bars = column_layout(&series(&[("a", 0.0), ("b", 0.0)]), None);
    assert!(bars.iter().all(|b| close(b.height, 0.0)));
}

#[test]
fn empty_series_yields_no_shapes() {
    assert!(column_layout(&[], None).is_empty());
    assert!(row_layout(&[], None).is_empty());
    assert!(line_path(&[]).is_empty());
    assert!(pie_slices(&[], 100.0, 100.0, 50.0).is_empty());
}

#[test]
fn row_layout_starts_at_label_gutter() {
    let bars = row_layout(&series(&[("cairo", 3.0), ("giza", 1.0)]), None);
    assert!(bars.iter().all(|b| close(b.x, HBAR_LABEL_W)));
    assert!(bars[0].width > bars[1].width);
    assert!(bars[0].y < bars[1].y);
}

#[test]
fn line_path_spans_plot_width() {
    let coords = line_path(&series(&[("jan", 1.0), ("feb", 2.0), ("mar", 3.0)]));
    assert!(close(coords[0].0, PAD_LEFT));
    assert!(close(coords[2].0, VIEW_W - PAD_RIGHT));
    assert!(close(coords[2].1, PAD_TOP));
}

#[test]
fn single_point_line_is_centered() {
    let coords = line_path(&series(&[("jan", 5.0)]));
    assert!(close(coords[0].0, 212.0));
}

#[test]
fn pie_slices_split_by_share() {
    let slices = pie_slices(&series(&[("pending", 1.0), ("verified", 3.0)]), 100.0, 100.0, 50.0);
    assert_eq!(slices.len(), 2);
    assert!(close(slices[0].fraction, 0.25));
    assert!(close(slices[1].fraction, 0.75));
    assert!(slices[1].path.contains(" 0 1 1 "));
    assert_ne!(slices[0].color, slices[1].color);
}

#[test]
fn pie_skips_zero_values() {
    let slices = pie_slices(&series(&[("a", 0.0), ("b", 2.0)]), 100.0, 100.0, 50.0);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].label, "b");
}

#[test]
fn single_slice_draws_full_circle() {
    let slices = pie_slices(&series(&[("only", 7.0)]), 100.0, 100.0, 50.0);
    assert_eq!(slices[0].path.matches(" A ").count(), 2);
    assert!(slices[0].path.starts_with("M 100.00 50.00"));
}
