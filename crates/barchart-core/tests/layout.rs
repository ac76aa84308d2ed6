// File: crates/barchart-core/tests/layout.rs
// Purpose: Validate origin, axis, bar and tick placement for the sample data set.

use barchart_core::{sample_data, ApproxTextMetrics, BarChartView, BarData, Insets, PointI32, RectI32};

// 14px font: every glyph 7px wide and 7px tall.
fn view_400x300() -> BarChartView<ApproxTextMetrics> {
    let mut view = BarChartView::new(ApproxTextMetrics { advance: 0.5, cap_height: 0.5 });
    view.set_size(400, 300);
    view.set_padding(Insets::uniform(10));
    view
}

#[test]
fn metrics_from_sample_data() {
    let mut view = view_400x300();
    view.set_y_axis_data(sample_data());
    assert_eq!(view.max_value_of_data(), 99.0);
    // "11.1" / "99.0": 4 glyphs.
    assert_eq!(view.max_width_of_y_axis_text(), 28);
    assert_eq!(view.max_height_of_x_axis_text(), 7);
    assert_eq!(view.x_axis_label_and_margin(), 21);
}

#[test]
fn origin_and_axes() {
    let mut view = view_400x300();
    view.set_y_axis_data(sample_data());
    let g = view.geometry();

    assert_eq!(view.origin(), PointI32::new(52, 269));
    assert_eq!(g.origin, view.origin());
    assert_eq!((g.usable_width, g.usable_height), (380, 280));
    assert_eq!(g.plot_height, 259);
    assert_eq!(g.y_axis, (PointI32::new(52, 269), PointI32::new(52, 10)));
    assert_eq!(g.x_axis, (PointI32::new(52, 269), PointI32::new(390, 269)));
}

#[test]
fn bars_fill_odd_slots() {
    let mut view = view_400x300();
    view.set_y_axis_data(sample_data());
    let g = view.geometry();

    assert_eq!(g.slot_width, 26);
    assert_eq!(g.bars.len(), 6);
    assert_eq!(g.bars[0].rect.left, 78);
    assert_eq!(g.bars[0].rect.right, 104);
    // Tallest bar reaches the top of the Y axis.
    assert_eq!(g.bars[4].rect, RectI32::from_ltrb(286, 10, 312, 269));
    assert_eq!(g.bars[1].rect.height(), 20);
    for pair in g.bars.windows(2) {
        assert_eq!(pair[1].rect.left - pair[0].rect.right, g.slot_width);
    }
    assert!(g.bars.iter().all(|b| b.rect.bottom == 269));
    assert!(g.bars.last().unwrap().rect.right <= g.x_axis.1.x);
}

#[test]
fn x_labels_centered_below_axis() {
    let mut view = view_400x300();
    view.set_y_axis_data(sample_data());
    let g = view.geometry();

    let jan = &g.bars[0];
    assert_eq!(jan.label, "Jan");
    assert_eq!(jan.label_origin, PointI32::new(81, 290));
    assert!(g.bars.iter().all(|b| b.label_origin.y == 290));
}

#[test]
fn y_ticks_run_from_max_down_to_zero() {
    let mut view = view_400x300();
    view.set_y_axis_data(sample_data());
    let g = view.geometry();

    assert_eq!(g.y_ticks.len(), 10);
    let first = &g.y_ticks[0];
    assert_eq!(first.label, "99.0");
    assert_eq!(first.line_from, PointI32::new(45, 10));
    assert_eq!(first.line_to, PointI32::new(52, 10));
    assert_eq!(first.label_origin, PointI32::new(10, 13));

    assert_eq!(g.y_ticks[1].label, "88.0");
    assert_eq!(g.y_ticks[1].line_to.y, 38);

    let last = g.y_ticks.last().unwrap();
    assert_eq!(last.label, "0.0");
    assert_eq!(last.line_to.y, g.origin.y);

    let labels: Vec<&str> = g.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["99.0", "88.0", "77.0", "66.0", "55.0", "44.0", "33.0", "22.0", "11.0", "0.0"]);
}

#[test]
fn single_bar_sits_in_middle_slot() {
    let mut view = view_400x300();
    view.set_y_axis_data(vec![BarData::new("Only", 5.0)]);
    let g = view.geometry();
    let axis_len = g.x_axis.1.x - g.x_axis.0.x;
    assert_eq!(g.slot_width, axis_len / 3);
    assert_eq!(g.bars[0].rect.left, g.origin.x + g.slot_width);
    assert_eq!(g.bars[0].rect.top, g.origin.y - g.plot_height);
}

#[test]
fn narrow_view_keeps_bar_inside_axis() {
    // Slots divide the X-axis length, not `usable width - label column`.
    // The latter ignores the axis gap: here it gives 10px slots and a bar
    // ending 20px right of the origin on a 16px axis.
    let mut view = view_400x300();
    view.set_size(71, 300);
    view.set_y_axis_data(vec![BarData::new("Only", 5.0)]);
    let g = view.geometry();

    assert_eq!(g.usable_width, 51);
    assert_eq!(view.max_width_of_y_axis_text(), 21);
    let axis_len = g.x_axis.1.x - g.x_axis.0.x;
    assert_eq!(axis_len, 16);
    let label_column_slot = (g.usable_width - view.max_width_of_y_axis_text()) / 3;
    assert!(g.origin.x + 2 * label_column_slot > g.x_axis.1.x);

    assert_eq!(g.slot_width, 5);
    assert_eq!(g.bars[0].rect.right, g.origin.x + 10);
    assert!(g.bars[0].rect.right <= g.x_axis.1.x);
}

#[test]
fn empty_data_reserves_no_label_row() {
    let view = view_400x300();
    let g = view.geometry();
    assert_eq!(g.origin, PointI32::new(24, 290));
    assert_eq!(g.y_axis.1, PointI32::new(24, 24));
    assert!(g.bars.is_empty());
    assert!(g.y_ticks.is_empty());
}

#[test]
fn negative_values_draw_flat_bars() {
    let mut view = view_400x300();
    view.set_y_axis_data(vec![BarData::new("a", -3.0), BarData::new("b", 6.0)]);
    let g = view.geometry();
    assert_eq!(view.max_value_of_data(), 6.0);
    assert_eq!(g.bars[0].rect.height(), 0);
    assert_eq!(g.bars[1].rect.height(), g.plot_height);
}

#[test]
fn tiny_view_clamps_lengths() {
    let mut view = view_400x300();
    view.set_size(0, 0);
    view.set_y_axis_data(sample_data());
    let g = view.geometry();
    assert_eq!(g.plot_height, 0);
    assert_eq!(g.slot_width, 0);
    assert!(g.bars.iter().all(|b| b.rect.width() == 0 && b.rect.height() == 0));
}
