// File: crates/barchart-core/src/format.rs
// Summary: Number formatting for axis labels.

/// One-decimal fixed format used for Y-axis tick labels ("100.0", "11.1").
pub fn format_tick_value(value: f32) -> String {
    let v = if value == 0.0 { 0.0 } else { value };
    format!("{v:.1}")
}

/// Shortest text that round-trips the value, always with a fractional part
/// ("8.0", "11.1", "12.5"). Used to size the Y-label column from the data.
pub fn format_data_value(value: f32) -> String {
    format!("{value:?}")
}
