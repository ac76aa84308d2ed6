// File: crates/barchart-core/src/error.rs
// Summary: Error type for data validation and style loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("value for '{label}' is not finite: {value}")]
    NonFiniteValue { label: String, value: f32 },
    #[error("invalid style: {0}")]
    InvalidStyle(String),
}
