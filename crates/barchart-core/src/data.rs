// File: crates/barchart-core/src/data.rs
// Summary: Bar data model: one (category label, value) pair per bar.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// A single bar: the label shown under it on the X axis and its value on Y.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    label: String,
    value: f32,
}

impl BarData {
    pub fn new(label: impl Into<String>, value: f32) -> Self {
        Self { label: label.into(), value }
    }

    /// Construct a bar, rejecting NaN and infinite values.
    pub fn try_new(label: impl Into<String>, value: f32) -> Result<Self, ChartError> {
        let label = label.into();
        if !value.is_finite() {
            return Err(ChartError::NonFiniteValue { label, value });
        }
        Ok(Self { label, value })
    }

    /// Name shown along the X axis.
    pub fn label(&self) -> &str { &self.label }

    pub fn value(&self) -> f32 { self.value }

    /// Re-check the finiteness invariant, e.g. after deserializing.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.value.is_finite() {
            Ok(())
        } else {
            Err(ChartError::NonFiniteValue { label: self.label.clone(), value: self.value })
        }
    }
}

/// The six months of sample data shown by the demo hosts.
pub fn sample_data() -> Vec<BarData> {
    vec![
        BarData::new("Jan", 11.1),
        BarData::new("Feb", 8.0),
        BarData::new("Mar", 20.0),
        BarData::new("Apr", 43.0),
        BarData::new("May", 99.0),
        BarData::new("Jun", 12.5),
    ]
}
