// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports bar data, the chart view and the drawing seam.

pub mod canvas;
pub mod data;
pub mod error;
pub mod format;
pub mod geometry;
pub mod layout;
pub mod style;
pub mod svg;
pub mod text;
pub mod types;
pub mod view;

pub use canvas::{Canvas, DrawCommand, Paint, RecordingCanvas};
pub use data::{sample_data, BarData};
pub use error::ChartError;
pub use geometry::{PointI32, RectI32};
pub use layout::{BarGeometry, ChartGeometry, LayoutMetrics, YTick};
pub use style::ChartStyle;
pub use svg::SvgCanvas;
pub use text::{ApproxTextMetrics, TextBounds, TextMetrics};
pub use types::{Color, Insets};
pub use view::BarChartView;
