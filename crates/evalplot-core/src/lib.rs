// File: crates/evalplot-core/src/lib.rs
// Summary: Core library entry point; exports dataset loading and chart rendering.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod render;
pub mod series;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use dataset::{EvaluationRecord, SeriesGroup};
pub use error::RenderError;
pub use render::{render, RenderRequest};
pub use series::Series;
pub use theme::Theme;
