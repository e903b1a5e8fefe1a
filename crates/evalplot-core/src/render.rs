// File: crates/evalplot-core/src/render.rs
// Summary: Top-level render routine: load, validate, group, draw, persist.

use std::path::PathBuf;

use log::{debug, error, info};

use crate::axis::Axis;
use crate::chart::{Chart, RenderOptions};
use crate::dataset::{self, SeriesGroup};
use crate::error::RenderError;
use crate::series::Series;
use crate::theme;

/// Everything one render invocation needs.
#[derive(Clone, Debug)]
pub struct RenderRequest {
    pub csv_path: PathBuf,
    pub output_path: PathBuf,
    pub title: String,
    pub theme: String,
}

/// Read the dataset at `csv_path` and persist a loss-versus-epoch line chart
/// at `output_path`, one series per probe attribute in ascending lexicographic
/// label order, with x ticks at exactly the distinct epochs present.
///
/// Every failure is logged and returned to the caller; nothing panics and
/// nothing is retried. On success the resolved output path comes back.
pub fn render(req: &RenderRequest) -> Result<PathBuf, RenderError> {
    let records = dataset::load_records(&req.csv_path).map_err(|e| {
        error!("{e}");
        e
    })?;
    debug!(
        "loaded {} records from {}",
        records.len(),
        req.csv_path.display()
    );

    let groups = dataset::group_by_attr(&records);
    let epochs = dataset::distinct_epochs(&records);

    let mut chart = Chart::new(req.title.as_str());
    chart.x_axis = fit_x_axis(&epochs);
    chart.y_axis = fit_y_axis(&groups);
    for g in &groups {
        chart.add_series(Series::from_group(g));
    }

    let opts = RenderOptions {
        theme: theme::find(&req.theme),
        ..RenderOptions::default()
    };
    chart.render_to_png(&opts, &req.output_path).map_err(|e| {
        let err = RenderError::Output {
            path: req.output_path.clone(),
            cause: format!("{e:#}"),
        };
        error!("{err}");
        err
    })?;

    info!("chart saved to {}", req.output_path.display());
    Ok(req.output_path.clone())
}

/// X range spanning the distinct epochs with a small margin; widened when the
/// dataset covers a single epoch so the scale never collapses.
fn fit_x_axis(epochs: &[i64]) -> Axis {
    let min = epochs.first().copied().unwrap_or(0) as f64;
    let max = epochs.last().copied().unwrap_or(1) as f64;
    let margin = if (max - min).abs() < 1e-9 {
        0.5
    } else {
        (max - min) * 0.02
    };
    Axis::new("Epoch", min - margin, max + margin)
        .with_ticks(epochs.iter().map(|&e| e as f64).collect())
}

/// Y range fitted to the observed losses. NaN losses are skipped by the
/// min/max fold; a fold that never sees a finite value falls back to a unit
/// range, and a constant range is widened before the margin is applied.
fn fit_y_axis(groups: &[SeriesGroup]) -> Axis {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for g in groups {
        for &(_, loss) in &g.points {
            y_min = y_min.min(loss);
            y_max = y_max.max(loss);
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return Axis::new("Average Loss", 0.0, 1.0);
    }
    if (y_max - y_min).abs() < 1e-9 {
        y_min -= 0.5;
        y_max += 0.5;
    }
    let margin = (y_max - y_min) * 0.02;
    Axis::new("Average Loss", y_min - margin, y_max + margin)
}
