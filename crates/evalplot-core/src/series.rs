// File: crates/evalplot-core/src/series.rs
// Summary: Line series model: a label plus (epoch, loss) points.

use crate::dataset::SeriesGroup;

/// One plotted line. Points are expected to be pre-sorted by x.
#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            data_xy: data,
        }
    }

    /// Series for one probe-attribute group, labeled `"{attr} loss"`.
    pub fn from_group(group: &SeriesGroup) -> Self {
        Self::with_data(
            format!("{} loss", group.attr),
            group
                .points
                .iter()
                .map(|&(epoch, loss)| (epoch as f64, loss))
                .collect(),
        )
    }
}
