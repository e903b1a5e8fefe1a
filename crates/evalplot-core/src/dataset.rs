// File: crates/evalplot-core/src/dataset.rs
// Summary: CSV dataset loading, validation, and series grouping.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::RenderError;

/// One row of the evaluation table. Immutable once read.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationRecord {
    pub epoch: i64,
    pub probe_attr: String,
    pub loss: f64,
}

/// Records sharing one probe attribute, ordered by ascending epoch.
#[derive(Clone, Debug)]
pub struct SeriesGroup {
    pub attr: String,
    pub points: Vec<(i64, f64)>,
}

/// Load every record from a headered CSV file.
///
/// Required columns: `epoch`, `probe_attr`, `loss`, matched case-insensitively
/// in any order; extra columns are ignored. The epoch must parse as an integer
/// for every row and the loss as a float; the first offending row terminates
/// the load. A header with zero data rows is an empty dataset.
pub fn load_records(path: &Path) -> Result<Vec<EvaluationRecord>, RenderError> {
    if !path.exists() {
        return Err(RenderError::SourceNotFound { path: path.to_path_buf() });
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| load_err(path, &e))?;

    let headers = rdr
        .headers()
        .map_err(|e| load_err(path, &e))?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    // A file with no header row at all reads as empty, not as malformed.
    if headers.iter().all(|h| h.is_empty()) {
        return Err(RenderError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    let idx = |name: &str| headers.iter().position(|h| h == name);
    let i_epoch = idx("epoch").ok_or_else(|| missing_column(path, "epoch"))?;
    let i_attr = idx("probe_attr").ok_or_else(|| missing_column(path, "probe_attr"))?;
    let i_loss = idx("loss").ok_or_else(|| missing_column(path, "loss"))?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(|e| load_err(path, &e))?;
        let field = |i: usize| rec.get(i).unwrap_or("").trim();

        let raw_epoch = field(i_epoch);
        let epoch = raw_epoch
            .parse::<i64>()
            .map_err(|_| RenderError::MalformedEpoch {
                value: raw_epoch.to_string(),
                row: row + 1,
            })?;

        let raw_loss = field(i_loss);
        let loss = raw_loss.parse::<f64>().map_err(|_| RenderError::Load {
            path: path.to_path_buf(),
            cause: format!("non-numeric loss value {:?} in data row {}", raw_loss, row + 1),
        })?;

        out.push(EvaluationRecord {
            epoch,
            probe_attr: field(i_attr).to_string(),
            loss,
        });
    }

    if out.is_empty() {
        return Err(RenderError::EmptyDataset { path: path.to_path_buf() });
    }
    Ok(out)
}

/// Partition records into per-attribute groups.
///
/// Rows are stable-sorted by epoch first (ties keep file order), then grouped
/// by `probe_attr`. Groups come back in ascending lexicographic order of the
/// attribute label so legend ordering is deterministic across runs.
pub fn group_by_attr(records: &[EvaluationRecord]) -> Vec<SeriesGroup> {
    let mut sorted: Vec<&EvaluationRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.epoch);

    let mut groups: BTreeMap<&str, Vec<(i64, f64)>> = BTreeMap::new();
    for r in sorted {
        groups
            .entry(r.probe_attr.as_str())
            .or_default()
            .push((r.epoch, r.loss));
    }
    groups
        .into_iter()
        .map(|(attr, points)| SeriesGroup {
            attr: attr.to_string(),
            points,
        })
        .collect()
}

/// Sorted distinct epoch values; the x-axis places a tick at each.
pub fn distinct_epochs(records: &[EvaluationRecord]) -> Vec<i64> {
    let set: BTreeSet<i64> = records.iter().map(|r| r.epoch).collect();
    set.into_iter().collect()
}

fn load_err(path: &Path, e: &csv::Error) -> RenderError {
    RenderError::Load {
        path: path.to_path_buf(),
        cause: e.to_string(),
    }
}

fn missing_column(path: &Path, name: &str) -> RenderError {
    RenderError::Load {
        path: path.to_path_buf(),
        cause: format!("missing required column {name:?}"),
    }
}
