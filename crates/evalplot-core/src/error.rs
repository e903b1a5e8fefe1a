// File: crates/evalplot-core/src/error.rs
// Summary: Error taxonomy for the render pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Every way a render invocation can fail. Each variant is terminal for that
/// invocation; there is no retry path.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("source not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("empty dataset: {} contains a header but no data rows", .path.display())]
    EmptyDataset { path: PathBuf },

    #[error("failed to load {}: {}", .path.display(), .cause)]
    Load { path: PathBuf, cause: String },

    #[error("malformed epoch value {value:?} in data row {row}")]
    MalformedEpoch { value: String, row: usize },

    #[error("failed to write chart to {}: {}", .path.display(), .cause)]
    Output { path: PathBuf, cause: String },
}
