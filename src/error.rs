//! Error type shared by every phase of the export workflow.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WorkflowError>;

/// Everything that can go wrong while exporting or rasterizing an icon.
///
/// Per-item variants ([`MissingSvgContent`](Self::MissingSvgContent),
/// [`Io`](Self::Io), [`SvgParse`](Self::SvgParse), ...) are recorded in a
/// [`PhaseReport`](crate::PhaseReport) and never abort a batch. Config and
/// manifest errors are raised before any phase starts.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("no SVG content found in the rendered component `{name}`")]
    MissingSvgContent { name: String },

    #[error("icon has an empty title")]
    EmptyTitle,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse SVG {}: {source}", .path.display())]
    SvgParse {
        path: PathBuf,
        #[source]
        source: resvg::usvg::Error,
    },

    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid icon manifest: {0}")]
    Manifest(String),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("batch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl WorkflowError {
    /// Wraps an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
