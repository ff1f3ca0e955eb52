//! Error types for loading props and producing markup.
//!
//! Resolving styles and content never fails; only the surfaces around it
//! (reading props files, rendering templates) do.

use std::path::PathBuf;

pub use crate::style::StyleParseError;

/// Error returned when button props cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid JSON props: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML props: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read props from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot infer props format from {}; expected .json, .yaml or .yml", .path.display())]
    UnknownFormat { path: PathBuf },
}

/// Error returned when HTML output cannot be produced.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
