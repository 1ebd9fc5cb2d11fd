//! Navigation configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`NavConfig`](super::NavConfig).
///
/// `entry` fields hold the label trail of the offending entry, e.g.
/// `main > Academic Management > Subjects`.
#[derive(Debug, Error)]
pub enum NavConfigError {
    #[error("navigation entry '{entry}' has both a path and children")]
    PathAndChildren { entry: String },

    #[error("navigation entry '{entry}' has neither a path nor children")]
    MissingTarget { entry: String },

    #[error("navigation entry at '{entry}' has an empty label")]
    EmptyLabel { entry: String },

    #[error("duplicate navigation label '{label}' under '{parent}'")]
    DuplicateLabel { parent: String, label: String },

    #[error("navigation entry '{entry}' path '{path}' must start with '/'")]
    RelativePath { entry: String, path: String },

    #[error("navigation entry '{entry}' links to unknown route '{path}'")]
    UnknownRoute { entry: String, path: String },

    #[error("invalid navigation config: {0}")]
    Parse(#[from] serde_yml::Error),

    #[error("failed to read navigation config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
