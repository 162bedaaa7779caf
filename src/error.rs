use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::richtext::MarkupError;
use crate::style::StyleNotFound;

/// Errors produced while assembling or writing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A block references a style name that was never registered.
    #[error(transparent)]
    StyleNotFound(#[from] StyleNotFound),

    /// Inline markup of a paragraph could not be parsed.
    #[error("invalid paragraph markup")]
    Markup(#[from] MarkupError),

    /// The output file could not be created or written.
    #[error("failed to write `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `lopdf` rejected an object or stream.
    #[error("failed to encode PDF objects")]
    Pdf(#[from] lopdf::Error),

    /// Serializing the document into memory failed.
    #[error("failed to serialize PDF")]
    Serialize(#[from] io::Error),
}

impl DocumentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DocumentError::Io {
            path: path.into(),
            source,
        }
    }
}
