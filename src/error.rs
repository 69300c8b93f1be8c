//! Error types for texdoc library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for texdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while assembling or rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid builder configuration (folder path, margins).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Table cells do not form a rectangular grid.
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// An element kind that cannot be placed inside a column layout.
    #[error("Unsupported element in column layout: {0}")]
    UnsupportedElement(&'static str),

    /// Copying an image into the resource folder failed.
    #[error("Failed to copy resource {}: {source}", path.display())]
    ResourceCopy {
        /// Source path of the resource
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Arithmetic failure while computing derived values.
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// The renderer process could not be started.
    #[error("Failed to launch renderer {}: {source}", program.display())]
    RendererLaunch {
        /// Renderer executable
        program: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A document manifest could not be parsed.
    #[error("Manifest error: {0}")]
    Manifest(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Manifest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedElement("page_title");
        assert_eq!(
            err.to_string(),
            "Unsupported element in column layout: page_title"
        );

        let err = Error::ResourceCopy {
            path: PathBuf::from("img/logo.png"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to copy resource img/logo.png: missing"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Manifest(_)));
    }
}
