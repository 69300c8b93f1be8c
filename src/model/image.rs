//! Image element.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An image copied into the document's resource folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Path of the source file
    pub source: PathBuf,

    /// Figure caption
    #[serde(default)]
    pub caption: Option<String>,
}

impl Image {
    /// Create an image without a caption.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            caption: None,
        }
    }

    /// Set the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// File name including extension (e.g. `chart.png`).
    pub fn file_name(&self) -> Option<&str> {
        self.source.file_name().and_then(|n| n.to_str())
    }

    /// File name without extension (e.g. `chart`).
    ///
    /// This is the name referenced by `\includegraphics` and the figure label.
    pub fn stem(&self) -> Option<&str> {
        self.source.file_stem().and_then(|n| n.to_str())
    }

    /// Source path.
    pub fn source(&self) -> &Path {
        &self.source
    }
}
