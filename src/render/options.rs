//! Document-level options and configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default `\documentclass`.
pub const DEFAULT_DOCUMENT_CLASS: &str = "article";

/// Default `\pgfplotsset{compat=...}` level.
pub const DEFAULT_PGFPLOTS_COMPAT: &str = "1.18";

/// Page margins in inches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    /// Top margin
    pub top: f64,
    /// Bottom margin
    pub bottom: f64,
    /// Left margin
    pub left: f64,
    /// Right margin
    pub right: f64,
}

impl Margins {
    /// Create margins from the four sides.
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Use the same margin on every side.
    pub fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Check that every side is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (side, value) in [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Configuration(format!(
                    "{} margin must be a non-negative number, got {}",
                    side, value
                )));
            }
        }
        Ok(())
    }

    /// Format as `geometry` package options.
    ///
    /// Sides are always emitted as top, bottom, right, left. `f64` display
    /// never depends on the host locale, so the decimal separator is `.`.
    pub fn geometry_options(&self) -> String {
        format!(
            "top={}in,bottom={}in,right={}in,left={}in",
            self.top, self.bottom, self.right, self.left
        )
    }
}

/// Options for building a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// Page margins
    pub margins: Margins,

    /// Extra preamble lines, emitted verbatim (e.g. `\usepackage{xcolor}`)
    pub packages: Vec<String>,

    /// Document class name
    pub document_class: String,

    /// pgfplots compatibility level
    pub pgfplots_compat: String,

    /// Open the rendered artifact after a successful render
    pub open_artifact: bool,
}

impl DocumentOptions {
    /// Create new document options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Append one extra preamble line.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.packages.push(package.into());
        self
    }

    /// Append several extra preamble lines.
    pub fn with_packages<S: Into<String>>(mut self, packages: impl IntoIterator<Item = S>) -> Self {
        self.packages.extend(packages.into_iter().map(Into::into));
        self
    }

    /// Set the document class.
    pub fn with_document_class(mut self, class: impl Into<String>) -> Self {
        self.document_class = class.into();
        self
    }

    /// Set the pgfplots compatibility level.
    pub fn with_pgfplots_compat(mut self, level: impl Into<String>) -> Self {
        self.pgfplots_compat = level.into();
        self
    }

    /// Enable or disable opening the artifact after rendering.
    pub fn with_open_artifact(mut self, open: bool) -> Self {
        self.open_artifact = open;
        self
    }
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            packages: Vec::new(),
            document_class: DEFAULT_DOCUMENT_CLASS.to_string(),
            pgfplots_compat: DEFAULT_PGFPLOTS_COMPAT.to_string(),
            open_artifact: true,
        }
    }
}
