//! Render outcome and build statistics.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of invoking the renderer on a finalized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOutcome {
    /// Output name (file name without extension)
    pub name: String,

    /// Written markup file
    pub source: PathBuf,

    /// Expected artifact path (exists only on success)
    pub artifact: PathBuf,

    /// Renderer exit code; `-1` when the process was terminated by a signal
    pub exit_code: i32,

    /// Whether the artifact was handed to the viewer
    pub opened: bool,

    /// What went into the document
    pub stats: BuildStats,
}

impl RenderOutcome {
    /// Check if the renderer reported success.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Counts of appended content, collected by the builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Content elements appended (top level)
    pub element_count: u32,

    /// Tables, including those inside column layouts
    pub table_count: u32,

    /// Images, including those inside column layouts
    pub image_count: u32,

    /// Pie and bar charts, including those inside column layouts
    pub chart_count: u32,

    /// List blocks
    pub list_count: u32,

    /// Raw and layout directives
    pub directive_count: u32,
}

impl BuildStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment image count.
    pub fn add_image(&mut self) {
        self.image_count += 1;
    }

    /// Increment chart count.
    pub fn add_chart(&mut self) {
        self.chart_count += 1;
    }

    /// Increment list count.
    pub fn add_list(&mut self) {
        self.list_count += 1;
    }
}
