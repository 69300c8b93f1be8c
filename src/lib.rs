//! # texdoc
//!
//! Assemble LaTeX documents from typed content fragments and render them to
//! PDF with an external LaTeX engine.
//!
//! ## Quick Start
//!
//! ```no_run
//! use texdoc::model::{GraphValue, ListBlock, PageTitle, PieChart};
//! use texdoc::{DocumentBuilder, DocumentOptions, Margins};
//!
//! fn main() -> texdoc::Result<()> {
//!     let options = DocumentOptions::new().with_margins(Margins::uniform(0.75));
//!     let mut doc = DocumentBuilder::with_options("pdflatex", "./build", options)?;
//!
//!     doc.add_page_title(&PageTitle::new("Survey").with_date("2024-05-01"))?;
//!     doc.add_list(&ListBlock::itemize(["fast", "simple"]))?;
//!     doc.add_pie_chart(&PieChart::new(vec![
//!         GraphValue::new("Yes", 30),
//!         GraphValue::new("No", 70),
//!     ]))?;
//!
//!     let outcome = doc.render(Some("survey"))?;
//!     assert!(outcome.success());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Typed content**: titles, paragraphs, lists, tables, images, columns
//! - **Charts**: pie charts via pgf-pie, bar charts via pgfplots
//! - **Resource folder**: images are copied next to the generated source
//! - **Manifests**: describe a document as JSON and build it in one call
//! - **Pluggable host**: the renderer process and viewer sit behind a trait

pub mod builder;
pub mod error;
pub mod host;
pub mod manifest;
pub mod model;
pub mod render;
pub mod resource;

// Re-export commonly used types
pub use builder::DocumentBuilder;
pub use error::{Error, Result};
pub use host::{Host, SystemHost};
pub use manifest::{Manifest, Step};
pub use model::{
    BarChart, ColumnLayout, ContentElement, Directive, FontSize, GraphValue, Image, ListBlock,
    ListItems, ListKind, PageTitle, Paragraph, PieChart, Table, TextRun, TextTitle,
};
pub use render::{BuildStats, DocumentOptions, Margins, RenderOutcome};
pub use resource::ResourceFolder;

use std::path::{Path, PathBuf};

/// Build a manifest file into a document and render it.
///
/// # Example
///
/// ```no_run
/// let outcome = texdoc::render_manifest("report.json", "pdflatex", "./out", Some("report"))?;
/// println!("exit code {}", outcome.exit_code);
/// # Ok::<(), texdoc::Error>(())
/// ```
pub fn render_manifest<P: AsRef<Path>, F: AsRef<Path>>(
    manifest: P,
    compiler: impl Into<PathBuf>,
    folder: F,
    name: Option<&str>,
) -> Result<RenderOutcome> {
    let manifest = Manifest::from_file(manifest)?;
    let mut builder = manifest.build(compiler, folder)?;
    builder.render(name)
}

/// Build a manifest file and return the generated LaTeX without rendering.
///
/// `folder` still receives copies of any referenced images.
pub fn preview_manifest<P: AsRef<Path>, F: AsRef<Path>>(manifest: P, folder: F) -> Result<String> {
    let manifest = Manifest::from_file(manifest)?;
    let builder = manifest.build(PathBuf::new(), folder)?;
    Ok(builder.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_preview_manifest() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("doc.json");
        fs::write(
            &path,
            r#"{"steps": [{"type": "text_title", "text": "Hello", "size": "Large"}]}"#,
        )
        .unwrap();

        let markup = preview_manifest(&path, temp.path().join("out")).unwrap();
        assert!(markup.starts_with("\\documentclass{article}"));
        assert!(markup.contains("{\\Large Hello}\n\\newline\n"));
        assert!(markup.ends_with("\\end{document}"));
    }

    #[test]
    fn test_preview_missing_manifest() {
        let temp = tempfile::tempdir().unwrap();
        let result = preview_manifest(temp.path().join("none.json"), temp.path());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_render_manifest_missing_compiler() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("doc.json");
        fs::write(&path, r#"{"steps": []}"#).unwrap();

        let result = render_manifest(
            &path,
            temp.path().join("no-such-engine"),
            temp.path().join("out"),
            Some("doc"),
        );
        assert!(matches!(result, Err(Error::RendererLaunch { .. })));
        assert!(temp.path().join("out").join("doc.tex").exists());
    }

    #[test]
    fn test_document_options_defaults() {
        let options = DocumentOptions::default();
        assert_eq!(options.margins, Margins::default());
        assert!(options.packages.is_empty());
        assert!(options.open_artifact);
    }
}
