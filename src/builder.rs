//! Document builder: accumulates LaTeX lines and renders them to PDF.

use crate::error::{Error, Result};
use crate::host::{Host, SystemHost};
use crate::model::{
    BarChart, ColumnLayout, ContentElement, Directive, Image, ListBlock, PageTitle, Paragraph,
    PieChart, Table, TextRun, TextTitle,
};
use crate::render::{
    preamble, BuildStats, DocumentOptions, LatexRenderer, RenderOutcome, END_DOCUMENT,
};
use crate::resource::ResourceFolder;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp format of default output names.
pub const DEFAULT_NAME_FORMAT: &str = "%y%m%d-%H%M%S";

/// Accumulates content into a LaTeX document and renders it.
///
/// Each `add_*` call either appends all of its lines or, on error, none of
/// them. [`render`](Self::render) closes the document; use
/// [`recreate`](Self::recreate) before reusing a builder afterwards.
///
/// # Example
///
/// ```no_run
/// use texdoc::{DocumentBuilder, DocumentOptions, Margins};
/// use texdoc::model::{PageTitle, Paragraph, Table};
///
/// let options = DocumentOptions::new().with_margins(Margins::uniform(1.0));
/// let mut doc = DocumentBuilder::with_options("pdflatex", "./out", options)?;
/// doc.add_page_title(&PageTitle::new("Quarterly report").with_author("Finance"))?;
/// doc.add_paragraph(&Paragraph::new("Summary", "Revenue grew."))?;
/// doc.add_table(&Table::new([["Q1", "Q2", "Q3"], ["10", "12", "15"]]).with_borders(true))?;
///
/// let outcome = doc.render(Some("report"))?;
/// println!("exit code {}", outcome.exit_code);
/// # Ok::<(), texdoc::Error>(())
/// ```
pub struct DocumentBuilder {
    compiler: PathBuf,
    folder: ResourceFolder,
    options: DocumentOptions,
    host: Box<dyn Host>,
    lines: Vec<String>,
    stats: BuildStats,
    finalized: bool,
}

impl DocumentBuilder {
    /// Create a builder with default options.
    pub fn new(compiler: impl Into<PathBuf>, folder: impl AsRef<Path>) -> Result<Self> {
        Self::with_options(compiler, folder, DocumentOptions::default())
    }

    /// Create a builder with custom options.
    ///
    /// Creates `folder` and `folder/images` if needed. Fails with
    /// [`Error::Configuration`] for folder paths containing spaces or for
    /// invalid margins.
    pub fn with_options(
        compiler: impl Into<PathBuf>,
        folder: impl AsRef<Path>,
        options: DocumentOptions,
    ) -> Result<Self> {
        options.margins.validate()?;
        let folder = ResourceFolder::create(folder)?;
        let lines = preamble(&options, &folder.graphics_path());

        Ok(Self {
            compiler: compiler.into(),
            folder,
            options,
            host: Box::new(SystemHost::new()),
            lines,
            stats: BuildStats::new(),
            finalized: false,
        })
    }

    /// Replace the process/viewer collaborator.
    pub fn with_host(mut self, host: impl Host + 'static) -> Self {
        self.host = Box::new(host);
        self
    }

    /// Document options in effect.
    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// Resource folder of this document.
    pub fn folder(&self) -> &ResourceFolder {
        &self.folder
    }

    /// Renderer executable.
    pub fn compiler(&self) -> &Path {
        &self.compiler
    }

    /// Current buffer lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Content statistics since construction or the last recreate.
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Check if the buffer has been closed by [`render`](Self::render).
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Append any content element.
    pub fn add(&mut self, element: &ContentElement) -> Result<()> {
        let mut renderer = LatexRenderer::new(&self.folder);
        renderer.render_element(element)?;
        let lines = renderer.finish();

        log::debug!("Appended {} ({} lines)", element.kind(), lines.len());
        self.extend(lines);
        self.stats.element_count += 1;
        count_element(&mut self.stats, element);
        Ok(())
    }

    /// Append a title block followed by a page break.
    pub fn add_page_title(&mut self, title: &PageTitle) -> Result<()> {
        self.add(&ContentElement::PageTitle(title.clone()))
    }

    /// Append a text line.
    pub fn add_text(&mut self, run: &TextRun) -> Result<()> {
        self.add(&ContentElement::TextRun(run.clone()))
    }

    /// Append a headed paragraph.
    pub fn add_paragraph(&mut self, para: &Paragraph) -> Result<()> {
        self.add(&ContentElement::Paragraph(para.clone()))
    }

    /// Append a list environment.
    pub fn add_list(&mut self, list: &ListBlock) -> Result<()> {
        self.add(&ContentElement::ListBlock(list.clone()))
    }

    /// Copy an image into the resource folder and append a wrapped figure.
    ///
    /// If the copy fails nothing is appended.
    pub fn add_image(&mut self, image: &Image) -> Result<()> {
        self.add(&ContentElement::Image(image.clone()))
    }

    /// Append a sized title line.
    pub fn add_text_title(&mut self, title: &TextTitle) -> Result<()> {
        self.add(&ContentElement::TextTitle(title.clone()))
    }

    /// Append a multi-column layout.
    ///
    /// Fails with [`Error::UnsupportedElement`] if any column holds a page
    /// title, list, text title or nested layout.
    pub fn add_columns(&mut self, layout: &ColumnLayout) -> Result<()> {
        self.add(&ContentElement::ColumnLayout(layout.clone()))
    }

    /// Append a table.
    pub fn add_table(&mut self, table: &Table) -> Result<()> {
        self.add(&ContentElement::Table(table.clone()))
    }

    /// Append a pie chart.
    ///
    /// Fails with [`Error::Arithmetic`] when the values sum to zero.
    pub fn add_pie_chart(&mut self, chart: &PieChart) -> Result<()> {
        self.add(&ContentElement::PieChart(chart.clone()))
    }

    /// Append a bar chart.
    pub fn add_bar_chart(&mut self, chart: &BarChart) -> Result<()> {
        self.add(&ContentElement::BarChart(chart.clone()))
    }

    /// Append a raw or layout directive.
    pub fn apply(&mut self, directive: &Directive) {
        let mut renderer = LatexRenderer::new(&self.folder);
        renderer.render_directive(directive);
        self.extend(renderer.finish());
        self.stats.directive_count += 1;
    }

    /// Append inline math wrapped in `$...$`.
    pub fn add_math(&mut self, text: impl Into<String>) {
        self.apply(&Directive::Math { text: text.into() });
    }

    /// Append a line of markup verbatim.
    pub fn add_raw_text(&mut self, text: impl Into<String>) {
        self.apply(&Directive::Raw { text: text.into() });
    }

    /// Append `\newline`.
    pub fn new_line(&mut self) {
        self.apply(&Directive::NewLine);
    }

    /// Append `\newpage`.
    pub fn new_page(&mut self) {
        self.apply(&Directive::NewPage);
    }

    /// Append `\vfill`.
    pub fn fill(&mut self) {
        self.apply(&Directive::Fill);
    }

    /// Open a `center` environment. Balancing with
    /// [`end_align`](Self::end_align) is up to the caller.
    pub fn start_center_align(&mut self) {
        self.apply(&Directive::BeginCenter);
    }

    /// Close a `center` environment.
    pub fn end_align(&mut self) {
        self.apply(&Directive::EndCenter);
    }

    fn extend(&mut self, lines: Vec<String>) {
        if self.finalized {
            log::warn!("Appending to a rendered document; call recreate() before reuse");
        }
        self.lines.extend(lines);
    }

    /// Discard all content.
    ///
    /// With `Some(text)` the buffer becomes exactly that text, without a
    /// preamble. With `None` the preamble is regenerated from the original
    /// configuration.
    pub fn recreate(&mut self, text: Option<&str>) {
        self.lines = match text {
            Some(text) => vec![text.to_string()],
            None => preamble(&self.options, &self.folder.graphics_path()),
        };
        self.stats = BuildStats::new();
        self.finalized = false;
    }

    /// Close the document, write `<name>.tex` into the resource folder and
    /// run the renderer on it.
    ///
    /// `name` defaults to the current local time as `yymmdd-HHMMSS` with a
    /// 24-hour clock, not the 12-hour `hh` form, so that names sort in
    /// creation order across noon. The document is closed only once the
    /// source has been written; a failed write leaves the buffer open. A
    /// non-zero exit code is reported in the outcome, not as an error; only a
    /// renderer that cannot be launched fails with
    /// [`Error::RendererLaunch`]. On success the artifact is opened for
    /// viewing when [`DocumentOptions::open_artifact`] is set.
    pub fn render(&mut self, name: Option<&str>) -> Result<RenderOutcome> {
        let name = match name {
            Some(name) => name.to_string(),
            None => chrono::Local::now().format(DEFAULT_NAME_FORMAT).to_string(),
        };

        if self.finalized {
            log::warn!("Rendering an already rendered document");
        }
        let source = self.folder.source_path(&name);
        let artifact = self.folder.artifact_path(&name);
        fs::write(&source, self.to_string())?;
        log::info!("Wrote {}", source.display());

        self.lines.push(END_DOCUMENT.to_string());
        self.finalized = true;

        let root = self.folder.root().display();
        let args = vec![
            format!("-aux-directory={}", root),
            format!("-output-directory={}", root),
            source.display().to_string(),
        ];

        log::info!("Rendering {} with {}", name, self.compiler.display());
        let exit_code =
            self.host
                .run(&self.compiler, &args)
                .map_err(|source| Error::RendererLaunch {
                    program: self.compiler.clone(),
                    source,
                })?;

        let mut opened = false;
        if exit_code == 0 {
            log::info!("Rendered {}", artifact.display());
            if self.options.open_artifact {
                match self.host.open_for_viewing(&artifact) {
                    Ok(()) => opened = true,
                    Err(e) => log::warn!("Failed to open {}: {}", artifact.display(), e),
                }
            }
        } else {
            log::warn!("Renderer exited with code {}", exit_code);
        }

        Ok(RenderOutcome {
            name,
            source,
            artifact,
            exit_code,
            opened,
            stats: self.stats,
        })
    }
}

impl fmt::Display for DocumentBuilder {
    /// Current buffer followed by `\end{document}`; no side effects.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        f.write_str(END_DOCUMENT)
    }
}

impl fmt::Debug for DocumentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentBuilder")
            .field("compiler", &self.compiler)
            .field("folder", &self.folder)
            .field("options", &self.options)
            .field("lines", &self.lines.len())
            .field("finalized", &self.finalized)
            .finish()
    }
}

fn count_element(stats: &mut BuildStats, element: &ContentElement) {
    match element {
        ContentElement::Table(_) => stats.add_table(),
        ContentElement::Image(_) => stats.add_image(),
        ContentElement::PieChart(_) | ContentElement::BarChart(_) => stats.add_chart(),
        ContentElement::ListBlock(_) => stats.add_list(),
        ContentElement::ColumnLayout(layout) => {
            for child in &layout.elements {
                count_element(stats, child);
            }
        }
        ContentElement::PageTitle(_)
        | ContentElement::TextRun(_)
        | ContentElement::Paragraph(_)
        | ContentElement::TextTitle(_) => {}
    }
}
