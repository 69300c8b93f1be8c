//! LaTeX serialization of content elements.

use crate::error::{Error, Result};
use crate::model::{
    BarChart, ColumnLayout, ContentElement, Directive, Image, ListBlock, ListItems, PageTitle,
    Paragraph, PieChart, Table, TextRun, TextTitle,
};
use crate::resource::ResourceFolder;

const NEW_LINE: &str = "\\newline";
const NEW_PAGE: &str = "\\newpage";
const FILL: &str = "\\vfill";
const BEGIN_CENTER: &str = "\\begin{center}";
const END_CENTER: &str = "\\end{center}";
const COLUMN_BREAK: &str = "\\columnbreak";
const HLINE: &str = "\\hline";
const BEGIN_WRAPFIGURE: &str = "\\begin{wrapfigure}{r}{0.3\\textwidth}";
const END_WRAPFIGURE: &str = "\\end{wrapfigure}";
const CENTERING: &str = "\\centering";

/// Serializes elements into LaTeX lines.
///
/// Lines accumulate in the renderer and are handed out by [`finish`], so a
/// caller can discard everything when an element fails halfway.
///
/// [`finish`]: LatexRenderer::finish
pub struct LatexRenderer<'a> {
    resources: &'a ResourceFolder,
    lines: Vec<String>,
}

impl<'a> LatexRenderer<'a> {
    /// Create a renderer that copies images into `resources`.
    pub fn new(resources: &'a ResourceFolder) -> Self {
        Self {
            resources,
            lines: Vec::new(),
        }
    }

    /// Take the rendered lines.
    pub fn finish(self) -> Vec<String> {
        self.lines
    }

    /// Render any content element.
    pub fn render_element(&mut self, element: &ContentElement) -> Result<()> {
        match element {
            ContentElement::PageTitle(title) => self.render_page_title(title),
            ContentElement::TextRun(run) => self.render_text_run(run),
            ContentElement::Paragraph(para) => self.render_paragraph(para),
            ContentElement::ListBlock(list) => self.render_list(list),
            ContentElement::Image(image) => self.render_image(image)?,
            ContentElement::TextTitle(title) => self.render_text_title(title),
            ContentElement::ColumnLayout(layout) => self.render_columns(layout)?,
            ContentElement::Table(table) => self.render_table(table)?,
            ContentElement::PieChart(chart) => self.render_pie_chart(chart)?,
            ContentElement::BarChart(chart) => self.render_bar_chart(chart),
        }
        Ok(())
    }

    /// Render a raw or layout directive.
    pub fn render_directive(&mut self, directive: &Directive) {
        match directive {
            Directive::Math { text } => self.push(format!("${}$", text)),
            Directive::Raw { text } => self.push(text.clone()),
            Directive::NewLine => self.push(NEW_LINE),
            Directive::NewPage => self.push(NEW_PAGE),
            Directive::Fill => self.push(FILL),
            Directive::BeginCenter => self.push(BEGIN_CENTER),
            Directive::EndCenter => self.push(END_CENTER),
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn render_page_title(&mut self, title: &PageTitle) {
        self.push(format!("\\title{{{}}}", title.title));
        if let Some(ref date) = title.date {
            self.push(format!("\\date{{{}}}", date));
        }
        if let Some(ref author) = title.author {
            self.push(format!("\\author{{{}}}", author));
        }
        self.push("\\maketitle");
        self.push(NEW_PAGE);
    }

    pub(crate) fn render_text_run(&mut self, run: &TextRun) {
        self.push(run.formatted());
    }

    pub(crate) fn render_paragraph(&mut self, para: &Paragraph) {
        self.push(format!("\\paragraph{{{}}}", para.heading));
        self.push(para.text.clone());
    }

    pub(crate) fn render_list(&mut self, list: &ListBlock) {
        let env = list.kind.environment();
        self.push(format!("\\begin{{{}}}", env));
        match &list.items {
            ListItems::Descriptive(entries) => {
                for (term, description) in entries {
                    self.push(format!("\\item[{}] {}", term, description));
                }
            }
            ListItems::Plain(items) => {
                for item in items {
                    self.push(format!("\\item {}", item));
                }
            }
        }
        self.push(format!("\\end{{{}}}", env));
    }

    /// Copy the image, then emit the figure. Nothing is emitted if the copy
    /// fails.
    pub(crate) fn render_image(&mut self, image: &Image) -> Result<()> {
        self.resources.copy_image(image)?;
        // copy_image has already rejected paths without a file name
        let stem = image.stem().unwrap_or_default();

        self.push(BEGIN_WRAPFIGURE);
        self.push(CENTERING);
        self.push(format!(
            "\\includegraphics[width=0.25\\textwidth]{{{}}}",
            stem
        ));
        if let Some(ref caption) = image.caption {
            self.push(format!("\\caption{{\\label{{fig:{}}}{}}}", stem, caption));
        }
        self.push(END_WRAPFIGURE);
        Ok(())
    }

    pub(crate) fn render_text_title(&mut self, title: &TextTitle) {
        match title.size {
            None => self.render_text_run(&TextRun::new(title.text.clone())),
            Some(size) => self.push(format!("{{{} {}}}", size.command(), title.text)),
        }
        self.push(NEW_LINE);
    }

    /// Render a column layout. Every child is checked before anything is
    /// emitted.
    pub(crate) fn render_columns(&mut self, layout: &ColumnLayout) -> Result<()> {
        if let Some(unsupported) = layout.elements.iter().find(|e| !e.is_columnable()) {
            return Err(Error::UnsupportedElement(unsupported.kind()));
        }

        self.push(format!(
            "\\begin{{multicols}}{{{}}}",
            layout.column_count()
        ));
        for element in &layout.elements {
            match element {
                ContentElement::Table(table) => self.render_table(table)?,
                ContentElement::TextRun(run) => self.render_text_run(run),
                ContentElement::Image(image) => self.render_image(image)?,
                ContentElement::Paragraph(para) => self.render_paragraph(para),
                ContentElement::PieChart(chart) => self.render_pie_chart(chart)?,
                ContentElement::BarChart(chart) => self.render_bar_chart(chart),
                ContentElement::PageTitle(_)
                | ContentElement::ListBlock(_)
                | ContentElement::TextTitle(_)
                | ContentElement::ColumnLayout(_) => {
                    return Err(Error::UnsupportedElement(element.kind()));
                }
            }
            self.push(COLUMN_BREAK);
        }
        self.push("\\end{multicols}");
        Ok(())
    }

    pub(crate) fn render_table(&mut self, table: &Table) -> Result<()> {
        table.validate()?;

        if table.wrap {
            self.push(BEGIN_WRAPFIGURE);
            self.push(CENTERING);
        }

        if table.borders {
            self.push("\\begin{tabular}{| l | c | r |}");
            self.push(HLINE);
        } else {
            self.push("\\begin{tabular}{l c r}");
        }

        for row in &table.cells {
            self.push(format!("{} \\\\", row.join(" & ")));
            if table.borders {
                self.push(HLINE);
            }
        }

        self.push("\\end{tabular}");
        if table.wrap {
            self.push(END_WRAPFIGURE);
        }
        Ok(())
    }

    pub(crate) fn render_pie_chart(&mut self, chart: &PieChart) -> Result<()> {
        let percentages = chart.percentages()?;
        let slices = chart
            .values
            .iter()
            .zip(&percentages)
            .map(|(value, pct)| format!("{}/{}", pct, value.label))
            .collect::<Vec<_>>()
            .join(",");

        let colors = chart.colors();
        if !colors.is_empty() && colors.len() != chart.values.len() {
            log::warn!(
                "Pie chart has {} colors for {} slices; colors will not line up with slices",
                colors.len(),
                chart.values.len()
            );
        }

        self.push("\\begin{tikzpicture}");
        if colors.is_empty() {
            self.push(format!("\\pie{{{}}}", slices));
        } else {
            self.push(format!("\\pie[color={{{}}}]{{{}}}", colors.join(","), slices));
        }
        self.push("\\end{tikzpicture}");
        Ok(())
    }

    pub(crate) fn render_bar_chart(&mut self, chart: &BarChart) {
        let labels = chart
            .values
            .iter()
            .map(|v| v.label.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let coordinates = chart
            .values
            .iter()
            .map(|v| format!("({},{})", v.label, v.value))
            .collect::<Vec<_>>()
            .join(" ");

        self.push("\\begin{tikzpicture}");
        self.push(format!(
            "\\begin{{axis}}[symbolic x coords={{{}}}, xtick=data]",
            labels
        ));
        self.push(format!(
            "\\addplot[ybar, fill={}] coordinates {{{}}};",
            chart.bar_color, coordinates
        ));
        self.push("\\end{axis}");
        self.push("\\end{tikzpicture}");
    }
}
