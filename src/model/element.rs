//! Content elements and layout directives.

use super::{BarChart, Image, ListBlock, PageTitle, Paragraph, PieChart, Table, TextRun, TextTitle};
use serde::{Deserialize, Serialize};

/// A unit of content that can be appended to a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentElement {
    /// Title block followed by a page break
    PageTitle(PageTitle),

    /// A single line of (optionally formatted) text
    TextRun(TextRun),

    /// A headed paragraph
    Paragraph(Paragraph),

    /// An itemize/enumerate/description list
    ListBlock(ListBlock),

    /// A wrapped figure
    Image(Image),

    /// A sized title line
    TextTitle(TextTitle),

    /// Elements laid out side by side in columns
    ColumnLayout(ColumnLayout),

    /// A tabular block
    Table(Table),

    /// A pgf-pie chart
    PieChart(PieChart),

    /// A pgfplots bar chart
    BarChart(BarChart),
}

impl ContentElement {
    /// Get the snake_case name of the element kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentElement::PageTitle(_) => "page_title",
            ContentElement::TextRun(_) => "text_run",
            ContentElement::Paragraph(_) => "paragraph",
            ContentElement::ListBlock(_) => "list_block",
            ContentElement::Image(_) => "image",
            ContentElement::TextTitle(_) => "text_title",
            ContentElement::ColumnLayout(_) => "column_layout",
            ContentElement::Table(_) => "table",
            ContentElement::PieChart(_) => "pie_chart",
            ContentElement::BarChart(_) => "bar_chart",
        }
    }

    /// Check if the element may appear inside a [`ColumnLayout`].
    pub fn is_columnable(&self) -> bool {
        match self {
            ContentElement::Table(_)
            | ContentElement::TextRun(_)
            | ContentElement::Image(_)
            | ContentElement::Paragraph(_)
            | ContentElement::PieChart(_)
            | ContentElement::BarChart(_) => true,
            ContentElement::PageTitle(_)
            | ContentElement::ListBlock(_)
            | ContentElement::TextTitle(_)
            | ContentElement::ColumnLayout(_) => false,
        }
    }
}

macro_rules! impl_from_element {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for ContentElement {
                fn from(value: $variant) -> Self {
                    ContentElement::$variant(value)
                }
            }
        )*
    };
}

impl_from_element!(
    PageTitle,
    TextRun,
    Paragraph,
    ListBlock,
    Image,
    TextTitle,
    ColumnLayout,
    Table,
    PieChart,
    BarChart,
);

/// Elements placed side by side in a `multicols` environment.
///
/// One column is created per element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Column contents in order
    pub elements: Vec<ContentElement>,
}

impl ColumnLayout {
    /// Create a layout from elements.
    pub fn new(elements: Vec<ContentElement>) -> Self {
        Self { elements }
    }

    /// Add a column.
    pub fn push(&mut self, element: impl Into<ContentElement>) {
        self.elements.push(element.into());
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.elements.len()
    }
}

/// Raw and layout directives that are not content elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Directive {
    /// Inline math wrapped in `$...$`
    Math {
        /// Math-mode source
        text: String,
    },
    /// Verbatim markup line
    Raw {
        /// Markup text
        text: String,
    },
    /// `\newline`
    NewLine,
    /// `\newpage`
    NewPage,
    /// `\vfill`
    Fill,
    /// `\begin{center}`
    BeginCenter,
    /// `\end{center}`
    EndCenter,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GraphValue;

    #[test]
    fn test_columnable_kinds() {
        assert!(ContentElement::from(Table::default()).is_columnable());
        assert!(ContentElement::from(TextRun::new("x")).is_columnable());
        assert!(ContentElement::from(PieChart::default()).is_columnable());
        assert!(!ContentElement::from(PageTitle::new("t")).is_columnable());
        assert!(!ContentElement::from(TextTitle::new("t")).is_columnable());
        assert!(!ContentElement::from(ColumnLayout::default()).is_columnable());
        assert!(!ContentElement::from(ListBlock::itemize(["a"])).is_columnable());
    }

    #[test]
    fn test_element_json_tagging() {
        let element = ContentElement::from(PieChart::new(vec![GraphValue::new("A", 3)]));
        let json = serde_json::to_string(&element).unwrap();
        assert!(json.contains("\"type\":\"pie_chart\""));

        let parsed: ContentElement =
            serde_json::from_str(r#"{"type":"paragraph","heading":"H","text":"T"}"#).unwrap();
        assert_eq!(parsed, ContentElement::Paragraph(Paragraph::new("H", "T")));
        assert_eq!(parsed.kind(), "paragraph");
    }

    #[test]
    fn test_nested_layout_json() {
        let parsed: ContentElement = serde_json::from_str(
            r#"{"type":"column_layout","elements":[
                {"type":"text_run","text":"left"},
                {"type":"table","cells":[["a","b"]],"borders":true}
            ]}"#,
        )
        .unwrap();
        match parsed {
            ContentElement::ColumnLayout(layout) => assert_eq!(layout.column_count(), 2),
            other => panic!("Expected column layout, got {}", other.kind()),
        }
    }

    #[test]
    fn test_directive_json() {
        let d: Directive = serde_json::from_str(r#"{"type":"new_page"}"#).unwrap();
        assert_eq!(d, Directive::NewPage);
        let d: Directive = serde_json::from_str(r#"{"type":"math","text":"x^2"}"#).unwrap();
        assert_eq!(d, Directive::Math { text: "x^2".into() });
    }
}
