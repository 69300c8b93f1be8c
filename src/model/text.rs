//! Text-level element types.

use serde::{Deserialize, Serialize};

/// A run of text, optionally wrapped in a format string.
///
/// The format string carries a single `{}` placeholder that receives the
/// text: `\textit{{}}` turns `word` into `\textit{word}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// Text content
    pub text: String,

    /// Format string with one `{}` placeholder
    #[serde(default)]
    pub format: Option<String>,
}

impl TextRun {
    /// Create a plain text run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: None,
        }
    }

    /// Set the format string.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Get the formatted line for this run.
    pub fn formatted(&self) -> String {
        match self.format {
            Some(ref format) => format.replacen(PLACEHOLDER, &self.text, 1),
            None => self.text.clone(),
        }
    }
}

/// Placeholder substituted by [`TextRun::formatted`].
pub const PLACEHOLDER: &str = "{}";

/// Document title block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTitle {
    /// Document title
    pub title: String,

    /// Date line
    #[serde(default)]
    pub date: Option<String>,

    /// Author line
    #[serde(default)]
    pub author: Option<String>,
}

impl PageTitle {
    /// Create a title block with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: None,
            author: None,
        }
    }

    /// Set the date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// A headed paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph heading
    pub heading: String,

    /// Body text
    pub text: String,
}

impl Paragraph {
    /// Create a paragraph.
    pub fn new(heading: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            text: text.into(),
        }
    }
}

/// A standalone title line with an optional font size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTitle {
    /// Title text
    pub text: String,

    /// Font size command
    #[serde(default)]
    pub size: Option<FontSize>,
}

impl TextTitle {
    /// Create a title at the current font size.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: None,
        }
    }

    /// Set the font size.
    pub fn with_size(mut self, size: FontSize) -> Self {
        self.size = Some(size);
        self
    }
}

/// LaTeX font size switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontSize {
    /// `\tiny`
    #[serde(rename = "tiny")]
    Tiny,
    /// `\scriptsize`
    #[serde(rename = "scriptsize")]
    ScriptSize,
    /// `\footnotesize`
    #[serde(rename = "footnotesize")]
    FootnoteSize,
    /// `\small`
    #[serde(rename = "small")]
    Small,
    /// `\normalsize`
    #[serde(rename = "normalsize")]
    NormalSize,
    /// `\large`
    #[serde(rename = "large")]
    Large,
    /// `\Large`
    #[serde(rename = "Large")]
    Larger,
    /// `\LARGE`
    #[serde(rename = "LARGE")]
    Largest,
    /// `\huge`
    #[serde(rename = "huge")]
    Huge,
    /// `\Huge`
    #[serde(rename = "Huge")]
    Huger,
}

impl FontSize {
    /// Get the LaTeX command, including the leading backslash.
    pub fn command(&self) -> &'static str {
        match self {
            FontSize::Tiny => "\\tiny",
            FontSize::ScriptSize => "\\scriptsize",
            FontSize::FootnoteSize => "\\footnotesize",
            FontSize::Small => "\\small",
            FontSize::NormalSize => "\\normalsize",
            FontSize::Large => "\\large",
            FontSize::Larger => "\\Large",
            FontSize::Largest => "\\LARGE",
            FontSize::Huge => "\\huge",
            FontSize::Huger => "\\Huge",
        }
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.command())
    }
}
