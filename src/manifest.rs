//! JSON document manifests.
//!
//! A manifest describes a whole document as data: the builder options and
//! an ordered list of steps, each either a content element or a directive.
//!
//! ```json
//! {
//!   "options": { "margins": { "top": 1, "bottom": 1, "left": 1, "right": 1 } },
//!   "steps": [
//!     { "type": "page_title", "title": "Report", "author": "Ann" },
//!     { "type": "paragraph", "heading": "Intro", "text": "Hello." },
//!     { "type": "new_page" },
//!     { "type": "pie_chart", "values": [ { "label": "A", "value": 3 } ] }
//!   ]
//! }
//! ```

use crate::builder::DocumentBuilder;
use crate::error::Result;
use crate::model::{ContentElement, Directive};
use crate::render::DocumentOptions;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// A document described as data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Builder options
    #[serde(default)]
    pub options: DocumentOptions,

    /// Steps applied in order
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// `type` tags that select a [`Directive`] step.
const DIRECTIVE_TAGS: &[&str] = &[
    "math",
    "raw",
    "new_line",
    "new_page",
    "fill",
    "begin_center",
    "end_center",
];

/// One manifest step.
///
/// The `type` tag decides whether a step is parsed as a directive or an
/// element, so field errors name the offending element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Step {
    /// A content element
    Element(ContentElement),
    /// A raw or layout directive
    Directive(Directive),
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let is_directive = value
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|tag| DIRECTIVE_TAGS.contains(&tag));

        if is_directive {
            Directive::deserialize(value)
                .map(Step::Directive)
                .map_err(D::Error::custom)
        } else {
            ContentElement::deserialize(value)
                .map(Step::Element)
                .map_err(D::Error::custom)
        }
    }
}

impl From<ContentElement> for Step {
    fn from(element: ContentElement) -> Self {
        Step::Element(element)
    }
}

impl From<Directive> for Step {
    fn from(directive: Directive) -> Self {
        Step::Directive(directive)
    }
}

impl Manifest {
    /// Create an empty manifest with the given options.
    pub fn new(options: DocumentOptions) -> Self {
        Self {
            options,
            steps: Vec::new(),
        }
    }

    /// Parse a manifest from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a step.
    pub fn push(&mut self, step: impl Into<Step>) {
        self.steps.push(step.into());
    }

    /// Apply every step to `builder` in order, stopping at the first error.
    pub fn apply_to(&self, builder: &mut DocumentBuilder) -> Result<()> {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                Step::Element(element) => {
                    if let Err(e) = builder.add(element) {
                        log::warn!("Manifest step {} ({}) failed: {}", i, element.kind(), e);
                        return Err(e);
                    }
                }
                Step::Directive(directive) => builder.apply(directive),
            }
        }
        Ok(())
    }

    /// Create a builder from the manifest options and apply every step.
    pub fn build(
        &self,
        compiler: impl Into<PathBuf>,
        folder: impl AsRef<Path>,
    ) -> Result<DocumentBuilder> {
        let mut builder = DocumentBuilder::with_options(compiler, folder, self.options.clone())?;
        self.apply_to(&mut builder)?;
        Ok(builder)
    }
}
