//! Content model for document assembly.
//!
//! Every type here is a plain value holder. Serialization to LaTeX lives in
//! [`crate::render`]; the types derive serde so documents can also be
//! described as JSON manifests.

mod chart;
mod element;
mod image;
mod list;
mod table;
mod text;

pub use chart::{BarChart, GraphValue, PieChart};
pub use element::{ColumnLayout, ContentElement, Directive};
pub use image::Image;
pub use list::{ListBlock, ListItems, ListKind};
pub use table::Table;
pub use text::{FontSize, PageTitle, Paragraph, TextRun, TextTitle, PLACEHOLDER};
