//! Rendering module: LaTeX serialization, preamble and document options.

mod latex;
mod options;
mod preamble;
mod result;

pub use latex::LatexRenderer;
pub use options::{DocumentOptions, Margins, DEFAULT_DOCUMENT_CLASS, DEFAULT_PGFPLOTS_COMPAT};
pub use preamble::{preamble, BEGIN_DOCUMENT, END_DOCUMENT};
pub use result::{BuildStats, RenderOutcome};
