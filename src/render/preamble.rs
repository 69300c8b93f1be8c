//! Document preamble generation.

use super::DocumentOptions;

/// Marker that opens the document body.
pub const BEGIN_DOCUMENT: &str = "\\begin{document}";

/// Marker that closes the document body.
pub const END_DOCUMENT: &str = "\\end{document}";

/// Build the preamble lines, ending with `\begin{document}`.
///
/// `graphics_path` is the absolute image folder with forward slashes.
pub fn preamble(options: &DocumentOptions, graphics_path: &str) -> Vec<String> {
    let mut lines = vec![
        format!("\\documentclass{{{}}}", options.document_class),
        "\\usepackage[utf8]{inputenc}".to_string(),
        "\\usepackage{graphicx}".to_string(),
        format!("\\graphicspath{{{{{}}}}}", graphics_path),
        "\\usepackage{multicol}".to_string(),
        "\\usepackage{pgf-pie}".to_string(),
        "\\usepackage{pgfplots}".to_string(),
        "\\usepackage{wrapfig}".to_string(),
        "\\usepackage{mathtools}".to_string(),
        format!("\\pgfplotsset{{compat={}}}", options.pgfplots_compat),
        format!(
            "\\usepackage[{}]{{geometry}}",
            options.margins.geometry_options()
        ),
    ];
    lines.extend(options.packages.iter().cloned());
    lines.push(BEGIN_DOCUMENT.to_string());
    lines
}
