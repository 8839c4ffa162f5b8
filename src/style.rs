//! Stylesheet output: running-header rules plus optional user CSS.

use std::path::Path;

use crate::error::{BuildError, Result, Stage};

/// Running-header rules emitted at the top of every stylesheet.
pub const HEADER_STYLE: [&str; 4] = [
    "/* ===Header Style=== */",
    "@page { @top-left { content: element(header) }; }",
    "#header { display: block; position: running(header); }",
    "/* ================== */",
];

/// Build the stylesheet: the fixed header rules, then the user CSS under a
/// marker comment naming its path.
pub fn build_style(css_file: Option<&Path>) -> Result<String> {
    let mut lines: Vec<String> = HEADER_STYLE.iter().map(|s| s.to_string()).collect();

    if let Some(path) = css_file {
        lines.push(format!("/* ==={} Style=== */", path.display()));
        let css = std::fs::read_to_string(path)
            .map_err(|e| BuildError::io(Stage::ReadInputs, path, e))?;
        lines.push(css);
    }

    Ok(lines.join("\n"))
}
