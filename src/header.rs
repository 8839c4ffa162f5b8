//! Document head block: `<title>` and `<meta>` tags from the config, followed
//! by the optional custom header file.

use std::path::Path;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::DocumentConfig;
use crate::error::{BuildError, Result, Stage};

/// Render the `<head>` element for `config`.
pub fn render_head(config: &DocumentConfig) -> String {
    let mut out = String::from("<head>");
    out.push_str(&format!("<title>{}</title>", encode_text(&config.title())));
    for (name, content) in config.meta_entries() {
        out.push_str(&format!(
            r#"<meta name="{}" content="{}">"#,
            encode_double_quoted_attribute(name),
            encode_double_quoted_attribute(&content)
        ));
    }
    out.push_str("</head>");
    out
}

/// Build the header block.
///
/// Without a config no metadata is generated. A header file, when given, is
/// appended after a newline.
pub fn build_header(config: Option<&DocumentConfig>, header_file: Option<&Path>) -> Result<String> {
    let mut contents = config.map(render_head).unwrap_or_default();

    if let Some(path) = header_file {
        let text = std::fs::read_to_string(path)
            .map_err(|e| BuildError::io(Stage::ReadInputs, path, e))?;
        contents.push('\n');
        contents.push_str(&text);
    }

    Ok(contents)
}
