//! Joins the header block and content files into the output document.

use std::path::Path;

use tracing::{debug, info};

use crate::config::DocumentConfig;
use crate::error::{BuildError, Result, Stage};
use crate::header::build_header;
use crate::request::BuildRequest;
use crate::style::build_style;

/// Assembled output, held in memory until it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledDocument {
    pub content: String,
    pub style: String,
}

/// Build the stylesheet and the document body for `request`.
///
/// The body is the header block followed by each content file in order,
/// joined by newlines. A footer path is accepted but never read.
pub fn assemble(request: &BuildRequest, config: Option<&DocumentConfig>) -> Result<AssembledDocument> {
    let style = build_style(request.css())?;

    let mut blocks = vec![build_header(config, request.header())?];

    if let Some(footer) = request.footer() {
        debug!("Footer {} accepted but not appended", footer.display());
    }

    for path in request.content() {
        blocks.push(read_block(path)?);
    }

    info!("Assembled {} content files", request.content().len());
    Ok(AssembledDocument {
        content: blocks.join("\n"),
        style,
    })
}

fn read_block(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| BuildError::io(Stage::ReadInputs, path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::HEADER_STYLE;
    use std::fs;

    #[test]
    fn content_in_argument_order() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a.md");
        let b = tmp.path().join("b.md");
        fs::write(&a, "Hello").unwrap();
        fs::write(&b, "World").unwrap();

        let request = BuildRequest::new(tmp.path().join("out"), vec![b.clone(), a, b]);
        let doc = assemble(&request, None).unwrap();
        assert_eq!(doc.content, "\nWorld\nHello\nWorld");
        assert_eq!(doc.style, HEADER_STYLE.join("\n"));
    }

    #[test]
    fn header_block_comes_first() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a.md");
        fs::write(&a, "# Intro").unwrap();

        let cfg = DocumentConfig::new(Some("Guide"), [("author", "Ada")]);
        let request = BuildRequest::new(tmp.path().join("out"), vec![a]);
        let doc = assemble(&request, Some(&cfg)).unwrap();
        assert_eq!(
            doc.content,
            "<head><title>Guide</title><meta name=\"author\" content=\"Ada\"></head>\n# Intro"
        );
    }

    #[test]
    fn footer_content_is_never_appended() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a.md");
        let footer = tmp.path().join("footer.md");
        fs::write(&a, "body").unwrap();
        fs::write(&footer, "FOOTER-SENTINEL-7f3a").unwrap();

        let request = BuildRequest::new(tmp.path().join("out"), vec![a]).with_footer(Some(footer));
        let doc = assemble(&request, None).unwrap();
        assert!(!doc.content.contains("FOOTER-SENTINEL-7f3a"));
        assert_eq!(doc.content, "\nbody");
    }

    #[test]
    fn read_failure_aborts() {
        let tmp = tempfile::tempdir().unwrap();
        let request = BuildRequest::new(tmp.path().join("out"), vec![tmp.path().join("gone.md")]);
        let err = assemble(&request, None).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Io {
                stage: Stage::ReadInputs,
                ..
            }
        ));
    }
}
