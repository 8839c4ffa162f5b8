//! Writes `content.out.md` and `style.out.css`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::assembler::AssembledDocument;
use crate::error::{BuildError, Result, Stage};

pub const CONTENT_FILE: &str = "content.out.md";
pub const STYLE_FILE: &str = "style.out.css";

/// Paths of the files produced by a build.
#[derive(Debug, Clone)]
pub struct Outputs {
    pub content: PathBuf,
    pub style: PathBuf,
}

/// Write the content file, then the style file, overwriting both.
///
/// Not atomic: a failed style write leaves the content file in place.
pub fn write_outputs(dir: &Path, doc: &AssembledDocument) -> Result<Outputs> {
    let content = dir.join(CONTENT_FILE);
    write_file(&content, &doc.content)?;

    let style = dir.join(STYLE_FILE);
    write_file(&style, &doc.style)?;

    Ok(Outputs { content, style })
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|e| BuildError::io(Stage::WriteOutputs, path, e))?;
    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
