//! Input paths for a single build.

use std::path::{Path, PathBuf};

/// The input paths for one build.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    output_dir: PathBuf,
    content: Vec<PathBuf>,
    css: Option<PathBuf>,
    header: Option<PathBuf>,
    footer: Option<PathBuf>,
}

impl BuildRequest {
    pub fn new(output_dir: impl Into<PathBuf>, content: Vec<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            content,
            css: None,
            header: None,
            footer: None,
        }
    }

    pub fn with_css(mut self, css: Option<PathBuf>) -> Self {
        self.css = css;
        self
    }

    pub fn with_header(mut self, header: Option<PathBuf>) -> Self {
        self.header = header;
        self
    }

    /// The footer is checked for existence but its content is never used.
    pub fn with_footer(mut self, footer: Option<PathBuf>) -> Self {
        self.footer = footer;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn content(&self) -> &[PathBuf] {
        &self.content
    }

    pub fn css(&self) -> Option<&Path> {
        self.css.as_deref()
    }

    pub fn header(&self) -> Option<&Path> {
        self.header.as_deref()
    }

    pub fn footer(&self) -> Option<&Path> {
        self.footer.as_deref()
    }
}
