//! # md2pdf-prep
//!
//! Prepares inputs for an md2pdf renderer: merges content Markdown files,
//! a generated `<head>` metadata block and the stylesheet into
//! `content.out.md` and `style.out.css`.
//!
//! ## Usage
//!
//! ```bash
//! md2pdf-prep out intro.md chapter1.md --css theme.css --header header.md
//! ```

mod assembler;
mod config;
mod error;
mod header;
mod output_dir;
mod pipeline;
mod request;
mod style;
mod validate;
mod writer;

pub use assembler::{assemble, AssembledDocument};
pub use config::{DocumentConfig, DEFAULT_CONFIG_FILE};
pub use error::{BuildError, Result, Rule, Stage};
pub use header::{build_header, render_head};
pub use output_dir::prepare as prepare_output_dir;
pub use pipeline::{Builder, ConfigSource};
pub use request::BuildRequest;
pub use style::{build_style, HEADER_STYLE};
pub use validate::validate;
pub use writer::{write_outputs, Outputs, CONTENT_FILE, STYLE_FILE};
