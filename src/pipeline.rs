//! Build orchestration.

use std::path::PathBuf;

use colored::*;
use tracing::info;

use crate::assembler::assemble;
use crate::config::DocumentConfig;
use crate::error::Result;
use crate::output_dir;
use crate::request::BuildRequest;
use crate::validate::validate;
use crate::writer::{write_outputs, Outputs};

/// Where the document metadata comes from.
#[derive(Debug, Clone, Default)]
pub enum ConfigSource {
    /// No metadata block is generated.
    #[default]
    None,
    Inline(DocumentConfig),
    /// Loaded once validation passes; a missing file means no metadata.
    File(PathBuf),
}

impl ConfigSource {
    fn resolve(&self) -> Result<Option<DocumentConfig>> {
        match self {
            ConfigSource::None => Ok(None),
            ConfigSource::Inline(config) => Ok(Some(config.clone())),
            ConfigSource::File(path) => DocumentConfig::load_optional(path),
        }
    }
}

/// Runs one build: validate, prepare the output directory, assemble, write.
///
/// The first failing stage stops the run.
pub struct Builder {
    request: BuildRequest,
    config: ConfigSource,
}

impl Builder {
    pub fn new(request: BuildRequest, config: ConfigSource) -> Self {
        Self { request, config }
    }

    pub fn run(&self) -> Result<Outputs> {
        validate(&self.request)?;

        let out_dir = self.request.output_dir();
        output_dir::prepare(out_dir)?;
        info!("Building into \"{}\"", out_dir.display().to_string().green());

        let config = self.config.resolve()?;
        let doc = assemble(&self.request, config.as_ref())?;
        write_outputs(out_dir, &doc)
    }
}
