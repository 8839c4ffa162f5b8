//! Input path validation.
//!
//! Runs before anything touches the filesystem. Rules are checked in a fixed
//! order and the first violation wins.

use std::path::Path;

use tracing::debug;

use crate::error::{BuildError, Result, Rule};
use crate::request::BuildRequest;

pub fn validate(request: &BuildRequest) -> Result<()> {
    let out = request.output_dir();
    if out.is_file() {
        return Err(BuildError::validation(Rule::OutputDirIsFile, out));
    }

    if let Some(missing) = request.content().iter().find(|p| !p.exists()) {
        return Err(BuildError::validation(Rule::MissingContent, missing));
    }

    check_optional(request.css(), Rule::MissingCss)?;
    check_optional(request.header(), Rule::MissingHeader)?;
    check_optional(request.footer(), Rule::MissingFooter)?;

    debug!("Validated {} content files", request.content().len());
    Ok(())
}

fn check_optional(path: Option<&Path>, rule: Rule) -> Result<()> {
    match path {
        Some(p) if !p.exists() => Err(BuildError::validation(rule, p)),
        _ => Ok(()),
    }
}
