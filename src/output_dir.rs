//! Output directory preparation.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{BuildError, Result, Stage};

/// Create the output directory and any missing parents.
///
/// An existing directory is success; any other failure carries the OS error.
pub fn prepare(dir: &Path) -> Result<()> {
    match fs::create_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => {}
        Err(e) => return Err(BuildError::io(Stage::PrepareOutputDir, dir, e)),
    }
    debug!("Output directory ready: {}", dir.display());
    Ok(())
}
