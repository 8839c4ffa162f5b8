//! Error types for md2pdf-prep.
//!
//! Every stage returns a [`BuildError`]; the binary maps it to a process exit
//! code with [`BuildError::exit_code`].

use std::fmt;
use std::path::{Path, PathBuf};

/// Input validation rules, in the order they are checked.
///
/// The discriminant doubles as the process exit code for the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    OutputDirIsFile = 1,
    MissingContent = 2,
    MissingCss = 3,
    MissingHeader = 4,
    MissingFooter = 5,
}

impl Rule {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Pipeline stage an I/O failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PrepareOutputDir,
    ReadInputs,
    WriteOutputs,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::PrepareOutputDir => "Output directory processing failed",
            Stage::ReadInputs => "Error with reading input files",
            Stage::WriteOutputs => "Error with writing output files",
        };
        f.write_str(s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A precondition on the input paths does not hold.
    #[error("{}", validation_message(*rule, path))]
    Validation { rule: Rule, path: PathBuf },

    /// Filesystem I/O error.
    #[error("{stage}: {}: {source}", path.display())]
    Io {
        stage: Stage,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The metadata config exists but is not a JSON object of strings.
    #[error("Failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, BuildError>;

impl BuildError {
    pub fn validation(rule: Rule, path: impl Into<PathBuf>) -> Self {
        Self::Validation {
            rule,
            path: path.into(),
        }
    }

    pub fn io(stage: Stage, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            stage,
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this failure.
    ///
    /// Validation rules map to 1-5, I/O failures pass the OS errno through.
    /// Anything without an errno (bad JSON, non-UTF-8 input) exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::Validation { rule, .. } => rule.code(),
            BuildError::Io { source, .. } => match source.raw_os_error() {
                Some(code) if code > 0 => code,
                _ => 1,
            },
            BuildError::Config { .. } => 1,
        }
    }
}

fn validation_message(rule: Rule, path: &Path) -> String {
    let p = path.display();
    match rule {
        Rule::OutputDirIsFile => format!(
            "Path '{p}' is an existing file, please give a valid path to the output directory."
        ),
        Rule::MissingContent => format!(
            "Content file '{p}' does not exist, please provide content files that exist."
        ),
        Rule::MissingCss => format!(
            "CSS file '{p}' provided but does not exist, please provide a CSS file that exists."
        ),
        Rule::MissingHeader => format!(
            "MD header file '{p}' provided but does not exist, please provide a header MD file that exists."
        ),
        Rule::MissingFooter => format!(
            "MD footer file '{p}' provided but does not exist, please provide a footer MD file that exists."
        ),
    }
}
