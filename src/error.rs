use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error: File {0} does not exist")]
    MissingInput(String),

    #[error("Error: Duplicate file name found: {0}")]
    DuplicateName(String),

    #[error("Error listing files: {0}")]
    ListFiles(String),

    #[error("Editor returned non 0. Aborting! {0}")]
    Editor(String),

    #[error("Error reading temporary file: {0}")]
    ReadScratch(#[source] std::io::Error),

    #[error("Error: Number of original files does not match number of new files")]
    LengthMismatch { original: usize, edited: usize },

    #[error("Error: Empty file name is not allowed")]
    EmptyName,

    #[error("Error: Prohibited character '{ch}' found in file name: {name}")]
    ProhibitedChar { ch: char, name: String },

    #[error("Error: Destination file '{0}' already exists.")]
    TargetExists(String),

    #[error("Error: Could not stat destination file '{path}': {source}")]
    TargetStat {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: Multiple files are being renamed to '{0}', which is unsupported.")]
    DuplicateTarget(String),

    #[error("Error reading response: {0}")]
    Prompt(String),

    #[error("Error creating temporary directory: {0}")]
    CreateTempDir(#[source] std::io::Error),

    #[error("Error creating temporary file: {0}")]
    WriteScratch(#[source] std::io::Error),

    #[error("Error removing temporary file {path:?}: {source}")]
    RemoveTempDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Error writing output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Process exit code: 2 for internal failures, 1 for everything the
    /// user can fix.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CreateTempDir(_)
            | Error::WriteScratch(_)
            | Error::RemoveTempDir { .. }
            | Error::Config(_)
            | Error::Output(_) => 2,
            _ => 1,
        }
    }

    /// Shape errors concern the edited list itself rather than the filesystem.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Error::LengthMismatch { .. }
                | Error::EmptyName
                | Error::ProhibitedChar { .. }
                | Error::DuplicateName(_)
        )
    }
}
