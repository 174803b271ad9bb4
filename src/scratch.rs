use crate::error::Error;
use crate::input::remove_empty_lines;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, info};

pub const SCRATCH_PREFIX: &str = "vimv-";
pub const SCRATCH_FILE_NAME: &str = "file_list.txt";

/// How the workflow ended, as far as the scratch file is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    /// The user declined at the prompt; their edits are kept on disk.
    Aborted,
}

/// The temporary file holding the path list while the user edits it.
///
/// Dropping a `ScratchFile` removes its directory. Call [`ScratchFile::finish`]
/// to keep it after an abort or to see removal errors.
#[derive(Debug)]
pub struct ScratchFile {
    dir: TempDir,
    file: PathBuf,
}

impl ScratchFile {
    pub fn create(files: &[String]) -> Result<Self, Error> {
        Self::create_in(&std::env::temp_dir(), files)
    }

    pub fn create_in(root: &Path, files: &[String]) -> Result<Self, Error> {
        let dir = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir_in(root)
            .map_err(Error::CreateTempDir)?;
        let file = dir.path().join(SCRATCH_FILE_NAME);
        fs::write(&file, files.join("\n")).map_err(Error::WriteScratch)?;
        debug!("Wrote {} paths to {}", files.len(), file.display());
        Ok(Self { dir, file })
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Non-empty lines of the scratch file as it is now.
    pub fn read_lines(&self) -> Result<Vec<String>, Error> {
        let contents = fs::read_to_string(&self.file).map_err(Error::ReadScratch)?;
        let lines = contents
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Ok(remove_empty_lines(lines))
    }

    /// Keep the directory after an abort, remove it otherwise.
    /// Returns where the scratch file was left, if it was kept.
    pub fn finish<T>(self, outcome: &Result<Outcome<T>, Error>) -> Result<Option<PathBuf>, Error> {
        if let Ok(Outcome::Aborted) = outcome {
            let file = self.file;
            let _ = self.dir.keep();
            info!("Keeping scratch file {}", file.display());
            return Ok(Some(file));
        }

        let path = self.dir.path().to_path_buf();
        self.dir
            .close()
            .map_err(|source| Error::RemoveTempDir { path: path.clone(), source })?;
        debug!("Removed scratch directory {}", path.display());
        Ok(None)
    }
}
