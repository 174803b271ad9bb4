use crate::error::Error;
use glob::{glob, Pattern};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

pub fn remove_empty_lines(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|line| !line.is_empty()).collect()
}

/// Every entry directly inside `dir`, in glob (sorted) order.
/// An empty `dir` lists the working directory with bare names.
pub fn list_directory(dir: &Path) -> Result<Vec<String>, Error> {
    let dir_str = dir
        .to_str()
        .ok_or_else(|| Error::ListFiles(format!("non UTF-8 directory {:?}", dir)))?;
    let pattern = if dir_str.is_empty() {
        "*".to_string()
    } else {
        format!("{}/*", Pattern::escape(dir_str.trim_end_matches('/')))
    };

    let mut files = Vec::new();
    for entry in glob(&pattern).map_err(|e| Error::ListFiles(e.to_string()))? {
        let path = entry.map_err(|e| Error::ListFiles(e.to_string()))?;
        match path.to_str() {
            Some(name) => files.push(name.to_string()),
            None => {
                return Err(Error::ListFiles(format!(
                    "non UTF-8 file name {:?}",
                    path
                )))
            }
        }
    }
    debug!("Listed {} entries with pattern {}", files.len(), pattern);
    Ok(files)
}

/// Candidate paths: the given arguments, or every entry of the working
/// directory when none were given.
pub fn resolve_paths(args: Vec<String>) -> Result<Vec<String>, Error> {
    let files = remove_empty_lines(args);
    if files.is_empty() {
        return list_directory(Path::new(""));
    }
    Ok(files)
}

pub fn check_duplicates(names: &[String]) -> Result<(), Error> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(Error::DuplicateName(name.clone()));
        }
    }
    Ok(())
}

/// Every path must exist and appear only once.
pub fn validate_input(files: &[String]) -> Result<(), Error> {
    for file in files {
        if let Err(err) = fs::metadata(file) {
            if err.kind() == io::ErrorKind::NotFound {
                return Err(Error::MissingInput(file.clone()));
            }
        }
    }
    check_duplicates(files)
}
