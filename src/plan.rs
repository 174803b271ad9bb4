use crate::error::Error;
use crate::input::check_duplicates;
use crate::platform;
use std::collections::HashSet;
use std::fs;
use std::io;
use tracing::debug;

/// One pending rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub from: String,
    pub to: String,
}

impl FilePair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Check the edited list before pairing it with the original.
///
/// Line `i` of `edited` is taken to be the new name of `original[i]`, so the
/// lengths must match. Reordered lines are not detected.
pub fn validate_edited(original: &[String], edited: &[String]) -> Result<(), Error> {
    if original.len() != edited.len() {
        return Err(Error::LengthMismatch {
            original: original.len(),
            edited: edited.len(),
        });
    }

    for name in edited {
        if let Some(ch) = platform::find_prohibited_char(name) {
            return Err(Error::ProhibitedChar {
                ch,
                name: name.clone(),
            });
        }
    }

    if edited.iter().any(|name| name.is_empty()) {
        return Err(Error::EmptyName);
    }

    check_duplicates(edited)
}

/// Positional pairing, keeping only the lines that changed.
pub fn compute_pairs(original: &[String], edited: &[String]) -> Vec<FilePair> {
    original
        .iter()
        .zip(edited)
        .filter(|(from, to)| from != to)
        .map(|(from, to)| FilePair::new(from.as_str(), to.as_str()))
        .collect()
}

/// Fail before touching the filesystem if any target exists already or is
/// claimed by more than one pair.
pub fn assert_no_conflicts(pairs: &[FilePair]) -> Result<(), Error> {
    let mut targets: HashSet<&str> = HashSet::with_capacity(pairs.len());

    for pair in pairs {
        if pair.to == pair.from {
            continue;
        }

        match fs::symlink_metadata(&pair.to) {
            Ok(_) => return Err(Error::TargetExists(pair.to.clone())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(Error::TargetStat {
                    path: pair.to.clone(),
                    source,
                })
            }
        }

        if !targets.insert(pair.to.as_str()) {
            return Err(Error::DuplicateTarget(pair.to.clone()));
        }
    }

    debug!("No conflicts among {} pairs", pairs.len());
    Ok(())
}
