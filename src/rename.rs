use crate::plan::FilePair;
use colored::*;
use std::fs;
use std::io::{self, Write};
use tracing::{error, info};

#[derive(Debug)]
pub struct RenameFailure {
    pub pair: FilePair,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct RenameReport {
    pub succeeded: usize,
    pub failures: Vec<RenameFailure>,
}

impl RenameReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Rename every pair, carrying on past failures. Each failure is printed
/// as it happens and collected in the report.
pub fn rename_all<W: Write>(out: &mut W, pairs: &[FilePair]) -> io::Result<RenameReport> {
    let mut report = RenameReport::default();

    for pair in pairs {
        // The target may have appeared while the user was at the prompt.
        let result = if fs::symlink_metadata(&pair.to).is_ok() {
            Err(format!("destination file {} already exists", pair.to))
        } else {
            fs::rename(&pair.from, &pair.to)
                .map_err(|e| format!("error renaming {} to {}: {}", pair.from, pair.to, e))
        };

        match result {
            Ok(()) => {
                info!("Renamed {} -> {}", pair.from, pair.to);
                report.succeeded += 1;
            }
            Err(message) => {
                error!("{}", message);
                writeln!(out, "{}", message)?;
                report.failures.push(RenameFailure {
                    pair: pair.clone(),
                    message,
                });
            }
        }
    }

    Ok(report)
}

pub fn print_summary<W: Write>(out: &mut W, report: &RenameReport) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Renamed {} files successfully.", report.succeeded).green()
    )?;
    if report.failed() > 0 {
        writeln!(
            out,
            "{}",
            format!("Error renaming {} files.", report.failed()).red()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn path_str(p: &std::path::Path) -> String {
        p.to_string_lossy().into_owned()
    }

    #[test]
    fn test_failures_do_not_stop_the_batch() {
        let tmp = tempdir().unwrap();
        let a = tmp.path().join("a.txt");
        let missing = tmp.path().join("missing.txt");
        fs::write(&a, "alpha").unwrap();

        let pairs = vec![
            FilePair::new(path_str(&missing), path_str(&tmp.path().join("x.txt"))),
            FilePair::new(path_str(&a), path_str(&tmp.path().join("b.txt"))),
        ];
        let mut out = Vec::new();
        let report = rename_all(&mut out, &pairs).unwrap();

        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failures[0].pair, pairs[0]);
        assert!(!a.exists());
        assert_eq!(fs::read_to_string(tmp.path().join("b.txt")).unwrap(), "alpha");
        assert!(String::from_utf8(out).unwrap().contains("error renaming"));
    }

    #[test]
    fn test_existing_destination_is_not_overwritten() {
        let tmp = tempdir().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "alpha").unwrap();
        fs::write(&b, "beta").unwrap();

        let mut out = Vec::new();
        let report = rename_all(&mut out, &[FilePair::new(path_str(&a), path_str(&b))]).unwrap();

        assert_eq!(report.succeeded, 0);
        assert_eq!(report.failed(), 1);
        assert_eq!(fs::read_to_string(&b).unwrap(), "beta");
        assert!(report.failures[0].message.contains("already exists"));
    }

    #[test]
    fn test_summary_lines() {
        colored::control::set_override(false);
        let mut report = RenameReport {
            succeeded: 3,
            failures: Vec::new(),
        };
        let mut out = Vec::new();
        print_summary(&mut out, &report).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Renamed 3 files successfully.\n");

        report.failures.push(RenameFailure {
            pair: FilePair::new("a", "b"),
            message: "boom".to_string(),
        });
        let mut out = Vec::new();
        print_summary(&mut out, &report).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Renamed 3 files successfully.\nError renaming 1 files.\n"
        );
    }
}
