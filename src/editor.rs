use crate::error::Error;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Something that lets the user edit the scratch file in place.
pub trait Editor {
    fn edit(&self, path: &Path) -> Result<(), Error>;
}

/// Runs an external program on the file with the terminal attached and
/// blocks until it exits.
#[derive(Debug, Clone)]
pub struct CommandEditor {
    program: String,
}

impl CommandEditor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Editor for CommandEditor {
    fn edit(&self, path: &Path) -> Result<(), Error> {
        info!("Launching {} on {}", self.program, path.display());
        let status = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::Editor(format!("failed to run {}: {}", self.program, e)))?;

        debug!("{} exited with {}", self.program, status);
        if !status.success() {
            return Err(Error::Editor(status.to_string()));
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_successful_editor() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("list.txt");
        std::fs::write(&file, "a").unwrap();
        assert!(CommandEditor::new("true").edit(&file).is_ok());
    }

    #[test]
    fn test_non_zero_exit_is_an_editor_error() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("list.txt");
        match CommandEditor::new("false").edit(&file) {
            Err(err @ Error::Editor(_)) => assert_eq!(err.exit_code(), 1),
            other => panic!("expected editor error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_program_is_an_editor_error() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("list.txt");
        let editor = CommandEditor::new("vimv-no-such-editor-program");
        assert!(matches!(editor.edit(&file), Err(Error::Editor(_))));
    }
}
