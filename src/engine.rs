use crate::config::AppConfig;
use crate::diff;
use crate::editor::Editor;
use crate::error::Error;
use crate::input;
use crate::plan::{self, FilePair};
use crate::prompt::{self, Response};
use crate::rename::{self, RenameReport};
use crate::scratch::{Outcome, ScratchFile};
use colored::*;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, error, info};

pub struct Renamer {
    config: AppConfig,
    initial_diff: bool,
    temp_root: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RunSummary {
    pub pairs: Vec<FilePair>,
    pub report: RenameReport,
}

impl Renamer {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            initial_diff: false,
            temp_root: None,
        }
    }

    /// Print the character diff once before the first prompt.
    pub fn with_initial_diff(mut self, show: bool) -> Self {
        self.initial_diff = show;
        self
    }

    /// Create the scratch directory under `root` instead of the system
    /// temp directory.
    pub fn with_temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(root.into());
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the whole rename session:
    /// 1. Resolve and validate the input paths
    /// 2. Round-trip them through the editor via the scratch file
    /// 3. Validate the edits and build the rename plan
    /// 4. Confirm with the user, then rename
    ///
    /// The scratch directory is removed on every path except a user abort.
    pub fn run<E, R, W>(
        &self,
        files: Vec<String>,
        editor: &E,
        reader: &mut R,
        out: &mut W,
    ) -> Result<Outcome<RunSummary>, Error>
    where
        E: Editor + ?Sized,
        R: BufRead,
        W: Write,
    {
        let files = input::resolve_paths(files)?;
        input::validate_input(&files)?;
        info!("Editing {} paths with {}", files.len(), self.config.editor);

        let scratch = match &self.temp_root {
            Some(root) => ScratchFile::create_in(root, &files)?,
            None => ScratchFile::create(&files)?,
        };

        let outcome = self.session(&scratch, &files, editor, reader, out);
        let kept = match scratch.finish(&outcome) {
            Ok(kept) => kept,
            Err(cleanup_err) => {
                // Surface the session error before the cleanup error replaces it.
                if let Err(err) = &outcome {
                    error!("{}", err);
                    writeln!(out, "{}", err)?;
                }
                return Err(cleanup_err);
            }
        };
        if let Some(kept) = kept {
            writeln!(out, "Aborted: Leaving your edited file at: {}", kept.display())?;
        }
        outcome
    }

    fn session<E, R, W>(
        &self,
        scratch: &ScratchFile,
        files: &[String],
        editor: &E,
        reader: &mut R,
        out: &mut W,
    ) -> Result<Outcome<RunSummary>, Error>
    where
        E: Editor + ?Sized,
        R: BufRead,
        W: Write,
    {
        editor.edit(scratch.path())?;

        let edited = scratch.read_lines()?;
        plan::validate_edited(files, &edited)?;

        let pairs = plan::compute_pairs(files, &edited);
        plan::assert_no_conflicts(&pairs)?;
        debug!("{} of {} paths changed", pairs.len(), files.len());

        if !self.confirm(&pairs, reader, out)? {
            info!("Rename aborted at the prompt");
            writeln!(out, "Operation aborted by user.")?;
            return Ok(Outcome::Aborted);
        }

        let report = rename::rename_all(out, &pairs)?;
        rename::print_summary(out, &report)?;
        info!(
            "{} renamed, {} failed",
            report.succeeded,
            report.failed()
        );

        Ok(Outcome::Completed(RunSummary { pairs, report }))
    }

    /// Show the plan and ask until the user accepts or declines.
    /// An empty plan is accepted without asking.
    fn confirm<R: BufRead, W: Write>(
        &self,
        pairs: &[FilePair],
        reader: &mut R,
        out: &mut W,
    ) -> Result<bool, Error> {
        writeln!(
            out,
            "{}",
            format!("Total files to be renamed: {}", pairs.len()).cyan()
        )?;
        if pairs.is_empty() {
            return Ok(true);
        }

        for pair in pairs {
            writeln!(out, "{} -> {}", pair.from.cyan(), pair.to.yellow())?;
        }
        if self.initial_diff {
            diff::show_diff(out, pairs)?;
        }

        loop {
            match prompt::prompt_user(reader, out)? {
                Response::Yes => return Ok(true),
                Response::No => return Ok(false),
                Response::Diff => diff::show_diff(out, pairs)?,
            }
        }
    }
}

/// Exit code for a finished run. Only a batch where every rename went
/// through counts as success.
pub fn exit_code(result: &Result<Outcome<RunSummary>, Error>) -> i32 {
    match result {
        Ok(Outcome::Completed(summary)) if summary.report.failed() > 0 => 2,
        Ok(Outcome::Completed(_)) => 0,
        Ok(Outcome::Aborted) => 1,
        Err(err) => err.exit_code(),
    }
}
