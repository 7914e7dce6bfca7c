//! # tnsg Overwrite Prompt
//!
//! File: cli/src/common/ui/prompt.rs
//!
//! ## Overview
//!
//! Decides whether an existing file may be overwritten. The decision is an
//! injectable `OverwritePolicy` so batch generation can be driven by the
//! interactive prompt, by `--yes` / `--no-overwrite`, or by a scripted answer
//! list in tests.
//!
//! The interactive prompt reads one line per question and defaults to "no":
//!
//! ```text
//! [tnsg] file app/pages/login/login.html exists, rewrite ? [n|y] (n):
//! ```
//!
//! Only `y` / `yes` (any case) overwrite. An empty line or end of input keeps
//! the existing file.
//!
use crate::common::ui::report::{display_path, TAG_LOG};
use crate::core::error::{Result, TnsgError};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Answers "may this existing file be overwritten?".
pub trait OverwritePolicy {
    fn decide(&mut self, path: &Path) -> Result<bool>;
}

/// Gives the same answer for every file (`--yes`, `--no-overwrite`).
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl OverwritePolicy for FixedAnswer {
    fn decide(&mut self, path: &Path) -> Result<bool> {
        debug!("Fixed overwrite answer {} for {}", self.0, path.display());
        Ok(self.0)
    }
}

/// Asks on `output` and reads the answer from `input`, one line per file.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
    base: Option<PathBuf>,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            base: std::env::current_dir().ok(),
        }
    }
}

impl LinePrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on stdout, answers from stdin.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> OverwritePolicy for LinePrompt<R, W> {
    fn decide(&mut self, path: &Path) -> Result<bool> {
        write!(
            self.output,
            "{}file {} exists, rewrite ? [n|y] (n): ",
            TAG_LOG,
            display_path(path, self.base.as_deref()).underline()
        )
        .and_then(|_| self.output.flush())
        .map_err(|e| TnsgError::Prompt(e.to_string()))?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .map_err(|e| TnsgError::Prompt(e.to_string()))?;
        if read == 0 {
            // No more input: keep the file, and end the dangling prompt line.
            let _ = writeln!(self.output);
            debug!("End of input while asking about {}", path.display());
            return Ok(false);
        }
        Ok(is_yes(&answer))
    }
}

/// `y` or `yes`, ignoring case and surrounding whitespace.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
