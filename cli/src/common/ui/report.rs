//! # tnsg User Notices
//!
//! File: cli/src/common/ui/report.rs
//!
//! ## Overview
//!
//! Everything the user is told about generated files goes through a
//! `Reporter`: created and updated files, skipped overwrites, the service
//! warning, and recoverable errors such as a missing module file. Diagnostic
//! logging stays on `tracing`; notices are the tool's actual output.
//!
//! On the terminal every notice is prefixed with `[tnsg] ` and coloured:
//!
//! ```text
//! [tnsg] created: app/pages/login/login.html
//! [tnsg] updated: app/app.module.ts
//! [tnsg] WARNING Service is generated but not provided, it must be provided to be used.
//! ```
//!
//! `Vec<Notice>` implements `Reporter` too, which is how tests observe output.
//!
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Prefix of every line the generator prints.
pub const TAG_LOG: &str = "[tnsg] ";

/// A user-facing event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Created(PathBuf),
    Updated(PathBuf),
    Skipped(PathBuf),
    Info(String),
    Warning(String),
    Error(String),
}

/// Receives user-facing notices.
pub trait Reporter {
    fn notify(&mut self, notice: Notice);
}

impl Reporter for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Prints notices to stdout, with paths shown relative to `base` when possible.
pub struct TerminalReporter {
    base: Option<PathBuf>,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self {
            base: std::env::current_dir().ok(),
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TerminalReporter {
    fn notify(&mut self, notice: Notice) {
        println!("{}", render_notice(&notice, self.base.as_deref()));
    }
}

/// Formats one notice as a terminal line.
pub fn render_notice(notice: &Notice, base: Option<&Path>) -> String {
    let body = match notice {
        Notice::Created(path) => format!("{}{}", "created: ".green(), display_path(path, base)),
        Notice::Updated(path) => format!("{}{}", "updated: ".yellow(), display_path(path, base)),
        Notice::Skipped(path) => format!("{}{}", "skipped: ".dimmed(), display_path(path, base)),
        Notice::Info(msg) => msg.clone(),
        Notice::Warning(msg) => format!("{} {}", "WARNING".yellow(), msg),
        Notice::Error(msg) => msg.red().to_string(),
    };
    format!("{}{}", TAG_LOG, body)
}

/// `path` relative to `base` if it lies below it, otherwise as given.
pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    match base {
        Some(base) if path.is_absolute() && path.starts_with(base) => {
            pathdiff::diff_paths(path, base)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| path.display().to_string())
        }
        _ => path.display().to_string(),
    }
}
