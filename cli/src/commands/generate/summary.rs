//! # tnsg Batch Summary
//!
//! File: cli/src/commands/generate/summary.rs
//!
//! Per-item outcomes of a batch and the closing summary line.
//!
use super::ArtifactKind;
use crate::common::ui::report::{Notice, Reporter};
use crate::core::module_file::Registration;
use crate::core::naming::GenerationRequest;
use std::path::PathBuf;

/// What happened to one requested artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub kind: ArtifactKind,
    /// The raw token, e.g. `auth/sign-in`.
    pub token: String,
    /// PascalCase name, e.g. `SignIn`.
    pub adapted: String,
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    /// Only set for pages that got as far as the module file.
    pub registration: Option<Registration>,
    pub error: Option<String>,
}

impl ItemOutcome {
    pub fn new(kind: ArtifactKind, request: &GenerationRequest) -> Self {
        Self {
            kind,
            token: format!("{}{}", request.relative_path, request.name),
            adapted: request.adapted_name(),
            written: Vec::new(),
            skipped: Vec::new(),
            registration: None,
            error: None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Default)]
pub struct GenerationSummary {
    pub items: Vec<ItemOutcome>,
}

impl GenerationSummary {
    pub fn failed_count(&self) -> usize {
        self.items.iter().filter(|item| !item.succeeded()).count()
    }

    pub fn written_count(&self) -> usize {
        self.items.iter().map(|item| item.written.len()).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.items.iter().map(|item| item.skipped.len()).sum()
    }

    /// Prints the closing line, plus one error line naming every failed item.
    pub fn report(&self, reporter: &mut dyn Reporter) {
        reporter.notify(Notice::Info(format!(
            "done: {} item(s), {} file(s) created, {} skipped, {} failed",
            self.items.len(),
            self.written_count(),
            self.skipped_count(),
            self.failed_count()
        )));
        let failed: Vec<String> = self
            .items
            .iter()
            .filter(|item| !item.succeeded())
            .map(|item| format!("{} {}", item.kind.label(), item.token))
            .collect();
        if !failed.is_empty() {
            reporter.notify(Notice::Error(format!("failed: {}", failed.join(", "))));
        }
    }
}
