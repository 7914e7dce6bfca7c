//! # tnsg Generate Command
//!
//! File: cli/src/commands/generate/mod.rs
//!
//! ## Overview
//!
//! This module implements the generator's only command: every flag names a
//! kind of artifact and takes zero or more names.
//!
//! ```bash
//! tnsg -p login auth/sign-up      # pages, registered in app.module.ts
//! tnsg -vi side-menu              # views
//! tnsg -c user -s user-data       # classes and services
//! ```
//!
//! ## Architecture
//!
//! 1. `normalize_legacy_flags` rewrites the single-dash long spellings
//!    (`-page`, `-service`, `-class`, `-view`, `-vi`) to `--page` and friends
//!    before `clap` sees them.
//! 2. `handle_generate` loads configuration, applies `--app-dir` / `--lang`,
//!    picks the overwrite policy (`--yes`, `--no-overwrite`, or the prompt) and
//!    runs the batch.
//! 3. `run_batch` processes items strictly in order (pages, classes, services,
//!    views), one at a time. Each item gets an `ItemOutcome`; a failure ends
//!    that item but not the batch unless `--fail-fast` is set.
//! 4. The `GenerationSummary` is printed and decides the exit status.
//!
//! The per-kind generation sequences live in `page.rs`, `view.rs`, `class.rs`
//! and `service.rs` as methods on `Generator`.
//!
use crate::common::fs::overwrite::{write_with_overwrite_check, WriteOutcome};
use crate::common::ui::prompt::{FixedAnswer, LinePrompt, OverwritePolicy};
use crate::common::ui::report::{Notice, Reporter, TerminalReporter};
use crate::core::config::{self, Language, ProjectConfig};
use crate::core::error::Result;
use crate::core::naming::{parse_artifact_name, split_request, GenerationRequest};
use anyhow::Context;
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

mod class;
mod page;
mod service;
mod summary;
mod view;

pub use summary::{GenerationSummary, ItemOutcome};

/// Arguments of the generator.
#[derive(Parser, Debug, Default)]
pub struct GenerateArgs {
    /// Pages to create and register in the module file (e.g. `login`, `auth/sign-up`).
    #[arg(short = 'p', long = "page", num_args = 0.., value_name = "NAME", value_parser = parse_artifact_name)]
    pub page: Option<Vec<String>>,

    /// Services to create under the shared directory (not provided automatically).
    #[arg(short = 's', long = "service", num_args = 0.., value_name = "NAME", value_parser = parse_artifact_name)]
    pub service: Option<Vec<String>>,

    /// Classes to create under the shared directory.
    #[arg(short = 'c', long = "class", num_args = 0.., value_name = "NAME", value_parser = parse_artifact_name)]
    pub class: Option<Vec<String>>,

    /// Views (markup, style and logic) to create under the pages directory. Also `-vi`.
    #[arg(long = "view", num_args = 0.., value_name = "NAME", value_parser = parse_artifact_name)]
    pub view: Option<Vec<String>>,

    /// Overwrite existing files without asking.
    #[arg(short = 'y', long, conflicts_with = "no_overwrite")]
    pub yes: bool,

    /// Keep every existing file without asking.
    #[arg(long)]
    pub no_overwrite: bool,

    /// Stop at the first item that fails instead of continuing with the rest.
    #[arg(long)]
    pub fail_fast: bool,

    /// Application directory holding `app.module.<ext>` (default: `app`).
    #[arg(long, env = "TNSG_APP_DIR", value_name = "DIR")]
    pub app_dir: Option<PathBuf>,

    /// Language of components, classes, services and the module file (default: `ts`).
    #[arg(long, env = "TNSG_LANG", value_enum)]
    pub lang: Option<Language>,

    /// Read configuration from this file only, ignoring user and project files.
    #[arg(long, env = "TNSG_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Requested artifacts in processing order: pages, classes, services, views.
    pub fn requests(&self) -> Vec<(ArtifactKind, GenerationRequest)> {
        let groups = [
            (ArtifactKind::Page, &self.page),
            (ArtifactKind::Class, &self.class),
            (ArtifactKind::Service, &self.service),
            (ArtifactKind::View, &self.view),
        ];
        groups
            .into_iter()
            .flat_map(|(kind, names)| {
                names
                    .iter()
                    .flatten()
                    .map(move |token| (kind, split_request(token)))
            })
            .collect()
    }

    /// Applies `--app-dir` and `--lang` (or their `TNSG_*` variables) over the loaded configuration.
    fn apply_overrides(&self, project: &mut ProjectConfig) {
        if let Some(app_dir) = &self.app_dir {
            project.app_dir = config::expand_app_dir(&app_dir.to_string_lossy());
        }
        if let Some(lang) = self.lang {
            project.language = lang;
        }
    }

    fn overwrite_policy(&self) -> Box<dyn OverwritePolicy> {
        if self.yes {
            Box::new(FixedAnswer(true))
        } else if self.no_overwrite {
            Box::new(FixedAnswer(false))
        } else {
            Box::new(LinePrompt::stdio())
        }
    }
}

/// The four kinds of generated artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Page,
    View,
    Class,
    Service,
}

impl ArtifactKind {
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Page => "page",
            ArtifactKind::View => "view",
            ArtifactKind::Class => "class",
            ArtifactKind::Service => "service",
        }
    }
}

/// Rewrites the single-dash long flags (`-page`, `-vi`, ...) to `clap` long flags.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-page") => OsString::from("--page"),
            Some("-service") => OsString::from("--service"),
            Some("-class") => OsString::from("--class"),
            Some("-view") | Some("-vi") => OsString::from("--view"),
            _ => arg,
        })
        .collect()
}

/// Entry point of the command.
pub fn handle_generate(args: GenerateArgs) -> Result<()> {
    let mut cfg = config::load_config(args.config.as_deref())?;
    args.apply_overrides(&mut cfg.project);
    config::validate_config(&cfg).context("Invalid command-line overrides")?;
    debug!("Effective project layout: {:?}", cfg.project);

    let mut reporter = TerminalReporter::new();
    let requests = args.requests();
    if requests.is_empty() {
        reporter.notify(Notice::Info(
            "nothing to generate; use -p, -vi, -c or -s (see --help).".to_string(),
        ));
        return Ok(());
    }

    let mut policy = args.overwrite_policy();
    let summary = run_batch(
        &requests,
        &cfg.project,
        policy.as_mut(),
        &mut reporter,
        args.fail_fast,
    );
    summary.report(&mut reporter);

    let failed = summary.failed_count();
    if failed > 0 {
        anyhow::bail!("{} of {} item(s) failed", failed, summary.items.len());
    }
    Ok(())
}

/// Generates every request in order and collects the outcomes.
pub fn run_batch(
    requests: &[(ArtifactKind, GenerationRequest)],
    project: &ProjectConfig,
    policy: &mut dyn OverwritePolicy,
    reporter: &mut dyn Reporter,
    fail_fast: bool,
) -> GenerationSummary {
    let mut generator = Generator {
        project,
        policy,
        reporter,
    };
    let mut summary = GenerationSummary::default();
    for (kind, request) in requests {
        let outcome = generator.generate(*kind, request);
        let stop = fail_fast && outcome.error.is_some();
        summary.items.push(outcome);
        if stop {
            info!("Stopping after the first failure (--fail-fast)");
            break;
        }
    }
    summary
}

/// Shared state of one batch: where files go, who decides overwrites, who hears about it.
pub struct Generator<'a> {
    project: &'a ProjectConfig,
    policy: &'a mut dyn OverwritePolicy,
    reporter: &'a mut dyn Reporter,
}

impl Generator<'_> {
    fn generate(&mut self, kind: ArtifactKind, request: &GenerationRequest) -> ItemOutcome {
        let mut outcome = ItemOutcome::new(kind, request);
        self.reporter.notify(Notice::Info(format!(
            "creating {}: {}...",
            kind.label(),
            outcome.adapted
        )));
        let result = match kind {
            ArtifactKind::Page => self.create_page(request, &mut outcome),
            ArtifactKind::View => self.create_view(request, &mut outcome),
            ArtifactKind::Class => self.create_class(request, &mut outcome),
            ArtifactKind::Service => self.create_service(request, &mut outcome),
        };
        if let Err(e) = result {
            error!("Generating {} '{}' failed: {:?}", kind.label(), request.name, e);
            let message = format!("{:#}", e);
            self.reporter.notify(Notice::Error(format!(
                "{} {} failed: {}",
                kind.label(),
                outcome.adapted,
                message
            )));
            outcome.error = Some(message);
        }
        outcome
    }

    /// Writes one file through the overwrite check and records where it went.
    fn write(&mut self, outcome: &mut ItemOutcome, path: PathBuf, content: &str) -> Result<()> {
        match write_with_overwrite_check(&path, content, &mut *self.policy, &mut *self.reporter)? {
            WriteOutcome::Written => outcome.written.push(path),
            WriteOutcome::Skipped => outcome.skipped.push(path),
        }
        Ok(())
    }

    fn extension(&self) -> &'static str {
        self.project.language.extension()
    }

    /// `<root>/<relative_path><name>/`
    fn bundle_dir(root: &Path, request: &GenerationRequest) -> PathBuf {
        root.join(format!("{}{}", request.relative_path, request.name))
    }
}
