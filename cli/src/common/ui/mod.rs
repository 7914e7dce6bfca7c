//! # tnsg UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction for the generator:
//!
//! - **`report`**: `Notice` / `Reporter`, the `[tnsg]`-tagged, coloured lines
//!   announcing created, updated and skipped files, warnings and errors.
//! - **`prompt`**: `OverwritePolicy` and its implementations; the interactive
//!   `[n|y] (n)` question asked before an existing file is replaced.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::ui::prompt::{FixedAnswer, LinePrompt, OverwritePolicy};
//! use crate::common::ui::report::{Notice, Reporter, TerminalReporter};
//!
//! let mut reporter = TerminalReporter::new();
//! let mut policy = LinePrompt::stdio();
//! if policy.decide(path)? {
//!     reporter.notify(Notice::Created(path.to_path_buf()));
//! }
//! ```
//!

/// Overwrite decisions (interactive prompt, fixed answers).
pub mod prompt;
/// User-facing notices and their terminal rendering.
pub mod report;
