//! # tnsg Checked File Writes
//!
//! File: cli/src/common/fs/overwrite.rs
//!
//! ## Overview
//!
//! `write_with_overwrite_check` is how every generated file reaches the disk:
//!
//! 1. If nothing exists at the path, write it.
//! 2. If a file exists, ask the `OverwritePolicy`. "No" leaves the file
//!    untouched and reports `skipped`; "yes" overwrites.
//! 3. After a write, report `created`.
//!
//! I/O failures are returned to the caller; they are never turned into skips.
//!
use crate::common::fs::io;
use crate::common::ui::prompt::OverwritePolicy;
use crate::common::ui::report::{Notice, Reporter};
use crate::core::error::{Result, TnsgError};
use std::path::Path;
use tracing::info;

/// What happened to one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Skipped,
}

/// Writes `content` to `path`, asking `policy` first if the file already exists.
pub fn write_with_overwrite_check(
    path: &Path,
    content: &str,
    policy: &mut dyn OverwritePolicy,
    reporter: &mut dyn Reporter,
) -> Result<WriteOutcome> {
    if path.exists() {
        if path.is_dir() {
            anyhow::bail!(TnsgError::FileSystem(format!(
                "Cannot write file {:?}: a directory exists at that path",
                path
            )));
        }
        if !policy.decide(path)? {
            info!("Keeping existing file {:?}", path);
            reporter.notify(Notice::Skipped(path.to_path_buf()));
            return Ok(WriteOutcome::Skipped);
        }
    }
    io::write_string_to_file(path, content)?;
    reporter.notify(Notice::Created(path.to_path_buf()));
    Ok(WriteOutcome::Written)
}
