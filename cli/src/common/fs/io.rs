//! # tnsg Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the raw filesystem operations the generator needs,
//! as thin wrappers around `std::fs` that attach the offending path to every
//! error:
//! - **`ensure_dir_exists`**: creates a directory and its parents (`mkdir -p`),
//!   failing if the path exists but is not a directory.
//! - **`read_file_to_string`**: reads the module file before patching.
//! - **`write_string_to_file`**: creates the parent directory, then writes
//!   (overwriting) the file. Used for generated files once the overwrite policy
//!   agreed, and for the module file unconditionally.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::ensure_dir_exists(Path::new("app/pages/login"))?;
//! io::write_string_to_file(Path::new("app/pages/login/login.html"), "<Label/>")?;
//! let module = io::read_file_to_string(Path::new("app/app.module.ts"))?;
//! ```
//!
use crate::core::error::{Result, TnsgError};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(TnsgError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a specified file path, overwriting if it exists.
///
/// The parent directory is created first if needed.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}
