//! # tnsg Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the generator.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `TnsgError`: A custom error enum using `thiserror` for the failures callers
//!   may want to tell apart (missing module file, missing markers, bad names).
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so any function can add
//!   context with `.context(..)` and propagate with `?`.
//!
//! Declining an overwrite is *not* an error; it is reported as
//! `WriteOutcome::Skipped` by the file writer.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! anyhow::bail!(TnsgError::MarkerNotFound { marker: "@NgModule".into() });
//!
//! // Check for a specific failure
//! if let Some(TnsgError::ModuleFileMissing { path }) = err.downcast_ref::<TnsgError>() {
//!     println!("{} not found", path.display());
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the tnsg application.
#[derive(Error, Debug)]
pub enum TnsgError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("{} not found.", path.display())]
    ModuleFileMissing { path: PathBuf },

    #[error("Marker '{marker}' not found in module file.")]
    MarkerNotFound { marker: String },

    #[error("The '{marker}' array in the module file is never closed.")]
    UnterminatedArray { marker: String },

    #[error("Could not read the answer to the overwrite question: {0}")]
    Prompt(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
