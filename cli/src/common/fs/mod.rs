//! # tnsg Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem access for the generator, split in two layers:
//!
//! - **`io`**: raw operations (`ensure_dir_exists`, `read_file_to_string`,
//!   `write_string_to_file`) with path context on every error.
//! - **`overwrite`**: `write_with_overwrite_check`, which consults an
//!   `OverwritePolicy` before replacing an existing file and reports the result.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::{io, overwrite};
//!
//! let outcome = overwrite::write_with_overwrite_check(path, &content, &mut policy, &mut reporter)?;
//! let module = io::read_file_to_string(module_path)?;
//! ```
//!

/// Basic file I/O operations.
pub mod io;
/// Writes guarded by an overwrite decision.
pub mod overwrite;
