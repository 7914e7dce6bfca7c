//! # tnsg Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the generation commands, kept apart from the pure
//! generation logic in `core::`:
//!
//! - **`fs`**: reading and writing files, including the overwrite-checked write
//!   used for every generated file.
//! - **`ui`**: user-facing notices and the overwrite prompt.
//!

/// Utilities for filesystem operations (I/O, checked writes).
pub mod fs;
/// Terminal notices and prompts.
pub mod ui;
