//! # tnsg Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! The generator has a single command; its arguments are flattened into the
//! top-level `Cli` in `main.rs`.
//!

/// Page, view, class and service generation.
pub mod generate;
