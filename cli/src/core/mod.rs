//! # tnsg Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the pieces of the generator that do not touch the
//! terminal:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the `Result` alias
//! - `naming`: Splitting CLI tokens and deriving PascalCase type names
//! - `templating`: Fixed skeletons for every generated file
//! - `module_file`: Registering page components in `app.module.<ext>`
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{TnsgError, Result}; // For error handling
//! use crate::core::naming::split_request; // For turning `auth/login` into path + name
//! ```
//!
pub mod config;
pub mod error;
pub mod module_file;
pub mod naming;
pub mod templating;
