//! # tnsg Name Handling
//!
//! File: cli/src/core/naming.rs
//!
//! ## Overview
//!
//! Turns the raw tokens given on the command line into the pieces the
//! generators need:
//! - `split_request`: `"a/b/my-page"` becomes the relative path `"a/b/"` and the
//!   artifact name `"my-page"`.
//! - `adapt_name`: `"my-page"` becomes the type name stem `"MyPage"`.
//! - `parse_artifact_name`: the `clap` value parser that rejects tokens which
//!   would yield an empty artifact name.
//!
use crate::core::error::{Result, TnsgError};

/// A single artifact to generate, split from one command-line token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Artifact name, never contains `/`.
    pub name: String,
    /// Either empty or ends with `/`.
    pub relative_path: String,
}

impl GenerationRequest {
    /// PascalCase stem used for generated type names.
    pub fn adapted_name(&self) -> String {
        adapt_name(&self.name)
    }
}

/// Splits a raw token on its last `/` into a relative path and a name.
pub fn split_request(token: &str) -> GenerationRequest {
    match token.rsplit_once('/') {
        Some((path, name)) => GenerationRequest {
            name: name.to_string(),
            relative_path: format!("{}/", path),
        },
        None => GenerationRequest {
            name: token.to_string(),
            relative_path: String::new(),
        },
    }
}

/// Converts a hyphenated or plain identifier to PascalCase.
///
/// Only the first character of each `-` separated segment is upper-cased; the
/// rest of the segment is kept as written (`"my-URL"` -> `"MyURL"`).
pub fn adapt_name(name: &str) -> String {
    name.split('-').map(capitalize).collect()
}

/// Upper-cases the first character of `segment`.
pub fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `clap` value parser for artifact tokens.
///
/// Rejects empty tokens and tokens with an empty final segment (`"pages/"`),
/// since both would produce files without a name.
pub fn parse_artifact_name(token: &str) -> Result<String> {
    let request = split_request(token.trim());
    if request.name.is_empty() {
        return Err(TnsgError::InvalidName {
            name: token.to_string(),
            reason: "the name after the last '/' must not be empty".to_string(),
        }
        .into());
    }
    if request.name.starts_with('-') || request.name.ends_with('-') {
        return Err(TnsgError::InvalidName {
            name: token.to_string(),
            reason: "names cannot start or end with '-'".to_string(),
        }
        .into());
    }
    Ok(token.trim().to_string())
}
