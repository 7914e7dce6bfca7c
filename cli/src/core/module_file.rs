//! # tnsg Module File Patching
//!
//! File: cli/src/core/module_file.rs
//!
//! ## Overview
//!
//! Registers a freshly generated page component in `app.module.<ext>`. The
//! module file is edited as text, anchored on two markers:
//! - `@NgModule`: the import line plus a blank line is inserted at the start of
//!   the line holding this marker.
//! - `declarations: [ ... ]` (searched after `@NgModule`): the component is
//!   appended right before the array's closing bracket.
//!
//! ## Architecture
//!
//! - `patch_module_source`: pure function, text in, `PatchOutcome` out. It never
//!   returns partially patched text; a missing marker is an error.
//! - `register_component`: reads the file, patches it, writes it back without
//!   an overwrite question and emits an `updated` notice.
//!
//! Registration is idempotent: if `<Adapted>Component` already appears anywhere
//! in the file the text is returned unchanged and nothing is written.
//!
//! ## Example
//!
//! ```text
//! @NgModule({                         import { LoginComponent } from './pages/login/login.component';
//!     declarations: [AppComponent],
//! })                             =>   @NgModule({
//!                                         declarations: [AppComponent,
//!                                             LoginComponent],
//!                                     })
//! ```
//!
use crate::common::fs::io;
use crate::common::ui::report::{Notice, Reporter};
use crate::core::error::{Result, TnsgError};
use crate::core::templating::{render_import_line, BREAK_LINE, INDENT};
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

/// Decorator marker the import line is placed in front of.
pub const DECORATOR_MARKER: &str = "@NgModule";

/// Property holding the component declarations.
pub const DECLARATIONS_MARKER: &str = "declarations";

/// Result of patching module text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The text with the import and the declaration added.
    Patched(String),
    /// The component name was already present; nothing to do.
    AlreadyRegistered,
}

/// What `register_component` did to the module file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Updated,
    AlreadyRegistered,
    ModuleMissing,
}

/// Inserts the import and the declaration of `<adapted>Component` into `source`.
///
/// `import_path` is the module-relative path of the component file without its
/// extension. Fails with `TnsgError::MarkerNotFound` or
/// `TnsgError::UnterminatedArray` when the anchors cannot be located.
pub fn patch_module_source(source: &str, adapted: &str, import_path: &str) -> Result<PatchOutcome> {
    let component = format!("{}Component", adapted);
    if source.contains(&component) {
        debug!("{} already present in module source", component);
        return Ok(PatchOutcome::AlreadyRegistered);
    }

    // Locate everything before mutating, so a failure leaves nothing half done.
    let decorator = source
        .find(DECORATOR_MARKER)
        .ok_or_else(|| TnsgError::MarkerNotFound {
            marker: DECORATOR_MARKER.to_string(),
        })?;
    let line_start = source[..decorator].rfind('\n').map_or(0, |i| i + 1);
    let (open, close) = locate_declarations(source, decorator)?;

    let inner = &source[open + 1..close];
    let content_end = inner.trim_end().len();
    let declaration = if content_end == 0 {
        // Empty array: lay it out one entry per line.
        format!(
            "[{br}{indent}{indent}{component}{br}{indent}]",
            br = BREAK_LINE,
            indent = INDENT,
            component = component
        )
    } else if inner[..content_end].ends_with(',') {
        format!(
            "[{}{}{}{}{},{}]",
            &inner[..content_end],
            BREAK_LINE,
            INDENT,
            INDENT,
            component,
            &inner[content_end..]
        )
    } else {
        format!(
            "[{},{}{}{}{}{}]",
            &inner[..content_end],
            BREAK_LINE,
            INDENT,
            INDENT,
            component,
            &inner[content_end..]
        )
    };

    let import = render_import_line(adapted, import_path);
    let mut patched = String::with_capacity(source.len() + import.len() + declaration.len());
    patched.push_str(&source[..line_start]);
    patched.push_str(&import);
    patched.push_str(BREAK_LINE);
    patched.push_str(BREAK_LINE);
    patched.push_str(&source[line_start..open]);
    patched.push_str(&declaration);
    patched.push_str(&source[close + 1..]);
    Ok(PatchOutcome::Patched(patched))
}

/// Returns the byte offsets of the `[` and matching `]` of the declarations
/// array that follows `from`.
fn locate_declarations(source: &str, from: usize) -> Result<(usize, usize)> {
    let not_found = || TnsgError::MarkerNotFound {
        marker: format!("{}: [", DECLARATIONS_MARKER),
    };

    let mut search_from = from;
    let open = loop {
        let found = source[search_from..]
            .find(DECLARATIONS_MARKER)
            .ok_or_else(not_found)?;
        let marker_end = search_from + found + DECLARATIONS_MARKER.len();
        if let Some(open) = array_start_after(source, marker_end) {
            break open;
        }
        // A `declarations` that is not a property (e.g. inside a comment); keep looking.
        search_from = marker_end;
    };

    let mut depth = 0usize;
    for (offset, c) in source[open..].char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((open, open + offset));
                }
            }
            _ => {}
        }
    }
    Err(TnsgError::UnterminatedArray {
        marker: DECLARATIONS_MARKER.to_string(),
    }
    .into())
}

/// Matches optional quotes, whitespace, `:`, whitespace, `[` starting at `pos`.
fn array_start_after(source: &str, pos: usize) -> Option<usize> {
    let rest = &source[pos..];
    let rest_trimmed = rest.trim_start_matches(['"', '\'']).trim_start();
    let after_colon = rest_trimmed.strip_prefix(':')?.trim_start();
    if after_colon.starts_with('[') {
        Some(source.len() - after_colon.len())
    } else {
        None
    }
}

/// Reads `module_path`, registers the component of `name` (found under
/// `./<pages_dir>/<relative_path><name>/<name>.component`) and writes the file back.
///
/// A missing module file is reported through `reporter` and is not an error.
pub fn register_component(
    module_path: &Path,
    pages_dir: &str,
    name: &str,
    relative_path: &str,
    reporter: &mut dyn Reporter,
) -> Result<Registration> {
    if !module_path.is_file() {
        let missing = TnsgError::ModuleFileMissing {
            path: module_path.to_path_buf(),
        };
        reporter.notify(Notice::Error(missing.to_string()));
        return Ok(Registration::ModuleMissing);
    }

    let adapted = crate::core::naming::adapt_name(name);
    let import_path = component_import_path(pages_dir, relative_path, name);
    let source = io::read_file_to_string(module_path)?;

    match patch_module_source(&source, &adapted, &import_path)
        .with_context(|| format!("Failed to register {}Component in {}", adapted, module_path.display()))?
    {
        PatchOutcome::AlreadyRegistered => {
            info!("{}Component already registered in {}", adapted, module_path.display());
            reporter.notify(Notice::Info(format!(
                "{}Component already registered in {}",
                adapted,
                module_path.display()
            )));
            Ok(Registration::AlreadyRegistered)
        }
        PatchOutcome::Patched(content) => {
            io::write_string_to_file(module_path, &content)?;
            reporter.notify(Notice::Updated(module_path.to_path_buf()));
            Ok(Registration::Updated)
        }
    }
}

/// `./<pages_dir>/<relative_path><name>/<name>.component`
pub fn component_import_path(pages_dir: &str, relative_path: &str, name: &str) -> String {
    format!(
        "./{}/{}{}/{}.component",
        pages_dir.trim_matches('/'),
        relative_path,
        name,
        name
    )
}
