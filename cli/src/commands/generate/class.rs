//! # tnsg Class Generation
//!
//! File: cli/src/commands/generate/class.rs
//!
//! A class is a single file `<shared>/<path><name>/<name>.<ext>`.
//!
use super::{Generator, ItemOutcome};
use crate::core::error::Result;
use crate::core::naming::GenerationRequest;
use crate::core::templating::render_class;

impl Generator<'_> {
    pub(super) fn create_class(&mut self, request: &GenerationRequest, outcome: &mut ItemOutcome) -> Result<()> {
        let dir = Self::bundle_dir(&self.project.shared_root(), request);
        let path = dir.join(format!("{}.{}", request.name, self.extension()));
        self.write(outcome, path, &render_class(&request.name))
    }
}
