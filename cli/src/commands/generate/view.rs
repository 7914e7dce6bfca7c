//! # tnsg View Generation
//!
//! File: cli/src/commands/generate/view.rs
//!
//! A view is `<pages>/<path><name>/{<name>.css, <name>.xml, <name>.js}`,
//! without module registration. The logic file is CommonJS, so it is always
//! `.js` whatever the configured language.
//!
use super::{Generator, ItemOutcome};
use crate::core::error::Result;
use crate::core::naming::GenerationRequest;
use crate::core::templating::{render_view_logic, render_view_markup};

impl Generator<'_> {
    pub(super) fn create_view(&mut self, request: &GenerationRequest, outcome: &mut ItemOutcome) -> Result<()> {
        let name = &request.name;
        let dir = Self::bundle_dir(&self.project.pages_root(), request);

        self.write(outcome, dir.join(format!("{}.css", name)), "")?;
        self.write(outcome, dir.join(format!("{}.xml", name)), &render_view_markup(name))?;
        self.write(outcome, dir.join(format!("{}.js", name)), &render_view_logic(name))?;
        Ok(())
    }
}
