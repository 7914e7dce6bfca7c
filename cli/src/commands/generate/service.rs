//! # tnsg Service Generation
//!
//! File: cli/src/commands/generate/service.rs
//!
//! A service is a single file `<shared>/<path><name>/<name>.service.<ext>`.
//! Services are not added to any `providers` list, so a warning is always
//! printed after generating one.
//!
use super::{Generator, ItemOutcome};
use crate::common::ui::report::Notice;
use crate::core::error::Result;
use crate::core::naming::GenerationRequest;
use crate::core::templating::render_service;

pub const NOT_PROVIDED_WARNING: &str =
    "Service is generated but not provided, it must be provided to be used.";

impl Generator<'_> {
    pub(super) fn create_service(&mut self, request: &GenerationRequest, outcome: &mut ItemOutcome) -> Result<()> {
        let dir = Self::bundle_dir(&self.project.shared_root(), request);
        let path = dir.join(format!("{}.service.{}", request.name, self.extension()));
        self.write(outcome, path, &render_service(&request.name))?;
        self.reporter
            .notify(Notice::Warning(NOT_PROVIDED_WARNING.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NOT_PROVIDED_WARNING;
    use crate::commands::generate::{run_batch, ArtifactKind};
    use crate::common::ui::prompt::FixedAnswer;
    use crate::common::ui::report::Notice;
    use crate::core::config::ProjectConfig;
    use crate::core::naming::split_request;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_service_file_and_warning() {
        let dir = tempdir().unwrap();
        let project = ProjectConfig {
            app_dir: dir.path().to_string_lossy().into_owned(),
            ..Default::default()
        };
        let mut notices: Vec<Notice> = Vec::new();
        let requests = vec![(ArtifactKind::Service, split_request("user-data"))];
        run_batch(&requests, &project, &mut FixedAnswer(false), &mut notices, false);

        let content =
            fs::read_to_string(dir.path().join("shared/user-data/user-data.service.ts")).unwrap();
        assert!(content.contains("export class UserDataService {"));
        assert!(notices.contains(&Notice::Warning(NOT_PROVIDED_WARNING.to_string())));
    }

    #[test]
    fn test_warning_even_when_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shared/api/api.service.ts");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "kept").unwrap();
        let project = ProjectConfig {
            app_dir: dir.path().to_string_lossy().into_owned(),
            ..Default::default()
        };
        let mut notices: Vec<Notice> = Vec::new();
        let requests = vec![(ArtifactKind::Service, split_request("api"))];
        run_batch(&requests, &project, &mut FixedAnswer(false), &mut notices, false);

        assert_eq!(fs::read_to_string(&path).unwrap(), "kept");
        assert!(notices.contains(&Notice::Skipped(path)));
        assert!(notices.contains(&Notice::Warning(NOT_PROVIDED_WARNING.to_string())));
    }
}
