//! # tnsg Page Generation
//!
//! File: cli/src/commands/generate/page.rs
//!
//! A page is a directory `<pages>/<path><name>/` holding:
//! - `<name>.android.css`, `<name>.ios.css`, `<name>-common.css` (empty)
//! - `<name>.component.<ext>` (Angular component)
//! - `<name>.html` (placeholder markup)
//!
//! Once the files are written the component is registered in the module file.
//!
use super::{Generator, ItemOutcome};
use crate::core::error::Result;
use crate::core::module_file;
use crate::core::naming::GenerationRequest;
use crate::core::templating::{render_component, render_page_markup};
use tracing::debug;

impl Generator<'_> {
    pub(super) fn create_page(&mut self, request: &GenerationRequest, outcome: &mut ItemOutcome) -> Result<()> {
        let name = &request.name;
        let dir = Self::bundle_dir(&self.project.pages_root(), request);
        debug!("Creating page bundle in {:?}", dir);

        self.write(outcome, dir.join(format!("{}.android.css", name)), "")?;
        self.write(outcome, dir.join(format!("{}.ios.css", name)), "")?;
        self.write(outcome, dir.join(format!("{}-common.css", name)), "")?;
        let component = render_component(&self.project.pages_dir, name, &request.relative_path);
        self.write(
            outcome,
            dir.join(format!("{}.component.{}", name, self.extension())),
            &component,
        )?;
        self.write(outcome, dir.join(format!("{}.html", name)), &render_page_markup(name))?;

        let registration = module_file::register_component(
            &self.project.module_file(),
            &self.project.pages_dir,
            name,
            &request.relative_path,
            &mut *self.reporter,
        )?;
        outcome.registration = Some(registration);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::generate::{run_batch, ArtifactKind};
    use crate::common::ui::prompt::FixedAnswer;
    use crate::common::ui::report::Notice;
    use crate::core::config::{Language, ProjectConfig};
    use crate::core::naming::split_request;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_page_contents_and_nested_path() {
        let dir = tempdir().unwrap();
        let project = ProjectConfig {
            app_dir: dir.path().to_string_lossy().into_owned(),
            language: Language::Js,
            ..Default::default()
        };
        let mut notices: Vec<Notice> = Vec::new();
        let requests = vec![(ArtifactKind::Page, split_request("auth/sign-in"))];
        run_batch(&requests, &project, &mut FixedAnswer(false), &mut notices, false);

        let page_dir = dir.path().join("pages/auth/sign-in");
        let component = fs::read_to_string(page_dir.join("sign-in.component.js")).unwrap();
        assert!(component.contains("templateUrl: \"pages/auth/sign-in/sign-in.html\""));
        assert!(component.contains("export class SignInComponent implements OnInit"));
        assert_eq!(
            fs::read_to_string(page_dir.join("sign-in.html")).unwrap(),
            "<Label text='hello world, i am sign-in page.'></Label>"
        );
        assert_eq!(fs::read_to_string(page_dir.join("sign-in.ios.css")).unwrap(), "");
    }

    #[test]
    fn test_existing_page_files_are_kept_when_declined() {
        let dir = tempdir().unwrap();
        let page_dir = dir.path().join("pages/home");
        fs::create_dir_all(&page_dir).unwrap();
        fs::write(page_dir.join("home.html"), "custom markup").unwrap();
        let project = ProjectConfig {
            app_dir: dir.path().to_string_lossy().into_owned(),
            ..Default::default()
        };
        let mut notices: Vec<Notice> = Vec::new();
        let requests = vec![(ArtifactKind::Page, split_request("home"))];
        let summary = run_batch(&requests, &project, &mut FixedAnswer(false), &mut notices, false);

        assert_eq!(summary.items[0].written.len(), 4);
        assert_eq!(summary.items[0].skipped, vec![page_dir.join("home.html")]);
        assert_eq!(fs::read_to_string(page_dir.join("home.html")).unwrap(), "custom markup");
    }
}
