//! # tnsg CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs
//! the compiled `tnsg` binary inside its own temporary project.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Module file used by the page tests.
pub const APP_MODULE: &str = concat!(
    "import { NgModule } from \"@angular/core\";\n",
    "import { AppComponent } from \"./app.component\";\n",
    "\n",
    "@NgModule({\n",
    "    declarations: [\n",
    "        AppComponent\n",
    "    ],\n",
    "    bootstrap: [AppComponent]\n",
    "})\n",
    "export class AppModule {}\n",
);

/// `assert_cmd::Command` for the `tnsg` binary, isolated from the user's
/// configuration and with colours disabled.
pub fn tnsg_cmd(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tnsg").expect("Failed to find tnsg binary for testing");
    cmd.current_dir(project)
        .env("NO_COLOR", "1")
        .env("HOME", project.join(".home"))
        .env("XDG_CONFIG_HOME", project.join(".home/.config"))
        .env_remove("TNSG_APP_DIR")
        .env_remove("TNSG_LANG")
        .env_remove("TNSG_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// A temporary project with a `.git` marker so the config search stops there.
pub fn empty_project() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp project");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}

/// A temporary project with `app/app.module.ts` in place.
pub fn angular_project() -> TempDir {
    let dir = empty_project();
    fs::create_dir_all(dir.path().join("app")).expect("Failed to create app dir");
    fs::write(dir.path().join("app/app.module.ts"), APP_MODULE).expect("Failed to write module");
    dir
}
