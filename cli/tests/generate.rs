//! # tnsg Generation Integration Tests
//!
//! File: cli/tests/generate.rs
//!
//! End-to-end runs of the binary against temporary projects: the files each
//! artifact kind produces, module registration, overwrite answers read from
//! stdin, configuration files and exit codes.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_page_is_created_and_registered() {
    let project = angular_project();
    tnsg_cmd(project.path())
        .args(["-p", "checkout"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[tnsg] creating page: Checkout...")
                .and(predicate::str::contains("created: app/pages/checkout/checkout.component.ts"))
                .and(predicate::str::contains("updated: app/app.module.ts"))
                .and(predicate::str::contains("5 file(s) created")),
        );

    let page_dir = project.path().join("app/pages/checkout");
    assert_eq!(fs::read_dir(&page_dir).unwrap().count(), 5);
    let module = fs::read_to_string(project.path().join("app/app.module.ts")).unwrap();
    assert!(module.contains("import { CheckoutComponent } from './pages/checkout/checkout.component';"));
    assert!(module.contains("        AppComponent,\n        CheckoutComponent\n    ],"));
}

#[test]
fn test_registering_twice_keeps_one_entry() {
    let project = angular_project();
    for _ in 0..2 {
        tnsg_cmd(project.path())
            .args(["--yes", "-p", "login"])
            .assert()
            .success();
    }
    let module = fs::read_to_string(project.path().join("app/app.module.ts")).unwrap();
    assert_eq!(module.matches("import { LoginComponent }").count(), 1);
    assert_eq!(module.matches("        LoginComponent").count(), 1);
}

#[test]
fn test_legacy_flags_and_all_kinds() {
    let project = angular_project();
    tnsg_cmd(project.path())
        .args([
            "-page", "auth/sign-in", "-class", "user", "-service", "user-data", "-vi", "side-menu",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Service is generated but not provided, it must be provided to be used.",
        ));

    let app = project.path().join("app");
    assert!(app.join("pages/auth/sign-in/sign-in.component.ts").is_file());
    assert_eq!(
        fs::read_to_string(app.join("shared/user/user.ts")).unwrap(),
        "export class User {\n}"
    );
    assert!(app.join("shared/user-data/user-data.service.ts").is_file());
    assert!(app.join("pages/side-menu/side-menu.xml").is_file());
    assert!(app.join("pages/side-menu/side-menu.js").is_file());
    let module = fs::read_to_string(app.join("app.module.ts")).unwrap();
    assert!(module.contains("from './pages/auth/sign-in/sign-in.component';"));
}

#[test]
fn test_overwrite_declined_from_stdin() {
    let project = empty_project();
    let class_file = project.path().join("app/shared/user/user.ts");
    fs::create_dir_all(class_file.parent().unwrap()).unwrap();
    fs::write(&class_file, "hand written").unwrap();

    tnsg_cmd(project.path())
        .args(["-c", "user"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("exists, rewrite ? [n|y] (n):")
                .and(predicate::str::contains("skipped: app/shared/user/user.ts")),
        );
    assert_eq!(fs::read_to_string(&class_file).unwrap(), "hand written");
}

#[test]
fn test_overwrite_accepted_from_stdin() {
    let project = empty_project();
    let class_file = project.path().join("app/shared/user/user.ts");
    fs::create_dir_all(class_file.parent().unwrap()).unwrap();
    fs::write(&class_file, "hand written").unwrap();

    tnsg_cmd(project.path())
        .args(["-c", "user"])
        .write_stdin("y\n")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&class_file).unwrap(), "export class User {\n}");
}

#[test]
fn test_closed_stdin_keeps_existing_file() {
    let project = empty_project();
    let class_file = project.path().join("app/shared/user/user.ts");
    fs::create_dir_all(class_file.parent().unwrap()).unwrap();
    fs::write(&class_file, "hand written").unwrap();

    tnsg_cmd(project.path())
        .args(["-c", "user"])
        .write_stdin("")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&class_file).unwrap(), "hand written");
}

#[test]
fn test_no_overwrite_flag_never_prompts() {
    let project = empty_project();
    let service_file = project.path().join("app/shared/api/api.service.ts");
    fs::create_dir_all(service_file.parent().unwrap()).unwrap();
    fs::write(&service_file, "kept").unwrap();

    tnsg_cmd(project.path())
        .args(["--no-overwrite", "-s", "api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rewrite ?").not());
    assert_eq!(fs::read_to_string(&service_file).unwrap(), "kept");
}

#[test]
fn test_missing_module_is_reported_but_not_fatal() {
    let project = empty_project();
    tnsg_cmd(project.path())
        .args(["-p", "home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app.module.ts not found."));
    assert!(project.path().join("app/pages/home/home.html").is_file());
}

#[test]
fn test_module_without_marker_fails_the_run() {
    let project = empty_project();
    fs::create_dir_all(project.path().join("app")).unwrap();
    fs::write(project.path().join("app/app.module.ts"), "export class AppModule {}\n").unwrap();

    tnsg_cmd(project.path())
        .args(["-p", "home", "-c", "user"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("failed: page home"))
        .stderr(predicate::str::contains("1 of 2 item(s) failed"));
    // The class after the failed page is still generated.
    assert!(project.path().join("app/shared/user/user.ts").is_file());
}

#[test]
fn test_fail_fast_stops_the_batch() {
    let project = empty_project();
    fs::create_dir_all(project.path().join("app")).unwrap();
    fs::write(project.path().join("app/app.module.ts"), "export class AppModule {}\n").unwrap();

    tnsg_cmd(project.path())
        .args(["--fail-fast", "-p", "home", "-c", "user"])
        .assert()
        .failure();
    assert!(!project.path().join("app/shared/user").exists());
}

#[test]
fn test_app_dir_and_language_flags() {
    let project = empty_project();
    fs::create_dir_all(project.path().join("src")).unwrap();
    fs::write(project.path().join("src/app.module.js"), APP_MODULE).unwrap();

    tnsg_cmd(project.path())
        .args(["--app-dir", "src", "--lang", "js", "-p", "home"])
        .assert()
        .success();
    assert!(project.path().join("src/pages/home/home.component.js").is_file());
    let module = fs::read_to_string(project.path().join("src/app.module.js")).unwrap();
    assert!(module.contains("HomeComponent"));
}

#[test]
fn test_project_config_file_is_used() {
    let project = empty_project();
    fs::write(
        project.path().join(".tnsg.toml"),
        "[project]\napp_dir = \"mobile\"\nshared_dir = \"common\"\n",
    )
    .unwrap();
    tnsg_cmd(project.path())
        .args(["-c", "user"])
        .assert()
        .success();
    assert!(project.path().join("mobile/common/user/user.ts").is_file());
}

#[test]
fn test_invalid_config_file_fails() {
    let project = empty_project();
    fs::write(project.path().join(".tnsg.toml"), "[project]\nunknown = 1\n").unwrap();

    tnsg_cmd(project.path())
        .args(["-c", "user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    assert!(!project.path().join("app").exists());
}
