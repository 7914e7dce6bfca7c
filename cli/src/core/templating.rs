//! # tnsg File Skeletons
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! This module produces the text of every file the generator writes. Each
//! skeleton is fixed; the only inputs are the artifact name and, for pages,
//! the relative path under the pages directory. No template engine is
//! involved, the functions simply assemble strings.
//!
//! | Function             | Used for                               |
//! |----------------------|----------------------------------------|
//! | `render_component`   | `<name>.component.<ext>` of a page     |
//! | `render_page_markup` | `<name>.html` of a page                |
//! | `render_class`       | `<name>.<ext>` of a class              |
//! | `render_service`     | `<name>.service.<ext>` of a service    |
//! | `render_view_markup` | `<name>.xml` of a view                 |
//! | `render_view_logic`  | `<name>.js` of a view                  |
//! | `render_import_line` | import inserted into the module file   |
//!
//! All functions are total over names accepted by `naming::parse_artifact_name`.
//!
use crate::core::naming::adapt_name;

/// Indentation unit used in every generated file and in module patches.
pub const INDENT: &str = "    ";

/// Line break used in every generated file.
pub const BREAK_LINE: &str = "\n";

/// Default directory, relative to the app dir, that holds pages and views.
pub const DEFAULT_PAGES_DIR: &str = "pages";

/// Renders the Angular component of a page.
///
/// With `pages_dir = "pages"`, `name = "login"` and an empty path this yields:
///
/// ```text
/// import { Component, OnInit } from "@angular/core";
///
/// @Component({
///     selector: "page-login",
///     templateUrl: "pages/login/login.html",
///     styleUrls: ["pages/login/login-common.css", "pages/login/login.css"]
/// })
///
/// export class LoginComponent implements OnInit {
///
///     constructor(){}
///
///     ngOnInit(){}
///
/// }
/// ```
pub fn render_component(pages_dir: &str, name: &str, path: &str) -> String {
    let base = format!("{}/{}{}/{}", pages_dir, path, name, name);
    let mut out = String::new();
    out.push_str("import { Component, OnInit } from \"@angular/core\";");
    out.push_str(BREAK_LINE);
    out.push_str(BREAK_LINE);
    out.push_str("@Component({");
    out.push_str(BREAK_LINE);
    out.push_str(&format!("{}selector: \"page-{}\",{}", INDENT, name, BREAK_LINE));
    out.push_str(&format!("{}templateUrl: \"{}.html\",{}", INDENT, base, BREAK_LINE));
    out.push_str(&format!(
        "{}styleUrls: [\"{}-common.css\", \"{}.css\"]{}",
        INDENT, base, base, BREAK_LINE
    ));
    out.push_str("})");
    out.push_str(BREAK_LINE);
    out.push_str(BREAK_LINE);
    out.push_str(&format!(
        "export class {}Component implements OnInit {{{}",
        adapt_name(name),
        BREAK_LINE
    ));
    out.push_str(BREAK_LINE);
    out.push_str(&format!("{}constructor(){{}}{}", INDENT, BREAK_LINE));
    out.push_str(BREAK_LINE);
    out.push_str(&format!("{}ngOnInit(){{}}{}", INDENT, BREAK_LINE));
    out.push_str(BREAK_LINE);
    out.push('}');
    out
}

/// Placeholder markup written to `<name>.html`.
pub fn render_page_markup(name: &str) -> String {
    format!("<Label text='hello world, i am {} page.'></Label>", name)
}

/// An empty exported class named after `name`.
pub fn render_class(name: &str) -> String {
    format!("export class {} {{{}}}", adapt_name(name), BREAK_LINE)
}

/// An injectable service class. It is not provided anywhere; the caller warns about that.
pub fn render_service(name: &str) -> String {
    [
        "import { Injectable } from '@angular/core';".to_string(),
        String::new(),
        "@Injectable()".to_string(),
        format!("export class {}Service {{", adapt_name(name)),
        format!("{}constructor() {{ }}", INDENT),
        "}".to_string(),
    ]
    .join(BREAK_LINE)
}

/// View markup whose `loaded` event is bound to `<Adapted>Loaded`.
pub fn render_view_markup(name: &str) -> String {
    format!(
        "<Page loaded=\"{}Loaded\">{}</Page>",
        adapt_name(name),
        BREAK_LINE
    )
}

/// View logic exporting the `<Adapted>Loaded` handler.
pub fn render_view_logic(name: &str) -> String {
    let adapted = adapt_name(name);
    format!(
        "exports.{adapted}Loaded = function() {{{br}{indent}{indent}console.log(\" {adapted} Loaded \");{br}}};",
        adapted = adapted,
        br = BREAK_LINE,
        indent = INDENT
    )
}

/// Import statement for a page component, as inserted into the module file.
///
/// `import_path` is relative to the module file and has no extension,
/// e.g. `./pages/auth/login/login.component`.
pub fn render_import_line(adapted: &str, import_path: &str) -> String {
    format!("import {{ {}Component }} from '{}';", adapted, import_path)
}
