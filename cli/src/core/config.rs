//! # tnsg Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the settings that decide *where*
//! generated files go and *which* extension components, classes and services get. Every setting has
//! a default matching the standard NativeScript layout (`app/`, `pages/`,
//! `shared/`, TypeScript), so the tool works without any configuration file.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags / `TNSG_*` environment variables (applied by the caller)
//! 2. Project-specific `.tnsg.toml` in the current directory or an ancestor
//! 3. User-specific `<config dir>/tnsg/config.toml`
//! 4. Default values defined in the code
//!
//! An explicit `--config <FILE>` replaces sources 2 and 3.
//!
//! ## Examples
//!
//! ```toml
//! [project]
//! app_dir = "~/work/shop/app"
//! language = "js"
//! pages_dir = "screens"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let module_file = cfg.project.module_file();
//! ```
//!
use crate::core::error::{Result, TnsgError};
use crate::core::templating::DEFAULT_PAGES_DIR;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// The effective configuration after all sources have been applied.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub project: ProjectConfig,
}

/// Layout of the NativeScript application being scaffolded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfig {
    /// Application root holding `app.module.<ext>` (can use ~). Will be expanded.
    pub app_dir: String,
    /// Language of components, classes, services and the module file.
    pub language: Language,
    /// Directory under `app_dir` for pages and views.
    pub pages_dir: String,
    /// Directory under `app_dir` for classes and services.
    pub shared_dir: String,
}

/// One configuration file as written. Keys left out are `None` and leave the
/// value from lower-precedence sources untouched.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    project: ProjectSection,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ProjectSection {
    app_dir: Option<String>,
    language: Option<Language>,
    pages_dir: Option<String>,
    shared_dir: Option<String>,
}

impl ConfigFile {
    /// Overrides every key this file sets, even when the value equals the default.
    fn apply_to(self, config: &mut Config) {
        let (target, section) = (&mut config.project, self.project);
        if let Some(app_dir) = section.app_dir {
            target.app_dir = app_dir;
        }
        if let Some(language) = section.language {
            target.language = language;
        }
        if let Some(pages_dir) = section.pages_dir {
            target.pages_dir = pages_dir;
        }
        if let Some(shared_dir) = section.shared_dir {
            target.shared_dir = shared_dir;
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            app_dir: default_app_dir(),
            language: Language::default(),
            pages_dir: default_pages_dir(),
            shared_dir: default_shared_dir(),
        }
    }
}

impl ProjectConfig {
    pub fn app_root(&self) -> PathBuf {
        PathBuf::from(&self.app_dir)
    }

    pub fn pages_root(&self) -> PathBuf {
        self.app_root().join(&self.pages_dir)
    }

    pub fn shared_root(&self) -> PathBuf {
        self.app_root().join(&self.shared_dir)
    }

    /// `<app_dir>/app.module.<ext>`
    pub fn module_file(&self) -> PathBuf {
        self.app_root()
            .join(format!("app.module.{}", self.language.extension()))
    }
}

/// Source language of the application.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ts,
    Js,
}

impl Language {
    pub fn extension(self) -> &'static str {
        match self {
            Language::Ts => "ts",
            Language::Js => "js",
        }
    }
}

fn default_app_dir() -> String {
    "app".to_string()
}
fn default_pages_dir() -> String {
    DEFAULT_PAGES_DIR.to_string()
}
fn default_shared_dir() -> String {
    "shared".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".tnsg.toml";

/// Loads the effective configuration.
///
/// With `explicit` set only that file is read; otherwise the user and project
/// files are merged. Paths are expanded and the result validated.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            merge_configs(Some(load_config_from_path(path)?), None)
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config, project_config)
        }
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    let Some(proj_dirs) = ProjectDirs::from("", "", "tnsg") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<ConfigFile>> {
    match find_project_config_path(start) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No {} found in {} or its ancestors.", PROJECT_CONFIG_FILENAME, start.display());
            Ok(None)
        }
    }
}

/// Walks from `start` towards the filesystem root looking for `.tnsg.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Applies the user file, then the project file, over the defaults.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    let mut config = Config::default();
    for file in [user, project].into_iter().flatten() {
        file.apply_to(&mut config);
    }
    config
}

/// Expands a leading `~` in an application directory.
pub fn expand_app_dir(app_dir: &str) -> String {
    shellexpand::tilde(app_dir).into_owned()
}

fn expand_config_paths(config: &mut Config) {
    config.project.app_dir = expand_app_dir(&config.project.app_dir);
    debug!("Expanded app directory: {}", config.project.app_dir);
}

pub fn validate_config(config: &Config) -> Result<()> {
    let project = &config.project;
    if project.app_dir.trim().is_empty() {
        return Err(anyhow!(TnsgError::Config(
            "app_dir cannot be empty.".to_string()
        )));
    }
    for (key, value) in [
        ("pages_dir", &project.pages_dir),
        ("shared_dir", &project.shared_dir),
    ] {
        if value.trim().is_empty() {
            return Err(anyhow!(TnsgError::Config(format!("{} cannot be empty.", key))));
        }
        if Path::new(value).is_absolute() {
            return Err(anyhow!(TnsgError::Config(format!(
                "{} must be relative to app_dir, got '{}'.",
                key, value
            ))));
        }
    }
    let app_root = project.app_root();
    if app_root.exists() && !app_root.is_dir() {
        return Err(anyhow!(TnsgError::Config(format!(
            "Configured app directory '{}' exists but is not a directory.",
            app_root.display()
        ))));
    }
    Ok(())
}
