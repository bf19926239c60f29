// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! The config file is YAML or JSON. It is found through the
//! `DESKFOLIO_CONFIG` environment variable, then `deskfolio.yaml` in the
//! working directory. Every field has a default, so an empty file (or no
//! file at all) gives the stock desktop.

use crate::desktop::renderer::{RenderOptions, DEFAULT_VISUALIZER_BARS};
use crate::io::serialization;
use crate::models::catalog::Catalog;
use crate::models::layout::DesktopLayout;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "DESKFOLIO_CONFIG";
/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "deskfolio.yaml";

/// Native window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Logger settings.
///
/// `filter` uses the `env_logger` filter syntax (e.g. "info",
/// "deskfolio=debug"). `RUST_LOG` overrides it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    /// Catalog file; the embedded catalog is used when unset.
    pub catalog: Option<PathBuf>,
    pub visualizer_bars: usize,
    /// Treat missing render targets as errors.
    pub strict_render: bool,
    pub logging: LoggingConfig,
    /// File offered by the "Download CV" button.
    pub cv_file: Option<PathBuf>,
    pub desktop: DesktopLayout,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            catalog: None,
            visualizer_bars: DEFAULT_VISUALIZER_BARS,
            strict_render: cfg!(debug_assertions),
            logging: LoggingConfig::default(),
            cv_file: None,
            desktop: DesktopLayout::default(),
        }
    }
}

impl AppConfig {
    /// Path of the config file to use, if any.
    pub fn locate() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.exists().then_some(local)
    }

    /// Load the config from its usual location, or use defaults.
    pub fn load() -> Result<Self> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        serialization::read_document(path)
            .with_context(|| format!("Failed to load config {}", path.display()))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            strict: self.strict_render,
            visualizer_bars: self.visualizer_bars,
        }
    }

    /// The configured catalog file, or the embedded catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => serialization::import_catalog(path)
                .with_context(|| format!("Failed to load catalog {}", path.display())),
            None => Catalog::embedded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.visualizer_bars, 5);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config: AppConfig = serde_yaml::from_str(
            "window:\n  title: Mon portfolio\nvisualizer_bars: 8\nstrict_render: false\nlogging:\n  filter: debug\n",
        )
        .unwrap();
        assert_eq!(config.window.title, "Mon portfolio");
        assert_eq!(config.window.width, 1280.0);
        assert_eq!(config.logging.filter.as_deref(), Some("debug"));

        let options = config.render_options();
        assert!(!options.strict);
        assert_eq!(options.visualizer_bars, 8);
    }

    #[test]
    fn test_load_from_json_file() {
        let path = std::env::temp_dir().join(format!("deskfolio-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"cv_file": "cv.pdf", "desktop": {"main_window": {"id": "main-window", "title": "Hi", "body": {"kind": "projects-grid"}}}}"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.cv_file, Some(PathBuf::from("cv.pdf")));
        assert!(config.desktop.folders.is_empty());
        assert!(config.desktop.hosts_projects_grid());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_default_catalog_is_embedded() {
        let catalog = AppConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_missing_catalog_file_is_error() {
        let config = AppConfig {
            catalog: Some(PathBuf::from("/nope/catalog.yaml")),
            ..AppConfig::default()
        };
        assert!(config.load_catalog().is_err());
    }
}
