// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog and config serialization.
//!
//! This module reads and writes YAML and JSON documents. The format is
//! picked from the file extension.

use crate::models::catalog::{Catalog, CatalogFile};
use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

/// Read a YAML or JSON document.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = Format::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = match format {
        Format::Yaml => serde_yaml::from_str(&text)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?,
        Format::Json => serde_json::from_str(&text)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?,
    };
    Ok(value)
}

/// Write a YAML or JSON document.
pub fn write_document<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let text = match Format::from_path(path)? {
        Format::Yaml => serde_yaml::to_string(value)?,
        Format::Json => serde_json::to_string_pretty(value)?,
    };
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Load and validate a catalog file.
pub fn import_catalog(path: &Path) -> Result<Catalog> {
    let file: CatalogFile = read_document(path)?;
    log::info!("Read {} projects from {}", file.projects.len(), path.display());
    Ok(Catalog::load(file))
}

/// Save a catalog in the format named by the path's extension.
pub fn export_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    write_document(&catalog.to_file(), path)
}
