// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project record data structures.
//!
//! This module defines the records that make up the portfolio catalog:
//! one record per project, each declaring which kind of media its detail
//! panel shows.

use serde::{Deserialize, Serialize};

/// Stable identity of a project, shared by its card and its detail panel.
pub type ProjectId = u32;

/// Media type of a project.
///
/// Absent types default to `Image`. Unrecognized strings are kept in
/// `Other`, render like `Image` and are written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    Video,
    PhotoGallery,
    Interactive,
    #[default]
    Image,
    Other(String),
}

impl ProjectType {
    /// Name used in catalog files.
    pub fn as_str(&self) -> &str {
        match self {
            ProjectType::Video => "video",
            ProjectType::PhotoGallery => "photo-gallery",
            ProjectType::Interactive => "interactive",
            ProjectType::Image => "image",
            ProjectType::Other(name) => name,
        }
    }
}

impl From<String> for ProjectType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "video" => ProjectType::Video,
            "photo-gallery" => ProjectType::PhotoGallery,
            "interactive" => ProjectType::Interactive,
            "image" => ProjectType::Image,
            _ => ProjectType::Other(name),
        }
    }
}

impl From<ProjectType> for String {
    fn from(kind: ProjectType) -> Self {
        match kind {
            ProjectType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// One entry of a music player playlist. Missing fields load as empty
/// strings; an empty `image` shows as broken album art.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Song {
    pub artist: String,
    pub song: String,
    pub image: String,
}

impl Song {
    /// Whether any field was left empty in the catalog.
    pub fn is_incomplete(&self) -> bool {
        self.artist.is_empty() || self.song.is_empty() || self.image.is_empty()
    }
}

/// Content of an interactive (music player) project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerContent {
    #[serde(default)]
    pub songs: Vec<Song>,
}

/// A single portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "type", default)]
    pub kind: ProjectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_content: Option<PlayerContent>,
}

impl ProjectRecord {
    /// Create an image project with the given id and title.
    #[cfg(test)]
    pub fn new(id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            short_description: String::new(),
            description: String::new(),
            image: String::new(),
            kind: ProjectType::Image,
            video_id: None,
            photos: None,
            player_content: None,
        }
    }

    /// Identifier of the detail panel rendered for this project.
    pub fn panel_id(&self) -> String {
        panel_id(self.id)
    }

    /// Songs of an interactive project, empty for every other type.
    pub fn songs(&self) -> &[Song] {
        self.player_content
            .as_ref()
            .map(|content| content.songs.as_slice())
            .unwrap_or(&[])
    }
}

/// Detail panel identifier for a project id (`project-{id}`).
pub fn panel_id(id: ProjectId) -> String {
    format!("project-{id}")
}
