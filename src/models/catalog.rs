// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project catalog.
//!
//! The catalog is the ordered, read-only list of projects that drives
//! everything rendered on the desktop. Validation happens once, when the
//! catalog is built; rendering never fails on a bad record.

use super::project::{ProjectId, ProjectRecord, ProjectType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Catalog embedded in the binary, used when no catalog file is configured.
const DEFAULT_CATALOG: &str = include_str!("../../assets/catalog.yaml");

/// Problems found while loading a catalog. None of them abort the load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogWarning {
    #[error("project id {0} appears more than once, later entries are dropped")]
    DuplicateId(ProjectId),
    #[error("project id 0 is not a valid id (title {0:?})")]
    ZeroId(String),
    #[error("video project {0} has no videoId, falling back to its image")]
    MissingVideoId(ProjectId),
    #[error("photo gallery {0} has no photos, falling back to its image")]
    MissingPhotos(ProjectId),
    #[error("interactive project {0} has no songs, falling back to its image")]
    EmptyPlaylist(ProjectId),
    #[error("song {index} of project {project} is missing its artist, title or image")]
    IncompleteSong { project: ProjectId, index: usize },
}

/// Serialized form of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub projects: Vec<ProjectRecord>,
}

/// Validated, ordered collection of projects.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog from raw records, keeping catalog order.
    ///
    /// Records with a duplicate id are dropped so every id maps to exactly
    /// one panel. Records missing their type-specific media are kept; they
    /// render with the fallback image.
    pub fn from_records(records: Vec<ProjectRecord>) -> (Self, Vec<CatalogWarning>) {
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();
        let mut projects = Vec::with_capacity(records.len());

        for record in records {
            if !seen.insert(record.id) {
                warnings.push(CatalogWarning::DuplicateId(record.id));
                continue;
            }
            if record.id == 0 {
                warnings.push(CatalogWarning::ZeroId(record.title.clone()));
            }
            match record.kind {
                ProjectType::Video if record.video_id.is_none() => {
                    warnings.push(CatalogWarning::MissingVideoId(record.id));
                }
                ProjectType::PhotoGallery
                    if record.photos.as_ref().map_or(true, |p| p.is_empty()) =>
                {
                    warnings.push(CatalogWarning::MissingPhotos(record.id));
                }
                ProjectType::Interactive if record.songs().is_empty() => {
                    warnings.push(CatalogWarning::EmptyPlaylist(record.id));
                }
                ProjectType::Interactive => {
                    for (index, song) in record.songs().iter().enumerate() {
                        if song.is_incomplete() {
                            warnings.push(CatalogWarning::IncompleteSong {
                                project: record.id,
                                index,
                            });
                        }
                    }
                }
                _ => {}
            }
            projects.push(record);
        }

        (Self { projects }, warnings)
    }

    /// Build a catalog and log every validation warning.
    pub fn load(file: CatalogFile) -> Self {
        let (catalog, warnings) = Self::from_records(file.projects);
        for warning in &warnings {
            log::warn!("Catalog: {}", warning);
        }
        if catalog.is_empty() {
            log::warn!("Catalog has no projects");
        } else {
            log::info!("Loaded catalog with {} projects", catalog.len());
        }
        catalog
    }

    /// The catalog shipped with the application.
    pub fn embedded() -> anyhow::Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(DEFAULT_CATALOG)?;
        Ok(Self::load(file))
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn get(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Serializable copy of the catalog.
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            projects: self.projects.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::{PlayerContent, Song};

    #[test]
    fn test_embedded_catalog_is_valid() {
        let file: CatalogFile = serde_yaml::from_str(DEFAULT_CATALOG).unwrap();
        let (catalog, warnings) = Catalog::from_records(file.projects);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(6).unwrap().songs().len(), 5);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let (catalog, warnings) = Catalog::from_records(vec![
            ProjectRecord::new(1, "first"),
            ProjectRecord::new(1, "second"),
            ProjectRecord::new(2, "third"),
        ]);
        assert_eq!(warnings, vec![CatalogWarning::DuplicateId(1)]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().title, "first");
    }

    #[test]
    fn test_missing_media_is_warned_not_dropped() {
        let mut video = ProjectRecord::new(1, "video");
        video.kind = ProjectType::Video;
        let mut gallery = ProjectRecord::new(2, "gallery");
        gallery.kind = ProjectType::PhotoGallery;
        gallery.photos = Some(Vec::new());
        let mut player = ProjectRecord::new(3, "player");
        player.kind = ProjectType::Interactive;
        player.player_content = Some(PlayerContent { songs: Vec::new() });

        let (catalog, warnings) = Catalog::from_records(vec![video, gallery, player]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            warnings,
            vec![
                CatalogWarning::MissingVideoId(1),
                CatalogWarning::MissingPhotos(2),
                CatalogWarning::EmptyPlaylist(3),
            ]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let mut player = ProjectRecord::new(9, "player");
        player.kind = ProjectType::Interactive;
        player.player_content = Some(PlayerContent {
            songs: vec![Song {
                artist: "a".into(),
                song: "s".into(),
                image: "i.jpg".into(),
            }],
        });
        let (catalog, warnings) = Catalog::from_records(vec![
            ProjectRecord::new(3, "c"),
            player,
            ProjectRecord::new(1, "a"),
        ]);
        assert!(warnings.is_empty());
        let ids: Vec<_> = catalog.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 9, 1]);
    }

    #[test]
    fn test_incomplete_song_warns() {
        let mut player = ProjectRecord::new(6, "player");
        player.kind = ProjectType::Interactive;
        player.player_content = Some(PlayerContent {
            songs: vec![
                Song {
                    artist: "a".into(),
                    song: "s".into(),
                    image: "i.jpg".into(),
                },
                Song {
                    artist: "a".into(),
                    song: "s".into(),
                    image: String::new(),
                },
            ],
        });
        let (catalog, warnings) = Catalog::from_records(vec![player]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            warnings,
            vec![CatalogWarning::IncompleteSong {
                project: 6,
                index: 1
            }]
        );
    }

    #[test]
    fn test_zero_id_warns() {
        let (_, warnings) = Catalog::from_records(vec![ProjectRecord::new(0, "zero")]);
        assert_eq!(warnings, vec![CatalogWarning::ZeroId("zero".to_string())]);
    }
}
