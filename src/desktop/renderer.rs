// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Panel renderer.
//!
//! Turns the catalog into the desktop's retained content: one summary card
//! per project in the `projects-grid` target and one detail panel per
//! project in the `project-details` target. Each detail panel's media is
//! chosen by the project's type. Rendering replaces whatever was rendered
//! before.

use super::player::{PlayerCommand, PlayerRegistry, TransportButton};
use super::{Action, Element, HandlerMap};
use crate::models::catalog::Catalog;
use crate::models::layout::DesktopLayout;
use crate::models::project::{ProjectId, ProjectRecord, ProjectType};
use std::path::PathBuf;
use thiserror::Error;

/// Render target holding the project cards.
pub const PROJECTS_GRID: &str = "projects-grid";
/// Render target holding the detail panels.
pub const PROJECT_DETAILS: &str = "project-details";
/// Base URL of embedded videos.
pub const VIDEO_EMBED_BASE: &str = "https://www.youtube.com/embed/";
/// Default number of visualizer bars.
pub const DEFAULT_VISUALIZER_BARS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("render target `{0}` is missing")]
    MissingTarget(&'static str),
}

/// Where a media reference points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaSource {
    /// An http(s) URL. Shown as a link, never downloaded.
    Remote(String),
    /// A file on disk, decoded into a texture.
    Local(PathBuf),
    /// Empty reference; shown as a broken-media placeholder.
    Missing,
}

impl MediaSource {
    pub fn parse(reference: &str) -> Self {
        let reference = reference.trim();
        if reference.is_empty() {
            MediaSource::Missing
        } else if reference.starts_with("http://") || reference.starts_with("https://") {
            MediaSource::Remote(reference.to_string())
        } else {
            let path = reference.strip_prefix("file://").unwrap_or(reference);
            MediaSource::Local(PathBuf::from(path))
        }
    }
}

/// A project card in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub project_id: ProjectId,
    pub title: String,
    pub short_description: String,
    pub thumbnail: MediaSource,
    pub video_badge: bool,
}

/// Media section of a detail panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMedia {
    /// Embedded player framed by the project title.
    Video { title: String, embed_url: String },
    /// Photos in catalog order.
    PhotoGrid { photos: Vec<MediaSource> },
    /// Music player widget; its live state is in the player registry.
    MusicPlayer,
    /// Single fallback image.
    Image { source: MediaSource, alt: String },
}

/// A project detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    /// `project-{id}`.
    pub id: String,
    pub project_id: ProjectId,
    pub title: String,
    pub description: String,
    pub media: PanelMedia,
}

/// Containers the renderer writes into. A `None` target is absent from the
/// desktop.
#[derive(Debug, Default)]
pub struct RenderTargets {
    pub grid: Option<Vec<SummaryCard>>,
    pub details: Option<Vec<DetailPanel>>,
}

impl RenderTargets {
    /// Targets present on a desktop with the given layout. The details
    /// layer always exists; the grid exists when some window hosts it.
    pub fn from_layout(layout: &DesktopLayout) -> Self {
        Self {
            grid: layout.hosts_projects_grid().then(Vec::new),
            details: Some(Vec::new()),
        }
    }

    pub fn cards(&self) -> &[SummaryCard] {
        self.grid.as_deref().unwrap_or(&[])
    }

    pub fn panels(&self) -> &[DetailPanel] {
        self.details.as_deref().unwrap_or(&[])
    }

    pub fn panel(&self, project_id: ProjectId) -> Option<&DetailPanel> {
        self.panels().iter().find(|p| p.project_id == project_id)
    }
}

/// Renderer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fail on missing targets instead of skipping them.
    pub strict: bool,
    pub visualizer_bars: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            strict: cfg!(debug_assertions),
            visualizer_bars: DEFAULT_VISUALIZER_BARS,
        }
    }
}

/// Counts of what a render produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    pub cards: usize,
    pub panels: usize,
    pub players: usize,
}

/// Render the catalog into `targets`.
///
/// Card and panel bindings in `handlers` and every player in `players` are
/// replaced. Each interactive panel gets a fresh player on its first song.
pub fn render(
    catalog: &Catalog,
    options: &RenderOptions,
    targets: &mut RenderTargets,
    handlers: &mut HandlerMap,
    players: &mut PlayerRegistry,
) -> Result<RenderSummary, RenderError> {
    if options.strict {
        if targets.grid.is_none() {
            return Err(RenderError::MissingTarget(PROJECTS_GRID));
        }
        if targets.details.is_none() {
            return Err(RenderError::MissingTarget(PROJECT_DETAILS));
        }
    }

    handlers.clear_rendered();
    players.clear();
    let mut summary = RenderSummary::default();

    match targets.grid.as_mut() {
        Some(grid) => {
            grid.clear();
            for project in catalog.projects() {
                grid.push(summary_card(project));
                handlers.bind(Element::Card(project.id), Action::ShowDetail(project.id));
            }
            summary.cards = grid.len();
        }
        None => log::warn!("Render target `{}` is missing, skipping cards", PROJECTS_GRID),
    }

    match targets.details.as_mut() {
        Some(details) => {
            details.clear();
            for project in catalog.projects() {
                let panel = detail_panel(project);
                handlers.bind(Element::BackButton(project.id), Action::HideDetail(project.id));

                if panel.media == PanelMedia::MusicPlayer
                    && players.attach(project.id, project.songs(), options.visualizer_bars)
                {
                    bind_player(handlers, project);
                    summary.players += 1;
                }
                details.push(panel);
            }
            summary.panels = details.len();
        }
        None => log::warn!("Render target `{}` is missing, skipping panels", PROJECT_DETAILS),
    }

    log::info!(
        "Rendered {} cards, {} panels, {} players",
        summary.cards,
        summary.panels,
        summary.players
    );
    Ok(summary)
}

fn summary_card(project: &ProjectRecord) -> SummaryCard {
    SummaryCard {
        project_id: project.id,
        title: project.title.clone(),
        short_description: project.short_description.clone(),
        thumbnail: MediaSource::parse(&project.image),
        video_badge: project.kind == ProjectType::Video,
    }
}

fn detail_panel(project: &ProjectRecord) -> DetailPanel {
    DetailPanel {
        id: project.panel_id(),
        project_id: project.id,
        title: project.title.clone(),
        description: project.description.clone(),
        media: panel_media(project),
    }
}

/// Pick the media for a project. Types missing their required field fall
/// back to the project image.
fn panel_media(project: &ProjectRecord) -> PanelMedia {
    match (&project.kind, project.video_id.as_deref(), project.photos.as_deref()) {
        (ProjectType::Video, Some(video_id), _) => PanelMedia::Video {
            title: project.title.clone(),
            embed_url: format!("{VIDEO_EMBED_BASE}{video_id}"),
        },
        (ProjectType::PhotoGallery, _, Some(photos)) if !photos.is_empty() => {
            PanelMedia::PhotoGrid {
                photos: photos.iter().map(|p| MediaSource::parse(p)).collect(),
            }
        }
        (ProjectType::Interactive, _, _) if !project.songs().is_empty() => PanelMedia::MusicPlayer,
        _ => PanelMedia::Image {
            source: MediaSource::parse(&project.image),
            alt: project.title.clone(),
        },
    }
}

fn bind_player(handlers: &mut HandlerMap, project: &ProjectRecord) {
    for button in [
        TransportButton::Previous,
        TransportButton::PlayPause,
        TransportButton::Next,
    ] {
        handlers.bind(
            Element::Transport(project.id, button),
            Action::Player(project.id, button.command()),
        );
    }
    for index in 0..project.songs().len() {
        handlers.bind(
            Element::PlaylistRow(project.id, index),
            Action::Player(project.id, PlayerCommand::Select(index)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::{PlayerContent, Song};

    fn video(id: ProjectId, video_id: Option<&str>) -> ProjectRecord {
        let mut record = ProjectRecord::new(id, format!("video {id}"));
        record.kind = ProjectType::Video;
        record.image = "https://img.example/thumb.jpg".to_string();
        record.video_id = video_id.map(str::to_string);
        record
    }

    fn interactive(id: ProjectId, songs: usize) -> ProjectRecord {
        let mut record = ProjectRecord::new(id, "Music Player");
        record.kind = ProjectType::Interactive;
        record.player_content = Some(PlayerContent {
            songs: (0..songs)
                .map(|i| Song {
                    artist: format!("artist {i}"),
                    song: format!("song {i}"),
                    image: format!("covers/{i}.png"),
                })
                .collect(),
        });
        record
    }

    fn catalog(records: Vec<ProjectRecord>) -> Catalog {
        Catalog::from_records(records).0
    }

    fn targets() -> RenderTargets {
        RenderTargets::from_layout(&DesktopLayout::default())
    }

    fn render_all(
        catalog: &Catalog,
        targets: &mut RenderTargets,
    ) -> (RenderSummary, HandlerMap, PlayerRegistry) {
        let mut handlers = HandlerMap::default();
        let mut players = PlayerRegistry::new();
        let summary = render(
            catalog,
            &RenderOptions::default(),
            targets,
            &mut handlers,
            &mut players,
        )
        .unwrap();
        (summary, handlers, players)
    }

    #[test]
    fn test_one_card_and_panel_per_project() {
        let catalog = Catalog::embedded().unwrap();
        let mut targets = targets();
        let (summary, handlers, _) = render_all(&catalog, &mut targets);

        assert_eq!(summary.cards, catalog.len());
        assert_eq!(summary.panels, catalog.len());
        for (card, panel) in targets.cards().iter().zip(targets.panels()) {
            assert_eq!(card.project_id, panel.project_id);
            assert_eq!(panel.id, format!("project-{}", card.project_id));
            assert_eq!(
                handlers.get(&Element::Card(card.project_id)),
                Some(&Action::ShowDetail(card.project_id))
            );
        }
    }

    #[test]
    fn test_video_embed_references_video_id() {
        let catalog = catalog(vec![video(1, Some("XYZ"))]);
        let mut targets = targets();
        render_all(&catalog, &mut targets);

        match &targets.panel(1).unwrap().media {
            PanelMedia::Video { title, embed_url } => {
                assert!(embed_url.contains("XYZ"));
                assert_eq!(embed_url, "https://www.youtube.com/embed/XYZ");
                assert_eq!(title, "video 1");
            }
            other => panic!("expected video media, got {other:?}"),
        }
        assert!(targets.cards()[0].video_badge);
    }

    #[test]
    fn test_video_without_id_degrades_to_image() {
        // Degraded, not failed: the panel still exists and shows the image.
        let catalog = catalog(vec![video(1, None)]);
        let mut targets = targets();
        render_all(&catalog, &mut targets);

        assert_eq!(
            targets.panel(1).unwrap().media,
            PanelMedia::Image {
                source: MediaSource::Remote("https://img.example/thumb.jpg".to_string()),
                alt: "video 1".to_string(),
            }
        );
    }

    #[test]
    fn test_photo_gallery_keeps_order() {
        let mut gallery = ProjectRecord::new(4, "Photographie");
        gallery.kind = ProjectType::PhotoGallery;
        gallery.photos = Some(vec!["b.jpg".into(), "a.jpg".into(), "https://x/c.jpg".into()]);
        let catalog = catalog(vec![gallery]);
        let mut targets = targets();
        render_all(&catalog, &mut targets);

        assert_eq!(
            targets.panel(4).unwrap().media,
            PanelMedia::PhotoGrid {
                photos: vec![
                    MediaSource::Local("b.jpg".into()),
                    MediaSource::Local("a.jpg".into()),
                    MediaSource::Remote("https://x/c.jpg".into()),
                ]
            }
        );
    }

    #[test]
    fn test_unknown_and_missing_types_render_image() {
        let mut other = ProjectRecord::new(2, "hologram");
        other.kind = ProjectType::Other("hologram".into());
        let plain = ProjectRecord::new(3, "plain");
        let catalog = catalog(vec![other, plain]);
        let mut targets = targets();
        render_all(&catalog, &mut targets);

        for panel in targets.panels() {
            assert!(matches!(
                panel.media,
                PanelMedia::Image {
                    source: MediaSource::Missing,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_interactive_attaches_player() {
        let catalog = catalog(vec![interactive(6, 5)]);
        let mut targets = targets();
        let (summary, handlers, players) = render_all(&catalog, &mut targets);

        assert_eq!(summary.players, 1);
        assert_eq!(
            targets.panel(6).unwrap().media,
            PanelMedia::MusicPlayer
        );
        let player = players.get(6).unwrap();
        assert_eq!(player.song_count(), 5);
        assert!(player.rows()[0].active);
        assert_eq!(
            handlers.get(&Element::PlaylistRow(6, 4)),
            Some(&Action::Player(6, PlayerCommand::Select(4)))
        );
    }

    #[test]
    fn test_interactive_without_songs_has_no_player() {
        let catalog = catalog(vec![interactive(6, 0)]);
        let mut targets = targets();
        let (summary, _, players) = render_all(&catalog, &mut targets);
        assert_eq!(summary.players, 0);
        assert!(players.get(6).is_none());
        assert!(matches!(targets.panel(6).unwrap().media, PanelMedia::Image { .. }));
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let catalog = Catalog::embedded().unwrap();
        let mut targets = targets();
        let mut handlers = HandlerMap::default();
        let mut players = PlayerRegistry::new();
        let options = RenderOptions::default();

        let first = render(&catalog, &options, &mut targets, &mut handlers, &mut players).unwrap();
        let cards = targets.cards().to_vec();
        let panels = targets.panels().to_vec();
        let bindings = handlers.len();

        let second = render(&catalog, &options, &mut targets, &mut handlers, &mut players).unwrap();
        assert_eq!(first, second);
        assert_eq!(targets.cards(), cards.as_slice());
        assert_eq!(targets.panels(), panels.as_slice());
        assert_eq!(handlers.len(), bindings);
        assert_eq!(players.len(), 1);
    }

    #[test]
    fn test_missing_target_strict_fails() {
        let catalog = catalog(vec![video(1, Some("XYZ"))]);
        let mut targets = RenderTargets::default();
        let options = RenderOptions {
            strict: true,
            ..RenderOptions::default()
        };
        let result = render(
            &catalog,
            &options,
            &mut targets,
            &mut HandlerMap::default(),
            &mut PlayerRegistry::new(),
        );
        assert_eq!(result, Err(RenderError::MissingTarget(PROJECTS_GRID)));
    }

    #[test]
    fn test_missing_details_target_strict_fails() {
        let catalog = catalog(vec![video(1, Some("XYZ"))]);
        let mut targets = RenderTargets {
            grid: Some(Vec::new()),
            details: None,
        };
        let options = RenderOptions {
            strict: true,
            ..RenderOptions::default()
        };
        let mut handlers = HandlerMap::default();
        let result = render(
            &catalog,
            &options,
            &mut targets,
            &mut handlers,
            &mut PlayerRegistry::new(),
        );
        assert_eq!(result, Err(RenderError::MissingTarget(PROJECT_DETAILS)));
        assert!(targets.cards().is_empty(), "nothing rendered on failure");
        assert_eq!(handlers.len(), 0);
    }

    #[test]
    fn test_missing_target_lenient_skips() {
        let catalog = catalog(vec![video(1, Some("XYZ"))]);
        let mut targets = RenderTargets {
            grid: None,
            details: Some(Vec::new()),
        };
        let options = RenderOptions {
            strict: false,
            ..RenderOptions::default()
        };
        let mut handlers = HandlerMap::default();
        let summary = render(
            &catalog,
            &options,
            &mut targets,
            &mut handlers,
            &mut PlayerRegistry::new(),
        )
        .unwrap();
        assert_eq!(summary.cards, 0);
        assert_eq!(summary.panels, 1);
        assert!(handlers.get(&Element::Card(1)).is_none());
    }

    #[test]
    fn test_media_source_parse() {
        assert_eq!(MediaSource::parse(""), MediaSource::Missing);
        assert_eq!(MediaSource::parse("  "), MediaSource::Missing);
        assert_eq!(
            MediaSource::parse("https://a/b.jpg"),
            MediaSource::Remote("https://a/b.jpg".into())
        );
        assert_eq!(
            MediaSource::parse("file:///tmp/a.png"),
            MediaSource::Local("/tmp/a.png".into())
        );
        assert_eq!(
            MediaSource::parse("assets/a.png"),
            MediaSource::Local("assets/a.png".into())
        );
    }
}
