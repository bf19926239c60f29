// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Desktop model.
//!
//! The desktop holds everything the UI draws: rendered cards and panels,
//! window and folder state, detail panel state and music players. It is
//! independent of egui, so all interaction logic runs in plain unit tests.
//!
//! Clicks are routed through a [`HandlerMap`] keyed by [`Element`]. The
//! window manager binds folder and close-button elements once; the renderer
//! binds card, back-button and player elements on every render.

pub mod detail;
pub mod player;
pub mod renderer;
pub mod window_manager;

use crate::models::catalog::Catalog;
use crate::models::layout::DesktopLayout;
use crate::models::project::ProjectId;
use detail::DetailController;
use player::{PlayerCommand, PlayerRegistry, TransportButton};
use renderer::{RenderError, RenderOptions, RenderSummary, RenderTargets};
use std::collections::HashMap;
use window_manager::{WindowId, WindowManager};

/// A clickable element of the desktop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    Folder(String),
    CloseButton(WindowId),
    Card(ProjectId),
    BackButton(ProjectId),
    Transport(ProjectId, TransportButton),
    PlaylistRow(ProjectId, usize),
}

impl Element {
    /// Elements produced by the renderer, as opposed to the fixed desktop.
    fn is_rendered(&self) -> bool {
        !matches!(self, Element::Folder(_) | Element::CloseButton(_))
    }
}

/// What a click on an element does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenSection(String),
    CloseWindow(WindowId),
    ShowDetail(ProjectId),
    HideDetail(ProjectId),
    Player(ProjectId, PlayerCommand),
}

/// Click bindings keyed by element.
#[derive(Debug, Default)]
pub struct HandlerMap {
    bindings: HashMap<Element, Action>,
}

impl HandlerMap {
    pub fn bind(&mut self, element: Element, action: Action) {
        self.bindings.insert(element, action);
    }

    pub fn get(&self, element: &Element) -> Option<&Action> {
        self.bindings.get(element)
    }

    /// Drop every binding made by the renderer.
    pub fn clear_rendered(&mut self) {
        self.bindings.retain(|element, _| !element.is_rendered());
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

/// The whole desktop.
#[derive(Debug)]
pub struct Desktop {
    catalog: Catalog,
    options: RenderOptions,
    handlers: HandlerMap,
    pub targets: RenderTargets,
    pub windows: WindowManager,
    pub details: DetailController,
    pub players: PlayerRegistry,
}

impl Desktop {
    /// Build the desktop for `layout` and render `catalog` into it.
    pub fn new(
        layout: &DesktopLayout,
        catalog: Catalog,
        options: RenderOptions,
    ) -> Result<Self, RenderError> {
        let windows = WindowManager::from_layout(layout);
        let mut handlers = HandlerMap::default();
        windows.bind_handlers(&mut handlers);

        let mut desktop = Self {
            catalog,
            options,
            handlers,
            targets: RenderTargets::from_layout(layout),
            windows,
            details: DetailController::new(),
            players: PlayerRegistry::new(),
        };
        desktop.render()?;
        Ok(desktop)
    }

    /// Re-render the current catalog. All detail panels close and every
    /// player restarts on its first song.
    pub fn render(&mut self) -> Result<RenderSummary, RenderError> {
        let summary = renderer::render(
            &self.catalog,
            &self.options,
            &mut self.targets,
            &mut self.handlers,
            &mut self.players,
        )?;
        self.details
            .reset(self.targets.panels().iter().map(|p| p.project_id));
        log::debug!(
            "{} click bindings, {} players",
            self.handlers.len(),
            self.players.len()
        );
        Ok(summary)
    }

    /// Swap in a new catalog and render it.
    pub fn set_catalog(&mut self, catalog: Catalog) -> Result<RenderSummary, RenderError> {
        self.catalog = catalog;
        self.render()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Dispatch a click. Returns false when nothing is bound to `element`.
    pub fn click(&mut self, element: &Element) -> bool {
        match self.handlers.get(element).cloned() {
            Some(action) => {
                self.apply(action);
                true
            }
            None => {
                log::debug!("No handler for {:?}", element);
                false
            }
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::OpenSection(section) => {
                self.windows.open_section(&section);
            }
            Action::CloseWindow(id) => {
                self.windows.close_window(&id);
            }
            Action::ShowDetail(id) => {
                self.details.show_detail(id);
            }
            Action::HideDetail(id) => {
                self.details.hide_detail(id);
            }
            Action::Player(id, command) => {
                self.players.apply(id, command);
            }
        }
    }

    /// Whether the desktop behind the overlays may scroll.
    pub fn scroll_enabled(&self) -> bool {
        !self.details.scroll_locked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::{PlayerContent, ProjectRecord, ProjectType, Song};

    fn desktop() -> Desktop {
        Desktop::new(
            &DesktopLayout::default(),
            Catalog::embedded().unwrap(),
            RenderOptions::default(),
        )
        .unwrap()
    }

    fn interactive_catalog(songs: usize) -> Catalog {
        let mut record = ProjectRecord::new(1, "Music Player");
        record.kind = ProjectType::Interactive;
        record.player_content = Some(PlayerContent {
            songs: (0..songs)
                .map(|i| Song {
                    artist: format!("artist {i}"),
                    song: format!("song {i}"),
                    image: String::new(),
                })
                .collect(),
        });
        Catalog::from_records(vec![record]).0
    }

    #[test]
    fn test_card_click_reveals_matching_panel() {
        let mut desktop = desktop();
        let ids: Vec<_> = desktop.targets.cards().iter().map(|c| c.project_id).collect();
        for id in ids {
            assert!(desktop.click(&Element::Card(id)));
            assert_eq!(desktop.details.open_panels(), &[id]);
            assert!(!desktop.scroll_enabled());

            assert!(desktop.click(&Element::BackButton(id)));
            assert!(desktop.details.open_panels().is_empty());
            assert!(desktop.scroll_enabled());
        }
    }

    #[test]
    fn test_folder_click_opens_section_window() {
        let mut desktop = desktop();
        assert!(desktop.click(&Element::Folder("projects".into())));
        assert!(desktop.windows.window("projects-window").unwrap().active);

        assert!(desktop.click(&Element::CloseButton("projects-window".into())));
        assert!(!desktop.windows.window("projects-window").unwrap().active);
    }

    #[test]
    fn test_unbound_click_is_noop() {
        let mut desktop = desktop();
        assert!(!desktop.click(&Element::Card(999)));
        assert!(!desktop.click(&Element::Folder("blog".into())));
        assert!(desktop.scroll_enabled());
    }

    #[test]
    fn test_interactive_next_then_previous_scenario() {
        let mut desktop = Desktop::new(
            &DesktopLayout::default(),
            interactive_catalog(5),
            RenderOptions::default(),
        )
        .unwrap();

        let player = desktop.players.get(1).unwrap();
        assert!(player.rows()[0].active);
        assert!(!player.is_playing());

        desktop.click(&Element::Transport(1, TransportButton::Next));
        assert_eq!(desktop.players.get(1).unwrap().current_index(), 1);
        desktop.click(&Element::Transport(1, TransportButton::Previous));

        let player = desktop.players.get(1).unwrap();
        assert_eq!(player.current_index(), 0);
        assert!(player.rows()[0].active);
        assert_eq!(player.rows().iter().filter(|r| r.active).count(), 1);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_playlist_row_click_selects_song() {
        let mut desktop = Desktop::new(
            &DesktopLayout::default(),
            interactive_catalog(3),
            RenderOptions::default(),
        )
        .unwrap();
        assert!(desktop.click(&Element::PlaylistRow(1, 2)));
        assert_eq!(desktop.players.get(1).unwrap().now_playing().song, "song 2");
        assert!(!desktop.click(&Element::PlaylistRow(1, 3)));
    }

    #[test]
    fn test_set_catalog_rerenders_and_resets() {
        let mut desktop = desktop();
        desktop.click(&Element::Card(1));
        desktop.click(&Element::Transport(6, TransportButton::PlayPause));
        assert!(desktop.players.any_playing());

        let summary = desktop.set_catalog(interactive_catalog(2)).unwrap();
        assert_eq!(summary.cards, 1);
        assert_eq!(desktop.catalog().len(), 1);
        assert!(desktop.scroll_enabled());
        assert!(!desktop.players.any_playing());
        assert!(!desktop.click(&Element::Card(6)));
        assert!(desktop.click(&Element::Folder("about".into())), "folder bindings survive");
    }

    #[test]
    fn test_rerender_does_not_duplicate() {
        let mut desktop = desktop();
        let cards = desktop.targets.cards().len();
        let bindings = desktop.handlers.len();
        desktop.render().unwrap();
        desktop.render().unwrap();
        assert_eq!(desktop.targets.cards().len(), cards);
        assert_eq!(desktop.handlers.len(), bindings);
    }
}
