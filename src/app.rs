// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the desktop model and the texture cache, draws the
//! desktop every frame, and turns view interactions into desktop actions.

use crate::config::AppConfig;
use crate::desktop::{Desktop, Element};
use crate::io::serialization::{self, Format};
use crate::models::catalog::Catalog;
use crate::ui::{self, menu::MenuAction, textures::TextureCache, UiAction};
use anyhow::Result;
use std::path::PathBuf;

const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];
const JSON_EXTENSIONS: &[&str] = &["json"];

/// Main application state.
pub struct PortfolioApp {
    config: AppConfig,
    desktop: Desktop,
    textures: TextureCache,
    /// Catalog file currently shown, if not the embedded one.
    catalog_path: Option<PathBuf>,
}

impl PortfolioApp {
    /// Load the configured catalog and build the desktop.
    pub fn new(config: AppConfig) -> Result<Self> {
        let catalog = config.load_catalog()?;
        let desktop = Desktop::new(&config.desktop, catalog, config.render_options())?;
        let catalog_path = config.catalog.clone();

        Ok(Self {
            config,
            desktop,
            textures: TextureCache::new(),
            catalog_path,
        })
    }

    fn set_catalog(&mut self, catalog: Catalog) {
        self.textures.clear();
        match self.desktop.set_catalog(catalog) {
            Ok(summary) => log::info!("Showing {} projects", summary.cards),
            Err(e) => log::error!("Failed to render catalog: {}", e),
        }
    }

    /// Pick a catalog file and show it.
    fn open_catalog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Catalog", &["yaml", "yml", "json"])
            .pick_file()
        else {
            return;
        };

        match serialization::import_catalog(&path) {
            Ok(catalog) => {
                self.set_catalog(catalog);
                self.catalog_path = Some(path);
            }
            Err(e) => log::error!("Failed to open catalog: {:#}", e),
        }
    }

    /// Read the current catalog again from disk.
    fn reload_catalog(&mut self) {
        let result = match &self.catalog_path {
            Some(path) => serialization::import_catalog(path),
            None => Catalog::embedded(),
        };
        match result {
            Ok(catalog) => self.set_catalog(catalog),
            Err(e) => log::error!("Failed to reload catalog: {:#}", e),
        }
    }

    fn export_catalog(&self, format: Format) {
        let (name, extensions) = match format {
            Format::Yaml => ("catalog.yaml", YAML_EXTENSIONS),
            Format::Json => ("catalog.json", JSON_EXTENSIONS),
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Catalog", extensions)
            .set_file_name(name)
            .save_file()
        else {
            return;
        };

        match serialization::export_catalog(self.desktop.catalog(), &path) {
            Ok(_) => log::info!("Exported catalog to {}", path.display()),
            Err(e) => log::error!("Failed to export catalog: {:#}", e),
        }
    }

    /// Copy the configured CV file to a location picked by the user.
    fn download_cv(&self) {
        let Some(source) = &self.config.cv_file else {
            return;
        };
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cv.pdf".to_string());
        let Some(target) = rfd::FileDialog::new().set_file_name(file_name).save_file() else {
            return;
        };

        match std::fs::copy(source, &target) {
            Ok(_) => log::info!("CV downloaded to {}", target.display()),
            Err(e) => log::error!("Failed to copy CV from {}: {}", source.display(), e),
        }
    }

    fn handle(&mut self, action: UiAction) {
        match action {
            UiAction::Click(element) => {
                if let Element::Card(id) = element {
                    if let Some(project) = self.desktop.catalog().get(id) {
                        log::info!("Opening project \"{}\"", project.title);
                    }
                }
                self.desktop.click(&element);
            }
            UiAction::DownloadCv => self.download_cv(),
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.textures.poll(ctx);

        let dt = ctx.input(|i| i.stable_dt);
        self.desktop.players.tick_all(dt);
        if self.desktop.players.any_playing() || self.textures.is_loading() {
            ctx.request_repaint();
        }

        let mut actions = Vec::new();

        // Top menu bar
        let menu_action = egui::TopBottomPanel::top("menu_bar")
            .show(ctx, |ui| ui::menu::show(ui, self.desktop.windows.folders()))
            .inner;

        match menu_action {
            MenuAction::OpenCatalog => self.open_catalog(),
            MenuAction::ReloadCatalog => self.reload_catalog(),
            MenuAction::ExportCatalog(format) => self.export_catalog(format),
            MenuAction::OpenSection(section) => {
                actions.push(UiAction::Click(Element::Folder(section)));
            }
            MenuAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            MenuAction::None => {}
        }

        // Desktop background with folder icons; frozen while a detail panel is open
        let scroll_enabled = self.desktop.scroll_enabled();
        let desktop_frame = egui::Frame::central_panel(&ctx.style()).fill(egui::Color32::from_rgb(38, 70, 110));
        let folder_action = egui::CentralPanel::default()
            .frame(desktop_frame)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .enable_scrolling(scroll_enabled)
                    .show(ui, |ui| ui::desktop::show_folders(ui, &mut self.desktop.windows))
                    .inner
            })
            .inner;
        actions.extend(folder_action);

        // Windows
        let window_action = ui::desktop::show_windows(
            ctx,
            &mut self.desktop.windows,
            self.desktop.targets.cards(),
            &mut self.textures,
            self.config.cv_file.is_some(),
        );
        actions.extend(window_action);
        ui::desktop::track_pointer(ctx, &mut self.desktop.windows);

        // Detail overlays
        let detail_action = ui::detail::show(
            ctx,
            &self.desktop.targets,
            &self.desktop.details,
            &self.desktop.players,
            &mut self.textures,
        );
        actions.extend(detail_action);

        // Escape closes the newest detail panel
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if let Some(&id) = self.desktop.details.open_panels().last() {
                actions.push(UiAction::Click(Element::BackButton(id)));
            }
        }

        for action in actions {
            self.handle(action);
        }
    }
}
