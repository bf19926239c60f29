// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Menu bar.
//!
//! File operations on the catalog and a Go menu that opens the same
//! section windows as the desktop folders.

use crate::desktop::window_manager::FolderTrigger;
use crate::io::serialization::Format;

/// Result of menu interaction.
pub enum MenuAction {
    None,
    OpenCatalog,
    ExportCatalog(Format),
    ReloadCatalog,
    OpenSection(String),
    Quit,
}

/// Display the menu bar.
pub fn show(ui: &mut egui::Ui, folders: &[FolderTrigger]) -> MenuAction {
    let mut action = MenuAction::None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Open Catalog...").clicked() {
                action = MenuAction::OpenCatalog;
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                action = MenuAction::ReloadCatalog;
                ui.close_menu();
            }
            ui.separator();
            ui.menu_button("Export Catalog", |ui| {
                if ui.button("Export as YAML...").clicked() {
                    action = MenuAction::ExportCatalog(Format::Yaml);
                    ui.close_menu();
                }
                if ui.button("Export as JSON...").clicked() {
                    action = MenuAction::ExportCatalog(Format::Json);
                    ui.close_menu();
                }
            });
            ui.separator();
            if ui.button("Quit").clicked() {
                action = MenuAction::Quit;
                ui.close_menu();
            }
        });

        ui.menu_button("Go", |ui| {
            for folder in folders {
                if ui.button(format!("{} {}", folder.icon, folder.label)).clicked() {
                    action = MenuAction::OpenSection(folder.section.clone());
                    ui.close_menu();
                }
            }
        });
    });

    action
}
