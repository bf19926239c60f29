// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Music player widget.

use super::textures::TextureCache;
use super::UiAction;
use crate::desktop::player::{AnimationState, MusicPlayer, TransportButton};
use crate::desktop::Element;

const ALBUM_ART_SIZE: f32 = 160.0;
const BAR_WIDTH: f32 = 10.0;
const BAR_GAP: f32 = 4.0;
const VISUALIZER_HEIGHT: f32 = 48.0;

/// Draw the player for one interactive panel.
pub fn show(ui: &mut egui::Ui, player: &MusicPlayer, textures: &mut TextureCache) -> Option<UiAction> {
    let mut action = None;
    let id = player.project_id();

    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_gray(236))
        .rounding(10.0)
        .show(ui, |ui| {
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_gray(30));
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Music Player").strong());
            });
            ui.separator();

            // Now playing
            let now = player.now_playing();
            ui.horizontal(|ui| {
                textures.show(ui, &now.album_art, egui::Vec2::splat(ALBUM_ART_SIZE), false);
                ui.vertical(|ui| {
                    ui.heading(&now.artist);
                    ui.label(&now.song);
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        for (button, label) in [
                            (TransportButton::Previous, "‹"),
                            (TransportButton::PlayPause, player.transport_glyph()),
                            (TransportButton::Next, "›"),
                        ] {
                            let text = egui::RichText::new(label).size(20.0);
                            if ui.add(egui::Button::new(text).min_size(egui::vec2(36.0, 32.0))).clicked() {
                                action = Some(UiAction::Click(Element::Transport(id, button)));
                            }
                        }
                    });
                    let status = if player.is_playing() { "playing" } else { "paused" };
                    ui.label(
                        egui::RichText::new(format!(
                            "{} / {} · {}",
                            player.current_index() + 1,
                            player.song_count(),
                            status
                        ))
                        .small()
                        .weak(),
                    );
                });
            });

            ui.add_space(6.0);

            // Playlist
            for (index, row) in player.rows().iter().enumerate() {
                if ui.selectable_label(row.active, &row.label).clicked() {
                    action = Some(UiAction::Click(Element::PlaylistRow(id, index)));
                }
            }

            ui.add_space(6.0);
            let bars = player.visualizer();
            let color = match bars.animation() {
                AnimationState::Running => egui::Color32::from_rgb(255, 95, 130),
                AnimationState::Paused => egui::Color32::from_rgb(200, 140, 155),
            };
            visualizer(ui, bars.bar_count(), &bars.bar_heights(), color);
        });

    action
}

/// Bottom-aligned bars scaled by `heights`.
fn visualizer(ui: &mut egui::Ui, count: usize, heights: &[f32], color: egui::Color32) {
    let width = count as f32 * (BAR_WIDTH + BAR_GAP);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, VISUALIZER_HEIGHT), egui::Sense::hover());
    let painter = ui.painter();

    for (i, height) in heights.iter().enumerate() {
        let x = rect.min.x + i as f32 * (BAR_WIDTH + BAR_GAP);
        let bar = egui::Rect::from_min_max(
            egui::pos2(x, rect.max.y - height * VISUALIZER_HEIGHT),
            egui::pos2(x + BAR_WIDTH, rect.max.y),
        );
        painter.rect_filled(bar, 2.0, color);
    }
}
