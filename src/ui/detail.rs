// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project detail overlays.
//!
//! Every open detail panel covers the whole screen, newest on top. The back
//! button closes it.

use super::textures::TextureCache;
use super::{player, UiAction};
use crate::desktop::detail::DetailController;
use crate::desktop::player::PlayerRegistry;
use crate::desktop::renderer::{DetailPanel, PanelMedia, RenderTargets};
use crate::desktop::Element;

const PHOTO_SIZE: f32 = 220.0;
const VIDEO_WIDTH: f32 = 640.0;

/// Draw all open detail panels.
pub fn show(
    ctx: &egui::Context,
    targets: &RenderTargets,
    details: &DetailController,
    players: &PlayerRegistry,
    textures: &mut TextureCache,
) -> Option<UiAction> {
    let screen = ctx.screen_rect();
    let mut action = None;

    for &id in details.open_panels() {
        let Some(panel) = targets.panel(id) else {
            continue;
        };
        let clicked = egui::Area::new(egui::Id::new(("project-detail", id)))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(egui::Color32::from_gray(18))
                    .inner_margin(egui::Margin::same(24.0))
                    .show(ui, |ui| {
                        ui.set_min_size(screen.size() - egui::vec2(48.0, 48.0));
                        ui.set_max_width(screen.width() - 48.0);
                        egui::ScrollArea::vertical()
                            .id_source(("project-detail-scroll", id))
                            .show(ui, |ui| show_panel(ui, panel, players, textures))
                            .inner
                    })
                    .inner
            })
            .inner;
        action = action.or(clicked);
    }

    action
}

fn show_panel(
    ui: &mut egui::Ui,
    panel: &DetailPanel,
    players: &PlayerRegistry,
    textures: &mut TextureCache,
) -> Option<UiAction> {
    let mut action = None;

    if ui.button("← Retour").clicked() {
        action = Some(UiAction::Click(Element::BackButton(panel.project_id)));
    }
    ui.add_space(12.0);

    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new(&panel.title).size(28.0).strong());
    });
    ui.add_space(12.0);

    match &panel.media {
        PanelMedia::Video { title, embed_url } => {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(title).strong());
                let size = egui::vec2(VIDEO_WIDTH, VIDEO_WIDTH * 9.0 / 16.0);
                let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                ui.painter().rect_filled(rect, 4.0, egui::Color32::BLACK);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "▶",
                    egui::FontId::proportional(48.0),
                    egui::Color32::from_gray(200),
                );
                ui.hyperlink_to("Watch video", embed_url);
            });
        }
        PanelMedia::PhotoGrid { photos } => {
            ui.horizontal_wrapped(|ui| {
                for photo in photos {
                    textures.show(ui, photo, egui::Vec2::splat(PHOTO_SIZE), true);
                }
            });
        }
        PanelMedia::MusicPlayer => match players.get(panel.project_id) {
            Some(music_player) => {
                action = action.or(player::show(ui, music_player, textures));
            }
            None => {
                ui.label(egui::RichText::new("Player unavailable").weak());
            }
        },
        PanelMedia::Image { source, alt } => {
            let width = (ui.available_width() - 24.0).clamp(200.0, 900.0);
            textures
                .show(ui, source, egui::vec2(width, width * 0.6), true)
                .on_hover_text(alt);
        }
    }

    ui.add_space(16.0);
    ui.label(&panel.description);

    action
}
