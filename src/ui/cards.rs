// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project card grid.
//!
//! Cards wrap to the width of the hosting window. Clicking anywhere on a
//! card opens the matching detail panel.

use super::textures::TextureCache;
use super::UiAction;
use crate::desktop::renderer::SummaryCard;
use crate::desktop::Element;

const CARD_WIDTH: f32 = 200.0;
const THUMBNAIL_HEIGHT: f32 = 120.0;

/// Display the card grid.
pub fn show(ui: &mut egui::Ui, cards: &[SummaryCard], textures: &mut TextureCache) -> Option<UiAction> {
    if cards.is_empty() {
        ui.label(egui::RichText::new("No projects yet").italics().weak());
        return None;
    }

    let mut action = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
        for card in cards {
            if show_card(ui, card, textures).clicked() {
                action = Some(UiAction::Click(Element::Card(card.project_id)));
            }
        }
    });
    action
}

fn show_card(ui: &mut egui::Ui, card: &SummaryCard, textures: &mut TextureCache) -> egui::Response {
    let inner = egui::Frame::group(ui.style()).rounding(8.0).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            let thumbnail = textures.show(
                ui,
                &card.thumbnail,
                egui::vec2(CARD_WIDTH, THUMBNAIL_HEIGHT),
                false,
            );
            if card.video_badge {
                let badge = egui::Rect::from_min_size(
                    thumbnail.rect.left_top() + egui::vec2(6.0, 6.0),
                    egui::vec2(58.0, 18.0),
                );
                ui.painter().rect_filled(badge, 4.0, egui::Color32::from_black_alpha(180));
                ui.painter().text(
                    badge.center(),
                    egui::Align2::CENTER_CENTER,
                    "▶ Vidéo",
                    egui::FontId::proportional(11.0),
                    egui::Color32::WHITE,
                );
            }
            ui.label(egui::RichText::new(&card.title).strong());
            ui.label(egui::RichText::new(&card.short_description).weak());
        });
    });

    let response = inner.response.interact(egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}
