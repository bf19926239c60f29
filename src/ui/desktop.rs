// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Desktop surface: folder icons and draggable windows.
//!
//! This module draws the desktop background with its folder icons, every
//! visible window, and feeds pointer presses, moves and releases to the
//! window manager.

use super::textures::TextureCache;
use super::{cards, UiAction};
use crate::desktop::renderer::SummaryCard;
use crate::desktop::window_manager::{DesktopWindow, HitTarget, WindowManager};
use crate::desktop::Element;
use crate::models::layout::WindowBody;

const ICON_SIZE: f32 = 56.0;
const ICON_LABEL_HEIGHT: f32 = 18.0;
const FOLDER_SPACING: f32 = 28.0;
const HEADER_HEIGHT: f32 = 26.0;
const CLOSE_SIZE: f32 = 26.0;

/// Draw the folder icons down the left side of the desktop.
pub fn show_folders(ui: &mut egui::Ui, windows: &mut WindowManager) -> Option<UiAction> {
    let mut action = None;
    let folders = windows.folders().to_vec();

    ui.add_space(16.0);
    for folder in &folders {
        let size = egui::vec2(ICON_SIZE + 24.0, ICON_SIZE + ICON_LABEL_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        // Enter / leave drive the icon scale.
        if response.hovered() != folder.is_hovered() {
            windows.set_folder_hover(&folder.section, response.hovered());
        }

        let painter = ui.painter();
        let icon_center = egui::pos2(rect.center().x, rect.min.y + ICON_SIZE / 2.0);
        painter.text(
            icon_center,
            egui::Align2::CENTER_CENTER,
            &folder.icon,
            egui::FontId::proportional(40.0 * folder.icon_scale()),
            egui::Color32::from_rgb(250, 205, 90),
        );
        painter.text(
            egui::pos2(rect.center().x, rect.max.y - ICON_LABEL_HEIGHT / 2.0),
            egui::Align2::CENTER_CENTER,
            &folder.label,
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
        );

        if response.clicked() {
            action = Some(UiAction::Click(Element::Folder(folder.section.clone())));
        }
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        ui.add_space(FOLDER_SPACING);
    }

    action
}

/// Draw every visible window at its dragged position.
pub fn show_windows(
    ctx: &egui::Context,
    windows: &mut WindowManager,
    cards: &[SummaryCard],
    textures: &mut TextureCache,
    cv_available: bool,
) -> Option<UiAction> {
    let visible: Vec<DesktopWindow> = windows
        .windows()
        .iter()
        .filter(|w| w.active)
        .cloned()
        .collect();

    let mut action = None;
    for window in &visible {
        let clicked = egui::Area::new(egui::Id::new(("desktop-window", &window.id)))
            .order(egui::Order::Middle)
            .fixed_pos(egui::Pos2::from(window.position()))
            .show(ctx, |ui| {
                egui::Frame::window(ui.style())
                    .show(ui, |ui| {
                        ui.set_width(window.size[0]);
                        let header = show_header(ui, windows, window);
                        ui.separator();
                        let body = show_body(ui, window, cards, textures, cv_available);
                        header.or(body)
                    })
                    .inner
            })
            .inner;
        action = action.or(clicked);
    }

    action
}

/// Feed pointer moves and releases anywhere on screen to the window manager.
pub fn track_pointer(ctx: &egui::Context, windows: &mut WindowManager) {
    let (latest, released) = ctx.input(|i| (i.pointer.latest_pos(), i.pointer.primary_released()));
    if windows.is_dragging() {
        if let Some(pos) = latest {
            windows.pointer_move(pos.into());
        }
    }
    if released {
        windows.pointer_up();
    }
}

fn show_header(
    ui: &mut egui::Ui,
    windows: &mut WindowManager,
    window: &DesktopWindow,
) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let close_width = if window.closable { CLOSE_SIZE } else { 0.0 };
        let header_width = (window.size[0] - close_width - ui.spacing().item_spacing.x).max(40.0);
        let (rect, header) =
            ui.allocate_exact_size(egui::vec2(header_width, HEADER_HEIGHT), egui::Sense::click_and_drag());

        // Title label, a direct child of the header
        let color = ui.visuals().strong_text_color();
        let galley = ui
            .painter()
            .layout_no_wrap(window.title.clone(), egui::FontId::proportional(15.0), color);
        let title_rect = egui::Rect::from_min_size(
            rect.left_center() + egui::vec2(6.0, -galley.size().y / 2.0),
            galley.size(),
        );
        let title = ui.interact(
            title_rect,
            ui.id().with(("window-title", &window.id)),
            egui::Sense::click_and_drag(),
        );
        ui.painter().galley(title_rect.min, galley, color);

        let close = window
            .closable
            .then(|| ui.add_sized([CLOSE_SIZE, HEADER_HEIGHT], egui::Button::new("✕")));

        let hit = if title.hovered() {
            Some(HitTarget::HeaderChild)
        } else if header.hovered() {
            Some(HitTarget::Header)
        } else if close.as_ref().is_some_and(|c| c.hovered()) {
            Some(HitTarget::Nested)
        } else {
            None
        };

        let (pressed, origin) = ui.input(|i| (i.pointer.primary_pressed(), i.pointer.press_origin()));
        if let (true, Some(target), Some(origin)) = (pressed, hit, origin) {
            windows.pointer_down(&window.id, target, origin.into());
        }
        if window.drag().is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if matches!(hit, Some(HitTarget::Header | HitTarget::HeaderChild)) {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }

        if close.is_some_and(|c| c.clicked()) {
            action = Some(UiAction::Click(Element::CloseButton(window.id.clone())));
        }
    });

    action
}

fn show_body(
    ui: &mut egui::Ui,
    window: &DesktopWindow,
    cards: &[SummaryCard],
    textures: &mut TextureCache,
    cv_available: bool,
) -> Option<UiAction> {
    let max_height = window.size[1] - HEADER_HEIGHT;

    match &window.body {
        WindowBody::Text { paragraphs } => {
            for paragraph in paragraphs {
                ui.label(paragraph);
            }
            None
        }
        WindowBody::ProjectsGrid => egui::ScrollArea::vertical()
            .id_source(("window-body", &window.id))
            .max_height(max_height)
            .show(ui, |ui| cards::show(ui, cards, textures))
            .inner,
        WindowBody::Cv { paragraphs } => {
            for paragraph in paragraphs {
                ui.label(paragraph);
            }
            ui.add_space(8.0);
            let button = ui
                .add_enabled(cv_available, egui::Button::new("⬇ Télécharger le CV"))
                .on_disabled_hover_text("No CV file configured");
            button.clicked().then_some(UiAction::DownloadCv)
        }
    }
}
