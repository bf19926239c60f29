// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Texture cache and media display.
//!
//! Local images are decoded on background threads and uploaded as egui
//! textures when ready. Remote and missing references are drawn as
//! placeholders; nothing is fetched over the network.

use crate::desktop::renderer::MediaSource;
use crate::io::media::{load_image, LoadedImage};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

type LoadResult = (PathBuf, Result<LoadedImage, String>);

enum Slot {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

/// Textures for local media, keyed by path.
pub struct TextureCache {
    slots: HashMap<PathBuf, Slot>,
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureCache {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            slots: HashMap::new(),
            sender,
            receiver,
        }
    }

    /// Upload every image that finished decoding since the last frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok((path, result)) = self.receiver.try_recv() {
            let slot = match result {
                Ok(loaded) => {
                    let size = [loaded.width as usize, loaded.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                    let texture = ctx.load_texture(
                        path.to_string_lossy(),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    log::debug!("Loaded texture {} ({}x{})", path.display(), loaded.width, loaded.height);
                    Slot::Ready(texture)
                }
                Err(e) => {
                    log::warn!("{}", e);
                    Slot::Failed
                }
            };
            self.slots.insert(path, slot);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.slots.values().any(|slot| matches!(slot, Slot::Loading))
    }

    /// Forget every texture, e.g. after switching catalogs.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn request(&mut self, path: &Path) -> &Slot {
        if !self.slots.contains_key(path) {
            let sender = self.sender.clone();
            let owned = path.to_path_buf();
            std::thread::spawn(move || {
                let result = load_image(&owned).map_err(|e| format!("{:#}", e));
                let _ = sender.send((owned, result));
            });
            self.slots.insert(path.to_path_buf(), Slot::Loading);
        }
        &self.slots[path]
    }

    /// Draw a media reference at `size`. Remote references get a link when
    /// `link_remote` is set.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        source: &MediaSource,
        size: egui::Vec2,
        link_remote: bool,
    ) -> egui::Response {
        match source {
            MediaSource::Local(path) => match self.request(path) {
                Slot::Ready(texture) => ui.add(egui::Image::new(egui::load::SizedTexture::new(
                    texture.id(),
                    size,
                ))),
                Slot::Loading => {
                    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
                    ui.put(rect, egui::Spinner::new());
                    response
                }
                Slot::Failed => placeholder(ui, size, "⚠ image unavailable"),
            },
            MediaSource::Remote(url) => {
                let response = placeholder(ui, size, "🖼");
                if link_remote {
                    let link_rect = egui::Rect::from_center_size(
                        response.rect.center_bottom() - egui::vec2(0.0, 14.0),
                        egui::vec2(size.x - 8.0, 18.0),
                    );
                    ui.put(link_rect, egui::Hyperlink::from_label_and_url("open image", url));
                }
                response
            }
            MediaSource::Missing => placeholder(ui, size, "⚠ no image"),
        }
    }
}

/// Framed box with a centered caption.
fn placeholder(ui: &mut egui::Ui, size: egui::Vec2, caption: &str) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 6.0, egui::Color32::from_gray(48));
    painter.rect_stroke(rect, 6.0, egui::Stroke::new(1.0, egui::Color32::from_gray(80)));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        caption,
        egui::FontId::proportional(16.0),
        egui::Color32::from_gray(170),
    );
    response
}
