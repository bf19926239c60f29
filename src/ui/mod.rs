// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! egui views of the desktop model.

pub mod cards;
pub mod desktop;
pub mod detail;
pub mod menu;
pub mod player;
pub mod textures;

use crate::desktop::Element;

/// Interaction reported by a view for the app to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Click(Element),
    DownloadCv,
}
