// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Window manager.
//!
//! Tracks every draggable window on the desktop, the folder icons that open
//! section windows, and the pointer-drag state of each window.

use super::{Action, Element, HandlerMap};
use crate::models::layout::{section_window_id, DesktopLayout, FolderSpec, WindowBody, WindowSpec};
use crate::util::geometry::{Offset, Point};
use std::collections::HashMap;

/// Identifier of a desktop window (`main-window`, `{section}-window`, ...).
pub type WindowId = String;

/// Icon scale of a hovered folder.
pub const FOLDER_HOVER_SCALE: f32 = 1.1;

/// Where a press landed relative to a window header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The header itself.
    Header,
    /// A direct child of the header (title label, icon).
    HeaderChild,
    /// Anything nested deeper inside the header row (the close button).
    Nested,
}

/// Drag state of one window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowDragState {
    is_dragging: bool,
    offset: Offset,
    /// Pointer position minus the offset at press time.
    anchor: Point,
}

impl WindowDragState {
    /// Record a press. Only the header or its direct child starts a drag.
    pub fn press(&mut self, target: HitTarget, pointer: Point) {
        self.anchor = pointer - self.offset;
        if matches!(target, HitTarget::Header | HitTarget::HeaderChild) {
            self.is_dragging = true;
        }
    }

    /// Follow the pointer while dragging. Returns true when the offset moved.
    pub fn move_to(&mut self, pointer: Point) -> bool {
        if !self.is_dragging {
            return false;
        }
        self.offset = pointer - self.anchor;
        true
    }

    pub fn release(&mut self) {
        self.is_dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }
}

/// A window on the desktop.
#[derive(Debug, Clone)]
pub struct DesktopWindow {
    pub id: WindowId,
    pub title: String,
    /// Layout position before any drag.
    pub origin: Point,
    pub size: [f32; 2],
    pub body: WindowBody,
    /// Section windows can be closed; the main window cannot.
    pub closable: bool,
    pub active: bool,
    drag: WindowDragState,
}

impl DesktopWindow {
    fn from_spec(spec: &WindowSpec, closable: bool, active: bool) -> Self {
        Self {
            id: spec.id.clone(),
            title: spec.title.clone(),
            origin: Point::from(spec.position),
            size: spec.size,
            body: spec.body.clone(),
            closable,
            active,
            drag: WindowDragState::default(),
        }
    }

    /// Current on-screen position: layout origin plus accumulated drag.
    pub fn position(&self) -> Point {
        self.origin + self.drag.offset()
    }

    pub fn drag(&self) -> &WindowDragState {
        &self.drag
    }
}

/// A folder icon that opens a section window.
#[derive(Debug, Clone)]
pub struct FolderTrigger {
    pub section: String,
    pub label: String,
    pub icon: String,
    hovered: bool,
}

impl FolderTrigger {
    fn from_spec(spec: &FolderSpec) -> Self {
        Self {
            section: spec.section.clone(),
            label: spec.label.clone(),
            icon: spec.icon.clone(),
            hovered: false,
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn icon_scale(&self) -> f32 {
        if self.hovered {
            FOLDER_HOVER_SCALE
        } else {
            1.0
        }
    }
}

/// All desktop windows and folder icons.
#[derive(Debug, Default)]
pub struct WindowManager {
    /// Windows in layout order; the main window comes first.
    windows: Vec<DesktopWindow>,
    index: HashMap<WindowId, usize>,
    folders: Vec<FolderTrigger>,
}

impl WindowManager {
    /// Build the desktop from its layout. The main window starts visible,
    /// section windows start hidden.
    pub fn from_layout(layout: &DesktopLayout) -> Self {
        let mut manager = Self::default();
        manager.make_draggable(DesktopWindow::from_spec(&layout.main_window, false, true));
        for spec in &layout.windows {
            manager.make_draggable(DesktopWindow::from_spec(spec, true, false));
        }
        manager.folders = layout.folders.iter().map(FolderTrigger::from_spec).collect();

        for folder in &manager.folders {
            if manager.window(&section_window_id(&folder.section)).is_none() {
                log::warn!("Folder \"{}\" has no window to open", folder.section);
            }
        }
        manager
    }

    /// Register a window with its own drag state. A window with an id that
    /// is already registered replaces the earlier one.
    pub fn make_draggable(&mut self, window: DesktopWindow) {
        match self.index.get(&window.id) {
            Some(&i) => {
                log::warn!("Window \"{}\" registered twice", window.id);
                self.windows[i] = window;
            }
            None => {
                self.index.insert(window.id.clone(), self.windows.len());
                self.windows.push(window);
            }
        }
    }

    /// Bind folder clicks and close buttons.
    pub fn bind_handlers(&self, handlers: &mut HandlerMap) {
        for folder in &self.folders {
            handlers.bind(
                Element::Folder(folder.section.clone()),
                Action::OpenSection(folder.section.clone()),
            );
        }
        for window in self.windows.iter().filter(|w| w.closable) {
            handlers.bind(
                Element::CloseButton(window.id.clone()),
                Action::CloseWindow(window.id.clone()),
            );
        }
    }

    pub fn windows(&self) -> &[DesktopWindow] {
        &self.windows
    }

    pub fn window(&self, id: &str) -> Option<&DesktopWindow> {
        self.index.get(id).map(|&i| &self.windows[i])
    }

    fn window_mut(&mut self, id: &str) -> Option<&mut DesktopWindow> {
        self.index.get(id).map(|&i| &mut self.windows[i])
    }

    pub fn folders(&self) -> &[FolderTrigger] {
        &self.folders
    }

    /// Press-down on a window header.
    pub fn pointer_down(&mut self, id: &str, target: HitTarget, pointer: Point) {
        if let Some(window) = self.window_mut(id) {
            window.drag.press(target, pointer);
            if window.drag.is_dragging() {
                log::debug!("Started dragging {}", window.id);
            }
        }
    }

    /// Pointer movement anywhere on the desktop.
    pub fn pointer_move(&mut self, pointer: Point) {
        for window in &mut self.windows {
            window.drag.move_to(pointer);
        }
    }

    /// Pointer release anywhere on the desktop ends every drag.
    pub fn pointer_up(&mut self) {
        for window in &mut self.windows {
            if window.drag.is_dragging() {
                window.drag.release();
                let offset = window.drag.offset();
                log::debug!(
                    "Stopped dragging {} at offset ({:.0}, {:.0})",
                    window.id,
                    offset.dx,
                    offset.dy
                );
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.windows.iter().any(|w| w.drag.is_dragging())
    }

    /// Show the window of a folder section. Other open windows stay open.
    pub fn open_section(&mut self, section: &str) -> bool {
        let id = section_window_id(section);
        match self.window_mut(&id) {
            Some(window) => {
                window.active = true;
                log::info!("Opened {}", id);
                true
            }
            None => {
                log::debug!("No window for section \"{}\"", section);
                false
            }
        }
    }

    /// Hide a closable window.
    pub fn close_window(&mut self, id: &str) -> bool {
        match self.window_mut(id) {
            Some(window) if window.closable => {
                window.active = false;
                log::info!("Closed {}", id);
                true
            }
            _ => false,
        }
    }

    /// Record hover enter / leave on a folder icon.
    pub fn set_folder_hover(&mut self, section: &str, hovered: bool) {
        if let Some(folder) = self.folders.iter_mut().find(|f| f.section == section) {
            folder.hovered = hovered;
        }
    }
}
