// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Detail panel controller.
//!
//! Shows and hides project detail panels as overlays and owns the desktop
//! scroll lock: the desktop must not scroll while any detail panel is open.

use crate::models::project::{panel_id, ProjectId};
use std::collections::HashSet;

/// Counted scroll lock. Scrolling is suspended while at least one holder
/// remains.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLock {
    holders: usize,
}

impl ScrollLock {
    pub fn acquire(&mut self) {
        self.holders += 1;
    }

    pub fn release(&mut self) {
        self.holders = self.holders.saturating_sub(1);
    }

    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }
}

/// Active state of every rendered detail panel.
#[derive(Debug, Default)]
pub struct DetailController {
    /// Panels that exist in the rendered output.
    known: HashSet<ProjectId>,
    /// Open panels, oldest first.
    open: Vec<ProjectId>,
    scroll_lock: ScrollLock,
}

impl DetailController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all open panels and track a new set of rendered panels.
    pub fn reset(&mut self, panels: impl IntoIterator<Item = ProjectId>) {
        self.known = panels.into_iter().collect();
        self.open.clear();
        self.scroll_lock = ScrollLock::default();
    }

    /// Open the panel for `id`. Unknown ids and already open panels are
    /// left as they are.
    pub fn show_detail(&mut self, id: ProjectId) -> bool {
        if !self.known.contains(&id) {
            log::debug!("show_detail: no panel {}", panel_id(id));
            return false;
        }
        if self.is_active(id) {
            return false;
        }
        self.open.push(id);
        self.scroll_lock.acquire();
        log::info!("Opened {}", panel_id(id));
        true
    }

    /// Close the panel for `id`. Scrolling comes back once the last open
    /// panel is closed.
    pub fn hide_detail(&mut self, id: ProjectId) -> bool {
        let Some(pos) = self.open.iter().position(|&open| open == id) else {
            log::debug!("hide_detail: {} is not open", panel_id(id));
            return false;
        };
        self.open.remove(pos);
        self.scroll_lock.release();
        log::info!("Closed {}", panel_id(id));
        true
    }

    pub fn is_active(&self, id: ProjectId) -> bool {
        self.open.contains(&id)
    }

    pub fn open_panels(&self) -> &[ProjectId] {
        &self.open
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }
}
