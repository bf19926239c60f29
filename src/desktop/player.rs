// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Music player controller.
//!
//! Each interactive project panel owns one [`MusicPlayer`]: a two-state
//! playback machine (paused / playing) plus the current track index, and
//! the presentational state it drives (playlist markers, now-playing text,
//! transport glyph, visualizer animation). No audio is produced.

use super::renderer::MediaSource;
use crate::models::project::{ProjectId, Song};
use std::collections::BTreeMap;

/// Glyph shown on the transport button while paused.
pub const PLAY_GLYPH: &str = "▶";
/// Glyph shown on the transport button while playing.
pub const PAUSE_GLYPH: &str = "⏸";

/// Transport buttons of the player widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportButton {
    Previous,
    PlayPause,
    Next,
}

impl TransportButton {
    pub fn command(self) -> PlayerCommand {
        match self {
            TransportButton::Previous => PlayerCommand::Previous,
            TransportButton::PlayPause => PlayerCommand::TogglePlay,
            TransportButton::Next => PlayerCommand::Next,
        }
    }
}

/// Input accepted by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    TogglePlay,
    Previous,
    Next,
    Select(usize),
}

/// Play state of the visualizer bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Paused,
}

/// Playback state of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerState {
    pub current_song_index: usize,
    pub is_playing: bool,
}

/// One row of the playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistRow {
    pub label: String,
    pub active: bool,
}

/// Track details shown above the transport controls.
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    pub album_art: MediaSource,
    pub artist: String,
    pub song: String,
}

impl NowPlaying {
    fn from_song(song: &Song) -> Self {
        Self {
            album_art: MediaSource::parse(&song.image),
            artist: song.artist.clone(),
            song: song.song.clone(),
        }
    }
}

/// Decorative bars. The phase only advances while running, so pausing
/// freezes the bars where they are.
#[derive(Debug, Clone, PartialEq)]
pub struct Visualizer {
    bars: usize,
    animation: AnimationState,
    phase: f32,
}

impl Visualizer {
    pub fn new(bars: usize) -> Self {
        Self {
            bars,
            animation: AnimationState::Paused,
            phase: 0.0,
        }
    }

    pub fn bar_count(&self) -> usize {
        self.bars
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    /// Advance the animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.animation == AnimationState::Running {
            self.phase = (self.phase + dt) % 60.0;
        }
    }

    /// Relative bar heights in `[0.2, 1.0]`.
    pub fn bar_heights(&self) -> Vec<f32> {
        (0..self.bars)
            .map(|i| {
                let speed = 1.3 + 0.35 * i as f32;
                let wave = (self.phase * speed * std::f32::consts::TAU + i as f32 * 0.9).sin();
                0.2 + 0.8 * wave.abs()
            })
            .collect()
    }
}

/// Player state machine for a single interactive panel.
#[derive(Debug, Clone)]
pub struct MusicPlayer {
    project_id: ProjectId,
    songs: Vec<Song>,
    state: PlayerState,
    rows: Vec<PlaylistRow>,
    now_playing: NowPlaying,
    visualizer: Visualizer,
}

impl MusicPlayer {
    /// Create a paused player on the first song. Returns `None` for an empty
    /// playlist, since there is no valid current index.
    pub fn new(project_id: ProjectId, songs: Vec<Song>, bars: usize) -> Option<Self> {
        let first = songs.first()?;
        let now_playing = NowPlaying::from_song(first);
        let rows = songs
            .iter()
            .enumerate()
            .map(|(index, song)| PlaylistRow {
                label: format!("{} - {}", song.song, song.artist),
                active: index == 0,
            })
            .collect();

        Some(Self {
            project_id,
            songs,
            state: PlayerState::default(),
            rows,
            now_playing,
            visualizer: Visualizer::new(bars),
        })
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn current_index(&self) -> usize {
        self.state.current_song_index
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    pub fn rows(&self) -> &[PlaylistRow] {
        &self.rows
    }

    pub fn now_playing(&self) -> &NowPlaying {
        &self.now_playing
    }

    pub fn visualizer(&self) -> &Visualizer {
        &self.visualizer
    }

    /// Label of the play/pause button for the current state.
    pub fn transport_glyph(&self) -> &'static str {
        if self.state.is_playing {
            PAUSE_GLYPH
        } else {
            PLAY_GLYPH
        }
    }

    /// Flip between playing and paused. The visualizer follows.
    pub fn toggle_play(&mut self) {
        self.state.is_playing = !self.state.is_playing;
        self.visualizer.animation = if self.state.is_playing {
            AnimationState::Running
        } else {
            AnimationState::Paused
        };
        log::debug!(
            "Player {}: {}",
            self.project_id,
            if self.state.is_playing { "playing" } else { "paused" }
        );
    }

    pub fn previous(&mut self) {
        let n = self.songs.len();
        self.update_song((self.state.current_song_index + n - 1) % n);
    }

    pub fn next(&mut self) {
        let n = self.songs.len();
        self.update_song((self.state.current_song_index + 1) % n);
    }

    /// Jump to a playlist row. Out-of-range rows are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.songs.len() {
            log::warn!("Player {}: no playlist row {}", self.project_id, index);
            return false;
        }
        self.update_song(index);
        true
    }

    pub fn apply(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::TogglePlay => self.toggle_play(),
            PlayerCommand::Previous => self.previous(),
            PlayerCommand::Next => self.next(),
            PlayerCommand::Select(index) => {
                self.select(index);
            }
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.visualizer.tick(dt);
    }

    /// Move the active marker and refresh the now-playing display.
    /// Playback state is left alone.
    fn update_song(&mut self, index: usize) {
        for row in &mut self.rows {
            row.active = false;
        }
        self.rows[index].active = true;
        self.now_playing = NowPlaying::from_song(&self.songs[index]);
        self.state.current_song_index = index;
        log::info!(
            "Player {}: now on \"{}\" by {}",
            self.project_id,
            self.now_playing.song,
            self.now_playing.artist
        );
    }
}

/// Players of every interactive panel, keyed by project id.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: BTreeMap<ProjectId, MusicPlayer>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the player for a rendered panel. Returns false when the
    /// playlist is empty and no player was created.
    pub fn attach(&mut self, project_id: ProjectId, songs: &[Song], bars: usize) -> bool {
        match MusicPlayer::new(project_id, songs.to_vec(), bars) {
            Some(player) => {
                self.players.insert(project_id, player);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    pub fn get(&self, project_id: ProjectId) -> Option<&MusicPlayer> {
        self.players.get(&project_id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Route a command to the player of `project_id`. Unknown ids are no-ops.
    pub fn apply(&mut self, project_id: ProjectId, command: PlayerCommand) -> bool {
        match self.players.get_mut(&project_id) {
            Some(player) => {
                player.apply(command);
                true
            }
            None => false,
        }
    }

    pub fn tick_all(&mut self, dt: f32) {
        for player in self.players.values_mut() {
            player.tick(dt);
        }
    }

    pub fn any_playing(&self) -> bool {
        self.players.values().any(MusicPlayer::is_playing)
    }
}
