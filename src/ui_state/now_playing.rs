use super::{ToggleId, UiEvent};
use crate::{
    key_handler::Director,
    player::{Mixer, PlaybackSession, SessionState},
};
use anyhow::Result;
use crossbeam_channel::Sender;
use ratatui::widgets::ListState;

pub const VOLUME_STEP: i16 = 5;

pub struct NowPlayingEntry {
    pub toggle: ToggleId,
    pub name: String,
    pub session: PlaybackSession,
    pub volume: u8,
}

/// Sessions started from the catalog, in the order they were started.
pub struct NowPlaying {
    entries: Vec<NowPlayingEntry>,
    pub pos: ListState,
    initial_volume: u8,
    events: Sender<UiEvent>,
}

impl NowPlaying {
    pub fn new(initial_volume: u8, events: Sender<UiEvent>) -> Self {
        NowPlaying {
            entries: Vec::new(),
            pos: ListState::default(),
            initial_volume: initial_volume.min(100),
            events,
        }
    }

    pub fn entries(&self) -> &[NowPlayingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn playing_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.session.get_state().is_active())
            .count()
    }

    pub fn position(&self, toggle: ToggleId) -> Option<usize> {
        self.entries.iter().position(|e| e.toggle == toggle)
    }

    /// Append a session. A toggle keeps a single row: if it already has one
    /// (left behind when it was switched off), the old session is stopped
    /// and the new one takes its place.
    pub fn add(&mut self, toggle: ToggleId, name: &str, session: PlaybackSession) {
        match self.position(toggle) {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                entry.session.stop();
                entry.session = session;
            }
            None => {
                self.entries.push(NowPlayingEntry {
                    toggle,
                    name: name.to_string(),
                    session,
                    volume: self.initial_volume,
                });
            }
        }

        if self.pos.selected().is_none() {
            self.pos.select(Some(0));
        }
    }

    /// Stop the session first, then drop the row.
    pub fn remove(&mut self, idx: usize) -> Option<ToggleId> {
        if idx >= self.entries.len() {
            return None;
        }

        let mut entry = self.entries.remove(idx);
        entry.session.stop();
        let toggle = entry.toggle;
        tracing::debug!(name = %entry.name, "Removed from now playing");

        self.clamp_selection();
        let _ = self.events.send(UiEvent::SessionRemoved(toggle));

        Some(toggle)
    }

    pub fn remove_selected(&mut self) -> Option<ToggleId> {
        self.pos.selected().and_then(|idx| self.remove(idx))
    }

    /// Stop a toggle's session but keep its row.
    pub fn stop(&mut self, toggle: ToggleId) {
        if let Some(idx) = self.position(toggle) {
            self.entries[idx].session.stop();
        }
    }

    pub fn stop_all(&mut self) {
        for entry in &mut self.entries {
            entry.session.stop();
        }
    }

    pub fn toggle_pause(&mut self, idx: usize) {
        if let Some(entry) = self.entries.get_mut(idx) {
            entry.session.toggle_pause();
        }
    }

    pub fn toggle_pause_selected(&mut self) {
        if let Some(idx) = self.pos.selected() {
            self.toggle_pause(idx);
        }
    }

    /// Per-row volume, but the mixer is system wide: the row touched last
    /// decides what everything sounds like.
    pub fn adjust_volume(&mut self, idx: usize, delta: i16, mixer: &Mixer) -> Result<()> {
        let Some(entry) = self.entries.get_mut(idx) else {
            return Ok(());
        };

        entry.volume = (entry.volume as i16 + delta).clamp(0, 100) as u8;
        mixer.set_volume(entry.volume)
    }

    pub fn adjust_selected_volume(&mut self, delta: i16, mixer: &Mixer) -> Result<()> {
        match self.pos.selected() {
            Some(idx) => self.adjust_volume(idx, delta, mixer),
            None => Ok(()),
        }
    }

    pub fn get_state(&self, idx: usize) -> Option<SessionState> {
        self.entries.get(idx).map(|e| e.session.get_state())
    }

    pub fn scroll(&mut self, director: &Director) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }

        let current = self.pos.selected().unwrap_or(0);
        let new = match director {
            Director::Up(n) => current.saturating_sub(*n),
            Director::Down(n) => (current + n).min(len - 1),
            Director::Top => 0,
            Director::Bottom => len - 1,
        };
        self.pos.select(Some(new));
    }

    fn clamp_selection(&mut self) {
        match self.entries.len() {
            0 => self.pos.select(None),
            len => {
                if let Some(sel) = self.pos.selected() {
                    if sel >= len {
                        self.pos.select(Some(len - 1));
                    }
                }
            }
        }
    }
}
