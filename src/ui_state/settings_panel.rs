use super::UiEvent;
use crate::{
    key_handler::Director,
    player::{EQ_BANDS, PlaybackSettings},
};
use crossbeam_channel::Sender;
use ratatui::widgets::ListState;

const VOLUME_STEP: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    MasterVolume,
    Override,
    StartTime,
    Band(usize),
    ResetEq,
}

impl SettingsRow {
    pub fn all() -> Vec<SettingsRow> {
        let mut rows = vec![
            SettingsRow::MasterVolume,
            SettingsRow::Override,
            SettingsRow::StartTime,
        ];
        rows.extend((0..EQ_BANDS).map(SettingsRow::Band));
        rows.push(SettingsRow::ResetEq);
        rows
    }
}

/// Master volume, start time override and equalizer.
///
/// `playback` is what new player processes are started with.
pub struct SettingsPanel {
    pub playback: PlaybackSettings,
    pub master_volume: u8,
    rows: Vec<SettingsRow>,
    pub pos: ListState,
    events: Sender<UiEvent>,
}

impl SettingsPanel {
    pub fn new(playback: PlaybackSettings, master_volume: u8, events: Sender<UiEvent>) -> Self {
        SettingsPanel {
            playback,
            master_volume: master_volume.min(100),
            rows: SettingsRow::all(),
            pos: ListState::default().with_selected(Some(0)),
            events,
        }
    }

    pub fn rows(&self) -> &[SettingsRow] {
        &self.rows
    }

    pub fn selected_row(&self) -> Option<SettingsRow> {
        self.pos.selected().and_then(|i| self.rows.get(i)).copied()
    }

    pub fn scroll(&mut self, director: &Director) {
        let len = self.rows.len();
        let current = self.pos.selected().unwrap_or(0);
        let new = match director {
            Director::Up(n) => current.saturating_sub(*n),
            Director::Down(n) => (current + n).min(len - 1),
            Director::Top => 0,
            Director::Bottom => len - 1,
        };
        self.pos.select(Some(new));
    }

    /// Nudge the selected row. `steps` are the row's natural unit: one
    /// percent of volume, or 0.1 of seconds/decibels.
    pub fn adjust(&mut self, steps: i32) {
        match self.selected_row() {
            Some(SettingsRow::MasterVolume) => {
                let volume = (self.master_volume as i32 + steps * VOLUME_STEP).clamp(0, 100);
                if volume as u8 != self.master_volume {
                    self.master_volume = volume as u8;
                    let _ = self.events.send(UiEvent::MasterVolume(self.master_volume));
                }
            }
            Some(SettingsRow::StartTime) => self.playback.start_override.adjust(steps),
            Some(SettingsRow::Band(band)) => self.playback.equalizer.adjust(band, steps),
            Some(SettingsRow::Override) => self.playback.start_override.toggle(),
            Some(SettingsRow::ResetEq) | None => (),
        }
    }

    pub fn activate(&mut self) {
        match self.selected_row() {
            Some(SettingsRow::Override) => self.playback.start_override.toggle(),
            Some(SettingsRow::StartTime) => {
                let _ = self.events.send(UiEvent::EditStartTime);
            }
            Some(SettingsRow::ResetEq) => self.playback.equalizer.reset(),
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_state::event_bus;

    fn select(panel: &mut SettingsPanel, row: SettingsRow) {
        let idx = panel.rows().iter().position(|r| *r == row).unwrap();
        panel.pos.select(Some(idx));
    }

    #[test]
    fn has_a_row_per_band() {
        let rows = SettingsRow::all();
        assert_eq!(rows.len(), 3 + EQ_BANDS + 1);
        assert_eq!(rows[3], SettingsRow::Band(0));
        assert_eq!(rows.last(), Some(&SettingsRow::ResetEq));
    }

    #[test]
    fn master_volume_announces_changes_only() {
        let (tx, rx) = event_bus();
        let mut panel = SettingsPanel::new(PlaybackSettings::default(), 99, tx);

        panel.adjust(5);
        assert_eq!(panel.master_volume, 100);
        assert!(matches!(rx.try_recv(), Ok(UiEvent::MasterVolume(100))));

        panel.adjust(1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn reset_clears_the_equalizer() {
        let (tx, _rx) = event_bus();
        let mut panel = SettingsPanel::new(PlaybackSettings::default(), 75, tx);

        select(&mut panel, SettingsRow::Band(4));
        panel.adjust(30);
        assert_eq!(panel.playback.equalizer.get(4), Some(3.0));

        select(&mut panel, SettingsRow::ResetEq);
        panel.activate();
        assert_eq!(panel.playback.equalizer.get(4), Some(0.0));
    }

    #[test]
    fn start_time_row_requests_the_editor() {
        let (tx, rx) = event_bus();
        let mut panel = SettingsPanel::new(PlaybackSettings::default(), 75, tx);

        select(&mut panel, SettingsRow::Override);
        panel.activate();
        assert!(panel.playback.start_override.enabled);

        select(&mut panel, SettingsRow::StartTime);
        panel.adjust(25);
        assert_eq!(panel.playback.start_override.seconds, 2.5);
        panel.activate();
        assert!(matches!(rx.try_recv(), Ok(UiEvent::EditStartTime)));
    }

    #[test]
    fn scrolling_is_clamped() {
        let (tx, _rx) = event_bus();
        let mut panel = SettingsPanel::new(PlaybackSettings::default(), 75, tx);

        panel.scroll(&Director::Up(3));
        assert_eq!(panel.selected_row(), Some(SettingsRow::MasterVolume));
        panel.scroll(&Director::Down(100));
        assert_eq!(panel.selected_row(), Some(SettingsRow::ResetEq));
    }
}
