use crate::{
    Config, overwrite_line,
    domain::ClipDescriptor,
    key_handler::{self, Action},
    library::Catalog,
    player::{Launcher, Mixer, PlaybackSession, SystemLauncher},
    tui,
    ui_state::{Pane, PopupType, ToggleId, UiEvent, UiState, event_bus},
};
use anyhow::Result;
use crossbeam_channel::Receiver;
use ratatui::crossterm::event::{Event, KeyEventKind};
use std::{rc::Rc, sync::Arc};

pub struct Soundboard {
    launcher: Rc<dyn Launcher>,
    mixer: Mixer,
    ui: UiState,
    events: Receiver<UiEvent>,
}

impl Soundboard {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self::with_launcher(config, catalog, Rc::new(SystemLauncher))
    }

    pub fn with_launcher(config: Config, catalog: Catalog, launcher: Rc<dyn Launcher>) -> Self {
        let (tx, rx) = event_bus();
        let mixer = Mixer::new(&config.mixer, &config.mixer_control, Rc::clone(&launcher));

        tracing::info!(
            clips = catalog.clip_count(),
            categories = catalog.categories.len(),
            player = %config.player,
            "Soundboard ready"
        );

        Soundboard {
            ui: UiState::new(&catalog, &config, tx),
            launcher,
            mixer,
            events: rx,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        // MAIN ROUTINE
        let outcome = loop {
            match key_handler::next_event() {
                Ok(Some(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_handler::handle_key_event(key, &self.ui) {
                        if let Err(e) = self.handle_action(action) {
                            self.ui.set_error(e);
                        }
                    }
                }
                Ok(_) => (),
                Err(e) => break Err(e),
            }

            self.drain_events();

            if let Err(e) = terminal.draw(|f| tui::render(f, &mut self.ui)) {
                break Err(e.into());
            }

            if self.ui.should_quit() {
                break Ok(());
            }
        };

        // Stop players before giving the terminal back
        self.ui.now_playing.stop_all();
        tracing::info!("Shutting down");

        ratatui::restore();
        overwrite_line("Soundboard closed.\n");

        outcome
    }
}

impl Soundboard {
    #[rustfmt::skip]
    fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Catalog
            Action::CycleTab(d)     => self.ui.catalog.cycle_tab(d),
            Action::SelectTab(i)    => self.ui.catalog.select_tab(i),
            Action::ShiftGroup(d)   => self.ui.catalog.shift_group(d),

            // Now Playing
            Action::TogglePause     => self.ui.now_playing.toggle_pause_selected(),
            Action::AdjustVolume(v) => self.adjust_volume(v),
            Action::RemoveEntry     => { self.ui.now_playing.remove_selected(); }
            Action::StopAll         => self.stop_all(),

            // Settings
            Action::Adjust(steps)   => self.ui.settings.adjust(steps),

            // Popups
            Action::PopupInput(key) => { self.ui.popup.input.input(key); }
            Action::PopupConfirm    => self.ui.confirm_start_time()?,
            Action::ClosePopup      => self.ui.close_popup(),

            // Shared
            Action::Activate        => self.activate(),
            Action::Scroll(d)       => self.scroll(d),
            Action::CyclePane(d)    => self.ui.cycle_pane(d),
            Action::SoftReset       => self.ui.soft_reset(),
            Action::QUIT            => self.ui.request_quit(),
        }
        Ok(())
    }

    fn activate(&mut self) {
        match *self.ui.get_pane() {
            Pane::Catalog => self.ui.catalog.activate(),
            Pane::Settings => self.ui.settings.activate(),
            Pane::NowPlaying => self.ui.now_playing.toggle_pause_selected(),
            Pane::Popup => (),
        }
    }

    fn scroll(&mut self, director: key_handler::Director) {
        match *self.ui.get_pane() {
            Pane::Catalog => self.ui.catalog.scroll(&director),
            Pane::NowPlaying => self.ui.now_playing.scroll(&director),
            Pane::Settings => self.ui.settings.scroll(&director),
            Pane::Popup => (),
        }
    }

    fn adjust_volume(&mut self, delta: i16) {
        if let Err(e) = self.ui.now_playing.adjust_selected_volume(delta, &self.mixer) {
            self.ui.set_status(format!("{e:#}"));
        }
    }

    /// Stop every session and switch every toggle off. Rows stay.
    fn stop_all(&mut self) {
        self.ui.now_playing.stop_all();

        let toggles = self
            .ui
            .now_playing
            .entries()
            .iter()
            .map(|e| e.toggle)
            .collect::<Vec<_>>();
        for id in toggles {
            self.ui.catalog.set_toggle(id, false);
        }

        self.ui.set_status("Stopped all sounds");
    }
}

impl Soundboard {
    /// Route everything the components reported since the last pass.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                UiEvent::ToggleOn { id, clip } => self.start_clip(id, clip),
                UiEvent::ToggleOff(id) => {
                    self.ui.now_playing.stop(id);
                    self.ui.clear_status();
                }
                UiEvent::SessionRemoved(id) => self.ui.catalog.set_toggle(id, false),
                UiEvent::MasterVolume(percent) => {
                    if let Err(e) = self.mixer.set_volume(percent) {
                        self.ui.set_status(format!("{e:#}"));
                    }
                }
                UiEvent::EditStartTime => self.ui.show_popup(PopupType::StartTime),
                UiEvent::Revealed { group, count } => {
                    tracing::debug!(%group, count, "Revealed deferred clips")
                }
            }
        }
    }

    fn start_clip(&mut self, id: ToggleId, clip: Arc<ClipDescriptor>) {
        let mut session = PlaybackSession::new(Arc::clone(&clip));

        if let Err(e) = session.play(self.launcher.as_ref(), &self.ui.settings.playback) {
            self.ui.catalog.set_toggle(id, false);
            self.ui.set_error(e);
            return;
        }

        match session.has_process() {
            true => self.ui.set_status(format!("Playing: {}", clip.file_name)),
            false => self.ui.set_status(format!(
                "Player unavailable, {} is silent",
                clip.file_name
            )),
        }

        self.ui.now_playing.add(id, &clip.label, session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Library,
        key_handler::{Director, MoveDirection},
        player::{SessionState, Signal, testing::FakeLauncher},
        ui_state::SettingsRow,
    };
    use std::fs;

    fn board(files: &[&str], launcher: &FakeLauncher) -> (tempfile::TempDir, Soundboard) {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("drums").join("kit");
        fs::create_dir_all(&dir).unwrap();
        for file in files {
            fs::write(dir.join(file), b"").unwrap();
        }

        let catalog = Library::new(tmp.path(), 10, 15).scan().unwrap();
        let board = Soundboard::with_launcher(
            Config::default(),
            catalog,
            Rc::new(launcher.clone()),
        );
        (tmp, board)
    }

    fn press(board: &mut Soundboard, action: Action) {
        board.handle_action(action).unwrap();
        board.drain_events();
    }

    fn first_toggle(board: &Soundboard) -> ToggleId {
        board.ui.catalog.tabs[0].groups[0].toggles[0].id
    }

    #[test]
    fn toggling_keeps_one_player_per_control() {
        let launcher = FakeLauncher::default();
        let (_tmp, mut board) = board(&["kick.wav"], &launcher);

        press(&mut board, Action::Activate);
        assert_eq!(launcher.log.borrow().live_count("mplayer"), 1);
        assert_eq!(board.ui.now_playing.len(), 1);

        press(&mut board, Action::Activate);
        assert_eq!(launcher.log.borrow().live_count("mplayer"), 0);
        assert_eq!(board.ui.now_playing.len(), 1);
        assert_eq!(board.ui.now_playing.get_state(0), Some(SessionState::Stopped));

        press(&mut board, Action::Activate);
        assert_eq!(launcher.log.borrow().live_count("mplayer"), 1);
        assert_eq!(board.ui.now_playing.len(), 1);
        assert_eq!(board.ui.now_playing.get_state(0), Some(SessionState::Playing));
    }

    #[test]
    fn removing_an_entry_switches_its_toggle_off() {
        let launcher = FakeLauncher::default();
        let (_tmp, mut board) = board(&["kick.wav"], &launcher);

        press(&mut board, Action::Activate);
        let id = first_toggle(&board);
        assert!(board.ui.catalog.find(id).unwrap().active);

        board.ui.set_pane(Pane::NowPlaying);
        press(&mut board, Action::RemoveEntry);

        assert!(board.ui.now_playing.is_empty());
        assert!(!board.ui.catalog.find(id).unwrap().active);
        assert_eq!(launcher.log.borrow().live_count("mplayer"), 0);
    }

    #[test]
    fn encoded_offset_reaches_the_player() {
        let launcher = FakeLauncher::default();
        let (_tmp, mut board) = board(&["solo#25.mp3"], &launcher);

        press(&mut board, Action::Activate);

        let log = launcher.log.borrow();
        let (program, args) = &log.launches[0];
        assert_eq!(program, "mplayer");
        assert_eq!(args[0], "-ss");
        assert_eq!(args[1], "2.5");
        assert!(args.last().unwrap().ends_with("solo#25.mp3"));
    }

    #[test]
    fn start_override_applies_to_new_sessions() {
        let launcher = FakeLauncher::default();
        let (_tmp, mut board) = board(&["solo#25.mp3"], &launcher);

        board.ui.set_pane(Pane::Settings);
        press(&mut board, Action::Scroll(Director::Down(1)));
        assert_eq!(board.ui.settings.selected_row(), Some(SettingsRow::Override));
        press(&mut board, Action::Activate);
        press(&mut board, Action::Scroll(Director::Down(1)));
        press(&mut board, Action::Adjust(10));

        board.ui.set_pane(Pane::Catalog);
        press(&mut board, Action::Activate);

        assert_eq!(launcher.log.borrow().launches[0].1[1], "1");
    }

    #[test]
    fn twelve_clips_page_at_ten() {
        let launcher = FakeLauncher::default();
        let files = (0..12).map(|i| format!("hit{i:02}.wav")).collect::<Vec<_>>();
        let names = files.iter().map(String::as_str).collect::<Vec<_>>();
        let (_tmp, mut board) = board(&names, &launcher);

        let group = &board.ui.catalog.tabs[0].groups[0];
        assert_eq!(group.toggles.len(), 10);
        assert!(group.has_more());

        press(&mut board, Action::Scroll(Director::Bottom));
        press(&mut board, Action::Activate);

        let group = &board.ui.catalog.tabs[0].groups[0];
        assert_eq!(group.toggles.len(), 12);
        assert!(!group.has_more());
        assert_eq!(group.item_count(), 12);
        // Revealing plays nothing
        assert!(launcher.log.borrow().launches.is_empty());
    }

    #[test]
    fn missing_player_still_registers_the_session() {
        let launcher = FakeLauncher::without("mplayer");
        let (_tmp, mut board) = board(&["kick.wav"], &launcher);

        press(&mut board, Action::Activate);

        assert_eq!(board.ui.now_playing.len(), 1);
        assert_eq!(board.ui.now_playing.get_state(0), Some(SessionState::Playing));
        assert!(board.ui.get_status().unwrap().contains("unavailable"));
    }

    #[test]
    fn pausing_signals_the_player() {
        let launcher = FakeLauncher::default();
        let (_tmp, mut board) = board(&["kick.wav"], &launcher);

        press(&mut board, Action::Activate);
        board.ui.set_pane(Pane::NowPlaying);
        press(&mut board, Action::TogglePause);

        let pid = board.ui.now_playing.entries()[0].session.pid().unwrap();
        assert_eq!(launcher.log.borrow().signals_for(pid), [Signal::Pause]);
        assert_eq!(board.ui.now_playing.get_state(0), Some(SessionState::Paused));
    }

    #[test]
    fn stop_all_switches_everything_off() {
        let launcher = FakeLauncher::default();
        let (_tmp, mut board) = board(&["kick.wav", "snare.wav"], &launcher);

        press(&mut board, Action::Activate);
        press(&mut board, Action::Scroll(Director::Down(1)));
        press(&mut board, Action::Activate);
        assert_eq!(board.ui.catalog.active_count(), 2);

        press(&mut board, Action::StopAll);
        assert_eq!(board.ui.catalog.active_count(), 0);
        assert_eq!(board.ui.now_playing.playing_count(), 0);
        assert_eq!(launcher.log.borrow().live_count("mplayer"), 0);
    }

    #[test]
    fn master_volume_goes_through_the_mixer() {
        let launcher = FakeLauncher::default();
        let (_tmp, mut board) = board(&["kick.wav"], &launcher);

        board.ui.set_pane(Pane::Settings);
        press(&mut board, Action::Adjust(-10));

        let log = launcher.log.borrow();
        assert_eq!(log.launches[0].0, "amixer");
        assert_eq!(log.launches[0].1, ["set", "Master", "65%"]);
    }

    #[test]
    fn bad_start_time_keeps_the_popup_flow_alive() {
        let launcher = FakeLauncher::default();
        let (_tmp, mut board) = board(&["kick.wav"], &launcher);

        board.ui.show_popup(PopupType::StartTime);
        board.ui.popup.input.insert_str("abc");
        let err = board.handle_action(Action::PopupConfirm);
        assert!(err.is_err());
        assert!(!board.ui.settings.playback.start_override.enabled);

        board.ui.popup.input.select_all();
        board.ui.popup.input.cut();
        board.ui.popup.input.insert_str("12.5");
        press(&mut board, Action::PopupConfirm);
        assert_eq!(board.ui.settings.playback.start_override.seconds, 12.5);
        assert!(!board.ui.popup.is_open());
    }

    #[test]
    fn tabs_cycle_within_bounds() {
        let launcher = FakeLauncher::default();
        let (_tmp, mut board) = board(&["kick.wav"], &launcher);

        press(&mut board, Action::CycleTab(MoveDirection::Next));
        assert_eq!(board.ui.catalog.selected_tab(), 0);
    }
}
