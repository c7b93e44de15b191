use super::{
    CatalogView, NowPlaying, Pane, SettingsPanel, UiEvent,
    popup::{PopupState, PopupType},
    theme::Theme,
};
use crate::{
    Config,
    key_handler::{InputContext, MoveDirection},
    library::Catalog,
    player::PlaybackSettings,
};
use anyhow::Error;
use crossbeam_channel::Sender;

pub struct UiState {
    // Components
    pub(crate) catalog: CatalogView,
    pub(crate) now_playing: NowPlaying,
    pub(crate) settings: SettingsPanel,

    // Visual Elements
    pub(crate) theme: Theme,
    pub(crate) popup: PopupState,
    pane: Pane,

    pub(crate) library_root: String,
    status: Option<String>,
    quit: bool,
}

impl UiState {
    pub fn new(catalog: &Catalog, config: &Config, events: Sender<UiEvent>) -> Self {
        UiState {
            catalog: CatalogView::new(catalog, events.clone()),
            now_playing: NowPlaying::new(config.initial_volume, events.clone()),
            settings: SettingsPanel::new(
                PlaybackSettings::new(&config.player),
                config.initial_volume,
                events,
            ),
            theme: Theme::default(),
            popup: PopupState::new(),
            pane: Pane::default(),
            library_root: config.sounds_dir.display().to_string(),
            status: None,
            quit: false,
        }
    }
}

impl UiState {
    pub fn get_pane(&self) -> &Pane {
        &self.pane
    }

    pub fn set_pane(&mut self, pane: Pane) {
        self.pane = pane;
    }

    pub fn cycle_pane(&mut self, dir: MoveDirection) {
        if !self.popup.is_open() {
            self.pane = self.pane.cycle(dir);
        }
    }

    pub fn set_error(&mut self, e: Error) {
        tracing::warn!(error = %format!("{e:#}"), "Shown to user");
        self.show_popup(PopupType::Error(format!("{e:#}")));
    }

    pub fn get_error(&self) -> Option<&str> {
        match &self.popup.current {
            PopupType::Error(e) => Some(e.as_str()),
            _ => None,
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn get_status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn soft_reset(&mut self) {
        if self.popup.is_open() {
            self.close_popup();
        }
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn get_input_context(&self) -> InputContext {
        if self.popup.is_open() {
            return InputContext::Popup(self.popup.current.clone());
        }

        match self.pane {
            Pane::Catalog | Pane::Popup => InputContext::Catalog,
            Pane::NowPlaying => InputContext::NowPlaying,
            Pane::Settings => InputContext::Settings,
        }
    }
}
