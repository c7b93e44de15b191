use crate::ui_state::{Pane, UiState, new_textarea};
use tui_textarea::TextArea;

#[derive(PartialEq, Clone, Debug)]
pub enum PopupType {
    None,
    Error(String),
    StartTime,
}

pub struct PopupState {
    pub current: PopupType,
    pub input: TextArea<'static>,
    pub cached: Pane,
}

impl PopupState {
    pub(crate) fn new() -> PopupState {
        PopupState {
            current: PopupType::None,
            input: new_textarea(""),
            cached: Pane::Popup,
        }
    }

    fn open(&mut self, popup: PopupType) {
        if let PopupType::StartTime = &popup {
            self.input
                .set_placeholder_text(" Start time in seconds (0 - 200): ");
            self.input.select_all();
            self.input.cut();
        }
        self.current = popup
    }

    pub fn is_open(&self) -> bool {
        self.current != PopupType::None
    }

    fn close(&mut self) -> Pane {
        self.current = PopupType::None;
        self.input.select_all();
        self.input.cut();

        self.cached
    }

    fn set_cached_pane(&mut self, pane: Pane) {
        self.cached = pane
    }

    pub fn read_input(&self) -> String {
        self.input.lines().join("")
    }
}

impl UiState {
    pub fn show_popup(&mut self, popup: PopupType) {
        self.popup.open(popup);
        if self.popup.cached == Pane::Popup {
            let current_pane = *self.get_pane();
            self.popup.set_cached_pane(current_pane);
            self.set_pane(Pane::Popup);
        }
    }

    pub fn close_popup(&mut self) {
        let pane = self.popup.close();
        self.popup.cached = Pane::Popup;
        self.set_pane(pane);
    }

    /// Apply the typed start time. Bad input leaves the override untouched.
    pub fn confirm_start_time(&mut self) -> anyhow::Result<()> {
        let input = self.popup.read_input();
        self.settings.playback.start_override.set_from_str(&input)?;
        self.close_popup();
        Ok(())
    }
}
