use crate::ui_state::{Pane, UiState};
use ratatui::{
    style::Color,
    widgets::{BorderType, Borders},
};

const CHARCOAL: Color = Color::Rgb(25, 25, 25);
const INK: Color = Color::Rgb(10, 10, 10);
const PAPER: Color = Color::Rgb(210, 210, 210);
const SMOKE: Color = Color::Rgb(100, 100, 100);
const EMBER: Color = Color::Rgb(50, 50, 50);
const SIGNAL: Color = Color::Rgb(255, 70, 70);
const SIGNAL_DIM: Color = Color::Rgb(180, 30, 30);
const LAMP: Color = Color::Rgb(220, 220, 100);
const LAMP_DIM: Color = Color::Rgb(130, 130, 60);

/// Colours for one pane, already resolved for its focus state
#[derive(Clone, Copy)]
pub struct DisplayTheme {
    pub bg_panel: Color,
    pub border: Color,
    pub text_focused: Color,
    pub text_secondary: Color,
    pub text_faded: Color,
    pub text_highlighted: Color,
    /// Lit toggles and playing sessions
    pub active: Color,

    pub border_display: Borders,
    pub border_type: BorderType,
}

pub(crate) struct Theme {
    pub bg_global: Color,
    focused: DisplayTheme,
    unfocused: DisplayTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            bg_global: CHARCOAL,
            focused: DisplayTheme {
                bg_panel: CHARCOAL,
                border: LAMP,
                text_focused: PAPER,
                text_secondary: SIGNAL,
                text_faded: SMOKE,
                text_highlighted: LAMP,
                active: SIGNAL,
                border_display: Borders::ALL,
                border_type: BorderType::Rounded,
            },
            unfocused: DisplayTheme {
                bg_panel: INK,
                border: EMBER,
                text_focused: SMOKE,
                text_secondary: SIGNAL_DIM,
                text_faded: SMOKE,
                text_highlighted: LAMP_DIM,
                active: SIGNAL_DIM,
                border_display: Borders::ALL,
                border_type: BorderType::Rounded,
            },
        }
    }
}

impl UiState {
    pub fn get_theme(&self, pane: &Pane) -> DisplayTheme {
        match pane == self.get_pane() {
            true => self.theme.focused,
            false => self.theme.unfocused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, library::Catalog, ui_state::event_bus};

    #[test]
    fn only_the_focused_pane_is_lit() {
        let (tx, _rx) = event_bus();
        let mut state = UiState::new(&Catalog::default(), &Config::default(), tx);
        state.set_pane(Pane::NowPlaying);

        assert_eq!(state.get_theme(&Pane::NowPlaying).border, LAMP);
        assert_eq!(state.get_theme(&Pane::Catalog).border, EMBER);
        assert_eq!(state.get_theme(&Pane::Catalog).active, SIGNAL_DIM);
    }
}
