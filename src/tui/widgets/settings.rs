use super::level_bar;
use crate::{
    player::{EQ_MAX, EQ_MIN, START_MAX},
    ui_state::{Pane, SettingsRow, UiState},
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Padding, StatefulWidget},
};

const BAR_WIDTH: usize = 12;

pub struct SettingsView;
impl StatefulWidget for SettingsView {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = state.get_theme(&Pane::Settings);
        let focused = state.get_pane() == Pane::Settings;
        let settings = &state.settings;
        let playback = &settings.playback;

        let items = settings
            .rows()
            .iter()
            .map(|row| {
                let (label, value) = match *row {
                    SettingsRow::MasterVolume => (
                        String::from("Volume"),
                        format!(
                            "{} {:>3}%",
                            level_bar(settings.master_volume as f64 / 100.0, BAR_WIDTH),
                            settings.master_volume
                        ),
                    ),
                    SettingsRow::Override => (
                        String::from("Override"),
                        match playback.start_override.enabled {
                            true => String::from("[x] start time"),
                            false => String::from("[ ] start time"),
                        },
                    ),
                    SettingsRow::StartTime => (
                        String::from("Start"),
                        format!(
                            "{} {:>5.1}s",
                            level_bar(playback.start_override.seconds / START_MAX, BAR_WIDTH),
                            playback.start_override.seconds
                        ),
                    ),
                    SettingsRow::Band(band) => {
                        let gain = playback.equalizer.get(band).unwrap_or(0.0);
                        (
                            format!("EQ {:>2}", band + 1),
                            format!(
                                "{} {gain:>+5.1}",
                                level_bar((gain - EQ_MIN) / (EQ_MAX - EQ_MIN), BAR_WIDTH)
                            ),
                        )
                    }
                    SettingsRow::ResetEq => (String::from("Reset EQ"), String::new()),
                };

                ListItem::new(Line::from_iter([
                    Span::from(format!("{label:<9}")).fg(theme.text_secondary),
                    Span::from(value).fg(theme.text_focused),
                ]))
            })
            .collect::<Vec<_>>();

        let keymaps = match focused {
            true => Line::from(" [h/l] adjust  [⏎] select ")
                .centered()
                .fg(theme.text_faded),
            false => Line::default(),
        };

        let block = Block::bordered()
            .borders(theme.border_display)
            .border_type(theme.border_type)
            .border_style(theme.border)
            .bg(theme.bg_panel)
            .title_top(Line::from(" ⟪ Settings ⟫ ").left_aligned().fg(theme.text_focused))
            .title_bottom(keymaps)
            .padding(Padding::horizontal(1));

        let highlight = match focused {
            true => Style::new().fg(Color::Black).bg(theme.text_highlighted),
            false => Style::new(),
        };

        List::new(items)
            .block(block)
            .highlight_style(highlight)
            .render(area, buf, &mut state.settings.pos);
    }
}
