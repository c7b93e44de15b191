use super::{PAUSE_ICON, PLAY_ICON, STOP_ICON};
use crate::{
    player::SessionState,
    ui_state::{Pane, UiState},
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Padding, Paragraph, StatefulWidget, Widget},
};

pub struct NowPlayingList;
impl StatefulWidget for NowPlayingList {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = state.get_theme(&Pane::NowPlaying);
        let focused = state.get_pane() == Pane::NowPlaying;

        let keymaps = match focused {
            true => Line::from(" [␣] pause  [+/-] volume  [x] remove ")
                .centered()
                .fg(theme.text_faded),
            false => Line::default(),
        };

        let title = format!(
            " ⟪ {} Now Playing ⟫ ",
            state.now_playing.playing_count()
        );

        let block = Block::bordered()
            .borders(theme.border_display)
            .border_type(theme.border_type)
            .border_style(theme.border)
            .bg(theme.bg_panel)
            .title_top(Line::from(title).left_aligned().fg(theme.text_focused))
            .title_bottom(keymaps)
            .padding(Padding::horizontal(1));

        if state.now_playing.is_empty() {
            Paragraph::new("Nothing playing")
                .centered()
                .fg(theme.text_faded)
                .block(block)
                .render(area, buf);
            return;
        }

        let items = state
            .now_playing
            .entries()
            .iter()
            .map(|entry| {
                let session_state = entry.session.get_state();
                let (icon, color) = match session_state {
                    SessionState::Playing => (PLAY_ICON, theme.active),
                    SessionState::Paused => (PAUSE_ICON, theme.text_highlighted),
                    SessionState::Ready | SessionState::Stopped => (STOP_ICON, theme.text_faded),
                };

                let name = match entry.session.has_process() || !session_state.is_active() {
                    true => entry.name.clone(),
                    false => format!("{} (no player)", entry.name),
                };

                ListItem::new(Line::from_iter([
                    Span::from(format!("{icon} ")).fg(color),
                    Span::from(format!("{name:<24}")).fg(theme.text_focused),
                    Span::from(format!("{session_state:<8} ")).fg(theme.text_faded),
                    Span::from(format!("vol {:>3}%", entry.volume)).fg(theme.text_secondary),
                ]))
            })
            .collect::<Vec<_>>();

        let highlight = match focused {
            true => Style::new().fg(Color::Black).bg(theme.text_highlighted),
            false => Style::new(),
        };

        let list = List::new(items).block(block).highlight_style(highlight);
        StatefulWidget::render(list, area, buf, &mut state.now_playing.pos);
    }
}
