use crate::ui_state::UiState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

pub struct BufferLine;

impl StatefulWidget for BufferLine {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = state.get_theme(state.get_pane());

        let status = match state.get_status() {
            Some(s) => Line::from(format!("  {s}"))
                .fg(theme.text_secondary)
                .left_aligned(),
            None => Line::default(),
        };

        let active = state.catalog.active_count();
        let playing = state.now_playing.playing_count();
        let counts = Line::from_iter([
            Span::from(format!("{active} on")).fg(theme.text_faded),
            Span::from(" ✧ ").fg(theme.text_faded),
            Span::from(format!("{playing} playing  ")).fg(theme.text_highlighted),
        ])
        .right_aligned();

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)])
                .areas(area);

        status.render(left, buf);
        counts.render(right, buf);
    }
}
