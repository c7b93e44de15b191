use super::POPUP_PADDING;
use crate::{
    player::START_MAX,
    ui_state::{Pane, UiState},
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Padding, Paragraph, StatefulWidget, Widget, Wrap},
};

/// Typed entry for the start time override
pub struct StartTimePopup;
impl StatefulWidget for StartTimePopup {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = state.get_theme(&Pane::Popup);

        let block = Block::bordered()
            .title(" Start Time ")
            .title_bottom(" [Enter] confirm / [Esc] cancel ")
            .title_alignment(Alignment::Center)
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(theme.border))
            .bg(theme.bg_panel)
            .padding(POPUP_PADDING);

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Max(3),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(inner);

        Paragraph::new("Seconds into the clip where new sounds should start:")
            .wrap(Wrap { trim: false })
            .fg(theme.text_focused)
            .render(chunks[0], buf);

        state.popup.input.set_block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .fg(theme.text_highlighted)
                .padding(Padding {
                    left: 1,
                    right: 1,
                    top: 0,
                    bottom: 0,
                }),
        );
        state
            .popup
            .input
            .set_style(Style::new().fg(theme.text_focused));

        state.popup.input.render(chunks[1], buf);

        let current = &state.settings.playback.start_override;
        Paragraph::new(format!(
            "Currently {:.1}s, accepts 0 to {START_MAX:.0}",
            current.seconds
        ))
        .fg(theme.text_faded)
        .centered()
        .render(chunks[2], buf);
    }
}
