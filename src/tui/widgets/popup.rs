use super::{ErrorMsg, StartTimePopup};
use crate::ui_state::{PopupType, UiState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Clear, StatefulWidget, Widget},
};

pub struct PopupManager;
impl StatefulWidget for PopupManager {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let popup_rect = match &state.popup.current {
            PopupType::Error(_) => centered_rect(40, 30, area),
            PopupType::StartTime => centered_rect(40, 35, area),
            PopupType::None => return,
        };

        Clear.render(popup_rect, buf);
        match &state.popup.current {
            PopupType::Error(_) => ErrorMsg.render(popup_rect, buf, state),
            PopupType::StartTime => StartTimePopup.render(popup_rect, buf, state),
            PopupType::None => (),
        }
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
