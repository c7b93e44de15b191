use crate::ui_state::UiState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

const SETTINGS_WIDTH: u16 = 36;
const TAB_BAR_HEIGHT: u16 = 3;
const NOW_PLAYING_MIN: u16 = 4;
const NOW_PLAYING_MAX: u16 = 12;

pub struct AppLayout {
    pub tab_bar: Rect,
    pub catalog: Rect,
    pub now_playing: Rect,
    pub settings: Rect,
    pub buffer_line: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, state: &UiState) -> Self {
        let now_playing_height = now_playing_height(state.now_playing.len());

        let [upper_block, buffer_line] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .areas(area);

        let [left_block, settings] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(SETTINGS_WIDTH)])
            .areas(upper_block);

        let [tab_bar, catalog, now_playing] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TAB_BAR_HEIGHT),
                Constraint::Min(6),
                Constraint::Length(now_playing_height),
            ])
            .areas(left_block);

        AppLayout {
            tab_bar,
            catalog,
            now_playing,
            settings,
            buffer_line,
        }
    }
}

/// One row per entry plus two for the borders
fn now_playing_height(entries: usize) -> u16 {
    u16::try_from(entries)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .clamp(NOW_PLAYING_MIN, NOW_PLAYING_MAX)
}
