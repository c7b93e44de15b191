use super::{AppLayout, BufferLine, CatalogGroups, NowPlayingList, PopupManager, SettingsView, TabBar};
use crate::UiState;
use ratatui::{
    Frame,
    style::Stylize,
    widgets::{Block, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    let layout = AppLayout::new(f.area(), state);

    Block::new()
        .bg(state.theme.bg_global)
        .render(f.area(), f.buffer_mut());

    TabBar.render(layout.tab_bar, f.buffer_mut(), state);
    CatalogGroups.render(layout.catalog, f.buffer_mut(), state);
    NowPlayingList.render(layout.now_playing, f.buffer_mut(), state);
    SettingsView.render(layout.settings, f.buffer_mut(), state);
    BufferLine.render(layout.buffer_line, f.buffer_mut(), state);

    if state.popup.is_open() {
        PopupManager.render(f.area(), f.buffer_mut(), state);
    }
}
