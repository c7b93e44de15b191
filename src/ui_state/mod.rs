mod catalog_view;
mod events;
mod now_playing;
mod pane;
mod popup;
mod settings_panel;
mod theme;
mod ui_state;

pub use catalog_view::{CatalogView, ClipToggle, GroupItem, GroupView, TabView};
pub use events::{ToggleId, UiEvent, event_bus};
pub use now_playing::{NowPlaying, NowPlayingEntry, VOLUME_STEP};
pub use pane::Pane;
pub use popup::PopupType;
pub use settings_panel::{SettingsPanel, SettingsRow};
pub use theme::*;
pub use ui_state::UiState;

fn new_textarea(placeholder: &str) -> tui_textarea::TextArea<'static> {
    let mut input = tui_textarea::TextArea::default();
    input.set_cursor_line_style(ratatui::style::Style::default());
    input.set_placeholder_text(format!(" {placeholder}: "));

    input
}
