mod buffer_line;
mod catalog;
mod error;
mod now_playing;
mod popup;
mod settings;
mod start_time;

pub use buffer_line::BufferLine;
pub use catalog::{CatalogGroups, TabBar};
pub use error::ErrorMsg;
pub use now_playing::NowPlayingList;
pub use popup::PopupManager;
pub use settings::SettingsView;
pub use start_time::StartTimePopup;

const PAUSE_ICON: &str = "󰏤";
const PLAY_ICON: &str = "▶";
const STOP_ICON: &str = "■";

static POPUP_PADDING: ratatui::widgets::Padding = ratatui::widgets::Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 1,
};

/// `▕██████····▏` with `fraction` of `width` cells filled
fn level_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("▕{}{}▏", "█".repeat(filled), "·".repeat(width - filled))
}
