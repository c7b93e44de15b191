mod action;

pub use action::handle_key_event;
pub use action::next_event;

use ratatui::crossterm::event::KeyEvent;
use ratatui::crossterm::event::KeyModifiers;

use crate::ui_state::PopupType;

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

const SCROLL_MID: usize = 5;
const FINE: i32 = 1;
const COARSE: i32 = 10;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    // Catalog
    CycleTab(MoveDirection),
    SelectTab(usize),
    ShiftGroup(MoveDirection),
    Activate,

    // Now Playing
    TogglePause,
    AdjustVolume(i16),
    RemoveEntry,
    StopAll,

    // Settings
    Adjust(i32),

    // Popups
    PopupInput(KeyEvent),
    PopupConfirm,
    ClosePopup,

    // Shared
    Scroll(Director),
    CyclePane(MoveDirection),
    SoftReset,
    QUIT,
}

pub enum InputContext {
    Catalog,
    NowPlaying,
    Settings,
    Popup(PopupType),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Director {
    Up(usize),
    Down(usize),
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Prev,
    Next,
}
