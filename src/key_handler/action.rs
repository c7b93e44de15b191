use crate::{
    REFRESH_RATE,
    key_handler::*,
    ui_state::{PopupType, UiState, VOLUME_STEP},
};
use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

use KeyCode::*;

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if let Some(action) = global_commands(&key_event, state) {
        return Some(action);
    }

    match state.get_input_context() {
        InputContext::Popup(popup) => handle_popup(&key_event, &popup),
        InputContext::Catalog => handle_catalog(&key_event),
        InputContext::NowPlaying => handle_now_playing(&key_event),
        InputContext::Settings => handle_settings(&key_event),
    }
}

fn global_commands(key: &KeyEvent, state: &UiState) -> Option<Action> {
    let popup_active = state.popup.is_open();

    // Works everywhere, even in popups
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::QUIT),
        (C, Char('s')) => Some(Action::StopAll),

        // Everything below is text input while a popup is open
        _ if !popup_active => match (key.modifiers, key.code) {
            (X, Char('q')) => Some(Action::QUIT),
            (X, Esc) => Some(Action::SoftReset),

            (X, Tab) => Some(Action::CyclePane(MoveDirection::Next)),
            (S, BackTab) | (X, BackTab) => Some(Action::CyclePane(MoveDirection::Prev)),

            // SCROLLING
            (X, Char('j')) | (X, Down) => Some(Action::Scroll(Director::Down(1))),
            (X, Char('k')) | (X, Up) => Some(Action::Scroll(Director::Up(1))),
            (X, Char('d')) | (X, PageDown) => Some(Action::Scroll(Director::Down(SCROLL_MID))),
            (X, Char('u')) | (X, PageUp) => Some(Action::Scroll(Director::Up(SCROLL_MID))),
            (X, Char('g')) | (X, Home) => Some(Action::Scroll(Director::Top)),
            (S, Char('G')) | (X, End) => Some(Action::Scroll(Director::Bottom)),

            _ => None,
        },
        _ => None,
    }
}

fn handle_catalog(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Enter) | (X, Char(' ')) => Some(Action::Activate),

        (X, Char('[')) => Some(Action::CycleTab(MoveDirection::Prev)),
        (X, Char(']')) => Some(Action::CycleTab(MoveDirection::Next)),
        (X, Char(c @ '1'..='9')) => c
            .to_digit(10)
            .map(|d| Action::SelectTab(d as usize - 1)),

        (X, Left) | (X, Char('h')) => Some(Action::ShiftGroup(MoveDirection::Prev)),
        (X, Right) | (X, Char('l')) => Some(Action::ShiftGroup(MoveDirection::Next)),

        _ => None,
    }
}

fn handle_now_playing(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Char(' ')) | (X, Char('p')) | (X, Enter) => Some(Action::TogglePause),

        (X, Char('+')) | (S, Char('+')) | (X, Char('=')) | (X, Right) | (X, Char('l')) => {
            Some(Action::AdjustVolume(VOLUME_STEP))
        }
        (X, Char('-')) | (X, Left) | (X, Char('h')) => Some(Action::AdjustVolume(-VOLUME_STEP)),

        (X, Char('x')) | (X, Delete) | (X, Backspace) => Some(Action::RemoveEntry),
        _ => None,
    }
}

fn handle_settings(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Enter) | (X, Char(' ')) => Some(Action::Activate),

        (X, Right) | (X, Char('l')) => Some(Action::Adjust(FINE)),
        (X, Left) | (X, Char('h')) => Some(Action::Adjust(-FINE)),
        (S, Right) | (S, Char('L')) => Some(Action::Adjust(COARSE)),
        (S, Left) | (S, Char('H')) => Some(Action::Adjust(-COARSE)),

        _ => None,
    }
}

fn handle_popup(key: &KeyEvent, popup: &PopupType) -> Option<Action> {
    match popup {
        PopupType::Error(_) => Some(Action::ClosePopup),
        PopupType::StartTime => match key.code {
            Esc => Some(Action::ClosePopup),
            Enter => Some(Action::PopupConfirm),
            _ => Some(Action::PopupInput(*key)),
        },
        PopupType::None => None,
    }
}

pub fn next_event() -> Result<Option<Event>> {
    match event::poll(Duration::from_millis(REFRESH_RATE))? {
        true => Ok(Some(event::read()?)),
        false => Ok(None),
    }
}
