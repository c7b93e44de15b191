use crate::domain::ClipDescriptor;
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;

/// Identity of one toggle control in the catalog view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToggleId(pub usize);

/// What a component reports after handling input. The application shell
/// drains these after every action and routes them to whoever cares, so
/// components never call into each other directly.
#[derive(Debug, Clone)]
pub enum UiEvent {
    ToggleOn {
        id: ToggleId,
        clip: Arc<ClipDescriptor>,
    },
    ToggleOff(ToggleId),
    Revealed {
        group: String,
        count: usize,
    },
    SessionRemoved(ToggleId),
    MasterVolume(u8),
    EditStartTime,
}

pub fn event_bus() -> (Sender<UiEvent>, Receiver<UiEvent>) {
    crossbeam_channel::unbounded()
}
