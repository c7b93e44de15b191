/// `Ready -> Playing -> {Paused <-> Playing} -> Stopped`
///
/// `Stopped` is terminal: a stopped session is never started again.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum SessionState {
    #[default]
    Ready,
    Playing,
    Paused,
    Stopped,
}

impl SessionState {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Playing | SessionState::Paused)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Ready => write!(f, "ready"),
            SessionState::Playing => write!(f, "playing"),
            SessionState::Paused => write!(f, "paused"),
            SessionState::Stopped => write!(f, "stopped"),
        }
    }
}
