use crate::key_handler::MoveDirection;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    #[default]
    Catalog,
    NowPlaying,
    Settings,
    Popup,
}

impl PartialEq<Pane> for &Pane {
    fn eq(&self, other: &Pane) -> bool {
        std::mem::discriminant(*self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for Pane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pane::Catalog => write!(f, "catalog"),
            Pane::NowPlaying => write!(f, "now playing"),
            Pane::Settings => write!(f, "settings"),
            Pane::Popup => write!(f, "popup"),
        }
    }
}

impl Pane {
    const CYCLE: [Pane; 3] = [Pane::Catalog, Pane::NowPlaying, Pane::Settings];

    /// Next focusable pane. The popup is never part of the cycle.
    pub fn cycle(self, dir: MoveDirection) -> Pane {
        let len = Self::CYCLE.len();
        let Some(idx) = Self::CYCLE.iter().position(|p| *p == self) else {
            return self;
        };

        match dir {
            MoveDirection::Next => Self::CYCLE[(idx + 1) % len],
            MoveDirection::Prev => Self::CYCLE[(idx + len - 1) % len],
        }
    }
}
