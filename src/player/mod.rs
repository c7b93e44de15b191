mod invocation;
mod mixer;
mod process;
mod session;
mod settings;
mod state;

pub use invocation::PlayerInvocation;
pub use mixer::Mixer;
pub use process::{ChildProcess, Launcher, Signal, SystemLauncher};
pub use session::PlaybackSession;
pub use settings::{
    EQ_BANDS, EQ_MAX, EQ_MIN, Equalizer, PlaybackSettings, START_MAX, StartOverride,
};
pub use state::SessionState;

#[cfg(test)]
pub(crate) use process::testing;
