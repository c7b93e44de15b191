use super::{ChildProcess, Launcher, PlaybackSettings, PlayerInvocation, SessionState, Signal};
use crate::domain::ClipDescriptor;
use anyhow::{Result, anyhow};
use std::sync::Arc;

/// One playback of one clip.
///
/// Holds at most one child process. The process is released on `stop()`
/// and, failing that, when the session is dropped, so a discarded session
/// can never leave a player running.
pub struct PlaybackSession {
    clip: Arc<ClipDescriptor>,
    process: Option<Box<dyn ChildProcess>>,
    state: SessionState,
}

impl PlaybackSession {
    pub fn new(clip: Arc<ClipDescriptor>) -> Self {
        PlaybackSession {
            clip,
            process: None,
            state: SessionState::Ready,
        }
    }

    /// Start the player.
    ///
    /// Calling this on a playing or paused session does nothing. A stopped
    /// session cannot be restarted. When the player binary cannot be
    /// launched the session still counts as playing, just without sound.
    pub fn play(&mut self, launcher: &dyn Launcher, settings: &PlaybackSettings) -> Result<()> {
        match self.state {
            SessionState::Playing | SessionState::Paused => return Ok(()),
            SessionState::Stopped => {
                return Err(anyhow!(
                    "Session for {} has already been stopped",
                    self.clip.file_name
                ));
            }
            SessionState::Ready => (),
        }

        let invocation = PlayerInvocation::new(&self.clip, settings);

        match launcher.launch(&invocation.program, &invocation.args) {
            Ok(process) => {
                tracing::info!(
                    clip = %self.clip.file_name,
                    pid = process.id(),
                    seek = invocation.seek,
                    "Playback started"
                );
                self.process = Some(process);
            }
            Err(e) => tracing::warn!(
                program = %invocation.program,
                clip = %self.clip.file_name,
                error = %e,
                "Player unavailable, playback skipped"
            ),
        }

        self.state = SessionState::Playing;
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.state == SessionState::Playing {
            self.send(Signal::Pause);
            self.state = SessionState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == SessionState::Paused {
            self.send(Signal::Resume);
            self.state = SessionState::Playing;
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            SessionState::Playing => self.pause(),
            SessionState::Paused => self.resume(),
            _ => (),
        }
    }

    /// Terminate the player and release the handle. Does not wait for the
    /// process to exit.
    pub fn stop(&mut self) {
        if self.state == SessionState::Stopped {
            return;
        }

        self.send(Signal::Terminate);
        if self.state == SessionState::Paused {
            // A stopped process only acts on SIGTERM once continued
            self.send(Signal::Resume);
        }

        if self.process.take().is_some() {
            tracing::info!(clip = %self.clip.file_name, "Playback stopped");
        }
        self.state = SessionState::Stopped;
    }

    fn send(&mut self, signal: Signal) {
        if let Some(process) = self.process.as_mut() {
            if let Err(e) = process.signal(signal) {
                tracing::warn!(
                    pid = process.id(),
                    ?signal,
                    error = %e,
                    "Could not signal player"
                );
            }
        }
    }

    pub fn get_state(&self) -> SessionState {
        self.state
    }

    pub fn get_clip(&self) -> &Arc<ClipDescriptor> {
        &self.clip
    }

    pub fn has_process(&self) -> bool {
        self.process.is_some()
    }

    pub fn pid(&self) -> Option<u32> {
        self.process.as_ref().map(|p| p.id())
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::testing::FakeLauncher;

    fn session(name: &str) -> PlaybackSession {
        PlaybackSession::new(Arc::new(ClipDescriptor::from_path(name, 15)))
    }

    #[test]
    fn play_is_idempotent() {
        let launcher = FakeLauncher::default();
        let settings = PlaybackSettings::default();
        let mut s = session("solo#25.mp3");

        s.play(&launcher, &settings).unwrap();
        s.play(&launcher, &settings).unwrap();
        s.pause();
        s.play(&launcher, &settings).unwrap();

        let log = launcher.log.borrow();
        assert_eq!(log.launches.len(), 1);
        assert_eq!(log.launches[0].1[1], "2.5");
        assert_eq!(s.get_state(), SessionState::Paused);
    }

    #[test]
    fn pause_and_resume_signal_the_process() {
        let launcher = FakeLauncher::default();
        let mut s = session("a.mp3");
        s.play(&launcher, &PlaybackSettings::default()).unwrap();
        let pid = s.pid().unwrap();

        s.toggle_pause();
        assert_eq!(s.get_state(), SessionState::Paused);
        s.toggle_pause();
        assert_eq!(s.get_state(), SessionState::Playing);
        // Resume without pause is a no-op
        s.resume();

        assert_eq!(
            launcher.log.borrow().signals_for(pid),
            [Signal::Pause, Signal::Resume]
        );
    }

    #[test]
    fn stop_is_terminal() {
        let launcher = FakeLauncher::default();
        let settings = PlaybackSettings::default();
        let mut s = session("a.mp3");

        s.play(&launcher, &settings).unwrap();
        s.stop();

        assert_eq!(s.get_state(), SessionState::Stopped);
        assert!(!s.has_process());
        assert_eq!(launcher.log.borrow().live_count("mplayer"), 0);
        assert!(s.play(&launcher, &settings).is_err());
        assert_eq!(launcher.log.borrow().launches.len(), 1);
    }

    #[test]
    fn stopping_a_paused_session_also_continues_it() {
        let launcher = FakeLauncher::default();
        let mut s = session("a.mp3");
        s.play(&launcher, &PlaybackSettings::default()).unwrap();
        let pid = s.pid().unwrap();

        s.pause();
        s.stop();

        assert_eq!(
            launcher.log.borrow().signals_for(pid),
            [Signal::Pause, Signal::Terminate, Signal::Resume]
        );
    }

    #[test]
    fn dropping_a_session_terminates_its_process() {
        let launcher = FakeLauncher::default();
        {
            let mut s = session("a.mp3");
            s.play(&launcher, &PlaybackSettings::default()).unwrap();
            assert_eq!(launcher.log.borrow().live_count("mplayer"), 1);
        }
        assert_eq!(launcher.log.borrow().live_count("mplayer"), 0);
    }

    #[test]
    fn missing_player_leaves_a_silent_session() {
        let launcher = FakeLauncher::without("mplayer");
        let mut s = session("a.mp3");

        s.play(&launcher, &PlaybackSettings::default()).unwrap();
        assert_eq!(s.get_state(), SessionState::Playing);
        assert!(!s.has_process());

        s.pause();
        s.stop();
        assert_eq!(s.get_state(), SessionState::Stopped);
    }

    #[test]
    fn stopping_a_ready_session_needs_no_process() {
        let mut s = session("a.mp3");
        s.stop();
        assert_eq!(s.get_state(), SessionState::Stopped);
    }
}
