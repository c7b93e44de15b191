use super::{ChildProcess, Launcher};
use anyhow::{Context, Result};
use std::{cell::RefCell, rc::Rc};

/// System-wide master volume through an external mixer binary
/// (`amixer set Master 75%`).
///
/// There is no per-stream volume: every caller writes the same control and
/// the last write wins.
pub struct Mixer {
    program: String,
    control: String,
    launcher: Rc<dyn Launcher>,
    /// Mixer runs not yet reaped
    running: RefCell<Vec<Box<dyn ChildProcess>>>,
}

impl Mixer {
    pub fn new(program: &str, control: &str, launcher: Rc<dyn Launcher>) -> Self {
        Mixer {
            program: program.to_string(),
            control: control.to_string(),
            launcher,
            running: RefCell::new(Vec::new()),
        }
    }

    pub fn args_for(&self, percent: u8) -> Vec<String> {
        vec![
            String::from("set"),
            self.control.clone(),
            format!("{}%", percent.min(100)),
        ]
    }

    /// Fire and forget. The mixer process is not waited on; runs that
    /// finished since the previous call are reaped first.
    pub fn set_volume(&self, percent: u8) -> Result<()> {
        self.reap();
        let args = self.args_for(percent);

        match self.launcher.launch(&self.program, &args) {
            Ok(process) => {
                tracing::debug!(percent, control = %self.control, "Volume set");
                self.running.borrow_mut().push(process);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(program = %self.program, error = %e, "Mixer unavailable");
                Err(e).with_context(|| format!("Could not run {}", self.program))
            }
        }
    }

    pub fn running(&self) -> usize {
        self.running.borrow().len()
    }

    fn reap(&self) {
        self.running.borrow_mut().retain_mut(|p| !p.has_exited());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::testing::FakeLauncher;

    #[test]
    fn volume_is_sent_as_integer_percentage() {
        let launcher = FakeLauncher::default();
        let mixer = Mixer::new("amixer", "Master", Rc::new(launcher.clone()));

        mixer.set_volume(75).unwrap();
        mixer.set_volume(250).unwrap();

        let log = launcher.log.borrow();
        assert_eq!(log.launches[0].0, "amixer");
        assert_eq!(log.launches[0].1, ["set", "Master", "75%"]);
        assert_eq!(log.launches[1].1, ["set", "Master", "100%"]);
    }

    #[test]
    fn missing_mixer_is_reported_not_fatal() {
        let launcher = FakeLauncher::without("amixer");
        let mixer = Mixer::new("amixer", "Master", Rc::new(launcher));
        assert!(mixer.set_volume(10).is_err());
        assert_eq!(mixer.running(), 0);
    }

    #[test]
    fn finished_mixer_runs_are_reaped_on_the_next_call() {
        let launcher = FakeLauncher::default();
        let mixer = Mixer::new("amixer", "Master", Rc::new(launcher.clone()));

        for percent in [10, 20, 30] {
            mixer.set_volume(percent).unwrap();
        }
        assert_eq!(mixer.running(), 3);

        launcher.log.borrow_mut().finish("amixer");
        mixer.set_volume(40).unwrap();
        assert_eq!(mixer.running(), 1);
    }
}
