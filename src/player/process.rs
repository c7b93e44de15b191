use std::{
    io,
    os::unix::process::CommandExt,
    process::{Child, Command, Stdio},
};

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Signal {
    Pause,
    Resume,
    Terminate,
}

impl Signal {
    fn raw(self) -> libc::c_int {
        match self {
            Signal::Pause => libc::SIGSTOP,
            Signal::Resume => libc::SIGCONT,
            Signal::Terminate => libc::SIGTERM,
        }
    }
}

/// A running external program.
pub trait ChildProcess {
    fn id(&self) -> u32;
    fn signal(&mut self, signal: Signal) -> io::Result<()>;
    /// Non-blocking. Reaps the process when it has finished.
    fn has_exited(&mut self) -> bool;
}

/// Starts external programs. Sessions and the mixer only ever talk to
/// processes through this seam.
pub trait Launcher {
    fn launch(&self, program: &str, args: &[String]) -> io::Result<Box<dyn ChildProcess>>;
}

pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, program: &str, args: &[String]) -> io::Result<Box<dyn ChildProcess>> {
        // Own process group so pause/resume/stop reach anything the player forks.
        // Output is discarded because the terminal belongs to the UI.
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .process_group(0)
            .spawn()?;

        tracing::debug!(program, pid = child.id(), "Launched");

        Ok(Box::new(SystemProcess { child }))
    }
}

struct SystemProcess {
    child: Child,
}

impl ChildProcess for SystemProcess {
    fn id(&self) -> u32 {
        self.child.id()
    }

    fn signal(&mut self, signal: Signal) -> io::Result<()> {
        // The child leads its own group, so its pid doubles as the group id
        let pgid = self.child.id() as libc::pid_t;

        let ret = unsafe { libc::killpg(pgid, signal.raw()) };
        if ret == -1 {
            return Err(io::Error::last_os_error());
        }

        if signal == Signal::Terminate {
            // Reap if it is already gone; never block on it
            let _ = self.child.try_wait();
        }

        Ok(())
    }

    fn has_exited(&mut self) -> bool {
        !matches!(self.child.try_wait(), Ok(None))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    #[derive(Default)]
    pub struct LaunchLog {
        pub launches: Vec<(String, Vec<String>)>,
        pub signals: Vec<(u32, Signal)>,
        live: HashMap<u32, String>,
        next_id: u32,
    }

    impl LaunchLog {
        pub fn live_count(&self, program: &str) -> usize {
            self.live.values().filter(|p| *p == program).count()
        }

        pub fn signals_for(&self, id: u32) -> Vec<Signal> {
            self.signals
                .iter()
                .filter(|(pid, _)| *pid == id)
                .map(|(_, s)| *s)
                .collect()
        }

        /// Let every live process of `program` run to completion
        pub fn finish(&mut self, program: &str) {
            self.live.retain(|_, p| p != program);
        }
    }

    /// Records launches and signals instead of touching the OS.
    /// Processes stay "live" until they receive `Signal::Terminate`.
    #[derive(Default, Clone)]
    pub struct FakeLauncher {
        pub log: Rc<RefCell<LaunchLog>>,
        pub missing: Vec<String>,
    }

    impl FakeLauncher {
        pub fn without(program: &str) -> Self {
            FakeLauncher {
                missing: vec![program.to_string()],
                ..Default::default()
            }
        }
    }

    impl Launcher for FakeLauncher {
        fn launch(&self, program: &str, args: &[String]) -> io::Result<Box<dyn ChildProcess>> {
            if self.missing.iter().any(|m| m == program) {
                return Err(io::Error::new(io::ErrorKind::NotFound, program.to_string()));
            }

            let mut log = self.log.borrow_mut();
            log.next_id += 1;
            let id = log.next_id;
            log.launches.push((program.to_string(), args.to_vec()));
            log.live.insert(id, program.to_string());

            Ok(Box::new(FakeProcess {
                id,
                log: Rc::clone(&self.log),
            }))
        }
    }

    struct FakeProcess {
        id: u32,
        log: Rc<RefCell<LaunchLog>>,
    }

    impl ChildProcess for FakeProcess {
        fn id(&self) -> u32 {
            self.id
        }

        fn signal(&mut self, signal: Signal) -> io::Result<()> {
            let mut log = self.log.borrow_mut();
            log.signals.push((self.id, signal));
            if signal == Signal::Terminate {
                log.live.remove(&self.id);
            }
            Ok(())
        }

        fn has_exited(&mut self) -> bool {
            !self.log.borrow().live.contains_key(&self.id)
        }
    }
}
