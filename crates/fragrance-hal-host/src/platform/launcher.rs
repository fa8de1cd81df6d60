use std::{
    process::{Command, Stdio},
    thread,
};

use fragrance_core::platform::ContentLauncher;
use log::{debug, info, warn};

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(target_os = "windows")]
const OPENER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: &str = "xdg-open";

/// Hands URLs to the desktop's default browser.
///
/// The loop never waits on the opener. A detached thread reaps it, and
/// failures are logged only.
#[derive(Debug, Clone)]
pub struct BrowserLauncher {
    program: String,
}

impl Default for BrowserLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserLauncher {
    pub fn new() -> Self {
        Self::with_program(OPENER)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ContentLauncher for BrowserLauncher {
    fn open(&mut self, url: &str) {
        let spawned = Command::new(&self.program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(err) => {
                warn!("launcher: {} failed for {}: {}", self.program, url, err);
                return;
            }
        };

        let pid = child.id();
        info!("launcher: {} pid={} url={}", self.program, pid, url);

        let reaper = thread::Builder::new()
            .name("launcher-reap".into())
            .spawn(move || match child.wait() {
                Ok(status) => debug!("launcher: pid={} exited {}", pid, status),
                Err(err) => warn!("launcher: pid={} wait failed: {}", pid, err),
            });
        if let Err(err) = reaper {
            warn!("launcher: pid={} left unreaped: {}", pid, err);
        }
    }
}

/// Launcher that only remembers what it was asked to open.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    urls: Vec<String>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }
}

impl ContentLauncher for RecordingLauncher {
    fn open(&mut self, url: &str) {
        info!("launcher: recorded {}", url);
        self.urls.push(url.to_owned());
    }
}
