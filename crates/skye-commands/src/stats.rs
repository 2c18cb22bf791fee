//! Process-level statistics created once at startup.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use skye_common::human_timedelta;
use sysinfo::{Pid, System};
use tracing::warn;

/// Start time and memory sampling for the running process.
#[derive(Debug)]
pub struct ProcessStats {
    started_at: DateTime<Utc>,
    pid: Option<Pid>,
    system: Mutex<System>,
}

impl ProcessStats {
    /// Captures the current instant as the process start.
    pub fn new() -> Self {
        Self::started_at(Utc::now())
    }

    /// Uses an explicit start instant.
    pub fn started_at(started_at: DateTime<Utc>) -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                warn!("Memory statistics unavailable: {e}");
                None
            }
        };
        Self {
            started_at,
            pid,
            system: Mutex::new(System::new()),
        }
    }

    /// When the process started.
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time since start, as of `now`.
    pub fn uptime(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.started_at
    }

    /// Uptime rendered as `"2 days, 3 hours and 1 second"` (or `"2d 3h 1s"` when brief).
    pub fn uptime_text(&self, now: DateTime<Utc>, brief: bool) -> String {
        human_timedelta(self.started_at, now, brief, false)
    }

    /// Resident memory of this process in bytes.
    pub fn memory_bytes(&self) -> Option<u64> {
        let pid = self.pid?;
        let mut system = self.system.lock();
        system.refresh_process(pid);
        system.process(pid).map(sysinfo::Process::memory)
    }
}

impl Default for ProcessStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Bytes to mebibytes.
#[allow(clippy::cast_precision_loss)]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}
