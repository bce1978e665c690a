//! Resident memory sampling for the current process.

use sysinfo::{get_current_pid, Pid, ProcessesToUpdate, System};
use tracing::warn;

/// Samples the resident set size of this process.
pub struct ProcessMemory {
    system: System,
    pid: Option<Pid>,
}

impl ProcessMemory {
    /// Create a sampler bound to the current process.
    pub fn new() -> Self {
        let pid = match get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                warn!(error = e, "Process memory is unavailable on this platform");
                None
            }
        };
        Self {
            system: System::new(),
            pid,
        }
    }

    /// Current resident set size in bytes, if the platform reports it.
    pub fn resident_bytes(&mut self) -> Option<u64> {
        let pid = self.pid?;
        self.system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        self.system.process(pid).map(|process| process.memory())
    }
}

impl Default for ProcessMemory {
    fn default() -> Self {
        Self::new()
    }
}

/// Growth between two samples; zero when either is missing or memory shrank.
pub fn memory_growth(before: Option<u64>, after: Option<u64>) -> u64 {
    match (before, after) {
        (Some(before), Some(after)) => after.saturating_sub(before),
        _ => 0,
    }
}
