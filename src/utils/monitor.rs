#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::{Pid, System};

/// Logs process CPU and memory usage per phase when enabled via `--monitor`.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: Mutex<System>,
    pid: Pid,
    started: Instant,
    peak_memory_mb: Mutex<u64>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new_all();
        system.refresh_all();

        let pid = sysinfo::get_current_pid().expect("Failed to get current PID");

        Self {
            system: Mutex::new(system),
            pid,
            started: Instant::now(),
            peak_memory_mb: Mutex::new(0),
            enabled,
        }
    }

    pub fn log_stats(&self, phase: &str) {
        if !self.enabled {
            return;
        }

        let Ok(mut system) = self.system.lock() else {
            return;
        };
        system.refresh_all();

        let Some(process) = system.process(self.pid) else {
            return;
        };
        let memory_mb = process.memory() / 1024 / 1024;

        let peak_mb = match self.peak_memory_mb.lock() {
            Ok(mut peak) => {
                if memory_mb > *peak {
                    *peak = memory_mb;
                }
                *peak
            }
            Err(_) => memory_mb,
        };

        tracing::info!(
            "📊 {} - CPU: {:.1}%, Memory: {}MB, Peak: {}MB, Time: {:?}",
            phase,
            process.cpu_usage(),
            memory_mb,
            peak_mb,
            self.started.elapsed()
        );
    }

    pub fn log_final_stats(&self) {
        if !self.enabled {
            return;
        }

        let peak_mb = self.peak_memory_mb.lock().map(|peak| *peak).unwrap_or(0);
        tracing::info!(
            "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
            self.started.elapsed(),
            peak_mb
        );
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// No-op implementation when the cli feature is disabled.
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
