use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

/// Memory figures for the serving process, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemoryUsage {
    /// Resident set size.
    pub rss: u64,
    #[serde(rename = "virtual")]
    pub virtual_memory: u64,
}

/// Current UTC time in the same shape as JavaScript's `toISOString()`,
/// e.g. `2026-10-19T13:39:00.123Z`.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn uptime_seconds(started_at: Instant) -> f64 {
    started_at.elapsed().as_secs_f64()
}

/// Snapshot of this process's memory. Falls back to zeros when the platform
/// does not expose per-process figures.
pub fn memory_usage() -> MemoryUsage {
    let pid = match sysinfo::get_current_pid() {
        Ok(pid) => pid,
        Err(e) => {
            tracing::warn!(error = e, "Cannot determine current pid");
            return MemoryUsage::default();
        }
    };

    // A fresh System per call: only our own process is refreshed, and no
    // lock is shared between concurrent health checks.
    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing().with_memory(),
    );

    match system.process(pid) {
        Some(process) => MemoryUsage {
            rss:            process.memory(),
            virtual_memory: process.virtual_memory(),
        },
        None => {
            tracing::warn!(%pid, "Process memory figures unavailable");
            MemoryUsage::default()
        }
    }
}
