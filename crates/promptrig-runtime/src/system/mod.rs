//! Host hardware probing.
//!
//! Implements the `SystemProbePort` contract: RAM, CPU, and platform come
//! from sysinfo; model identifier, OS version, and graphics hardware come
//! from best-effort shell probes. Anything that cannot be determined is
//! reported as `None`.

#[cfg(any(target_os = "macos", target_os = "linux"))]
mod commands;

use promptrig_core::domain::SystemReport;
use promptrig_core::ports::SystemProbePort;
use sysinfo::System;

/// Default implementation of `SystemProbePort`.
pub struct DefaultSystemProbe;

impl DefaultSystemProbe {
    /// Create a new default system probe.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultSystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProbePort for DefaultSystemProbe {
    fn system_report(&self) -> SystemReport {
        let sys = System::new_all();

        let processor = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty());

        #[allow(unused_mut)]
        let mut report = SystemReport {
            platform: std::env::consts::OS.to_string(),
            machine_model: None,
            processor,
            total_memory_bytes: sys.total_memory(),
            os_version: System::long_os_version(),
            graphics: None,
        };

        #[cfg(target_os = "macos")]
        {
            report.machine_model = commands::mac_model();
            report.os_version = commands::mac_os_version().or(report.os_version);
            report.graphics = commands::mac_chipset();
        }

        #[cfg(target_os = "linux")]
        {
            report.graphics = commands::linux_graphics();
        }

        report
    }
}
