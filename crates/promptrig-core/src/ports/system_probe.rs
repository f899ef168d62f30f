//! System probe port for host hardware reporting.
//!
//! Core owns the trait and the report type; the active probing (sysinfo,
//! shell commands) lives in `promptrig-runtime`.

use crate::domain::SystemReport;

/// Port for collecting host hardware facts.
///
/// Probing is best-effort by contract: fields that cannot be determined come
/// back as `None`, never as errors.
pub trait SystemProbePort: Send + Sync {
    /// Collect a report on the current host.
    fn system_report(&self) -> SystemReport;
}
