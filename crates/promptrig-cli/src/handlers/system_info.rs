//! System-info command handler.

use anyhow::Result;
use promptrig_core::ports::SystemProbePort;
use promptrig_runtime::DefaultSystemProbe;

/// Print the host report as pretty JSON.
pub fn execute() -> Result<()> {
    let report = DefaultSystemProbe::new().system_report();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
