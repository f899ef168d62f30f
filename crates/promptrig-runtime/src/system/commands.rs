//! Shell probes for the hardware facts sysinfo does not cover.

use std::process::Command;

/// Run a command and return its trimmed stdout, or `None` on any failure.
fn run_capture(cmd: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(cmd).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = stdout.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Hardware model identifier, e.g. "Macmini9,1".
#[cfg(target_os = "macos")]
pub(crate) fn mac_model() -> Option<String> {
    run_capture("sysctl", &["-n", "hw.model"])
        .and_then(|out| out.lines().next().map(|s| s.trim().to_string()))
}

/// Product version, e.g. "14.5".
#[cfg(target_os = "macos")]
pub(crate) fn mac_os_version() -> Option<String> {
    run_capture("sw_vers", &["-productVersion"])
        .and_then(|out| out.lines().next().map(|s| s.trim().to_string()))
}

/// Graphics chipset from the displays profile, e.g. "Apple M1".
#[cfg(target_os = "macos")]
pub(crate) fn mac_chipset() -> Option<String> {
    let profile = run_capture("system_profiler", &["SPDisplaysDataType"])?;
    profile
        .lines()
        .find(|line| line.contains("Chipset Model"))
        .and_then(|line| line.split(':').nth(1))
        .map(|s| s.trim().to_string())
}

/// First VGA/3D controller reported by lspci.
#[cfg(target_os = "linux")]
pub(crate) fn linux_graphics() -> Option<String> {
    let listing = run_capture("lspci", &[])?;
    listing
        .lines()
        .find(|line| line.contains("VGA compatible controller") || line.contains("3D controller"))
        .and_then(|line| line.splitn(3, ':').nth(2))
        .map(|s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_capture_returns_trimmed_stdout() {
        let out = run_capture("echo", &["  hello  "]);
        assert_eq!(out.as_deref(), Some("hello"));
    }

    #[test]
    fn run_capture_is_none_for_missing_commands() {
        assert!(run_capture("definitely_not_a_real_command_12345", &[]).is_none());
    }

    #[test]
    fn run_capture_is_none_for_failing_commands() {
        assert!(run_capture("false", &[]).is_none());
    }
}
