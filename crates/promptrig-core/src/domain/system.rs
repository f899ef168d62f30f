//! Host hardware facts.

use serde::{Deserialize, Serialize};

/// Facts about the host, recorded alongside saved conversations so results
/// can be compared across machines.
///
/// Fields the probe cannot determine are `None`, never errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemReport {
    /// Operating system family ("linux", "macos", "windows").
    pub platform: String,
    /// Hardware model identifier (e.g. "MacBookPro18,3").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_model: Option<String>,
    /// CPU brand string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    /// Total physical RAM in bytes.
    pub total_memory_bytes: u64,
    /// OS version string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    /// Graphics hardware description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphics: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_and_omits_unknowns() {
        let report = SystemReport {
            platform: "macos".to_string(),
            machine_model: Some("Macmini9,1".to_string()),
            processor: None,
            total_memory_bytes: 17_179_869_184,
            os_version: None,
            graphics: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["machineModel"], "Macmini9,1");
        assert_eq!(json["totalMemoryBytes"], 17_179_869_184u64);
        assert!(json.get("processor").is_none());
        assert!(json.get("osVersion").is_none());
    }
}
