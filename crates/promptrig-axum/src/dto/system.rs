//! System information DTOs.

use promptrig_core::domain::SystemReport;
use serde::{Deserialize, Serialize};

/// Host facts DTO for the HTTP API.
///
/// Adds a human-readable memory figure alongside the raw byte count so the
/// browser UI can render it without arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemReportDto {
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    /// Total RAM formatted as "X.XX GB".
    pub memory: String,
    pub total_memory_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphics: Option<String>,
}

impl From<SystemReport> for SystemReportDto {
    fn from(report: SystemReport) -> Self {
        let gib = report.total_memory_bytes as f64 / f64::from(1 << 30);
        Self {
            platform: report.platform,
            machine_model: report.machine_model,
            processor: report.processor,
            memory: format!("{gib:.2} GB"),
            total_memory_bytes: report.total_memory_bytes,
            os_version: report.os_version,
            graphics: report.graphics,
        }
    }
}
