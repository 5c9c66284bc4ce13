use cs_core::errors::{CsError, ErrorInfo};

use crate::SocietyReport;

/// Serialises an analysis report into indented JSON.
pub fn report_to_json(report: &SocietyReport) -> Result<String, CsError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| CsError::Serde(ErrorInfo::new("report-serialize", err.to_string())))
}

/// Deserialises an analysis report from JSON text.
pub fn report_from_json(json: &str) -> Result<SocietyReport, CsError> {
    serde_json::from_str(json)
        .map_err(|err| CsError::Serde(ErrorInfo::new("report-deserialize", err.to_string())))
}
