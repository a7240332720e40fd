//! JSON serialization of measurement reports.
//!
//! Serializes the wire representation, so failed fields appear as `-1.0`
//! exactly as external consumers expect.

use crate::report::Report;

/// Serialize a report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `WireReport`).
pub fn to_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string(&report.to_wire())
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `WireReport`).
pub fn to_json_pretty(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&report.to_wire())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeasureError;
    use crate::report::Report;

    fn make_report() -> Report {
        Report {
            machine_name: "testhost".into(),
            instruction_ns: Ok(0.4),
            function_ns: Ok(1.6),
            trap_ns: Ok(120.0),
            disk_ns: Err(MeasureError::BufferAlloc),
            function_over_instruction: Some(4.0),
            trap_over_instruction: Some(300.0),
            disk_over_instruction: None,
        }
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_report()).unwrap();
        assert!(json.contains("\"machine_name\":\"testhost\""));
        assert!(json.contains("\"disk_ns\":-1.0"));
        assert!(json.contains("\"disk_over_instruction\":-1.0"));
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_pretty(&make_report()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("trap_over_instruction"));
    }
}
