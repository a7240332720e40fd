//! Terminal output formatting with colors.

use colored::Colorize;

use crate::report::{MeasureOutcome, Report};

/// Format a report for human-readable terminal output.
pub fn format_report(report: &Report) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(56);

    output.push_str("osbench\n");
    output.push_str(&sep);
    output.push('\n');

    if report.machine_name.is_empty() {
        output.push_str("  Machine: (unknown)\n");
    } else {
        output.push_str(&format!("  Machine: {}\n", report.machine_name));
    }
    output.push('\n');

    output.push_str(&format!(
        "  Instruction:   {}\n",
        format_timing(&report.instruction_ns)
    ));
    output.push_str(&format!(
        "  Function call: {}\n",
        format_timing(&report.function_ns)
    ));
    output.push_str(&format!(
        "  Kernel trap:   {}\n",
        format_timing(&report.trap_ns)
    ));
    output.push_str(&format!(
        "  Disk write:    {}\n",
        format_timing(&report.disk_ns)
    ));
    output.push('\n');

    output.push_str("  Relative to one instruction:\n");
    output.push_str(&format!(
        "    Function call: {}\n",
        format_ratio(report.function_over_instruction)
    ));
    output.push_str(&format!(
        "    Kernel trap:   {}\n",
        format_ratio(report.trap_over_instruction)
    ));
    output.push_str(&format!(
        "    Disk write:    {}\n",
        format_ratio(report.disk_over_instruction)
    ));

    output.push_str(&sep);
    output.push('\n');

    output
}

fn format_timing(outcome: &MeasureOutcome) -> String {
    match outcome {
        Ok(ns) => format!("{}", format!("{ns:>12.2} ns/op").green()),
        Err(err) => format!("{} ({err})", "failed".yellow().bold()),
    }
}

fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(value) => format!("{value:>10.1}x"),
        None => format!("{}", "failed".yellow().bold()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeasureError;

    #[test]
    fn formats_mixed_report() {
        let report = Report {
            machine_name: "box".into(),
            instruction_ns: Ok(0.4),
            function_ns: Ok(1.6),
            trap_ns: Err(MeasureError::BufferAlloc),
            disk_ns: Ok(92_000.0),
            function_over_instruction: Some(4.0),
            trap_over_instruction: None,
            disk_over_instruction: Some(230_000.0),
        };

        let text = format_report(&report);
        assert!(text.contains("Machine: box"));
        assert!(text.contains("ns/op"));
        assert!(text.contains("failed"));
        assert!(text.contains("Relative to one instruction"));
    }

    #[test]
    fn formats_anonymous_machine() {
        let report = Report {
            machine_name: String::new(),
            instruction_ns: Ok(0.4),
            function_ns: Ok(1.6),
            trap_ns: Ok(120.0),
            disk_ns: Ok(92_000.0),
            function_over_instruction: Some(4.0),
            trap_over_instruction: Some(300.0),
            disk_over_instruction: Some(230_000.0),
        };

        assert!(format_report(&report).contains("(unknown)"));
    }
}
