//! The aggregated measurement report and its wire representation.

use serde::{Deserialize, Serialize};

use crate::constants::FAILURE_SENTINEL;
use crate::error::MeasureError;

/// Outcome of one measurement primitive as carried in a [`Report`].
pub type MeasureOutcome = Result<f64, MeasureError>;

/// Everything one `measure` run produced: the four timings, the derived
/// ratios, and the machine the run happened on.
///
/// Produced once per aggregator invocation and immutable from then on. A
/// failed primitive poisons only its own field and the ratios built on it;
/// the report itself always exists in full.
#[derive(Debug)]
pub struct Report {
    /// Machine name from the supplied [`HostId`](crate::HostId), or empty
    /// when none was given.
    pub machine_name: String,

    /// Nanoseconds per simple instruction.
    pub instruction_ns: MeasureOutcome,

    /// Nanoseconds per empty function call.
    pub function_ns: MeasureOutcome,

    /// Nanoseconds per kernel trap.
    pub trap_ns: MeasureOutcome,

    /// Nanoseconds per synchronous block write.
    pub disk_ns: MeasureOutcome,

    /// Function-call cost over instruction cost; `None` when either
    /// measurement failed.
    pub function_over_instruction: Option<f64>,

    /// Trap cost over instruction cost; `None` when either failed.
    pub trap_over_instruction: Option<f64>,

    /// Disk-write cost over instruction cost; `None` when either failed.
    pub disk_over_instruction: Option<f64>,
}

impl Report {
    /// Flatten into the sentinel-based external representation.
    pub fn to_wire(&self) -> WireReport {
        WireReport {
            machine_name: self.machine_name.clone(),
            instruction_ns: wire_value(&self.instruction_ns),
            function_ns: wire_value(&self.function_ns),
            trap_ns: wire_value(&self.trap_ns),
            disk_ns: wire_value(&self.disk_ns),
            function_over_instruction: self.function_over_instruction.unwrap_or(FAILURE_SENTINEL),
            trap_over_instruction: self.trap_over_instruction.unwrap_or(FAILURE_SENTINEL),
            disk_over_instruction: self.disk_over_instruction.unwrap_or(FAILURE_SENTINEL),
        }
    }
}

/// External representation of a [`Report`].
///
/// Every failed field carries [`FAILURE_SENTINEL`] (`-1.0`). Note the
/// sentinel is also a representable timing value; consumers must treat any
/// field equal to `-1.0` as failed. The conflation is part of the wire
/// contract and is resolved inside the crate by typed outcomes instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireReport {
    /// Machine name, possibly empty.
    pub machine_name: String,
    /// Nanoseconds per simple instruction, or `-1.0`.
    pub instruction_ns: f64,
    /// Nanoseconds per empty function call, or `-1.0`.
    pub function_ns: f64,
    /// Nanoseconds per kernel trap, or `-1.0`.
    pub trap_ns: f64,
    /// Nanoseconds per synchronous block write, or `-1.0`.
    pub disk_ns: f64,
    /// Function/instruction ratio, or `-1.0`.
    pub function_over_instruction: f64,
    /// Trap/instruction ratio, or `-1.0`.
    pub trap_over_instruction: f64,
    /// Disk/instruction ratio, or `-1.0`.
    pub disk_over_instruction: f64,
}

fn wire_value(outcome: &MeasureOutcome) -> f64 {
    match outcome {
        Ok(ns) => *ns,
        Err(_) => FAILURE_SENTINEL,
    }
}

/// Ratio of two measurement outcomes.
///
/// A failure on either side yields `None`. A legitimately measured zero
/// denominator is deliberately not guarded: the IEEE quotient (infinity,
/// or NaN for `0/0`) propagates into the report unchanged.
pub fn ratio(numerator: &MeasureOutcome, denominator: &MeasureOutcome) -> Option<f64> {
    match (numerator, denominator) {
        (Ok(num), Ok(den)) => Some(num / den),
        _ => None,
    }
}
