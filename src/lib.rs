//! # osbench
//!
//! Measure the wall-clock cost, in nanoseconds, of four fundamental
//! operations on the current host:
//!
//! - a simple arithmetic/logical instruction
//! - an empty function call
//! - a trap into the operating-system kernel
//! - a synchronous, unbuffered disk write
//!
//! The numbers are host- and platform-dependent by design. The point is
//! comparison ("how many instructions does one system call cost on this
//! machine?"), not portable absolutes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use osbench::{HostId, OsBench};
//!
//! let host = HostId::detect().ok();
//! let report = OsBench::new().measure(host.as_ref());
//!
//! println!("{}", osbench::output::terminal::format_report(&report));
//! ```
//!
//! Individual primitives are available directly; `0` iterations selects
//! the default count:
//!
//! ```no_run
//! let trap_ns = osbench::measure_syscall(50_000).unwrap();
//! ```
//!
//! ## Measurement approach
//!
//! Each primitive brackets a tight loop between two wall-clock reads and
//! divides the elapsed nanoseconds by the number of operations actually
//! performed. The instruction, function-call, and trap loops run ten
//! operations per pass to amortize loop-control overhead, and route every
//! result through the [`sink`] barrier so the compiler cannot delete the
//! measured work. The disk loop instead writes one aligned block per
//! iteration through an exclusive, synchronous, direct-I/O descriptor, so
//! each write pays real device latency.
//!
//! ## Failure model
//!
//! A primitive that cannot complete (clock read failure, buffer
//! allocation failure, scratch-file trouble) returns a typed error rather
//! than a number, and [`OsBench::measure`] carries that failure through to
//! exactly the affected report fields. The external wire format collapses
//! failures to the historical `-1.0` sentinel; see [`WireReport`].

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod bench;
mod config;
mod constants;
mod error;
mod host;
mod report;

// Functional modules
pub mod measurement;
pub mod output;

// Re-exports for public API
pub use bench::OsBench;
pub use config::{default_scratch_path, Config};
pub use constants::{BLOCK_SIZE, DEFAULT_ITERATIONS, FAILURE_SENTINEL, UNROLL_STRIDE};
pub use error::{HostIdError, MeasureError};
pub use host::HostId;
pub use measurement::{
    clock_resolution_ns, measure_disk_write, measure_disk_write_at, measure_function_call,
    measure_instruction, measure_syscall, sink,
};
pub use report::{ratio, MeasureOutcome, Report, WireReport};

/// Run all four measurements with explicit iteration counts and no host
/// annotation.
///
/// `0` for any count selects the default. Equivalent to configuring an
/// [`OsBench`] and calling [`OsBench::measure`] with no [`HostId`]; use
/// the builder when the report should carry the machine name or the disk
/// scratch path needs overriding.
pub fn measure_all(
    instruction_iterations: u64,
    function_iterations: u64,
    syscall_iterations: u64,
    disk_iterations: u64,
) -> Report {
    OsBench::new()
        .instruction_iterations(instruction_iterations)
        .function_iterations(function_iterations)
        .syscall_iterations(syscall_iterations)
        .disk_iterations(disk_iterations)
        .measure(None)
}
