//! Shared constants for measurement and reporting.

/// Iterations substituted when a caller passes `0`.
pub const DEFAULT_ITERATIONS: u64 = 1000;

/// Operations performed per pass of an unrolled measurement loop.
///
/// The loop counter advances by this stride, so the number of completed
/// operations may exceed the requested iteration count by up to
/// `UNROLL_STRIDE - 1`.
pub const UNROLL_STRIDE: u64 = 10;

/// Nanoseconds per whole second, as used in elapsed-time conversion.
pub const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Nanoseconds per microsecond.
pub const NANOS_PER_MICRO: f64 = 1_000.0;

/// Size in bytes of one disk-measurement write, and the alignment of the
/// write buffer (both required by `O_DIRECT`).
pub const BLOCK_SIZE: usize = 4096;

/// Capacity of the hostname buffer handed to `gethostname`.
pub const HOSTNAME_MAX: usize = 256;

/// File name of the disk-measurement scratch file under the system temp
/// directory. Two processes measuring at the same time against the same
/// path will collide: the exclusive create fails for the second one.
pub const SCRATCH_FILE_NAME: &str = "osbench-scratch.dat";

/// Value standing in for a failed measurement in the wire report.
///
/// `-1.0` is also a representable (if nonsensical) timing value; the
/// conflation is inherited from the wire format and cannot be resolved
/// there. Inside the crate, failures are typed instead.
pub const FAILURE_SENTINEL: f64 = -1.0;
