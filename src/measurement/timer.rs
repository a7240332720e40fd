//! Wall-clock timing at second + microsecond resolution.
//!
//! Measurements bracket an unrolled work loop between two `gettimeofday`
//! reads and divide the elapsed nanoseconds by the number of operations
//! actually completed. The clock read is fallible; a failed read aborts the
//! measurement with no partial result.

use std::hint::black_box;
use std::io;
use std::ptr;

use crate::config::effective_iterations;
use crate::constants::{NANOS_PER_MICRO, NANOS_PER_SEC, UNROLL_STRIDE};
use crate::error::MeasureError;

/// Optimization barrier for measured work.
///
/// Every unit of work inside a measurement loop is routed through this
/// function so the compiler must materialize the value instead of deleting
/// the computation as dead code. Thin wrapper over [`std::hint::black_box`].
#[inline]
pub fn sink<T>(value: T) -> T {
    black_box(value)
}

/// One wall-clock reading: whole seconds plus a microsecond fraction.
///
/// Transient and stack-scoped; a pair of these lives only for the duration
/// of a single primitive call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Timestamp {
    sec: i64,
    usec: i64,
}

impl Timestamp {
    /// Read the current wall-clock time.
    pub(crate) fn now() -> Result<Self, MeasureError> {
        let mut tv = libc::timeval {
            tv_sec: 0,
            tv_usec: 0,
        };
        // SAFETY: `tv` is a valid, writable timeval and a null timezone is
        // permitted by the gettimeofday contract.
        let rc = unsafe { libc::gettimeofday(&mut tv, ptr::null_mut()) };
        if rc != 0 {
            return Err(MeasureError::Clock(io::Error::last_os_error()));
        }
        Ok(Self {
            sec: tv.tv_sec as i64,
            usec: tv.tv_usec as i64,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(sec: i64, usec: i64) -> Self {
        Self { sec, usec }
    }
}

/// Elapsed nanoseconds between two timestamps, divided by the number of
/// operations performed in that window.
///
/// Callers guarantee `operations >= 1`: the unrolled loop always completes
/// at least one full stride, and iteration validation never yields zero.
pub(crate) fn elapsed_ns_per_op(start: Timestamp, end: Timestamp, operations: u64) -> f64 {
    debug_assert!(operations > 0);
    let seconds = (end.sec - start.sec) as f64 * NANOS_PER_SEC;
    let micros = (end.usec - start.usec) as f64 * NANOS_PER_MICRO;
    (seconds + micros) / operations as f64
}

/// Outcome of one unrolled measurement loop.
pub(crate) struct TimedRun {
    /// Nanoseconds per completed operation.
    pub ns_per_op: f64,
    /// Operations actually completed. The loop advances by
    /// [`UNROLL_STRIDE`], so this may exceed the requested count by up to
    /// `UNROLL_STRIDE - 1`; it is the denominator of `ns_per_op`.
    pub operations: u64,
}

/// Shared driver for the unrolled measurement primitives.
///
/// `block` must perform exactly [`UNROLL_STRIDE`] units of the target
/// operation per call. The loop-control overhead of one `while` pass is
/// thereby amortized over a full stride of measured work.
pub(crate) fn time_unrolled<F>(iterations: u64, mut block: F) -> Result<TimedRun, MeasureError>
where
    F: FnMut(),
{
    let iterations = effective_iterations(iterations);

    let start = Timestamp::now()?;
    let mut operations: u64 = 0;
    while operations < iterations {
        block();
        operations += UNROLL_STRIDE;
    }
    let end = Timestamp::now()?;

    Ok(TimedRun {
        ns_per_op: elapsed_ns_per_op(start, end, operations),
        operations,
    })
}

/// Empirically estimate the clock granularity in nanoseconds.
///
/// Reads the clock in a tight pair loop and reports the smallest non-zero
/// difference observed. Purely informational (the demo driver prints it);
/// measurement never gates on the result. Falls back to one microsecond,
/// the nominal tick of the underlying clock, when every pair lands inside
/// the same tick.
pub fn clock_resolution_ns() -> Result<f64, MeasureError> {
    const PROBES: usize = 1000;

    let mut min_diff = f64::MAX;
    for _ in 0..PROBES {
        let a = Timestamp::now()?;
        let b = Timestamp::now()?;
        let diff = elapsed_ns_per_op(a, b, 1);
        if diff > 0.0 && diff < min_diff {
            min_diff = diff;
        }
    }

    if min_diff == f64::MAX {
        Ok(NANOS_PER_MICRO)
    } else {
        Ok(min_diff)
    }
}
