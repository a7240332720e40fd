//! Cost of a trap into the operating-system kernel.

use super::timer::{sink, time_unrolled};
use crate::error::MeasureError;

/// One kernel round-trip with no meaningful side effect.
///
/// `getppid` takes no arguments, cannot fail, and is not serviced by the
/// vDSO, so every invocation is a genuine trap whose cost is dominated by
/// the kernel entry/exit itself.
#[cfg(target_os = "linux")]
#[inline]
fn null_trap() {
    // SAFETY: SYS_getppid takes no arguments and has no failure mode.
    sink(unsafe { libc::syscall(libc::SYS_getppid) });
}

#[cfg(not(target_os = "linux"))]
#[inline]
fn null_trap() {
    // SAFETY: getppid takes no arguments and has no failure mode.
    sink(unsafe { libc::getppid() });
}

/// Measure the wall-clock cost of one null kernel trap, in nanoseconds.
///
/// Runs an unrolled loop of ten traps per pass. `iterations == 0` selects
/// the default count.
///
/// # Errors
///
/// [`MeasureError::Clock`] if either clock read fails.
pub fn measure_syscall(iterations: u64) -> Result<f64, MeasureError> {
    let run = time_unrolled(iterations, || {
        null_trap();
        null_trap();
        null_trap();
        null_trap();
        null_trap();
        null_trap();
        null_trap();
        null_trap();
        null_trap();
        null_trap();
    })?;
    Ok(run.ns_per_op)
}
