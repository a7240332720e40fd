//! Cost of an empty function call.

use super::timer::{sink, time_unrolled};
use crate::error::MeasureError;

/// The measured callee: takes nothing, does nothing, returns nothing.
///
/// `inline(never)` keeps a real call frame in the measured loop.
#[inline(never)]
fn empty_call() {}

/// Measure the wall-clock cost of one empty function call, in nanoseconds.
///
/// Runs an unrolled loop of ten calls per pass. The callee is reached
/// through a pointer laundered by [`sink`], so its empty body cannot be
/// inlined or the calls deleted. `iterations == 0` selects the default
/// count.
///
/// # Errors
///
/// [`MeasureError::Clock`] if either clock read fails.
pub fn measure_function_call(iterations: u64) -> Result<f64, MeasureError> {
    let call: fn() = sink(empty_call as fn());
    let run = time_unrolled(iterations, || {
        call();
        call();
        call();
        call();
        call();
        call();
        call();
        call();
        call();
        call();
    })?;
    Ok(run.ns_per_op)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_positive_time_for_large_count() {
        let ns = measure_function_call(1_000_000).unwrap();
        assert!(ns > 0.0, "ns_per_op = {ns}");
    }

    #[test]
    fn zero_iterations_takes_default_path() {
        assert!(measure_function_call(0).is_ok());
    }
}
