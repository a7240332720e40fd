//! Per-primitive measurement configuration.

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_ITERATIONS, SCRATCH_FILE_NAME};

/// Configuration options for [`OsBench`](crate::OsBench).
///
/// Iteration counts of `0` mean "use the default" ([`DEFAULT_ITERATIONS`]);
/// any other value is used verbatim. Counts are deliberately not bounded:
/// a very large count is legal and simply takes longer.
#[derive(Debug, Clone)]
pub struct Config {
    /// Iterations for the instruction measurement (default: unset).
    pub instruction_iterations: u64,

    /// Iterations for the function-call measurement (default: unset).
    pub function_iterations: u64,

    /// Iterations for the kernel-trap measurement (default: unset).
    pub syscall_iterations: u64,

    /// Iterations for the disk-write measurement (default: unset).
    pub disk_iterations: u64,

    /// Path of the disk-measurement scratch file.
    ///
    /// Defaults to a fixed, well-known location under the system temp
    /// directory. Override it when several measurements may run at once;
    /// the exclusive create makes concurrent use of one path fail.
    pub disk_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instruction_iterations: 0,
            function_iterations: 0,
            syscall_iterations: 0,
            disk_iterations: 0,
            disk_path: default_scratch_path(),
        }
    }
}

/// The fixed default location of the disk-measurement scratch file.
pub fn default_scratch_path() -> PathBuf {
    env::temp_dir().join(SCRATCH_FILE_NAME)
}

/// Normalize a caller-supplied iteration count.
///
/// `0` is the "unset" marker and maps to [`DEFAULT_ITERATIONS`]; everything
/// else passes through unchanged.
#[inline]
pub(crate) fn effective_iterations(requested: u64) -> u64 {
    if requested == 0 {
        DEFAULT_ITERATIONS
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_maps_to_default() {
        assert_eq!(effective_iterations(0), DEFAULT_ITERATIONS);
    }

    #[test]
    fn nonzero_passes_through() {
        assert_eq!(effective_iterations(1), 1);
        assert_eq!(effective_iterations(7), 7);
        assert_eq!(effective_iterations(u64::MAX), u64::MAX);
    }

    #[test]
    fn default_config_uses_temp_dir() {
        let config = Config::default();
        assert!(config.disk_path.starts_with(env::temp_dir()));
        assert_eq!(config.instruction_iterations, 0);
    }
}
