//! The `OsBench` entry point: configure iteration counts, run everything,
//! get a [`Report`].

use std::path::PathBuf;

use crate::config::Config;
use crate::host::HostId;
use crate::measurement::{
    measure_disk_write_at, measure_function_call, measure_instruction, measure_syscall,
};
use crate::report::{ratio, Report};

/// Builder and aggregator for a full measurement run.
///
/// # Example
///
/// ```no_run
/// use osbench::{HostId, OsBench};
///
/// let host = HostId::detect().ok();
/// let report = OsBench::new()
///     .instruction_iterations(50_000)
///     .syscall_iterations(10_000)
///     .disk_iterations(100)
///     .measure(host.as_ref());
///
/// if let Ok(ns) = report.trap_ns {
///     println!("one trap costs {ns:.1} ns on {}", report.machine_name);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct OsBench {
    config: Config,
}

impl OsBench {
    /// Create a runner with every iteration count unset (defaults apply).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner from an explicit [`Config`].
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Iterations for the instruction measurement; `0` means default.
    pub fn instruction_iterations(mut self, iterations: u64) -> Self {
        self.config.instruction_iterations = iterations;
        self
    }

    /// Iterations for the function-call measurement; `0` means default.
    pub fn function_iterations(mut self, iterations: u64) -> Self {
        self.config.function_iterations = iterations;
        self
    }

    /// Iterations for the kernel-trap measurement; `0` means default.
    pub fn syscall_iterations(mut self, iterations: u64) -> Self {
        self.config.syscall_iterations = iterations;
        self
    }

    /// Iterations for the disk-write measurement; `0` means default.
    pub fn disk_iterations(mut self, iterations: u64) -> Self {
        self.config.disk_iterations = iterations;
        self
    }

    /// Override the disk-measurement scratch path.
    pub fn disk_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.disk_path = path.into();
        self
    }

    /// Run all four primitives and assemble the report.
    ///
    /// The primitives run in a fixed order (instruction, function call,
    /// trap, disk), and a failure in one never short-circuits the others:
    /// it lands in that field and in the ratios derived from it. The
    /// machine name comes from `host` when given, otherwise stays empty;
    /// this method never establishes or releases identity itself.
    pub fn measure(&self, host: Option<&HostId>) -> Report {
        let machine_name = host.map(|h| h.name().to_owned()).unwrap_or_default();

        let instruction_ns = measure_instruction(self.config.instruction_iterations);
        let function_ns = measure_function_call(self.config.function_iterations);
        let trap_ns = measure_syscall(self.config.syscall_iterations);
        let disk_ns = measure_disk_write_at(&self.config.disk_path, self.config.disk_iterations);

        let function_over_instruction = ratio(&function_ns, &instruction_ns);
        let trap_over_instruction = ratio(&trap_ns, &instruction_ns);
        let disk_over_instruction = ratio(&disk_ns, &instruction_ns);

        Report {
            machine_name,
            instruction_ns,
            function_ns,
            trap_ns,
            disk_ns,
            function_over_instruction,
            trap_over_instruction,
            disk_over_instruction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_counts() {
        let bench = OsBench::new()
            .instruction_iterations(5)
            .function_iterations(6)
            .syscall_iterations(7)
            .disk_iterations(8)
            .disk_path("/nonexistent-dir/scratch.dat");
        assert_eq!(bench.config.instruction_iterations, 5);
        assert_eq!(bench.config.function_iterations, 6);
        assert_eq!(bench.config.syscall_iterations, 7);
        assert_eq!(bench.config.disk_iterations, 8);
    }

    #[test]
    fn disk_failure_does_not_short_circuit() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the scratch path guarantees the open fails.
        let report = OsBench::new()
            .instruction_iterations(1000)
            .function_iterations(1000)
            .syscall_iterations(1000)
            .disk_iterations(2)
            .disk_path(dir.path())
            .measure(None);

        assert!(report.disk_ns.is_err());
        assert!(report.instruction_ns.is_ok());
        assert!(report.function_ns.is_ok());
        assert!(report.trap_ns.is_ok());
        assert_eq!(report.disk_over_instruction, None);
        assert!(report.function_over_instruction.is_some());
        assert!(report.machine_name.is_empty());
    }
}
