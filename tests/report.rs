//! End-to-end report assembly on a live host.
//!
//! Timing values are host-dependent; these tests pin the structural
//! contract (which fields exist, what failure does to them) rather than
//! any particular number.

use osbench::{measure_all, HostId, MeasureError, OsBench, FAILURE_SENTINEL};

/// Iteration counts large enough that the elapsed window comfortably
/// exceeds the microsecond clock tick.
const INSTR_ITERS: u64 = 5_000_000;
const FUNC_ITERS: u64 = 1_000_000;
const SYSCALL_ITERS: u64 = 50_000;
const DISK_ITERS: u64 = 4;

#[test]
fn full_run_produces_complete_report() {
    let dir = tempfile::tempdir().unwrap();
    let host = HostId::detect().unwrap();

    let report = OsBench::new()
        .instruction_iterations(INSTR_ITERS)
        .function_iterations(FUNC_ITERS)
        .syscall_iterations(SYSCALL_ITERS)
        .disk_iterations(DISK_ITERS)
        .disk_path(dir.path().join("scratch.dat"))
        .measure(Some(&host));

    assert!(!report.machine_name.is_empty());

    assert!(matches!(&report.instruction_ns, Ok(ns) if *ns > 0.0));
    assert!(matches!(&report.function_ns, Ok(ns) if *ns > 0.0));
    assert!(matches!(&report.trap_ns, Ok(ns) if *ns > 0.0));

    assert!(report.function_over_instruction.is_some());
    assert!(report.trap_over_instruction.is_some());

    // Direct I/O support depends on the filesystem backing the temp dir.
    match &report.disk_ns {
        Ok(ns) => {
            assert!(*ns > 0.0);
            assert!(report.disk_over_instruction.is_some());
        }
        Err(MeasureError::Open(_)) => {
            assert_eq!(report.disk_over_instruction, None);
        }
        Err(other) => panic!("unexpected disk failure: {other}"),
    }
}

#[test]
fn measure_all_without_host_leaves_name_empty() {
    let report = measure_all(1000, 1000, 1000, 1);
    assert!(report.machine_name.is_empty());
    assert!(report.instruction_ns.is_ok());
    assert!(report.function_ns.is_ok());
    assert!(report.trap_ns.is_ok());
}

#[test]
fn wire_form_marks_exactly_the_failed_fields() {
    let dir = tempfile::tempdir().unwrap();
    let report = OsBench::new()
        .instruction_iterations(INSTR_ITERS)
        .disk_iterations(DISK_ITERS)
        .disk_path(dir.path().join("scratch.dat"))
        .measure(None);

    let wire = report.to_wire();
    assert_eq!(wire.instruction_ns == FAILURE_SENTINEL, report.instruction_ns.is_err());
    assert_eq!(wire.function_ns == FAILURE_SENTINEL, report.function_ns.is_err());
    assert_eq!(wire.trap_ns == FAILURE_SENTINEL, report.trap_ns.is_err());
    assert_eq!(wire.disk_ns == FAILURE_SENTINEL, report.disk_ns.is_err());
    assert_eq!(
        wire.disk_over_instruction == FAILURE_SENTINEL,
        report.disk_over_instruction.is_none()
    );
}

#[test]
fn host_identity_lifecycle_is_repeatable() {
    // Establishing identity twice must be safe and consistent; each value
    // is independently owned and dropping one does not affect the other.
    let first = HostId::detect().unwrap();
    let second = HostId::detect().unwrap();
    assert_eq!(first.name(), second.name());
    drop(first);

    let report = OsBench::new()
        .instruction_iterations(1000)
        .function_iterations(1000)
        .syscall_iterations(1000)
        .disk_iterations(1)
        .disk_path(tempfile::tempdir().unwrap().path().join("s.dat"))
        .measure(Some(&second));
    assert_eq!(report.machine_name, second.name());
}
