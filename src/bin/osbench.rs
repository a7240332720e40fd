//! Demonstration driver: run every measurement and print the report.
//!
//! Usage: `osbench [--json] [INSTR [FUNC [SYSCALL [DISK]]]]`
//!
//! The positional arguments are per-primitive iteration counts; `0` (or an
//! omitted argument) selects the library default.

use std::env;
use std::process::ExitCode;

use osbench::output::{json, terminal};
use osbench::{clock_resolution_ns, HostId, OsBench};

fn main() -> ExitCode {
    let mut counts = [0u64; 4];
    let mut as_json = false;

    let mut positional = 0;
    for arg in env::args().skip(1) {
        if arg == "--json" {
            as_json = true;
            continue;
        }
        match arg.parse::<u64>() {
            Ok(n) if positional < counts.len() => {
                counts[positional] = n;
                positional += 1;
            }
            _ => {
                eprintln!("usage: osbench [--json] [INSTR [FUNC [SYSCALL [DISK]]]]");
                return ExitCode::FAILURE;
            }
        }
    }

    let host = match HostId::detect() {
        Ok(host) => Some(host),
        Err(err) => {
            eprintln!("osbench: {err}; reporting without a machine name");
            None
        }
    };

    let report = OsBench::new()
        .instruction_iterations(counts[0])
        .function_iterations(counts[1])
        .syscall_iterations(counts[2])
        .disk_iterations(counts[3])
        .measure(host.as_ref());

    if as_json {
        match json::to_json_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("osbench: JSON encoding failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        if let Ok(resolution) = clock_resolution_ns() {
            println!("clock resolution: ~{resolution:.0} ns\n");
        }
        print!("{}", terminal::format_report(&report));
    }

    ExitCode::SUCCESS
}
