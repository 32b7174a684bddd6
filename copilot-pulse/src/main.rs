//! `copilot-pulse`: GitHub Copilot seat utilization and usage at a glance.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use copilot_pulse_lib::{Host, run};
use std::io::{Write, stderr, stdout};
use std::process;

/// Host backed by the process's own terminal streams and exit code.
#[derive(Debug, Clone, Copy, Default)]
struct Terminal;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for Terminal {
    fn output(&mut self) -> impl Write {
        stdout().lock()
    }

    fn error(&mut self) -> impl Write {
        stderr().lock()
    }

    fn exit(&mut self, code: i32) {
        process::exit(code);
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> Result<(), ohno::AppError> {
    let mut terminal = Terminal;
    run(&mut terminal, std::env::args()).await
}
