use code_rules::harness::{cases, run_all};
use code_rules::lifecycle::setup_tracing;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    setup_tracing();

    let report = run_all(&cases());
    let total = report.outcomes.len();
    let failed = report.failures().count();

    if report.passed() {
        info!(total, "All cases passed");
        ExitCode::SUCCESS
    } else {
        error!(total, failed, "Verification failed");
        ExitCode::FAILURE
    }
}
