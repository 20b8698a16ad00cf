use anyhow::{Context, Result};
use tracing::{error, warn};

use sumbench::{BenchConfig, cycles, run_suite};

fn main() -> Result<()> {
    common::log_setup::setup_logging("info");

    if common::is_debug() {
        warn!("debug build - benchmarks should be run with --release");
    }

    let config = BenchConfig::default();
    let counter = cycles::default_counter();

    run_suite(&config, &*counter, std::io::stdout())
        .inspect_err(|e| error!("{e}"))
        .context("benchmark suite failed")?;

    Ok(())
}
