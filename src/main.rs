use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use eolcmp::logging::init_logging;
use eolcmp::{build_options, run_eolcmp, Args};

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let opts = build_options(&args).context("Invalid invocation")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_eolcmp(&opts, &mut out)?;
    out.flush()?;

    Ok(())
}
