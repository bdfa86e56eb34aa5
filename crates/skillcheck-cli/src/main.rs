//! skillcheck CLI entry point.
//!
//! Binary name: `verify-skill`
//!
//! Installed at `<skill>/scripts/verify-skill`. Checks that the skill root two
//! levels up contains every required file and exits 0 when it does, 1 when it
//! does not.

mod cli;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use cli::Cli;
use skillcheck_core::Verifier;
use skillcheck_observe::tracing_setup;
use skillcheck_types::skill::DESIGNING_NEXTJS_UI;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_setup::init_tracing(tracing_setup::filter_directive(cli.verbose, cli.quiet))
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let layout = DESIGNING_NEXTJS_UI;
    let mut stdout = io::stdout().lock();

    if !cli.json {
        render::write_banner(&mut stdout, layout.name)?;
    }

    let verifier =
        Verifier::from_executable(layout).context("failed to locate the skill directory")?;
    tracing::debug!(base_dir = %verifier.base_dir().display(), "resolved skill root");

    let report = verifier.verify();

    if cli.json {
        render::write_json(&mut stdout, &report)?;
    } else {
        render::write_outcome(&mut stdout, &report)?;
    }
    stdout.flush()?;

    Ok(if report.is_ready() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
