// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use rgb_cube::try_initialize_logging_global;
use rgb_cube_cmdr::{REPORT_FOOTER, rgbc::{CLIArg, try_run_command},
                    setup_default_miette_global_report_handler};

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(REPORT_FOOTER);

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let maybe_tracing_config = cli_arg
        .global_options
        .tracing_config(cli_arg.command.name());
    let enable_logging = maybe_tracing_config.is_some();
    if let Some(tracing_config) = maybe_tracing_config {
        try_initialize_logging_global(tracing_config)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let lines = try_run_command(&cli_arg).inspect_err(|error| {
        tracing::error!(
            message = "Could not run rgbc due to the following problem",
            error = ?error
        );
    })?;

    for line in &lines {
        println!("{line}");
    }

    if enable_logging {
        tracing::debug!(message = "Stop logging...", line_count = lines.len());
    }

    Ok(())
}
