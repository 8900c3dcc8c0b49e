// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configure how [`miette::Report`]s are printed when `main()` returns an error.
//!
//! The hook registered with [`miette::set_hook`] is lazy. It only runs when a report is
//! about to be displayed, so the terminal width is measured right before output, and
//! never at all if nothing fails.

use crate::get_terminal_width;
use miette::MietteHandlerOpts;

/// Shown at the bottom of every report.
pub const REPORT_FOOTER: &str =
    "Run with `--enable-logging --log-level debug` and check the log file for details.";

/// Install the graphical report handler, sized to the terminal. Only the first call
/// has any effect.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = get_terminal_width();
        tracing::debug!(message = "miette::set_hook", terminal_width);
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
