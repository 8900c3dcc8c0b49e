// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod miette_setup_global_report_handler;
pub mod terminal_size;

// Re-export.
pub use miette_setup_global_report_handler::*;
pub use terminal_size::*;
