// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Structured (JSON lines) logging built on [`tracing`].
//!
//! Logging is opt in. Call [`try_initialize_logging_global`] once from `main()`, or
//! [`try_initialize_logging_thread_local`] from a test. Library code only emits events
//! with the [`tracing`] macros and never installs a subscriber by itself.

// Attach sources.
pub mod json_event_formatter;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use json_event_formatter::*;
pub use tracing_config::*;
pub use tracing_init::*;
