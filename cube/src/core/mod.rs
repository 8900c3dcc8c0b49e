// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Connect to source file.
pub mod ansi;
pub mod common;
pub mod decl_macros;
pub mod log;
#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use common::*;
pub use log::*;
#[cfg(test)]
pub use test_fixtures::*;
