// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # rgbc
//!
//! Command line front end for [`rgb_cube`]. Each subcommand produces rows of ANSI
//! escaped text, which the `rgbc` binary prints to stdout.
//!
//! | Command   | What it shows                                                      |
//! |-----------|--------------------------------------------------------------------|
//! | `palette` | Swatches of the 256 color palette in one or more layouts           |
//! | `cubes`   | Color cubes sliced along axis orders, packed to the terminal width |
//! | `net`     | A cube net unfolded around a seed face, and its gradient           |
//!
//! Pass `--enable-logging` to write JSON lines to a log file.

// Enforce strict error handling in production code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod common;
pub mod rgbc;

// Re-export.
pub use common::*;
pub use rgbc::*;
