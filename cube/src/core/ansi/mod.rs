// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversion between ANSI 256 color indices, 6x6x6 cube coordinates, display RGB
//! values, and the SGR escape sequences used to paint them in a terminal.
//!
//! Layout of the 256 color palette:
//! - `0..16`: the basic (system) colors. Their RGB depends on the terminal theme, so
//!   they map to black here.
//! - `16..232`: the color cube, `16 + 36*r + 6*g + b` for `r, g, b` in `0..6`.
//! - `232..256`: the greyscale ramp.

// Attach.
mod colour_cell;
mod cube_coords;
mod rgb_value;
mod sgr_code;

// Re-export.
pub use colour_cell::*;
pub use cube_coords::*;
pub use rgb_value::*;
pub use sgr_code::*;
