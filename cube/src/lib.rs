// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # rgb_cube
//!
//! The terminal 256 color palette contains a 6x6x6 color cube (ANSI indices `16..=231`).
//! This crate models that cube as six square faces of colour cells, and lets you:
//!
//! 1. Convert between ANSI indices, cube coordinates, and display RGB values
//!    ([`ansi_to_rgb`], [`cube_coords_to_ansi`], [`ColourCell`]).
//! 2. View every [`Face`] in any of its 8 orientations (4 rotations, optionally
//!    flipped). All orientations are computed once when the face is built.
//! 3. Search a [`RgbCube`] (or a whole [`CubeCollection`]) for the face whose edge
//!    matches a given face's edge.
//! 4. Assemble a cube [`Net`] around a seed face with the [`NetAssembler`], and derive a
//!    color gradient ([`interp_xyz`]) between two of its faces.
//! 5. Render all of the above as rows of ANSI escaped text, sized for a terminal of a
//!    given width.
//!
//! ```
//! use rgb_cube::{CubeCollection, NetAssembler, RenderOptions};
//!
//! let collection = CubeCollection::try_from_axis_orders(["rgb", "grb", "bgr"]).unwrap();
//! let seed = collection.get("rgb").unwrap().face(0).unwrap().clone();
//! let net = NetAssembler::new(&collection).assemble(seed, "rgb");
//! for line in net.iter_s(&RenderOptions::default()) {
//!     println!("{line}");
//! }
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod cube;

// Re-export.
pub use core::*;
pub use cube::*;
