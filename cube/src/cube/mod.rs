// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod axis_order;
pub mod cube_collection;
pub mod edge;
pub mod face;
pub mod face_grid;
pub mod gradient;
pub mod net;
pub mod palette;
pub mod render_options;
pub mod rgb_cube_struct;
pub mod side_by_side;

// Re-export.
pub use axis_order::*;
pub use cube_collection::*;
pub use edge::*;
pub use face::*;
pub use face_grid::*;
pub use gradient::*;
pub use net::*;
pub use palette::*;
pub use render_options::*;
pub use rgb_cube_struct::*;
pub use side_by_side::*;
