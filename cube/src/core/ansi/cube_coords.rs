// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::RgbValue;
use strum_macros::{Display, EnumIter, EnumString};

/// Number of values each axis of the color cube can take.
pub const CUBE_SIDE: u8 = 6;
/// First ANSI index of the color cube.
pub const CUBE_START_INDEX: u16 = 16;
/// First ANSI index of the greyscale ramp (one past the last cube index).
pub const GREYSCALE_START_INDEX: u16 = 232;
/// Out of palette index used for the cells of [`crate::Face::empty_face`].
pub const PLACEHOLDER_ANSI_INDEX: u16 = 256;

/// One of the three axes of the color cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Axis {
    #[strum(serialize = "r")]
    R,
    #[strum(serialize = "g")]
    G,
    #[strum(serialize = "b")]
    B,
}

impl Axis {
    /// Distance between neighbouring ANSI indices along this axis.
    #[must_use]
    pub const fn multiplier(self) -> u16 {
        match self {
            Axis::R => 36,
            Axis::G => 6,
            Axis::B => 1,
        }
    }
}

/// Position inside the 6x6x6 cube. Each component is in `0..CUBE_SIDE`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CubeCoords {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CubeCoords {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    #[must_use]
    pub fn get(self, axis: Axis) -> u8 {
        match axis {
            Axis::R => self.r,
            Axis::G => self.g,
            Axis::B => self.b,
        }
    }

    #[must_use]
    pub fn with(mut self, axis: Axis, value: u8) -> Self {
        match axis {
            Axis::R => self.r = value,
            Axis::G => self.g = value,
            Axis::B => self.b = value,
        }
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.r < CUBE_SIDE && self.g < CUBE_SIDE && self.b < CUBE_SIDE
    }
}

/// Cube coordinates of a cube index. Indices outside `16..232` map to `(0, 0, 0)`.
#[must_use]
pub fn ansi_to_cube_coords(ansi_index: u16) -> CubeCoords {
    if !(CUBE_START_INDEX..GREYSCALE_START_INDEX).contains(&ansi_index) {
        return CubeCoords::default();
    }
    let offset = ansi_index - CUBE_START_INDEX;
    let component = |axis: Axis| -> u8 {
        let it = (offset / axis.multiplier()) % u16::from(CUBE_SIDE);
        u8::try_from(it).unwrap_or_default()
    };
    CubeCoords::new(component(Axis::R), component(Axis::G), component(Axis::B))
}

/// ANSI index of a cube position: `16 + 36*r + 6*g + b`. Coordinates must be in range.
#[must_use]
pub fn cube_coords_to_ansi(coords: CubeCoords) -> u16 {
    debug_assert!(coords.is_valid(), "cube coordinates out of range: {coords:?}");
    CUBE_START_INDEX
        + Axis::R.multiplier() * u16::from(coords.r)
        + Axis::G.multiplier() * u16::from(coords.g)
        + Axis::B.multiplier() * u16::from(coords.b)
}

/// Display intensity of a cube step: `0` stays `0`, steps `1..=5` become
/// `(14135 + 10280 * step) / 256`, ie: 95, 135, 175, 215, 255.
#[must_use]
pub fn cube_step_to_intensity(step: u8) -> u8 {
    if step == 0 {
        return 0;
    }
    let it = (14_135 + 10_280 * u32::from(step)) / 256;
    u8::try_from(it).unwrap_or(u8::MAX)
}

/// Display RGB of any ANSI index.
///
/// | index      | rgb                                    |
/// |------------|----------------------------------------|
/// | `0..16`    | `(0, 0, 0)`                            |
/// | `16..232`  | cube steps, see [`cube_step_to_intensity`] |
/// | `232..`    | `(n - 232, n - 232, n - 232)`, saturated |
#[must_use]
pub fn ansi_to_rgb(ansi_index: u16) -> RgbValue {
    match ansi_index {
        0..CUBE_START_INDEX => RgbValue::default(),
        CUBE_START_INDEX..GREYSCALE_START_INDEX => {
            let coords = ansi_to_cube_coords(ansi_index);
            RgbValue::from_u8(
                cube_step_to_intensity(coords.r),
                cube_step_to_intensity(coords.g),
                cube_step_to_intensity(coords.b),
            )
        }
        _ => {
            let grey = u8::try_from(ansi_index - GREYSCALE_START_INDEX).unwrap_or(u8::MAX);
            RgbValue::from_u8(grey, grey, grey)
        }
    }
}
