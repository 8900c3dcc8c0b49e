// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ColourStyle, CubeCoords, PLACEHOLDER_ANSI_INDEX, RgbValue, SgrCode,
            ansi_to_cube_coords, ansi_to_rgb, cube_coords_to_ansi, paint};

/// An ANSI index together with its display RGB value.
///
/// The two are always derived from each other by the codec, so the fields are private
/// and the only way to get a cell is [`ColourCell::from_ansi`] or
/// [`ColourCell::from_cube_coords`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColourCell {
    ansi_index: u16,
    rgb: RgbValue,
}

impl ColourCell {
    #[must_use]
    pub fn from_ansi(ansi_index: u16) -> Self {
        Self {
            ansi_index,
            rgb: ansi_to_rgb(ansi_index),
        }
    }

    #[must_use]
    pub fn from_cube_coords(coords: CubeCoords) -> Self {
        Self::from_ansi(cube_coords_to_ansi(coords))
    }

    /// Cell used to fill empty faces.
    #[must_use]
    pub fn placeholder() -> Self { Self::from_ansi(PLACEHOLDER_ANSI_INDEX) }

    #[must_use]
    pub fn ansi_index(&self) -> u16 { self.ansi_index }

    #[must_use]
    pub fn rgb(&self) -> RgbValue { self.rgb }

    /// `true` for indices outside of the 256 color palette.
    #[must_use]
    pub fn is_placeholder(&self) -> bool { self.ansi_index > u16::from(u8::MAX) }

    #[must_use]
    pub fn cube_coords(&self) -> CubeCoords { ansi_to_cube_coords(self.ansi_index) }

    /// `ESC[38;5;<n>m` for the foreground, `ESC[48;5;<n>m` for the background.
    #[must_use]
    pub fn escape_code(&self, style: ColourStyle) -> SgrCode { style.ansi256(self.ansi_index) }

    /// `text` preceded by [`Self::escape_code`] and followed by a reset.
    #[must_use]
    pub fn colorise(&self, text: &str, style: ColourStyle) -> String {
        paint(self.escape_code(style), text)
    }
}
