// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Subset of SGR (select graphic rendition) codes needed to paint colour cells and
/// gradient steps.
///
/// ANSI 256 indices are carried as [`u16`] so that out of palette indices (like the
/// placeholder index `256`) can still be emitted verbatim. Terminals ignore them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    ForegroundAnsi256(u16),
    BackgroundAnsi256(u16),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

const CSI: &str = "\x1b[";
const SGR: &str = "m";

impl Display for SgrCode {
    /// More info:
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
    /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            SgrCode::Reset                   => write!(f, "{CSI}0{SGR}"),
            SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}38;5;{index}{SGR}"),
            SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}48;5;{index}{SGR}"),
            SgrCode::ForegroundRGB(r, g, b)  => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
            SgrCode::BackgroundRGB(r, g, b)  => write!(f, "{CSI}48;2;{r};{g};{b}{SGR}"),
        }
    }
}

/// Which layer of a terminal cell a color is applied to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColourStyle {
    Foreground,
    #[default]
    Background,
}

impl ColourStyle {
    #[must_use]
    pub fn ansi256(self, index: u16) -> SgrCode {
        match self {
            ColourStyle::Foreground => SgrCode::ForegroundAnsi256(index),
            ColourStyle::Background => SgrCode::BackgroundAnsi256(index),
        }
    }

    #[must_use]
    pub fn rgb(self, red: u8, green: u8, blue: u8) -> SgrCode {
        match self {
            ColourStyle::Foreground => SgrCode::ForegroundRGB(red, green, blue),
            ColourStyle::Background => SgrCode::BackgroundRGB(red, green, blue),
        }
    }
}

/// Wrap `text` in the given `code`, followed by a reset.
#[must_use]
pub fn paint(code: SgrCode, text: &str) -> String {
    format!("{code}{text}{reset}", reset = SgrCode::Reset)
}
