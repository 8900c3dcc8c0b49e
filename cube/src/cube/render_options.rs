// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColourCell, ColourStyle};
use strum_macros::{Display, EnumString};

pub const DEFAULT_CELL_WIDTH: usize = 6;

/// Text printed in the middle of each rendered cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum CellLabel {
    /// The display RGB value, eg: `(95, 135, 0)`.
    #[default]
    Rgb,
    /// The ANSI palette index, eg: `64`.
    #[strum(serialize = "ansi", serialize = "ansi_index")]
    AnsiIndex,
    Blank,
}

/// How faces are turned into rows of text.
///
/// Every grid row of a face becomes `padding_top` blank colored rows, one labelled row,
/// then `padding_bottom` blank colored rows. Each cell is `cell_width` columns wide,
/// with its label centered (labels longer than `cell_width` are not truncated).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    pub padding_top: usize,
    pub padding_bottom: usize,
    pub cell_width: usize,
    pub label: CellLabel,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            padding_top: 0,
            padding_bottom: 0,
            cell_width: DEFAULT_CELL_WIDTH,
            label: CellLabel::default(),
        }
    }
}

impl RenderOptions {
    /// Placeholder cells (from [`crate::Face::empty_face`]) render as uncolored blanks.
    #[must_use]
    pub fn render_cell(&self, cell: &ColourCell, with_label: bool) -> String {
        let width = self.cell_width;
        if cell.is_placeholder() {
            return " ".repeat(width);
        }
        let text = match (with_label, self.label) {
            (true, CellLabel::Rgb) => format!("{:^width$}", cell.rgb().to_string()),
            (true, CellLabel::AnsiIndex) => format!("{:^width$}", cell.ansi_index()),
            (false, _) | (true, CellLabel::Blank) => " ".repeat(width),
        };
        cell.colorise(&text, ColourStyle::Background)
    }

    #[must_use]
    pub fn render_row(&self, cells: &[ColourCell], with_label: bool) -> String {
        cells
            .iter()
            .map(|cell| self.render_cell(cell, with_label))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, display_width};
    use std::str::FromStr;
    use test_case::test_case;

    #[test_case(CellLabel::Rgb, true, "\x1b[48;5;21m(0, 0, 255)\x1b[0m")]
    #[test_case(CellLabel::AnsiIndex, true, "\x1b[48;5;21m  21  \x1b[0m")]
    #[test_case(CellLabel::Blank, true, "\x1b[48;5;21m      \x1b[0m")]
    #[test_case(CellLabel::Rgb, false, "\x1b[48;5;21m      \x1b[0m")]
    fn test_render_cell(label: CellLabel, with_label: bool, expected: &str) {
        let options = RenderOptions {
            label,
            ..Default::default()
        };
        assert_eq2!(
            options.render_cell(&ColourCell::from_ansi(21), with_label),
            expected
        );
    }

    #[test]
    fn test_wide_cell_centers_label() {
        let options = RenderOptions {
            cell_width: 15,
            ..Default::default()
        };
        let rendered = options.render_cell(&ColourCell::from_ansi(21), true);
        assert_eq2!(rendered, "\x1b[48;5;21m  (0, 0, 255)  \x1b[0m");
    }

    #[test]
    fn test_placeholder_is_uncolored() {
        let options = RenderOptions {
            label: CellLabel::AnsiIndex,
            ..Default::default()
        };
        assert_eq2!(options.render_cell(&ColourCell::placeholder(), true), "      ");
        let row = options.render_row(&[ColourCell::placeholder(), ColourCell::from_ansi(16)], true);
        assert_eq2!(display_width(&row), 12);
    }

    #[test_case("rgb", CellLabel::Rgb)]
    #[test_case("ansi", CellLabel::AnsiIndex)]
    #[test_case("ansi_index", CellLabel::AnsiIndex)]
    #[test_case("blank", CellLabel::Blank)]
    fn test_parse_label(input: &str, expected: CellLabel) {
        assert_eq2!(CellLabel::from_str(input).unwrap(), expected);
    }
}
