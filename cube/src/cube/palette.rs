// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Swatches of the 256 color palette, laid out in a few different ways to make the
//! structure of the color cube visible.

use crate::{CUBE_START_INDEX, ColourCell, ColourStyle, GREYSCALE_START_INDEX};
use strum_macros::{Display, EnumIter, EnumString};

/// Columns taken by one swatch cell.
pub const SWATCH_CELL_WIDTH: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum PaletteLayout {
    /// Cube indices in order, 12 per row.
    #[default]
    Sequential,
    /// Rows of 12, taking every 3rd row of [`PaletteLayout::Sequential`].
    Interleaved,
    /// Rows of 6, column major: all rows with the same `g`, then the next `g`.
    Columns,
    /// Like [`PaletteLayout::Columns`], with every other block of 6 rows reversed so
    /// that neighbouring rows differ by one step.
    Serpentine,
    /// The 24 greys, 8 per row.
    Greyscale,
    /// The 16 basic colors, 8 per row.
    Basics,
}

/// Splits `items` into chunks of `size` (the last chunk may be shorter).
#[must_use]
pub fn batched<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    items.chunks(size.max(1)).map(<[T]>::to_vec).collect()
}

/// Rows `start`, `start + step`, ... of `rows`.
fn every_nth(rows: &[Vec<u16>], start: usize, step: usize) -> impl Iterator<Item = Vec<u16>> {
    rows.iter().skip(start).step_by(step).cloned()
}

impl PaletteLayout {
    /// ANSI indices of each swatch row.
    #[must_use]
    pub fn rows(self) -> Vec<Vec<u16>> {
        let cube: Vec<u16> = (CUBE_START_INDEX..GREYSCALE_START_INDEX).collect();
        match self {
            PaletteLayout::Sequential => batched(&cube, 12),
            PaletteLayout::Interleaved => {
                let rows = batched(&cube, 12);
                (0..3).flat_map(|start| every_nth(&rows, start, 3)).collect()
            }
            PaletteLayout::Columns => {
                let rows = batched(&cube, 6);
                (0..6).flat_map(|start| every_nth(&rows, start, 6)).collect()
            }
            PaletteLayout::Serpentine => {
                let rows = batched(&cube, 6);
                (0..6)
                    .flat_map(|start| {
                        let mut block: Vec<_> = every_nth(&rows, start, 6).collect();
                        if start % 2 == 1 {
                            block.reverse();
                        }
                        block
                    })
                    .collect()
            }
            PaletteLayout::Greyscale => {
                let greys: Vec<u16> = (GREYSCALE_START_INDEX..=255).collect();
                batched(&greys, 8)
            }
            PaletteLayout::Basics => {
                let basics: Vec<u16> = (0..CUBE_START_INDEX).collect();
                batched(&basics, 8)
            }
        }
    }
}

fn swatch_cell(ansi_index: u16, with_label: bool) -> String {
    let text = if with_label {
        format!("{ansi_index:>3}   ")
    } else {
        " ".repeat(SWATCH_CELL_WIDTH)
    };
    ColourCell::from_ansi(ansi_index).colorise(&text, ColourStyle::Background)
}

/// Display rows for `layout`. Each swatch row becomes `pad_top` blank rows, one row of
/// index labels, and `pad_bottom` blank rows.
#[must_use]
pub fn swatch_grid(layout: PaletteLayout, pad_top: usize, pad_bottom: usize) -> Vec<String> {
    let mut acc = vec![];
    for row in layout.rows() {
        let blank: String = row.iter().map(|it| swatch_cell(*it, false)).collect();
        let labelled: String = row.iter().map(|it| swatch_cell(*it, true)).collect();
        acc.extend(std::iter::repeat_n(blank.clone(), pad_top));
        acc.push(labelled);
        acc.extend(std::iter::repeat_n(blank, pad_bottom));
    }
    acc
}

/// One row per cube color: index, display RGB, and a swatch.
#[must_use]
pub fn listing() -> Vec<String> {
    (CUBE_START_INDEX..GREYSCALE_START_INDEX)
        .map(|ansi_index| {
            let cell = ColourCell::from_ansi(ansi_index);
            let swatch = cell.colorise(&" ".repeat(8), ColourStyle::Background);
            format!("{ansi_index:3} {rgb:>16} {swatch}", rgb = cell.rgb().to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, display_width};
    use std::collections::HashSet;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test]
    fn test_batched() {
        assert_eq2!(batched(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test_case(PaletteLayout::Sequential, 18, 216)]
    #[test_case(PaletteLayout::Interleaved, 18, 216)]
    #[test_case(PaletteLayout::Columns, 36, 216)]
    #[test_case(PaletteLayout::Serpentine, 36, 216)]
    #[test_case(PaletteLayout::Greyscale, 3, 24)]
    #[test_case(PaletteLayout::Basics, 2, 16)]
    fn test_layouts_cover_their_range_once(layout: PaletteLayout, rows: usize, cells: usize) {
        let grid = layout.rows();
        assert_eq2!(grid.len(), rows);
        let all: Vec<u16> = grid.concat();
        assert_eq2!(all.len(), cells);
        assert_eq2!(all.iter().collect::<HashSet<_>>().len(), cells);
    }

    #[test]
    fn test_columns_and_serpentine_order() {
        let columns = PaletteLayout::Columns.rows();
        assert_eq2!(columns[0], vec![16, 17, 18, 19, 20, 21]);
        assert_eq2!(columns[1], vec![52, 53, 54, 55, 56, 57]);

        let serpentine = PaletteLayout::Serpentine.rows();
        assert_eq2!(serpentine[5], columns[5]);
        assert_eq2!(serpentine[6], columns[11]);
        assert_eq2!(serpentine[11], columns[6]);
    }

    #[test]
    fn test_swatch_grid() {
        for layout in PaletteLayout::iter() {
            let lines = swatch_grid(layout, 1, 1);
            assert_eq2!(lines.len(), layout.rows().len() * 3);
        }
        let lines = swatch_grid(PaletteLayout::Basics, 0, 0);
        assert_eq2!(display_width(&lines[0]), 8 * SWATCH_CELL_WIDTH);
        assert!(strip_ansi_escapes::strip_str(&lines[1]).starts_with("  8   "));
    }

    #[test]
    fn test_listing() {
        let lines = listing();
        assert_eq2!(lines.len(), 216);
        assert_eq2!(
            strip_ansi_escapes::strip_str(&lines[0]),
            format!(" 16        (0, 0, 0) {}", " ".repeat(8))
        );
        assert!(lines[215].starts_with("231  (255, 255, 255) "));
    }
}
