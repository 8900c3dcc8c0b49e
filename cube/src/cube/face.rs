// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A [`Face`] is a square grid of [`ColourCell`]s that can be viewed in any of the 8
//! orientations of the dihedral group of the square (4 rotations, each optionally
//! preceded by a flip).
//!
//! All 8 grids are computed once when the face is constructed and shared (via [`Arc`])
//! between every [`Face`] handle that [`Face::rot90`] returns. Nothing is ever mutated
//! after construction.
//!
//! Transforms, for a grid with rows `r0, r1, r2`:
//! - flip: reverse the order of the rows (`r2, r1, r0`).
//! - quarter turn: rotate the grid 90 degrees clockwise, so the first column read
//!   bottom to top becomes the first row.
//!
//! An orientation with `flipped` set means "flip first, then rotate".

use crate::{ColourCell, CommonResult, CubeError, Edge, EdgeCells, RenderOptions};
use std::{fmt::{Debug, Formatter},
          sync::Arc};

pub const ORIENTATION_COUNT: usize = 8;

/// `rotation` clockwise quarter turns (`0..4`) applied after an optional flip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Orientation {
    rotation: u8,
    flipped: bool,
}

impl Orientation {
    /// In search order: each rotation unflipped, then flipped.
    pub const SEARCH_ORDER: [Orientation; ORIENTATION_COUNT] = [
        Orientation::new(0, false),
        Orientation::new(0, true),
        Orientation::new(1, false),
        Orientation::new(1, true),
        Orientation::new(2, false),
        Orientation::new(2, true),
        Orientation::new(3, false),
        Orientation::new(3, true),
    ];

    /// `rotation` is taken modulo 4.
    #[must_use]
    pub const fn new(rotation: u8, flipped: bool) -> Self {
        Self {
            rotation: rotation % 4,
            flipped,
        }
    }

    /// Clockwise quarter turns, `0..4`.
    #[must_use]
    pub fn rotation(self) -> u8 { self.rotation }

    #[must_use]
    pub fn flipped(self) -> bool { self.flipped }

    /// Slot in the precomputed table: unflipped `0..4`, flipped `4..8`.
    #[must_use]
    pub fn index(self) -> usize { usize::from(self.flipped) * 4 + usize::from(self.rotation) }

    #[must_use]
    pub fn from_index(index: usize) -> Self {
        let rotation = u8::try_from(index % 4).unwrap_or_default();
        Self::new(rotation, (index / 4) % 2 == 1)
    }

    /// The orientation reached by applying `Face::rot90(rotation, flip)` to a face that
    /// is already in orientation `self`.
    ///
    /// A flip turns clockwise rotations into counter clockwise ones (`F R = R⁻¹ F`), so
    /// flipping after `r` turns is the same as flipping first and then turning `-r`.
    #[must_use]
    pub fn then(self, rotation: u8, flip: bool) -> Self {
        let rotation = rotation % 4;
        if flip {
            Self::new(rotation + 4 - self.rotation, !self.flipped)
        } else {
            Self::new(self.rotation + rotation, self.flipped)
        }
    }
}

/// Row major square grid of cells.
#[derive(Clone, PartialEq, Eq, Hash)]
struct Grid {
    side: usize,
    cells: Vec<ColourCell>,
}

impl Grid {
    fn from_fn(side: usize, mut cell_at: impl FnMut(usize, usize) -> ColourCell) -> Self {
        let mut cells = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                cells.push(cell_at(row, col));
            }
        }
        Self { side, cells }
    }

    fn get(&self, row: usize, col: usize) -> ColourCell { self.cells[row * self.side + col] }

    fn flipped(&self) -> Self {
        let side = self.side;
        Self::from_fn(side, |row, col| self.get(side - 1 - row, col))
    }

    fn rotated_clockwise(&self) -> Self {
        let side = self.side;
        Self::from_fn(side, |row, col| self.get(side - 1 - col, row))
    }

    fn transformed(&self, orientation: Orientation) -> Self {
        let mut acc = if orientation.flipped {
            self.flipped()
        } else {
            self.clone()
        };
        for _ in 0..orientation.rotation {
            acc = acc.rotated_clockwise();
        }
        acc
    }
}

/// Handle to one orientation of a square grid of cells. Cheap to clone.
///
/// Two faces are equal when their current grids hold the same cells in the same
/// places, regardless of how they were derived.
#[derive(Clone)]
pub struct Face {
    orientations: Arc<[Grid; ORIENTATION_COUNT]>,
    orientation: Orientation,
}

impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool { self.grid() == other.grid() }
}

impl Eq for Face {}

impl Debug for Face {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<Vec<u16>> = self
            .rows()
            .map(|row| row.iter().map(ColourCell::ansi_index).collect())
            .collect();
        f.debug_struct("Face")
            .field("orientation", &self.orientation)
            .field("ansi_rows", &rows)
            .finish()
    }
}

impl Face {
    /// # Errors
    ///
    /// [`CubeError::NonSquareFace`] if `rows` is empty, or any row's length differs from
    /// the number of rows.
    pub fn try_new(rows: Vec<Vec<ColourCell>>) -> CommonResult<Self> {
        let side = rows.len();
        if side == 0 || rows.iter().any(|row| row.len() != side) {
            return Err(CubeError::NonSquareFace {
                row_count: side,
                row_lengths: rows.iter().map(Vec::len).collect(),
            }
            .into());
        }
        Ok(Self::from_fn(side, |row, col| rows[row][col]))
    }

    /// Face of `side x side` cells, where `cell_at(row, col)` provides each cell.
    #[must_use]
    pub fn from_fn(side: usize, cell_at: impl FnMut(usize, usize) -> ColourCell) -> Self {
        let base = Grid::from_fn(side, cell_at);
        let orientations = std::array::from_fn(|index| {
            base.transformed(Orientation::from_index(index))
        });
        Self {
            orientations: Arc::new(orientations),
            orientation: Orientation::default(),
        }
    }

    /// Filler for the unused (or unmatched) slots of a [`crate::Net`]. Every cell is
    /// [`ColourCell::placeholder`].
    #[must_use]
    pub fn empty_face(width: usize) -> Self {
        Self::from_fn(width, |_, _| ColourCell::placeholder())
    }

    /// This face after an optional flip (reverse the row order) followed by `n`
    /// clockwise quarter turns. `n` is taken modulo 4.
    ///
    /// The result is another handle to the same precomputed orientations, so this never
    /// allocates. Calls compose, eg: `face.rot90(1, false).rot90(3, false) == face`.
    #[must_use]
    pub fn rot90(&self, n: u8, flip: bool) -> Self {
        Self {
            orientations: Arc::clone(&self.orientations),
            orientation: self.orientation.then(n, flip),
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation { self.orientation }

    /// This face's cells, seen in `orientation` relative to how it was constructed.
    #[must_use]
    pub fn with_orientation(&self, orientation: Orientation) -> Self {
        Self {
            orientations: Arc::clone(&self.orientations),
            orientation,
        }
    }

    fn grid(&self) -> &Grid { &self.orientations[self.orientation.index()] }

    #[must_use]
    pub fn side(&self) -> usize { self.grid().side }

    /// `true` if every cell is a placeholder, eg: [`Face::empty_face`].
    #[must_use]
    pub fn is_empty_face(&self) -> bool {
        self.grid().cells.iter().all(ColourCell::is_placeholder)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[ColourCell]> + Clone {
        let grid = self.grid();
        grid.cells.chunks(grid.side.max(1))
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[ColourCell]> { self.rows().nth(index) }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<ColourCell> {
        let side = self.side();
        (row < side && col < side).then(|| self.grid().get(row, col))
    }

    /// Cells along `edge`. Rows read left to right, columns read top to bottom.
    #[must_use]
    pub fn edge(&self, edge: Edge) -> EdgeCells {
        let grid = self.grid();
        let last = grid.side.saturating_sub(1);
        if grid.side == 0 {
            return EdgeCells::new();
        }
        match edge {
            Edge::Top => (0..grid.side).map(|col| grid.get(0, col)).collect(),
            Edge::Bottom => (0..grid.side).map(|col| grid.get(last, col)).collect(),
            Edge::Left => (0..grid.side).map(|row| grid.get(row, 0)).collect(),
            Edge::Right => (0..grid.side).map(|row| grid.get(row, last)).collect(),
        }
    }

    /// Display rows for this face, see [`RenderOptions`]. The iterator is lazy and
    /// finite, and can be cloned to replay it.
    pub fn iter_s<'a>(
        &'a self,
        options: &RenderOptions,
    ) -> impl Iterator<Item = String> + Clone + use<'a> {
        let options = *options;
        self.rows().flat_map(move |row| {
            let blank = options.render_row(row, false);
            let labelled = options.render_row(row, true);
            std::iter::repeat_n(blank.clone(), options.padding_top)
                .chain(std::iter::once(labelled))
                .chain(std::iter::repeat_n(blank, options.padding_bottom))
        })
    }

    /// All rows from [`Self::iter_s`], each followed by a newline.
    #[must_use]
    pub fn as_str(&self, options: &RenderOptions) -> String {
        self.iter_s(options).fold(String::new(), |mut acc, line| {
            acc.push_str(&line);
            acc.push('\n');
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellLabel, assert_eq2, display_width};

    /// 3x3 face of distinct cells:
    /// ```text
    /// 16 17 18
    /// 19 20 21
    /// 22 23 24
    /// ```
    fn face_3x3() -> Face {
        Face::from_fn(3, |row, col| {
            ColourCell::from_ansi(16 + u16::try_from(row * 3 + col).unwrap())
        })
    }

    fn ansi_rows(face: &Face) -> Vec<Vec<u16>> {
        face.rows()
            .map(|row| row.iter().map(ColourCell::ansi_index).collect())
            .collect()
    }

    #[test]
    fn test_rot90_identity() {
        let face = face_3x3();
        assert_eq2!(face.rot90(0, false), face);
        assert_eq2!(face.rot90(4, false), face);
    }

    #[test]
    fn test_rot90_clockwise_and_flip() {
        let face = face_3x3();
        assert_eq2!(
            ansi_rows(&face.rot90(1, false)),
            vec![vec![22, 19, 16], vec![23, 20, 17], vec![24, 21, 18]]
        );
        assert_eq2!(
            ansi_rows(&face.rot90(0, true)),
            vec![vec![22, 23, 24], vec![19, 20, 21], vec![16, 17, 18]]
        );
        // Flip then 180 degrees mirrors the columns.
        assert_eq2!(
            ansi_rows(&face.rot90(2, true)),
            vec![vec![18, 17, 16], vec![21, 20, 19], vec![24, 23, 22]]
        );
    }

    #[test]
    fn test_rot90_inverse() {
        let face = face_3x3();
        for n in 0..4 {
            assert_eq2!(face.rot90(n, false).rot90(4 - n, false), face);
        }
        assert_eq2!(face.rot90(0, true).rot90(0, true), face);
    }

    #[test]
    fn test_composition_matches_direct_transforms() {
        let face = face_3x3();
        let base = face.grid().clone();
        for first in Orientation::SEARCH_ORDER {
            for second in Orientation::SEARCH_ORDER {
                let composed = face
                    .rot90(first.rotation, first.flipped)
                    .rot90(second.rotation, second.flipped);
                let direct = base.transformed(first).transformed(second);
                assert!(
                    composed.grid() == &direct,
                    "{first:?} then {second:?} gave {composed:?}"
                );
            }
        }
    }

    #[test]
    fn test_all_orientations_are_distinct_permutations() {
        let face = face_3x3();
        let mut original: Vec<u16> = ansi_rows(&face).concat();
        original.sort_unstable();
        for (i, a) in Orientation::SEARCH_ORDER.iter().enumerate() {
            let oriented = face.with_orientation(*a);
            let mut cells = ansi_rows(&oriented).concat();
            cells.sort_unstable();
            assert_eq2!(cells, original);
            for b in &Orientation::SEARCH_ORDER[i + 1..] {
                assert_ne!(oriented, face.with_orientation(*b));
            }
        }
    }

    #[test]
    fn test_edges() {
        let face = face_3x3();
        let ids = |edge: Edge| -> Vec<u16> {
            face.edge(edge).iter().map(ColourCell::ansi_index).collect()
        };
        assert_eq2!(ids(Edge::Top), vec![16, 17, 18]);
        assert_eq2!(ids(Edge::Bottom), vec![22, 23, 24]);
        assert_eq2!(ids(Edge::Left), vec![16, 19, 22]);
        assert_eq2!(ids(Edge::Right), vec![18, 21, 24]);
    }

    #[test]
    fn test_accessors() {
        let face = face_3x3();
        assert_eq2!(face.side(), 3);
        assert_eq2!(face.cell(1, 2).map(|it| it.ansi_index()), Some(21));
        assert_eq2!(face.cell(3, 0), None);
        assert_eq2!(face.row(2).map(<[ColourCell]>::len), Some(3));
        assert!(face.row(3).is_none());
    }

    #[test]
    fn test_try_new_rejects_non_square() {
        let cell = ColourCell::from_ansi(16);
        assert!(Face::try_new(vec![]).is_err());
        assert!(Face::try_new(vec![vec![cell, cell], vec![cell]]).is_err());
        let face = Face::try_new(vec![vec![cell, cell], vec![cell, cell]]).unwrap();
        assert_eq2!(face.side(), 2);
    }

    #[test]
    fn test_empty_face() {
        let face = Face::empty_face(6);
        assert_eq2!(face.side(), 6);
        assert!(face.is_empty_face());
        assert!(!face_3x3().is_empty_face());
    }

    #[test]
    fn test_iter_s_padding_and_width() {
        let face = face_3x3();
        let options = RenderOptions {
            padding_top: 1,
            padding_bottom: 2,
            cell_width: 6,
            label: CellLabel::AnsiIndex,
        };
        let lines: Vec<String> = face.iter_s(&options).collect();
        assert_eq2!(lines.len(), 3 * (1 + 1 + 2));
        for line in &lines {
            assert_eq2!(display_width(line), 18);
        }
        let plain = strip_ansi_escapes::strip_str(&lines[1]);
        assert_eq2!(plain, "  16    17    18  ");
        assert_eq2!(strip_ansi_escapes::strip_str(&lines[0]).trim(), "");
    }

    #[test]
    fn test_orientation_is_always_in_range() {
        let orientation = Orientation::new(5, true);
        assert_eq2!((orientation.rotation(), orientation.flipped()), (1, true));
        assert_eq2!(orientation.index(), 5);

        let face = face_3x3();
        assert_eq2!(face.with_orientation(orientation), face.rot90(5, true));
    }

    #[test]
    fn test_iter_s_is_restartable() {
        let face = face_3x3();
        let options = RenderOptions::default();
        let iter = face.iter_s(&options);
        let first: Vec<String> = iter.clone().collect();
        let second: Vec<String> = iter.collect();
        assert_eq2!(first, second);
        assert_eq2!(face.as_str(&options), format!("{}\n", first.join("\n")));
    }
}
