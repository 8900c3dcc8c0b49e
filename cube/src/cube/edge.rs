// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ColourCell;
use smallvec::SmallVec;
use strum_macros::{Display, EnumIter};

/// One side of a [`crate::Face`].
///
/// - [`Edge::Top`] is the first row, [`Edge::Bottom`] the last row, both left to right.
/// - [`Edge::Left`] is the first column, [`Edge::Right`] the last column, both top to
///   bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// The edge of a neighbouring face that touches this one.
    #[must_use]
    pub const fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }
}

/// Cells along an edge. Cube faces have 6 cells per side, so these stay on the stack.
pub type EdgeCells = SmallVec<[ColourCell; 8]>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opposite_is_an_involution() {
        for edge in Edge::iter() {
            assert_ne!(edge, edge.opposite());
            assert_eq2!(edge.opposite().opposite(), edge);
        }
    }
}
