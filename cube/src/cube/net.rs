// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unfold a cube around a seed face by searching a [`CubeCollection`] for its
//! neighbours.
//!
//! ```text
//!        +----+
//!        | f4 |
//!   +----+----+
//!   | f2 | f1 |
//!   +----+----+----+
//!        | f3 | f5 |
//!        +----+----+
//!        | f6 |
//!        +----+
//! ```
//!
//! - `f1` is the seed.
//! - `f2`, `f3`, `f4` touch the seed's left, bottom, and top edges. They are searched
//!   for in every cube except the seed's.
//! - `f5`, `f6` touch `f3`'s right and bottom edges. They are searched for in every
//!   cube except `f3`'s.
//!
//! Faces are placed exactly as the search found them. Slots with no match (and the
//! unused corners of the 4x3 layout) are filled with [`Face::empty_face`].

use crate::{CubeCollection, Edge, Face, FaceGrid, GradientStep, RenderOptions, RgbValue,
            interp_xyz};

/// Cell (row, column) of `f2` and `f4` that the gradient is anchored on.
pub const ANCHOR_CELL: (usize, usize) = (2, 3);

/// Number of gradient steps between the anchors.
pub const DEFAULT_GRADIENT_STEPS: usize = 10;

/// A face in the net, with the name of the cube it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetFace {
    pub face: Face,
    pub cube_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Net {
    pub seed: NetFace,
    pub left: Option<NetFace>,
    pub below: Option<NetFace>,
    pub above: Option<NetFace>,
    pub below_right: Option<NetFace>,
    pub below_below: Option<NetFace>,
}

#[derive(Clone, Copy, Debug)]
pub struct NetAssembler<'a> {
    collection: &'a CubeCollection,
}

impl<'a> NetAssembler<'a> {
    #[must_use]
    pub fn new(collection: &'a CubeCollection) -> Self { Self { collection } }

    /// Runs the fixed lookup pipeline, see the [module docs](self).
    #[must_use]
    pub fn assemble(&self, seed: Face, seed_cube: &str) -> Net {
        let seed = NetFace {
            face: seed,
            cube_name: seed_cube.to_string(),
        };

        let left = self.lookup(&seed, Edge::Left);
        let below = self.lookup(&seed, Edge::Bottom);
        let above = self.lookup(&seed, Edge::Top);

        let (below_right, below_below) = match &below {
            Some(below) => (
                self.lookup(below, Edge::Right),
                self.lookup(below, Edge::Bottom),
            ),
            None => (None, None),
        };

        Net {
            seed,
            left,
            below,
            above,
            below_right,
            below_below,
        }
    }

    fn lookup(&self, from: &NetFace, edge: Edge) -> Option<NetFace> {
        let found = self
            .collection
            .find_face_with_edge_excluding(&from.cube_name, &from.face, edge)
            .map(|(cube_name, face)| NetFace {
                face,
                cube_name: cube_name.to_string(),
            });

        tracing::debug!(
            message = "edge lookup",
            from_cube = %from.cube_name,
            edge = %edge,
            found_in = ?found.as_ref().map(|it| it.cube_name.as_str()),
            found_orientation = ?found.as_ref().map(|it| it.face.orientation()),
        );

        found
    }
}

impl Net {
    /// Side length used for filler faces.
    #[must_use]
    pub fn side(&self) -> usize { self.seed.face.side() }

    /// The six slots, `f1` to `f6`.
    #[must_use]
    pub fn slots(&self) -> [Option<&NetFace>; 6] {
        [
            Some(&self.seed),
            self.left.as_ref(),
            self.below.as_ref(),
            self.above.as_ref(),
            self.below_right.as_ref(),
            self.below_below.as_ref(),
        ]
    }

    /// Number of slots filled, `1..=6`.
    #[must_use]
    pub fn found_count(&self) -> usize { self.slots().iter().flatten().count() }

    /// 4 rows of 3 faces:
    ///
    /// ```text
    /// [empty, f4,    empty]
    /// [f2,    f1,    empty]
    /// [empty, f3,    f5   ]
    /// [empty, f6,    empty]
    /// ```
    #[must_use]
    pub fn layout(&self) -> FaceGrid {
        let empty = Face::empty_face(self.side());
        let or_empty = |slot: &Option<NetFace>| {
            slot.as_ref()
                .map_or_else(|| empty.clone(), |it| it.face.clone())
        };
        FaceGrid::new(vec![
            vec![empty.clone(), or_empty(&self.above), empty.clone()],
            vec![or_empty(&self.left), self.seed.face.clone(), empty.clone()],
            vec![empty.clone(), or_empty(&self.below), or_empty(&self.below_right)],
            vec![empty.clone(), or_empty(&self.below_below), empty.clone()],
        ])
    }

    /// Display rows of [`Self::layout`].
    pub fn iter_s(&self, options: &RenderOptions) -> impl Iterator<Item = String> + use<> {
        self.layout().iter_s(options).collect::<Vec<_>>().into_iter()
    }

    /// RGB of [`ANCHOR_CELL`] in `f2` (`c1`) and `f4` (`c2`). [`None`] if either face is
    /// missing, or too small to have that cell.
    #[must_use]
    pub fn colour_anchors(&self) -> Option<(RgbValue, RgbValue)> {
        let (row, col) = ANCHOR_CELL;
        let c1 = self.left.as_ref()?.face.cell(row, col)?.rgb();
        let c2 = self.above.as_ref()?.face.cell(row, col)?.rgb();
        Some((c1, c2))
    }

    /// `steps` colors from `c1` to `c2`, see [`Self::colour_anchors`].
    #[must_use]
    pub fn gradient(&self, steps: usize) -> Option<Vec<GradientStep>> {
        self.colour_anchors()
            .map(|(c1, c2)| interp_xyz(c1, c2, steps))
    }
}
