// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Axis, AxisOrder, CUBE_SIDE, ColourCell, CommonResult, CubeCoords, CubeError,
            Edge, Face, FaceGrid, Orientation, RenderOptions, display_width};

/// An ordered list of faces, usually the 6 slices of the color cube for one
/// [`AxisOrder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbCube {
    faces: Vec<Face>,
    axis_order: Option<AxisOrder>,
}

impl RgbCube {
    /// Cube made of arbitrary faces (not necessarily slices of the color cube).
    #[must_use]
    pub fn new(faces: Vec<Face>) -> Self {
        Self {
            faces,
            axis_order: None,
        }
    }

    /// The 6x6x6 color cube, sliced so that `per_face` changes once per face, `per_row`
    /// once per row, and `per_cell` once per cell. Every cube index `16..232` appears
    /// exactly once.
    ///
    /// # Errors
    ///
    /// [`CubeError::InvalidAxisOrder`] if the axes are not a permutation of `r`, `g`,
    /// `b`.
    pub fn from_ranges(per_face: Axis, per_row: Axis, per_cell: Axis) -> CommonResult<Self> {
        let axis_order = AxisOrder::try_new([per_face, per_row, per_cell])?;
        Ok(Self::from_axis_order(axis_order))
    }

    #[must_use]
    pub fn from_axis_order(axis_order: AxisOrder) -> Self {
        let step = |it: usize| u8::try_from(it).unwrap_or_default();
        let faces = (0..CUBE_SIDE)
            .map(|face_index| {
                Face::from_fn(usize::from(CUBE_SIDE), |row, col| {
                    let coords = CubeCoords::default()
                        .with(axis_order.per_face(), face_index)
                        .with(axis_order.per_row(), step(row))
                        .with(axis_order.per_cell(), step(col));
                    ColourCell::from_cube_coords(coords)
                })
            })
            .collect();
        Self {
            faces,
            axis_order: Some(axis_order),
        }
    }

    #[must_use]
    pub fn axis_order(&self) -> Option<AxisOrder> { self.axis_order }

    #[must_use]
    pub fn faces(&self) -> &[Face] { &self.faces }

    #[must_use]
    pub fn face(&self, index: usize) -> Option<&Face> { self.faces.get(index) }

    /// # Errors
    ///
    /// [`CubeError::FaceIndexOutOfRange`] if there is no face at `index`.
    pub fn try_face(&self, index: usize) -> CommonResult<&Face> {
        self.faces.get(index).ok_or_else(|| {
            CubeError::FaceIndexOutOfRange {
                index,
                face_count: self.faces.len(),
            }
            .into()
        })
    }

    /// One face per row.
    #[must_use]
    pub fn face_grid(&self) -> FaceGrid {
        FaceGrid::new(self.faces.iter().map(|face| vec![face.clone()]).collect())
    }

    /// First face (in list order) that, in some orientation, has an edge equal to
    /// `face`'s `edge`, placed where it would touch `face`. Eg: for [`Edge::Left`] the
    /// returned face's right edge equals `face`'s left edge.
    ///
    /// Orientations are tried in [`Orientation::SEARCH_ORDER`]. The first exact match
    /// wins, [`None`] if nothing matches.
    #[must_use]
    pub fn find_face_with_edge(&self, face: &Face, edge: Edge) -> Option<Face> {
        let wanted = face.edge(edge);
        let touching = edge.opposite();
        self.faces.iter().find_map(|candidate| {
            Orientation::SEARCH_ORDER.iter().find_map(|orientation| {
                let oriented = candidate.with_orientation(*orientation);
                (oriented.edge(touching) == wanted).then_some(oriented)
            })
        })
    }

    /// Display rows, the faces stacked vertically.
    pub fn iter_s<'a>(
        &'a self,
        options: &RenderOptions,
    ) -> impl Iterator<Item = String> + use<'a> {
        let options = *options;
        self.faces.iter().flat_map(move |face| face.iter_s(&options))
    }

    /// Widest row from [`Self::iter_s`], in terminal columns.
    #[must_use]
    pub fn str_width(&self, options: &RenderOptions) -> usize {
        self.iter_s(options)
            .map(|line| display_width(&line))
            .max()
            .unwrap_or(0)
    }
}
