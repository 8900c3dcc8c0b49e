// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColourCell, Face, RenderOptions};

/// Rows of faces, rendered side by side within a row and stacked between rows. A cube
/// is a grid with one face per row, a [`crate::Net`] is a 4x3 grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceGrid {
    rows: Vec<Vec<Face>>,
}

impl From<Vec<Vec<Face>>> for FaceGrid {
    fn from(rows: Vec<Vec<Face>>) -> Self { Self { rows } }
}

impl FaceGrid {
    #[must_use]
    pub fn new(rows: Vec<Vec<Face>>) -> Self { Self { rows } }

    #[must_use]
    pub fn face_rows(&self) -> &[Vec<Face>] { &self.rows }

    /// Every face, row by row.
    pub fn iter_faces(&self) -> impl Iterator<Item = &Face> { self.rows.iter().flatten() }

    /// Cell rows spanning each row of faces. Within a face row, the `i`th cell row is the
    /// `i`th row of every face joined left to right, stopping at the shortest face.
    pub fn iter_rows(&self) -> impl Iterator<Item = Vec<ColourCell>> {
        self.rows.iter().flat_map(|face_row| {
            let height = face_row.iter().map(Face::side).min().unwrap_or(0);
            (0..height).map(move |index| {
                face_row
                    .iter()
                    .filter_map(|face| face.row(index))
                    .flatten()
                    .copied()
                    .collect()
            })
        })
    }

    /// Display rows. Faces in the same row are zipped line by line (stopping at the
    /// shortest) and concatenated.
    pub fn iter_s<'a>(
        &'a self,
        options: &RenderOptions,
    ) -> impl Iterator<Item = String> + use<'a> {
        let options = *options;
        self.rows.iter().flat_map(move |face_row| {
            let mut columns: Vec<_> =
                face_row.iter().map(|face| face.iter_s(&options)).collect();
            std::iter::from_fn(move || {
                if columns.is_empty() {
                    return None;
                }
                let mut acc = String::new();
                for column in &mut columns {
                    acc.push_str(&column.next()?);
                }
                Some(acc)
            })
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
