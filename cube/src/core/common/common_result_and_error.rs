// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors are returned as [`miette::Report`]s (via [`CommonResult`]), and the concrete
//! cause is a [`CubeError`]. Callers that need to react to a specific failure can
//! downcast the report: `report.downcast_ref::<CubeError>()`.
//!
//! Only domain violations are errors. Failed edge searches are [`None`], and out of
//! range ANSI indices degrade to sentinel colors.

pub type CommonResult<T> = miette::Result<T>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum CubeError {
    /// The axis symbols passed to build a cube are not a permutation of `r`, `g`, `b`.
    #[error("Invalid axis order `{order}`")]
    #[diagnostic(
        code(rgb_cube::axis::invalid_order),
        help("Use each of `r`, `g` and `b` exactly once, eg: `rgb`, `grb`, `bgr`.")
    )]
    InvalidAxisOrder { order: String },

    /// Face rows must all be as long as there are rows.
    #[error("Face must be square and non empty, got {row_count} rows of lengths {row_lengths:?}")]
    #[diagnostic(code(rgb_cube::face::not_square))]
    NonSquareFace {
        row_count: usize,
        row_lengths: Vec<usize>,
    },

    /// Cube names are used as exclusion keys during edge search, so they must be
    /// unique.
    #[error("Duplicate cube name `{name}`")]
    #[diagnostic(
        code(rgb_cube::collection::duplicate_name),
        help("Give each cube in a collection a unique name.")
    )]
    DuplicateCubeName { name: String },

    #[error("No cube named `{name}`, available cubes: {available:?}")]
    #[diagnostic(code(rgb_cube::collection::unknown_cube))]
    UnknownCube {
        name: String,
        available: Vec<String>,
    },

    #[error("Face index {index} is out of range, cube has {face_count} faces")]
    #[diagnostic(code(rgb_cube::cube::face_index_out_of_range))]
    FaceIndexOutOfRange { index: usize, face_count: usize },
}
