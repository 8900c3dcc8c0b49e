// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Axis, CubeError};
use std::{fmt::{Display, Formatter},
          str::FromStr};

/// A permutation of the three color axes, which decides how a cube is sliced into
/// faces.
///
/// - The first axis changes once per face.
/// - The second axis changes once per row.
/// - The third axis changes once per cell (column).
///
/// Parses from, and displays as, strings like `"rgb"` or `"grb"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisOrder([Axis; 3]);

impl AxisOrder {
    /// # Errors
    ///
    /// [`CubeError::InvalidAxisOrder`] if an axis is repeated.
    pub fn try_new(axes: [Axis; 3]) -> Result<Self, CubeError> {
        let [a, b, c] = axes;
        if a == b || b == c || a == c {
            return Err(CubeError::InvalidAxisOrder {
                order: axes.iter().map(ToString::to_string).collect(),
            });
        }
        Ok(Self(axes))
    }

    #[must_use]
    pub fn axes(self) -> [Axis; 3] { self.0 }

    #[must_use]
    pub fn per_face(self) -> Axis { self.0[0] }

    #[must_use]
    pub fn per_row(self) -> Axis { self.0[1] }

    #[must_use]
    pub fn per_cell(self) -> Axis { self.0[2] }
}

impl Display for AxisOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for axis in self.0 {
            write!(f, "{axis}")?;
        }
        Ok(())
    }
}

impl FromStr for AxisOrder {
    type Err = CubeError;

    fn from_str(order: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::InvalidAxisOrder {
            order: order.to_string(),
        };
        let axes = order
            .trim()
            .chars()
            .map(|ch| Axis::from_str(&ch.to_ascii_lowercase().to_string()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        let axes: [Axis; 3] = axes.try_into().map_err(|_| invalid())?;
        Self::try_new(axes).map_err(|_| invalid())
    }
}
