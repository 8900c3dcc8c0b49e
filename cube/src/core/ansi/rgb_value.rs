// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Display RGB value (each component `0..=255`) of a palette color.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<RgbValue> for (u8, u8, u8) {
    fn from(value: RgbValue) -> Self { (value.red, value.green, value.blue) }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    #[must_use]
    pub fn components(&self) -> [u8; 3] { [self.red, self.green, self.blue] }
}

/// Formats as a tuple, eg: `(95, 135, 0)`. This is the default cell label.
impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_display_as_tuple() {
        assert_eq2!(RgbValue::from((95, 135, 0)).to_string(), "(95, 135, 0)");
    }

    #[test]
    fn test_into_tuple() {
        let tuple: (u8, u8, u8) = RgbValue::from_u8(1, 2, 3).into();
        assert_eq2!(tuple, (1, 2, 3));
    }
}
