// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Linear interpolation between two colors, used to build the gradient between the
//! anchor cells of a [`crate::Net`].

use crate::{ColourStyle, RgbValue, paint};
use std::fmt::{Display, Formatter};

/// Width that gradient labels are centered in.
pub const GRADIENT_LABEL_WIDTH: usize = 10;

/// Round to 2 decimal places (half away from zero).
#[must_use]
pub fn round2(value: f64) -> f64 { (value * 100.0).round() / 100.0 }

/// Precise linear interpolation, `v0` at `t = 0` and exactly `v1` at `t = 1`. The
/// result is rounded to 2 decimal places.
#[must_use]
pub fn lerp(v0: f64, v1: f64, t: f64) -> f64 { round2((1.0 - t) * v0 + t * v1) }

/// `sample_count` evenly spaced values from `v0` to `v1` (both included).
/// - `0` samples is empty.
/// - `1` sample is just `v0`.
#[must_use]
pub fn interp(v0: f64, v1: f64, sample_count: usize) -> Vec<f64> {
    match sample_count {
        0 => vec![],
        1 => vec![round2(v0)],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let last = (sample_count - 1) as f64;
            (0..sample_count)
                .map(|index| {
                    #[allow(clippy::cast_precision_loss)]
                    let t = index as f64 / last;
                    lerp(v0, v1, t)
                })
                .collect()
        }
    }
}

/// One color of a gradient. Components are in `0.0..=255.0`, rounded to 2 decimal
/// places.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStep {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl GradientStep {
    /// Truncates each component (like a cast), clamped to a byte.
    #[must_use]
    pub fn to_rgb_value(&self) -> RgbValue {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let byte = |it: f64| it.clamp(0.0, 255.0) as u8;
        RgbValue::from_u8(byte(self.red), byte(self.green), byte(self.blue))
    }
}

/// Formats as a tuple of floats, eg: `(95.0, 120.83, 85.0)`.
impl Display for GradientStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.red, self.green, self.blue)
    }
}

/// Per channel [`interp`] from `c1` to `c2`.
#[must_use]
pub fn interp_xyz(c1: RgbValue, c2: RgbValue, sample_count: usize) -> Vec<GradientStep> {
    let channel = |v0: u8, v1: u8| interp(f64::from(v0), f64::from(v1), sample_count);
    let reds = channel(c1.red, c2.red);
    let greens = channel(c1.green, c2.green);
    let blues = channel(c1.blue, c2.blue);
    reds.into_iter()
        .zip(greens)
        .zip(blues)
        .map(|((red, green), blue)| GradientStep { red, green, blue })
        .collect()
}

/// Absolute value of the summed per channel difference. Channels moving in opposite
/// directions cancel out.
#[must_use]
pub fn distance(c1: RgbValue, c2: RgbValue) -> u32 {
    let sum: i32 = c1
        .components()
        .iter()
        .zip(c2.components())
        .map(|(a, b)| i32::from(b) - i32::from(*a))
        .sum();
    sum.unsigned_abs()
}

/// One row per step: the step's label centered in [`GRADIENT_LABEL_WIDTH`] columns, on a
/// true color background.
#[must_use]
pub fn render_gradient(steps: &[GradientStep]) -> Vec<String> {
    steps
        .iter()
        .map(|step| {
            let rgb = step.to_rgb_value();
            let label = format!("{:^GRADIENT_LABEL_WIDTH$}", step.to_string());
            paint(ColourStyle::Background.rgb(rgb.red, rgb.green, rgb.blue), &label)
        })
        .collect()
}
