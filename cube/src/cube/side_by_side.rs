// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{display_width, pad_to_display_width};

/// Joins blocks of rows horizontally, separated by `sep`.
///
/// Each block is as wide as its widest row (ignoring ANSI escapes), and its rows are
/// padded to that width. Blocks with fewer rows are padded with blank rows, so the
/// result is as tall as the tallest block.
#[must_use]
pub fn side_by_side<S: AsRef<str>>(blocks: &[Vec<S>], sep: &str) -> Vec<String> {
    let widths: Vec<usize> = blocks
        .iter()
        .map(|block| {
            block
                .iter()
                .map(|line| display_width(line.as_ref()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

    (0..height)
        .map(|index| {
            blocks
                .iter()
                .zip(&widths)
                .map(|(block, width)| {
                    let line = block.get(index).map_or("", AsRef::as_ref);
                    pad_to_display_width(line, *width)
                })
                .collect::<Vec<_>>()
                .join(sep)
        })
        .collect()
}
