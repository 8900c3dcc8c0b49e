// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rgb_cube::DEFAULT_DISPLAY_WIDTH;

/// Columns of the terminal attached to this process, or [`DEFAULT_DISPLAY_WIDTH`] when
/// there is none (eg: output is piped).
#[must_use]
pub fn get_terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(columns, _rows)| usize::from(columns))
        .ok()
        .filter(|it| *it > 0)
        .unwrap_or(DEFAULT_DISPLAY_WIDTH)
}
