// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::UnicodeWidthStr;

/// Number of terminal columns that `text` occupies once ANSI escape sequences are
/// removed.
#[must_use]
pub fn display_width(text: &str) -> usize {
    let plain = strip_ansi_escapes::strip_str(text);
    UnicodeWidthStr::width(plain.as_str())
}

/// Pad `text` with trailing spaces so that it is at least `width` columns wide. ANSI
/// escape sequences in `text` do not count towards its width.
#[must_use]
pub fn pad_to_display_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    let mut acc = String::with_capacity(text.len() + padding);
    acc.push_str(text);
    acc.extend(std::iter::repeat_n(' ', padding));
    acc
}
