// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rgb_cube::{ColourStyle, Orientation, RgbValue, paint};

const FG_TITLE: u16 = 117;
const FG_DIM: u16 = 245;

fn fg(ansi_index: u16, text: &str) -> String {
    paint(ColourStyle::Foreground.ansi256(ansi_index), text)
}

pub fn palette_title(layout_name: &str) -> String { fg(FG_TITLE, layout_name) }

pub fn net_header(
    seed_cube: &str,
    face_index: usize,
    orientation: Orientation,
    found_count: usize,
) -> String {
    let text = format!(
        "{seed_cube} face {face_index}, rotation {rotation}{flip}: {found_count} of 6 faces found",
        rotation = orientation.rotation(),
        flip = if orientation.flipped() { " (flipped)" } else { "" },
    );
    fg(FG_TITLE, &text)
}

pub fn anchors_msg(c1: RgbValue, c2: RgbValue, distance: u32) -> String {
    fg(FG_DIM, &format!("c1 = {c1}, c2 = {c2}, distance = {distance}"))
}

pub fn no_anchors_msg() -> String {
    fg(
        FG_DIM,
        "No gradient, the faces left of and above the seed were not both found.",
    )
}
