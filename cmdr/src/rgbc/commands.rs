// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ui_str;
use super::{CLIArg, CLICommand, LayoutArg};
use crate::get_terminal_width;
use rgb_cube::{AxisOrder, CommonResult, CubeCollection, NetAssembler, RenderOptions,
               distance, listing, render_gradient, side_by_side, swatch_grid};
use std::str::FromStr;

/// Separator between palette layouts shown side by side.
pub const PALETTE_SEP: &str = "  ";

/// Rows of output for the command in `cli_arg`.
///
/// # Errors
///
/// Any [`rgb_cube::CubeError`] from building cubes or looking up the seed face.
pub fn try_run_command(cli_arg: &CLIArg) -> CommonResult<Vec<String>> {
    match &cli_arg.command {
        CLICommand::Palette {
            layouts,
            padding_top,
            padding_bottom,
        } => Ok(run_palette(layouts, *padding_top, *padding_bottom)),
        CLICommand::Cubes {
            orders,
            width,
            grid_sep,
            render,
        } => try_run_cubes(
            orders,
            width.unwrap_or_else(get_terminal_width),
            grid_sep,
            &(*render).into(),
        ),
        CLICommand::Net {
            orders,
            seed_cube,
            face,
            rotation,
            flip,
            all_rotations,
            steps,
            render,
        } => {
            let rotations = if *all_rotations { 0..4 } else { *rotation..*rotation + 1 };
            try_run_net(
                orders,
                &NetRequest {
                    seed_cube,
                    face_index: *face,
                    rotations,
                    flip: *flip,
                    steps: *steps,
                },
                &(*render).into(),
            )
        }
    }
}

/// A single layout is printed as is. Several are titled and placed side by side.
#[must_use]
pub fn run_palette(layouts: &[LayoutArg], pad_top: usize, pad_bottom: usize) -> Vec<String> {
    let block = |layout: LayoutArg| match layout.palette_layout() {
        Some(palette_layout) => swatch_grid(palette_layout, pad_top, pad_bottom),
        None => listing(),
    };

    match layouts {
        [layout] => block(*layout),
        _ => {
            let blocks: Vec<Vec<String>> = layouts
                .iter()
                .map(|layout| {
                    let name = format!("{layout:?}").to_ascii_lowercase();
                    let mut acc = vec![ui_str::palette_title(&name)];
                    acc.extend(block(*layout));
                    acc
                })
                .collect();
            side_by_side(&blocks, PALETTE_SEP)
        }
    }
}

/// # Errors
///
/// [`rgb_cube::CubeError::InvalidAxisOrder`] or
/// [`rgb_cube::CubeError::DuplicateCubeName`] for bad `orders`.
pub fn try_run_cubes(
    orders: &[String],
    display_width: usize,
    grid_sep: &str,
    options: &RenderOptions,
) -> CommonResult<Vec<String>> {
    let collection =
        CubeCollection::try_from_axis_orders(orders)?.with_display_width(display_width);
    Ok(collection.render(grid_sep, options))
}

#[derive(Clone, Debug)]
pub struct NetRequest<'a> {
    /// Axis order of the cube the seed comes from, it must be one of the `orders`.
    pub seed_cube: &'a str,
    pub face_index: usize,
    pub rotations: std::ops::Range<u8>,
    pub flip: bool,
    pub steps: usize,
}

/// For each rotation of the seed face: a header, the net, and (if both anchor faces
/// were found) the anchors and the gradient between them.
///
/// # Errors
///
/// - Bad `orders`, see [`try_run_cubes`].
/// - [`rgb_cube::CubeError::UnknownCube`] if `seed_cube` is not in `orders`.
/// - [`rgb_cube::CubeError::FaceIndexOutOfRange`] for a bad `face_index`.
pub fn try_run_net(
    orders: &[String],
    request: &NetRequest<'_>,
    options: &RenderOptions,
) -> CommonResult<Vec<String>> {
    let collection = CubeCollection::try_from_axis_orders(orders)?;
    let seed_cube = AxisOrder::from_str(request.seed_cube)?.to_string();
    let face = collection
        .try_get(&seed_cube)?
        .try_face(request.face_index)?
        .clone();
    let assembler = NetAssembler::new(&collection);

    let mut acc = vec![];
    for rotation in request.rotations.clone() {
        let net = assembler.assemble(face.rot90(rotation, request.flip), &seed_cube);

        tracing::info!(
            message = "assembled net",
            seed_cube = %seed_cube,
            face_index = request.face_index,
            rotation,
            flip = request.flip,
            found_count = net.found_count()
        );

        acc.push(ui_str::net_header(
            &seed_cube,
            request.face_index,
            net.seed.face.orientation(),
            net.found_count(),
        ));
        acc.extend(net.iter_s(options));

        match (net.colour_anchors(), net.gradient(request.steps)) {
            (Some((c1, c2)), Some(gradient)) => {
                acc.push(ui_str::anchors_msg(c1, c2, distance(c1, c2)));
                acc.extend(render_gradient(&gradient));
            }
            _ => acc.push(ui_str::no_anchors_msg()),
        }
    }

    Ok(acc)
}
