// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rgb_cube::{CellLabel, CubeCollection, DEFAULT_GRADIENT_STEPS, Edge, Net, NetAssembler,
               RenderOptions, assert_eq2, display_width};

fn collection() -> CubeCollection {
    CubeCollection::try_from_axis_orders(["bgr", "rgb", "grb"]).unwrap()
}

/// Every face that was found touches its neighbour along the shared edge.
fn assert_edges_agree(net: &Net) {
    let seed = &net.seed.face;
    if let Some(left) = &net.left {
        assert_eq2!(left.face.edge(Edge::Right), seed.edge(Edge::Left));
        assert!(left.cube_name != net.seed.cube_name);
    }
    if let Some(above) = &net.above {
        assert_eq2!(above.face.edge(Edge::Bottom), seed.edge(Edge::Top));
        assert!(above.cube_name != net.seed.cube_name);
    }
    if let Some(below) = &net.below {
        assert_eq2!(below.face.edge(Edge::Top), seed.edge(Edge::Bottom));
        assert!(below.cube_name != net.seed.cube_name);
        if let Some(below_right) = &net.below_right {
            assert_eq2!(below_right.face.edge(Edge::Left), below.face.edge(Edge::Right));
            assert!(below_right.cube_name != below.cube_name);
        }
        if let Some(below_below) = &net.below_below {
            assert_eq2!(below_below.face.edge(Edge::Top), below.face.edge(Edge::Bottom));
            assert!(below_below.cube_name != below.cube_name);
        }
    } else {
        assert!(net.below_right.is_none());
        assert!(net.below_below.is_none());
    }
}

#[test]
fn test_net_from_first_rgb_face() {
    let collection = collection();
    let seed = collection.try_get("rgb").unwrap().try_face(0).unwrap().clone();

    let net = NetAssembler::new(&collection).assemble(seed, "rgb");

    assert_eq2!(net.found_count(), 6);
    assert_eq2!(net.left.as_ref().unwrap().cube_name, "bgr");
    assert_eq2!(net.below.as_ref().unwrap().cube_name, "grb");
    assert_eq2!(net.above.as_ref().unwrap().cube_name, "grb");
    assert_edges_agree(&net);

    let gradient = net.gradient(DEFAULT_GRADIENT_STEPS).unwrap();
    let (c1, c2) = net.colour_anchors().unwrap();
    assert_eq2!(gradient.len(), DEFAULT_GRADIENT_STEPS);
    assert_eq2!(gradient.first().unwrap().to_rgb_value(), c1);
    assert_eq2!(gradient.last().unwrap().to_rgb_value(), c2);
}

#[test]
fn test_net_from_every_flipped_rotation() {
    let collection = collection();
    let face = collection.try_get("rgb").unwrap().try_face(0).unwrap().clone();

    for rotation in 0..4 {
        let seed = face.rot90(rotation, true);
        let net = NetAssembler::new(&collection).assemble(seed.clone(), "rgb");
        assert_eq2!(net.seed.face, seed);
        assert_edges_agree(&net);
    }
}

#[test]
fn test_net_render() {
    let collection = collection();
    let seed = collection.try_get("rgb").unwrap().try_face(0).unwrap().clone();
    let net = NetAssembler::new(&collection).assemble(seed, "rgb");
    let options = RenderOptions {
        padding_bottom: 1,
        cell_width: 15,
        label: CellLabel::Rgb,
        ..Default::default()
    };

    let lines: Vec<String> = net.iter_s(&options).collect();

    assert_eq2!(lines.len(), 4 * 6 * 2);
    assert!(lines.iter().all(|line| display_width(line) == 3 * 6 * 15));
    // The seed's first cell is black, on the second row of faces.
    let seed_row = strip_ansi_escapes::strip_str(&lines[12]);
    assert!(seed_row[90..105].contains("(0, 0, 0)"));
}
