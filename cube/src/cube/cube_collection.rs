// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AxisOrder, CommonResult, CubeError, Edge, Face, RenderOptions, RgbCube,
            pad_to_display_width};
use ordermap::OrderMap;
use std::str::FromStr;

pub const DEFAULT_DISPLAY_WIDTH: usize = 80;
pub const DEFAULT_GRID_SEP: &str = "  ";

/// Named cubes, kept in insertion order. Names are unique, and are used to exclude a
/// face's own cube when searching for neighbours.
#[derive(Clone, Debug)]
pub struct CubeCollection {
    cubes: OrderMap<String, RgbCube>,
    display_width: usize,
}

/// A cube placed in a display group.
pub type NamedCube<'a> = (&'a str, &'a RgbCube);

impl CubeCollection {
    /// # Errors
    ///
    /// [`CubeError::DuplicateCubeName`] if a name is used twice.
    pub fn try_new<I, N>(cubes: I) -> CommonResult<Self>
    where
        I: IntoIterator<Item = (N, RgbCube)>,
        N: Into<String>,
    {
        let mut acc = OrderMap::new();
        for (name, cube) in cubes {
            let name = name.into();
            if acc.contains_key(&name) {
                return Err(CubeError::DuplicateCubeName { name }.into());
            }
            acc.insert(name, cube);
        }
        Ok(Self {
            cubes: acc,
            display_width: DEFAULT_DISPLAY_WIDTH,
        })
    }

    /// One color cube per axis order, named after it, eg: `["rgb", "grb", "bgr"]`.
    ///
    /// # Errors
    ///
    /// [`CubeError::InvalidAxisOrder`] for an order that isn't a permutation of `rgb`,
    /// [`CubeError::DuplicateCubeName`] if an order is repeated.
    pub fn try_from_axis_orders<I, S>(orders: I) -> CommonResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cubes = orders
            .into_iter()
            .map(|order| {
                let axis_order = AxisOrder::from_str(order.as_ref())?;
                Ok((axis_order.to_string(), RgbCube::from_axis_order(axis_order)))
            })
            .collect::<Result<Vec<_>, CubeError>>()?;
        Self::try_new(cubes)
    }

    /// Terminal width (in columns) that [`Self::layout_groups`] packs cubes into.
    #[must_use]
    pub fn with_display_width(mut self, display_width: usize) -> Self {
        self.display_width = display_width;
        self
    }

    #[must_use]
    pub fn display_width(&self) -> usize { self.display_width }

    #[must_use]
    pub fn len(&self) -> usize { self.cubes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.cubes.is_empty() }

    pub fn names(&self) -> impl Iterator<Item = &str> { self.cubes.keys().map(String::as_str) }

    pub fn iter(&self) -> impl Iterator<Item = NamedCube<'_>> {
        self.cubes.iter().map(|(name, cube)| (name.as_str(), cube))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RgbCube> { self.cubes.get(name) }

    /// # Errors
    ///
    /// [`CubeError::UnknownCube`] if there is no cube called `name`.
    pub fn try_get(&self, name: &str) -> CommonResult<&RgbCube> {
        self.cubes.get(name).ok_or_else(|| {
            CubeError::UnknownCube {
                name: name.to_string(),
                available: self.cubes.keys().cloned().collect(),
            }
            .into()
        })
    }

    /// [`RgbCube::find_face_with_edge`] over every cube except `self_name`, in insertion
    /// order. Returns the name of the cube the match came from too.
    #[must_use]
    pub fn find_face_with_edge_excluding(
        &self,
        self_name: &str,
        face: &Face,
        edge: Edge,
    ) -> Option<(&str, Face)> {
        self.iter()
            .filter(|(name, _)| *name != self_name)
            .find_map(|(name, cube)| {
                cube.find_face_with_edge(face, edge).map(|found| (name, found))
            })
    }

    /// Groups cubes (in order) so that each group's combined [`RgbCube::str_width`] fits
    /// in [`Self::display_width`]. First fit: a cube that does not fit in the current
    /// group starts a new one. A cube wider than the display gets a group of its own.
    #[must_use]
    pub fn layout_groups(&self, options: &RenderOptions) -> Vec<Vec<NamedCube<'_>>> {
        let mut groups = vec![];
        let mut current_group: Vec<NamedCube<'_>> = vec![];
        let mut current_width = 0;

        for (name, cube) in self.iter() {
            let width = cube.str_width(options);
            if !current_group.is_empty() && current_width + width > self.display_width {
                groups.push(std::mem::take(&mut current_group));
                current_width = 0;
            }
            current_group.push((name, cube));
            current_width += width;
        }

        if !current_group.is_empty() {
            groups.push(current_group);
        }

        groups
    }

    /// Display rows for all groups from [`Self::layout_groups`]. Each group starts with
    /// a header row of cube names (each padded to its cube's width), followed by the
    /// cubes' rows side by side. Columns are separated by `grid_sep`.
    #[must_use]
    pub fn render(&self, grid_sep: &str, options: &RenderOptions) -> Vec<String> {
        let mut acc = vec![];

        for group in self.layout_groups(options) {
            let header = group
                .iter()
                .map(|(name, cube)| pad_to_display_width(name, cube.str_width(options)))
                .collect::<Vec<_>>()
                .join(grid_sep);
            acc.push(header);

            let mut columns: Vec<_> =
                group.iter().map(|(_, cube)| cube.iter_s(options)).collect();
            'rows: loop {
                let mut cells = Vec::with_capacity(columns.len());
                for column in &mut columns {
                    match column.next() {
                        Some(line) => cells.push(line),
                        None => break 'rows,
                    }
                }
                acc.push(cells.join(grid_sep));
            }
        }

        tracing::debug!(
            message = "rendered cube collection",
            cube_count = self.len(),
            display_width = self.display_width,
            line_count = acc.len()
        );

        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellLabel, ColourCell, assert_eq2, display_width};

    fn ansi_options() -> RenderOptions {
        RenderOptions {
            label: CellLabel::AnsiIndex,
            ..Default::default()
        }
    }

    #[test]
    fn test_insertion_order_and_lookup() {
        let collection = CubeCollection::try_from_axis_orders(["bgr", "rgb", "grb"]).unwrap();
        assert_eq2!(collection.names().collect::<Vec<_>>(), vec!["bgr", "rgb", "grb"]);
        assert_eq2!(collection.len(), 3);
        assert!(collection.get("rgb").is_some());
        assert!(collection.get("brg").is_none());

        let report = collection.try_get("brg").unwrap_err();
        assert!(matches!(
            report.downcast_ref::<CubeError>(),
            Some(CubeError::UnknownCube { name, .. }) if name == "brg"
        ));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let report = CubeCollection::try_from_axis_orders(["rgb", "RGB"]).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<CubeError>(),
            Some(&CubeError::DuplicateCubeName {
                name: "rgb".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_axis_order_is_rejected() {
        let report = CubeCollection::try_from_axis_orders(["rgb", "rgg"]).unwrap_err();
        assert!(matches!(
            report.downcast_ref::<CubeError>(),
            Some(CubeError::InvalidAxisOrder { .. })
        ));
    }

    #[test]
    fn test_find_face_with_edge_excluding_skips_own_cube() {
        let collection = CubeCollection::try_from_axis_orders(["rgb", "grb", "bgr"]).unwrap();
        let seed = collection.get("rgb").unwrap().face(0).unwrap().clone();

        // The seed's own cube would match it at once, so it must be skipped.
        let (name, found) = collection
            .find_face_with_edge_excluding("rgb", &seed, Edge::Bottom)
            .unwrap();
        assert_eq2!(name, "grb");
        assert_eq2!(found.edge(Edge::Top), seed.edge(Edge::Bottom));

        let (name, _) = collection
            .find_face_with_edge_excluding("rgb", &seed, Edge::Left)
            .unwrap();
        assert_eq2!(name, "bgr");
    }

    #[test]
    fn test_layout_groups_first_fit() {
        // Each cube is 36 columns wide.
        let collection = CubeCollection::try_from_axis_orders(["rgb", "grb", "bgr"])
            .unwrap()
            .with_display_width(73);
        let groups = collection.layout_groups(&ansi_options());
        let names: Vec<Vec<&str>> = groups
            .iter()
            .map(|group| group.iter().map(|(name, _)| *name).collect())
            .collect();
        assert_eq2!(names, vec![vec!["rgb", "grb"], vec!["bgr"]]);

        let narrow = collection.clone().with_display_width(10);
        assert_eq2!(narrow.layout_groups(&ansi_options()).len(), 3);

        let wide = collection.with_display_width(200);
        assert_eq2!(wide.layout_groups(&ansi_options()).len(), 1);
    }

    #[test]
    fn test_layout_groups_never_back_fills() {
        // Widths 54, 42, 30. The last cube would fit next to the first one, but
        // packing only ever appends to the current group.
        let solid_cube = |side: usize| {
            RgbCube::new(vec![Face::from_fn(side, |_, _| ColourCell::from_ansi(16))])
        };
        let collection = CubeCollection::try_new([
            ("a", solid_cube(9)),
            ("b", solid_cube(7)),
            ("c", solid_cube(5)),
        ])
        .unwrap()
        .with_display_width(90);

        let names: Vec<Vec<&str>> = collection
            .layout_groups(&ansi_options())
            .iter()
            .map(|group| group.iter().map(|(name, _)| *name).collect())
            .collect();
        assert_eq2!(names, vec![vec!["a"], vec!["b", "c"]]);
    }

    #[test]
    fn test_render() {
        let collection = CubeCollection::try_from_axis_orders(["rgb", "grb", "bgr"])
            .unwrap()
            .with_display_width(80);
        let lines = collection.render(DEFAULT_GRID_SEP, &ansi_options());

        // Two groups, each a header plus 36 rows.
        assert_eq2!(lines.len(), 2 * (1 + 36));

        let header = &lines[0];
        assert_eq2!(header.len(), 36 + 2 + 36);
        assert!(header.starts_with("rgb "));
        assert_eq2!(&header[38..41], "grb");

        assert_eq2!(display_width(&lines[1]), 36 + 2 + 36);
        assert_eq2!(lines[37].trim_end(), "bgr");
        assert_eq2!(display_width(&lines[38]), 36);
    }
}
