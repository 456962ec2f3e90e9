//! Unit tests for gw-core primitives.

#[cfg(test)]
mod coord {
    use crate::Coord;

    #[test]
    fn neighbours_follow_probe_order() {
        let n: Vec<_> = Coord::new(5, 5).neighbours().collect();
        assert_eq!(
            n,
            [Coord::new(5, 6), Coord::new(5, 4), Coord::new(6, 5), Coord::new(4, 5)]
        );
    }

    #[test]
    fn adjacency_is_unit_step_on_one_axis() {
        let c = Coord::new(0, 0);
        assert!(c.is_adjacent(Coord::new(1, 0)));
        assert!(c.is_adjacent(Coord::new(0, -1)));
        assert!(!c.is_adjacent(Coord::new(1, 1)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn ordering_is_x_major() {
        assert!(Coord::new(0, 9) < Coord::new(1, 0));
        assert!(Coord::new(1, 0) < Coord::new(1, 1));
    }

    #[test]
    fn display_and_tuple_conversion() {
        let c: Coord = (3, -2).into();
        assert_eq!(c.to_string(), "(3, -2)");
        assert_eq!(<(i32, i32)>::from(c), (3, -2));
    }
}

#[cfg(test)]
mod grid {
    use crate::{Coord, CoreError, GridBuilder, GridModel};

    #[test]
    fn bounds_come_from_recorded_cells() {
        let mut b = GridBuilder::new();
        b.add_cell(Coord::new(2, -1), false).unwrap();
        b.add_cell(Coord::new(5, 3), false).unwrap();
        let grid = b.build().unwrap();
        let bounds = grid.bounds();
        assert_eq!((bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y), (2, 5, -1, 3));
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn out_of_bounds_is_never_valid() {
        let grid = GridModel::from_rows(&["...", "...", "..."]).unwrap();
        for x in -2..5 {
            for y in -2..5 {
                let c = Coord::new(x, y);
                let inside = (0..3).contains(&x) && (0..3).contains(&y);
                assert_eq!(grid.is_valid(c), inside, "at {c}");
                assert_eq!(grid.in_bounds(c), inside, "at {c}");
            }
        }
    }

    #[test]
    fn blocked_cells_are_invalid_but_in_bounds() {
        let grid = GridModel::from_rows(&["...", ".#.", "..."]).unwrap();
        let c = Coord::new(1, 1);
        assert!(grid.in_bounds(c));
        assert!(grid.is_blocked(c));
        assert!(!grid.is_valid(c));
        assert!(!grid.is_blocked(Coord::new(9, 9)));
    }

    #[test]
    fn unrecorded_interior_cells_are_open_and_unknown() {
        let mut b = GridBuilder::new();
        b.add_cell(Coord::new(0, 0), false).unwrap();
        b.add_cell(Coord::new(2, 2), false).unwrap();
        let grid = b.build().unwrap();
        let gap = Coord::new(1, 1);
        assert!(grid.is_valid(gap));
        assert!(grid.attributes(gap).is_none());
        assert!(grid.attributes(Coord::new(0, 0)).is_some());
    }

    #[test]
    fn conflicting_obstacle_status_rejected() {
        let mut b = GridBuilder::new();
        b.add_cell(Coord::new(0, 0), false).unwrap();
        b.add_cell(Coord::new(0, 0), false).unwrap();
        let err = b.add_cell(Coord::new(0, 0), true).unwrap_err();
        assert!(matches!(err, CoreError::ConflictingObstacle(c) if c == Coord::new(0, 0)));
    }

    #[test]
    fn empty_builder_rejected() {
        assert!(matches!(GridBuilder::new().build(), Err(CoreError::EmptyGrid)));
    }

    #[test]
    fn oversized_bounding_box_rejected() {
        let mut b = GridBuilder::new();
        b.add_cell(Coord::new(0, 0), false).unwrap();
        b.add_cell(Coord::new(100_000, 100_000), false).unwrap();
        assert!(matches!(b.build(), Err(CoreError::TooLarge { .. })));
    }

    #[test]
    fn structure_attributes_and_summary() {
        let mut b = GridBuilder::new();
        for x in 0..4 {
            b.add_cell(Coord::new(x, 0), false).unwrap();
        }
        b.set_structure(Coord::new(0, 0), 1, Some("Apartment".into()), Some(1));
        b.set_structure(Coord::new(1, 0), 1, Some("Apartment".into()), Some(1));
        b.set_structure(Coord::new(2, 0), 2, Some("Building".into()), Some(1));
        b.set_structure(Coord::new(3, 0), 0, None, Some(1));
        let grid = b.build().unwrap();

        let attrs = grid.attributes(Coord::new(2, 0)).unwrap();
        assert_eq!(attrs.label.as_deref(), Some("Building"));
        assert_eq!(attrs.area, Some(1));
        assert!(!grid.attributes(Coord::new(3, 0)).unwrap().is_structure());

        let summary = grid.category_summary();
        assert_eq!(summary.get("Apartment"), Some(&2));
        assert_eq!(summary.get("Building"), Some(&1));
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn cells_iterate_x_major() {
        let grid = GridModel::from_rows(&["ab", "cd"]).unwrap();
        let order: Vec<_> = grid.cells().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            [Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]
        );
    }

    #[test]
    fn retain_drops_cells_before_build() {
        let mut b = GridBuilder::new();
        b.add_cell(Coord::new(0, 0), false).unwrap();
        b.add_cell(Coord::new(9, 9), false).unwrap();
        b.retain(|c, _| c.x < 5);
        let grid = b.build().unwrap();
        assert_eq!(grid.bounds().max_x, 0);
    }
}
