//! Tests for the direction vector table and direction parsing

#[cfg(test)]
mod tests {
    use cellgrid::{Direction, GridError, IntoDirection, Offset, get_vector};
    use std::collections::HashSet;

    // Tests every direction maps to its documented offset
    // Verified by swapping the Top and Left offsets
    #[test]
    fn test_vector_table() {
        let expected = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 0),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        for (direction, (dx, dy)) in Direction::ALL.into_iter().zip(expected) {
            assert_eq!(direction.vector(), Offset::new(dx, dy), "{direction}");
        }
    }

    // Tests ALL is ordered row-major from top-left with distinct offsets
    // Verified by moving Center to the end of ALL
    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Direction::ALL.first(), Some(&Direction::TopLeft));
        assert_eq!(Direction::ALL.get(4), Some(&Direction::Center));
        assert_eq!(Direction::ALL.last(), Some(&Direction::BottomRight));

        let offsets: HashSet<_> = Direction::ALL.iter().map(|d| d.vector()).collect();
        assert_eq!(offsets.len(), 9);
    }

    // Tests neighbour scan order is dx outer, dy inner, excluding center
    // Verified by listing NEIGHBORS clockwise
    #[test]
    fn test_neighbor_scan_order() {
        let offsets: Vec<_> = Direction::NEIGHBORS
            .iter()
            .map(|d| (d.vector().dx, d.vector().dy))
            .collect();
        let mut expected = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if (dx, dy) != (0, 0) {
                    expected.push((dx, dy));
                }
            }
        }
        assert_eq!(offsets, expected);
    }

    // Tests offset lookup inverts the vector table
    // Verified by returning Center for unknown offsets
    #[test]
    fn test_from_offset() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_offset(direction.vector()), Some(direction));
        }
        assert_eq!(Direction::from_offset(Offset::new(2, 0)), None);
        assert_eq!(Direction::from_offset(Offset::new(-1, -2)), None);
    }

    // Tests opposite directions cancel out
    // Verified by mapping TopRight to BottomRight
    #[test]
    fn test_opposite_cancels() {
        for direction in Direction::ALL {
            let a = direction.vector();
            let b = direction.opposite().vector();
            assert_eq!((a.dx + b.dx, a.dy + b.dy), (0, 0));
        }
    }

    // Tests name parsing across common spellings
    // Verified by removing underscore stripping
    #[test]
    fn test_parse_names() {
        assert_eq!("TopLeft".parse::<Direction>(), Ok(Direction::TopLeft));
        assert_eq!("top_left".parse::<Direction>(), Ok(Direction::TopLeft));
        assert_eq!("BOTTOM-RIGHT".parse::<Direction>(), Ok(Direction::BottomRight));
        assert_eq!("center".parse::<Direction>(), Ok(Direction::Center));
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }

    // Tests case is ignored by the name comparison alone, separators anywhere
    // Verified by comparing case-sensitively after stripping separators
    #[test]
    fn test_parse_mixed_case_and_separators() {
        assert_eq!("TOP_LEFT".parse::<Direction>(), Ok(Direction::TopLeft));
        assert_eq!("bOtToM lEfT".parse::<Direction>(), Ok(Direction::BottomLeft));
        assert_eq!("top__right-".parse::<Direction>(), Ok(Direction::TopRight));
        assert!("top_lef".parse::<Direction>().is_err());
        assert!("topleftx".parse::<Direction>().is_err());
    }

    // Tests unknown names produce a typed error
    // Verified by defaulting unknown names to Center
    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "Up".parse::<Direction>(),
            Err(GridError::UnknownDirection {
                name: "Up".to_string()
            })
        );
        assert!("".parse::<Direction>().is_err());
    }

    // Tests unrecognised directions resolve to no offset rather than (0, 0)
    // Verified by returning Offset::new(0, 0) for unknown input
    #[test]
    fn test_get_vector_absent_for_unknown() {
        assert_eq!(get_vector(Direction::Right), Some(Offset::new(0, 1)));
        assert_eq!(get_vector("Center"), Some(Offset::new(0, 0)));
        assert_eq!(get_vector("Nowhere"), None);
        assert_eq!(get_vector((3_i32, 3_i32)), None);
        assert_eq!(get_vector(None::<Direction>), None);
    }

    // Tests every supported input resolves through IntoDirection
    // Verified by ignoring the Option wrapper
    #[test]
    fn test_into_direction_inputs() {
        assert_eq!((1_i32, 0_i32).into_direction(), Some(Direction::Bottom));
        assert_eq!(Offset::new(-1, 1).into_direction(), Some(Direction::TopRight));
        assert_eq!(String::from("left").into_direction(), Some(Direction::Left));
        assert_eq!((&String::from("Top")).into_direction(), Some(Direction::Top));
        assert_eq!(Some(Direction::Bottom).into_direction(), Some(Direction::Bottom));
        assert_eq!(Some("bogus").into_direction(), None);
    }
}
