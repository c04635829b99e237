//! Merge laws checked over random grids

use proptest::prelude::*;
use tui_hangman::core::Grid;

const HEIGHT: usize = 3;
const WIDTH: usize = 4;

fn grid() -> impl Strategy<Value = Grid> {
    proptest::collection::vec(
        prop_oneof![Just(' '), Just('\t'), Just('|'), Just('/'), Just('o'), Just('=')],
        HEIGHT * WIDTH,
    )
    .prop_map(|cells| Grid::from_sequence(cells, WIDTH).unwrap())
}

proptest! {
    #[test]
    fn test_merge_keeps_lower_cell_only_under_blanks(a in grid(), b in grid()) {
        let merged = a.merge(&b).unwrap();
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let expected = if b[(row, column)].is_transparent() {
                    a[(row, column)]
                } else {
                    b[(row, column)]
                };
                prop_assert_eq!(merged[(row, column)], expected);
            }
        }
    }

    #[test]
    fn test_merge_is_associative(a in grid(), b in grid(), c in grid()) {
        let left = a.merge(&b).unwrap().merge(&c).unwrap();
        let right = a.merge(&b.merge(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn test_blank_grid_is_merge_identity(a in grid()) {
        let blank = Grid::blank(HEIGHT, WIDTH).unwrap();
        prop_assert_eq!(a.merge(&blank).unwrap(), a.clone());
    }

    #[test]
    fn test_merge_leaves_inputs_untouched(a in grid(), b in grid()) {
        let (a_before, b_before) = (a.clone(), b.clone());
        let _ = a.merge(&b).unwrap();
        prop_assert_eq!(a, a_before);
        prop_assert_eq!(b, b_before);
    }
}
