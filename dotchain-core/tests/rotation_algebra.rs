//! Host-side algebra checks for module rotation and chain ordering.
//!
//! Quarter turns must compose like the rotation group of the square, and the
//! reversed chain order must be its own inverse.

use dotchain_core::chain::physical_index;
use dotchain_core::config::{Rotation, MAX_MODULES};
use dotchain_core::matrix::{rotate, rotate_columns, Matrix8x8};
use proptest::prelude::*;

fn any_matrix() -> impl Strategy<Value = Matrix8x8> {
    proptest::array::uniform8(any::<u8>()).prop_map(|columns| Matrix8x8::from_columns(&columns))
}

proptest! {
    #[test]
    fn two_quarter_turns_make_a_half_turn(m in any_matrix()) {
        let twice = rotate(&rotate(&m, Rotation::Clockwise), Rotation::Clockwise);
        prop_assert_eq!(twice, rotate(&m, Rotation::HalfTurn));
    }

    #[test]
    fn counterclockwise_undoes_clockwise(m in any_matrix()) {
        let back = rotate(&rotate(&m, Rotation::Clockwise), Rotation::CounterClockwise);
        prop_assert_eq!(back, m);

        let back = rotate(&rotate(&m, Rotation::CounterClockwise), Rotation::Clockwise);
        prop_assert_eq!(back, m);
    }

    #[test]
    fn half_turn_is_an_involution(m in any_matrix()) {
        let back = rotate(&rotate(&m, Rotation::HalfTurn), Rotation::HalfTurn);
        prop_assert_eq!(back, m);
    }

    #[test]
    fn rotation_preserves_lit_count(columns in proptest::array::uniform8(any::<u8>())) {
        let lit: u32 = columns.iter().map(|c| c.count_ones()).sum();
        for mode in [Rotation::Clockwise, Rotation::CounterClockwise, Rotation::HalfTurn] {
            let rotated: u32 = rotate_columns(&columns, mode).iter().map(|c| c.count_ones()).sum();
            prop_assert_eq!(rotated, lit);
        }
    }

    #[test]
    fn normal_order_is_identity(modules in 1..=MAX_MODULES, seed in any::<usize>()) {
        let g = seed % modules;
        prop_assert_eq!(physical_index(g, modules, false), g);
    }

    #[test]
    fn reversed_order_mirrors_and_inverts(modules in 1..=MAX_MODULES, seed in any::<usize>()) {
        let g = seed % modules;
        let p = physical_index(g, modules, true);
        prop_assert_eq!(p, modules - 1 - g);
        prop_assert!(p < modules);
        prop_assert_eq!(physical_index(p, modules, true), g);
    }
}

#[test]
fn clockwise_turn_of_top_row() {
    // Column 0 fully lit: after the turn every column has bit 7 set
    let m = Matrix8x8::from_columns(&[0xFF, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(rotate(&m, Rotation::Clockwise).to_columns(), [0x80; 8]);
    assert_eq!(rotate(&m, Rotation::CounterClockwise).to_columns(), [0x01; 8]);
}
