//! Property-based tests for position ordering and edge construction.

use std::cmp::Ordering;

use latticeview_core::{Axis, Edge, Pos, Settings, Vector3D};
use proptest::prelude::*;

fn lattice_pos() -> impl Strategy<Value = Pos> {
    (-8i32..8, -8i32..8, -8i32..8)
        .prop_map(|(x, y, z)| Pos::new(f64::from(x), f64::from(y), f64::from(z)))
}

fn axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

proptest! {
    #[test]
    fn prop_compare_is_antisymmetric(a in lattice_pos(), b in lattice_pos()) {
        prop_assert_eq!(Pos::compare(&a, &b), Pos::compare(&b, &a).reverse());
        prop_assert_eq!(Pos::compare(&a, &b) == Ordering::Equal, a == b);
    }

    #[test]
    fn prop_compare_is_transitive(a in lattice_pos(), b in lattice_pos(), c in lattice_pos()) {
        if Pos::compare(&a, &b) != Ordering::Greater && Pos::compare(&b, &c) != Ordering::Greater {
            prop_assert_ne!(Pos::compare(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn prop_is_less_than_matches_compare(a in lattice_pos(), b in lattice_pos()) {
        prop_assert_eq!(a.is_less_than(&b), Pos::compare(&a, &b) == Ordering::Less);
        prop_assert_eq!(Pos::min(a, b), if a.is_less_than(&b) { a } else { b });
    }

    #[test]
    fn prop_aligned_edge_axis_and_order(a in lattice_pos(), axis in axis(), step in prop_oneof![-6i32..0, 1i32..7]) {
        let settings = Settings::default();
        let b = a.add_on(f64::from(step), &[axis]);
        let edge = Edge::block(a, b, &settings).unwrap();
        prop_assert_eq!(edge.axis(), axis);
        let [v0, v1] = edge.vertices();
        prop_assert_ne!(Pos::compare(&v0.pos, &v1.pos), Ordering::Greater);
        prop_assert!(edge.size().is_non_negative());
    }

    #[test]
    fn prop_misaligned_edge_rejected(a in lattice_pos(), b in lattice_pos()) {
        let differing = a.differing_axes(&b).len();
        prop_assume!(differing != 1);
        prop_assert!(Edge::block(a, b, &Settings::default()).is_err());
    }

    #[test]
    fn prop_decomposition_chains_endpoints(a in lattice_pos(), axis in axis(), span in 1i32..8, margin in 1u32..4) {
        let settings = Settings::default().with_margin(margin);
        let b = a.add_on(f64::from(span), &[axis]);
        let edge = Edge::injector(a, b, &settings).unwrap();
        let units = edge.decompose_to_minimum_units(&settings);

        prop_assert_eq!(units.len(), span as usize);
        prop_assert_eq!(&units[0].vertices()[0], &edge.vertices()[0]);
        prop_assert_eq!(&units[units.len() - 1].vertices()[1], &edge.vertices()[1]);
        for pair in units.windows(2) {
            prop_assert_eq!(&pair[0].vertices()[1], &pair[1].vertices()[0]);
        }
        for unit in &units {
            let step = unit.vertices()[1].pos.get(axis) - unit.vertices()[0].pos.get(axis);
            prop_assert!((step - settings.pitch()).abs() < 1e-10);
        }
    }
}
