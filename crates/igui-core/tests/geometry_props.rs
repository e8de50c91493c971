//! Property tests for cell geometry.

use igui_core::{ActorId, ClickNotification, Dimension, Interval};
use proptest::prelude::*;

fn interval() -> impl Strategy<Value = Interval> {
    (0u16..12, 0u16..8, 1u16..6, 1u16..5)
        .prop_map(|(x, y, w, h)| Interval::at(x, y, Dimension::new(w, h).unwrap()))
}

proptest! {
    #[test]
    fn overlap_matches_shared_cells(a in interval(), b in interval()) {
        let shared = a.cells().any(|(x, y)| b.contains(x, y));
        prop_assert_eq!(a.overlaps(&b), shared);
        prop_assert_eq!(b.overlaps(&a), shared);
    }

    #[test]
    fn fits_at_agrees_with_interval_bounds(
        x in 0u16..12, y in 0u16..8, w in 1u16..10, h in 1u16..7,
    ) {
        let outer = Dimension::new(9, 6).unwrap();
        let size = Dimension::new(w, h).unwrap();
        let placed = Interval::at(x, y, size);
        prop_assert_eq!(size.fits_at(x, y, &outer), placed.fits_within(9, 6));
        prop_assert_eq!(placed.cells().count(), size.area());
    }

    #[test]
    fn grid_position_splits_slots(slot in 0usize..54, width in 1u16..10) {
        let click = ClickNotification::new(ActorId(1), slot);
        let (x, y) = click.grid_position(width).unwrap();
        prop_assert!(x < width as usize);
        prop_assert_eq!(y * width as usize + x, slot);
    }
}
