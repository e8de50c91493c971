//! Property tests for the spatial allocator.
//!
//! Random add/remove streams are replayed against an [`InventoryMap`] and,
//! after every step, the map must satisfy:
//!
//! 1. No two stored intervals overlap.
//! 2. Occupied cells are exactly the union of stored intervals.
//! 3. An add succeeds iff the target was free and in bounds just before.
//! 4. Removing an absent key changes nothing.

use igui_layout::{Dimension, Interval, InventoryMap, Placeable, Placement};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Block {
    key: u8,
    size: Dimension,
}

impl Placeable for Block {
    type Key = u8;

    fn key(&self) -> u8 {
        self.key
    }

    fn size(&self) -> Dimension {
        self.size
    }
}

#[derive(Debug, Clone)]
enum Op {
    Add { key: u8, x: u16, y: u16, w: u16, h: u16 },
    Remove { key: u8 },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..12, 0u16..11, 0u16..8, 1u16..5, 1u16..4)
            .prop_map(|(key, x, y, w, h)| Op::Add { key, x, y, w, h }),
        1 => (0u8..12).prop_map(|key| Op::Remove { key }),
    ]
}

fn assert_sound(map: &InventoryMap<Block>) {
    let intervals: Vec<Interval> = map.iter().map(|(iv, _)| *iv).collect();
    for (i, a) in intervals.iter().enumerate() {
        for b in &intervals[i + 1..] {
            assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
        }
    }

    let size = map.size();
    for y in 0..size.height() {
        for x in 0..size.width() {
            let covered = intervals.iter().any(|iv| iv.contains(x, y));
            assert_eq!(map.is_occupied(x, y), covered, "cell ({x}, {y})");
        }
    }

    let union: usize = intervals
        .iter()
        .map(|iv| iv.width() as usize * iv.height() as usize)
        .sum();
    assert_eq!(map.occupied_cells(), union);
}

proptest! {
    #[test]
    fn packing_stays_sound(ops in proptest::collection::vec(op(), 1..64)) {
        let mut map = InventoryMap::new(Dimension::new(9, 6).unwrap());
        for op in ops {
            match op {
                Op::Add { key, x, y, w, h } => {
                    let size = Dimension::new(w, h).unwrap();
                    let expected = !map.contains(key) && map.has_enough_space(x, y, size);
                    let result = map.add_component(x, y, Block { key, size });
                    prop_assert_eq!(result.is_ok(), expected);
                    if let Ok(iv) = result {
                        prop_assert_eq!(iv, Interval::at(x, y, size));
                    }
                }
                Op::Remove { key } => {
                    let before_len = map.len();
                    let before_cells = map.occupied_cells();
                    let was_present = map.contains(key);
                    let removed = map.remove_component(key);
                    prop_assert_eq!(removed.is_some(), was_present);
                    if !was_present {
                        prop_assert_eq!(map.len(), before_len);
                        prop_assert_eq!(map.occupied_cells(), before_cells);
                    }
                    prop_assert!(map.remove_component(key).is_none());
                }
            }
            assert_sound(&map);
        }
    }

    #[test]
    fn flow_fills_until_full(sizes in proptest::collection::vec((1u16..4, 1u16..3), 1..40)) {
        let mut map = InventoryMap::new(Dimension::new(9, 6).unwrap());
        let mut policy = Placement::Flow;
        for (key, (w, h)) in sizes.into_iter().enumerate() {
            let size = Dimension::new(w, h).unwrap();
            let fit = map.first_fit(size);
            let result = policy.place(&mut map, Block { key: key as u8, size });
            prop_assert_eq!(result.is_ok(), fit.is_some());
            if let (Ok(iv), Some((x, y))) = (result, fit) {
                prop_assert_eq!((iv.min_x, iv.min_y), (x, y));
            }
            assert_sound(&map);
        }
    }
}

#[test]
fn grid_quadrants_can_be_freed_and_refilled() {
    let area = Dimension::new(9, 6).unwrap();
    let quarter = Dimension::new(3, 2).unwrap();
    let mut map = InventoryMap::new(area);
    let mut policy = Placement::grid(area, 3, 3).unwrap();

    for (key, (col, row)) in [(0, 0), (2, 0), (0, 2), (2, 2)].into_iter().enumerate() {
        policy
            .place_at(&mut map, Block { key: key as u8, size: quarter }, col, row)
            .unwrap();
    }
    assert_eq!(map.occupied_cells(), 24);

    let (freed, _) = map.remove_component(0).unwrap();
    policy.release(freed);
    assert_eq!(freed, Interval::new(0, 3, 0, 2));
    assert_eq!(map.occupied_cells(), 18);
    for (x, y) in freed.cells() {
        assert!(!map.is_occupied(x, y));
    }

    let refill = policy
        .place_at(&mut map, Block { key: 9, size: quarter }, 0, 0)
        .unwrap();
    assert_eq!(refill, freed);
    assert_eq!(map.interval_of(1), Some(Interval::new(6, 9, 0, 2)));
    assert_eq!(map.interval_of(2), Some(Interval::new(0, 3, 4, 6)));
    assert_eq!(map.interval_of(3), Some(Interval::new(6, 9, 4, 6)));
    assert_sound(&map);
}
