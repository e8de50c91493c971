#![forbid(unsafe_code)]

//! Interval-based spatial allocator.
//!
//! An [`InventoryMap`] pairs a boolean occupancy grid (O(1) per-cell
//! collision tests) with a list of `(Interval, item)` entries (memory
//! proportional to the number of items). Point lookups scan the entries;
//! grids are small enough that this stays cheap.
//!
//! Cloning a map clones every item through its own `Clone`, so a map of
//! boxed components yields a structurally independent copy.

use std::fmt;

use igui_core::{Dimension, Interval};

/// Something with a stable identity and a fixed size that can be packed.
pub trait Placeable {
    /// Identity used for duplicate detection and removal.
    type Key: Copy + PartialEq + fmt::Debug;

    /// The item's identity.
    fn key(&self) -> Self::Key;

    /// The item's fixed extent.
    fn size(&self) -> Dimension;
}

/// Occupancy grid plus interval-to-item mapping.
#[derive(Clone)]
pub struct InventoryMap<T> {
    size: Dimension,
    occupied: Vec<bool>,
    entries: Vec<(Interval, T)>,
}

impl<T> fmt::Debug for InventoryMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryMap")
            .field("size", &self.size)
            .field(
                "intervals",
                &self.entries.iter().map(|(iv, _)| iv).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<T: Placeable> InventoryMap<T> {
    /// Create an empty map covering `size`.
    pub fn new(size: Dimension) -> Self {
        Self {
            size,
            occupied: vec![false; size.area()],
            entries: Vec::new(),
        }
    }

    /// The area this map covers.
    #[inline]
    pub const fn size(&self) -> Dimension {
        self.size
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.size.width() as usize + x as usize
    }

    /// Check whether the cell at `(x, y)` is taken.
    ///
    /// Cells outside the map are reported as free; use
    /// [`has_enough_space`](Self::has_enough_space) for placement checks.
    pub fn is_occupied(&self, x: u16, y: u16) -> bool {
        x < self.size.width() && y < self.size.height() && self.occupied[self.index(x, y)]
    }

    /// Check whether `size` anchored at `(x, y)` lies fully inside the map
    /// and covers only free cells. Never mutates.
    pub fn has_enough_space(&self, x: u16, y: u16, size: Dimension) -> bool {
        size.fits_at(x, y, &self.size)
            && Interval::at(x, y, size)
                .cells()
                .all(|(cx, cy)| !self.occupied[self.index(cx, cy)])
    }

    /// Place `item` with its top-left corner at `(x, y)`.
    ///
    /// On success the covered cells become occupied and the item's interval
    /// is returned. The item is handed back untouched when it is already
    /// present, would leave the map, or would cover an occupied cell.
    pub fn add_component(&mut self, x: u16, y: u16, item: T) -> Result<Interval, T> {
        if self.contains(item.key()) || !self.has_enough_space(x, y, item.size()) {
            return Err(item);
        }
        let interval = Interval::at(x, y, item.size());
        for (cx, cy) in interval.cells() {
            let idx = self.index(cx, cy);
            self.occupied[idx] = true;
        }
        self.entries.push((interval, item));
        Ok(interval)
    }

    /// Remove the item with `key`, freeing its cells.
    ///
    /// Absent keys are not an error: the map is left unchanged and `None`
    /// is returned.
    pub fn remove_component(&mut self, key: T::Key) -> Option<(Interval, T)> {
        let pos = self.entries.iter().position(|(_, item)| item.key() == key)?;
        let (interval, item) = self.entries.remove(pos);
        for (cx, cy) in interval.cells() {
            let idx = self.index(cx, cy);
            self.occupied[idx] = false;
        }
        Some((interval, item))
    }

    /// The item whose interval contains `(x, y)`.
    pub fn get_component(&self, x: u16, y: u16) -> Option<(Interval, &T)> {
        self.entries
            .iter()
            .find(|(iv, _)| iv.contains(x, y))
            .map(|(iv, item)| (*iv, item))
    }

    /// Mutable access to the item whose interval contains `(x, y)`.
    pub fn get_component_mut(&mut self, x: u16, y: u16) -> Option<(Interval, &mut T)> {
        self.entries
            .iter_mut()
            .find(|(iv, _)| iv.contains(x, y))
            .map(|(iv, item)| (*iv, item))
    }

    /// Check whether an item with `key` is placed.
    pub fn contains(&self, key: T::Key) -> bool {
        self.entries.iter().any(|(_, item)| item.key() == key)
    }

    /// The interval of the item with `key`.
    pub fn interval_of(&self, key: T::Key) -> Option<Interval> {
        self.entries
            .iter()
            .find(|(_, item)| item.key() == key)
            .map(|(iv, _)| *iv)
    }

    /// The item with `key`.
    pub fn get(&self, key: T::Key) -> Option<&T> {
        self.entries
            .iter()
            .find(|(_, item)| item.key() == key)
            .map(|(_, item)| item)
    }

    /// Mutable access to the item with `key`.
    pub fn get_mut(&mut self, key: T::Key) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|(_, item)| item.key() == key)
            .map(|(_, item)| item)
    }

    /// First `(x, y)` in row-major order where `size` fits.
    pub fn first_fit(&self, size: Dimension) -> Option<(u16, u16)> {
        if !size.fits_inside(&self.size) {
            return None;
        }
        let max_y = self.size.height() - size.height();
        let max_x = self.size.width() - size.width();
        (0..=max_y)
            .flat_map(|y| (0..=max_x).map(move |x| (x, y)))
            .find(|&(x, y)| self.has_enough_space(x, y, size))
    }

    /// Placed items with their intervals, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Interval, &T)> {
        self.entries.iter().map(|(iv, item)| (iv, item))
    }

    /// Mutable iteration over placed items.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Interval, &mut T)> {
        self.entries.iter_mut().map(|(iv, item)| (&*iv, item))
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is placed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.occupied.iter().filter(|&&cell| cell).count()
    }
}
