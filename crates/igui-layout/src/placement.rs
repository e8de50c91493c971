#![forbid(unsafe_code)]

//! Placement policies.
//!
//! A [`Placement`] chooses where a new item lands inside an
//! [`InventoryMap`]. All three policies share one contract: duplicates are
//! rejected, rejected items are handed back untouched, and every successful
//! placement goes through the map's own collision check.
//!
//! | Policy   | `place` (automatic)              | `place_at(x, y)`          |
//! |----------|----------------------------------|---------------------------|
//! | Anchor   | always rejected                  | raw cell corner           |
//! | Grid     | first free grid cell, row-major  | grid cell `(column, row)` |
//! | Flow     | first raw fit, row-major         | always rejected           |

use igui_core::{ConstructionError, Dimension, Interval};

use crate::inventory_map::{InventoryMap, Placeable};

/// How a container positions its children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Explicit corner placement only.
    Anchor,
    /// Equal-sized cells with their own occupancy.
    Grid(GridPlacement),
    /// First-fit scan over raw cells.
    Flow,
}

impl Placement {
    /// Grid policy dividing `area` into `columns` × `rows` cells.
    pub fn grid(area: Dimension, columns: u16, rows: u16) -> Result<Self, ConstructionError> {
        GridPlacement::new(area, columns, rows).map(Self::Grid)
    }

    /// Check that this policy was built for a container of `size`.
    pub fn check_area(&self, size: Dimension) -> Result<(), ConstructionError> {
        match self {
            Self::Grid(grid) if grid.area != size => Err(ConstructionError::SizeMismatch {
                expected: size,
                actual: grid.area,
            }),
            _ => Ok(()),
        }
    }

    /// Place `item` wherever the policy chooses.
    pub fn place<T: Placeable>(
        &mut self,
        map: &mut InventoryMap<T>,
        item: T,
    ) -> Result<Interval, T> {
        if map.contains(item.key()) {
            return Err(item);
        }
        match self {
            Self::Anchor => Err(item),
            Self::Grid(grid) => grid.place(map, item),
            Self::Flow => match map.first_fit(item.size()) {
                Some((x, y)) => map.add_component(x, y, item),
                None => Err(item),
            },
        }
    }

    /// Place `item` at an explicit position.
    ///
    /// For [`Placement::Anchor`] the position is a raw cell corner; for
    /// [`Placement::Grid`] it is a grid cell. Flow placement has no explicit
    /// positions and always rejects.
    pub fn place_at<T: Placeable>(
        &mut self,
        map: &mut InventoryMap<T>,
        item: T,
        x: u16,
        y: u16,
    ) -> Result<Interval, T> {
        match self {
            Self::Anchor => map.add_component(x, y, item),
            Self::Grid(grid) => grid.place_at(map, item, x, y),
            Self::Flow => Err(item),
        }
    }

    /// Forget policy-side state for an interval that was just removed.
    pub fn release(&mut self, interval: Interval) {
        if let Self::Grid(grid) = self {
            grid.release(interval);
        }
    }
}

/// Fixed-cell grid with its own cell occupancy.
///
/// The cell grid is tracked independently of the raw occupancy grid in the
/// map: a cell counts as taken as soon as any placed interval starts in or
/// covers it.
///
/// Serialized as its shape plus cell occupancy; the cell size is always
/// recomputed through [`GridPlacement::new`] on the way back in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridFields", into = "GridFields")
)]
pub struct GridPlacement {
    area: Dimension,
    columns: u16,
    rows: u16,
    cell: Dimension,
    taken: Vec<bool>,
}

impl GridPlacement {
    /// Divide `area` into `columns` × `rows` cells of
    /// `floor(width / columns)` × `floor(height / rows)`.
    pub fn new(area: Dimension, columns: u16, rows: u16) -> Result<Self, ConstructionError> {
        if columns == 0 || rows == 0 {
            return Err(ConstructionError::InvalidGrid { columns, rows });
        }
        let cell = Dimension::new(area.width() / columns, area.height() / rows)
            .map_err(|_| ConstructionError::InvalidGrid { columns, rows })?;
        Ok(Self {
            area,
            columns,
            rows,
            cell,
            taken: vec![false; columns as usize * rows as usize],
        })
    }

    /// Number of columns.
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Number of rows.
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Size of one cell.
    pub const fn cell_size(&self) -> Dimension {
        self.cell
    }

    /// Check whether the cell at `(column, row)` is taken.
    pub fn is_cell_taken(&self, column: u16, row: u16) -> bool {
        column < self.columns && row < self.rows && self.taken[self.index(column, row)]
    }

    /// Number of taken cells.
    pub fn taken_cells(&self) -> usize {
        self.taken.iter().filter(|&&t| t).count()
    }

    /// Raw corner of the cell at `(column, row)`.
    pub const fn origin_of(&self, column: u16, row: u16) -> (u16, u16) {
        (column * self.cell.width(), row * self.cell.height())
    }

    #[inline]
    fn index(&self, column: u16, row: u16) -> usize {
        row as usize * self.columns as usize + column as usize
    }

    fn covered(&self, interval: Interval) -> impl Iterator<Item = (u16, u16)> + use<> {
        let (cw, ch) = (self.cell.width(), self.cell.height());
        let last_col = self.columns - 1;
        let last_row = self.rows - 1;
        let first = ((interval.min_x / cw).min(last_col), (interval.min_y / ch).min(last_row));
        let last = (
            (interval.max_x.saturating_sub(1) / cw).min(last_col),
            (interval.max_y.saturating_sub(1) / ch).min(last_row),
        );
        Interval::new(first.0, last.0 + 1, first.1, last.1 + 1).cells()
    }

    fn cells_free(&self, interval: Interval) -> bool {
        self.covered(interval).all(|(c, r)| !self.taken[self.index(c, r)])
    }

    fn mark(&mut self, interval: Interval, value: bool) {
        for (c, r) in self.covered(interval) {
            let idx = self.index(c, r);
            self.taken[idx] = value;
        }
    }

    fn place<T: Placeable>(&mut self, map: &mut InventoryMap<T>, item: T) -> Result<Interval, T> {
        let size = item.size();
        let found = (0..self.rows)
            .flat_map(|row| (0..self.columns).map(move |column| (column, row)))
            .map(|(column, row)| self.origin_of(column, row))
            .find(|&(x, y)| {
                map.has_enough_space(x, y, size) && self.cells_free(Interval::at(x, y, size))
            });
        match found {
            Some((x, y)) => {
                let interval = map.add_component(x, y, item)?;
                self.mark(interval, true);
                Ok(interval)
            }
            None => Err(item),
        }
    }

    fn place_at<T: Placeable>(
        &mut self,
        map: &mut InventoryMap<T>,
        item: T,
        column: u16,
        row: u16,
    ) -> Result<Interval, T> {
        if column >= self.columns || row >= self.rows {
            return Err(item);
        }
        let (x, y) = self.origin_of(column, row);
        if !self.cells_free(Interval::at(x, y, item.size())) {
            return Err(item);
        }
        let interval = map.add_component(x, y, item)?;
        self.mark(interval, true);
        Ok(interval)
    }

    fn release(&mut self, interval: Interval) {
        self.mark(interval, false);
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridFields {
    area: Dimension,
    columns: u16,
    rows: u16,
    #[serde(default)]
    taken: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridFields> for GridPlacement {
    type Error = ConstructionError;

    fn try_from(fields: GridFields) -> Result<Self, Self::Error> {
        let mut grid = Self::new(fields.area, fields.columns, fields.rows)?;
        if !fields.taken.is_empty() {
            if fields.taken.len() != grid.taken.len() {
                return Err(ConstructionError::InvalidGrid {
                    columns: fields.columns,
                    rows: fields.rows,
                });
            }
            grid.taken = fields.taken;
        }
        Ok(grid)
    }
}

#[cfg(feature = "serde")]
impl From<GridPlacement> for GridFields {
    fn from(grid: GridPlacement) -> Self {
        Self {
            area: grid.area,
            columns: grid.columns,
            rows: grid.rows,
            taken: grid.taken,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Block(u32, Dimension);

    impl Placeable for Block {
        type Key = u32;

        fn key(&self) -> u32 {
            self.0
        }

        fn size(&self) -> Dimension {
            self.1
        }
    }

    fn dim(w: u16, h: u16) -> Dimension {
        Dimension::new(w, h).unwrap()
    }

    #[test]
    fn anchor_only_places_explicitly() {
        let mut map = InventoryMap::new(dim(9, 6));
        let mut policy = Placement::Anchor;
        assert!(policy.place(&mut map, Block(1, dim(1, 1))).is_err());
        assert_eq!(
            policy.place_at(&mut map, Block(1, dim(2, 2)), 7, 4).unwrap(),
            Interval::new(7, 9, 4, 6)
        );
        assert!(policy.place_at(&mut map, Block(2, dim(1, 1)), 8, 5).is_err());
    }

    #[test]
    fn flow_is_first_fit() {
        let mut map = InventoryMap::new(dim(4, 2));
        let mut policy = Placement::Flow;
        policy.place(&mut map, Block(1, dim(3, 1))).unwrap();
        let iv = policy.place(&mut map, Block(2, dim(2, 1))).unwrap();
        assert_eq!((iv.min_x, iv.min_y), (0, 1));
        let iv = policy.place(&mut map, Block(3, dim(1, 1))).unwrap();
        assert_eq!((iv.min_x, iv.min_y), (3, 0));
        assert!(policy.place_at(&mut map, Block(4, dim(1, 1)), 3, 1).is_err());
    }

    #[test]
    fn grid_cell_size_is_floored() {
        let grid = GridPlacement::new(dim(9, 6), 4, 4).unwrap();
        assert_eq!(grid.cell_size(), dim(2, 1));
        assert_eq!(grid.origin_of(3, 2), (6, 2));
    }

    #[test]
    fn grid_rejects_degenerate_division() {
        assert_eq!(
            GridPlacement::new(dim(3, 3), 4, 1),
            Err(ConstructionError::InvalidGrid {
                columns: 4,
                rows: 1
            })
        );
        assert!(GridPlacement::new(dim(3, 3), 0, 1).is_err());
    }

    #[test]
    fn grid_auto_fills_row_major() {
        let mut map = InventoryMap::new(dim(9, 6));
        let mut policy = Placement::grid(dim(9, 6), 3, 3).unwrap();
        let a = policy.place(&mut map, Block(1, dim(3, 2))).unwrap();
        let b = policy.place(&mut map, Block(2, dim(1, 1))).unwrap();
        assert_eq!((a.min_x, a.min_y), (0, 0));
        assert_eq!((b.min_x, b.min_y), (3, 0));
        let Placement::Grid(grid) = &policy else {
            unreachable!()
        };
        assert!(grid.is_cell_taken(1, 0));
        assert_eq!(grid.taken_cells(), 2);
    }

    #[test]
    fn grid_spanning_item_takes_every_covered_cell() {
        let mut map = InventoryMap::new(dim(9, 6));
        let mut policy = Placement::grid(dim(9, 6), 3, 3).unwrap();
        policy.place_at(&mut map, Block(1, dim(6, 2)), 0, 0).unwrap();
        assert!(policy.place_at(&mut map, Block(2, dim(1, 1)), 1, 0).is_err());
        let iv = policy.place(&mut map, Block(3, dim(1, 1))).unwrap();
        assert_eq!((iv.min_x, iv.min_y), (6, 0));
    }

    #[test]
    fn grid_release_frees_cells() {
        let mut map = InventoryMap::new(dim(9, 6));
        let mut policy = Placement::grid(dim(9, 6), 3, 3).unwrap();
        policy.place_at(&mut map, Block(1, dim(3, 2)), 1, 1).unwrap();
        let (iv, _) = map.remove_component(1).unwrap();
        policy.release(iv);
        assert!(policy.place_at(&mut map, Block(2, dim(3, 2)), 1, 1).is_ok());
    }

    #[test]
    fn grid_rejects_out_of_range_cells() {
        let mut map = InventoryMap::new(dim(9, 6));
        let mut policy = Placement::grid(dim(9, 6), 3, 3).unwrap();
        assert!(policy.place_at(&mut map, Block(1, dim(1, 1)), 3, 0).is_err());
        assert!(policy.place_at(&mut map, Block(1, dim(1, 1)), 0, 3).is_err());
    }

    #[test]
    fn check_area_flags_mismatched_grids() {
        let policy = Placement::grid(dim(9, 6), 3, 3).unwrap();
        assert!(policy.check_area(dim(9, 6)).is_ok());
        assert!(policy.check_area(dim(9, 3)).is_err());
        assert!(Placement::Flow.check_area(dim(1, 1)).is_ok());
    }

    #[test]
    fn duplicates_rejected_by_every_policy() {
        for mut policy in [
            Placement::Anchor,
            Placement::Flow,
            Placement::grid(dim(9, 6), 3, 3).unwrap(),
        ] {
            let mut map = InventoryMap::new(dim(9, 6));
            policy.place_at(&mut map, Block(1, dim(1, 1)), 0, 0).ok();
            map.add_component(8, 5, Block(1, dim(1, 1))).ok();
            assert!(policy.place(&mut map, Block(1, dim(1, 1))).is_err());
            assert_eq!(map.len(), 1);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_grid_is_rebuilt_through_new() {
        let json = r#"{"Grid":{"area":{"width":9,"height":6},"columns":3,"rows":3}}"#;
        let mut policy: Placement = serde_json::from_str(json).unwrap();
        let Placement::Grid(grid) = &policy else {
            unreachable!()
        };
        assert_eq!(grid.cell_size(), dim(3, 2));
        assert_eq!(grid.taken_cells(), 0);

        let mut map = InventoryMap::new(dim(9, 6));
        let iv = policy.place(&mut map, Block(1, dim(1, 1))).unwrap();
        assert_eq!((iv.min_x, iv.min_y), (0, 0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_grid_rejects_bad_shapes() {
        for json in [
            r#"{"area":{"width":0,"height":6},"columns":3,"rows":3}"#,
            r#"{"area":{"width":9,"height":6},"columns":0,"rows":3}"#,
            r#"{"area":{"width":2,"height":6},"columns":3,"rows":3}"#,
            r#"{"area":{"width":9,"height":6},"columns":3,"rows":3,"taken":[true]}"#,
        ] {
            assert!(serde_json::from_str::<GridPlacement>(json).is_err(), "{json}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn grid_occupancy_survives_serialization() {
        let mut map = InventoryMap::new(dim(9, 6));
        let mut policy = Placement::grid(dim(9, 6), 3, 3).unwrap();
        policy.place_at(&mut map, Block(1, dim(3, 2)), 1, 1).unwrap();

        let json = serde_json::to_string(&policy).unwrap();
        assert!(!json.contains("cell"), "{json}");
        let restored: Placement = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, policy);
    }
}
