#![forbid(unsafe_code)]

//! Grid sink.
//!
//! A [`Surface`] is the fixed-size array of cells one GUI renders into. Its
//! row width is always explicit: a surface never guesses its shape from its
//! total cell count.
//!
//! ```
//! use igui_render::{Icon, Surface};
//!
//! let mut surface = Surface::new("Shop", 9, 3, 6).unwrap();
//! assert_eq!(surface.len(), 27);
//! assert!(surface.set(4, 1, Icon::new("emerald")));
//! assert_eq!(surface.get(13).map(Icon::key), Some("emerald"));
//! ```

use igui_core::{ConstructionError, Dimension};

use crate::icon::Icon;

/// Fixed-size, row-major grid of optional icons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    title: String,
    row_width: u16,
    rows: u16,
    cells: Vec<Option<Icon>>,
}

impl Surface {
    /// Create an empty surface.
    ///
    /// `rows` must lie in `1..=max_rows` and `row_width` must be positive.
    pub fn new(
        title: impl Into<String>,
        row_width: u16,
        rows: u16,
        max_rows: u16,
    ) -> Result<Self, ConstructionError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ConstructionError::MissingArgument("title"));
        }
        if row_width == 0 {
            return Err(ConstructionError::InvalidDimension {
                width: row_width,
                height: rows,
            });
        }
        if rows == 0 || rows > max_rows {
            return Err(ConstructionError::InvalidRows {
                rows,
                max: max_rows,
            });
        }
        Ok(Self {
            title,
            row_width,
            rows,
            cells: vec![None; row_width as usize * rows as usize],
        })
    }

    /// Title shown by the host.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Cells per row.
    #[inline]
    pub const fn row_width(&self) -> u16 {
        self.row_width
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Surfaces always hold at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The surface extent as a dimension.
    pub fn dimension(&self) -> Dimension {
        // Both sides are validated positive in `new`.
        Dimension::new(self.row_width, self.rows).unwrap_or(Dimension::ONE)
    }

    /// Absolute slot of `(x, y)`, or `None` when outside the surface.
    #[inline]
    pub fn slot_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.row_width && y < self.rows {
            Some(y as usize * self.row_width as usize + x as usize)
        } else {
            None
        }
    }

    /// `(x, y)` of an absolute slot, or `None` when past the end.
    #[inline]
    pub fn position_of(&self, slot: usize) -> Option<(u16, u16)> {
        if slot < self.cells.len() {
            let w = self.row_width as usize;
            Some(((slot % w) as u16, (slot / w) as u16))
        } else {
            None
        }
    }

    /// Icon at an absolute slot.
    pub fn get(&self, slot: usize) -> Option<&Icon> {
        self.cells.get(slot).and_then(Option::as_ref)
    }

    /// Icon at `(x, y)`.
    pub fn get_xy(&self, x: u16, y: u16) -> Option<&Icon> {
        self.slot_of(x, y).and_then(|slot| self.get(slot))
    }

    /// Write an icon at `(x, y)`. Returns `false` when out of bounds.
    pub fn set(&mut self, x: u16, y: u16, icon: Icon) -> bool {
        match self.slot_of(x, y) {
            Some(slot) => {
                self.cells[slot] = Some(icon);
                true
            }
            None => false,
        }
    }

    /// Write an icon at an absolute slot. Returns `false` when out of bounds.
    pub fn set_slot(&mut self, slot: usize, icon: Icon) -> bool {
        match self.cells.get_mut(slot) {
            Some(cell) => {
                *cell = Some(icon);
                true
            }
            None => false,
        }
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Option<Icon>] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
