#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are cell coordinates (0-indexed, origin at top-left) in
//! the local space of whatever container owns them.

use crate::error::ConstructionError;

/// An immutable width × height extent in cells.
///
/// Both sides are strictly positive; the only way to obtain a `Dimension`
/// is through [`Dimension::new`], which rejects zero sides. Deserialization
/// goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DimensionFields")
)]
pub struct Dimension {
    width: u16,
    height: u16,
}

impl Dimension {
    /// A single cell.
    pub const ONE: Dimension = Dimension {
        width: 1,
        height: 1,
    };

    /// Create a new dimension.
    ///
    /// Fails with [`ConstructionError::InvalidDimension`] when either side is zero.
    pub const fn new(width: u16, height: u16) -> Result<Self, ConstructionError> {
        if width == 0 || height == 0 {
            return Err(ConstructionError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells covered.
    #[inline]
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check whether `self` fits inside `outer` when anchored at the origin.
    #[inline]
    pub const fn fits_inside(&self, outer: &Dimension) -> bool {
        self.width <= outer.width && self.height <= outer.height
    }

    /// Check whether `self` anchored at `(x, y)` stays within `outer`.
    #[inline]
    pub const fn fits_at(&self, x: u16, y: u16, outer: &Dimension) -> bool {
        (x as u32 + self.width as u32) <= outer.width as u32
            && (y as u32 + self.height as u32) <= outer.height as u32
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DimensionFields {
    width: u16,
    height: u16,
}

#[cfg(feature = "serde")]
impl TryFrom<DimensionFields> for Dimension {
    type Error = ConstructionError;

    fn try_from(fields: DimensionFields) -> Result<Self, Self::Error> {
        Self::new(fields.width, fields.height)
    }
}

/// The occupied rectangle of one placed component.
///
/// `min_*` bounds are inclusive, `max_*` bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "IntervalFields")
)]
pub struct Interval {
    /// Left edge (inclusive).
    pub min_x: u16,
    /// Right edge (exclusive).
    pub max_x: u16,
    /// Top edge (inclusive).
    pub min_y: u16,
    /// Bottom edge (exclusive).
    pub max_y: u16,
}

impl Interval {
    /// Create an interval from explicit bounds.
    ///
    /// Inverted bounds collapse to an empty interval at the minimum corner.
    #[inline]
    pub const fn new(min_x: u16, max_x: u16, min_y: u16, max_y: u16) -> Self {
        Self {
            min_x,
            max_x: if max_x < min_x { min_x } else { max_x },
            min_y,
            max_y: if max_y < min_y { min_y } else { max_y },
        }
    }

    /// The interval covered by `size` anchored at `(x, y)`.
    #[inline]
    pub const fn at(x: u16, y: u16, size: Dimension) -> Self {
        Self::new(
            x,
            x.saturating_add(size.width()),
            y,
            y.saturating_add(size.height()),
        )
    }

    /// Width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.max_x - self.min_x
    }

    /// Height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.max_y - self.min_y
    }

    /// Check if the interval covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.min_x == self.max_x || self.min_y == self.max_y
    }

    /// Check if a point is inside the interval.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// Check whether two intervals share at least one cell.
    #[inline]
    pub const fn overlaps(&self, other: &Interval) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Shift the interval by `(dx, dy)`, saturating at the coordinate limit.
    #[inline]
    pub const fn translate(&self, dx: u16, dy: u16) -> Interval {
        Interval {
            min_x: self.min_x.saturating_add(dx),
            max_x: self.max_x.saturating_add(dx),
            min_y: self.min_y.saturating_add(dy),
            max_y: self.max_y.saturating_add(dy),
        }
    }

    /// Check whether the interval lies within a `width` × `height` area at the origin.
    #[inline]
    pub const fn fits_within(&self, width: u16, height: u16) -> bool {
        self.max_x <= width && self.max_y <= height
    }

    /// Iterate the `(x, y)` cells covered, row-major.
    pub fn cells(self) -> impl Iterator<Item = (u16, u16)> {
        let (min_x, max_x) = (self.min_x, self.max_x);
        (self.min_y..self.max_y).flat_map(move |y| (min_x..max_x).map(move |x| (x, y)))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct IntervalFields {
    min_x: u16,
    max_x: u16,
    min_y: u16,
    max_y: u16,
}

#[cfg(feature = "serde")]
impl From<IntervalFields> for Interval {
    fn from(f: IntervalFields) -> Self {
        Self::new(f.min_x, f.max_x, f.min_y, f.max_y)
    }
}
