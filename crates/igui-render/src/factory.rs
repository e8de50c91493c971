#![forbid(unsafe_code)]

//! Display factories.
//!
//! The engine never knows what a host cell really is. A host implements
//! [`DisplayFactory`] to map each [`Icon`] descriptor to its own cell type
//! when it presents a [`Surface`].

use crate::icon::Icon;
use crate::surface::Surface;

/// Maps visual descriptors to concrete host cell values.
pub trait DisplayFactory {
    /// The host's cell value.
    type Cell;

    /// Build the cell for one descriptor.
    fn build(&self, icon: &Icon) -> Self::Cell;

    /// The cell shown where nothing was rendered.
    fn empty(&self) -> Self::Cell;

    /// Build every cell of a surface, row-major.
    fn materialize(&self, surface: &Surface) -> Vec<Self::Cell> {
        surface
            .cells()
            .iter()
            .map(|cell| match cell {
                Some(icon) => self.build(icon),
                None => self.empty(),
            })
            .collect()
    }
}

/// Plain-text factory: one character per cell.
///
/// Uses the first character of the icon key, `.` for empty cells. Handy for
/// logs and test assertions.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphFactory;

impl GlyphFactory {
    /// Render a surface as text, one line per row.
    pub fn render_text(&self, surface: &Surface) -> String {
        let cells = self.materialize(surface);
        cells
            .chunks(surface.row_width() as usize)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DisplayFactory for GlyphFactory {
    type Cell = char;

    fn build(&self, icon: &Icon) -> char {
        icon.key().chars().next().unwrap_or('?')
    }

    fn empty(&self) -> char {
        '.'
    }
}
