#![forbid(unsafe_code)]

//! Host click notifications.
//!
//! A host delivers one [`ClickNotification`] per interaction. Widgets wrap
//! it into a click event that carries dispatch state; the notification
//! itself stays an immutable record of what the user did.
//!
//! # Design Notes
//!
//! - Slots are linear indices into the clicked surface, row-major.
//! - A click outside the surface window entirely has no slot (`None`).
//! - A slot past the end of the GUI's own cells landed in some other grid
//!   the host shows alongside (for example the user's own storage).

use bitflags::bitflags;

use crate::id::ActorId;

/// How the user clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClickKind {
    /// Primary button.
    #[default]
    Left,
    /// Secondary button.
    Right,
    /// Middle button.
    Middle,
    /// Two primary clicks in quick succession.
    Double,
    /// The drop key pressed over a slot.
    Drop,
    /// A hotbar number key (0-indexed) pressed over a slot.
    NumberKey(u8),
}

impl ClickKind {
    /// Check if this is a primary-button click.
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left | Self::Double)
    }

    /// Check if this is a secondary-button click.
    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right)
    }
}

bitflags! {
    /// Modifier keys held during a click.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Control key.
        const CTRL  = 0b0010;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// One click as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickNotification {
    /// Who clicked.
    pub actor: ActorId,
    /// Absolute slot index, or `None` when the click was outside the window.
    pub slot: Option<usize>,
    /// Button or key used.
    pub kind: ClickKind,
    /// Modifier keys held.
    pub modifiers: Modifiers,
}

impl ClickNotification {
    /// Create a plain left click on `slot`.
    #[must_use]
    pub const fn new(actor: ActorId, slot: usize) -> Self {
        Self {
            actor,
            slot: Some(slot),
            kind: ClickKind::Left,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a click that landed outside the window.
    #[must_use]
    pub const fn outside(actor: ActorId) -> Self {
        Self {
            actor,
            slot: None,
            kind: ClickKind::Left,
            modifiers: Modifiers::NONE,
        }
    }

    /// Set the click kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: ClickKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the held modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if Shift was held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Split the slot into `(column, row)` for a grid `row_width` cells wide.
    ///
    /// Returns `None` for clicks without a slot or a zero row width.
    #[must_use]
    pub const fn grid_position(&self, row_width: u16) -> Option<(usize, usize)> {
        match self.slot {
            Some(slot) if row_width > 0 => {
                let w = row_width as usize;
                Some((slot % w, slot / w))
            }
            _ => None,
        }
    }
}
