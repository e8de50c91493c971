#![forbid(unsafe_code)]

//! Click events.
//!
//! A [`ClickEvent`] wraps one [`ClickNotification`] for the duration of a
//! single dispatch. While the event travels down the tree it accumulates
//! the offset of every container it enters, so at any depth
//! `raw position - offset` is the position in the current container's
//! local space.
//!
//! Events start out denying the host's default action. Handlers opt out
//! with [`ClickEvent::allow`].

use igui_core::{ActorId, ClickKind, ClickNotification, ComponentId, Interval, Modifiers};

/// Dispatch state for one click.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    notification: ClickNotification,
    row_width: u16,
    surface_cells: usize,
    pane: Option<ComponentId>,
    target: Option<ComponentId>,
    offset_x: u16,
    offset_y: u16,
    cancelled: bool,
    render_requested: bool,
}

impl ClickEvent {
    /// Wrap a notification for a surface `row_width` cells wide holding
    /// `surface_cells` cells in total.
    pub fn new(notification: ClickNotification, row_width: u16, surface_cells: usize) -> Self {
        Self {
            notification,
            row_width,
            surface_cells,
            pane: None,
            target: None,
            offset_x: 0,
            offset_y: 0,
            cancelled: true,
            render_requested: false,
        }
    }

    /// The raw notification.
    pub const fn notification(&self) -> &ClickNotification {
        &self.notification
    }

    /// Who clicked.
    pub const fn actor(&self) -> ActorId {
        self.notification.actor
    }

    /// Raw slot, `None` for clicks outside the window.
    pub const fn slot(&self) -> Option<usize> {
        self.notification.slot
    }

    /// Button or key used.
    pub const fn kind(&self) -> ClickKind {
        self.notification.kind
    }

    /// Modifier keys held.
    pub const fn modifiers(&self) -> Modifiers {
        self.notification.modifiers
    }

    /// Row width of the clicked surface.
    pub const fn row_width(&self) -> u16 {
        self.row_width
    }

    /// Cell count of the clicked surface.
    pub const fn surface_cells(&self) -> usize {
        self.surface_cells
    }

    /// The last container the event passed through.
    pub const fn pane(&self) -> Option<ComponentId> {
        self.pane
    }

    /// The component the event was most recently forwarded to.
    pub const fn target(&self) -> Option<ComponentId> {
        self.target
    }

    /// Accumulated offset from surface space into the current container.
    pub const fn offset(&self) -> (u16, u16) {
        (self.offset_x, self.offset_y)
    }

    /// Position of the click in the current container's local space.
    ///
    /// `None` when the click has no slot, lies past the surface, or falls
    /// above/left of the current container.
    pub fn local_position(&self) -> Option<(u16, u16)> {
        let slot = self.notification.slot?;
        if slot >= self.surface_cells || self.row_width == 0 {
            return None;
        }
        let w = self.row_width as usize;
        let x = u16::try_from(slot % w).ok()?;
        let y = u16::try_from(slot / w).ok()?;
        Some((x.checked_sub(self.offset_x)?, y.checked_sub(self.offset_y)?))
    }

    /// Whether the host's default action will be denied.
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Let the host perform its default action for this click.
    pub fn allow(&mut self) {
        self.cancelled = false;
    }

    /// Deny the host's default action for this click.
    pub fn deny(&mut self) {
        self.cancelled = true;
    }

    /// Ask the owning GUI to re-render once dispatch finishes.
    pub fn request_render(&mut self) {
        self.render_requested = true;
    }

    /// Whether a handler asked for a re-render.
    pub const fn render_requested(&self) -> bool {
        self.render_requested
    }

    pub(crate) fn enter_pane(&mut self, pane: ComponentId) {
        self.pane = Some(pane);
    }

    /// Change basis into a child placed at `interval`.
    pub(crate) fn descend(&mut self, interval: Interval, target: ComponentId) {
        self.offset_x = self.offset_x.saturating_add(interval.min_x);
        self.offset_y = self.offset_y.saturating_add(interval.min_y);
        self.target = Some(target);
    }
}
