#![forbid(unsafe_code)]

//! Host capability.
//!
//! The engine never displays anything itself. Everything it needs from the
//! environment that actually shows surfaces to users goes through [`Host`]:
//! reachability, what an actor currently looks at, and the three live-view
//! operations. Close notifications travel the other way, through
//! [`GuiManager::handle_close`](crate::GuiManager::handle_close).

use igui_core::{ActorId, GuiId};
use igui_render::Surface;

/// What an actor currently sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostView {
    /// No GUI open.
    #[default]
    Baseline,
    /// One of the engine's GUIs.
    Gui(GuiId),
    /// A view the engine does not own.
    Foreign,
}

impl HostView {
    /// Check if nothing is open.
    #[inline]
    pub const fn is_baseline(&self) -> bool {
        matches!(self, Self::Baseline)
    }
}

/// The environment that shows surfaces to actors.
pub trait Host {
    /// Whether `actor` can currently be shown anything.
    fn is_reachable(&self, actor: ActorId) -> bool;

    /// What `actor` currently sees.
    fn current_view(&self, actor: ActorId) -> HostView;

    /// Show `surface` to `actor`, replacing whatever they see.
    fn open_view(&mut self, actor: ActorId, gui: GuiId, surface: &Surface);

    /// Push fresh contents of an already open view.
    fn sync_view(&mut self, actor: ActorId, gui: GuiId, surface: &Surface);

    /// Close whatever `actor` sees.
    ///
    /// Hosts report the dismissal of an engine GUI back through a close
    /// notification, usually on a later tick.
    fn close_view(&mut self, actor: ActorId);
}
