#![forbid(unsafe_code)]

//! Deterministic host simulator for testing.
//!
//! `HostSimulator` implements [`Host`] without any real display. It keeps one
//! [`HostView`] per actor, renders every shown surface to text through
//! [`GlyphFactory`], and records every call the engine makes.
//!
//! Like a real host, it reports dismissals asynchronously: closing or
//! replacing an engine view queues a close notification that
//! [`run_tick`](HostSimulator::run_tick) delivers before draining the
//! manager's task queue.
//!
//! # Example
//!
//! ```ignore
//! let mut host = HostSimulator::new();
//! let mut manager = GuiManager::new();
//! manager.submit(actor, gui, &mut host);
//! host.user_close(actor);
//! host.run_tick(&mut manager);
//! assert_eq!(host.screen(actor), Some("a........"));
//! ```

use std::collections::{HashMap, HashSet, VecDeque};

use igui_core::{ActorId, GuiId};
use igui_render::{GlyphFactory, Surface};

use crate::host::{Host, HostView};
use crate::manager::GuiManager;

/// Record of one engine call into the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    /// A view was opened.
    Open { actor: ActorId, gui: GuiId },
    /// An open view was refreshed.
    Sync { actor: ActorId, gui: GuiId },
    /// The actor's view was closed.
    Close { actor: ActorId, view: HostView },
}

/// Headless [`Host`].
#[derive(Debug, Default)]
pub struct HostSimulator {
    views: HashMap<ActorId, HostView>,
    screens: HashMap<ActorId, String>,
    unreachable: HashSet<ActorId>,
    pending_closes: VecDeque<(ActorId, GuiId)>,
    calls: Vec<HostCall>,
}

impl HostSimulator {
    /// Every actor starts reachable, looking at nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle whether `actor` can be shown anything.
    pub fn set_reachable(&mut self, actor: ActorId, reachable: bool) {
        if reachable {
            self.unreachable.remove(&actor);
        } else {
            self.unreachable.insert(actor);
        }
    }

    /// Make `actor` look at something the engine does not own.
    pub fn show_foreign(&mut self, actor: ActorId) {
        self.replace_view(actor, HostView::Foreign);
        self.screens.remove(&actor);
    }

    /// The actor dismisses whatever they see.
    pub fn user_close(&mut self, actor: ActorId) {
        self.replace_view(actor, HostView::Baseline);
        self.screens.remove(&actor);
    }

    /// What `actor` is looking at.
    pub fn view(&self, actor: ActorId) -> HostView {
        self.views.get(&actor).copied().unwrap_or_default()
    }

    /// Text of the surface `actor` currently sees.
    pub fn screen(&self, actor: ActorId) -> Option<&str> {
        self.screens.get(&actor).map(String::as_str)
    }

    /// Every call made so far, oldest first.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Number of views opened for `actor`.
    pub fn opened(&self, actor: ActorId) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::Open { actor: a, .. } if *a == actor))
            .count()
    }

    /// Close notifications waiting for the next tick.
    pub fn pending_closes(&self) -> usize {
        self.pending_closes.len()
    }

    /// Deliver queued close notifications, then run the manager's tick.
    ///
    /// Returns the number of tasks the manager ran.
    pub fn run_tick(&mut self, manager: &mut GuiManager) -> usize {
        for (actor, gui) in std::mem::take(&mut self.pending_closes) {
            manager.handle_close(actor, gui);
        }
        manager.tick(self)
    }

    /// Run ticks until neither side has work left, at most `limit` times.
    pub fn settle(&mut self, manager: &mut GuiManager, limit: usize) -> usize {
        let mut ticks = 0;
        while ticks < limit && (manager.pending_tasks() > 0 || !self.pending_closes.is_empty()) {
            self.run_tick(manager);
            ticks += 1;
        }
        ticks
    }

    fn replace_view(&mut self, actor: ActorId, next: HostView) -> HostView {
        let previous = self.views.insert(actor, next).unwrap_or_default();
        if let HostView::Gui(old) = previous
            && next != previous
        {
            self.pending_closes.push_back((actor, old));
        }
        previous
    }
}

impl Host for HostSimulator {
    fn is_reachable(&self, actor: ActorId) -> bool {
        !self.unreachable.contains(&actor)
    }

    fn current_view(&self, actor: ActorId) -> HostView {
        self.view(actor)
    }

    fn open_view(&mut self, actor: ActorId, gui: GuiId, surface: &Surface) {
        self.replace_view(actor, HostView::Gui(gui));
        self.screens.insert(actor, GlyphFactory.render_text(surface));
        self.calls.push(HostCall::Open { actor, gui });
    }

    fn sync_view(&mut self, actor: ActorId, gui: GuiId, surface: &Surface) {
        self.screens.insert(actor, GlyphFactory.render_text(surface));
        self.calls.push(HostCall::Sync { actor, gui });
    }

    fn close_view(&mut self, actor: ActorId) {
        let view = self.replace_view(actor, HostView::Baseline);
        self.screens.remove(&actor);
        self.calls.push(HostCall::Close { actor, view });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use igui_core::GuiIdAllocator;

    #[test]
    fn replacing_an_engine_view_queues_its_close() {
        let mut host = HostSimulator::new();
        let mut ids = GuiIdAllocator::new();
        let (a, b) = (ids.allocate(), ids.allocate());
        let surface = Surface::new("t", 9, 1, 6).unwrap();
        let actor = ActorId(3);

        host.open_view(actor, a, &surface);
        assert_eq!(host.pending_closes(), 0);
        host.open_view(actor, b, &surface);
        assert_eq!(host.pending_closes(), 1);
        host.show_foreign(actor);
        assert_eq!(host.pending_closes(), 2);
        host.user_close(actor);
        assert_eq!(host.pending_closes(), 2);
        assert_eq!(host.view(actor), HostView::Baseline);
        assert_eq!(host.opened(actor), 2);
    }

    #[test]
    fn reachability_toggles() {
        let mut host = HostSimulator::new();
        assert!(host.is_reachable(ActorId(1)));
        host.set_reachable(ActorId(1), false);
        assert!(!host.is_reachable(ActorId(1)));
        host.set_reachable(ActorId(1), true);
        assert!(host.is_reachable(ActorId(1)));
    }
}
