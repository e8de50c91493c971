#![forbid(unsafe_code)]

//! Per-actor session stacks.
//!
//! # State machine
//!
//! ```text
//!            submit                    open_next
//!   Empty ───────────► StackedClosed ────────────► StackedOpen
//!     ▲                   ▲      │                   │   │
//!     │ last gui removed  │      └── submit ─────────┘   │
//!     └───────────────────┴──── close reaction / remove ◄┘
//! ```
//!
//! A session is created lazily by the first submit and reclaimed as soon as
//! its stack is empty.
//!
//! # Reentrancy
//!
//! A close notification arrives while the host is still unwinding the close.
//! Reacting to it never touches the host synchronously: re-opens, forced
//! closes and open-next steps are queued on the [`TaskQueue`] and run by the
//! next [`GuiManager::tick`]. Every queued step re-checks the live session
//! state before acting, so a later `remove_all`/`remove_gui` supersedes it.

use std::collections::HashMap;

use igui_core::{ActorId, ClickNotification, ConstructionError, GuiId, GuiIdAllocator};
use igui_widgets::{ClickEvent, Pane};
use tracing::{debug, debug_span, trace};

use crate::config::{ConfigError, EngineConfig};
use crate::error::SessionError;
use crate::gui::Gui;
use crate::host::{Host, HostView};
use crate::scheduler::TaskQueue;

/// Coarse state of one actor's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No stack.
    Empty,
    /// GUIs stacked, none displayed.
    StackedClosed,
    /// The top GUI is displayed.
    StackedOpen,
}

#[derive(Debug, Default)]
struct Session {
    stack: Vec<Gui>,
    displayed: Option<GuiId>,
}

impl Session {
    fn position(&self, id: GuiId) -> Option<usize> {
        self.stack.iter().position(|gui| gui.id() == id)
    }

    fn top_id(&self) -> Option<GuiId> {
        self.stack.last().map(Gui::id)
    }
}

/// Owns every actor's GUI stack and the next-tick queue.
#[derive(Debug, Default)]
pub struct GuiManager {
    sessions: HashMap<ActorId, Session>,
    tasks: TaskQueue,
    ids: GuiIdAllocator,
    config: EngineConfig,
}

impl GuiManager {
    /// Manager for the default host grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager for a custom host grid.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.validated()?,
            ..Self::default()
        })
    }

    /// The validated host grid parameters.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The allocator every GUI of this manager takes its id from.
    pub fn ids_mut(&mut self) -> &mut GuiIdAllocator {
        &mut self.ids
    }

    /// Build a GUI against this manager's config and id allocator.
    pub fn create_gui(
        &mut self,
        title: impl Into<String>,
        rows: u16,
        root: Pane,
    ) -> Result<Gui, ConstructionError> {
        Gui::new(&mut self.ids, title, rows, root, &self.config)
    }

    // ------------------------------------------------------------------
    // Stack mutations
    // ------------------------------------------------------------------

    /// Push `gui` on top of `actor`'s stack and try to show it.
    pub fn submit(&mut self, actor: ActorId, gui: Gui, host: &mut dyn Host) {
        debug!(actor = %actor, gui = %gui.id(), "submit");
        self.sessions.entry(actor).or_default().stack.push(gui);
        self.open_next(actor, host);
    }

    /// Alias of [`submit`](Self::submit).
    pub fn push(&mut self, actor: ActorId, gui: Gui, host: &mut dyn Host) {
        self.submit(actor, gui, host);
    }

    /// Replace `actor`'s whole stack with `gui`, closing any open view first.
    pub fn open(&mut self, actor: ActorId, gui: Gui, host: &mut dyn Host) {
        self.remove_all(actor, host);
        self.submit(actor, gui, host);
    }

    /// Show the top of `actor`'s stack.
    ///
    /// Only proceeds when the actor is reachable and sees either nothing or
    /// one of this session's own GUIs; an unrelated view is never
    /// interrupted. Returns whether the top is displayed afterwards.
    pub fn open_next(&mut self, actor: ActorId, host: &mut dyn Host) -> bool {
        if !host.is_reachable(actor) {
            trace!(actor = %actor, "open_next skipped: unreachable");
            return false;
        }
        let Some(session) = self.sessions.get_mut(&actor) else {
            return false;
        };
        let Some(top) = session.top_id() else {
            return false;
        };
        let view = host.current_view(actor);
        match view {
            HostView::Baseline => {}
            HostView::Gui(shown) if session.position(shown).is_some() => {
                if shown == top && session.displayed == Some(top) {
                    return true;
                }
            }
            _ => {
                debug!(actor = %actor, ?view, "open_next skipped: unrelated view open");
                return false;
            }
        }

        let previous = session.displayed;
        let Some(gui) = session.stack.last_mut() else {
            return false;
        };
        if !gui.open_inventory(actor, previous, host) {
            return false;
        }
        session.displayed = Some(top);
        debug!(actor = %actor, gui = %top, "displayed");
        true
    }

    /// Remove `id` from `actor`'s stack.
    ///
    /// If it was displayed, closing the host view is deferred to the next
    /// tick, followed by another attempt to show the new top.
    pub fn remove_gui(&mut self, actor: ActorId, id: GuiId) -> Option<Gui> {
        let session = self.sessions.get_mut(&actor)?;
        let index = session.position(id)?;
        let mut gui = session.stack.remove(index);
        gui.release_viewer();
        if session.displayed == Some(id) {
            session.displayed = None;
            self.defer(move |manager, host| manager.close_if_showing(actor, id, host));
        }
        debug!(actor = %actor, gui = %id, "removed");
        self.reclaim(actor);
        Some(gui)
    }

    /// Drop `actor`'s whole stack and close whatever view they have open.
    ///
    /// Unlike [`open_next`](Self::open_next) this is forceful: a view the
    /// engine does not own is closed too. Deferred steps still queued for the
    /// actor find no session and do nothing.
    pub fn remove_all(&mut self, actor: ActorId, host: &mut dyn Host) {
        let guis = self.sessions.remove(&actor).map_or(0, |s| s.stack.len());
        debug!(actor = %actor, guis, "remove_all");
        if !host.is_reachable(actor) {
            return;
        }
        let view = host.current_view(actor);
        if !view.is_baseline() {
            debug!(actor = %actor, ?view, "remove_all closing view");
            host.close_view(actor);
        }
    }

    /// Remove the GUI with `id` from whichever session holds it.
    ///
    /// Fails when no session holds it or it was never shown to anyone.
    pub fn close(&mut self, id: GuiId) -> Result<Gui, SessionError> {
        let (actor, viewer) = self
            .sessions
            .iter()
            .find_map(|(actor, session)| {
                let index = session.position(id)?;
                Some((*actor, session.stack[index].viewer()))
            })
            .ok_or(SessionError::UnknownGui(id))?;
        if viewer.is_none() {
            return Err(SessionError::NoViewer(id));
        }
        self.remove_gui(actor, id).ok_or(SessionError::UnknownGui(id))
    }

    // ------------------------------------------------------------------
    // Host notifications
    // ------------------------------------------------------------------

    /// React to the host reporting that `actor` dismissed GUI `id`.
    ///
    /// Notifications for anything other than the displayed GUI are stale and
    /// ignored. Otherwise the GUI is either removed (marked for removal or
    /// not reopening) followed by a deferred open-next, or re-shown on the
    /// next tick if it is still the top by then.
    pub fn handle_close(&mut self, actor: ActorId, id: GuiId) {
        let Some(session) = self.sessions.get_mut(&actor) else {
            trace!(actor = %actor, gui = %id, "close for unknown session ignored");
            return;
        };
        if session.displayed != Some(id) {
            trace!(actor = %actor, gui = %id, "stale close ignored");
            return;
        }
        session.displayed = None;
        let Some(index) = session.position(id) else {
            return;
        };
        let gui = &session.stack[index];
        if gui.is_marked_for_removal() || !gui.reopen_on_close() {
            let mut gui = session.stack.remove(index);
            gui.release_viewer();
            debug!(actor = %actor, gui = %id, "closed and removed");
            self.reclaim(actor);
            self.defer(move |manager, host| {
                manager.open_next(actor, host);
            });
        } else {
            debug!(actor = %actor, gui = %id, "closed, reopening next tick");
            self.defer(move |manager, host| manager.reopen(actor, id, host));
        }
    }

    /// Route a click to `actor`'s displayed GUI.
    ///
    /// `None` when nothing of ours is displayed.
    pub fn handle_click(
        &mut self,
        notification: ClickNotification,
        host: &mut dyn Host,
    ) -> Option<ClickEvent> {
        let session = self.sessions.get_mut(&notification.actor)?;
        let displayed = session.displayed?;
        let index = session.position(displayed)?;
        Some(session.stack[index].on_click(notification, host))
    }

    // ------------------------------------------------------------------
    // Scheduling
    // ------------------------------------------------------------------

    /// Queue `task` for the next tick.
    pub fn defer(&mut self, task: impl FnOnce(&mut GuiManager, &mut dyn Host) + 'static) {
        self.tasks.push(Box::new(task));
    }

    /// Run every task queued before this call. Returns how many ran.
    pub fn tick(&mut self, host: &mut dyn Host) -> usize {
        let batch = self.tasks.take_batch();
        let count = batch.len();
        let _span = debug_span!("manager.tick", tasks = count).entered();
        for task in batch {
            task(self, &mut *host);
        }
        if count > 0 {
            debug!(tasks = count, "tick drained");
        }
        count
    }

    /// Number of tasks waiting for the next tick.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Where `actor`'s session stands in the stacking state machine.
    pub fn session_state(&self, actor: ActorId) -> SessionState {
        match self.sessions.get(&actor) {
            None => SessionState::Empty,
            Some(session) if session.displayed.is_some() => SessionState::StackedOpen,
            Some(_) => SessionState::StackedClosed,
        }
    }

    /// The GUI currently displayed to `actor`.
    pub fn current(&self, actor: ActorId) -> Option<&Gui> {
        let session = self.sessions.get(&actor)?;
        let index = session.position(session.displayed?)?;
        session.stack.get(index)
    }

    /// Number of GUIs stacked for `actor`, displayed or not.
    pub fn stack_len(&self, actor: ActorId) -> usize {
        self.sessions.get(&actor).map_or(0, |s| s.stack.len())
    }

    /// Look up a GUI anywhere in `actor`'s stack.
    pub fn gui(&self, actor: ActorId, id: GuiId) -> Option<&Gui> {
        let session = self.sessions.get(&actor)?;
        session.stack.get(session.position(id)?)
    }

    /// Mutable [`gui`](Self::gui), e.g. to edit a tree before re-rendering.
    pub fn gui_mut(&mut self, actor: ActorId, id: GuiId) -> Option<&mut Gui> {
        let session = self.sessions.get_mut(&actor)?;
        let index = session.position(id)?;
        session.stack.get_mut(index)
    }

    // ------------------------------------------------------------------
    // Deferred steps
    // ------------------------------------------------------------------

    fn close_if_showing(&mut self, actor: ActorId, id: GuiId, host: &mut dyn Host) {
        if host.is_reachable(actor) && host.current_view(actor) == HostView::Gui(id) {
            debug!(actor = %actor, gui = %id, "closing removed view");
            host.close_view(actor);
        }
        self.defer(move |manager, host| {
            manager.open_next(actor, host);
        });
    }

    fn reopen(&mut self, actor: ActorId, id: GuiId, host: &mut dyn Host) {
        let Some(session) = self.sessions.get(&actor) else {
            return;
        };
        if session.top_id() != Some(id) || session.displayed.is_some() {
            trace!(actor = %actor, gui = %id, "reopen superseded");
            return;
        }
        self.open_next(actor, host);
    }

    fn reclaim(&mut self, actor: ActorId) {
        if self
            .sessions
            .get(&actor)
            .is_some_and(|s| s.stack.is_empty() && s.displayed.is_none())
        {
            self.sessions.remove(&actor);
            debug!(actor = %actor, "session reclaimed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::HostSimulator;
    use igui_core::Dimension;

    const ALICE: ActorId = ActorId(1);

    fn make(manager: &mut GuiManager, title: &str) -> Gui {
        let root = Pane::flow(Dimension::new(9, 1).unwrap());
        manager.create_gui(title, 1, root).unwrap()
    }

    #[test]
    fn sessions_are_lazy_and_reclaimed() {
        let mut manager = GuiManager::new();
        let mut host = HostSimulator::new();
        assert_eq!(manager.session_state(ALICE), SessionState::Empty);

        let gui = make(&mut manager, "a");
        let id = gui.id();
        manager.submit(ALICE, gui, &mut host);
        assert_eq!(manager.session_state(ALICE), SessionState::StackedOpen);
        assert_eq!(manager.current(ALICE).map(Gui::id), Some(id));

        let removed = manager.remove_gui(ALICE, id).unwrap();
        assert_eq!(removed.viewer(), None);
        assert_eq!(manager.session_state(ALICE), SessionState::Empty);
        assert_eq!(manager.pending_tasks(), 1);
    }

    #[test]
    fn removing_hidden_gui_defers_nothing() {
        let mut manager = GuiManager::new();
        let mut host = HostSimulator::new();
        let a = make(&mut manager, "a");
        let a_id = a.id();
        manager.submit(ALICE, a, &mut host);
        let b = make(&mut manager, "b");
        manager.submit(ALICE, b, &mut host);

        assert!(manager.remove_gui(ALICE, a_id).is_some());
        assert_eq!(manager.pending_tasks(), 0);
        assert_eq!(manager.stack_len(ALICE), 1);
        assert!(manager.remove_gui(ALICE, a_id).is_none());
    }

    #[test]
    fn tasks_queued_during_tick_wait_for_the_next() {
        let mut manager = GuiManager::new();
        let mut host = HostSimulator::new();
        manager.defer(|manager, _| manager.defer(|_, _| {}));
        assert_eq!(manager.tick(&mut host), 1);
        assert_eq!(manager.pending_tasks(), 1);
        assert_eq!(manager.tick(&mut host), 1);
        assert_eq!(manager.tick(&mut host), 0);
    }

    #[test]
    fn with_config_validates() {
        let bad = EngineConfig {
            row_width: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            GuiManager::with_config(bad),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn click_without_displayed_gui_is_unrouted() {
        let mut manager = GuiManager::new();
        let mut host = HostSimulator::new();
        assert!(
            manager
                .handle_click(ClickNotification::new(ALICE, 0), &mut host)
                .is_none()
        );
    }
}
