#![forbid(unsafe_code)]

//! One surface instance.
//!
//! A [`Gui`] binds a root [`Pane`] to a [`Surface`] and tracks which actor
//! is looking at it. It is built once and reused across re-renders; the
//! [`GuiManager`](crate::GuiManager) decides when it is shown.
//!
//! # Lifecycle
//!
//! ```text
//!   new ──► open_inventory(actor) ──► re_render* ──► removed
//!              (viewer bound)          (clicks)       (viewer released)
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use igui_core::{ActorId, ClickNotification, ConstructionError, GuiId, GuiIdAllocator};
use igui_render::Surface;
use igui_widgets::{ClickEvent, Component, Pane};
use tracing::{debug, debug_span, trace, trace_span};

use crate::config::EngineConfig;
use crate::host::{Host, HostView};

/// Hook run every time a GUI is shown, before the host displays it.
pub type DisplayHook = Box<dyn FnMut(&mut Pane, ActorId)>;

/// A titled surface rendered from one component tree.
///
/// Equality and hashing use the id only.
pub struct Gui {
    id: GuiId,
    surface: Surface,
    root: Pane,
    viewer: Option<ActorId>,
    reopen_on_close: bool,
    kill_me: bool,
    on_display: Option<DisplayHook>,
}

impl fmt::Debug for Gui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gui")
            .field("id", &self.id)
            .field("title", &self.surface.title())
            .field("rows", &self.surface.rows())
            .field("viewer", &self.viewer)
            .field("reopen_on_close", &self.reopen_on_close)
            .field("kill_me", &self.kill_me)
            .finish()
    }
}

impl PartialEq for Gui {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Gui {}

impl Hash for Gui {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Gui {
    /// Build a GUI with `rows` rows of `config.row_width` cells.
    ///
    /// The root pane is attached to the new id. Fails without allocating an
    /// id when the title is empty or `rows` is outside `1..=config.max_rows`.
    pub fn new(
        ids: &mut GuiIdAllocator,
        title: impl Into<String>,
        rows: u16,
        mut root: Pane,
        config: &EngineConfig,
    ) -> Result<Self, ConstructionError> {
        let surface = Surface::new(title, config.row_width, rows, config.max_rows)?;
        let id = ids.allocate();
        root.attach(id);
        debug!(gui = %id, title = surface.title(), rows, "gui created");
        Ok(Self {
            id,
            surface,
            root,
            viewer: None,
            reopen_on_close: config.reopen_on_close_default,
            kill_me: false,
            on_display: None,
        })
    }

    /// Stable identity.
    #[inline]
    pub const fn id(&self) -> GuiId {
        self.id
    }

    /// Title shown by the host above the surface.
    pub fn title(&self) -> &str {
        self.surface.title()
    }

    /// The last rendered contents.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The root pane of the component tree.
    pub fn root(&self) -> &Pane {
        &self.root
    }

    /// Mutable root. Changes show up on the next [`re_render`](Self::re_render).
    pub fn root_mut(&mut self) -> &mut Pane {
        &mut self.root
    }

    /// The actor this GUI was last shown to, while it is in a session.
    pub const fn viewer(&self) -> Option<ActorId> {
        self.viewer
    }

    /// Whether a dismissed GUI is shown again on the next tick.
    pub const fn reopen_on_close(&self) -> bool {
        self.reopen_on_close
    }

    /// Whether the GUI is shown again after the actor dismisses it.
    pub fn set_reopen_on_close(&mut self, reopen: bool) {
        self.reopen_on_close = reopen;
    }

    /// Mark as logically destroyed: the next close removes it for good.
    pub fn mark_for_removal(&mut self) {
        self.kill_me = true;
    }

    /// Whether [`mark_for_removal`](Self::mark_for_removal) was called.
    pub const fn is_marked_for_removal(&self) -> bool {
        self.kill_me
    }

    /// Install a hook run every time the GUI is shown.
    #[must_use]
    pub fn with_on_display(mut self, hook: impl FnMut(&mut Pane, ActorId) + 'static) -> Self {
        self.on_display = Some(Box::new(hook));
        self
    }

    /// Replace the display hook.
    pub fn set_on_display(&mut self, hook: impl FnMut(&mut Pane, ActorId) + 'static) {
        self.on_display = Some(Box::new(hook));
    }

    /// Clear the surface and render the whole tree for the viewer.
    ///
    /// Returns `false` (leaving the surface untouched) when no viewer is
    /// bound or the viewer is unreachable. If the host currently shows this
    /// GUI, the fresh contents are pushed to it.
    pub fn re_render(&mut self, host: &mut dyn Host) -> bool {
        let _span = debug_span!("gui.re_render", gui = %self.id).entered();
        let Some(actor) = self.viewer else {
            trace!("no viewer bound");
            return false;
        };
        if !host.is_reachable(actor) {
            trace!(actor = %actor, "viewer unreachable");
            return false;
        }
        self.surface.clear();
        self.root.render(&mut self.surface, actor, 0, 0);
        if host.current_view(actor) == HostView::Gui(self.id) {
            host.sync_view(actor, self.id, &self.surface);
        }
        true
    }

    /// Bind `actor`, render, run the display hook, and ask the host to show
    /// the surface.
    ///
    /// `previous` is the GUI the actor saw before, if any.
    pub fn open_inventory(
        &mut self,
        actor: ActorId,
        previous: Option<GuiId>,
        host: &mut dyn Host,
    ) -> bool {
        self.viewer = Some(actor);
        if !self.re_render(host) {
            return false;
        }
        if let Some(hook) = self.on_display.as_mut() {
            hook(&mut self.root, actor);
            if self.root.take_render_request() {
                self.re_render(host);
            }
        }
        debug!(gui = %self.id, actor = %actor, previous = ?previous, "opening view");
        host.open_view(actor, self.id, &self.surface);
        true
    }

    /// Dispatch one click through the component tree.
    ///
    /// Re-renders afterwards when a handler asked for it.
    pub fn on_click(&mut self, notification: ClickNotification, host: &mut dyn Host) -> ClickEvent {
        let _span = trace_span!("gui.click", gui = %self.id, actor = %notification.actor).entered();
        let mut event = ClickEvent::new(notification, self.surface.row_width(), self.surface.len());
        self.root.on_click(&mut event);
        let requested = self.root.take_render_request() | event.render_requested();
        if requested {
            self.re_render(host);
        }
        trace!(target_component = ?event.target(), cancelled = event.is_cancelled(), "click handled");
        event
    }

    pub(crate) fn release_viewer(&mut self) {
        self.viewer = None;
    }
}
