#![forbid(unsafe_code)]

//! Clickable leaf.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use igui_core::{ActorId, ComponentId, Dimension, GuiId};
use igui_render::{Icon, Surface};

use crate::click::ClickEvent;
use crate::{Component, fill};

/// Action run when a button is clicked.
///
/// Handlers are shared between a button and its deep clones.
pub type ClickHandler = Rc<dyn Fn(&mut ClickEvent)>;

/// A leaf that runs an optional action when clicked.
///
/// Clicking a button denies the host's default action unless the button
/// was built with [`allowing_default`](Button::allowing_default).
#[derive(Clone)]
pub struct Button {
    id: ComponentId,
    size: Dimension,
    icon: Icon,
    visible: bool,
    owner: Option<GuiId>,
    handler: Option<ClickHandler>,
    allow_default: bool,
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("id", &self.id)
            .field("size", &self.size)
            .field("icon", &self.icon)
            .field("visible", &self.visible)
            .field("has_handler", &self.handler.is_some())
            .field("allow_default", &self.allow_default)
            .finish()
    }
}

impl Button {
    /// A 1×1 button showing `icon` with no action.
    pub fn new(icon: Icon) -> Self {
        Self {
            id: ComponentId::next(),
            size: Dimension::ONE,
            icon,
            visible: true,
            owner: None,
            handler: None,
            allow_default: false,
        }
    }

    /// Cover `size` cells instead of one.
    #[must_use]
    pub fn with_size(mut self, size: Dimension) -> Self {
        self.size = size;
        self
    }

    /// Run `action` on every click.
    #[must_use]
    pub fn with_action(mut self, action: impl Fn(&mut ClickEvent) + 'static) -> Self {
        self.handler = Some(Rc::new(action));
        self
    }

    /// Let the host perform its default action on click.
    #[must_use]
    pub fn allowing_default(mut self) -> Self {
        self.allow_default = true;
        self
    }

    /// The icon shown in every covered cell.
    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// Change the icon; takes effect on the next render.
    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = icon;
    }
}

impl Component for Button {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn size(&self) -> Dimension {
        self.size
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn render(&self, surface: &mut Surface, _actor: ActorId, x: u16, y: u16) {
        if self.visible {
            fill(surface, x, y, self.size, &self.icon);
        }
    }

    fn on_click(&mut self, event: &mut ClickEvent) {
        if self.allow_default {
            event.allow();
        }
        if let Some(handler) = &self.handler {
            handler(event);
        }
    }

    fn deep_clone(&self) -> Box<dyn Component> {
        let mut copy = self.clone();
        copy.owner = None;
        Box::new(copy)
    }

    fn owner(&self) -> Option<GuiId> {
        self.owner
    }

    fn attach(&mut self, owner: GuiId) {
        self.owner = Some(owner);
    }

    fn detach(&mut self) {
        self.owner = None;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use igui_core::ClickNotification;
    use std::cell::Cell;

    fn click(button: &mut Button) -> ClickEvent {
        let mut event = ClickEvent::new(ClickNotification::new(ActorId(7), 0), 9, 9);
        button.on_click(&mut event);
        event
    }

    #[test]
    fn denies_default_unless_allowed() {
        let mut plain = Button::new(Icon::new("stone"));
        assert!(click(&mut plain).is_cancelled());

        let mut open = Button::new(Icon::new("stone")).allowing_default();
        assert!(!click(&mut open).is_cancelled());
    }

    #[test]
    fn handler_sees_actor_and_is_shared_by_clones() {
        let hits = Rc::new(Cell::new(0u32));
        let seen = hits.clone();
        let mut button = Button::new(Icon::new("lever")).with_action(move |event| {
            assert_eq!(event.actor(), ActorId(7));
            seen.set(seen.get() + 1);
        });
        click(&mut button);

        let mut copy = button.deep_clone();
        let mut event = ClickEvent::new(ClickNotification::new(ActorId(7), 0), 9, 9);
        copy.on_click(&mut event);
        assert_eq!(hits.get(), 2);
        assert_eq!(copy.id(), button.id());
    }

    #[test]
    fn renders_every_covered_cell() {
        let mut surface = Surface::new("t", 9, 2, 6).unwrap();
        let button = Button::new(Icon::new("b")).with_size(Dimension::new(2, 2).unwrap());
        button.render(&mut surface, ActorId(1), 3, 0);
        assert_eq!(surface.filled(), 4);
        assert_eq!(surface.get_xy(4, 1).map(Icon::key), Some("b"));
    }

    #[test]
    fn hidden_button_renders_nothing() {
        let mut surface = Surface::new("t", 9, 1, 6).unwrap();
        let mut button = Button::new(Icon::new("b"));
        button.set_visible(false);
        button.render(&mut surface, ActorId(1), 0, 0);
        assert_eq!(surface.filled(), 0);
    }
}
