#![forbid(unsafe_code)]

//! Static leaf.

use std::any::Any;

use igui_core::{ActorId, ComponentId, Dimension, GuiId};
use igui_render::{Icon, Surface};

use crate::click::ClickEvent;
use crate::{Component, fill};

/// A leaf that only displays an icon. Clicks on it are denied.
#[derive(Debug, Clone)]
pub struct Label {
    id: ComponentId,
    size: Dimension,
    icon: Icon,
    visible: bool,
    owner: Option<GuiId>,
}

impl Label {
    /// A 1×1 label showing `icon`.
    pub fn new(icon: Icon) -> Self {
        Self {
            id: ComponentId::next(),
            size: Dimension::ONE,
            icon,
            visible: true,
            owner: None,
        }
    }

    /// Cover `size` cells instead of one.
    #[must_use]
    pub fn with_size(mut self, size: Dimension) -> Self {
        self.size = size;
        self
    }

    /// Icon shown in every covered cell.
    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// Swap the icon. Visible after the owning GUI re-renders.
    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = icon;
    }
}

impl Component for Label {
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

    fn on_click(&mut self, _event: &mut ClickEvent) {}

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
