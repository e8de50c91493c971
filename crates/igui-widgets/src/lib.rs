#![forbid(unsafe_code)]

//! Component tree and click dispatch.
//!
//! # Role in igui
//! `igui-widgets` is the retained component tree a GUI is built from. A
//! [`Pane`] owns its children through an `InventoryMap`, renders them at
//! translated offsets, and routes clicks down the tree by repeatedly
//! changing basis from the parent's cell space into the child's.
//!
//! # Primary responsibilities
//! - **Component**: the capability every node has (size, render, click,
//!   deep clone, owner link).
//! - **Pane**: container + dispatcher, with a pluggable placement policy.
//! - **Button / Label**: clickable and static leaves.
//! - **ClickEvent**: per-click dispatch state (offset, target, verdict).

pub mod button;
pub mod click;
pub mod label;
pub mod pane;

use std::any::Any;

use igui_core::{ActorId, ComponentId, Dimension, GuiId, Interval};
use igui_layout::Placeable;
use igui_render::{Icon, Surface};

pub use button::{Button, ClickHandler};
pub use click::ClickEvent;
pub use label::Label;
pub use pane::Pane;

/// A node of the component tree.
///
/// Components have a fixed size for their whole life. The owner link is a
/// non-owning relation to the GUI the tree is currently attached to; it is
/// only changed through [`attach`](Component::attach) and
/// [`detach`](Component::detach), which containers forward to their
/// children.
pub trait Component: Any {
    /// Stable identity, shared with deep clones.
    fn id(&self) -> ComponentId;

    /// Fixed extent in cells.
    fn size(&self) -> Dimension;

    /// Hidden components are neither rendered nor clickable.
    fn is_visible(&self) -> bool;

    /// Show or hide the component.
    fn set_visible(&mut self, visible: bool);

    /// Render into `surface` with the top-left corner at absolute `(x, y)`.
    fn render(&self, surface: &mut Surface, actor: ActorId, x: u16, y: u16);

    /// React to a click routed to this component.
    fn on_click(&mut self, event: &mut ClickEvent);

    /// Structural copy sharing no mutable state with `self`.
    ///
    /// The copy is detached: its owner link is empty until attached again.
    fn deep_clone(&self) -> Box<dyn Component>;

    /// The GUI this component is attached to, if any.
    fn owner(&self) -> Option<GuiId>;

    /// Attach to `owner` (containers attach their whole subtree).
    fn attach(&mut self, owner: GuiId);

    /// Clear the owner link (containers detach their whole subtree).
    fn detach(&mut self);

    /// Container view of this component.
    fn as_pane(&self) -> Option<&Pane> {
        None
    }

    /// Mutable container view of this component.
    fn as_pane_mut(&mut self) -> Option<&mut Pane> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl Clone for Box<dyn Component> {
    fn clone(&self) -> Self {
        self.deep_clone()
    }
}

impl Placeable for Box<dyn Component> {
    type Key = ComponentId;

    fn key(&self) -> ComponentId {
        Component::id(&**self)
    }

    fn size(&self) -> Dimension {
        Component::size(&**self)
    }
}

/// Fill every cell of `size` anchored at `(x, y)` with `icon`.
pub(crate) fn fill(surface: &mut Surface, x: u16, y: u16, size: Dimension, icon: &Icon) {
    for (cx, cy) in Interval::at(x, y, size).cells() {
        surface.set(cx, cy, icon.clone());
    }
}
