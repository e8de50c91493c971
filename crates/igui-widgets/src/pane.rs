#![forbid(unsafe_code)]

//! Containers.
//!
//! A [`Pane`] owns its children exclusively through an [`InventoryMap`]
//! and delegates the choice of position to a [`Placement`] policy:
//!
//! ```text
//!   Pane::anchor(size)        explicit corners via add_at(x, y)
//!   Pane::grid(size, c, r)    grid cells via add() / add_at(column, row)
//!   Pane::flow(size)          first fit via add()
//! ```
//!
//! # Dispatch
//!
//! For each click a pane converts the raw slot into `(slot % row_width,
//! slot / row_width)`, subtracts the event's accumulated offset, looks the
//! point up in its map, adds the hit child's corner to the offset, and
//! forwards. Nesting depth is unbounded.
//!
//! # Failure semantics
//!
//! Rejected placements return `false`. A child that no longer fits the
//! physical surface at render time is logged and skipped; its siblings
//! still render.

use std::any::Any;
use std::fmt;

use igui_core::{ActorId, ComponentId, ConstructionError, Dimension, GuiId, Interval};
use igui_layout::{InventoryMap, Placement};
use igui_render::Surface;

use crate::Component;
use crate::click::ClickEvent;

/// Container component with pluggable placement.
pub struct Pane {
    id: ComponentId,
    size: Dimension,
    map: InventoryMap<Box<dyn Component>>,
    placement: Placement,
    visible: bool,
    owner: Option<GuiId>,
    render_requested: bool,
}

impl fmt::Debug for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pane")
            .field("id", &self.id)
            .field("size", &self.size)
            .field("placement", &self.placement)
            .field("children", &self.map.len())
            .field("visible", &self.visible)
            .field("owner", &self.owner)
            .finish()
    }
}

impl Pane {
    /// Create a pane of `size` using `placement`.
    ///
    /// Fails when the placement was built for a different area.
    pub fn new(size: Dimension, placement: Placement) -> Result<Self, ConstructionError> {
        placement.check_area(size)?;
        Ok(Self {
            id: ComponentId::next(),
            size,
            map: InventoryMap::new(size),
            placement,
            visible: true,
            owner: None,
            render_requested: false,
        })
    }

    /// Pane whose children are positioned by explicit corner only.
    pub fn anchor(size: Dimension) -> Self {
        Self::with_placement(size, Placement::Anchor)
    }

    /// Pane whose children fill the first free spot, row-major.
    pub fn flow(size: Dimension) -> Self {
        Self::with_placement(size, Placement::Flow)
    }

    /// Pane divided into `columns` × `rows` equal cells.
    pub fn grid(size: Dimension, columns: u16, rows: u16) -> Result<Self, ConstructionError> {
        Self::new(size, Placement::grid(size, columns, rows)?)
    }

    fn with_placement(size: Dimension, placement: Placement) -> Self {
        Self {
            id: ComponentId::next(),
            size,
            map: InventoryMap::new(size),
            placement,
            visible: true,
            owner: None,
            render_requested: false,
        }
    }

    /// The placement policy.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Add a component where the placement policy chooses.
    ///
    /// Returns `false` (dropping the component) when the policy finds no
    /// spot, the policy has no automatic placement, or the component is
    /// already a child.
    pub fn add(&mut self, component: impl Component) -> bool {
        self.add_boxed(Box::new(component))
    }

    /// [`add`](Self::add) for an already boxed component.
    pub fn add_boxed(&mut self, component: Box<dyn Component>) -> bool {
        let id = component.id();
        let placed = self.placement.place(&mut self.map, component);
        self.adopt(id, placed)
    }

    /// Add a component at an explicit position.
    ///
    /// For anchor panes `(x, y)` is a cell corner; for grid panes it is a
    /// grid cell `(column, row)`. Flow panes always reject.
    pub fn add_at(&mut self, component: impl Component, x: u16, y: u16) -> bool {
        self.add_boxed_at(Box::new(component), x, y)
    }

    /// [`add_at`](Self::add_at) for an already boxed component.
    pub fn add_boxed_at(&mut self, component: Box<dyn Component>, x: u16, y: u16) -> bool {
        let id = component.id();
        let placed = self.placement.place_at(&mut self.map, component, x, y);
        self.adopt(id, placed)
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn adopt(&mut self, id: ComponentId, placed: Result<Interval, Box<dyn Component>>) -> bool {
        match placed {
            Ok(interval) => {
                if let Some(owner) = self.owner
                    && let Some(child) = self.map.get_mut(id)
                {
                    child.attach(owner);
                }
                #[cfg(feature = "tracing")]
                tracing::trace!(pane = %self.id, component = %id, ?interval, "component placed");
                true
            }
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(pane = %self.id, component = %id, "placement rejected");
                false
            }
        }
    }

    /// Remove a direct child, detaching it from the owner.
    ///
    /// Removing a component that is not a child changes nothing and
    /// returns `None`.
    pub fn remove(&mut self, id: ComponentId) -> Option<Box<dyn Component>> {
        let (interval, mut child) = self.map.remove_component(id)?;
        self.placement.release(interval);
        child.detach();
        Some(child)
    }

    /// Check whether `id` is a direct child.
    pub fn contains(&self, id: ComponentId) -> bool {
        self.map.contains(id)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the pane has no children.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &dyn Component> {
        self.map.iter().map(|(_, child)| &**child)
    }

    /// Direct children with their local intervals.
    pub fn placements(&self) -> impl Iterator<Item = (Interval, &dyn Component)> {
        self.map.iter().map(|(iv, child)| (*iv, &**child))
    }

    /// Local interval of a direct child.
    pub fn interval_of(&self, id: ComponentId) -> Option<Interval> {
        self.map.interval_of(id)
    }

    /// The direct child covering local `(x, y)`.
    pub fn component_at(&self, x: u16, y: u16) -> Option<&dyn Component> {
        self.map.get_component(x, y).map(|(_, child)| &**child)
    }

    /// Check whether `size` would fit at local `(x, y)` right now.
    pub fn has_enough_space(&self, x: u16, y: u16, size: Dimension) -> bool {
        self.map.has_enough_space(x, y, size)
    }

    /// Find a component anywhere in this subtree.
    pub fn find(&self, id: ComponentId) -> Option<&dyn Component> {
        if let Some(child) = self.map.get(id) {
            return Some(&**child);
        }
        self.map
            .iter()
            .filter_map(|(_, child)| child.as_pane())
            .find_map(|pane| pane.find(id))
    }

    /// Mutable lookup anywhere in this subtree.
    pub fn find_mut(&mut self, id: ComponentId) -> Option<&mut dyn Component> {
        if self.map.contains(id) {
            return self.map.get_mut(id).map(|child| &mut **child);
        }
        for (_, child) in self.map.iter_mut() {
            if let Some(found) = child.as_pane_mut().and_then(|pane| pane.find_mut(id)) {
                return Some(found);
            }
        }
        None
    }

    /// Typed mutable lookup anywhere in this subtree.
    pub fn find_mut_as<T: Component>(&mut self, id: ComponentId) -> Option<&mut T> {
        self.find_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    /// Ask the owning GUI to re-render this pane's tree.
    pub fn request_render(&mut self) {
        self.render_requested = true;
    }

    /// Collect and clear render requests from this subtree.
    pub fn take_render_request(&mut self) -> bool {
        let mut requested = std::mem::take(&mut self.render_requested);
        for (_, child) in self.map.iter_mut() {
            if let Some(pane) = child.as_pane_mut() {
                requested |= pane.take_render_request();
            }
        }
        requested
    }
}

impl Component for Pane {
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

    fn render(&self, surface: &mut Surface, actor: ActorId, x: u16, y: u16) {
        if !self.visible {
            return;
        }
        for (interval, child) in self.map.iter() {
            if !child.is_visible() {
                continue;
            }
            let placed = interval.translate(x, y);
            if !placed.fits_within(surface.row_width(), surface.rows()) {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    pane = %self.id,
                    component = %child.id(),
                    min_x = placed.min_x,
                    min_y = placed.min_y,
                    max_x = placed.max_x,
                    max_y = placed.max_y,
                    surface_width = surface.row_width(),
                    surface_rows = surface.rows(),
                    "layout violation: component does not fit the surface, skipped"
                );
                continue;
            }
            child.render(surface, actor, placed.min_x, placed.min_y);
        }
    }

    fn on_click(&mut self, event: &mut ClickEvent) {
        event.enter_pane(self.id);
        let Some(slot) = event.slot() else {
            event.deny();
            return;
        };
        if slot >= event.surface_cells() {
            return;
        }
        let Some((x, y)) = event.local_position() else {
            return;
        };
        let Some((interval, child)) = self.map.get_component_mut(x, y) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(pane = %self.id, x, y, "click on empty cell");
            return;
        };
        if !child.is_visible() {
            return;
        }
        event.descend(interval, child.id());
        #[cfg(feature = "tracing")]
        tracing::trace!(pane = %self.id, component = %child.id(), x, y, "click forwarded");
        child.on_click(event);
    }

    fn deep_clone(&self) -> Box<dyn Component> {
        Box::new(Pane {
            id: self.id,
            size: self.size,
            map: self.map.clone(),
            placement: self.placement.clone(),
            visible: self.visible,
            owner: None,
            render_requested: false,
        })
    }

    fn owner(&self) -> Option<GuiId> {
        self.owner
    }

    fn attach(&mut self, owner: GuiId) {
        self.owner = Some(owner);
        for (_, child) in self.map.iter_mut() {
            child.attach(owner);
        }
    }

    fn detach(&mut self) {
        self.owner = None;
        for (_, child) in self.map.iter_mut() {
            child.detach();
        }
    }

    fn as_pane(&self) -> Option<&Pane> {
        Some(self)
    }

    fn as_pane_mut(&mut self) -> Option<&mut Pane> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
