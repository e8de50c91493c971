#![forbid(unsafe_code)]

//! Layout: the spatial allocator and its placement policies.
//!
//! # Role in igui
//! `igui-layout` decides where things go. [`InventoryMap`] packs fixed-size
//! items into a fixed-size cell grid without overlap; a [`Placement`]
//! policy picks the anchor for each new item (explicit corner, grid cell,
//! or first fit).
//!
//! # Invariants
//! For every map, the set of occupied cells equals the union of all stored
//! intervals, and no two stored intervals overlap. Every mutation either
//! preserves both or leaves the map untouched.

pub mod inventory_map;
pub mod placement;

pub use igui_core::{Dimension, Interval};
pub use inventory_map::{InventoryMap, Placeable};
pub use placement::{GridPlacement, Placement};
