#![forbid(unsafe_code)]

//! Core: geometry, identities, and host click notifications.
//!
//! # Role in igui
//! `igui-core` is the vocabulary layer. It owns the value types every other
//! crate speaks in: cell-grid geometry, actor and GUI identities, the raw
//! click notification a host delivers, and the construction error that
//! guards every constructor in the workspace.
//!
//! # Primary responsibilities
//! - **Dimension/Interval**: fixed-size extents and placed rectangles.
//! - **Identities**: [`ActorId`], [`GuiId`] with its explicit allocator,
//!   and [`ComponentId`].
//! - **ClickNotification**: the host-side description of one click.
//!
//! # How it fits in the system
//! The layout allocator (`igui-layout`) stores [`Interval`]s, widgets
//! (`igui-widgets`) translate [`ClickNotification`]s into click events, and
//! the runtime (`igui-runtime`) allocates [`GuiId`]s for every surface it
//! manages.

pub mod error;
pub mod event;
pub mod geometry;
pub mod id;

pub use error::ConstructionError;
pub use event::{ClickKind, ClickNotification, Modifiers};
pub use geometry::{Dimension, Interval};
pub use id::{ActorId, ComponentId, GuiId, GuiIdAllocator};
