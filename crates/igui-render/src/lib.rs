#![forbid(unsafe_code)]

//! Render kernel: icons, surfaces, and display factories.
//!
//! # Role in igui
//! `igui-render` owns the grid sink a GUI renders into. Components write
//! [`Icon`] descriptors into a [`Surface`] by absolute slot
//! (`row * row_width + column`); a host turns the finished surface into
//! whatever its display cells really are through a [`DisplayFactory`].
//!
//! # Primary responsibilities
//! - **Icon**: the visual descriptor of one cell. Only its identity matters
//!   to the engine.
//! - **Surface**: fixed-size, explicitly row-width-addressed cell array.
//! - **DisplayFactory**: the host-side mapping from descriptor to cell value.

pub mod factory;
pub mod icon;
pub mod surface;

pub use factory::{DisplayFactory, GlyphFactory};
pub use icon::Icon;
pub use surface::Surface;
