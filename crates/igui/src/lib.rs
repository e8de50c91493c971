#![forbid(unsafe_code)]

//! igui public facade crate.
//!
//! Re-exports the types an embedding host needs from the internal crates,
//! a unified [`Error`], and a prelude.
//!
//! ```
//! use igui::prelude::*;
//!
//! let mut manager = GuiManager::new();
//! let mut host = HostSimulator::new();
//!
//! let mut root = Pane::grid(Dimension::new(9, 3)?, 3, 1)?;
//! root.add(Label::new(Icon::new("stone")).with_size(Dimension::new(3, 3)?));
//! let gui = manager.create_gui("Chest", 3, root)?;
//!
//! manager.submit(ActorId(1), gui, &mut host);
//! assert_eq!(host.screen(ActorId(1)), Some("sss......\nsss......\nsss......"));
//! # Ok::<(), igui::Error>(())
//! ```

mod error;

pub use error::{Error, Result};

// --- Core re-exports -------------------------------------------------------

pub use igui_core::{
    ActorId, ClickKind, ClickNotification, ComponentId, ConstructionError, Dimension, GuiId,
    GuiIdAllocator, Interval, Modifiers,
};

// --- Render re-exports -----------------------------------------------------

pub use igui_render::{DisplayFactory, GlyphFactory, Icon, Surface};

// --- Layout re-exports -----------------------------------------------------

pub use igui_layout::{GridPlacement, InventoryMap, Placeable, Placement};

// --- Widget re-exports -----------------------------------------------------

pub use igui_widgets::{Button, ClickEvent, ClickHandler, Component, Label, Pane};

// --- Runtime re-exports ----------------------------------------------------

pub use igui_runtime::{
    ConfigError, DisplayHook, EngineConfig, Gui, GuiManager, Host, HostCall, HostSimulator,
    HostView, SessionError, SessionState, TaskQueue,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ActorId, Button, ClickEvent, ClickNotification, Component, Dimension, EngineConfig, Error,
        GlyphFactory, Gui, GuiManager, Host, HostSimulator, HostView, Icon, Label, Pane, Result,
    };

    pub use crate::{core, layout, render, runtime, widgets};
}

pub use igui_core as core;
pub use igui_layout as layout;
pub use igui_render as render;
pub use igui_runtime as runtime;
pub use igui_widgets as widgets;
