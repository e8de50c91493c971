#![forbid(unsafe_code)]

//! Runtime: GUIs, session stacks, and the tick loop.
//!
//! # Role in igui
//! `igui-runtime` turns component trees into something users can navigate.
//! A [`Gui`] binds a root pane to a surface; a [`GuiManager`] keeps a stack
//! of GUIs per actor and decides, tick by tick, which one is shown.
//!
//! # Primary responsibilities
//! - **Gui**: render/open/click lifecycle of one surface.
//! - **GuiManager**: the per-actor session state machine (submit, open,
//!   remove, close reactions, reopen-on-close).
//! - **TaskQueue**: next-tick deferral that keeps close reactions from
//!   re-entering the host.
//! - **Host**: the capability the embedding environment implements.
//! - **HostSimulator**: a deterministic headless host for tests.
//!
//! # How it fits in the system
//! The embedding host calls [`GuiManager::handle_click`],
//! [`GuiManager::handle_close`] and [`GuiManager::tick`] from its own
//! single-threaded loop; everything else is driven from there.

pub mod config;
pub mod error;
pub mod gui;
pub mod host;
pub mod manager;
pub mod scheduler;
pub mod simulator;

pub use config::{ConfigError, EngineConfig};
pub use error::SessionError;
pub use gui::{DisplayHook, Gui};
pub use host::{Host, HostView};
pub use manager::{GuiManager, SessionState};
pub use scheduler::{Task, TaskQueue};
pub use simulator::{HostCall, HostSimulator};
