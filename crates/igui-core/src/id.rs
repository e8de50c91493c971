#![forbid(unsafe_code)]

//! Identities for actors, GUIs, and components.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque, stable identity of one end-user as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Identity of one GUI surface instance.
///
/// Only a [`GuiIdAllocator`] hands these out, so two live GUIs built from
/// the same allocator never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuiId(u64);

impl GuiId {
    /// The raw numeric value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GuiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gui#{}", self.0)
    }
}

/// Monotonic [`GuiId`] source.
///
/// Owned by the composition root (normally the session manager). The first
/// id issued is `1`; ids are never reused for the lifetime of the allocator.
/// Two allocators are independent namespaces, so a process should route all
/// GUI construction through one of them.
#[derive(Debug)]
pub struct GuiIdAllocator {
    next: u64,
}

impl GuiIdAllocator {
    /// Create an allocator whose first id is `1`.
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Issue the next id.
    pub fn allocate(&mut self) -> GuiId {
        let id = GuiId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids issued so far.
    pub const fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for GuiIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

static NEXT_COMPONENT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one component within a component tree.
///
/// Fresh components receive a unique id; deep clones keep the id of the
/// component they were cloned from, so the same id addresses the
/// equivalent node in every copy of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    /// Issue a process-unique id.
    pub fn next() -> Self {
        Self(NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component#{}", self.0)
    }
}
