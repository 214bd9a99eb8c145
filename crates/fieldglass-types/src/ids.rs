//! Type-safe wrappers for host-owned indices and coordinates.
//!
//! The host game owns every table these values index into. Fieldglass only
//! carries them between the host's lookups; it never mints or interprets
//! them beyond equality and display.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ItemId
// ---------------------------------------------------------------------------

/// Index of an item in the host's item table.
///
/// For a crop this is the id of the harvested item; for a fruit tree the id
/// of the fruit it bears. The display name shown in status messages is
/// resolved from the item record behind this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Return the inner index value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ItemId> for u32 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

// ---------------------------------------------------------------------------
// TilePosition
// ---------------------------------------------------------------------------

/// A world tile coordinate, as reported by the host for the cursor.
///
/// Ordered and hashable so hosts and tests can key tile maps by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TilePosition {
    /// Horizontal tile index.
    pub x: i32,
    /// Vertical tile index.
    pub y: i32,
}

impl TilePosition {
    /// Create a tile position from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for TilePosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
