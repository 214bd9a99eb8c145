//! Shared type definitions for the Fieldglass growth-status overlay.
//!
//! This crate is the single source of truth for the types that cross the
//! boundary between the host game and the fieldglass core: plant growth
//! snapshots, host table indices, key codes, and HUD message shapes.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe wrappers for host indices and tile coordinates
//! - [`input`] -- Key identification for host input events
//! - [`message`] -- Transient HUD notification types
//! - [`plant`] -- Growth-state snapshots and the tree species table

pub mod ids;
pub mod input;
pub mod message;
pub mod plant;

// Re-export all public types at crate root for convenience.
pub use ids::{ItemId, TilePosition};
pub use input::KeyCode;
pub use message::{HudIcon, HudMessage};
pub use plant::{
    CropSnapshot, FruitTreeSnapshot, INDEFINITE_PHASE_DAYS, OrdinaryTreeSnapshot, PlantSnapshot,
    TreeSpecies,
};
