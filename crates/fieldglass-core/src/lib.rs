//! Growth status calculation and HUD overlay handling for Fieldglass.
//!
//! On a key release the overlay inspects the tile under the cursor and, if
//! it holds a growable plant, posts a one-line status to the host HUD:
//! days till harvest for a crop, maturity and fruiting season for a fruit
//! tree, the species name for an ordinary tree.
//!
//! The crate is stateless and synchronous. The host supplies everything
//! through narrow traits ([`TerrainQuery`], [`ItemCatalog`], [`HudSink`]);
//! each invocation touches only its input snapshot and those read-only or
//! sink collaborators.
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration (trigger key, defect severity)
//! - [`error`] -- The [`Defect`] signal for invariant violations
//! - [`growth`] -- Pure status calculation for all three plant kinds
//! - [`hud`] -- HUD posting with blank and duplicate suppression
//! - [`names`] -- Display-name resolution from host item records
//! - [`overlay`] -- The key-release handler with panic containment

pub mod config;
pub mod error;
pub mod growth;
pub mod hud;
pub mod names;
pub mod overlay;

// Re-export primary types at crate root.
pub use config::{ConfigError, DefectMode, OverlayConfig, TRIGGER_KEY_ENV};
pub use error::Defect;
pub use growth::{
    StatusReport, describe_crop, describe_fruit_tree, describe_ordinary_tree, remaining_days,
};
pub use hud::{HudSink, TransientFeed, post_transient};
pub use names::{DISPLAY_NAME_FIELD, ItemCatalog, ItemTable, display_name};
pub use overlay::{GrowthOverlay, KeyRelease, OverlayOutcome, TerrainQuery};
