//! The key-release handler: from input event to posted HUD message.
//!
//! One invocation per key-release event, fully synchronous, no state
//! carried between invocations. Every query the handler needs arrives as
//! an explicit argument: the event itself, the host's terrain lookup, the
//! host's item catalog, and the HUD sink.
//!
//! The whole routine runs under panic containment. A panicking host
//! collaborator is logged and swallowed; the triggering interaction
//! produces no visible effect and the next event is an independent
//! attempt. The player never sees a crash, at most a missing message.

use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{debug, error, warn};

use fieldglass_types::{HudMessage, KeyCode, PlantSnapshot, TilePosition};

use crate::config::{DefectMode, OverlayConfig};
use crate::error::Defect;
use crate::growth::{StatusReport, describe_crop, describe_fruit_tree, describe_ordinary_tree};
use crate::hud::{HudSink, post_transient};
use crate::names::{ItemCatalog, display_name};

// ---------------------------------------------------------------------------
// Host-facing types
// ---------------------------------------------------------------------------

/// The host's tile lookup.
pub trait TerrainQuery {
    /// The growable plant on a tile, if any.
    fn plant_at(&self, tile: TilePosition) -> Option<PlantSnapshot>;
}

/// A discrete key-release event from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRelease {
    /// The key that was released.
    pub key: KeyCode,
    /// The world tile under the cursor at release time.
    pub cursor_tile: TilePosition,
    /// Whether the host's world/session is in a ready state. Events that
    /// arrive before the world is ready are ignored.
    pub world_ready: bool,
}

/// What a single overlay invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayOutcome {
    /// The event did not apply: world not ready, or a different key.
    Ignored,
    /// No growable plant under the cursor.
    NoTarget,
    /// A status message was handed to the HUD.
    Posted,
    /// A message was computed but suppressed: blank, already showing, or
    /// a defect under [`DefectMode::Strict`].
    Suppressed,
    /// A host collaborator panicked; the failure was logged and contained.
    Contained,
}

// ---------------------------------------------------------------------------
// GrowthOverlay
// ---------------------------------------------------------------------------

/// The growth-status overlay handler.
#[derive(Debug, Clone, Default)]
pub struct GrowthOverlay {
    /// Active configuration.
    config: OverlayConfig,
}

impl GrowthOverlay {
    /// Create an overlay with the given configuration.
    pub const fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Handle one key-release event.
    ///
    /// # Order of operations
    ///
    /// 1. Ignore the event unless the world is ready and the released key
    ///    is the configured trigger key.
    /// 2. Look up the plant under the cursor; no plant means no message.
    /// 3. Compute the status report for the plant kind, resolving the
    ///    display name where the message needs one.
    /// 4. Log every observed defect; under [`DefectMode::Strict`] any
    ///    defect suppresses the message.
    /// 5. Post the message, suppressing blanks and exact duplicates.
    ///
    /// Panics from host collaborators are contained here and reported as
    /// [`OverlayOutcome::Contained`].
    pub fn handle_key_release(
        &self,
        event: &KeyRelease,
        terrain: &impl TerrainQuery,
        catalog: &impl ItemCatalog,
        hud: &mut impl HudSink,
    ) -> OverlayOutcome {
        let handled = catch_unwind(AssertUnwindSafe(|| {
            self.handle_inner(event, terrain, catalog, hud)
        }));

        handled.unwrap_or_else(|payload| {
            error!(
                panic = panic_text(payload.as_ref()),
                "panic contained during status handling"
            );
            OverlayOutcome::Contained
        })
    }

    fn handle_inner(
        &self,
        event: &KeyRelease,
        terrain: &impl TerrainQuery,
        catalog: &impl ItemCatalog,
        hud: &mut impl HudSink,
    ) -> OverlayOutcome {
        if !event.world_ready || event.key != self.config.trigger_key {
            return OverlayOutcome::Ignored;
        }

        let Some(plant) = terrain.plant_at(event.cursor_tile) else {
            return OverlayOutcome::NoTarget;
        };

        let report = match report_for(&plant, catalog) {
            Ok(report) => report,
            Err(defect) => {
                warn!(%defect, "growth status defect observed");
                return OverlayOutcome::Suppressed;
            }
        };

        for defect in &report.defects {
            warn!(%defect, "growth status defect observed");
        }
        if self.config.defect_mode == DefectMode::Strict && !report.is_clean() {
            return OverlayOutcome::Suppressed;
        }

        debug!(message = %report.message, "computed growth status");

        if post_transient(hud, HudMessage::plain(report.message)) {
            OverlayOutcome::Posted
        } else {
            OverlayOutcome::Suppressed
        }
    }
}

/// Compute the status report for a plant, resolving the display name where
/// the message needs one.
fn report_for(plant: &PlantSnapshot, catalog: &impl ItemCatalog) -> Result<StatusReport, Defect> {
    match plant {
        PlantSnapshot::Crop(crop) => {
            let name = display_name(catalog, crop.harvest_item)?;
            Ok(describe_crop(crop, &name))
        }
        PlantSnapshot::FruitTree(tree) => {
            let name = display_name(catalog, tree.fruit_item)?;
            Ok(StatusReport::clean(describe_fruit_tree(tree, &name)))
        }
        PlantSnapshot::OrdinaryTree(tree) => Ok(describe_ordinary_tree(tree)),
    }
}

/// Best-effort text from a panic payload.
fn panic_text(payload: &(dyn core::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
