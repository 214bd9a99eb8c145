//! Growth-state snapshots for the plants a cursor tile can hold.
//!
//! The host supplies one snapshot per query; nothing here is created,
//! mutated, or retained by fieldglass. Each plant kind carries exactly the
//! growth counters its status message needs.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Sentinel phase duration meaning "indefinite/regrowing".
///
/// Phase entries at or above this value are not real day counts and are
/// excluded from remaining-day sums.
pub const INDEFINITE_PHASE_DAYS: i32 = 99_999;

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// Growth state of a planted crop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropSnapshot {
    /// Whether the crop has died (frost, out-of-season, etc.).
    pub is_dead: bool,
    /// Index of the growth phase the crop is currently in.
    pub current_phase: usize,
    /// Days each growth phase lasts, in phase order.
    ///
    /// Entries `>=` [`INDEFINITE_PHASE_DAYS`] are sentinels, not day counts.
    pub phase_days: Vec<i32>,
    /// Days already spent in the current phase.
    pub day_of_current_phase: i32,
    /// Days for one regrow cycle after the first harvest; `0` means the
    /// crop does not regrow.
    pub regrow_after_harvest: i32,
    /// Item produced at harvest; names the crop in status messages.
    pub harvest_item: ItemId,
}

/// Growth state of a planted fruit tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitTreeSnapshot {
    /// The fruit item the tree bears; names the tree in status messages.
    pub fruit_item: ItemId,
    /// Visual growth stage reported by the host (sapling through grown).
    ///
    /// Carried on the snapshot for hosts; no message rule reads it.
    pub growth_stage: i32,
    /// Days until the tree is mature enough to bear fruit; `0` once mature.
    pub days_until_mature: i32,
    /// Season in which the tree bears fruit; empty if the host reports none.
    pub fruit_season: String,
}

/// Growth state of an ordinary (non-fruit) tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinaryTreeSnapshot {
    /// Host species code; see [`TreeSpecies::from_code`] for the known set.
    pub species_code: i32,
}

/// The growable plant found on a cursor tile.
///
/// One case per plant kind, dispatched by exhaustive matching; there is no
/// runtime type test anywhere downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantSnapshot {
    /// A planted crop in tilled soil.
    Crop(CropSnapshot),
    /// A planted fruit tree.
    FruitTree(FruitTreeSnapshot),
    /// An ordinary tree (oak, maple, pine, palm, or mushroom).
    OrdinaryTree(OrdinaryTreeSnapshot),
}

// ---------------------------------------------------------------------------
// TreeSpecies
// ---------------------------------------------------------------------------

/// Species of an ordinary tree, decoded from the host's species code.
///
/// Summer and winter variants of the same tree share a species: codes 1 and
/// 4 are both oak, codes 2 and 5 both maple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TreeSpecies {
    /// Oak (codes 1 and 4).
    Oak,
    /// Maple (codes 2 and 5).
    Maple,
    /// Pine (code 3).
    Pine,
    /// Palm (code 6).
    Palm,
    /// Mushroom tree (code 7).
    Mushroom,
}

impl TreeSpecies {
    /// Decode a host species code.
    ///
    /// Returns `None` for codes outside the known table; the caller decides
    /// how loudly to treat that.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 | 4 => Some(Self::Oak),
            2 | 5 => Some(Self::Maple),
            3 => Some(Self::Pine),
            6 => Some(Self::Palm),
            7 => Some(Self::Mushroom),
            _ => None,
        }
    }

    /// The display name used in status messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Oak => "Oak tree",
            Self::Maple => "Maple tree",
            Self::Pine => "Pine tree",
            Self::Palm => "Palm tree",
            Self::Mushroom => "Mushroom tree",
        }
    }
}

impl core::fmt::Display for TreeSpecies {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn summer_and_winter_codes_alias_the_same_species() {
        assert_eq!(TreeSpecies::from_code(1), Some(TreeSpecies::Oak));
        assert_eq!(TreeSpecies::from_code(4), Some(TreeSpecies::Oak));
        assert_eq!(TreeSpecies::from_code(2), Some(TreeSpecies::Maple));
        assert_eq!(TreeSpecies::from_code(5), Some(TreeSpecies::Maple));
    }

    #[test]
    fn single_codes_decode_to_their_species() {
        assert_eq!(TreeSpecies::from_code(3), Some(TreeSpecies::Pine));
        assert_eq!(TreeSpecies::from_code(6), Some(TreeSpecies::Palm));
        assert_eq!(TreeSpecies::from_code(7), Some(TreeSpecies::Mushroom));
    }

    #[test]
    fn unknown_codes_decode_to_none() {
        for code in [i32::MIN, -1, 0, 8, 42, i32::MAX] {
            assert_eq!(TreeSpecies::from_code(code), None, "code {code}");
        }
    }

    #[test]
    fn display_names_cover_the_five_fixed_strings() {
        let names: Vec<&str> = [
            TreeSpecies::Oak,
            TreeSpecies::Maple,
            TreeSpecies::Pine,
            TreeSpecies::Palm,
            TreeSpecies::Mushroom,
        ]
        .iter()
        .map(|species| species.display_name())
        .collect();
        assert_eq!(
            names,
            vec!["Oak tree", "Maple tree", "Pine tree", "Palm tree", "Mushroom tree"]
        );
    }

    #[test]
    fn plant_snapshot_round_trips_through_serde() {
        let snapshot = PlantSnapshot::Crop(CropSnapshot {
            is_dead: false,
            current_phase: 1,
            phase_days: vec![1, 2, 2],
            day_of_current_phase: 1,
            regrow_after_harvest: 0,
            harvest_item: ItemId(24),
        });
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: PlantSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
