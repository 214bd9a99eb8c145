//! The growth status calculator: remaining-day arithmetic and message text.
//!
//! Everything here is a pure function from a plant snapshot to a
//! [`StatusReport`]. Anomalies in the host data are returned as
//! [`Defect`] values alongside the best-effort message; nothing is logged
//! from inside, so every function is referentially transparent.
//!
//! # Remaining days for a crop
//!
//! The phase-day list holds one duration per growth phase. The days left
//! until harvest are the sum of the durations from the current phase to the
//! end (sentinel entries excluded), minus the days already spent in the
//! current phase. A crop sitting in its final phase with a nonzero regrow
//! duration is in its indefinite regrow cycle instead, and counts down
//! from the regrow duration alone.
//!
//! All arithmetic is on `i64` with saturating operations. No panics, no
//! silent overflow.

use fieldglass_types::{
    CropSnapshot, FruitTreeSnapshot, INDEFINITE_PHASE_DAYS, OrdinaryTreeSnapshot, TreeSpecies,
};

use crate::error::Defect;

// ---------------------------------------------------------------------------
// StatusReport
// ---------------------------------------------------------------------------

/// A computed status message plus any defects observed on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// The display text. Empty when the snapshot yields no message.
    pub message: String,
    /// Invariant violations observed during the computation.
    pub defects: Vec<Defect>,
}

impl StatusReport {
    /// A report with a message and no defects.
    pub const fn clean(message: String) -> Self {
        Self {
            message,
            defects: Vec::new(),
        }
    }

    /// Whether the computation observed no defects.
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Crop arithmetic
// ---------------------------------------------------------------------------

/// Days remaining until this crop can be harvested.
///
/// # Order of operations
///
/// 1. Sum the phase durations from the current phase to the end, skipping
///    sentinel entries (`>=` [`INDEFINITE_PHASE_DAYS`]).
/// 2. If the crop sits in its final phase and regrows after harvest, it is
///    in the indefinite regrow cycle: the remaining value is the regrow
///    duration minus the days spent in the current phase, and the sum is
///    discarded. A nonzero discarded sum is recorded as a defect.
/// 3. Otherwise subtract the days already spent in the current phase (the
///    current phase's full duration was part of the sum).
///
/// A negative result is recorded as a [`Defect::NegativeDaysRemaining`] but
/// still returned, so callers can choose best-effort display.
pub fn remaining_days(crop: &CropSnapshot) -> (i64, Vec<Defect>) {
    let mut defects = Vec::new();

    let mut summed: i64 = 0;
    for &days in crop.phase_days.iter().skip(crop.current_phase) {
        if days < INDEFINITE_PHASE_DAYS {
            summed = summed.saturating_add(i64::from(days));
        }
    }

    // An empty phase list has no "last phase", so it always falls through
    // to the subtract branch.
    let last_phase = crop.phase_days.len().checked_sub(1);

    let remaining = if last_phase == Some(crop.current_phase) && crop.regrow_after_harvest > 0 {
        if summed != 0 {
            defects.push(Defect::RegrowResidualPhaseSum {
                item: crop.harvest_item,
                residual: summed,
            });
        }
        i64::from(crop.regrow_after_harvest).saturating_sub(i64::from(crop.day_of_current_phase))
    } else {
        summed.saturating_sub(i64::from(crop.day_of_current_phase))
    };

    if remaining < 0 {
        defects.push(Defect::NegativeDaysRemaining {
            item: crop.harvest_item,
            days: remaining,
        });
    }

    (remaining, defects)
}

// ---------------------------------------------------------------------------
// Message text
// ---------------------------------------------------------------------------

/// Status line for a crop.
///
/// A dead crop reports as dead regardless of its phase data. Otherwise the
/// message depends on [`remaining_days`]: zero means ready for harvest,
/// anything else reports the day count.
pub fn describe_crop(crop: &CropSnapshot, name: &str) -> StatusReport {
    if crop.is_dead {
        return StatusReport::clean(format!("{name} is dead"));
    }

    let (remaining, defects) = remaining_days(crop);
    let message = if remaining == 0 {
        format!("{name} is ready for harvest")
    } else {
        format!("{name} has {remaining} days till harvest")
    };

    StatusReport { message, defects }
}

/// Status line for a fruit tree.
///
/// Starts from `"<name> tree"`; the maturity clause is appended only while
/// the tree is still maturing, the season clause only when the host reports
/// a fruiting season.
pub fn describe_fruit_tree(tree: &FruitTreeSnapshot, name: &str) -> String {
    let mut message = format!("{name} tree");

    if tree.days_until_mature > 0 {
        message.push_str(&format!(" has {} until mature", tree.days_until_mature));
    }
    if !tree.fruit_season.is_empty() {
        message.push_str(&format!(". Bears fruit in {}", tree.fruit_season));
    }

    message
}

/// Status line for an ordinary tree.
///
/// A known species code yields its fixed display name. An unknown code
/// yields an empty message plus a defect; the observable behavior stays
/// "no message".
pub fn describe_ordinary_tree(tree: &OrdinaryTreeSnapshot) -> StatusReport {
    match TreeSpecies::from_code(tree.species_code) {
        Some(species) => StatusReport::clean(species.display_name().to_owned()),
        None => StatusReport {
            message: String::new(),
            defects: vec![Defect::UnknownTreeSpecies {
                code: tree.species_code,
            }],
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
