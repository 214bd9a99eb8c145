//! Defect signals for the `fieldglass-core` crate.
//!
//! A [`Defect`] marks an invariant violation in host-supplied data: growth
//! counters that do not add up, a species code outside the known table, an
//! item record that cannot be parsed. Defects are values, not log calls --
//! the functions that observe them stay pure and hand them back to the
//! overlay, which logs every defect and decides (per configured
//! [`DefectMode`](crate::config::DefectMode)) whether the message still
//! goes out. A defect never aborts the host.

use fieldglass_types::ItemId;

/// An invariant violation observed while computing a status message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Defect {
    /// The remaining-days calculation produced a negative value.
    #[error("crop {item} computed {days} days till harvest")]
    NegativeDaysRemaining {
        /// Harvest item of the crop in question.
        item: ItemId,
        /// The negative remaining-days value.
        days: i64,
    },

    /// A crop in its regrow cycle still carried a nonzero phase-day sum.
    #[error("crop {item} is in a regrow cycle but carries a residual phase sum of {residual}")]
    RegrowResidualPhaseSum {
        /// Harvest item of the crop in question.
        item: ItemId,
        /// The leftover sum of non-sentinel phase durations.
        residual: i64,
    },

    /// An ordinary tree reported a species code outside the known table.
    #[error("unknown tree species code {code}")]
    UnknownTreeSpecies {
        /// The unrecognized host species code.
        code: i32,
    },

    /// The host item table has no record for an item.
    #[error("no item record for {id}")]
    MissingItemRecord {
        /// The item that was looked up.
        id: ItemId,
    },

    /// An item record did not contain a display-name field.
    #[error("item record for {id} has {fields} fields, expected at least 5")]
    MalformedItemRecord {
        /// The item whose record was malformed.
        id: ItemId,
        /// Number of slash-delimited fields actually present.
        fields: usize,
    },
}
