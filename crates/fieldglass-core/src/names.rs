//! Display-name resolution from the host's slash-delimited item records.
//!
//! The host item table maps an [`ItemId`] to a record of slash-delimited
//! fields (name, price, edibility, type, display name, description, ...).
//! Status messages want the display-name field. The table itself is owned
//! and populated entirely by the host; this module only queries it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use fieldglass_types::ItemId;

use crate::error::Defect;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Index of the display-name field in a slash-delimited item record.
pub const DISPLAY_NAME_FIELD: usize = 4;

// ---------------------------------------------------------------------------
// ItemCatalog
// ---------------------------------------------------------------------------

/// Read-only access to the host's item table.
pub trait ItemCatalog {
    /// The raw slash-delimited record for an item, if the table has one.
    fn item_record(&self, id: ItemId) -> Option<String>;
}

/// Resolve the display name for an item.
///
/// Splits the record on `/` and takes field [`DISPLAY_NAME_FIELD`]. A
/// missing id or a record with too few fields is a [`Defect`]; callers
/// degrade to "no message" rather than crashing.
pub fn display_name(catalog: &impl ItemCatalog, id: ItemId) -> Result<String, Defect> {
    let record = catalog
        .item_record(id)
        .ok_or(Defect::MissingItemRecord { id })?;

    record
        .split('/')
        .nth(DISPLAY_NAME_FIELD)
        .map(str::to_owned)
        .ok_or_else(|| Defect::MalformedItemRecord {
            id,
            fields: record.split('/').count(),
        })
}

// ---------------------------------------------------------------------------
// ItemTable
// ---------------------------------------------------------------------------

/// A [`BTreeMap`]-backed [`ItemCatalog`] for hosts and tests.
///
/// Hosts with their own item storage implement [`ItemCatalog`] directly;
/// this table exists for hosts that just want to hand over their records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTable {
    /// Maps item ids to their raw slash-delimited records.
    records: BTreeMap<ItemId, String>,
}

impl ItemTable {
    /// Create an empty item table.
    pub const fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Insert or replace the record for an item.
    pub fn insert(&mut self, id: ItemId, record: impl Into<String>) {
        self.records.insert(id, record.into());
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ItemCatalog for ItemTable {
    fn item_record(&self, id: ItemId) -> Option<String> {
        self.records.get(&id).cloned()
    }
}

impl FromIterator<(ItemId, String)> for ItemTable {
    fn from_iter<I: IntoIterator<Item = (ItemId, String)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PARSNIP: &str = "Parsnip/35/10/Basic -75/Parsnip/A spring tuber closely related to the carrot.";

    #[test]
    fn display_name_is_the_fifth_field() {
        let mut table = ItemTable::new();
        table.insert(ItemId(24), PARSNIP);
        assert_eq!(display_name(&table, ItemId(24)).unwrap(), "Parsnip");
    }

    #[test]
    fn display_name_can_differ_from_the_internal_name() {
        let mut table = ItemTable::new();
        table.insert(ItemId(188), "Green Bean/40/10/Basic -75/Haricot Vert/A snappy little legume.");
        assert_eq!(display_name(&table, ItemId(188)).unwrap(), "Haricot Vert");
    }

    #[test]
    fn missing_record_is_a_defect() {
        let table = ItemTable::new();
        assert_eq!(
            display_name(&table, ItemId(24)),
            Err(Defect::MissingItemRecord { id: ItemId(24) })
        );
    }

    #[test]
    fn record_with_too_few_fields_is_a_defect() {
        let mut table = ItemTable::new();
        table.insert(ItemId(24), "Parsnip/35/10");
        assert_eq!(
            display_name(&table, ItemId(24)),
            Err(Defect::MalformedItemRecord {
                id: ItemId(24),
                fields: 3,
            })
        );
    }

    #[test]
    fn record_with_exactly_five_fields_resolves() {
        let mut table = ItemTable::new();
        table.insert(ItemId(24), "a/b/c/d/Display");
        assert_eq!(display_name(&table, ItemId(24)).unwrap(), "Display");
    }

    #[test]
    fn table_collects_from_iterator() {
        let table: ItemTable = [(ItemId(1), String::from(PARSNIP))].into_iter().collect();
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        assert_eq!(table.item_record(ItemId(1)).unwrap(), PARSNIP);
    }
}
