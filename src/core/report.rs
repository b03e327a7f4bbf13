//! Deterministic aggregation of per-shard result sets.
//!
//! Rows are buffered per shard and merged only after every shard has been
//! scanned, so display order never depends on scan order.

use crate::core::entity::ResultRow;

/// Sort key for entity ids: all-digit ids order numerically and precede
/// every non-numeric id; non-numeric ids order lexically among themselves.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum IdKey {
    Numeric(i64),
    Text(String),
}

impl IdKey {
    pub fn parse(id: &str) -> Self {
        if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = id.parse::<i64>() {
                return IdKey::Numeric(n);
            }
        }
        IdKey::Text(id.to_string())
    }
}

/// Merge collected rows into final display order: shard groups ascending by
/// label, rows within a group ascending by id under [`IdKey`].
pub fn aggregate(mut rows: Vec<ResultRow>) -> Vec<ResultRow> {
    rows.sort_by(|a, b| {
        a.shard
            .cmp(&b.shard)
            .then_with(|| IdKey::parse(&a.id).cmp(&IdKey::parse(&b.id)))
    });
    rows
}
