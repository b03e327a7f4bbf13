//! Owner-name resolution with a per-shard cache.
//!
//! Faction ids are local to one database, so the cache lives no longer than
//! one shard scan and is never shared between shards.

use std::collections::HashMap;

use rusqlite::{Connection, OptionalExtension};

/// Resolve the `--owner` filter to a faction id within one shard.
///
/// `Ok(None)` means the name does not exist in this shard, in which case the
/// shard contributes zero rows.
pub fn resolve_filter_owner(conn: &Connection, owner_name: &str) -> rusqlite::Result<Option<i64>> {
    conn.query_row(
        "SELECT entityid FROM Entities WHERE name = ?1",
        [owner_name],
        |row| row.get(0),
    )
    .optional()
}

/// Write-once cache of faction id → display name for one shard scan.
#[derive(Debug, Default)]
pub struct OwnerResolver {
    cache: HashMap<i64, String>,
}

impl OwnerResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name for `facid`, or the empty string when the id is absent,
    /// zero (unowned), or resolves to nothing. Never errors; a failed lookup
    /// is cached as unknown like any other miss.
    pub fn display_name(&mut self, conn: &Connection, facid: Option<i64>) -> String {
        let Some(facid) = facid.filter(|&id| id != 0) else {
            return String::new();
        };
        if let Some(name) = self.cache.get(&facid) {
            return name.clone();
        }
        let name: String = conn
            .query_row(
                "SELECT name FROM Entities WHERE entityid = ?1",
                [facid],
                |row| row.get::<_, Option<String>>(0),
            )
            .optional()
            .ok()
            .flatten()
            .flatten()
            .unwrap_or_default();
        self.cache.insert(facid, name.clone());
        name
    }
}
