//! Schema-adaptive querying of one shard.
//!
//! Save databases drift across game versions: older ones carry the
//! playfield as a bare text column on `Entities` and lack the `Playfields`,
//! `SolarSystems`, and `Structures` tables entirely. Queries run through an
//! ordered list of tiers, each fully specifying its own column set, join
//! shape, and the column usable for the playfield filter; the first tier
//! the schema accepts decides the location fields for every row of that
//! shard.

use rusqlite::{Connection, OpenFlags, OptionalExtension, ToSql};
use thiserror::Error;

use crate::core::diag::Diag;
use crate::core::entity::{abbrev_for_code, ResultRow};
use crate::core::filter::SearchFilter;
use crate::core::owner::{resolve_filter_owner, OwnerResolver};
use crate::core::saves::Shard;

/// Non-fatal reasons a shard contributes no rows. None of these abort
/// sibling shard scans.
#[derive(Debug, Error)]
pub enum ShardSkip {
    #[error("owner '{0}' not found in this shard")]
    OwnerUnresolved(String),

    #[error("no query tier matched the schema: {0}")]
    SchemaExhausted(String),

    #[error(transparent)]
    Unavailable(#[from] rusqlite::Error),
}

/// One query strategy. Column order is fixed across tiers:
/// entityid, name, etype, playfield, starsystem, facid, bpname.
struct QueryTier {
    name: &'static str,
    columns: &'static str,
    from: &'static str,
    /// Column expression usable for an exact playfield filter, if this tier
    /// can express one.
    location_column: Option<&'static str>,
}

const TIERS: [QueryTier; 3] = [
    QueryTier {
        name: "joined",
        columns: "e.entityid, e.name, e.etype, p.name, s.name, e.facid",
        from: "FROM Entities e \
               LEFT JOIN Playfields p ON e.pfid = p.pfid \
               LEFT JOIN SolarSystems s ON p.ssid = s.ssid",
        location_column: Some("p.name"),
    },
    QueryTier {
        name: "flat-playfield",
        columns: "e.entityid, e.name, e.etype, e.playfield, NULL, e.facid",
        from: "FROM Entities e",
        location_column: Some("e.playfield"),
    },
    QueryTier {
        name: "bare",
        columns: "e.entityid, e.name, e.etype, NULL, NULL, e.facid",
        from: "FROM Entities e",
        location_column: None,
    },
];

struct RawRow {
    entityid: i64,
    name: Option<String>,
    etype: i64,
    playfield: Option<String>,
    star_system: Option<String>,
    facid: Option<i64>,
    blueprint: Option<String>,
}

impl RawRow {
    fn into_result_row(self, shard: &str, conn: &Connection, owners: &mut OwnerResolver) -> ResultRow {
        ResultRow {
            shard: shard.to_string(),
            blueprint: self.blueprint.unwrap_or_default(),
            star_system: self.star_system.unwrap_or_default(),
            playfield: self.playfield.unwrap_or_default(),
            id: self.entityid.to_string(),
            owner: owners.display_name(conn, self.facid),
            type_abbrev: abbrev_for_code(self.etype),
            name: self.name.unwrap_or_default(),
        }
    }
}

/// Run the normalized filter against one shard, resolving owner names and
/// structure/location context. Read-only; the shard's database is never
/// written.
pub fn scan_shard(shard: &Shard, filter: &SearchFilter, diag: &Diag) -> Result<Vec<ResultRow>, ShardSkip> {
    let conn = Connection::open_with_flags(&shard.db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;

    let mut clauses: Vec<String> = Vec::new();
    let mut params: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(owner) = &filter.owner {
        match resolve_filter_owner(&conn, owner)? {
            Some(owner_id) => {
                clauses.push("e.facid = ?".into());
                params.push(Box::new(owner_id));
            }
            None => return Err(ShardSkip::OwnerUnresolved(owner.clone())),
        }
    }
    if let Some(id) = filter.id {
        clauses.push("e.entityid = ?".into());
        params.push(Box::new(id));
    } else if let Some(name) = &filter.name {
        clauses.push("e.name LIKE ?".into());
        params.push(Box::new(format!("%{name}%")));
    }
    if let Some(etype) = filter.entity_type {
        clauses.push("e.etype = ?".into());
        params.push(Box::new(etype.code()));
    }
    // Soft-deleted rows never surface, regardless of the other filters.
    clauses.push("e.isremoved = 0".into());

    let bp_expr = if has_structures_table(&conn) {
        "(SELECT bpname FROM Structures WHERE entityid = e.entityid)"
    } else {
        "NULL"
    };

    let mut last_err: Option<rusqlite::Error> = None;
    for tier in &TIERS {
        let mut tier_clauses = clauses.clone();
        let mut tier_params: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
        if let Some(location) = &filter.location {
            let Some(column) = tier.location_column else {
                // This tier cannot express the playfield filter.
                continue;
            };
            tier_clauses.push(format!("{column} = ?"));
            tier_params.push(location);
        }

        match run_tier(&conn, tier, bp_expr, &tier_clauses, &tier_params) {
            Ok(raw_rows) => {
                let mut owners = OwnerResolver::new();
                return Ok(raw_rows
                    .into_iter()
                    .map(|raw| raw.into_result_row(&shard.name, &conn, &mut owners))
                    .collect());
            }
            Err(err) => {
                diag.log(format!("{}: tier '{}' failed: {}", shard.name, tier.name, err));
                last_err = Some(err);
            }
        }
    }

    Err(ShardSkip::SchemaExhausted(
        last_err
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no tier can express the requested filters".to_string()),
    ))
}

fn has_structures_table(conn: &Connection) -> bool {
    conn.query_row(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'Structures'",
        [],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
    .unwrap_or(false)
}

fn run_tier(
    conn: &Connection,
    tier: &QueryTier,
    bp_expr: &str,
    clauses: &[String],
    params: &[&dyn ToSql],
) -> rusqlite::Result<Vec<RawRow>> {
    let sql = format!(
        "SELECT {columns}, {bp_expr} {from} WHERE {predicate}",
        columns = tier.columns,
        bp_expr = bp_expr,
        from = tier.from,
        predicate = clauses.join(" AND "),
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params, |row| {
        Ok(RawRow {
            entityid: row.get(0)?,
            name: row.get(1)?,
            etype: row.get(2)?,
            playfield: row.get(3)?,
            star_system: row.get(4)?,
            facid: row.get(5)?,
            blueprint: row.get(6)?,
        })
    })?;
    rows.collect()
}
