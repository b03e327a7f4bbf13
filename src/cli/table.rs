//! Plain-text table rendering for search results.
//!
//! Column widths are global: one width per column computed over the header
//! label and every row from every shard, so groups line up across shards.

use console::style;

use crate::core::entity::ResultRow;

/// Highlight applied to a data cell. Structural/location fields and the
/// type field carry distinct styles to aid visual scanning.
#[derive(Debug, Clone, Copy)]
enum CellKind {
    Structural,
    Type,
}

struct Column {
    header: &'static str,
    value: fn(&ResultRow) -> &str,
    kind: CellKind,
}

/// Fixed column order of the report.
const COLUMNS: [Column; 8] = [
    Column {
        header: "db",
        value: |r| &r.shard,
        kind: CellKind::Structural,
    },
    Column {
        header: "starsystem",
        value: |r| &r.star_system,
        kind: CellKind::Structural,
    },
    Column {
        header: "playfield",
        value: |r| &r.playfield,
        kind: CellKind::Structural,
    },
    Column {
        header: "bp",
        value: |r| &r.blueprint,
        kind: CellKind::Structural,
    },
    Column {
        header: "id",
        value: |r| &r.id,
        kind: CellKind::Structural,
    },
    Column {
        header: "owner",
        value: |r| &r.owner,
        kind: CellKind::Structural,
    },
    Column {
        header: "type",
        value: |r| &r.type_abbrev,
        kind: CellKind::Type,
    },
    Column {
        header: "name",
        value: |r| &r.name,
        kind: CellKind::Structural,
    },
];

fn column_widths(rows: &[ResultRow]) -> Vec<usize> {
    COLUMNS
        .iter()
        .map(|col| {
            rows.iter()
                .map(|row| (col.value)(row).len())
                .chain([col.header.len()])
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Render the header, separator rule, and all data rows. Rows are expected
/// to already be in display order.
pub fn render(rows: &[ResultRow]) -> String {
    let widths = column_widths(rows);

    let header = COLUMNS
        .iter()
        .zip(&widths)
        .map(|(col, &width)| format!("{:<width$}", col.header))
        .collect::<Vec<_>>()
        .join("  ");

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');

    for row in rows {
        let line = COLUMNS
            .iter()
            .zip(&widths)
            .map(|(col, &width)| {
                let cell = format!("{:<width$}", (col.value)(row));
                match col.kind {
                    CellKind::Structural => style(cell).green().bold().to_string(),
                    CellKind::Type => style(cell).yellow().to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
