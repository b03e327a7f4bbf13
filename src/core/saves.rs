//! Save directory discovery.
//!
//! A saves root contains one directory per game world. The game snapshots
//! worlds by copying the directory with a dated suffix; only primary
//! (un-dated) directories are queried.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Fixed name of the per-world database file.
pub const DB_FILE: &str = "global.db";

/// One queryable save-game world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shard {
    /// Directory name, used as the report label.
    pub name: String,
    pub db_path: PathBuf,
}

/// Returns true if `dirname` is a primary save rather than a dated backup.
///
/// Backup copies end with `-YYMMDD-HHMM`, optionally followed by further
/// `-` or `_` delimited suffixes, e.g. `World-240801-1530` or
/// `World-240801-1530-extra`.
pub fn is_primary_save(dirname: &str) -> bool {
    !has_backup_stamp(dirname)
}

fn has_backup_stamp(name: &str) -> bool {
    let bytes = name.as_bytes();
    // Look for `-DDDDDD-DDDD` whose next byte is end of string, `-`, or `_`.
    for start in 0..bytes.len() {
        if bytes[start] != b'-' {
            continue;
        }
        let rest = &bytes[start..];
        if rest.len() < 12 {
            break;
        }
        if rest[1..7].iter().all(u8::is_ascii_digit)
            && rest[7] == b'-'
            && rest[8..12].iter().all(u8::is_ascii_digit)
            && matches!(rest.get(12), None | Some(&b'-') | Some(&b'_'))
        {
            return true;
        }
    }
    false
}

/// Enumerate candidate primary save directories under `root`, sorted by name.
///
/// `game` matches the directory name exactly and takes precedence over
/// `games`, a case-insensitive substring match. A missing or non-directory
/// root yields no candidates rather than an error.
pub fn resolve_save_dirs(root: &Path, game: Option<&str>, games: Option<&str>) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }
    let mut dirs: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            if !is_primary_save(&name) {
                return false;
            }
            match (game, games) {
                (Some(exact), _) => name == exact,
                (None, Some(part)) => name.to_lowercase().contains(&part.to_lowercase()),
                (None, None) => true,
            }
        })
        .map(|entry| entry.into_path())
        .collect();
    dirs.sort();
    dirs
}

/// Keep only candidates that actually contain the database file.
/// Directories without one are dropped silently.
pub fn locate_shards(dirs: &[PathBuf]) -> Vec<Shard> {
    dirs.iter()
        .filter_map(|dir| {
            let db_path = dir.join(DB_FILE);
            db_path.is_file().then(|| Shard {
                name: dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                db_path,
            })
        })
        .collect()
}
