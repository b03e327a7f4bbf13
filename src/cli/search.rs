//! The search command: directory discovery, per-shard scans, rendering.

use clap::CommandFactory;
use miette::Result;

use crate::cli::{table, Cli};
use crate::core::diag::Diag;
use crate::core::filter::{SearchFilter, UsageError};
use crate::core::query::{scan_shard, ShardSkip};
use crate::core::report;
use crate::core::saves;

pub fn run(cli: Cli) -> Result<()> {
    // Usage errors abort before any shard is opened.
    let filter = match SearchFilter::from_args(&cli) {
        Ok(filter) => filter,
        Err(err) => usage_error(&err),
    };
    let diag = Diag::new(cli.verbose);

    let dirs = saves::resolve_save_dirs(&cli.saves, cli.game.as_deref(), cli.games.as_deref());
    diag.log(format!(
        "candidate save directories: {}",
        dirs.iter()
            .filter_map(|d| d.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(", ")
    ));

    let shards = saves::locate_shards(&dirs);
    for shard in &shards {
        diag.log(format!("found database: {}", shard.db_path.display()));
    }

    let mut collected = Vec::new();
    for shard in &shards {
        match scan_shard(shard, &filter, &diag) {
            Ok(mut rows) => collected.append(&mut rows),
            Err(ShardSkip::OwnerUnresolved(owner)) => {
                diag.log(format!("{}: owner '{}' not found", shard.name, owner));
            }
            Err(err) => {
                diag.log(format!("{}: skipped: {}", shard.name, err));
            }
        }
    }

    let rows = report::aggregate(collected);
    if rows.is_empty() {
        println!("No matches found.");
    } else {
        print!("{}", table::render(&rows));
    }
    println!("Total structures found: {}", rows.len());
    diag.log(format!("checked {} databases", shards.len()));
    Ok(())
}

/// Print the error, a usage summary, and a help hint, then exit 1.
fn usage_error(err: &UsageError) -> ! {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    eprintln!("{name}: {err}");
    eprintln!();
    eprintln!("{}", cmd.render_usage());
    eprintln!("Try '{name} --help' for more information.");
    std::process::exit(1);
}
