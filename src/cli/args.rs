//! CLI argument definitions using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Saves root of a stock Steam install.
pub const DEFAULT_SAVES_DIR: &str =
    r"C:\SteamLibrary\steamapps\common\Empyrion - Galactic Survival\Saves\Games";

const AFTER_HELP: &str = "\
Examples:
  List all structures in a specific game and location:
    savescout --game MyWorld --location \"Balapru Moon Sector\" --list

  List all structures in games containing 'Creative':
    savescout --games Creative --list

  Search for a specific entity ID:
    savescout --id 123456

  Search for all entities with 'base' in the name:
    savescout --name base

  Search for structures of a specific type:
    savescout --type CV --list

  Find all structures owned by a specific player:
    savescout --owner Alice --list";

#[derive(Parser, Debug)]
#[command(name = "savescout")]
#[command(author, version)]
#[command(about = "Search save-game databases for entities, structures, and blueprints")]
#[command(long_about = "Search save-game databases for entities by ID, partial NAME, or list \
all structures, across every world found under the saves root. Optionally filter by playfield \
(planet/sector), game name, owner, or structure type.")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Entity ID to search for
    #[arg(long)]
    pub id: Option<i64>,

    /// Partial entity NAME to search for (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// List all structures
    #[arg(long)]
    pub list: bool,

    /// Filter results to a specific playfield (planet/sector) NAME
    #[arg(long)]
    pub location: Option<String>,

    /// Root SAVES directory
    #[arg(long, default_value = DEFAULT_SAVES_DIR)]
    pub saves: PathBuf,

    /// Search only saves for games containing this name (substring match)
    #[arg(long)]
    pub games: Option<String>,

    /// Search only saves for the game with this exact name (takes precedence over --games)
    #[arg(long)]
    pub game: Option<String>,

    /// Filter by structure type: BA, CV, SV, HV, AST
    #[arg(long = "type", value_name = "TYPE")]
    pub entity_type: Option<String>,

    /// Find all structures owned by the given entity NAME (resolved per database)
    #[arg(long)]
    pub owner: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["savescout", "--list"]).unwrap();
        assert!(cli.list);
        assert_eq!(cli.saves, PathBuf::from(DEFAULT_SAVES_DIR));
        assert!(cli.id.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_type_flag_parses_as_string() {
        let cli = Cli::try_parse_from(["savescout", "--list", "--type", "cv"]).unwrap();
        assert_eq!(cli.entity_type.as_deref(), Some("cv"));
    }
}
