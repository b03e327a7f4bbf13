//! Search filter normalization.
//!
//! Validation runs before any shard is opened, so a bad invocation never
//! touches a database.

use thiserror::Error;

use crate::cli::Cli;
use crate::core::entity::EntityType;

/// Errors in the invocation itself. Fatal for the whole run, exit code 1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("You must specify either --id, --name, or --list.")]
    NoCriterion,

    #[error("unknown type abbreviation '{0}'. Valid: BA, CV, SV, HV, AST")]
    UnknownType(String),
}

/// Normalized filter set, applied identically to every shard.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub list_all: bool,
    pub location: Option<String>,
    pub entity_type: Option<EntityType>,
    pub owner: Option<String>,
}

impl SearchFilter {
    pub fn from_args(cli: &Cli) -> Result<Self, UsageError> {
        let name = cli.name.as_deref().filter(|n| !n.is_empty());
        if cli.id.is_none() && name.is_none() && !cli.list {
            return Err(UsageError::NoCriterion);
        }
        let entity_type = match cli.entity_type.as_deref() {
            Some(abbrev) => Some(
                EntityType::from_abbrev(abbrev)
                    .ok_or_else(|| UsageError::UnknownType(abbrev.to_string()))?,
            ),
            None => None,
        };
        Ok(Self {
            id: cli.id,
            name: name.map(str::to_string),
            list_all: cli.list,
            location: cli.location.clone(),
            entity_type,
            owner: cli.owner.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["savescout"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_requires_a_criterion() {
        let err = SearchFilter::from_args(&parse(&[])).unwrap_err();
        assert_eq!(err, UsageError::NoCriterion);

        // An empty --name does not count as a criterion.
        let err = SearchFilter::from_args(&parse(&["--name", ""])).unwrap_err();
        assert_eq!(err, UsageError::NoCriterion);

        assert!(SearchFilter::from_args(&parse(&["--list"])).is_ok());
        assert!(SearchFilter::from_args(&parse(&["--id", "42"])).is_ok());
        assert!(SearchFilter::from_args(&parse(&["--name", "base"])).is_ok());
    }

    #[test]
    fn test_rejects_unknown_type() {
        let err = SearchFilter::from_args(&parse(&["--list", "--type", "ZZ"])).unwrap_err();
        assert_eq!(err, UsageError::UnknownType("ZZ".to_string()));
    }

    #[test]
    fn test_type_is_normalized() {
        let filter = SearchFilter::from_args(&parse(&["--list", "--type", "hv"])).unwrap();
        assert_eq!(filter.entity_type, Some(EntityType::HoverVessel));
    }
}
