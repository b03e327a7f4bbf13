//! Entity typing and the report row shared by the query and rendering layers.

use std::fmt;

/// Entity types as stored in the `etype` column of `Entities`.
///
/// The domain is fixed by the game; anything outside the known codes is
/// displayed as the raw number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Player,
    Base,
    CapitalVessel,
    SmallVessel,
    HoverVessel,
    Drone,
    Asteroid,
    Unknown,
}

impl EntityType {
    pub const ALL: [EntityType; 8] = [
        EntityType::Player,
        EntityType::Base,
        EntityType::CapitalVessel,
        EntityType::SmallVessel,
        EntityType::HoverVessel,
        EntityType::Drone,
        EntityType::Asteroid,
        EntityType::Unknown,
    ];

    /// Wire code used by the game database.
    pub fn code(self) -> i64 {
        match self {
            EntityType::Player => 1,
            EntityType::Base => 2,
            EntityType::CapitalVessel => 3,
            EntityType::SmallVessel => 4,
            EntityType::HoverVessel => 5,
            EntityType::Drone => 6,
            EntityType::Asteroid => 7,
            EntityType::Unknown => 8,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// Abbreviation shown in the type column.
    pub fn abbrev(self) -> &'static str {
        match self {
            EntityType::Player => "PLAYER",
            EntityType::Base => "BA",
            EntityType::CapitalVessel => "CV",
            EntityType::SmallVessel => "SV",
            EntityType::HoverVessel => "HV",
            EntityType::Drone => "DRONE",
            EntityType::Asteroid => "AST",
            EntityType::Unknown => "UNKNOWN",
        }
    }

    /// Parse an abbreviation, case-insensitively.
    pub fn from_abbrev(abbrev: &str) -> Option<Self> {
        let upper = abbrev.to_ascii_uppercase();
        Self::ALL.iter().copied().find(|t| t.abbrev() == upper)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityType::Player => "Player",
            EntityType::Base => "Base",
            EntityType::CapitalVessel => "Capital Vessel",
            EntityType::SmallVessel => "Small Vessel",
            EntityType::HoverVessel => "Hover Vessel",
            EntityType::Drone => "Drone",
            EntityType::Asteroid => "Asteroid",
            EntityType::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Type column text for a raw `etype` code; unknown codes pass through as-is.
pub fn abbrev_for_code(code: i64) -> String {
    match EntityType::from_code(code) {
        Some(t) => t.abbrev().to_string(),
        None => code.to_string(),
    }
}

/// One line of the final report, one per matched entity.
///
/// Every field is a `String`; the empty string stands in for unknown or
/// absent values so the renderer never deals with NULLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub shard: String,
    pub blueprint: String,
    pub star_system: String,
    pub playfield: String,
    pub id: String,
    pub owner: String,
    pub type_abbrev: String,
    pub name: String,
}
