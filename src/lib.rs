//! savescout: multi-world save-game entity search
//!
//! Scans the `global.db` of every save-game world under a root directory
//! for entities, structures, and blueprints, tolerating the schema drift
//! between game software versions.

pub mod cli;
pub mod core;
