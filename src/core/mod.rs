//! Core module - save discovery, schema-adaptive querying, aggregation

pub mod diag;
pub mod entity;
pub mod filter;
pub mod owner;
pub mod query;
pub mod report;
pub mod saves;

pub use diag::Diag;
pub use entity::{EntityType, ResultRow};
pub use filter::{SearchFilter, UsageError};
pub use owner::OwnerResolver;
pub use query::{scan_shard, ShardSkip};
pub use saves::{locate_shards, resolve_save_dirs, Shard};
