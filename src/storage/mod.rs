mod kv;

pub use kv::*;

/// SQL migration for the key-value schema
pub const MIGRATION_001_INITIAL: &str = include_str!("migrations/001_initial.sql");
