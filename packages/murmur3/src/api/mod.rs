//! Fluent hashing API
//!
//! Usage: `Hash::murmur3_128().compute(data)`

pub mod hash_entry;
pub mod murmur3_builder;

// Re-export main entry point
pub use hash_entry::Hash;

pub use murmur3_builder::Murmur3Builder;
