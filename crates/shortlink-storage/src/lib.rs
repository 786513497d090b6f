//! Storage backends for the shortlink URL shortener.
//!
//! Both backends implement the [`shortlink_core::Repository`] contract:
//! insert-without-overwrite and point lookup, with duplicate codes
//! surfaced as [`shortlink_core::StorageError::Conflict`].

pub mod memory;
pub mod postgres;

pub use memory::InMemoryRepository;
pub use postgres::PgRepository;
