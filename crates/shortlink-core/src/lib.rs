//! Core types and traits for the shortlink URL shortener.
//!
//! This crate provides the shared vocabulary used by the link service
//! and its storage backends: the validated [`ShortCode`] identifier,
//! the persisted [`Link`] entity, the [`Repository`] storage contract,
//! and the error types that cross layer boundaries.

pub mod base62;
pub mod error;
pub mod link;
pub mod repository;
pub mod shortcode;

pub use error::{CoreError, GenerationError, StorageError};
pub use link::{Link, LinkRecord};
pub use repository::Repository;
pub use shortcode::ShortCode;
