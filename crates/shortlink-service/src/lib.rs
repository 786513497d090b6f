//! Link service implementation for the shortlink URL shortener.
//!
//! This crate provides the short code generator, the [`LinkService`]
//! orchestration over a storage repository, and the response envelope
//! shaping for the gRPC surface. Core types are re-exported from
//! `shortlink_core`.

pub mod error;
pub mod generator;
pub mod response;
pub mod service;

pub use error::LinkError;
pub use generator::{Base62Generator, Generator};
pub use service::LinkService;
