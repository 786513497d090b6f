pub mod base62;

use shortlink_core::{GenerationError, ShortCode};

pub use base62::Base62Generator;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with
/// storage: no I/O, no input, and no side effects beyond their own
/// internal state advancement. A generator is shared by all
/// concurrently executing calls, so implementations must serialize
/// their own state updates.
pub trait Generator: Send + Sync + 'static {
    /// Generates a short code that has not been handed out before
    /// within this process.
    ///
    /// Fails only when the generator itself is exhausted or
    /// misconfigured; callers treat that as an internal fault.
    fn generate(&self) -> Result<ShortCode, GenerationError>;
}
