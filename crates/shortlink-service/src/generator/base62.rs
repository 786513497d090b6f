use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use shortlink_core::base62;
use shortlink_core::{GenerationError, ShortCode};

use crate::generator::Generator;

/// Multiplier for spreading sequential counter values across the code
/// space. Coprime with 62^7 (odd, not divisible by 31), so the mapping
/// is a bijection and counter uniqueness carries over to the emitted
/// codes.
const MIX_MULTIPLIER: u64 = 1_000_003;

/// A short code generator backed by an atomic counter and a per-process
/// random seed.
///
/// Each call advances the counter and maps it through
/// `(counter * MIX_MULTIPLIER + seed) mod 62^7`, encoded as a
/// fixed-width seven character base62 string. Codes never repeat within
/// a single process until the whole code space has been handed out, at
/// which point every further call returns
/// [`GenerationError::Exhausted`].
#[derive(Debug)]
pub struct Base62Generator {
    counter: AtomicU64,
    seed: u64,
}

impl Base62Generator {
    /// Creates a generator with a fresh random per-process seed.
    pub fn new() -> Self {
        let seed = rand::rng().random_range(0..base62::CODE_SPACE);
        Self::with_seed(seed)
    }

    /// Creates a generator with an explicit seed.
    ///
    /// Two generators with the same seed emit the same sequence; useful
    /// for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_offset(seed, 0)
    }

    /// Creates a generator starting from a specific counter value.
    pub fn with_offset(seed: u64, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            seed: seed % base62::CODE_SPACE,
        }
    }
}

impl Default for Base62Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for Base62Generator {
    fn generate(&self) -> Result<ShortCode, GenerationError> {
        let count = self.counter.fetch_add(1, Ordering::Relaxed);
        if count >= base62::CODE_SPACE {
            return Err(GenerationError::Exhausted(base62::CODE_SPACE));
        }

        // u128 intermediate keeps the multiply exact before the modulo.
        let mixed = ((u128::from(count) * u128::from(MIX_MULTIPLIER) + u128::from(self.seed))
            % u128::from(base62::CODE_SPACE)) as u64;

        Ok(ShortCode::new_unchecked(base62::encode_fixed(mixed)))
    }
}
