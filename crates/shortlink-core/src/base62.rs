//! Fixed-width base62 encoding for generated short codes.

/// The URL-safe alphabet used for generated short codes.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 7;

/// Number of distinct codes of [`CODE_LENGTH`] characters (62^7).
pub const CODE_SPACE: u64 = 3_521_614_606_208;

/// Encodes `value` as a fixed-width base62 string of [`CODE_LENGTH`] characters.
///
/// Values are left-padded with the first alphabet character, so distinct
/// values below [`CODE_SPACE`] always encode to distinct codes of the
/// same length.
pub fn encode_fixed(mut value: u64) -> String {
    debug_assert!(value < CODE_SPACE);

    let mut buf = [ALPHABET[0]; CODE_LENGTH];
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(value % 62) as usize];
        value /= 62;
    }

    buf.iter().map(|&b| b as char).collect()
}
