//! Random identifier generation for share links.

use rand::distr::{Alphanumeric, SampleString};

/// Length of the short code embedded in public inventory URLs.
const SHORT_CODE_LEN: usize = 6;

/// Length of the invite token collaborators redeem to join an inventory.
const SHARE_TOKEN_LEN: usize = 32;

/// Generates a fresh six-character alphanumeric short code.
pub fn short_code() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), SHORT_CODE_LEN)
}

/// Generates a fresh 32-character alphanumeric share token.
pub fn share_token() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), SHARE_TOKEN_LEN)
}
