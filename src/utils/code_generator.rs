//! Random shortcode generation.

use std::collections::HashSet;

use rand::Rng;

/// Length of generated shortcodes.
pub const GENERATED_CODE_LEN: usize = 6;

/// The 62-character alphanumeric alphabet codes are drawn from.
const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random 6-character code absent from `taken`.
///
/// The whole string is resampled on a hit. With 62^6 (~5.6e10) possible codes
/// the loop terminates within a handful of iterations for any realistic
/// registry size; the registry's atomic insert remains the authoritative
/// uniqueness check against concurrent writers.
pub fn generate_code(taken: &HashSet<String>) -> String {
    let mut rng = rand::rng();

    loop {
        let code: String = (0..GENERATED_CODE_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();

        if !taken.contains(&code) {
            return code;
        }
    }
}
