//! Weighted modulo-11 check character.

/// Number of digits the check character is computed from.
pub const BODY_LENGTH: usize = 17;

/// Positional weights, `2^(17 - i) mod 11` for body position `i`.
pub const WEIGHTS: [u32; BODY_LENGTH] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check character indexed by `sum mod 11`.
pub const CHECK_SYMBOLS: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// The only non-digit check character (remainder 2).
pub const CHECK_LETTER: char = 'X';

/// Check character for a weighted-sum remainder; `None` above 10.
pub fn remainder_symbol(remainder: usize) -> Option<char> {
    CHECK_SYMBOLS.get(remainder).copied()
}

/// Compute the check character of a 17-digit body.
///
/// Returns `None` unless `body` is exactly 17 ASCII digits.
pub fn check_character(body: &str) -> Option<char> {
    if body.len() != BODY_LENGTH {
        return None;
    }
    let mut sum = 0u32;
    for (ch, weight) in body.chars().zip(WEIGHTS) {
        sum += ch.to_digit(10)? * weight;
    }
    remainder_symbol((sum % 11) as usize)
}
