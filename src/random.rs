use crate::error::GenerationError;
use rand::seq::SliceRandom;
use rand::Rng;

pub const ALL_DIGITS: &[u8] = b"0123456789";
pub const ALL_DIGITS_EXCEPT_0: &[u8] = b"123456789";
pub const ALL_DIGITS_EXCEPT_0_1: &[u8] = b"23456789";
pub const ALL_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALL_LETTERS_EXCEPT_O: &[u8] = b"ABCDEFGHIJKLMNPQRSTUVWXYZ";
pub const ALL_LETTERS_EXCEPT_X: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWYZ";
pub const ALL_LETTERS_AND_ALL_DIGITS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const ALL_LETTERS_EXCEPT_O_AND_ALL_DIGITS: &[u8] = b"ABCDEFGHIJKLMNPQRSTUVWXYZ0123456789";
pub const ALL_LETTERS_EXCEPT_X_AND_ALL_DIGITS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWYZ0123456789";
pub const ALL_LETTERS_AND_ALL_DIGITS_EXCEPT_0_1: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ23456789";

/// Upper bound for every regenerate-on-invalid loop.
pub const MAX_REGENERATION_ATTEMPTS: usize = 1000;

/// Draws one character uniformly from `charset`.
///
/// `charset` must be non-empty ASCII; every caller passes one of the constants
/// above or a set derived from them.
pub fn random_char<R: Rng + ?Sized>(rng: &mut R, charset: &[u8]) -> char {
    debug_assert!(!charset.is_empty(), "charset must not be empty");
    let idx = rng.gen_range(0..charset.len());
    char::from(charset[idx])
}

pub fn random_string_of_chars<R: Rng + ?Sized>(rng: &mut R, charset: &[u8], len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(random_char(rng, charset));
    }
    out
}

pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    random_string_of_chars(rng, ALL_DIGITS, len)
}

pub fn random_element<'a, R: Rng + ?Sized, T>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// Repeats `draw` until it yields a value, giving up after
/// [`MAX_REGENERATION_ATTEMPTS`] tries.
pub fn regenerate_until<R, T, F>(
    rng: &mut R,
    what: &'static str,
    mut draw: F,
) -> Result<T, GenerationError>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> Result<Option<T>, GenerationError>,
{
    for attempt in 1..=MAX_REGENERATION_ATTEMPTS {
        if let Some(value) = draw(rng)? {
            return Ok(value);
        }
        log::trace!("{} draw {} invalid, regenerating", what, attempt);
    }
    Err(GenerationError::RegenerationLimit {
        what,
        attempts: MAX_REGENERATION_ATTEMPTS,
    })
}
