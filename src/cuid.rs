use crate::error::GenerationError;
use cuid2::CuidConstructor;

pub const CUID_V2_MIN_LENGTH: usize = 2;
pub const CUID_V2_MAX_LENGTH: usize = 32;
pub const CUID_V2_DEFAULT_LENGTH: usize = 24;

/// Generates a CUID v2 of the given length (24 when `None`).
///
/// Entropy comes from the `cuid2` crate itself (timestamp, counter, host
/// fingerprint and a random salt), not from an injected RNG.
pub fn generate_cuid_v2(length: Option<usize>) -> Result<String, GenerationError> {
    let length = length.unwrap_or(CUID_V2_DEFAULT_LENGTH);
    if !(CUID_V2_MIN_LENGTH..=CUID_V2_MAX_LENGTH).contains(&length) {
        return Err(GenerationError::CuidLengthOutOfRange {
            length,
            min: CUID_V2_MIN_LENGTH,
            max: CUID_V2_MAX_LENGTH,
        });
    }

    // the range check above keeps the value well inside u16
    let constructor = CuidConstructor::new().with_length(length as u16);
    Ok(constructor.create_id())
}
