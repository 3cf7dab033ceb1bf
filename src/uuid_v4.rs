use rand::Rng;
use uuid::Builder;

/// Canonical, hyphenated, lower-case version 4 UUID built from 16 bytes of
/// the caller's RNG.
pub fn generate_uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.gen();
    Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}
