//! Generators for synthetic test identifiers: IBAN, BIC, German tax IDs,
//! CUID v2 and UUID v4, plus the checksum algorithms behind them.
//!
//! Every generator that draws randomness takes an injected `rand::Rng`, so a
//! seeded `rand_chacha::ChaCha8Rng` reproduces a run exactly.

pub mod bic;
pub mod checksum;
pub mod countries;
pub mod cuid;
pub mod error;
pub mod generator;
pub mod iban;
pub mod models;
pub mod random;
pub mod tax_id;
pub mod uuid_v4;

pub use error::{ChecksumError, GenerationError};
pub use generator::{
    generate, generate_batch, identifier_kinds, BatchRequest, GenerateParams, IdentifierKind,
};
pub use models::{render_text, GeneratedRecord};
