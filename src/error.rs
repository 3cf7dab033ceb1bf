use thiserror::Error;

/// Malformed input handed to one of the checksum routines.
///
/// Generators only ever pass internally built digit strings, so hitting one of
/// these through a public generator means a bug in the generator itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    #[error("Cannot calculate check digit for falsy input")]
    EmptyInput,

    #[error("Input should only contain digits, but contains: {0}")]
    NonDigit(char),

    #[error("Length of partial stNr must be 12")]
    PartialStNrLength,

    #[error("Length of partial stNr and weights must be 12")]
    PartialStNrOrWeightsLength,

    #[error("IBAN input contains invalid character: {0}")]
    IbanCharacter(char),
}

/// Errors surfaced by the identifier generators and the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("IBAN generation for country code '{0}' is not supported.")]
    UnsupportedIbanCountry(String),

    #[error("BIC generation for country code '{0}' is not supported.")]
    UnsupportedBicCountry(String),

    #[error("Invalid input {input}. Must be one of {valid}")]
    InvalidTaxIdType { input: String, valid: String },

    #[error("The length for generating a CUIDv2 must be between {min} and {max}")]
    CuidLengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("Unsupported identifier kind '{kind}'. Must be one of {valid}")]
    UnsupportedKind { kind: String, valid: String },

    #[error("Missing parameter '{parameter}' for identifier kind '{kind}'")]
    MissingParameter {
        kind: &'static str,
        parameter: &'static str,
    },

    /// A regenerate-on-invalid loop never produced a valid draw.
    #[error("{what} stayed invalid after {attempts} regeneration attempts")]
    RegenerationLimit { what: &'static str, attempts: usize },

    #[error("amount must be greater than 0")]
    EmptyBatch,

    #[error(transparent)]
    Checksum(#[from] ChecksumError),
}
