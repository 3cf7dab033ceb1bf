use crate::bic::generate_bic;
use crate::cuid::generate_cuid_v2;
use crate::error::GenerationError;
use crate::iban::generate_iban;
use crate::models::GeneratedRecord;
use crate::tax_id::{generate_tax_id_of_type, TaxIdType};
use crate::uuid_v4::generate_uuid_v4;
use rand::Rng;

pub const KIND_IBAN: &str = "iban";
pub const KIND_BIC: &str = "bic";
pub const KIND_TAX_ID: &str = "tax-id";
pub const KIND_CUID_V2: &str = "cuidv2";
pub const KIND_UUID_V4: &str = "uuidv4";

const KIND_KEYS: &[&str] = &[KIND_IBAN, KIND_BIC, KIND_TAX_ID, KIND_CUID_V2, KIND_UUID_V4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Iban,
    Bic,
    TaxId(TaxIdType),
    CuidV2,
    UuidV4,
}

impl IdentifierKind {
    pub fn key(&self) -> &'static str {
        match self {
            IdentifierKind::Iban => KIND_IBAN,
            IdentifierKind::Bic => KIND_BIC,
            IdentifierKind::TaxId(kind) => kind.key(),
            IdentifierKind::CuidV2 => KIND_CUID_V2,
            IdentifierKind::UuidV4 => KIND_UUID_V4,
        }
    }
}

/// Parameters a kind may need; unused ones are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateParams {
    pub country: Option<String>,
    pub tax_id_type: Option<String>,
    pub length: Option<usize>,
}

impl GenerateParams {
    pub fn country(country: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            ..Self::default()
        }
    }

    pub fn tax_id_type(key: impl Into<String>) -> Self {
        Self {
            tax_id_type: Some(key.into()),
            ..Self::default()
        }
    }

    pub fn length(length: usize) -> Self {
        Self {
            length: Some(length),
            ..Self::default()
        }
    }
}

/// `(key, display name)` of every kind a front end can offer.
pub fn identifier_kinds() -> Vec<(&'static str, &'static str)> {
    vec![
        (KIND_IBAN, "IBAN"),
        (KIND_BIC, "BIC"),
        (KIND_TAX_ID, "Tax ID"),
        (KIND_CUID_V2, "CUID v2"),
        (KIND_UUID_V4, "UUID v4"),
    ]
}

/// Resolves a kind key. Tax-ID type keys are accepted directly; the generic
/// `tax-id` kind takes its type from `params`.
pub fn resolve_kind(kind: &str, params: &GenerateParams) -> Result<IdentifierKind, GenerationError> {
    match kind {
        KIND_IBAN => Ok(IdentifierKind::Iban),
        KIND_BIC => Ok(IdentifierKind::Bic),
        KIND_CUID_V2 => Ok(IdentifierKind::CuidV2),
        KIND_UUID_V4 => Ok(IdentifierKind::UuidV4),
        KIND_TAX_ID => {
            let key = params
                .tax_id_type
                .as_deref()
                .ok_or(GenerationError::MissingParameter {
                    kind: KIND_TAX_ID,
                    parameter: "type",
                })?;
            Ok(IdentifierKind::TaxId(TaxIdType::parse(key)?))
        }
        other => match TaxIdType::from_key(other) {
            Some(tax_id_type) => Ok(IdentifierKind::TaxId(tax_id_type)),
            None => Err(GenerationError::UnsupportedKind {
                kind: other.to_string(),
                valid: KIND_KEYS.join(","),
            }),
        },
    }
}

/// Single entry point for front ends: `generate(kind, params) -> identifier`.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    kind: &str,
    params: &GenerateParams,
) -> Result<String, GenerationError> {
    let resolved = resolve_kind(kind, params)?;
    log::debug!("generating {} ({:?})", resolved.key(), params);
    generate_kind(rng, resolved, params)
}

pub fn generate_kind<R: Rng + ?Sized>(
    rng: &mut R,
    kind: IdentifierKind,
    params: &GenerateParams,
) -> Result<String, GenerationError> {
    match kind {
        IdentifierKind::Iban => generate_iban(rng, required_country(KIND_IBAN, params)?),
        IdentifierKind::Bic => generate_bic(rng, required_country(KIND_BIC, params)?),
        IdentifierKind::TaxId(tax_id_type) => generate_tax_id_of_type(rng, tax_id_type),
        IdentifierKind::CuidV2 => generate_cuid_v2(params.length),
        IdentifierKind::UuidV4 => Ok(generate_uuid_v4(rng)),
    }
}

fn required_country<'a>(
    kind: &'static str,
    params: &'a GenerateParams,
) -> Result<&'a str, GenerationError> {
    params
        .country
        .as_deref()
        .ok_or(GenerationError::MissingParameter {
            kind,
            parameter: "country",
        })
}

#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub kind: String,
    pub params: GenerateParams,
    pub amount: usize,
}

/// Generates `amount` independent copies. A failing copy is recorded with
/// its error message and does not stop the rest of the batch.
pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    request: &BatchRequest,
) -> Result<Vec<GeneratedRecord>, GenerationError> {
    if request.amount == 0 {
        return Err(GenerationError::EmptyBatch);
    }

    let mut records = Vec::with_capacity(request.amount);
    for index in 0..request.amount {
        let result = generate(rng, &request.kind, &request.params);
        if let Err(err) = &result {
            log::warn!("{} #{} failed: {}", request.kind, index + 1, err);
        }
        records.push(GeneratedRecord::from_result(index + 1, &request.kind, result));
    }
    Ok(records)
}
