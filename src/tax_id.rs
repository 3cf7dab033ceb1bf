//! German tax identifiers: Steuer-IdNr., St.-Nr., USt-IdNr. and W-IdNr.

use crate::checksum::{
    german_st_nr_11er_verfahren, german_st_nr_11er_verfahren_berlin,
    german_st_nr_11er_verfahren_modified_rp, german_st_nr_2er_verfahren, iso_iec_7064_mod_11_10,
};
use crate::countries::GERMANY;
use crate::error::{ChecksumError, GenerationError};
use crate::random::{
    random_char, random_digits, random_element, regenerate_until, ALL_DIGITS, ALL_DIGITS_EXCEPT_0,
};
use rand::Rng;

pub const TAX_ID_GERMANY_STEUER_ID: &str = "tax-id-germany-steuer-id";
pub const TAX_ID_GERMANY_ST_NR: &str = "tax-id-germany-st-nr";
pub const TAX_ID_GERMANY_UST_ID: &str = "tax-id-germany-ust-id";
pub const TAX_ID_GERMANY_W_ID: &str = "tax-id-germany-w-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxIdType {
    GermanySteuerId,
    GermanyStNr,
    GermanyUstId,
    GermanyWId,
}

impl TaxIdType {
    /// Registry order, which is also the order presented to users.
    pub const ALL: [TaxIdType; 4] = [
        TaxIdType::GermanySteuerId,
        TaxIdType::GermanyStNr,
        TaxIdType::GermanyUstId,
        TaxIdType::GermanyWId,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TaxIdType::GermanySteuerId => TAX_ID_GERMANY_STEUER_ID,
            TaxIdType::GermanyStNr => TAX_ID_GERMANY_ST_NR,
            TaxIdType::GermanyUstId => TAX_ID_GERMANY_UST_ID,
            TaxIdType::GermanyWId => TAX_ID_GERMANY_W_ID,
        }
    }

    pub fn display_name(self) -> String {
        let label = match self {
            TaxIdType::GermanySteuerId => "Steuer-IdNr.",
            TaxIdType::GermanyStNr => "St.-Nr.",
            TaxIdType::GermanyUstId => "USt-IdNr.",
            TaxIdType::GermanyWId => "W-IdNr.",
        };
        format!("{} ({})", GERMANY.name, label)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn parse(key: &str) -> Result<Self, GenerationError> {
        Self::from_key(key).ok_or_else(|| GenerationError::InvalidTaxIdType {
            input: key.to_string(),
            valid: tax_id_type_keys().join(","),
        })
    }
}

pub fn tax_id_type_keys() -> Vec<&'static str> {
    TaxIdType::ALL.iter().map(|kind| kind.key()).collect()
}

/// Generates a tax ID for a registry key such as [`TAX_ID_GERMANY_ST_NR`].
pub fn generate_tax_id<R: Rng + ?Sized>(rng: &mut R, key: &str) -> Result<String, GenerationError> {
    generate_tax_id_of_type(rng, TaxIdType::parse(key)?)
}

pub fn generate_tax_id_of_type<R: Rng + ?Sized>(
    rng: &mut R,
    kind: TaxIdType,
) -> Result<String, GenerationError> {
    match kind {
        TaxIdType::GermanySteuerId => germany_steuer_id(rng),
        TaxIdType::GermanyStNr => germany_st_nr(rng),
        TaxIdType::GermanyUstId => germany_ust_id(rng),
        TaxIdType::GermanyWId => germany_w_id(rng),
    }
}

/// Occurrences of each decimal digit in `digits`; other characters are ignored.
pub fn digit_counts(digits: &str) -> [usize; 10] {
    let mut counts = [0usize; 10];
    for ch in digits.chars() {
        if let Some(digit) = ch.to_digit(10) {
            counts[digit as usize] += 1;
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Steuer-IdNr.
// ---------------------------------------------------------------------------

fn germany_steuer_id<R: Rng + ?Sized>(rng: &mut R) -> Result<String, GenerationError> {
    let mut steuer_id = String::with_capacity(11);
    steuer_id.push(random_char(rng, ALL_DIGITS_EXCEPT_0));
    for _ in 1..10 {
        let allowed = steuer_id_allowed_next_digits(&steuer_id);
        steuer_id.push(random_char(rng, &allowed));
    }
    let check = iso_iec_7064_mod_11_10(&steuer_id)?;
    steuer_id.push(check);
    Ok(steuer_id)
}

/// Exactly one digit of the first ten repeats, at most three times and never
/// three times in a row.
fn steuer_id_allowed_next_digits(partial: &str) -> Vec<u8> {
    let counts = digit_counts(partial);
    let digit_used_twice = counts.iter().position(|count| *count >= 2);

    if partial.len() == 9 && digit_used_twice.is_none() {
        // all nine digits differ, the last one has to repeat one of them
        return partial.as_bytes().to_vec();
    }

    let has_digit_three_times = counts.iter().any(|count| *count >= 3);
    let bytes = partial.as_bytes();
    let ends_with_same_digit_twice =
        bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2];

    ALL_DIGITS
        .iter()
        .copied()
        .filter(|ch| {
            let digit = usize::from(ch - b'0');
            let used = counts[digit] > 0;
            if has_digit_three_times || ends_with_same_digit_twice {
                !used
            } else if let Some(repeated) = digit_used_twice {
                !used || digit == repeated
            } else {
                true
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// St.-Nr.
// ---------------------------------------------------------------------------

const STANDARD_11ER_WEIGHTS: [u32; 12] = [0, 5, 4, 3, 0, 2, 7, 6, 5, 4, 3, 2];
const HANSEATIC_11ER_WEIGHTS: [u32; 12] = [0, 0, 4, 3, 0, 2, 7, 6, 5, 4, 3, 2];
const LOWER_SAXONY_11ER_WEIGHTS: [u32; 12] = [0, 0, 2, 9, 0, 8, 7, 6, 5, 4, 3, 2];
const NRW_11ER_WEIGHTS: [u32; 12] = [0, 3, 2, 1, 0, 7, 6, 5, 4, 3, 2, 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StNrCheckMethod {
    ZweierVerfahren,
    ElferVerfahren(&'static [u32; 12]),
    ElferVerfahrenBerlin,
    ElferVerfahrenModifiedRp,
}

impl StNrCheckMethod {
    /// Raw check value for a 12 digit partial St.-Nr.; values of 10 or more
    /// are invalid.
    pub fn check_value(self, partial: &str) -> Result<u32, ChecksumError> {
        match self {
            StNrCheckMethod::ZweierVerfahren => german_st_nr_2er_verfahren(partial),
            StNrCheckMethod::ElferVerfahren(weights) => {
                german_st_nr_11er_verfahren(partial, weights)
            }
            StNrCheckMethod::ElferVerfahrenBerlin => german_st_nr_11er_verfahren_berlin(partial),
            StNrCheckMethod::ElferVerfahrenModifiedRp => {
                german_st_nr_11er_verfahren_modified_rp(partial)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StNrStateSpec {
    pub state_code: &'static str,
    pub states: &'static [&'static str],
    pub method: StNrCheckMethod,
}

impl StNrStateSpec {
    /// State code and tax office number share the first four digits.
    pub fn bufa_nr_length(&self) -> usize {
        4 - self.state_code.len()
    }
}

pub const ST_NR_STATE_SPECS: [StNrStateSpec; 13] = [
    StNrStateSpec {
        state_code: "28",
        states: &["Baden-Württemberg"],
        method: StNrCheckMethod::ZweierVerfahren,
    },
    StNrStateSpec {
        state_code: "9",
        states: &["Bavaria"],
        method: StNrCheckMethod::ElferVerfahren(&STANDARD_11ER_WEIGHTS),
    },
    StNrStateSpec {
        state_code: "11",
        states: &["Berlin"],
        method: StNrCheckMethod::ElferVerfahrenBerlin,
    },
    StNrStateSpec {
        state_code: "3",
        states: &["Brandenburg", "Saxony", "Saxony-Anhalt"],
        method: StNrCheckMethod::ElferVerfahren(&STANDARD_11ER_WEIGHTS),
    },
    StNrStateSpec {
        state_code: "24",
        states: &["Bremen"],
        method: StNrCheckMethod::ElferVerfahren(&HANSEATIC_11ER_WEIGHTS),
    },
    StNrStateSpec {
        state_code: "22",
        states: &["Hamburg"],
        method: StNrCheckMethod::ElferVerfahren(&HANSEATIC_11ER_WEIGHTS),
    },
    StNrStateSpec {
        state_code: "26",
        states: &["Hesse"],
        method: StNrCheckMethod::ZweierVerfahren,
    },
    StNrStateSpec {
        state_code: "23",
        states: &["Lower Saxony"],
        method: StNrCheckMethod::ElferVerfahren(&LOWER_SAXONY_11ER_WEIGHTS),
    },
    StNrStateSpec {
        state_code: "4",
        states: &["Mecklenburg-Vorpommern", "Thuringia"],
        method: StNrCheckMethod::ElferVerfahren(&STANDARD_11ER_WEIGHTS),
    },
    StNrStateSpec {
        state_code: "5",
        states: &["North Rhine-Westphalia"],
        method: StNrCheckMethod::ElferVerfahren(&NRW_11ER_WEIGHTS),
    },
    StNrStateSpec {
        state_code: "27",
        states: &["Rhineland-Palatinate"],
        method: StNrCheckMethod::ElferVerfahrenModifiedRp,
    },
    StNrStateSpec {
        state_code: "10",
        states: &["Saarland"],
        method: StNrCheckMethod::ElferVerfahren(&STANDARD_11ER_WEIGHTS),
    },
    StNrStateSpec {
        state_code: "21",
        states: &["Schleswig-Holstein"],
        method: StNrCheckMethod::ZweierVerfahren,
    },
];

/// Looks up the state specification a complete or partial St.-Nr. belongs to.
pub fn st_nr_state_spec(st_nr: &str) -> Option<&'static StNrStateSpec> {
    // one-digit codes never start with 1 or 2, so prefixes cannot collide
    ST_NR_STATE_SPECS
        .iter()
        .find(|spec| st_nr.starts_with(spec.state_code))
}

fn germany_st_nr<R: Rng + ?Sized>(rng: &mut R) -> Result<String, GenerationError> {
    let spec = random_element(rng, &ST_NR_STATE_SPECS)
        .copied()
        .unwrap_or(ST_NR_STATE_SPECS[0]);
    generate_st_nr_for_state(rng, &spec)
}

/// `state code + tax office number + "0" + 7 random digits + check digit`.
pub fn generate_st_nr_for_state<R: Rng + ?Sized>(
    rng: &mut R,
    spec: &StNrStateSpec,
) -> Result<String, GenerationError> {
    regenerate_until(rng, "German St.-Nr.", |rng| {
        let bufa_nr = random_digits(rng, spec.bufa_nr_length());
        let mut st_nr = format!("{}{}0{}", spec.state_code, bufa_nr, random_digits(rng, 7));
        let check = spec.method.check_value(&st_nr)?;
        Ok(char::from_digit(check, 10).map(|check| {
            st_nr.push(check);
            st_nr
        }))
    })
}

// ---------------------------------------------------------------------------
// USt-IdNr. / W-IdNr.
// ---------------------------------------------------------------------------

fn germany_ust_id<R: Rng + ?Sized>(rng: &mut R) -> Result<String, GenerationError> {
    let digits = random_digits(rng, 8);
    let check = iso_iec_7064_mod_11_10(&digits)?;
    Ok(format!("{}{}{}", GERMANY.iso_code, digits, check))
}

fn germany_w_id<R: Rng + ?Sized>(rng: &mut R) -> Result<String, GenerationError> {
    let ust_id = germany_ust_id(rng)?;
    let unterscheidungsmerkmal = random_digits(rng, 5);
    Ok(format!("{}-{}", ust_id, unterscheidungsmerkmal))
}
