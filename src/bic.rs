use crate::countries::{find_country, Country, COUNTRIES};
use crate::error::GenerationError;
use crate::random::{
    random_char, random_string_of_chars, ALL_LETTERS, ALL_LETTERS_AND_ALL_DIGITS,
    ALL_LETTERS_AND_ALL_DIGITS_EXCEPT_0_1, ALL_LETTERS_EXCEPT_O_AND_ALL_DIGITS,
    ALL_LETTERS_EXCEPT_X_AND_ALL_DIGITS,
};
use rand::Rng;

const HEAD_OFFICE_BRANCH_CODE: &str = "XXX";
const NO_BRANCH_RATIO: f64 = 0.2;

/// The ISO 9362 structure does not depend on the country, so every
/// registered country is supported.
pub fn bic_supported_countries() -> &'static [Country] {
    COUNTRIES
}

/// Generates an 8 or 11 character BIC for `country_code`.
pub fn generate_bic<R: Rng + ?Sized>(
    rng: &mut R,
    country_code: &str,
) -> Result<String, GenerationError> {
    let country = find_country(country_code)
        .ok_or_else(|| GenerationError::UnsupportedBicCountry(country_code.to_string()))?;

    let bank = random_string_of_chars(rng, ALL_LETTERS, 4);
    let location = location_code(rng);
    let branch = branch_code(rng);
    Ok(format!("{}{}{}{}", bank, country.iso_code, location, branch))
}

/// Country code of a well-formed BIC, `None` for anything else.
pub fn bic_country_code(bic: &str) -> Option<&str> {
    let bic = bic.trim();
    if !(bic.len() == 8 || bic.len() == 11) || !bic.is_ascii() {
        return None;
    }
    let code = &bic[4..6];
    if code.chars().all(|ch| ch.is_ascii_uppercase()) {
        Some(code)
    } else {
        None
    }
}

// '0' and '1' are reserved as first character, 'O' as second one.
fn location_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut code = String::with_capacity(2);
    code.push(random_char(rng, ALL_LETTERS_AND_ALL_DIGITS_EXCEPT_0_1));
    code.push(random_char(rng, ALL_LETTERS_EXCEPT_O_AND_ALL_DIGITS));
    code
}

fn branch_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    if rng.gen_bool(NO_BRANCH_RATIO) {
        return if rng.gen_bool(0.5) {
            String::new()
        } else {
            HEAD_OFFICE_BRANCH_CODE.to_string()
        };
    }

    let mut code = String::with_capacity(3);
    code.push(random_char(rng, ALL_LETTERS_EXCEPT_X_AND_ALL_DIGITS));
    code.push_str(&random_string_of_chars(rng, ALL_LETTERS_AND_ALL_DIGITS, 2));
    code
}
