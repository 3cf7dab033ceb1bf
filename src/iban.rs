use crate::checksum::{iban_check_digits, mod_97};
use crate::countries::{
    Country, ANDORRA, AUSTRIA, BELGIUM, BULGARIA, CROATIA, CYPRUS, FRANCE, GERMANY, GREECE,
    ICELAND, IRELAND, ITALY, LATVIA, LIECHTENSTEIN, LITHUANIA, LUXEMBOURG, MALTA, MOLDOVA,
    MONACO, NETHERLANDS, NORWAY, POLAND, ROMANIA, RUSSIA, SAN_MARINO, SPAIN, SWITZERLAND,
    VATICAN_CITY,
};
use crate::error::GenerationError;
use crate::random::{
    random_char, random_digits, random_string_of_chars, regenerate_until, ALL_DIGITS,
    ALL_DIGITS_EXCEPT_0, ALL_LETTERS, ALL_LETTERS_AND_ALL_DIGITS,
};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digits,
    Letters,
    Alphanumeric,
}

impl CharClass {
    pub fn charset(self) -> &'static [u8] {
        match self {
            CharClass::Digits => ALL_DIGITS,
            CharClass::Letters => ALL_LETTERS,
            CharClass::Alphanumeric => ALL_LETTERS_AND_ALL_DIGITS,
        }
    }
}

/// Ordered `(allowed characters, length)` segments of a BBAN without an
/// embedded national check digit.
pub type BbanPattern = &'static [(CharClass, usize)];

#[derive(Debug, Clone, Copy)]
enum Bban {
    Pattern(BbanPattern),
    Belgium,
    Netherlands,
    France,
    Italy,
    Norway,
    Poland,
    Spain,
}

struct IbanFormat {
    country: Country,
    length: usize,
    bban: Bban,
}

use CharClass::{Alphanumeric as C, Digits as N, Letters as A};

const IBAN_FORMATS: &[IbanFormat] = &[
    IbanFormat { country: ANDORRA, length: 24, bban: Bban::Pattern(&[(N, 4), (N, 4), (C, 12)]) },
    IbanFormat { country: AUSTRIA, length: 20, bban: Bban::Pattern(&[(N, 5), (N, 11)]) },
    IbanFormat { country: BELGIUM, length: 16, bban: Bban::Belgium },
    IbanFormat { country: BULGARIA, length: 22, bban: Bban::Pattern(&[(A, 4), (N, 4), (N, 2), (C, 8)]) },
    IbanFormat { country: CROATIA, length: 21, bban: Bban::Pattern(&[(N, 7), (N, 10)]) },
    IbanFormat { country: CYPRUS, length: 28, bban: Bban::Pattern(&[(N, 3), (N, 5), (C, 16)]) },
    IbanFormat { country: FRANCE, length: 27, bban: Bban::France },
    IbanFormat { country: GERMANY, length: 22, bban: Bban::Pattern(&[(N, 8), (N, 10)]) },
    IbanFormat { country: GREECE, length: 27, bban: Bban::Pattern(&[(N, 3), (N, 4), (C, 16)]) },
    IbanFormat { country: ICELAND, length: 26, bban: Bban::Pattern(&[(N, 4), (N, 2), (N, 6), (N, 10)]) },
    IbanFormat { country: IRELAND, length: 22, bban: Bban::Pattern(&[(A, 4), (N, 6), (N, 8)]) },
    IbanFormat { country: ITALY, length: 27, bban: Bban::Italy },
    IbanFormat { country: LATVIA, length: 21, bban: Bban::Pattern(&[(A, 4), (C, 13)]) },
    IbanFormat { country: LIECHTENSTEIN, length: 21, bban: Bban::Pattern(&[(N, 5), (C, 12)]) },
    IbanFormat { country: LITHUANIA, length: 20, bban: Bban::Pattern(&[(N, 5), (N, 11)]) },
    IbanFormat { country: LUXEMBOURG, length: 20, bban: Bban::Pattern(&[(N, 3), (C, 13)]) },
    IbanFormat { country: MALTA, length: 31, bban: Bban::Pattern(&[(A, 4), (N, 5), (C, 18)]) },
    IbanFormat { country: MOLDOVA, length: 24, bban: Bban::Pattern(&[(C, 2), (C, 18)]) },
    IbanFormat { country: MONACO, length: 27, bban: Bban::France },
    IbanFormat { country: NETHERLANDS, length: 18, bban: Bban::Netherlands },
    IbanFormat { country: NORWAY, length: 15, bban: Bban::Norway },
    IbanFormat { country: POLAND, length: 28, bban: Bban::Poland },
    IbanFormat { country: ROMANIA, length: 24, bban: Bban::Pattern(&[(A, 4), (C, 16)]) },
    IbanFormat { country: RUSSIA, length: 33, bban: Bban::Pattern(&[(N, 9), (N, 5), (C, 15)]) },
    IbanFormat { country: SAN_MARINO, length: 27, bban: Bban::Italy },
    IbanFormat { country: SPAIN, length: 24, bban: Bban::Spain },
    IbanFormat { country: SWITZERLAND, length: 21, bban: Bban::Pattern(&[(N, 5), (C, 12)]) },
    IbanFormat { country: VATICAN_CITY, length: 22, bban: Bban::Pattern(&[(N, 3), (N, 15)]) },
];

const NETHERLANDS_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const NORWAY_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];
const POLAND_WEIGHTS: [u32; 7] = [3, 9, 7, 1, 3, 9, 7];
const SPAIN_WEIGHTS: [u32; 10] = [1, 2, 4, 8, 5, 10, 9, 7, 3, 6];

// Italian CIN scores for odd positions, indexed by digit value or letter index.
const CIN_ODD_VALUES: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

pub fn iban_supported_countries() -> impl Iterator<Item = &'static Country> {
    IBAN_FORMATS.iter().map(|format| &format.country)
}

pub fn iban_length(country_code: &str) -> Option<usize> {
    find_format(country_code).map(|format| format.length)
}

/// Generates a random IBAN with valid national and ISO 7064 check digits.
pub fn generate_iban<R: Rng + ?Sized>(
    rng: &mut R,
    country_code: &str,
) -> Result<String, GenerationError> {
    let format = find_format(country_code)
        .ok_or_else(|| GenerationError::UnsupportedIbanCountry(country_code.to_string()))?;
    let code = format.country.iso_code;

    let bban = match format.bban {
        Bban::Pattern(pattern) => fill_pattern(rng, pattern),
        Bban::Belgium => belgian_bban(rng)?,
        Bban::Netherlands => dutch_bban(rng)?,
        Bban::France => french_bban(rng)?,
        Bban::Italy => italian_bban(rng),
        Bban::Norway => norwegian_bban(rng)?,
        Bban::Poland => polish_bban(rng)?,
        Bban::Spain => spanish_bban(rng),
    };

    let check = iban_check_digits(code, &bban)?;
    let iban = format!("{}{}{}", code, check, bban);
    debug_assert_eq!(iban.len(), format.length, "IBAN length for {}", code);
    Ok(iban)
}

fn find_format(country_code: &str) -> Option<&'static IbanFormat> {
    IBAN_FORMATS
        .iter()
        .find(|format| format.country.iso_code == country_code)
}

fn fill_pattern<R: Rng + ?Sized>(rng: &mut R, pattern: BbanPattern) -> String {
    let mut bban = String::new();
    for (class, len) in pattern {
        bban.push_str(&random_string_of_chars(rng, class.charset(), *len));
    }
    bban
}

fn belgian_bban<R: Rng + ?Sized>(rng: &mut R) -> Result<String, GenerationError> {
    let account = random_digits(rng, 10);
    let check = match mod_97(&account)? {
        0 => 97,
        remainder => remainder,
    };
    Ok(format!("{}{:02}", account, check))
}

fn dutch_bban<R: Rng + ?Sized>(rng: &mut R) -> Result<String, GenerationError> {
    let bank = random_string_of_chars(rng, ALL_LETTERS, 4);
    let account = regenerate_until(rng, "Dutch account number", |rng| {
        let digits = random_digits(rng, 9);
        let check = (11 - weighted_digit_sum(&digits, &NETHERLANDS_WEIGHTS) % 11) % 11;
        Ok(single_digit(check).map(|check| format!("{}{}", digits, check)))
    })?;
    Ok(format!("{}{}", bank, account))
}

fn french_bban<R: Rng + ?Sized>(rng: &mut R) -> Result<String, GenerationError> {
    let bank = random_digits(rng, 5);
    let branch = random_digits(rng, 5);
    let account = random_string_of_chars(rng, ALL_LETTERS_AND_ALL_DIGITS, 11);
    let key = rib_key(&bank, &branch, &account)?;
    Ok(format!("{}{}{}{:02}", bank, branch, account, key))
}

/// French "clé RIB": letters of the account number are mapped to digits,
/// then `97 - (bank branch account 00) mod 97`.
fn rib_key(bank: &str, branch: &str, account: &str) -> Result<u32, GenerationError> {
    let account_digits: String = account.bytes().map(rib_digit).collect();
    let numeric = format!("{}{}{}00", bank, branch, account_digits);
    Ok(97 - mod_97(&numeric)?)
}

fn rib_digit(ch: u8) -> char {
    match ch {
        b'A' | b'J' => '1',
        b'B' | b'K' | b'S' => '2',
        b'C' | b'L' | b'T' => '3',
        b'D' | b'M' | b'U' => '4',
        b'E' | b'N' | b'V' => '5',
        b'F' | b'O' | b'W' => '6',
        b'G' | b'P' | b'X' => '7',
        b'H' | b'Q' | b'Y' => '8',
        b'I' | b'R' | b'Z' => '9',
        other => char::from(other),
    }
}

fn italian_bban<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bank = random_digits(rng, 5);
    let branch = random_digits(rng, 5);
    let account = random_string_of_chars(rng, ALL_LETTERS_AND_ALL_DIGITS, 12);
    let payload = format!("{}{}{}", bank, branch, account);
    format!("{}{}", italian_cin(&payload), payload)
}

fn italian_cin(payload: &str) -> char {
    let sum: u32 = payload
        .bytes()
        .enumerate()
        .map(|(idx, ch)| {
            let value = if ch.is_ascii_digit() { ch - b'0' } else { ch - b'A' };
            // positions are counted from 1, so even indices are odd positions
            if idx % 2 == 0 {
                CIN_ODD_VALUES[usize::from(value)]
            } else {
                u32::from(value)
            }
        })
        .sum();
    char::from(b'A' + (sum % 26) as u8)
}

fn norwegian_bban<R: Rng + ?Sized>(rng: &mut R) -> Result<String, GenerationError> {
    regenerate_until(rng, "Norwegian BBAN", |rng| {
        let mut account = String::with_capacity(11);
        account.push(random_char(rng, ALL_DIGITS_EXCEPT_0));
        account.push_str(&random_digits(rng, 9));
        let check = match 11 - weighted_digit_sum(&account, &NORWAY_WEIGHTS) % 11 {
            11 => 0,
            value => value,
        };
        Ok(single_digit(check).map(|check| {
            account.push(check);
            account
        }))
    })
}

fn polish_bban<R: Rng + ?Sized>(rng: &mut R) -> Result<String, GenerationError> {
    let bank = regenerate_until(rng, "Polish bank/branch code", |rng| {
        let code = random_digits(rng, 7);
        let check = 10 - weighted_digit_sum(&code, &POLAND_WEIGHTS) % 10;
        Ok(single_digit(check).map(|check| format!("{}{}", code, check)))
    })?;
    let account = random_digits(rng, 16);
    Ok(format!("{}{}", bank, account))
}

fn spanish_bban<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bank = random_digits(rng, 4);
    let branch = random_digits(rng, 4);
    let account = random_digits(rng, 10);
    let dc1 = spanish_check_digit(&format!("{}{}", bank, branch), &SPAIN_WEIGHTS[2..]);
    let dc2 = spanish_check_digit(&account, &SPAIN_WEIGHTS);
    format!("{}{}{}{}{}", bank, branch, dc1, dc2, account)
}

fn spanish_check_digit(digits: &str, weights: &[u32]) -> u32 {
    match 11 - weighted_digit_sum(digits, weights) % 11 {
        11 => 0,
        10 => 1,
        value => value,
    }
}

/// `digits` is always built from [`ALL_DIGITS`] by the callers above.
fn weighted_digit_sum(digits: &str, weights: &[u32]) -> u32 {
    digits
        .bytes()
        .zip(weights)
        .map(|(digit, weight)| u32::from(digit - b'0') * weight)
        .sum()
}

fn single_digit(value: u32) -> Option<char> {
    char::from_digit(value, 10)
}
