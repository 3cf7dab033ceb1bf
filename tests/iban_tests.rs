use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use testgen::checksum::{iban_check_digits, iban_checksum_is_valid, mod_97};
use testgen::countries::COUNTRIES;
use testgen::iban::{generate_iban, iban_length, iban_supported_countries};
use testgen::GenerationError;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn digit(ch: u8) -> u32 {
    u32::from(ch - b'0')
}

fn weighted(digits: &str, weights: &[u32]) -> u32 {
    digits.bytes().zip(weights).map(|(ch, w)| digit(ch) * w).sum()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|ch| ch.is_ascii_digit())
}

fn is_letters(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|ch| ch.is_ascii_uppercase())
}

fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit())
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn every_registered_country_has_an_iban_format() {
    let supported: Vec<&str> = iban_supported_countries().map(|c| c.iso_code).collect();
    assert_eq!(supported.len(), 28);
    for country in COUNTRIES {
        assert!(supported.contains(&country.iso_code), "{}", country.iso_code);
    }
}

#[test]
fn documented_lengths() {
    assert_eq!(iban_length("DE"), Some(22));
    assert_eq!(iban_length("NO"), Some(15));
    assert_eq!(iban_length("MT"), Some(31));
    assert_eq!(iban_length("RU"), Some(33));
    assert_eq!(iban_length("US"), None);
}

// ---------------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------------

#[test]
fn unsupported_country_codes_are_rejected() {
    for code in ["US", "GB", "XY"] {
        let err = generate_iban(&mut rng(1), code).unwrap_err();
        assert_eq!(err, GenerationError::UnsupportedIbanCountry(code.to_string()));
        assert_eq!(
            err.to_string(),
            format!("IBAN generation for country code '{}' is not supported.", code)
        );
    }
}

#[test]
fn malformed_country_codes_are_rejected() {
    for code in ["", "D", "DEU", "de"] {
        assert!(generate_iban(&mut rng(1), code).is_err(), "{:?}", code);
    }
}

// ---------------------------------------------------------------------------
// Generated IBANs
// ---------------------------------------------------------------------------

#[test]
fn norwegian_iban_scenario() {
    let iban = generate_iban(&mut rng(7), "NO").unwrap();
    assert_eq!(iban.len(), 15);
    assert!(iban.starts_with("NO"));
    assert!(is_digits(&iban[2..]));
    assert_eq!(&iban[2..4], iban_check_digits("NO", &iban[4..]).unwrap());
}

#[test]
fn generated_ibans_differ() {
    let mut rng = rng(42);
    for country in iban_supported_countries() {
        let ibans: HashSet<String> = (0..100)
            .map(|_| generate_iban(&mut rng, country.iso_code).unwrap())
            .collect();
        assert_eq!(ibans.len(), 100, "{}", country.iso_code);
    }
}

#[test]
fn same_seed_same_iban() {
    let first = generate_iban(&mut rng(99), "FR").unwrap();
    let second = generate_iban(&mut rng(99), "FR").unwrap();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn every_country_has_length_prefix_and_valid_check_digits(seed in any::<u64>()) {
        let mut rng = rng(seed);
        for country in iban_supported_countries() {
            let code = country.iso_code;
            let iban = generate_iban(&mut rng, code).unwrap();
            prop_assert_eq!(Some(iban.len()), iban_length(code));
            prop_assert!(iban.starts_with(code));
            prop_assert!(is_digits(&iban[2..4]));
            prop_assert!(is_alphanumeric(&iban[4..]));
            prop_assert_eq!(&iban[2..4], iban_check_digits(code, &iban[4..]).unwrap());
            prop_assert!(iban_checksum_is_valid(&iban), "{}", iban);
        }
    }

    #[test]
    fn german_bban_is_numeric(seed in any::<u64>()) {
        let iban = generate_iban(&mut rng(seed), "DE").unwrap();
        prop_assert!(is_digits(&iban[4..]));
    }

    #[test]
    fn belgian_account_check(seed in any::<u64>()) {
        let iban = generate_iban(&mut rng(seed), "BE").unwrap();
        let bban = &iban[4..];
        prop_assert!(is_digits(bban));
        let expected = match mod_97(&bban[..10]).unwrap() {
            0 => 97,
            remainder => remainder,
        };
        prop_assert_eq!(bban[10..].parse::<u32>().unwrap(), expected);
    }

    #[test]
    fn dutch_account_passes_eleven_test(seed in any::<u64>()) {
        let iban = generate_iban(&mut rng(seed), "NL").unwrap();
        prop_assert!(is_letters(&iban[4..8]));
        let account = &iban[8..];
        prop_assert!(is_digits(account));
        prop_assert_eq!(weighted(account, &[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]) % 11, 0);
    }

    #[test]
    fn norwegian_account_passes_mod_11(seed in any::<u64>()) {
        let iban = generate_iban(&mut rng(seed), "NO").unwrap();
        let bban = &iban[4..];
        prop_assert!(is_digits(bban));
        prop_assert_ne!(&bban[..1], "0");
        let sum = weighted(&bban[..10], &[5, 4, 3, 2, 7, 6, 5, 4, 3, 2]) + digit(bban.as_bytes()[10]);
        prop_assert_eq!(sum % 11, 0);
    }

    #[test]
    fn polish_bank_code_check(seed in any::<u64>()) {
        let iban = generate_iban(&mut rng(seed), "PL").unwrap();
        let bban = &iban[4..];
        prop_assert!(is_digits(bban));
        let sum = weighted(&bban[..7], &[3, 9, 7, 1, 3, 9, 7]);
        prop_assert_eq!((sum + digit(bban.as_bytes()[7])) % 10, 0);
    }

    #[test]
    fn spanish_control_digits(seed in any::<u64>()) {
        let iban = generate_iban(&mut rng(seed), "ES").unwrap();
        let bban = &iban[4..];
        prop_assert!(is_digits(bban));
        let control = |digits: &str, weights: &[u32]| match 11 - weighted(digits, weights) % 11 {
            11 => 0,
            10 => 1,
            value => value,
        };
        let weights = [1, 2, 4, 8, 5, 10, 9, 7, 3, 6];
        prop_assert_eq!(digit(bban.as_bytes()[8]), control(&bban[..8], &weights[2..]));
        prop_assert_eq!(digit(bban.as_bytes()[9]), control(&bban[10..], &weights));
    }

    #[test]
    fn french_and_monegasque_structure(seed in any::<u64>()) {
        let mut rng = rng(seed);
        for code in ["FR", "MC"] {
            let iban = generate_iban(&mut rng, code).unwrap();
            let bban = &iban[4..];
            prop_assert!(is_digits(&bban[..10]));
            prop_assert!(is_alphanumeric(&bban[10..21]));
            prop_assert!(is_digits(&bban[21..]));
            let key: u32 = bban[21..].parse().unwrap();
            prop_assert!((1..=97).contains(&key));
        }
    }

    #[test]
    fn italian_and_sammarinese_structure(seed in any::<u64>()) {
        let mut rng = rng(seed);
        for code in ["IT", "SM"] {
            let iban = generate_iban(&mut rng, code).unwrap();
            let bban = &iban[4..];
            prop_assert!(is_letters(&bban[..1]));
            prop_assert!(is_digits(&bban[1..11]));
            prop_assert!(is_alphanumeric(&bban[11..]));
        }
    }

    #[test]
    fn letter_prefixed_bbans(seed in any::<u64>()) {
        let mut rng = rng(seed);
        for code in ["BG", "IE", "LV", "MT", "RO"] {
            let iban = generate_iban(&mut rng, code).unwrap();
            prop_assert!(is_letters(&iban[4..8]), "{}", iban);
        }
    }
}
