use testgen::checksum::*;
use testgen::ChecksumError;

// ---------------------------------------------------------------------------
// ISO/IEC 7064, MOD 11-10
// ---------------------------------------------------------------------------

#[test]
fn mod_11_10_reference_values() {
    let cases = [
        ("1556078923", '0'),
        ("7684928013", '1'),
        ("6238070459", '2'),
        ("3346351970", '3'),
        ("1642003907", '4'),
        ("0794", '5'),
        ("2578591503", '6'),
        ("8015968473", '7'),
        ("1605963287", '8'),
        ("7402886358", '9'),
    ];
    for (input, expected) in cases {
        assert_eq!(iso_iec_7064_mod_11_10(input).unwrap(), expected, "{}", input);
    }
}

#[test]
fn mod_11_10_rejects_non_digit() {
    let err = iso_iec_7064_mod_11_10("123a").unwrap_err();
    assert_eq!(err, ChecksumError::NonDigit('a'));
    assert_eq!(err.to_string(), "Input should only contain digits, but contains: a");
}

#[test]
fn mod_11_10_rejects_empty_input() {
    let err = iso_iec_7064_mod_11_10("").unwrap_err();
    assert_eq!(err.to_string(), "Cannot calculate check digit for falsy input");
}

// ---------------------------------------------------------------------------
// St.-Nr. 2er-Verfahren
// ---------------------------------------------------------------------------

#[test]
fn zweier_verfahren_reference_values() {
    let cases = [
        ("212908150815", 8),
        ("261308150815", 3),
        ("286608150815", 6),
        ("286608963815", 0),
    ];
    for (input, expected) in cases {
        assert_eq!(german_st_nr_2er_verfahren(input).unwrap(), expected, "{}", input);
    }
}

#[test]
fn zweier_verfahren_requires_twelve_digits() {
    for input in ["", "1", "12345678901", "1234567890123"] {
        let err = german_st_nr_2er_verfahren(input).unwrap_err();
        assert_eq!(err.to_string(), "Length of partial stNr must be 12", "{:?}", input);
    }
}

#[test]
fn zweier_verfahren_rejects_non_digit() {
    assert_eq!(
        german_st_nr_2er_verfahren("2129081508x5").unwrap_err(),
        ChecksumError::NonDigit('x')
    );
}

// ---------------------------------------------------------------------------
// St.-Nr. 11er-Verfahren
// ---------------------------------------------------------------------------

const BAVARIA: [u32; 12] = [0, 5, 4, 3, 0, 2, 7, 6, 5, 4, 3, 2];
const HANSEATIC: [u32; 12] = [0, 0, 4, 3, 0, 2, 7, 6, 5, 4, 3, 2];
const LOWER_SAXONY: [u32; 12] = [0, 0, 2, 9, 0, 8, 7, 6, 5, 4, 3, 2];
const NRW: [u32; 12] = [0, 3, 2, 1, 0, 7, 6, 5, 4, 3, 2, 1];

#[test]
fn elfer_verfahren_reference_values() {
    let cases: [(&str, &[u32], u32); 11] = [
        ("918108150815", &BAVARIA, 5),
        ("304808150815", &BAVARIA, 5),
        ("247508150815", &HANSEATIC, 2),
        ("220208150815", &HANSEATIC, 6),
        ("232408150815", &LOWER_SAXONY, 1),
        ("407908150815", &BAVARIA, 1),
        ("513308150815", &NRW, 9),
        ("101008150818", &BAVARIA, 2),
        ("310108150815", &BAVARIA, 4),
        ("415108150815", &BAVARIA, 6),
        ("123456789123", &[9, 8, 7, 6, 5, 4, 3, 2, 1, 10, 11, 12], 9),
    ];
    for (input, weights, expected) in cases {
        assert_eq!(
            german_st_nr_11er_verfahren(input, weights).unwrap(),
            expected,
            "{}",
            input
        );
    }
}

#[test]
fn elfer_verfahren_requires_twelve_digits() {
    let weights = [1; 12];
    for input in ["", "1", "12345678901", "1234567890123"] {
        let err = german_st_nr_11er_verfahren(input, &weights).unwrap_err();
        assert_eq!(err.to_string(), "Length of partial stNr and weights must be 12");
    }
}

#[test]
fn elfer_verfahren_requires_twelve_weights() {
    for length in [0, 1, 11, 13] {
        let weights = vec![1; length];
        let err = german_st_nr_11er_verfahren("123456789012", &weights).unwrap_err();
        assert_eq!(err, ChecksumError::PartialStNrOrWeightsLength, "{}", length);
    }
}

// ---------------------------------------------------------------------------
// St.-Nr. 11er-Verfahren Berlin
// ---------------------------------------------------------------------------

const BERLIN_A_CASES: &[(&str, u32)] = &[
    ("111300019123", 6), ("111302009123", 8), ("111306949123", 5), ("111308319123", 9),
    ("111400019123", 6), ("111402009123", 8), ("111406949123", 5), ("111408319123", 9),
    ("111600309123", 4), ("111601249123", 5), ("111602009123", 8), ("111606949123", 5),
    ("111607679123", 1), ("111608749123", 3), ("111609009123", 3), ("111609349123", 9),
    ("111700019123", 6), ("111702009123", 8), ("111706949123", 5), ("111708319123", 9),
    ("111900019123", 6), ("111901269123", 6), ("111902009123", 8), ("111906409124", 9),
    ("111906799123", 3), ("111906819123", 4), ("111906839123", 5), ("111906859123", 6),
    ("111908179123", 2), ("112000019123", 6), ("112002009123", 8), ("112006949123", 5),
    ("112008319123", 9), ("112100019123", 6), ("112102009123", 8), ("112106949123", 5),
    ("112108319123", 9), ("112300019123", 6), ("112302009123", 8), ("112306949123", 5),
    ("112308319123", 9), ("112400019123", 6), ("112402009123", 8), ("112406949123", 5),
    ("112408319123", 9), ("112500019123", 6), ("112502009123", 8), ("112506949123", 5),
    ("112508319123", 9), ("112706789123", 8), ("112906789123", 8), ("113006789123", 8),
];

const BERLIN_B_CASES: &[(&str, u32)] = &[
    ("111200939123", 3), ("111507199123", 6), ("111804919123", 6), ("111302019123", 9),
    ("111305139124", 8), ("111306939123", 1), ("111402019125", 7), ("111405139127", 4),
    ("111406939123", 3), ("111600109123", 8), ("111600299123", 2), ("111602019123", 4),
    ("111604329123", 5), ("111606939123", 7), ("111608759123", 4), ("111608999723", 8),
    ("111702019123", 6), ("111705139124", 5), ("111706939123", 9), ("111902014061", 9),
    ("111905179123", 9), ("111906399123", 8), ("111906809123", 5), ("111906849123", 3),
    ("112002019123", 1), ("112005139121", 6), ("112006939123", 4), ("112102019123", 3),
    ("112105139124", 2), ("112106939123", 6), ("112302019123", 7), ("112305139124", 6),
    ("112306939129", 9), ("112402019123", 9), ("112405139124", 8), ("112406939123", 1),
    ("112502017423", 9), ("112505139324", 2), ("112506939123", 3), ("113102719123", 7),
    ("113209169123", 9), ("113302189124", 9), ("113402949123", 3), ("113501739173", 7),
    ("113601789123", 5), ("113701739123", 4), ("113801649123", 7), ("119401739123", 8),
    ("119501739853", 6), ("119601739123", 1), ("119709379123", 9), ("119807539123", 4),
];

const MODIFIED_RP_CASES: &[(&str, u32)] = &[
    ("272208150815", 4), ("279908150815", 2), ("279906150816", 3),
];

#[test]
fn berlin_districts_with_weights_a() {
    for (input, expected) in BERLIN_A_CASES {
        assert_eq!(
            german_st_nr_11er_verfahren_berlin(input).unwrap(),
            *expected,
            "{}",
            input
        );
    }
}

#[test]
fn berlin_districts_with_weights_b() {
    for (input, expected) in BERLIN_B_CASES {
        assert_eq!(
            german_st_nr_11er_verfahren_berlin(input).unwrap(),
            *expected,
            "{}",
            input
        );
    }
}

#[test]
fn berlin_requires_twelve_digits() {
    for input in ["", "1", "12345678901", "1234567890123"] {
        assert_eq!(
            german_st_nr_11er_verfahren_berlin(input).unwrap_err(),
            ChecksumError::PartialStNrLength
        );
    }
}

// ---------------------------------------------------------------------------
// St.-Nr. modified 11er-Verfahren Rhineland-Palatinate
// ---------------------------------------------------------------------------

#[test]
fn modified_rp_reference_values() {
    for (input, expected) in MODIFIED_RP_CASES {
        assert_eq!(
            german_st_nr_11er_verfahren_modified_rp(input).unwrap(),
            *expected,
            "{}",
            input
        );
    }
}

#[test]
fn modified_rp_requires_twelve_digits() {
    for input in ["", "1", "12345678901", "1234567890123"] {
        let err = german_st_nr_11er_verfahren_modified_rp(input).unwrap_err();
        assert_eq!(err.to_string(), "Length of partial stNr must be 12");
    }
}

// ---------------------------------------------------------------------------
// IBAN, ISO 7064 MOD 97-10
// ---------------------------------------------------------------------------

#[test]
fn iban_check_digits_of_published_ibans() {
    assert_eq!(iban_check_digits("DE", "370400440532013000").unwrap(), "89");
    assert_eq!(iban_check_digits("GB", "NWBK60161331926819").unwrap(), "29");
    assert_eq!(iban_check_digits("BE", "539007547034").unwrap(), "68");
    assert_eq!(iban_check_digits("NO", "86011117947").unwrap(), "93");
}

#[test]
fn iban_check_digits_are_zero_padded() {
    assert_eq!(iban_check_digits("DE", "000000000000000001").unwrap(), "09");
    for bban in ["000000000000000000", "999999999999999999", "100000000000000001"] {
        let check = iban_check_digits("DE", bban).unwrap();
        assert_eq!(check.len(), 2, "{}", bban);
        assert!(iban_checksum_is_valid(&format!("DE{}{}", check, bban)));
    }
}

#[test]
fn iban_check_digits_reject_invalid_characters() {
    let err = iban_check_digits("DE", "37040044-0532013000").unwrap_err();
    assert_eq!(err.to_string(), "IBAN input contains invalid character: -");
}

#[test]
fn iban_checksum_validation() {
    assert!(iban_checksum_is_valid("DE89370400440532013000"));
    assert!(iban_checksum_is_valid("FR1420041010050500013M02606"));
    assert!(iban_checksum_is_valid("IT60X0542811101000000123456"));
    assert!(!iban_checksum_is_valid("DE88370400440532013000"));
    assert!(!iban_checksum_is_valid("DE8"));
    assert!(!iban_checksum_is_valid("DE89 3704 0044 0532 0130 00"));
}
