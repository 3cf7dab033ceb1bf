use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: &'static str,
    pub iso_code: &'static str,
}

impl Country {
    const fn new(name: &'static str, iso_code: &'static str) -> Self {
        Self { name, iso_code }
    }

    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.iso_code)
    }
}

pub const ANDORRA: Country = Country::new("Andorra", "AD");
pub const AUSTRIA: Country = Country::new("Austria", "AT");
pub const BELGIUM: Country = Country::new("Belgium", "BE");
pub const BULGARIA: Country = Country::new("Bulgaria", "BG");
pub const CROATIA: Country = Country::new("Croatia", "HR");
pub const CYPRUS: Country = Country::new("Cyprus", "CY");
pub const FRANCE: Country = Country::new("France", "FR");
pub const GERMANY: Country = Country::new("Germany", "DE");
pub const GREECE: Country = Country::new("Greece", "GR");
pub const ICELAND: Country = Country::new("Iceland", "IS");
pub const IRELAND: Country = Country::new("Ireland", "IE");
pub const ITALY: Country = Country::new("Italy", "IT");
pub const LATVIA: Country = Country::new("Latvia", "LV");
pub const LIECHTENSTEIN: Country = Country::new("Liechtenstein", "LI");
pub const LITHUANIA: Country = Country::new("Lithuania", "LT");
pub const LUXEMBOURG: Country = Country::new("Luxembourg", "LU");
pub const MALTA: Country = Country::new("Malta", "MT");
pub const MOLDOVA: Country = Country::new("Moldova", "MD");
pub const MONACO: Country = Country::new("Monaco", "MC");
pub const NETHERLANDS: Country = Country::new("Netherlands", "NL");
pub const NORWAY: Country = Country::new("Norway", "NO");
pub const POLAND: Country = Country::new("Poland", "PL");
pub const ROMANIA: Country = Country::new("Romania", "RO");
pub const RUSSIA: Country = Country::new("Russia", "RU");
pub const SAN_MARINO: Country = Country::new("San Marino", "SM");
pub const SPAIN: Country = Country::new("Spain", "ES");
pub const SWITZERLAND: Country = Country::new("Switzerland", "CH");
pub const VATICAN_CITY: Country = Country::new("Vatican City", "VA");

pub const COUNTRIES: &[Country] = &[
    ANDORRA,
    AUSTRIA,
    BELGIUM,
    BULGARIA,
    CROATIA,
    CYPRUS,
    FRANCE,
    GERMANY,
    GREECE,
    ICELAND,
    IRELAND,
    ITALY,
    LATVIA,
    LIECHTENSTEIN,
    LITHUANIA,
    LUXEMBOURG,
    MALTA,
    MOLDOVA,
    MONACO,
    NETHERLANDS,
    NORWAY,
    POLAND,
    ROMANIA,
    RUSSIA,
    SAN_MARINO,
    SPAIN,
    SWITZERLAND,
    VATICAN_CITY,
];

/// Exact, case-sensitive lookup by ISO 3166-1 alpha-2 code.
pub fn find_country(iso_code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.iso_code == iso_code)
}
