use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

const fn country(code: &'static str, name: &'static str) -> Country {
    Country { code, name }
}

/// Countries covered by the lookup service, sorted by code.
pub const SUPPORTED_COUNTRIES: &[Country] = &[
    country("AD", "Andorra"),
    country("AR", "Argentina"),
    country("AS", "American Samoa"),
    country("AT", "Austria"),
    country("AU", "Australia"),
    country("BD", "Bangladesh"),
    country("BE", "Belgium"),
    country("BG", "Bulgaria"),
    country("BR", "Brazil"),
    country("CA", "Canada"),
    country("CH", "Switzerland"),
    country("CZ", "Czech Republic"),
    country("DE", "Germany"),
    country("DK", "Denmark"),
    country("DO", "Dominican Republic"),
    country("ES", "Spain"),
    country("FI", "Finland"),
    country("FO", "Faroe Islands"),
    country("FR", "France"),
    country("GB", "Great Britain"),
    country("GF", "French Guyana"),
    country("GG", "Guernsey"),
    country("GL", "Greenland"),
    country("GP", "Guadeloupe"),
    country("GT", "Guatemala"),
    country("GU", "Guam"),
    country("GY", "Guyana"),
    country("HR", "Croatia"),
    country("HU", "Hungary"),
    country("IM", "Isle of Man"),
    country("IN", "India"),
    country("IS", "Iceland"),
    country("IT", "Italy"),
    country("JE", "Jersey"),
    country("JP", "Japan"),
    country("LI", "Liechtenstein"),
    country("LK", "Sri Lanka"),
    country("LT", "Lithuania"),
    country("LU", "Luxembourg"),
    country("MC", "Monaco"),
    country("MD", "Moldavia"),
    country("MH", "Marshall Islands"),
    country("MK", "Macedonia"),
    country("MP", "Northern Mariana Islands"),
    country("MQ", "Martinique"),
    country("MX", "Mexico"),
    country("MY", "Malaysia"),
    country("NL", "Holland"),
    country("NO", "Norway"),
    country("NZ", "New Zealand"),
    country("PH", "Phillippines"),
    country("PK", "Pakistan"),
    country("PL", "Poland"),
    country("PM", "Saint Pierre and Miquelon"),
    country("PR", "Puerto Rico"),
    country("PT", "Portugal"),
    country("RE", "French Reunion"),
    country("RU", "Russia"),
    country("SE", "Sweden"),
    country("SI", "Slovenia"),
    country("SJ", "Svalbard & Jan Mayen Islands"),
    country("SK", "Slovak Republic"),
    country("SM", "San Marino"),
    country("TH", "Thailand"),
    country("TR", "Turkey"),
    country("US", "United States"),
    country("VA", "Vatican"),
    country("VI", "Virgin Islands"),
    country("YT", "Mayotte"),
    country("ZA", "South Africa"),
];

pub fn find_country(code: &str) -> Option<&'static Country> {
    let code = code.trim();
    SUPPORTED_COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}
