use crate::errors::UnknownCountyError;

/// A selectable county and its five-digit FIPS code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct County {
    pub name: &'static str,
    pub fips: &'static str,
}

/// Counties of the Nashville metro area, in dropdown order.
pub const METRO_COUNTIES: [County; 14] = [
    County { name: "Cannon",     fips: "47015" },
    County { name: "Cheatham",   fips: "47021" },
    County { name: "Davidson",   fips: "47037" },
    County { name: "Dickson",    fips: "47043" },
    County { name: "Hickman",    fips: "47081" },
    County { name: "Macon",      fips: "47111" },
    County { name: "Maury",      fips: "47119" },
    County { name: "Robertson",  fips: "47147" },
    County { name: "Rutherford", fips: "47149" },
    County { name: "Smith",      fips: "47159" },
    County { name: "Sumner",     fips: "47165" },
    County { name: "Trousdale",  fips: "47169" },
    County { name: "Williamson", fips: "47187" },
    County { name: "Wilson",     fips: "47189" },
];

/// Look up a county by name, ignoring case and surrounding whitespace.
pub fn find_county(name: &str) -> Option<&'static County> {
    let name = name.trim();
    METRO_COUNTIES.iter().find(|county| county.name.eq_ignore_ascii_case(name))
}

/// Like `find_county`, but a miss is an `UnknownCountyError`.
pub fn require_county(name: &str) -> Result<&'static County, UnknownCountyError> {
    find_county(name).ok_or_else(|| UnknownCountyError(name.to_string()))
}

/// Reverse lookup from a five-digit FIPS code.
pub fn county_by_fips(fips: &str) -> Option<&'static County> {
    METRO_COUNTIES.iter().find(|county| county.fips == fips)
}
