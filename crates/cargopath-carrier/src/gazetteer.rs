//! # Port Gazetteer
//!
//! Static UN/LOCODE-style lookup resolving the port codes that appear in
//! carrier feeds to display names and countries. Codes the gazetteer does
//! not know pass through as-is: the raw code becomes the display name and
//! no country is attached. Resolution never fails.

use cargopath_core::{Location, LocationType};

/// Display name and country for a known port code.
fn port_entry(code: &str) -> Option<(&'static str, &'static str)> {
    let entry = match code {
        // China
        "CNNSG" => ("Nanjing", "China"),
        "CNSHA" => ("Shanghai", "China"),
        "CNZSN" => ("Shenzhen", "China"),
        "CNNGB" => ("Ningbo", "China"),
        "CNDLC" => ("Dalian", "China"),
        "CNTAO" => ("Qingdao", "China"),
        "CNXMN" => ("Xiamen", "China"),
        "CNCAN" => ("Guangzhou", "China"),
        // United States
        "USLAX" => ("Los Angeles", "United States"),
        "USNYC" => ("New York", "United States"),
        "USHOU" => ("Houston", "United States"),
        "USSAV" => ("Savannah", "United States"),
        "USSEA" => ("Seattle", "United States"),
        // Europe
        "NLRTM" => ("Rotterdam", "Netherlands"),
        "DEHAM" => ("Hamburg", "Germany"),
        "GBFXT" => ("Felixstowe", "United Kingdom"),
        "FRLEH" => ("Le Havre", "France"),
        "ESBCN" => ("Barcelona", "Spain"),
        "ITGOA" => ("Genoa", "Italy"),
        // Asia-Pacific
        "JPTYO" => ("Tokyo", "Japan"),
        "JPYOK" => ("Yokohama", "Japan"),
        "SGSIN" => ("Singapore", "Singapore"),
        "KRPUS" => ("Busan", "South Korea"),
        "THBKK" => ("Bangkok", "Thailand"),
        "MYKUL" => ("Port Klang", "Malaysia"),
        // Middle East
        "AEDXB" => ("Dubai", "United Arab Emirates"),
        "SAJED" => ("Jeddah", "Saudi Arabia"),
        // Oceania
        "AUSYD" => ("Sydney", "Australia"),
        "AUMEL" => ("Melbourne", "Australia"),
        // Americas
        "BRGRU" => ("Santos", "Brazil"),
        "CLVAL" => ("Valparaiso", "Chile"),
        "PECAL" => ("Callao", "Peru"),
        "CAVAN" => ("Vancouver", "Canada"),
        "MXVER" => ("Veracruz", "Mexico"),
        // India
        "INNSA" => ("Nhava Sheva", "India"),
        "INMUN" => ("Mundra", "India"),
        // Africa
        "ZACPT" => ("Cape Town", "South Africa"),
        "ZADUR" => ("Durban", "South Africa"),
        _ => return None,
    };
    Some(entry)
}

/// Resolve a feed location code to a display [`Location`].
///
/// Unknown codes are carried through with the code as the name; callers
/// cannot distinguish "not a port we know" from "exotic but real port" and
/// should render what the feed said.
pub fn resolve_location(code: &str) -> Location {
    match port_entry(code) {
        Some((name, country)) => Location {
            id: code.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            location_type: LocationType::Port,
            country: Some(country.to_string()),
            latitude: None,
            longitude: None,
        },
        None => Location {
            id: code.to_string(),
            name: code.to_string(),
            code: code.to_string(),
            location_type: LocationType::Port,
            country: None,
            latitude: None,
            longitude: None,
        },
    }
}
