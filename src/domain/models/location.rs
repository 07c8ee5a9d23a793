use serde::Deserialize;

use super::lenient;

/// Raw location as returned by the search API.
///
/// Every field is optional. Accessors return `None` for absent and for empty
/// strings alike, so fallback chains can simply use `or_else`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    /// `AIRPORT`, `CITY`, `NEIGHBORHOOD` or any other code the API invents.
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "lenient::object")]
    pub region_names: Option<RegionNames>,

    #[serde(default, deserialize_with = "lenient::object")]
    pub coordinates: Option<Coordinates>,

    #[serde(default, deserialize_with = "lenient::object")]
    pub hierarchy_info: Option<HierarchyInfo>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub gaia_id: Option<String>,

    /// Relevance rank, lower is better.
    #[serde(default, deserialize_with = "lenient::integer")]
    pub index: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionNames {
    #[serde(default, deserialize_with = "lenient::string")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub primary_display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub secondary_display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Coordinates {
    #[serde(default, deserialize_with = "lenient::coordinate")]
    pub lat: Option<Coordinate>,
    #[serde(default, deserialize_with = "lenient::coordinate")]
    pub long: Option<Coordinate>,
}

/// One axis as the API sent it: the parsed value plus the original text,
/// which is what cards display.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub value: f64,
    pub text: String,
}


#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HierarchyInfo {
    #[serde(default, deserialize_with = "lenient::object")]
    pub country: Option<CountryInfo>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub airport: Option<AirportInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub iso_code2: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub airport_code: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl RegionNames {
    pub fn display_name(&self) -> Option<&str> {
        present(&self.display_name)
    }

    pub fn full_name(&self) -> Option<&str> {
        present(&self.full_name)
    }

    pub fn primary_display_name(&self) -> Option<&str> {
        present(&self.primary_display_name)
    }

    pub fn short_name(&self) -> Option<&str> {
        present(&self.short_name)
    }

    pub fn secondary_display_name(&self) -> Option<&str> {
        present(&self.secondary_display_name)
    }
}

static NO_NAMES: RegionNames = RegionNames {
    display_name: None,
    full_name: None,
    primary_display_name: None,
    short_name: None,
    secondary_display_name: None,
};

impl LocationRecord {
    /// Raw type code, when the API sent a non-empty one.
    pub fn kind(&self) -> Option<&str> {
        present(&self.kind)
    }

    /// Region names, or an all-absent set.
    pub fn names(&self) -> &RegionNames {
        self.region_names.as_ref().unwrap_or(&NO_NAMES)
    }

    fn country(&self) -> Option<&CountryInfo> {
        self.hierarchy_info.as_ref()?.country.as_ref()
    }

    pub fn country_name(&self) -> Option<&str> {
        self.country().and_then(|c| present(&c.name))
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country().and_then(|c| present(&c.iso_code2))
    }

    pub fn airport_code(&self) -> Option<&str> {
        let airport = self.hierarchy_info.as_ref()?.airport.as_ref()?;
        present(&airport.airport_code)
    }

    /// Latitude and longitude, only when both are known.
    pub fn lat_long(&self) -> Option<(f64, f64)> {
        let (lat, long) = self.coordinate_pair()?;
        Some((lat.value, long.value))
    }

    /// Same as [`LocationRecord::lat_long`], but the text the API sent.
    pub fn lat_long_text(&self) -> Option<(&str, &str)> {
        let (lat, long) = self.coordinate_pair()?;
        Some((&lat.text, &long.text))
    }

    fn coordinate_pair(&self) -> Option<(&Coordinate, &Coordinate)> {
        let coordinates = self.coordinates.as_ref()?;
        Some((coordinates.lat.as_ref()?, coordinates.long.as_ref()?))
    }

    pub fn gaia_id(&self) -> Option<&str> {
        present(&self.gaia_id)
    }
}

/// The location types the UI knows how to label and filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Airport,
    City,
    Neighborhood,
}

impl LocationKind {
    pub const ALL: [LocationKind; 3] = [
        LocationKind::Airport,
        LocationKind::City,
        LocationKind::Neighborhood,
    ];

    /// Exact, case-sensitive match on the API code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AIRPORT" => Some(LocationKind::Airport),
            "CITY" => Some(LocationKind::City),
            "NEIGHBORHOOD" => Some(LocationKind::Neighborhood),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            LocationKind::Airport => "AIRPORT",
            LocationKind::City => "CITY",
            LocationKind::Neighborhood => "NEIGHBORHOOD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LocationKind::Airport => "Airport",
            LocationKind::City => "City",
            LocationKind::Neighborhood => "Neighborhood",
        }
    }
}
