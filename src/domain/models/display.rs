/// A location with every display field resolved to a concrete string.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub primary_name: String,
    /// Empty when neither a secondary name nor a country is known.
    pub secondary_name: String,
    /// Empty when neither a display name nor a full name is known.
    pub full_name: String,
    /// Raw type code, `UNKNOWN` when absent.
    pub type_code: String,
    pub type_label: String,
    pub details: Vec<DetailRow>,
}

impl DisplayRecord {
    /// Modifier for the type badge, e.g. `airport`.
    pub fn type_class(&self) -> String {
        self.type_code.to_lowercase()
    }
}

/// One optional line in a location card.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailRow {
    FullName(String),
    Country { name: String, code: Option<String> },
    AirportCode(String),
    /// Coordinates as the API wrote them.
    Coordinates { lat: String, long: String },
    LocationId(String),
}

impl DetailRow {
    pub fn label(&self) -> &'static str {
        match self {
            DetailRow::FullName(_) => "Full Name",
            DetailRow::Country { .. } => "Country",
            DetailRow::AirportCode(_) => "Airport Code",
            DetailRow::Coordinates { .. } => "Coordinates",
            DetailRow::LocationId(_) => "Location ID",
        }
    }

    pub fn value(&self) -> String {
        match self {
            DetailRow::FullName(name) => name.clone(),
            DetailRow::Country { name, code: Some(code) } => format!("{name} ({code})"),
            DetailRow::Country { name, code: None } => name.clone(),
            DetailRow::AirportCode(code) => code.clone(),
            DetailRow::Coordinates { lat, long } => format!("{lat}, {long}"),
            DetailRow::LocationId(id) => id.clone(),
        }
    }

    pub fn is_coordinates(&self) -> bool {
        matches!(self, DetailRow::Coordinates { .. })
    }
}
