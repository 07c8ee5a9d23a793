use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

use super::location::LocationRecord;

/// A trimmed, non-empty location query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trims the input; `None` when nothing is left.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The query percent-encoded for a `?query=` parameter.
    pub fn url_encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// All records returned by one successful search, in API order.
///
/// Cloning shares the snapshot; there is no way to mutate it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet(Arc<[LocationRecord]>);

impl ResultSet {
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self(records.into())
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.0
    }
}

impl Deref for ResultSet {
    type Target = [LocationRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<LocationRecord>> for ResultSet {
    fn from(records: Vec<LocationRecord>) -> Self {
        Self::new(records)
    }
}

/// What a search that reached the API produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(ResultSet),
    /// Well-formed exchange, nothing to show. Not a failure.
    NoResults,
}

/// Type select value: everything, or one exact API type code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    pub fn matches(&self, record: &LocationRecord) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(code) => record.kind.as_deref() == Some(code.as_str()),
        }
    }

    /// Value used by the `<select>` control.
    pub fn as_value(&self) -> &str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(code) => code,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" | "all" => TypeFilter::All,
            code => TypeFilter::Only(code.to_string()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Relevance,
    Name,
    Country,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [SortOption::Relevance, SortOption::Name, SortOption::Country];

    pub fn as_value(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::Name => "name",
            SortOption::Country => "country",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::Name => "Name (A-Z)",
            SortOption::Country => "Country",
        }
    }
}

impl FromStr for SortOption {
    type Err = std::convert::Infallible;

    /// Unknown values sort by relevance.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "name" => SortOption::Name,
            "country" => SortOption::Country,
            _ => SortOption::Relevance,
        })
    }
}

/// Current values of the three filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub type_filter: TypeFilter,
    pub sort_option: SortOption,
    pub search_text: String,
}

impl FilterCriteria {
    /// The free-text filter as it is matched: trimmed and lower-cased.
    pub fn normalized_search_text(&self) -> String {
        self.search_text.trim().to_lowercase()
    }
}

/// Records surviving the current criteria, in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilteredView(Vec<LocationRecord>);

impl FilteredView {
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self(records)
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.0
    }

    pub fn into_records(self) -> Vec<LocationRecord> {
        self.0
    }
}

impl Deref for FilteredView {
    type Target = [LocationRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
