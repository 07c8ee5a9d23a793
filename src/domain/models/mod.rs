// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod display;
pub mod lenient;
pub mod location;
pub mod search;

pub use display::{DetailRow, DisplayRecord};
pub use location::{
    AirportInfo, Coordinate, Coordinates, CountryInfo, HierarchyInfo, LocationKind, LocationRecord, RegionNames,
};
pub use search::{FilterCriteria, FilteredView, ResultSet, SearchOutcome, SearchQuery, SortOption, TypeFilter};
