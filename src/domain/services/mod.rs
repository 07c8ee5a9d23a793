// Business logic services
// Framework-agnostic, 100% testable

pub mod filter;
pub mod normalizer;
pub mod search_client;

pub use filter::apply;
pub use normalizer::normalize;
pub use search_client::{DirectClient, ProxyClient, SearchClient};
