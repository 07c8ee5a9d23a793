// External API access
// One GET primitive per platform, shared by the direct and proxy clients.

pub mod http;

pub use http::{HttpResponse, TransportError, get};
