// Custom Dioxus hooks
pub mod use_search_session;

pub use use_search_session::{SearchHandle, use_search_session};
