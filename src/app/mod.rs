pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the location finder App
pub use pages::finder::App;
