// Public API exports (shared between client and server)
pub mod config;
pub mod domain;
pub mod shared;

// App is always available in fullstack mode
pub mod app;

// Transport: gloo-net in the browser, reqwest natively
pub mod infrastructure;

// Server-only modules (NOT compiled for WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod handlers;
