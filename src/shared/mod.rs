pub mod errors;
pub mod logging;
pub mod state;
pub mod text;
pub mod view_state;

// Dioxus hooks (client and server render)
pub mod hooks;
