pub mod finder;

pub use finder::App;
