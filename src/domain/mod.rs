// Domain layer: location records, search criteria and the pure services
// working on them. No UI or transport code lives here.
pub mod models;
pub mod services;
