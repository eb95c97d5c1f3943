//! PotWatch API — library crate for the pot and sensor reading REST server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `pw-e2e-tests`) can access internal types like `AppState`,
//! `build_router`, and `PotStore`.

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
