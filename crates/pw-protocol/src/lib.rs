//! Record schemas shared by the PotWatch API and its clients.
//!
//! Each record has a create variant (request input, no server-assigned
//! fields) and a read variant (fully populated output).

pub mod pot;
pub mod sensor;

pub use pot::*;
pub use sensor::*;
