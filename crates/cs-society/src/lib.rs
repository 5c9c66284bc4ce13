#![deny(missing_docs)]

//! Arc families on a circle: storage, endpoint sweeps, hashing and generators.

mod arc;
mod generators;
mod hash;
mod serialization;
mod society;
mod sweep;

pub use arc::Arc;
pub use generators::{
    beta_length_society, fixed_length_society, random_society, uniform_society,
};
pub use hash::canonical_hash;
pub use society::CircularSociety;
pub use sweep::{list_endpoints, EndpointEvent, EndpointSweep};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{society_from_bytes, society_from_json, society_to_bytes, society_to_json};
