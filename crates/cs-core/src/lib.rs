#![deny(missing_docs)]
#![doc = "Core error, seeding and solver contracts for the circular society engine."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod ilp;
pub mod provenance;
pub mod rng;

pub use errors::{CsError, ErrorInfo};
pub use ilp::{round_within_tolerance, IlpEngine, IlpProblem, IlpSolution, INTEGRALITY_TOLERANCE};
pub use provenance::{SchemaVersion, SOCIETY_SCHEMA_VERSION};
pub use rng::RngHandle;

/// Which end of an arc an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Counter-clockwise end where the arc starts.
    Left,
    /// Clockwise end where the arc stops.
    Right,
}

impl Side {
    /// Single letter tag used in endpoint listings (`L` or `R`).
    pub fn tag(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
