use cs_core::errors::{CsError, ErrorInfo};
use cs_core::provenance::{SchemaVersion, SOCIETY_SCHEMA_VERSION};
use serde::{Deserialize, Serialize};

use crate::society::CircularSociety;

/// Serializes the society to a compact binary representation using `bincode`.
pub fn society_to_bytes(society: &CircularSociety) -> Result<Vec<u8>, CsError> {
    let serializable = SerializableSociety::from_society(society);
    bincode::serialize(&serializable)
        .map_err(|err| CsError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a society from its binary representation.
pub fn society_from_bytes(bytes: &[u8]) -> Result<CircularSociety, CsError> {
    let serializable: SerializableSociety = bincode::deserialize(bytes)
        .map_err(|err| CsError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_society()
}

/// Serializes the society to a JSON string.
pub fn society_to_json(society: &CircularSociety) -> Result<String, CsError> {
    let serializable = SerializableSociety::from_society(society);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| CsError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a society from a JSON string, re-validating names and modulus.
pub fn society_from_json(json: &str) -> Result<CircularSociety, CsError> {
    let serializable: SerializableSociety = serde_json::from_str(json)
        .map_err(|err| CsError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_society()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableSociety {
    #[serde(default)]
    schema_version: SchemaVersion,
    name: String,
    modulus: f64,
    arcs: Vec<SerializableArc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableArc {
    name: String,
    left: f64,
    right: f64,
}

impl SerializableSociety {
    fn from_society(society: &CircularSociety) -> Self {
        Self {
            schema_version: SOCIETY_SCHEMA_VERSION,
            name: society.name().to_string(),
            modulus: society.modulus(),
            arcs: society
                .arcs()
                .iter()
                .map(|arc| SerializableArc {
                    name: arc.name().to_string(),
                    left: arc.left(),
                    right: arc.right(),
                })
                .collect(),
        }
    }

    fn into_society(self) -> Result<CircularSociety, CsError> {
        if !SOCIETY_SCHEMA_VERSION.is_compatible_with(&self.schema_version) {
            return Err(CsError::Serde(
                ErrorInfo::new("schema-version", "unsupported society schema version")
                    .with_context(
                        "found",
                        format!(
                            "{}.{}.{}",
                            self.schema_version.major,
                            self.schema_version.minor,
                            self.schema_version.patch
                        ),
                    ),
            ));
        }
        let mut society = CircularSociety::new(self.name, self.modulus)?;
        for arc in self.arcs {
            society.add_arc(arc.name, arc.left, arc.right)?;
        }
        Ok(society)
    }
}
