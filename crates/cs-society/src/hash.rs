use sha2::{Digest, Sha256};

use crate::arc::Arc;
use crate::society::CircularSociety;

/// Computes the canonical structural hash of a family of arcs.
///
/// The digest covers the modulus and every arc (name and endpoints) taken in
/// name order, so two societies holding the same arcs hash identically no
/// matter their insertion order or society name.
pub fn canonical_hash(society: &CircularSociety) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"circular-society:v1");
    update_f64(society.modulus(), &mut hasher);

    let mut arcs: Vec<&Arc> = society.arcs().iter().collect();
    arcs.sort_by(|a, b| a.name().cmp(b.name()));
    hasher.update((arcs.len() as u64).to_le_bytes());
    for arc in arcs {
        let name = arc.name().as_bytes();
        hasher.update((name.len() as u64).to_le_bytes());
        hasher.update(name);
        update_f64(arc.left(), &mut hasher);
        update_f64(arc.right(), &mut hasher);
    }

    hex::encode(hasher.finalize())
}

fn update_f64(value: f64, hasher: &mut Sha256) {
    // -0.0 and 0.0 describe the same point on the circle
    let value = if value == 0.0 { 0.0 } else { value };
    hasher.update(value.to_bits().to_le_bytes());
}
