use std::fmt;

use cs_core::errors::{CsError, ErrorInfo};
use tracing::debug;

use crate::arc::Arc;

/// Ordered, name-indexed family of arcs sharing one circumference.
///
/// Arcs keep their insertion order. The society is the only way to mutate an
/// arc, so names stay unique and every arc carries the society's modulus.
/// Orderings derived from the arcs (names, left or right endpoints) are
/// recomputed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularSociety {
    name: String,
    modulus: f64,
    arcs: Vec<Arc>,
}

impl CircularSociety {
    /// Creates an empty society on the circle `[0, modulus)`.
    pub fn new(name: impl Into<String>, modulus: f64) -> Result<Self, CsError> {
        let name = name.into();
        if !(modulus.is_finite() && modulus > 0.0) {
            return Err(CsError::InvalidInput(
                ErrorInfo::new("invalid-modulus", "modulus must be a positive finite number")
                    .with_context("society", name)
                    .with_context("modulus", modulus.to_string()),
            ));
        }
        Ok(Self {
            name,
            modulus,
            arcs: Vec::new(),
        })
    }

    /// Returns the society's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the circumference of the circle.
    pub fn modulus(&self) -> f64 {
        self.modulus
    }

    /// Returns the number of voters (arcs).
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Returns whether the society has no arcs.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Returns the arcs in insertion order.
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Returns the arc stored at `index`.
    pub fn arc(&self, index: usize) -> Option<&Arc> {
        self.arcs.get(index)
    }

    /// Returns the arc names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.arcs.iter().map(Arc::name).collect()
    }

    /// Returns the left endpoints in insertion order.
    pub fn left_endpoints(&self) -> Vec<f64> {
        self.arcs.iter().map(Arc::left).collect()
    }

    /// Returns the right endpoints in insertion order.
    pub fn right_endpoints(&self) -> Vec<f64> {
        self.arcs.iter().map(Arc::right).collect()
    }

    /// Returns the position of the named arc.
    pub fn find_arc(&self, name: &str) -> Option<usize> {
        self.arcs.iter().position(|arc| arc.name() == name)
    }

    /// Returns the named arc.
    pub fn lookup_arc(&self, name: &str) -> Option<&Arc> {
        self.arcs.iter().find(|arc| arc.name() == name)
    }

    /// Returns the named arc or a [`CsError::NameNotFound`].
    pub fn require_arc(&self, name: &str) -> Result<&Arc, CsError> {
        self.lookup_arc(name)
            .ok_or_else(|| CsError::name_not_found(name))
    }

    /// Appends a new arc. Fails without touching the society if the name is taken.
    pub fn add_arc(&mut self, name: impl Into<String>, left: f64, right: f64) -> Result<(), CsError> {
        let name = name.into();
        if self.find_arc(&name).is_some() {
            return Err(CsError::duplicate_name(&name));
        }
        check_endpoints(&name, left, right)?;
        debug!(society = %self.name, arc = %name, left, right, "adding arc");
        self.arcs.push(Arc::new(name, left, right, self.modulus));
        Ok(())
    }

    /// Removes the named arc, returning it. Absent names are a no-op.
    pub fn remove_arc(&mut self, name: &str) -> Option<Arc> {
        let index = self.find_arc(name)?;
        debug!(society = %self.name, arc = %name, "removing arc");
        Some(self.arcs.remove(index))
    }

    /// Moves the endpoints of the named arc, keeping its name and modulus.
    pub fn edit_arc(&mut self, name: &str, new_left: f64, new_right: f64) -> Result<(), CsError> {
        let index = self
            .find_arc(name)
            .ok_or_else(|| CsError::name_not_found(name))?;
        check_endpoints(name, new_left, new_right)?;
        self.arcs[index].set_endpoints(new_left, new_right);
        Ok(())
    }

    /// Renames an arc in place. The new name must not be in use by another arc.
    pub fn rename_arc(&mut self, name: &str, new_name: impl Into<String>) -> Result<(), CsError> {
        let new_name = new_name.into();
        let index = self
            .find_arc(name)
            .ok_or_else(|| CsError::name_not_found(name))?;
        if new_name != name && self.find_arc(&new_name).is_some() {
            return Err(CsError::duplicate_name(&new_name));
        }
        self.arcs[index].set_name(new_name);
        Ok(())
    }
}

fn check_endpoints(name: &str, left: f64, right: f64) -> Result<(), CsError> {
    if left.is_finite() && right.is_finite() {
        return Ok(());
    }
    Err(CsError::InvalidInput(
        ErrorInfo::new("non-finite-endpoint", "arc endpoints must be finite numbers")
            .with_context("name", name)
            .with_context("left", left.to_string())
            .with_context("right", right.to_string()),
    ))
}

impl fmt::Display for CircularSociety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Circular Society Name: {}", self.name)?;
        writeln!(
            f,
            "Spectrum: [0, {}].  (Note: we identify 0 = {})",
            self.modulus, self.modulus
        )?;
        writeln!(f, "Number of Voters: {}", self.arcs.len())?;
        write!(f, "Approval Sets:")?;
        for arc in &self.arcs {
            write!(f, "\n {arc}")?;
        }
        Ok(())
    }
}
