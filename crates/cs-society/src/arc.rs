use std::fmt;

use serde::{Deserialize, Serialize};

/// One approval interval on a circle of circumference `modulus`.
///
/// When `left <= right` the arc covers `[left, right]`. Otherwise it wraps
/// through the point where `0` and `modulus` are identified and covers
/// `[left, modulus] ∪ [0, right]`. Arcs are only ever edited through
/// [`CircularSociety`](crate::CircularSociety), which keeps names unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    name: String,
    left: f64,
    right: f64,
    modulus: f64,
}

impl Arc {
    pub(crate) fn new(name: String, left: f64, right: f64, modulus: f64) -> Self {
        Self {
            name,
            left,
            right,
            modulus,
        }
    }

    /// Returns the arc's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the counter-clockwise endpoint.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the clockwise endpoint.
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the circumference shared with the owning society.
    pub fn modulus(&self) -> f64 {
        self.modulus
    }

    /// Returns whether the arc passes through the `0 = modulus` point.
    pub fn wraps(&self) -> bool {
        self.left > self.right
    }

    /// Returns whether `point` belongs to the arc. Both endpoints are members.
    pub fn contains_point(&self, point: f64) -> bool {
        if self.left <= point && point <= self.right {
            true
        } else if self.left <= point && self.right <= self.left {
            true
        } else {
            point <= self.right && self.right <= self.left
        }
    }

    pub(crate) fn set_endpoints(&mut self, left: f64, right: f64) {
        self.left = left;
        self.right = right;
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.left <= self.right {
            write!(f, "{}: [{}, {}]", self.name, self.left, self.right)
        } else if self.right == 0.0 {
            write!(f, "{}: [{}, {}]", self.name, self.left, self.modulus)
        } else {
            write!(
                f,
                "{}: [0, {}] U [{}, {}]",
                self.name, self.right, self.left, self.modulus
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(left: f64, right: f64) -> Arc {
        Arc::new("A".into(), left, right, 10.0)
    }

    #[test]
    fn plain_arc_includes_both_endpoints() {
        let a = arc(2.0, 5.0);
        assert!(a.contains_point(2.0));
        assert!(a.contains_point(5.0));
        assert!(a.contains_point(3.5));
        assert!(!a.contains_point(1.999));
        assert!(!a.contains_point(5.001));
    }

    #[test]
    fn wrapping_arc_skips_the_gap() {
        let a = arc(8.0, 1.0);
        assert!(a.wraps());
        assert!(a.contains_point(8.0));
        assert!(a.contains_point(1.0));
        assert!(a.contains_point(0.0));
        assert!(a.contains_point(9.5));
        assert!(!a.contains_point(4.0));
        assert!(!a.contains_point(1.5));
    }

    // left == right satisfies both wrap rules, so membership covers the circle.
    #[test]
    fn degenerate_arc_goes_through_the_wrap_rules() {
        let a = arc(4.0, 4.0);
        assert!(!a.wraps());
        assert!(a.contains_point(4.0));
        assert!(a.contains_point(3.9));
        assert!(a.contains_point(4.1));
        assert!(a.contains_point(0.0));
    }

    #[test]
    fn display_covers_wrap_shapes() {
        assert_eq!(arc(1.0, 4.0).to_string(), "A: [1, 4]");
        assert_eq!(arc(7.5, 0.0).to_string(), "A: [7.5, 10]");
        assert_eq!(arc(7.5, 2.0).to_string(), "A: [0, 2] U [7.5, 10]");
    }
}
