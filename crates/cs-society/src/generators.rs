use cs_core::errors::{CsError, ErrorInfo};
use cs_core::rng::RngHandle;
use rand::Rng;
use rand_distr::{Beta, Distribution};

use crate::society::CircularSociety;

/// Builds Hardin's uniform society `U(n, h)` on a circle of circumference `n`.
///
/// Arc `i` (named `Set i+1`) spans `[i, (i + h - epsilon) mod n]` with the
/// right endpoint rounded to one decimal place.
pub fn uniform_society(
    name: impl Into<String>,
    n: usize,
    h: f64,
    epsilon: f64,
) -> Result<CircularSociety, CsError> {
    let modulus = n as f64;
    let mut society = CircularSociety::new(name, modulus)?;
    for i in 0..n {
        let left = i as f64;
        let right = round_tenth((left + h - epsilon).rem_euclid(modulus));
        society.add_arc(set_name(i), left, right)?;
    }
    Ok(society)
}

/// Builds `n` arcs of length `p * modulus` whose left endpoints are uniform on the circle.
pub fn fixed_length_society(
    name: impl Into<String>,
    n: usize,
    modulus: f64,
    p: f64,
    rng: &mut RngHandle,
) -> Result<CircularSociety, CsError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(CsError::InvalidInput(
            ErrorInfo::new("length-fraction", "arc length fraction must lie in [0, 1]")
                .with_context("p", p.to_string()),
        ));
    }
    let mut society = CircularSociety::new(name, modulus)?;
    for i in 0..n {
        let left = rng.gen_range(0.0..modulus);
        let right = (left + p * modulus).rem_euclid(modulus);
        society.add_arc(set_name(i), left, right)?;
    }
    Ok(society)
}

/// Builds `n` arcs whose endpoints are drawn independently and uniformly.
pub fn random_society(
    name: impl Into<String>,
    n: usize,
    modulus: f64,
    rng: &mut RngHandle,
) -> Result<CircularSociety, CsError> {
    let mut society = CircularSociety::new(name, modulus)?;
    for i in 0..n {
        let left = rng.gen_range(0.0..modulus);
        let right = rng.gen_range(0.0..modulus);
        society.add_arc(set_name(i), left, right)?;
    }
    Ok(society)
}

/// Builds `n` arcs with uniform left endpoints and lengths `Beta(a, b) * modulus`.
pub fn beta_length_society(
    name: impl Into<String>,
    n: usize,
    modulus: f64,
    a: f64,
    b: f64,
    rng: &mut RngHandle,
) -> Result<CircularSociety, CsError> {
    let beta = Beta::new(a, b).map_err(|err| {
        CsError::InvalidInput(
            ErrorInfo::new("beta-shape", err.to_string())
                .with_context("a", a.to_string())
                .with_context("b", b.to_string())
                .with_hint("both shape parameters must be positive"),
        )
    })?;
    let mut society = CircularSociety::new(name, modulus)?;
    for i in 0..n {
        let left = rng.gen_range(0.0..modulus);
        let length = beta.sample(rng) * modulus;
        let right = (left + length).rem_euclid(modulus);
        society.add_arc(set_name(i), left, right)?;
    }
    Ok(society)
}

fn set_name(index: usize) -> String {
    format!("Set {}", index + 1)
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
