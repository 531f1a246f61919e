//! Force / acceleration contributors for the orbital engine
//!
//! Massive bodies interact through [`AccelSet`] terms (direct pairwise
//! Newtonian gravity by default). Debris particles only feel the primary,
//! through [`PrimaryGravity`], so their cost stays linear in their count.

use crate::simulation::states::{Body, NVec3};

/// Collection of acceleration terms acting on the massive bodies.
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all `bodies`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, bodies: &[Body], out: &mut [NVec3]) {
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, bodies, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source over the massive bodies.
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, bodies: &[Body], out: &mut [NVec3]);
}

/// Visit every unordered pair `(i, j)` with `i < j` exactly once
pub fn for_each_pair(n: usize, mut f: impl FnMut(usize, usize)) {
    for i in 0..n {
        for j in (i + 1)..n {
            f(i, j);
        }
    }
}

/// Direct O(n^2) Newtonian gravity among massive bodies.
///
/// With `eps2 == 0` two coincident bodies produce non-finite accelerations;
/// a positive `eps2` softens the pair distance to `sqrt(|r|^2 + eps2)`.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64,
    pub eps2: f64,
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, bodies: &[Body], out: &mut [NVec3]) {
        for_each_pair(bodies.len(), |i, j| {
            let bi = &bodies[i];
            let bj = &bodies[j];

            // r points from i to j: i is pulled along +r, j along -r
            let r = bj.x - bi.x;
            let d2 = r.dot(&r) + self.eps2;

            // a = G m r / |r|^3, shared by both sides of the pair
            let inv_r = d2.sqrt().recip();
            let coef = self.G * inv_r * inv_r * inv_r;

            out[i] += coef * bj.m * r;
            out[j] -= coef * bi.m * r;
        });
    }
}

/// Restricted one-body gravity: the acceleration a massless particle at `x`
/// feels from the primary alone
#[allow(non_snake_case)]
pub struct PrimaryGravity {
    pub G: f64,
    pub eps2: f64,
}

impl PrimaryGravity {
    pub fn acceleration(&self, primary_x: NVec3, primary_m: f64, x: NVec3) -> NVec3 {
        let r = primary_x - x;
        let inv_r = (r.dot(&r) + self.eps2).sqrt().recip();
        (self.G * primary_m * inv_r * inv_r * inv_r) * r
    }
}
