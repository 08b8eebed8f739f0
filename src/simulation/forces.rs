//! Force / acceleration contributors for the orbital engine
//!
//! Defines the acceleration trait and the single force law this system
//! carries: Newtonian gravity from a fixed central mass at the origin

use crate::simulation::states::{System, NVec2};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Newtonian gravity from a single dominant mass fixed at the origin
///
/// Each orbiting body responds to the central field independently; there is
/// no body-to-body gravity and no softening. The body's own mass cancels out
/// of `a = F/m`, so bodies behave as massless test particles.
///
/// With no softening floor, a trajectory passing through or very near the
/// origin diverges: `|x| -> 0` sends the acceleration magnitude to infinity
/// and later positions go extreme or non-finite. That is accepted behavior
/// of this force law, not a fault.
pub struct CentralGravity {
    pub mu: f64, // gravitational parameter of the central body, G * M
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        // Independent per-body loop: body i never reads body j
        for (b, a) in sys.bodies.iter().zip(out.iter_mut()) {
            // x points from the origin to the body, so the pull is along -x
            let x = b.x;

            // Squared distance to the central body |x|^2
            let r2 = x.dot(&x);

            // 1 / |x|
            let inv_r = r2.sqrt().recip();

            // 1 / |x|^3
            // (this is what appears in the acceleration formula:
            //   a = -mu * x / |x|^3
            //   magnitude mu / |x|^2, direction toward the origin)
            let inv_r3 = inv_r * inv_r * inv_r;

            *a += -self.mu * inv_r3 * x;
        }
    }
}
