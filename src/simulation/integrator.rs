//! Fixed-step time integrator for the orbital system
//!
//! Provides the semi-implicit (symplectic) Euler step, driven by
//! `AccelSet` and `Parameters`

use super::states::{System, NVec2};
use super::forces::AccelSet;
use super::params::Parameters;

/// Advance the system by one step using semi-implicit Euler
/// Uses one force evaluation per step and updates velocities, positions,
/// and `sys.t` in-place based on `params.h0`
///
/// Update order is load-bearing: velocities move first, from accelerations
/// at the current positions, and positions then move with the
/// already-updated velocities. Plain explicit Euler (positions advanced
/// with the stale velocity) does not keep the long-run energy bounded.
pub fn euler_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.h0; // time step dt

    // a[i] holds a_n for body i at the current time t = sys.t,
    // evaluated at the pre-step positions x_n
    let mut a = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, acc) in sys.bodies.iter_mut().zip(a.iter()) {
        b.v += dt * *acc;
    }

    // Drift with the updated velocity: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // Increment the system time by one full step
    sys.t += dt;
}
