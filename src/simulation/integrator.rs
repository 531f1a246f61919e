//! Fixed-step time integrator for the orbital system
//!
//! Semi-implicit (symplectic) Euler: kick every velocity with the
//! acceleration at the current positions, then drift every position with the
//! freshly kicked velocity. Swapping the order gives explicit Euler, which
//! gains energy every orbit.

use super::forces::{AccelSet, PrimaryGravity};
use super::params::Parameters;
use super::states::{NVec3, System};

/// Advance `sys` by one step of `params.h0` seconds.
///
/// `accel` is caller-owned scratch with one slot per body. Every body
/// acceleration is accumulated there before any velocity changes, so no body
/// sees another body's updated position inside the same step.
pub fn semi_implicit_euler(
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
    accel: &mut [NVec3],
) {
    debug_assert_eq!(accel.len(), sys.bodies.len());

    let dt = params.h0;

    // Particles orbit the primary as it was at the start of the step
    let primary = sys.primary().map(|p| (p.x, p.m));

    // a_n from x_n at time t_n
    forces.accumulate_accels(sys.t, &sys.bodies, accel);

    // Kick then drift: v_n+1 = v_n + dt a_n, x_n+1 = x_n + dt v_n+1
    for (b, a) in sys.bodies.iter_mut().zip(accel.iter()) {
        b.v += dt * *a;
        b.x += dt * b.v;
    }

    if let Some((xp, mp)) = primary {
        let gravity = PrimaryGravity {
            G: params.G,
            eps2: params.eps2,
        };
        for p in sys.particles.iter_mut() {
            p.v += dt * gravity.acceleration(xp, mp, p.x);
            p.x += dt * p.v;
        }
    }

    sys.t += dt;
}
