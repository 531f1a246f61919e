//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size and start time,
//! - gravitational constant and optional softening (`G`, `eps2`),
//! - debris population size and the seed for its random source

/// Newtonian constant of gravitation [m^3 kg^-1 s^-2]
pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-11;

/// Number of debris particles used by `Simulation::construct`
pub const DEFAULT_PARTICLES: usize = 1000;

/// Seed used by `Simulation::construct`
pub const DEFAULT_SEED: u64 = 0;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // step size [s]
    pub t0: f64, // start time [s]
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening [m^2], 0 leaves zero separation unguarded
    pub particles: usize, // debris count
    pub seed: u64, // deterministic seed
}

impl Parameters {
    pub fn new(h0: f64) -> Self {
        Self {
            h0,
            t0: 0.0,
            G: GRAVITATIONAL_CONSTANT,
            eps2: 0.0,
            particles: DEFAULT_PARTICLES,
            seed: DEFAULT_SEED,
        }
    }
}
