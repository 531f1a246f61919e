use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::SimResult;
use crate::simulation::debris::DebrisGenerator;
use crate::simulation::ephemeris::{self, SOLAR_SYSTEM};
use crate::simulation::lifecycle::Simulation;
use crate::simulation::params::Parameters;

/// Build the solar system with `n` debris particles
fn make_simulation(n: usize) -> SimResult<Simulation> {
    let mut parameters = Parameters::new(3600.0);
    parameters.particles = n;

    let mut rng = ChaCha8Rng::seed_from_u64(parameters.seed);
    let bodies = ephemeris::load(&SOLAR_SYSTEM)?;
    Simulation::build(parameters, bodies, &DebrisGenerator::default(), &mut rng)
}

/// Time `Simulation::step` for a range of debris counts.
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() -> SimResult<()> {
    println!("N,step_ms");

    for n in (0..=20_000).step_by(1_000) {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 5_000 { 50 } else { 10 };

        let mut sim = make_simulation(n)?;

        // Warm-up one step
        sim.step();

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
        sim.destroy();
    }

    Ok(())
}
