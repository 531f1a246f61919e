//! Build, step and tear down a simulation
//!
//! [`Simulation`] is the runtime bundle: parameters, system state, the force
//! set acting on the massive bodies, and the per-body acceleration scratch
//! buffer. Construction is all-or-nothing: every sequence is reserved with
//! `try_reserve_exact`, and on any error whatever was already built is
//! dropped before the error is returned. Once built, [`Simulation::step`]
//! cannot fail.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use crate::configuration::config::ScenarioConfig;
use crate::error::{SimError, SimResult};
use crate::simulation::debris::DebrisGenerator;
use crate::simulation::ephemeris::{self, SOLAR_SYSTEM};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, Particle, System};

pub struct Simulation {
    parameters: Parameters,
    system: System,
    forces: AccelSet,
    accel: Box<[NVec3]>, // one slot per body, reused every step
    steps: u64,
}

impl Simulation {
    /// Solar system from the compiled-in ephemeris plus the default debris
    /// field, seeded deterministically
    pub fn construct(timestep: f64) -> SimResult<Self> {
        let parameters = Parameters::new(timestep);
        let mut rng = ChaCha8Rng::seed_from_u64(parameters.seed);
        let bodies = ephemeris::load(&SOLAR_SYSTEM)?;
        Self::build(parameters, bodies, &DebrisGenerator::default(), &mut rng)
    }

    /// Build from a YAML scenario. Bodies fall back to the compiled-in
    /// ephemeris when the scenario lists none.
    pub fn from_config(cfg: &ScenarioConfig) -> SimResult<Self> {
        let parameters = Parameters::from(&cfg.parameters);
        let debris = DebrisGenerator::from(&cfg.debris);
        let mut rng = ChaCha8Rng::seed_from_u64(parameters.seed);

        let bodies = match &cfg.bodies {
            Some(list) => {
                let mut bodies = Vec::new();
                bodies
                    .try_reserve_exact(list.len())
                    .map_err(SimError::allocation("scenario bodies"))?;
                for bc in list {
                    bodies.push(bc.to_body()?);
                }
                bodies
            }
            None => ephemeris::load(&SOLAR_SYSTEM)?,
        };

        Self::build(parameters, bodies, &debris, &mut rng)
    }

    /// Assemble a simulation from explicit bodies. `bodies[0]` must be the
    /// most massive body; `parameters.particles` debris particles are drawn
    /// from `rng` around it.
    pub fn build<R: Rng + ?Sized>(
        parameters: Parameters,
        bodies: Vec<Body>,
        debris: &DebrisGenerator,
        rng: &mut R,
    ) -> SimResult<Self> {
        if !(parameters.h0.is_finite() && parameters.h0 > 0.0) {
            return Err(SimError::InvalidTimestep(parameters.h0));
        }
        debris.validate()?;

        let primary = bodies.first().ok_or(SimError::NoPrimary)?;
        if let Some((index, b)) = bodies
            .iter()
            .enumerate()
            .find(|(_, b)| !(b.m.is_finite() && b.m > 0.0))
        {
            return Err(SimError::InvalidMass {
                index,
                name: b.name.to_string(),
                mass: b.m,
            });
        }
        if let Some((index, b)) = bodies
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, b)| b.m > primary.m)
        {
            return Err(SimError::PrimaryNotDominant {
                index,
                name: b.name.to_string(),
                mass: b.m,
            });
        }

        let particles: Vec<Particle> =
            debris.generate_field(rng, parameters.G, primary.m, parameters.particles)?;

        let mut accel = Vec::new();
        accel
            .try_reserve_exact(bodies.len())
            .map_err(SimError::allocation("acceleration buffer"))?;
        accel.resize(bodies.len(), NVec3::zeros());

        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        let system = System {
            bodies: bodies.into_boxed_slice(),
            particles: particles.into_boxed_slice(),
            t0: parameters.t0,
            t: parameters.t0,
        };

        info!(
            bodies = system.bodies.len(),
            particles = system.particles.len(),
            timestep = parameters.h0,
            primary = %system.bodies[0].name,
            "simulation constructed"
        );

        Ok(Self {
            parameters,
            system,
            forces,
            accel: accel.into_boxed_slice(),
            steps: 0,
        })
    }

    /// Advance every body and particle by one timestep
    pub fn step(&mut self) {
        let Simulation {
            system,
            parameters,
            forces,
            accel,
            steps,
        } = self;

        semi_implicit_euler(system, forces, parameters, accel);
        *steps += 1;

        trace!(step = *steps, t = system.t, "step");
    }

    /// Release the simulation. Consuming `self` means the handle cannot be
    /// stepped or read afterwards:
    ///
    /// ```compile_fail
    /// use orbitsim::Simulation;
    ///
    /// let sim = Simulation::construct(3600.0).unwrap();
    /// sim.destroy();
    /// let _ = sim.current_time();
    /// ```
    pub fn destroy(self) {
        debug!(
            steps = self.steps,
            t = self.system.t,
            "simulation destroyed"
        );
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn particles(&self) -> &[Particle] {
        &self.system.particles
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn timestep(&self) -> f64 {
        self.parameters.h0
    }

    pub fn start_time(&self) -> f64 {
        self.system.t0
    }

    pub fn current_time(&self) -> f64 {
        self.system.t
    }

    pub fn elapsed_steps(&self) -> u64 {
        self.steps
    }
}
