pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, Particle, System, Color, NVec3};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, PrimaryGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::debris::DebrisGenerator;
pub use simulation::ephemeris::{EphemerisEntry, SOLAR_SYSTEM};
pub use simulation::lifecycle::Simulation;
pub use simulation::params::Parameters;

pub use configuration::config::{ParametersConfig, DebrisConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_step_curve;
