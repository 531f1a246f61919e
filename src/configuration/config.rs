//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, physical constants, debris count and seed
//! - [`DebrisConfig`]     – optional overrides for the debris generator
//! - [`BodyConfig`]       – optional explicit body list; the compiled-in solar
//!   system ephemeris is used when it is absent
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   timestep: 3600.0        # seconds per step
//!   particles: 500
//!   seed: 7
//!
//! debris:
//!   mean_radius: 4.0e11
//!   max_vertical_speed: 50.0
//!
//! bodies:                   # first body is the primary
//!   - name: Sun
//!     m: 1.989e30
//!     radius: 6.957e8
//!     color: { r: 255, g: 203, b: 0 }
//!     x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!   - name: Earth
//!     m: 5.972e24
//!     radius: 6.371e6
//!     x: [1.496e11, 0.0, 0.0]
//!     v: [0.0, 0.0, 29780.0]
//! ```
//!
//! `Simulation::from_config` validates this and maps it into runtime state.

use std::borrow::Cow;

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::debris::DebrisGenerator;
use crate::simulation::params::{Parameters, DEFAULT_PARTICLES, DEFAULT_SEED, GRAVITATIONAL_CONSTANT};
use crate::simulation::states::{Body, Color, NVec3};

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub timestep: f64, // seconds per step
    #[serde(default)]
    pub start_time: f64, // simulated clock at construction
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub eps2: f64, // softening, 0 keeps the bare inverse-square law
    #[serde(default = "default_particles")]
    pub particles: usize, // debris count
    #[serde(default = "default_seed")]
    pub seed: u64, // makes the debris field reproducible
}

fn default_g() -> f64 {
    GRAVITATIONAL_CONSTANT
}

fn default_particles() -> usize {
    DEFAULT_PARTICLES
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl From<&ParametersConfig> for Parameters {
    fn from(cfg: &ParametersConfig) -> Self {
        Parameters {
            h0: cfg.timestep,
            t0: cfg.start_time,
            G: cfg.G,
            eps2: cfg.eps2,
            particles: cfg.particles,
            seed: cfg.seed,
        }
    }
}

/// Debris generator overrides; missing fields keep the generator defaults
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DebrisConfig {
    pub mean_radius: Option<f64>,
    pub mass: Option<f64>,
    pub radius: Option<f64>,
    pub color: Option<Color>,
    pub min_speed_factor: Option<f64>,
    pub max_speed_factor: Option<f64>,
    pub max_vertical_speed: Option<f64>,
}

impl From<&DebrisConfig> for DebrisGenerator {
    fn from(cfg: &DebrisConfig) -> Self {
        let d = DebrisGenerator::default();
        DebrisGenerator {
            mean_radius: cfg.mean_radius.unwrap_or(d.mean_radius),
            mass: cfg.mass.unwrap_or(d.mass),
            radius: cfg.radius.unwrap_or(d.radius),
            color: cfg.color.unwrap_or(d.color),
            min_speed_factor: cfg.min_speed_factor.unwrap_or(d.min_speed_factor),
            max_speed_factor: cfg.max_speed_factor.unwrap_or(d.max_speed_factor),
            max_vertical_speed: cfg.max_vertical_speed.unwrap_or(d.max_vertical_speed),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub x: Vec<f64>, // initial position [m]
    pub v: Vec<f64>, // initial velocity [m/s]
    pub m: f64, // mass [kg]
    pub radius: f64, // radius [m], display only
    #[serde(default = "default_color")]
    pub color: Color,
}

fn default_color() -> Color {
    Color::rgb(255, 255, 255)
}

impl BodyConfig {
    pub fn to_body(&self) -> SimResult<Body> {
        Ok(Body {
            name: Cow::Owned(self.name.clone()),
            x: self.vector("x", &self.x)?,
            v: self.vector("v", &self.v)?,
            m: self.m,
            radius: self.radius,
            color: self.color,
        })
    }

    fn vector(&self, field: &'static str, xs: &[f64]) -> SimResult<NVec3> {
        match xs {
            [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
            _ => Err(SimError::BadVector {
                name: self.name.clone(),
                field,
                len: xs.len(),
            }),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub debris: DebrisConfig,
    pub bodies: Option<Vec<BodyConfig>>,
}
