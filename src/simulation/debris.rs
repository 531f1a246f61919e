//! Debris-field initial conditions
//!
//! Particles are scattered on near-circular orbits around the origin in the
//! x-z plane. Radii come from a logit transform of a uniform draw, which
//! concentrates the field around `mean_radius`
//! (<https://mathworld.wolfram.com/DiskPointPicking.html>). Speeds are the
//! circular-orbit speed `sqrt(G M / r)` scaled by a random factor, plus a
//! small vertical drift.

use std::borrow::Cow;
use std::f64::consts::TAU;

use rand::distributions::Open01;
use rand::Rng;

use crate::error::{SimError, SimResult};
use crate::simulation::states::{Color, NVec3, Particle};

#[derive(Debug, Clone)]
pub struct DebrisGenerator {
    pub mean_radius: f64, // [m]
    pub mass: f64, // [kg], never enters the force model
    pub radius: f64, // [m], display only
    pub color: Color,
    pub min_speed_factor: f64, // lower bound of the circular-speed multiplier
    pub max_speed_factor: f64, // upper bound of the circular-speed multiplier
    pub max_vertical_speed: f64, // |v_y| bound [m/s]
}

impl Default for DebrisGenerator {
    fn default() -> Self {
        Self {
            mean_radius: 4e11,
            mass: 1e12, // about a billion tons
            radius: 2e3,
            color: Color::GRAY,
            min_speed_factor: 0.6,
            max_speed_factor: 1.2,
            max_vertical_speed: 1e2,
        }
    }
}

impl DebrisGenerator {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.mean_radius.is_finite() && self.mean_radius > 0.0) {
            return Err(SimError::InvalidDebris(format!(
                "mean_radius must be positive, got {}",
                self.mean_radius
            )));
        }
        if !(0.0 <= self.min_speed_factor
            && self.min_speed_factor <= self.max_speed_factor
            && self.max_speed_factor.is_finite())
        {
            return Err(SimError::InvalidDebris(format!(
                "speed factors must be finite with 0 <= min <= max, got [{}, {}]",
                self.min_speed_factor, self.max_speed_factor
            )));
        }
        if !(self.max_vertical_speed.is_finite() && self.max_vertical_speed >= 0.0) {
            return Err(SimError::InvalidDebris(format!(
                "max_vertical_speed must be finite and non-negative, got {}",
                self.max_vertical_speed
            )));
        }
        Ok(())
    }

    /// Sample one particle orbiting a central mass `center_mass`
    #[allow(non_snake_case)]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, G: f64, center_mass: f64) -> Particle {
        // Logit distribution, x strictly inside (0, 1) so l stays finite
        let x: f64 = rng.sample(Open01);
        let l = x.ln() - (1.0 - x).ln() + 1.0;

        let r = self.mean_radius * l.abs().sqrt();
        let phi = rng.gen_range(0.0..TAU);

        // https://en.wikipedia.org/wiki/Circular_orbit#Velocity
        let v = (G * center_mass / r).sqrt()
            * rng.gen_range(self.min_speed_factor..=self.max_speed_factor);
        let vy = rng.gen_range(-self.max_vertical_speed..=self.max_vertical_speed);

        let (sin_phi, cos_phi) = phi.sin_cos();

        Particle {
            name: Cow::Borrowed("debris"),
            x: NVec3::new(r * cos_phi, 0.0, r * sin_phi),
            v: NVec3::new(-v * sin_phi, vy, v * cos_phi),
            m: self.mass,
            radius: self.radius,
            color: self.color,
        }
    }

    /// Sample `count` particles, reserving the whole field up front
    #[allow(non_snake_case)]
    pub fn generate_field<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        G: f64,
        center_mass: f64,
        count: usize,
    ) -> SimResult<Vec<Particle>> {
        let mut particles = Vec::new();
        particles
            .try_reserve_exact(count)
            .map_err(SimError::allocation("debris particles"))?;

        particles.extend((0..count).map(|_| self.generate(rng, G, center_mass)));
        Ok(particles)
    }
}
