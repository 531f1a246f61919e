//! Core state types for the orbital simulation.
//!
//! - `Body` holds one massive body (star/planet) or one debris particle
//! - `System` holds the fixed-length body and particle sequences plus the
//!   simulated time bookkeeping
//!
//! Index 0 of `System::bodies` is always the primary (the dominant mass).
//! The force model and the debris generator both depend on that ordering,
//! and `Simulation` checks it at construction.

use std::borrow::Cow;

use nalgebra::Vector3;
use serde::Deserialize;

pub type NVec3 = Vector3<f64>;

/// Display color, no physical effect
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const GRAY: Color = Color::rgb(130, 130, 130);
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: Cow<'static, str>, // display name
    pub x: NVec3,                // position [m]
    pub v: NVec3,                // velocity [m/s]
    pub m: f64,                  // mass [kg]
    pub radius: f64,             // radius [m], display only
    pub color: Color,            // display only
}

/// Debris particles share the body layout; their mass never enters the force model
pub type Particle = Body;

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Box<[Body]>,         // massive bodies, bodies[0] is the primary
    pub particles: Box<[Particle]>,  // massless test particles
    pub t0: f64,                     // start time [s]
    pub t: f64,                      // current time [s]
}

impl System {
    /// The dominant mass every particle orbits
    pub fn primary(&self) -> Option<&Body> {
        self.bodies.first()
    }
}
