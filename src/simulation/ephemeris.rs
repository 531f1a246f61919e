//! Compiled-in solar system ephemeris
//!
//! Heliocentric state vectors for 2022-01-01 00:00 TDB, derived from the JPL
//! approximate Keplerian elements. The frame is y-up: the ecliptic is the
//! x-z plane, matching the plane the debris field is generated in.
//! Earth stands in for the Earth-Moon barycenter. The Sun carries the recoil
//! velocity that zeroes the total momentum, so the barycenter stays put.

use std::borrow::Cow;

use crate::error::{SimError, SimResult};
use crate::simulation::states::{Body, Color, NVec3};

/// One static row of the ephemeris table
#[derive(Debug, Clone, Copy)]
pub struct EphemerisEntry {
    pub name: &'static str,
    pub mass: f64, // [kg]
    pub radius: f64, // [m]
    pub color: Color,
    pub position: [f64; 3], // [m]
    pub velocity: [f64; 3], // [m/s]
}

impl EphemerisEntry {
    pub fn to_body(&self) -> Body {
        Body {
            name: Cow::Borrowed(self.name),
            x: NVec3::from(self.position),
            v: NVec3::from(self.velocity),
            m: self.mass,
            radius: self.radius,
            color: self.color,
        }
    }
}

/// Sun first, then the planets outward. Index 0 must stay the Sun.
pub const SOLAR_SYSTEM: [EphemerisEntry; 10] = [
    EphemerisEntry {
        name: "Sun",
        mass: 1.9885e30,
        radius: 6.957e8,
        color: Color::rgb(255, 203, 0),
        position: [0.0, 0.0, 0.0],
        velocity: [-5.8159, 2.5155e-1, -1.4620e1],
    },
    EphemerisEntry {
        name: "Mercury",
        mass: 3.3011e23,
        radius: 2.4397e6,
        color: Color::rgb(130, 130, 130),
        position: [5.3710e10, -5.4252e9, -6.1001e9],
        velocity: [-3.9239e3, 4.4934e3, 5.0582e4],
    },
    EphemerisEntry {
        name: "Venus",
        mass: 4.8675e24,
        radius: 6.0518e6,
        color: Color::rgb(211, 176, 131),
        position: [-1.0148e10, 2.0560e9, 1.0712e11],
        velocity: [-3.4985e4, 1.9708e3, -3.4928e3],
    },
    EphemerisEntry {
        name: "Earth",
        mass: 5.9724e24,
        radius: 6.371e6,
        color: Color::rgb(0, 121, 241),
        position: [-2.6138e10, -7.2350e6, 1.4476e11],
        velocity: [-2.9800e4, 2.7015e-1, -5.4052e3],
    },
    EphemerisEntry {
        name: "Mars",
        mass: 6.4171e23,
        radius: 3.3895e6,
        color: Color::rgb(230, 41, 55),
        position: [-1.2965e11, -7.9692e8, -1.8981e11],
        velocity: [2.0919e4, -7.5605e2, -1.1590e4],
    },
    EphemerisEntry {
        name: "Jupiter",
        mass: 1.89819e27,
        radius: 6.9911e7,
        color: Color::rgb(255, 161, 0),
        position: [6.9691e11, -1.4478e10, -2.6921e11],
        velocity: [4.5465e3, -1.5497e2, 1.2807e4],
    },
    EphemerisEntry {
        name: "Saturn",
        mass: 5.6834e26,
        radius: 5.8232e7,
        color: Color::rgb(253, 249, 0),
        position: [1.0406e12, -2.3081e10, -1.0543e12],
        velocity: [6.3463e3, -3.7007e2, 6.7616e3],
    },
    EphemerisEntry {
        name: "Uranus",
        mass: 8.6813e25,
        radius: 2.5362e7,
        color: Color::rgb(102, 191, 255),
        position: [2.1524e12, -2.0406e10, 2.0170e12],
        velocity: [-4.7040e3, 7.8190e1, 4.6494e3],
    },
    EphemerisEntry {
        name: "Neptune",
        mass: 1.02413e26,
        radius: 2.4622e7,
        color: Color::rgb(0, 82, 172),
        position: [4.4319e12, -8.9542e10, -6.1134e11],
        velocity: [7.0653e2, -1.2774e2, 5.4129e3],
    },
    EphemerisEntry {
        name: "Pluto",
        mass: 1.303e22,
        radius: 1.1883e6,
        color: Color::rgb(200, 200, 200),
        position: [2.2617e12, -1.5935e11, -4.6245e12],
        velocity: [5.0103e3, -1.5790e3, 1.2129e3],
    },
];

/// Copy every entry of `table` into a freshly reserved body list
pub fn load(table: &[EphemerisEntry]) -> SimResult<Vec<Body>> {
    let mut bodies = Vec::new();
    bodies
        .try_reserve_exact(table.len())
        .map_err(SimError::allocation("ephemeris bodies"))?;

    bodies.extend(table.iter().map(EphemerisEntry::to_body));
    Ok(bodies)
}
