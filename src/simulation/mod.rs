pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod debris;
pub mod ephemeris;
pub mod lifecycle;
