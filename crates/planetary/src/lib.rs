//! Planet model and environment finalization.
//!
//! [`Planet`] carries the orbital elements and accreted masses produced by
//! the formation pass; the methods in this crate turn those into a physical
//! world — radius and density, rotation, atmosphere, climate, and a
//! habitability verdict. Moons are `Planet` values with
//! [`is_moon`](Planet::is_moon) set and a secondary orbit around their
//! parent.
//!
//! The entry point is [`Planet::finalize_environment`], which runs the full
//! pipeline for one body and recurses into its moons.

pub mod atmosphere;
pub mod constants;
pub mod environment;
pub mod planet;
pub mod planet_type;
pub mod temperature;

#[cfg(test)]
mod atmosphere_test;

pub use atmosphere::Breathability;
pub use planet::Planet;
pub use planet_type::PlanetType;
