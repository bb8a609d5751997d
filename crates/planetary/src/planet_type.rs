//! Observable planet classification.

use serde::Serialize;

/// The classification assigned at the end of the environment pass, from a
/// decision table over pressure, density, hydrosphere/ice fractions,
/// temperature extremes, and accreted gas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlanetType {
    /// Nothing matched; rare but possible for marginal atmospheres
    Unknown,
    /// Sub-planetary rubble with thin air
    Asteroids,
    /// Airless or near-airless rock
    Rock,
    /// Runaway-hot with a dense atmosphere
    Venusian,
    /// Liquid water between 5% and 95% of the surface
    Terrestrial,
    /// Dense rocky world that retains hydrogen under a deep atmosphere
    SuperEarth,
    /// Thin cold atmosphere
    Martian,
    /// More than 95% ocean
    Water,
    /// More than 95% ice, or accreted gas frozen out
    Ice,
    /// Rotation locked to the orbit
    TidallyLocked,
    /// Gas envelope below 20% of total mass
    SubSubGasGiant,
    /// Gas giant under 20 Earth masses
    SubGasGiant,
    /// Full gas giant
    GasGiant,
}

impl PlanetType {
    /// True for the gas-giant family.
    pub fn is_gaseous(&self) -> bool {
        matches!(
            self,
            PlanetType::SubSubGasGiant | PlanetType::SubGasGiant | PlanetType::GasGiant
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlanetType::Unknown => "Unknown",
            PlanetType::Asteroids => "Asteroids",
            PlanetType::Rock => "Rock",
            PlanetType::Venusian => "Venusian",
            PlanetType::Terrestrial => "Terrestrial",
            PlanetType::SuperEarth => "Super Earth",
            PlanetType::Martian => "Martian",
            PlanetType::Water => "Water",
            PlanetType::Ice => "Ice",
            PlanetType::TidallyLocked => "Tidally Locked",
            PlanetType::SubSubGasGiant => "semi Gas Giant",
            PlanetType::SubGasGiant => "sub Gas Giant",
            PlanetType::GasGiant => "Gas Giant",
        }
    }
}

impl std::fmt::Display for PlanetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
