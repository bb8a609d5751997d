//! Physical constants shared across the planetary model.

pub use chemistry::{EARTH_SURF_PRES_IN_MILLIBARS, MMHG_TO_MILLIBARS};

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.67408e-11;

/// Molar gas constant in J/(mol·K)
pub const MOLAR_GAS_CONST: f64 = 8.3144621;

/// Ratio of escape velocity to RMS velocity above which a gas is retained
pub const GAS_RETENTION_THRESHOLD: f64 = 6.0;

/// Mass of the Sun in grams
pub const SOLAR_MASS_IN_GRAMS: f64 = 1.989e33;

/// Surface gravity of Earth in m/s²
pub const EARTH_ACCELERATION: f64 = 9.80655;

/// Mean density of Earth in g/cm³
pub const EARTH_DENSITY: f64 = 5.514;

/// Radius of Earth in meters
pub const EARTH_RADIUS_M: f64 = 6.371e6;

pub const FREEZING_POINT_OF_WATER: f64 = 273.15;

pub const EARTH_AVERAGE_CELSIUS: f64 = 14.0;

pub const EARTH_AVERAGE_KELVIN: f64 = FREEZING_POINT_OF_WATER + EARTH_AVERAGE_CELSIUS;

/// Grams of ocean per square kilometer of Earth surface
pub const EARTH_WATER_MASS_PER_AREA: f64 = 3.83e15;

/// Earth's exospheric temperature in Kelvin
pub const EARTH_EXOSPHERIC_TEMPERATURE: f64 = 1273.0;

/// Bodies below this mass (Earth masses) with thin air classify as belts of
/// rubble rather than planets
pub const ASTEROID_MASS_LIMIT: f64 = 0.001;

// Molecular weights of the gases the escape model singles out
pub const MOLECULAR_HYDROGEN: f64 = 2.0;
pub const HELIUM: f64 = 4.0;
pub const WATER_VAPOR: f64 = 18.0;
pub const MOLECULAR_NITROGEN: f64 = 28.0;

// Albedo components for the surface blend
pub const ICE_ALBEDO: f64 = 0.7;
pub const CLOUD_ALBEDO: f64 = 0.52;
pub const GAS_GIANT_ALBEDO: f64 = 0.5;
pub const AIRLESS_ICE_ALBEDO: f64 = 0.5;
pub const EARTH_ALBEDO: f64 = 0.3;
pub const GREENHOUSE_TRIGGER_ALBEDO: f64 = 0.20;
pub const ROCKY_ALBEDO: f64 = 0.15;
pub const ROCKY_AIRLESS_ALBEDO: f64 = 0.07;
pub const WATER_ALBEDO: f64 = 0.04;
