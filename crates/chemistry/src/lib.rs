//! Chemical reference data for atmosphere synthesis.
//!
//! A fixed table of the gases that matter for planetary atmospheres, with
//! the physical properties the retention and breathability models consume:
//! molecular weight, phase-change points, cosmic abundance, reactivity, and
//! the maximum inspired partial pressure a human tolerates (Dole, "Habitable
//! Planets for Man", 1964).

use serde::Serialize;

/// Conversion factor from mmHg to millibars
pub const MMHG_TO_MILLIBARS: f64 = EARTH_SURF_PRES_IN_MILLIBARS / 760.0;

/// Sea-level atmospheric pressure on Earth, in millibars
pub const EARTH_SURF_PRES_IN_MILLIBARS: f64 = 1013.25;

/// One part per million of Earth sea-level pressure, in millibars
pub const PPM_PRESSURE: f64 = EARTH_SURF_PRES_IN_MILLIBARS / 1_000_000.0;

/// A chemical species from the reference table.
///
/// `code` is the atomic number for elements; compounds use pseudo-codes
/// above 899 (900 NH₃, 901 H₂O, 902 CO₂, 903 O₃, 904 CH₄) which the
/// atmosphere-synthesis rules key on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chemical {
    pub code: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Molecular weight in g/mol
    pub weight: f64,
    /// Melting point in Kelvin
    pub melting_point: f64,
    /// Boiling point in Kelvin at 1 bar
    pub boiling_point: f64,
    /// Density in g/cm³
    pub density: f64,
    /// Abundance by Earth-crust measure
    pub abundance_e: f64,
    /// Cosmic (solar) abundance
    pub abundance_s: f64,
    /// Chemical reactivity weighting used by the retention model
    pub reactivity: f64,
    /// Maximum inspired partial pressure in millibars; 0 = never breathable
    pub max_inspired_pressure: f64,
}

/// The reference table, ordered as the synthesis pass scans it.
pub static CHEMICALS: [Chemical; 15] = [
    Chemical {
        code: 1,
        symbol: "H",
        name: "Hydrogen",
        weight: 1.0079,
        melting_point: 14.06,
        boiling_point: 20.40,
        density: 8.99e-05,
        abundance_e: 0.00125893,
        abundance_s: 27925.4,
        reactivity: 1.0,
        max_inspired_pressure: 0.0,
    },
    Chemical {
        code: 2,
        symbol: "He",
        name: "Helium",
        weight: 4.0026,
        melting_point: 3.46,
        boiling_point: 4.20,
        density: 0.0001787,
        abundance_e: 7.94328e-09,
        abundance_s: 2722.7,
        reactivity: 0.0,
        max_inspired_pressure: 61_000.0 * MMHG_TO_MILLIBARS,
    },
    Chemical {
        code: 7,
        symbol: "N",
        name: "Nitrogen",
        weight: 14.0067,
        melting_point: 63.34,
        boiling_point: 77.40,
        density: 0.0012506,
        abundance_e: 1.99526e-05,
        abundance_s: 3.13329,
        reactivity: 0.0,
        max_inspired_pressure: 2330.0 * MMHG_TO_MILLIBARS,
    },
    Chemical {
        code: 8,
        symbol: "O",
        name: "Oxygen",
        weight: 15.9994,
        melting_point: 54.80,
        boiling_point: 90.20,
        density: 0.001429,
        abundance_e: 0.501187,
        abundance_s: 23.8232,
        reactivity: 10.0,
        max_inspired_pressure: 400.0 * MMHG_TO_MILLIBARS,
    },
    Chemical {
        code: 10,
        symbol: "Ne",
        name: "Neon",
        weight: 20.1700,
        melting_point: 24.53,
        boiling_point: 27.10,
        density: 0.0009,
        abundance_e: 5.01187e-09,
        abundance_s: 3.4435e-5,
        reactivity: 0.0,
        max_inspired_pressure: 3900.0 * MMHG_TO_MILLIBARS,
    },
    Chemical {
        code: 18,
        symbol: "Ar",
        name: "Argon",
        weight: 39.9480,
        melting_point: 84.00,
        boiling_point: 87.30,
        density: 0.0017824,
        abundance_e: 3.16228e-06,
        abundance_s: 0.100925,
        reactivity: 0.0,
        max_inspired_pressure: 1220.0 * MMHG_TO_MILLIBARS,
    },
    Chemical {
        code: 36,
        symbol: "Kr",
        name: "Krypton",
        weight: 83.8000,
        melting_point: 116.60,
        boiling_point: 119.70,
        density: 0.003708,
        abundance_e: 1e-10,
        abundance_s: 4.4978e-05,
        reactivity: 0.0,
        max_inspired_pressure: 350.0 * MMHG_TO_MILLIBARS,
    },
    Chemical {
        code: 54,
        symbol: "Xe",
        name: "Xenon",
        weight: 131.3000,
        melting_point: 161.30,
        boiling_point: 165.00,
        density: 0.00588,
        abundance_e: 3.16228e-11,
        abundance_s: 4.69894e-06,
        reactivity: 0.0,
        max_inspired_pressure: 160.0 * MMHG_TO_MILLIBARS,
    },
    Chemical {
        code: 900,
        symbol: "NH3",
        name: "Ammonia",
        weight: 17.0000,
        melting_point: 195.46,
        boiling_point: 239.66,
        density: 0.001,
        abundance_e: 0.002,
        abundance_s: 0.0001,
        reactivity: 1.0,
        max_inspired_pressure: 100.0 * PPM_PRESSURE,
    },
    Chemical {
        code: 901,
        symbol: "H2O",
        name: "Water",
        weight: 18.0000,
        melting_point: 273.16,
        boiling_point: 373.16,
        density: 1.000,
        abundance_e: 0.03,
        abundance_s: 0.001,
        reactivity: 0.0,
        max_inspired_pressure: 0.0,
    },
    Chemical {
        code: 902,
        symbol: "CO2",
        name: "CarbonDioxide",
        weight: 44.0000,
        melting_point: 194.66,
        boiling_point: 194.66,
        density: 0.001,
        abundance_e: 0.01,
        abundance_s: 0.0005,
        reactivity: 0.0,
        max_inspired_pressure: 7.0 * MMHG_TO_MILLIBARS,
    },
    Chemical {
        code: 903,
        symbol: "O3",
        name: "Ozone",
        weight: 48.0000,
        melting_point: 80.16,
        boiling_point: 161.16,
        density: 0.001,
        abundance_e: 0.001,
        abundance_s: 0.000001,
        reactivity: 2.0,
        max_inspired_pressure: 0.1 * PPM_PRESSURE,
    },
    Chemical {
        code: 904,
        symbol: "CH4",
        name: "Methane",
        weight: 16.0000,
        melting_point: 90.16,
        boiling_point: 109.16,
        density: 0.010,
        abundance_e: 0.005,
        abundance_s: 0.0001,
        reactivity: 1.0,
        max_inspired_pressure: 50_000.0 * PPM_PRESSURE,
    },
    Chemical {
        code: 9,
        symbol: "F",
        name: "Fluorine",
        weight: 18.9984,
        melting_point: 53.58,
        boiling_point: 85.10,
        density: 0.001696,
        abundance_e: 0.000630957,
        abundance_s: 0.000843335,
        reactivity: 50.0,
        max_inspired_pressure: 0.1 * PPM_PRESSURE,
    },
    Chemical {
        code: 17,
        symbol: "Cl",
        name: "Chlorine",
        weight: 35.4530,
        melting_point: 172.22,
        boiling_point: 239.20,
        density: 0.003214,
        abundance_e: 0.000125893,
        abundance_s: 0.005236,
        reactivity: 40.0,
        max_inspired_pressure: 1.0 * PPM_PRESSURE,
    },
];

/// The full reference table.
pub fn chemicals() -> &'static [Chemical] {
    &CHEMICALS
}

/// Look up a species by symbol.
pub fn by_symbol(symbol: &str) -> Option<&'static Chemical> {
    CHEMICALS.iter().find(|chem| chem.symbol == symbol)
}

/// One gas in a finalized atmosphere: a species and its share of the
/// surface pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmosphericConstituent {
    pub chemical: Chemical,
    /// Partial pressure in millibars
    pub partial_pressure: f64,
}
