//! Exact SI defining constants used by the conversion table.

/// Planck constant [J s]
pub const PLANCK: f64 = 6.62607015e-34;

/// Speed of light in vacuum [m/s]
pub const SPEED_OF_LIGHT: f64 = 299792458.0;

/// Boltzmann constant [J/K]
pub const BOLTZMANN: f64 = 1.380649e-23;

/// One electronvolt [J]
pub const ELECTRONVOLT: f64 = 1.602176634e-19;

/// One erg [J]
pub const ERG: f64 = 1e-7;

/// One watt-hour [J]
pub const WATT_HOUR: f64 = 3600.0;

/// Thermochemical calorie [J]
pub const CALORIE: f64 = 4.184;

/// International Table British thermal unit [J]
pub const BTU: f64 = 1055.05585262;

/// One tonne of TNT equivalent [J]
pub const TONNE_TNT: f64 = 4.184e9;
