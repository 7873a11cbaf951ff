//! Conversion table between the base Quantity (joules) and every supported
//! unit.
//!
//! Each unit maps through a [`Conversion`], either a plain scale factor or a
//! reciprocal relationship such as `E = h c / λ`. Reciprocal conversions are
//! only defined for strictly positive input; outside that domain both
//! directions return `None` rather than an infinite or NaN value.
use std::f64::consts::PI;
use std::str::FromStr;

use strum::{EnumIter, EnumString, IntoEnumIterator};

use crate::constants::{
    BOLTZMANN, BTU, CALORIE, ELECTRONVOLT, ERG, PLANCK, SPEED_OF_LIGHT, TONNE_TNT, WATT_HOUR,
};
use crate::prefix::{prefix_factor, prefix_symbol};

/// Bidirectional mapping between Quantity space and a unit's own space
pub trait UnitConversion {
    /// Map a unit-space value into Quantity space
    fn to_quantity(&self, value: f64) -> Option<f64>;

    /// Map a Quantity into unit space
    fn from_quantity(&self, quantity: f64) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// `quantity = value * factor`
    Scale { factor: f64 },
    /// `quantity = numerator / value`, positive values only
    Reciprocal { numerator: f64 },
}

impl UnitConversion for Conversion {
    fn to_quantity(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let quantity = match self {
            Conversion::Scale { factor } => value * factor,
            Conversion::Reciprocal { numerator } => {
                if value <= 0.0 {
                    return None;
                }
                numerator / value
            }
        };
        quantity.is_finite().then_some(quantity)
    }

    fn from_quantity(&self, quantity: f64) -> Option<f64> {
        if !quantity.is_finite() {
            return None;
        }
        let value = match self {
            Conversion::Scale { factor } => quantity / factor,
            Conversion::Reciprocal { numerator } => {
                if quantity <= 0.0 {
                    return None;
                }
                numerator / quantity
            }
        };
        value.is_finite().then_some(value)
    }
}

/// Identifiers of the supported units, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter)]
pub enum UnitKind {
    #[strum(serialize = "eV")]
    Electronvolt,
    #[strum(serialize = "Hz")]
    Hertz,
    #[strum(serialize = "K")]
    Kelvin,
    #[strum(serialize = "J")]
    Joule,
    #[strum(serialize = "m")]
    Wavelength,
    #[strum(serialize = "m^-1")]
    Wavenumber,
    #[strum(serialize = "rad/m")]
    AngularWavenumber,
    #[strum(serialize = "erg")]
    Erg,
    #[strum(serialize = "kg")]
    Mass,
    #[strum(serialize = "s")]
    Period,
    #[strum(serialize = "Wh")]
    WattHour,
    #[strum(serialize = "Ws")]
    WattSecond,
    #[strum(serialize = "cal")]
    Calorie,
    #[strum(serialize = "BTU")]
    Btu,
    #[strum(serialize = "tTNT")]
    TonneTnt,
}

impl UnitKind {
    pub fn parse(id: &str) -> Option<UnitKind> {
        UnitKind::from_str(id.trim()).ok()
    }

    pub fn definition(&self) -> &'static UnitDefinition {
        match self {
            UnitKind::Electronvolt => &ELECTRONVOLT_UNIT,
            UnitKind::Hertz => &HERTZ_UNIT,
            UnitKind::Kelvin => &KELVIN_UNIT,
            UnitKind::Joule => &JOULE_UNIT,
            UnitKind::Wavelength => &WAVELENGTH_UNIT,
            UnitKind::Wavenumber => &WAVENUMBER_UNIT,
            UnitKind::AngularWavenumber => &ANGULAR_WAVENUMBER_UNIT,
            UnitKind::Erg => &ERG_UNIT,
            UnitKind::Mass => &MASS_UNIT,
            UnitKind::Period => &PERIOD_UNIT,
            UnitKind::WattHour => &WATT_HOUR_UNIT,
            UnitKind::WattSecond => &WATT_SECOND_UNIT,
            UnitKind::Calorie => &CALORIE_UNIT,
            UnitKind::Btu => &BTU_UNIT,
            UnitKind::TonneTnt => &TONNE_TNT_UNIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitDefinition {
    /// Identifier used for lookup
    pub id: &'static str,
    /// Symbol shown in tick labels and titles
    pub symbol: &'static str,
    /// Human readable label for unit pickers
    pub label: &'static str,
    /// Physical quantity measured by the unit, used in axis titles
    pub quantity: &'static str,
    pub conversion: Conversion,
}

impl UnitDefinition {
    pub fn is_reciprocal(&self) -> bool {
        matches!(self.conversion, Conversion::Reciprocal { .. })
    }
}

impl UnitConversion for UnitDefinition {
    fn to_quantity(&self, value: f64) -> Option<f64> {
        self.conversion.to_quantity(value)
    }

    fn from_quantity(&self, quantity: f64) -> Option<f64> {
        self.conversion.from_quantity(quantity)
    }
}

const fn scale(factor: f64) -> Conversion {
    Conversion::Scale { factor }
}

static ELECTRONVOLT_UNIT: UnitDefinition = UnitDefinition {
    id: "eV",
    symbol: "eV",
    label: "eV (electronvolt)",
    quantity: "Energy",
    conversion: scale(ELECTRONVOLT),
};

static HERTZ_UNIT: UnitDefinition = UnitDefinition {
    id: "Hz",
    symbol: "Hz",
    label: "Hz (hertz)",
    quantity: "Frequency",
    conversion: scale(PLANCK),
};

static KELVIN_UNIT: UnitDefinition = UnitDefinition {
    id: "K",
    symbol: "K",
    label: "K (kelvin)",
    quantity: "Temperature",
    conversion: scale(BOLTZMANN),
};

static JOULE_UNIT: UnitDefinition = UnitDefinition {
    id: "J",
    symbol: "J",
    label: "J (joule)",
    quantity: "Energy",
    conversion: scale(1.0),
};

static WAVELENGTH_UNIT: UnitDefinition = UnitDefinition {
    id: "m",
    symbol: "m",
    label: "m (wavelength)",
    quantity: "Wavelength",
    conversion: Conversion::Reciprocal {
        numerator: PLANCK * SPEED_OF_LIGHT,
    },
};

static WAVENUMBER_UNIT: UnitDefinition = UnitDefinition {
    id: "m^-1",
    symbol: "m⁻¹",
    label: "m⁻¹ (wavenumber)",
    quantity: "Wavenumber",
    conversion: scale(PLANCK * SPEED_OF_LIGHT),
};

static ANGULAR_WAVENUMBER_UNIT: UnitDefinition = UnitDefinition {
    id: "rad/m",
    symbol: "rad/m",
    label: "rad/m (ang. wavenumber)",
    quantity: "Angular wavenumber",
    conversion: scale(PLANCK * SPEED_OF_LIGHT / (2.0 * PI)),
};

static ERG_UNIT: UnitDefinition = UnitDefinition {
    id: "erg",
    symbol: "erg",
    label: "erg (cgs)",
    quantity: "Energy",
    conversion: scale(ERG),
};

static MASS_UNIT: UnitDefinition = UnitDefinition {
    id: "kg",
    symbol: "kg",
    label: "kg (mass)",
    quantity: "Mass",
    conversion: scale(SPEED_OF_LIGHT * SPEED_OF_LIGHT),
};

static PERIOD_UNIT: UnitDefinition = UnitDefinition {
    id: "s",
    symbol: "s",
    label: "s (time)",
    quantity: "Time",
    conversion: Conversion::Reciprocal { numerator: PLANCK },
};

static WATT_HOUR_UNIT: UnitDefinition = UnitDefinition {
    id: "Wh",
    symbol: "Wh",
    label: "Wh (watt-hour)",
    quantity: "Energy",
    conversion: scale(WATT_HOUR),
};

static WATT_SECOND_UNIT: UnitDefinition = UnitDefinition {
    id: "Ws",
    symbol: "Ws",
    label: "Ws (watt-second)",
    quantity: "Energy",
    conversion: scale(1.0),
};

static CALORIE_UNIT: UnitDefinition = UnitDefinition {
    id: "cal",
    symbol: "cal",
    label: "cal (calorie)",
    quantity: "Energy",
    conversion: scale(CALORIE),
};

static BTU_UNIT: UnitDefinition = UnitDefinition {
    id: "BTU",
    symbol: "BTU",
    label: "BTU (British thermal unit)",
    quantity: "Energy",
    conversion: scale(BTU),
};

static TONNE_TNT_UNIT: UnitDefinition = UnitDefinition {
    id: "tTNT",
    symbol: "t TNT",
    label: "t TNT (tonne TNT)",
    quantity: "Energy",
    conversion: scale(TONNE_TNT),
};

/// Look up a unit by identifier
pub fn lookup(unit: &str) -> Option<&'static UnitDefinition> {
    UnitKind::parse(unit).map(|kind| kind.definition())
}

/// Every supported unit, in display order
pub fn units() -> impl Iterator<Item = &'static UnitDefinition> {
    UnitKind::iter().map(|kind| kind.definition())
}

/// Convert a unit-space value to Quantity space. Unknown units and values
/// outside the unit's domain are `None`.
pub fn to_quantity(unit: &str, value: f64) -> Option<f64> {
    lookup(unit)?.to_quantity(value)
}

/// Convert a Quantity into a unit's own space
pub fn from_quantity(unit: &str, quantity: f64) -> Option<f64> {
    lookup(unit)?.from_quantity(quantity)
}

/// Quantity to prefixed display value, e.g. joules to nanometres
pub fn to_scaled(unit: &str, prefix: &str, quantity: f64) -> Option<f64> {
    let scaled = from_quantity(unit, quantity)? / prefix_factor(prefix);
    scaled.is_finite().then_some(scaled)
}

/// Prefixed display value back to a Quantity
pub fn from_scaled(unit: &str, prefix: &str, scaled: f64) -> Option<f64> {
    to_quantity(unit, scaled * prefix_factor(prefix))
}

/// Display symbol for a unit. Unknown identifiers are echoed verbatim.
pub fn unit_symbol(unit: &str) -> &str {
    lookup(unit).map(|def| def.symbol).unwrap_or(unit)
}

/// Prefixed display symbol, e.g. `nm` or `THz`
pub fn prefixed_symbol(unit: &str, prefix: &str) -> String {
    format!("{}{}", prefix_symbol(prefix), unit_symbol(unit))
}

/// Axis title such as `Wavelength (nm)`. Unknown units are echoed verbatim.
pub fn unit_title(unit: &str, prefix: &str) -> String {
    match lookup(unit) {
        Some(def) => format!("{} ({})", def.quantity, prefixed_symbol(unit, prefix)),
        None => unit.to_string(),
    }
}
