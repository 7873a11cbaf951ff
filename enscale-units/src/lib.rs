pub mod constants;
pub mod error;
pub mod prefix;
pub mod range;
pub mod registry;

pub use prefix::{prefix_factor, prefix_symbol, Prefix};
pub use range::{RangeInputs, RangeState};
pub use registry::{
    from_quantity, from_scaled, lookup, prefixed_symbol, to_quantity, to_scaled, unit_symbol,
    unit_title, units, Conversion, UnitConversion, UnitDefinition, UnitKind,
};
