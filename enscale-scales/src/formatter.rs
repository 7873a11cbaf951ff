use enscale_units::{prefix_factor, prefixed_symbol};
use serde::{Deserialize, Serialize};

/// Largest number of mantissa digits a label may carry
pub const MAX_DECIMALS: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Append the prefixed unit symbol to every label
    pub include_units: bool,
    /// Mantissa digits after the decimal point, at most [`MAX_DECIMALS`]
    pub decimals: u8,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_units: true,
            decimals: 2,
        }
    }
}

impl FormatOptions {
    pub fn with_decimals(mut self, decimals: i64) -> Self {
        self.decimals = decimals.clamp(0, MAX_DECIMALS as i64) as u8;
        self
    }

    pub fn with_units(mut self, include_units: bool) -> Self {
        self.include_units = include_units;
        self
    }

    /// Decimals actually used, clamped in case the field was set directly
    pub fn decimals(&self) -> usize {
        self.decimals.min(MAX_DECIMALS) as usize
    }
}

/// Scientific notation with a signed exponent of at least two digits,
/// e.g. `3.20e-17` or `1.0e+03`.
pub fn format_exponential(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*e}", decimals, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}

/// Render a unit-space value as a tick label in prefixed units.
///
/// `value` is divided by the prefix factor first, so `3.2e-2 eV` with the
/// `m` prefix reads `3.20e+01 meV`. Zero and non-finite values are echoed
/// as-is without a unit.
pub fn format_tick_label(unit: &str, value: f64, prefix: &str, options: &FormatOptions) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let number = format_exponential(value / prefix_factor(prefix), options.decimals());
    if options.include_units {
        format!("{number} {}", prefixed_symbol(unit, prefix))
    } else {
        number
    }
}

/// Formats tick labels for one axis
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabelFormatter<'a> {
    pub unit: &'a str,
    pub prefix: &'a str,
    pub options: FormatOptions,
}

impl<'a> TickLabelFormatter<'a> {
    pub fn new(unit: &'a str, prefix: &'a str, options: FormatOptions) -> Self {
        Self {
            unit,
            prefix,
            options,
        }
    }

    pub fn format(&self, value: f64) -> String {
        format_tick_label(self.unit, value, self.prefix, &self.options)
    }

    pub fn format_all(&self, values: &[f64]) -> Vec<String> {
        values.iter().map(|v| self.format(*v)).collect()
    }
}
