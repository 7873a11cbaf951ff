use std::str::FromStr;

use strum::{EnumIter, EnumString, IntoEnumIterator};

/// Metric prefixes offered for display scaling. Prefixes only change how a
/// unit-space value is shown, never the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter)]
pub enum Prefix {
    #[strum(serialize = "", serialize = "none")]
    None,
    #[strum(serialize = "Z", serialize = "zetta")]
    Zetta,
    #[strum(serialize = "E", serialize = "exa")]
    Exa,
    #[strum(serialize = "P", serialize = "peta")]
    Peta,
    #[strum(serialize = "T", serialize = "tera")]
    Tera,
    #[strum(serialize = "G", serialize = "giga")]
    Giga,
    #[strum(serialize = "M", serialize = "mega")]
    Mega,
    #[strum(serialize = "k", serialize = "kilo")]
    Kilo,
    #[strum(serialize = "c", serialize = "centi")]
    Centi,
    #[strum(serialize = "m", serialize = "milli")]
    Milli,
    // Both micro sign and greek mu are accepted, as is a plain "u".
    #[strum(serialize = "µ", serialize = "μ", serialize = "u", serialize = "micro")]
    Micro,
    #[strum(serialize = "n", serialize = "nano")]
    Nano,
    #[strum(serialize = "p", serialize = "pico")]
    Pico,
    #[strum(serialize = "f", serialize = "femto")]
    Femto,
}

impl Prefix {
    /// Parse a prefix symbol or name, `None` if it is not recognised
    pub fn parse(s: &str) -> Option<Prefix> {
        Prefix::from_str(s.trim()).ok()
    }

    pub fn exponent(&self) -> i32 {
        match self {
            Prefix::None => 0,
            Prefix::Zetta => 21,
            Prefix::Exa => 18,
            Prefix::Peta => 15,
            Prefix::Tera => 12,
            Prefix::Giga => 9,
            Prefix::Mega => 6,
            Prefix::Kilo => 3,
            Prefix::Centi => -2,
            Prefix::Milli => -3,
            Prefix::Micro => -6,
            Prefix::Nano => -9,
            Prefix::Pico => -12,
            Prefix::Femto => -15,
        }
    }

    pub fn factor(&self) -> f64 {
        10f64.powi(self.exponent())
    }

    /// Symbol placed in front of a unit symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Prefix::None => "",
            Prefix::Zetta => "Z",
            Prefix::Exa => "E",
            Prefix::Peta => "P",
            Prefix::Tera => "T",
            Prefix::Giga => "G",
            Prefix::Mega => "M",
            Prefix::Kilo => "k",
            Prefix::Centi => "c",
            Prefix::Milli => "m",
            Prefix::Micro => "µ",
            Prefix::Nano => "n",
            Prefix::Pico => "p",
            Prefix::Femto => "f",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Prefix::None => "(none)",
            Prefix::Zetta => "zetta",
            Prefix::Exa => "exa",
            Prefix::Peta => "peta",
            Prefix::Tera => "tera",
            Prefix::Giga => "giga",
            Prefix::Mega => "mega",
            Prefix::Kilo => "kilo",
            Prefix::Centi => "centi",
            Prefix::Milli => "milli",
            Prefix::Micro => "micro",
            Prefix::Nano => "nano",
            Prefix::Pico => "pico",
            Prefix::Femto => "femto",
        }
    }

    /// All prefixes, largest first
    pub fn all() -> impl Iterator<Item = Prefix> {
        Prefix::iter()
    }
}

/// Multiplicative factor of a prefix identifier. Anything unrecognised
/// is treated as no prefix.
pub fn prefix_factor(prefix: &str) -> f64 {
    Prefix::parse(prefix).map(|p| p.factor()).unwrap_or(1.0)
}

/// Display symbol for a prefix identifier. Unrecognised identifiers are
/// dropped, matching their factor of 1.
pub fn prefix_symbol(prefix: &str) -> &'static str {
    Prefix::parse(prefix).map(|p| p.symbol()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", 1.0)]
    #[case("Z", 1e21)]
    #[case("k", 1e3)]
    #[case("kilo", 1e3)]
    #[case("M", 1e6)]
    #[case("m", 1e-3)]
    #[case("c", 1e-2)]
    #[case("µ", 1e-6)]
    #[case("μ", 1e-6)]
    #[case("u", 1e-6)]
    #[case("n", 1e-9)]
    #[case("f", 1e-15)]
    fn test_prefix_factor(#[case] prefix: &str, #[case] expected: f64) {
        assert_approx_eq!(f64, prefix_factor(prefix), expected, ulps = 2);
    }

    #[rstest]
    #[case("x")]
    #[case("KILO")]
    #[case("da")]
    #[case("  ")]
    fn test_unknown_prefix_is_identity(#[case] prefix: &str) {
        assert_eq!(prefix_factor(prefix), 1.0);
        assert_eq!(prefix_symbol(prefix), "");
    }

    #[test]
    fn test_symbols_round_trip() {
        for prefix in Prefix::all() {
            assert_eq!(Prefix::parse(prefix.symbol()), Some(prefix));
        }
    }

    #[test]
    fn test_all_is_ordered_largest_first() {
        let exponents: Vec<i32> = Prefix::all().map(|p| p.exponent()).collect();
        assert_eq!(exponents.first(), Some(&0));
        let scaled = &exponents[1..];
        assert!(scaled.windows(2).all(|w| w[0] > w[1]));
    }
}
