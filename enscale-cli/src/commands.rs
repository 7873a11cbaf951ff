use std::fs;
use std::path::Path;

use enscale_common::types::ScaleType;
use enscale_guides::{build_layout, AxisConfig, ChartState};
use enscale_scales::ticks::{independent_ticks, ticks};
use enscale_units::{from_scaled, lookup, to_scaled, units, Prefix};

use crate::error::CliError;

/// Load chart state from a JSON file, or the defaults when no file is given
pub fn load_state(path: Option<&Path>) -> Result<ChartState, CliError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let state = serde_json::from_str(&content)?;
            log::info!("loaded chart state from {}", path.display());
            Ok(state)
        }
        None => Ok(ChartState::default()),
    }
}

pub fn layout_json(
    state: &ChartState,
    config: &AxisConfig,
    compact: bool,
) -> Result<String, CliError> {
    let layout = build_layout(state, config);
    let json = if compact {
        serde_json::to_string(&layout)?
    } else {
        serde_json::to_string_pretty(&layout)?
    };
    Ok(json)
}

fn check_unit(unit: &str) -> Result<(), CliError> {
    lookup(unit)
        .map(|_| ())
        .ok_or_else(|| CliError::UnknownUnit(unit.to_string()))
}

fn check_prefix(prefix: &str) -> Result<(), CliError> {
    Prefix::parse(prefix)
        .map(|_| ())
        .ok_or_else(|| CliError::UnknownPrefix(prefix.to_string()))
}

/// Convert a prefixed value between two units through the base quantity
pub fn convert(
    value: f64,
    from: &str,
    from_prefix: &str,
    to: &str,
    to_prefix: &str,
) -> Result<f64, CliError> {
    check_unit(from)?;
    check_unit(to)?;
    check_prefix(from_prefix)?;
    check_prefix(to_prefix)?;

    let quantity =
        from_scaled(from, from_prefix, value).ok_or_else(|| CliError::UndefinedConversion {
            unit: format!("{from_prefix}{from}"),
            value,
        })?;
    to_scaled(to, to_prefix, quantity).ok_or_else(|| CliError::UndefinedConversion {
        unit: format!("{to_prefix}{to}"),
        value,
    })
}

pub fn tick_values(
    lo: f64,
    hi: f64,
    scale: ScaleType,
    count: Option<usize>,
    independent: bool,
) -> Vec<f64> {
    if independent {
        independent_ticks(lo, hi, scale, count)
    } else {
        ticks(lo, hi, scale, count)
    }
}

/// One line per unit followed by one line per prefix
pub fn unit_lines() -> Vec<String> {
    let units = units().map(|def| {
        let kind = if def.is_reciprocal() { "reciprocal" } else { "linear" };
        format!("{:<6} {:<6} {:<28} {kind}", def.id, def.symbol, def.label)
    });
    let prefixes = Prefix::all()
        .filter(|p| *p != Prefix::None)
        .map(|p| format!("{:<6} {:<6} 1e{}", p.symbol(), p.name(), p.exponent()));
    units.chain(prefixes).collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_convert_electronvolt_to_nanometres() {
        let nm = convert(1.0, "eV", "", "m", "n").unwrap();
        assert_approx_eq!(f64, nm, 1239.841984, epsilon = 1e-5);
    }

    #[test]
    fn test_convert_errors() {
        assert!(matches!(
            convert(1.0, "furlong", "", "J", ""),
            Err(CliError::UnknownUnit(_))
        ));
        assert!(matches!(
            convert(1.0, "J", "x", "J", ""),
            Err(CliError::UnknownPrefix(_))
        ));
        assert!(matches!(
            convert(-1.0, "m", "", "J", ""),
            Err(CliError::UndefinedConversion { .. })
        ));
    }

    #[test]
    fn test_tick_values() {
        assert_eq!(tick_values(1.0, 1000.0, ScaleType::Log10, None, false).len(), 4);
        assert_eq!(tick_values(1.0, 1000.0, ScaleType::Log10, None, true), vec![10.0, 100.0]);
    }

    #[test]
    fn test_unit_lines() {
        let lines = unit_lines();
        assert_eq!(lines.len(), units().count() + Prefix::all().count() - 1);
        assert!(lines[0].starts_with("eV"));
        assert!(lines.iter().any(|l| l.starts_with("m ") && l.ends_with("reciprocal")));
    }

    #[test]
    fn test_default_layout_json() {
        let json = layout_json(&ChartState::default(), &AxisConfig::default(), true).unwrap();
        assert!(json.starts_with('{'));
        assert!(!json.contains('\n'));
        assert!(json.contains("\"anchor\":\"x2\""));
    }
}
