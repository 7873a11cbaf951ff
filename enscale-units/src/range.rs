use enscale_common::types::ScaleType;
use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::registry::{from_scaled, to_scaled};

/// Plotted range, always held in Quantity space with `lower <= upper`.
/// Edits in any unit recompute both bounds together. Deserialized bounds go
/// through [`RangeState::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct RangeState {
    pub lower: f64,
    pub upper: f64,
}

#[derive(Deserialize)]
struct RawRange {
    lower: f64,
    upper: f64,
}

impl TryFrom<RawRange> for RangeState {
    type Error = RangeError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        RangeState::try_new(raw.lower, raw.upper)
    }
}

impl Default for RangeState {
    fn default() -> Self {
        Self {
            lower: 1e-25,
            upper: 1e-15,
        }
    }
}

/// The current range as shown in the primary unit's editing controls.
/// In log mode every value is a base-10 exponent of the scaled value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeInputs {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub center: Option<f64>,
    pub span: Option<f64>,
}

impl RangeState {
    /// Build a range from two Quantity bounds in either order
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lower: a, upper: b }
        } else {
            Self { lower: b, upper: a }
        }
    }

    pub fn try_new(a: f64, b: f64) -> Result<Self, RangeError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(RangeError::NonFinite(a, b));
        }
        Ok(Self::new(a, b))
    }

    /// Range from bounds typed in the primary unit. In log mode `min` and
    /// `max` are exponents.
    pub fn from_min_max(
        unit: &str,
        prefix: &str,
        scale: ScaleType,
        min: f64,
        max: f64,
    ) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::NonFinite(min, max));
        }
        let lower = scaled_input_to_quantity(unit, prefix, scale, min)?;
        let upper = scaled_input_to_quantity(unit, prefix, scale, max)?;
        Self::try_new(lower, upper)
    }

    /// Range from a center and a full span typed in the primary unit
    pub fn from_center_span(
        unit: &str,
        prefix: &str,
        scale: ScaleType,
        center: f64,
        span: f64,
    ) -> Result<Self, RangeError> {
        if !center.is_finite() || !span.is_finite() {
            return Err(RangeError::NonFinite(center, span));
        }
        Self::from_min_max(unit, prefix, scale, center - span / 2.0, center + span / 2.0)
    }

    /// Express the range in the primary unit for editing controls
    pub fn inputs(&self, unit: &str, prefix: &str, scale: ScaleType) -> RangeInputs {
        let a = to_scaled(unit, prefix, self.lower);
        let b = to_scaled(unit, prefix, self.upper);

        // Reciprocal units reverse the ordering
        let (min, max) = match (a, b) {
            (Some(a), Some(b)) if b < a => (Some(b), Some(a)),
            other => other,
        };

        let (min, max) = if scale.is_log() {
            (
                min.filter(|v| *v > 0.0).map(f64::log10),
                max.filter(|v| *v > 0.0).map(f64::log10),
            )
        } else {
            (min, max)
        };

        let (center, span) = match (min, max) {
            (Some(min), Some(max)) => (Some((min + max) / 2.0), Some(max - min)),
            _ => (None, None),
        };

        RangeInputs {
            min,
            max,
            center,
            span,
        }
    }
}

fn scaled_input_to_quantity(
    unit: &str,
    prefix: &str,
    scale: ScaleType,
    input: f64,
) -> Result<f64, RangeError> {
    let scaled = match scale {
        ScaleType::Log10 => 10f64.powf(input),
        ScaleType::Linear => input,
    };
    from_scaled(unit, prefix, scaled).ok_or_else(|| {
        log::debug!("rejecting range bound {scaled} {prefix}{unit}");
        RangeError::UndefinedConversion {
            unit: unit.to_string(),
            value: scaled,
        }
    })
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_range() {
        let range = RangeState::default();
        assert_eq!((range.lower, range.upper), (1e-25, 1e-15));
    }

    #[test]
    fn test_new_orders_bounds() {
        let range = RangeState::new(5.0, 2.0);
        assert_eq!((range.lower, range.upper), (2.0, 5.0));
        assert!(RangeState::try_new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_deserialize_orders_bounds() {
        let range: RangeState =
            serde_json::from_str(r#"{"lower": 1e-15, "upper": 1e-25}"#).unwrap();
        assert_eq!((range.lower, range.upper), (1e-25, 1e-15));

        assert!(serde_json::from_str::<RangeState>(r#"{"lower": 1.0}"#).is_err());
    }

    #[test]
    fn test_from_min_max_log_exponents() {
        // 10^0 .. 10^3 eV
        let range = RangeState::from_min_max("eV", "", ScaleType::Log10, 0.0, 3.0).unwrap();
        assert_approx_eq!(f64, range.lower, 1.602176634e-19, ulps = 2);
        assert_approx_eq!(f64, range.upper, 1.602176634e-16, ulps = 4);
    }

    #[test]
    fn test_from_min_max_linear_with_prefix() {
        let range = RangeState::from_min_max("eV", "k", ScaleType::Linear, 1.0, 2.0).unwrap();
        assert_approx_eq!(f64, range.lower, 1.602176634e-16, ulps = 4);
        assert_approx_eq!(f64, range.upper, 3.204353268e-16, ulps = 4);
    }

    #[test]
    fn test_wavelength_bounds_are_reordered() {
        let range = RangeState::from_min_max("m", "n", ScaleType::Linear, 400.0, 700.0).unwrap();
        assert!(range.lower < range.upper);

        let inputs = range.inputs("m", "n", ScaleType::Linear);
        assert!((inputs.min.unwrap() - 400.0).abs() < 1e-9);
        assert!((inputs.max.unwrap() - 700.0).abs() < 1e-9);
        assert!((inputs.center.unwrap() - 550.0).abs() < 1e-9);
        assert!((inputs.span.unwrap() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_undefined_conversion_is_rejected() {
        let err = RangeState::from_min_max("m", "", ScaleType::Linear, -1.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            RangeError::UndefinedConversion {
                unit: "m".to_string(),
                value: -1.0
            }
        );

        let err = RangeState::from_min_max("furlong", "", ScaleType::Linear, 1.0, 2.0);
        assert!(err.is_err());
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let err = RangeState::from_center_span("J", "", ScaleType::Log10, f64::NAN, 2.0);
        assert!(matches!(err, Err(RangeError::NonFinite(_, _))));
    }

    #[test]
    fn test_center_span_log() {
        let range = RangeState::from_center_span("J", "", ScaleType::Log10, -20.0, 10.0).unwrap();
        assert_approx_eq!(f64, range.lower, 1e-25, epsilon = 1e-35);
        assert_approx_eq!(f64, range.upper, 1e-15, epsilon = 1e-25);

        let inputs = range.inputs("J", "", ScaleType::Log10);
        assert_approx_eq!(f64, inputs.center.unwrap(), -20.0, epsilon = 1e-9);
        assert_approx_eq!(f64, inputs.span.unwrap(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inputs_omit_unrepresentable_values() {
        let range = RangeState::new(-1.0, 1.0);
        let inputs = range.inputs("J", "", ScaleType::Log10);
        assert_eq!(inputs.min, None);
        assert_eq!(inputs.max, Some(0.0));
        assert_eq!(inputs.center, None);
        assert_eq!(inputs.span, None);

        let inputs = range.inputs("m", "", ScaleType::Linear);
        assert_eq!(inputs.min, None);
        assert_eq!(inputs.span, None);
    }
}
