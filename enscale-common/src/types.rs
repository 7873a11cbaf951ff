#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Scale mode shared by every axis of a chart
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum ScaleType {
    #[default]
    #[strum(to_string = "log10", serialize = "log")]
    #[cfg_attr(feature = "serde", serde(alias = "log"))]
    Log10,
    Linear,
}

impl ScaleType {
    pub fn is_log(&self) -> bool {
        matches!(self, ScaleType::Log10)
    }

    /// Map a Quantity-space bound into the coordinate the renderer expects
    /// for its axis range (exponents for log axes). Non-positive values have
    /// no log coordinate.
    pub fn renderer_coordinate(&self, value: f64) -> Option<f64> {
        match self {
            ScaleType::Log10 if value > 0.0 && value.is_finite() => Some(value.log10()),
            ScaleType::Log10 => None,
            ScaleType::Linear if value.is_finite() => Some(value),
            ScaleType::Linear => None,
        }
    }
}

/// Edge of the plot an axis is drawn against
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum AxisSide {
    #[default]
    Bottom,
    Top,
}
