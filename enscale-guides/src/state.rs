use enscale_common::axis::AxisList;
use enscale_common::types::ScaleType;
use enscale_scales::formatter::FormatOptions;
use enscale_scales::ticks::MAX_TICK_COUNT;
use enscale_units::error::RangeError;
use enscale_units::{RangeInputs, RangeState};
use serde::{Deserialize, Serialize};

/// Everything a chart layout is computed from. Owned by the caller and
/// passed explicitly to [`crate::build_layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartState {
    pub range: RangeState,
    pub primary_unit: String,
    pub primary_prefix: String,
    pub scale: ScaleType,
    pub axes: AxisList,
    /// Give every overlay its own tick cadence instead of the primary's
    pub independent_ticks: bool,
    /// Linear tick count hint, 0 for the default
    pub independent_tick_count: usize,
    /// Show axis titles
    pub show_axis_labels: bool,
    pub format: FormatOptions,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            range: RangeState::default(),
            primary_unit: "J".to_string(),
            primary_prefix: String::new(),
            scale: ScaleType::Log10,
            axes: AxisList::default(),
            independent_ticks: false,
            independent_tick_count: 0,
            show_axis_labels: true,
            format: FormatOptions::default(),
        }
    }
}

impl ChartState {
    pub fn tick_count_hint(&self) -> Option<usize> {
        (self.independent_tick_count > 0).then_some(self.independent_tick_count)
    }

    /// Set the tick count from a raw control value. Negative and non-finite
    /// input means "default", counts above [`MAX_TICK_COUNT`] are clamped.
    pub fn set_independent_tick_count(&mut self, count: f64) {
        self.independent_tick_count = if count.is_finite() && count >= 0.0 {
            count.floor().min(MAX_TICK_COUNT as f64) as usize
        } else {
            0
        };
    }

    pub fn set_decimals(&mut self, decimals: i64) {
        self.format = self.format.with_decimals(decimals);
    }

    /// Replace the range from bounds typed in the primary unit
    pub fn set_range_min_max(&mut self, min: f64, max: f64) -> Result<(), RangeError> {
        self.range = RangeState::from_min_max(
            &self.primary_unit,
            &self.primary_prefix,
            self.scale,
            min,
            max,
        )?;
        Ok(())
    }

    /// Replace the range from a center and span typed in the primary unit
    pub fn set_range_center_span(&mut self, center: f64, span: f64) -> Result<(), RangeError> {
        self.range = RangeState::from_center_span(
            &self.primary_unit,
            &self.primary_prefix,
            self.scale,
            center,
            span,
        )?;
        Ok(())
    }

    /// Current range in the primary unit for editing controls
    pub fn range_inputs(&self) -> RangeInputs {
        self.range
            .inputs(&self.primary_unit, &self.primary_prefix, self.scale)
    }
}
