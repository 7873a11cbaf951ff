use serde::{Deserialize, Serialize};

/// Renderer geometry the layout builder needs to stack overlay axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Height of the plotting area in pixels
    pub plot_height: f64,
    /// Pixels between consecutive overlay axes
    pub axis_spacing: f64,
    /// Top margin reserved for the first overlay axis
    pub base_margin_top: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            plot_height: 440.0,
            axis_spacing: 56.0,
            base_margin_top: 100.0,
        }
    }
}

impl AxisConfig {
    /// Offset of the overlay at `index`, as a fraction of the plot height
    /// above the plot's top edge
    pub fn overlay_offset(&self, index: usize) -> f64 {
        if !(self.plot_height > 0.0) || !self.plot_height.is_finite() {
            return 0.0;
        }
        index as f64 * self.axis_spacing / self.plot_height
    }

    /// Top margin needed to fit `overlays` stacked axes
    pub fn margin_top(&self, overlays: usize) -> f64 {
        self.base_margin_top + overlays.saturating_sub(1) as f64 * self.axis_spacing
    }
}
