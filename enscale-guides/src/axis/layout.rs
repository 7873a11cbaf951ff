use enscale_common::axis::AxisSpec;
use enscale_common::types::{AxisSide, ScaleType};
use enscale_scales::formatter::TickLabelFormatter;
use enscale_scales::ticks::{independent_ticks, ticks};
use enscale_units::{from_quantity, from_scaled, to_scaled, unit_title, RangeState};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::state::ChartState;
use crate::trace::ReferenceTrace;

use super::opts::AxisConfig;

/// Layout of a single axis. Tick values are Quantity-space positions shared
/// by every axis; tick text is expressed in the axis' own unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub anchor: String,
    /// Overlay id, `None` for the primary axis
    pub axis_id: Option<u32>,
    pub title: String,
    pub scale: ScaleType,
    /// Range in renderer coordinates (log10 of the bounds on a log axis)
    pub range: (f64, f64),
    pub side: AxisSide,
    pub offset: f64,
    pub independent: bool,
    pub tick_values: Vec<f64>,
    pub tick_text: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Quantity-space range shared by all axes
    pub range: (f64, f64),
    pub scale: ScaleType,
    /// Primary axis first, then overlays in list order
    pub axes: Vec<AxisLayout>,
    pub traces: Vec<ReferenceTrace>,
    pub margin_top: f64,
}

impl ChartLayout {
    pub fn primary(&self) -> Option<&AxisLayout> {
        self.axes.first()
    }

    pub fn overlays(&self) -> &[AxisLayout] {
        self.axes.get(1..).unwrap_or_default()
    }
}

fn anchor_name(index: usize) -> String {
    if index == 0 {
        "x".to_string()
    } else {
        format!("x{}", index + 1)
    }
}

fn renderer_range(range: &RangeState, scale: ScaleType) -> (f64, f64) {
    match (
        scale.renderer_coordinate(range.lower),
        scale.renderer_coordinate(range.upper),
    ) {
        (Some(lower), Some(upper)) => (lower, upper),
        _ => {
            log::warn!(
                "range [{}, {}] cannot be shown on a {scale} axis",
                range.lower,
                range.upper
            );
            (range.lower, range.upper)
        }
    }
}

/// Map ticks computed in `unit`'s scaled space back to Quantity space
fn scaled_to_quantity(unit: &str, prefix: &str, values: Vec<f64>) -> Vec<f64> {
    values
        .into_iter()
        .filter_map(|v| from_scaled(unit, prefix, v))
        .sorted_by(f64::total_cmp)
        .collect()
}

fn scaled_bounds(unit: &str, prefix: &str, range: &RangeState) -> Option<(f64, f64)> {
    Some((
        to_scaled(unit, prefix, range.lower)?,
        to_scaled(unit, prefix, range.upper)?,
    ))
}

/// Tick positions of the primary axis in Quantity space
fn primary_positions(state: &ChartState) -> Vec<f64> {
    let unit = &state.primary_unit;
    let prefix = &state.primary_prefix;
    let count = state.tick_count_hint();

    match scaled_bounds(unit, prefix, &state.range) {
        Some((lo, hi)) => scaled_to_quantity(unit, prefix, ticks(lo, hi, state.scale, count)),
        None => {
            log::warn!(
                "range [{}, {}] is not expressible in {prefix}{unit}, placing ticks in base units",
                state.range.lower,
                state.range.upper
            );
            ticks(state.range.lower, state.range.upper, state.scale, count)
        }
    }
}

/// Ticks of an overlay with its own cadence, in Quantity space
fn independent_positions(state: &ChartState, axis: &AxisSpec) -> Vec<f64> {
    match scaled_bounds(&axis.unit, &axis.prefix, &state.range) {
        Some((lo, hi)) => scaled_to_quantity(
            &axis.unit,
            &axis.prefix,
            independent_ticks(lo, hi, state.scale, state.tick_count_hint()),
        ),
        None => {
            log::debug!(
                "overlay {} has no ticks, range is not expressible in {}{}",
                axis.id,
                axis.prefix,
                axis.unit
            );
            Vec::new()
        }
    }
}

/// Label Quantity positions in `unit`, dropping positions with no value
fn label_positions(
    state: &ChartState,
    unit: &str,
    prefix: &str,
    positions: &[f64],
) -> (Vec<f64>, Vec<String>) {
    let formatter = TickLabelFormatter::new(unit, prefix, state.format);
    positions
        .iter()
        .filter_map(|&q| match from_quantity(unit, q) {
            Some(value) => Some((q, formatter.format(value))),
            None => {
                log::trace!("omitting tick at {q}, undefined in {unit}");
                None
            }
        })
        .unzip()
}

fn axis_title(state: &ChartState, unit: &str, prefix: &str) -> String {
    if state.show_axis_labels {
        unit_title(unit, prefix)
    } else {
        String::new()
    }
}

/// Compute the full multi-axis layout for `state`.
///
/// The primary axis sits at the bottom. Overlays are stacked above the plot,
/// each `config.axis_spacing` pixels further up, and either re-label the
/// primary tick positions or (with `independent_ticks`) carry their own.
pub fn build_layout(state: &ChartState, config: &AxisConfig) -> ChartLayout {
    let range = state.range;
    let scale = state.scale;
    let axis_range = renderer_range(&range, scale);

    let positions = primary_positions(state);
    let (tick_values, tick_text) = label_positions(
        state,
        &state.primary_unit,
        &state.primary_prefix,
        &positions,
    );

    let mut axes = vec![AxisLayout {
        anchor: anchor_name(0),
        axis_id: None,
        title: axis_title(state, &state.primary_unit, &state.primary_prefix),
        scale,
        range: axis_range,
        side: AxisSide::Bottom,
        offset: 0.0,
        independent: false,
        tick_values,
        tick_text,
    }];

    for (i, axis) in state.axes.iter().enumerate() {
        let overlay_positions = if state.independent_ticks {
            independent_positions(state, axis)
        } else {
            positions.clone()
        };
        let (tick_values, tick_text) =
            label_positions(state, &axis.unit, &axis.prefix, &overlay_positions);

        axes.push(AxisLayout {
            anchor: anchor_name(i + 1),
            axis_id: Some(axis.id),
            title: axis_title(state, &axis.unit, &axis.prefix),
            scale,
            range: axis_range,
            side: AxisSide::Top,
            offset: config.overlay_offset(i),
            independent: state.independent_ticks,
            tick_values,
            tick_text,
        });
    }

    let traces = axes
        .iter()
        .map(|axis| ReferenceTrace::new(axis.anchor.clone(), &range))
        .collect();

    log::debug!(
        "built layout with {} overlays on a {scale} axis over [{}, {}]",
        state.axes.len(),
        range.lower,
        range.upper
    );

    ChartLayout {
        range: (range.lower, range.upper),
        scale,
        axes,
        traces,
        margin_top: config.margin_top(state.axes.len()),
    }
}

#[cfg(test)]
mod tests {
    use enscale_common::axis::AxisList;
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_anchor_names() {
        assert_eq!(anchor_name(0), "x");
        assert_eq!(anchor_name(1), "x2");
        assert_eq!(anchor_name(4), "x5");
    }

    #[test]
    fn test_default_layout() {
        let layout = build_layout(&ChartState::default(), &AxisConfig::default());
        assert_eq!(layout.axes.len(), 2);
        assert_eq!(layout.traces.len(), 2);
        assert_eq!(layout.margin_top, 100.0);

        let primary = layout.primary().unwrap();
        assert_eq!(primary.anchor, "x");
        assert_eq!(primary.side, AxisSide::Bottom);
        assert_eq!(primary.tick_values.len(), 11);
        assert_eq!(primary.tick_text[0], "1.00e-25 J");
        assert_eq!(primary.tick_text[10], "1.00e-15 J");
        assert_approx_eq!(f64, primary.range.0, -25.0, epsilon = 1e-12);
        assert_approx_eq!(f64, primary.range.1, -15.0, epsilon = 1e-12);

        let overlay = &layout.overlays()[0];
        assert_eq!(overlay.anchor, "x2");
        assert_eq!(overlay.axis_id, Some(1));
        assert_eq!(overlay.side, AxisSide::Top);
        assert_eq!(overlay.offset, 0.0);
        assert_eq!(overlay.tick_values, primary.tick_values);
        assert!(overlay.tick_text[0].ends_with(" eV"));
    }

    #[test]
    fn test_titles_hidden() {
        let state = ChartState {
            show_axis_labels: false,
            ..Default::default()
        };
        let layout = build_layout(&state, &AxisConfig::default());
        assert!(layout.axes.iter().all(|axis| axis.title.is_empty()));
    }

    #[test]
    fn test_overlay_offsets_and_margin() {
        let mut axes = AxisList::default();
        axes.add("m", "n");
        axes.add("Hz", "T");
        let state = ChartState {
            axes,
            ..Default::default()
        };
        let config = AxisConfig {
            plot_height: 400.0,
            axis_spacing: 50.0,
            base_margin_top: 100.0,
        };
        let layout = build_layout(&state, &config);
        let offsets: Vec<f64> = layout.overlays().iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.125, 0.25]);
        assert_eq!(layout.margin_top, 200.0);
        assert_eq!(
            layout.traces.iter().map(|t| t.axis.as_str()).collect::<Vec<_>>(),
            vec!["x", "x2", "x3", "x4"]
        );
    }

    #[test]
    fn test_zero_plot_height_has_no_offset() {
        let mut axes = AxisList::default();
        axes.add_default();
        let state = ChartState {
            axes,
            ..Default::default()
        };
        let config = AxisConfig {
            plot_height: 0.0,
            ..Default::default()
        };
        let layout = build_layout(&state, &config);
        assert!(layout.overlays().iter().all(|a| a.offset == 0.0));
    }

    #[test]
    fn test_no_overlays() {
        let state = ChartState {
            axes: AxisList::empty(),
            ..Default::default()
        };
        let layout = build_layout(&state, &AxisConfig::default());
        assert_eq!(layout.axes.len(), 1);
        assert!(layout.overlays().is_empty());
        assert_eq!(layout.margin_top, 100.0);
    }

    #[test]
    fn test_wavelength_primary_ticks_are_ascending_in_energy() {
        let state = ChartState {
            range: RangeState::new(1e-20, 1e-18),
            primary_unit: "m".to_string(),
            primary_prefix: "n".to_string(),
            ..Default::default()
        };
        let layout = build_layout(&state, &AxisConfig::default());
        let primary = layout.primary().unwrap();
        assert!(primary.tick_values.windows(2).all(|w| w[0] < w[1]));
        assert!(primary.tick_text.iter().all(|t| t.ends_with(" nm")));
    }

    #[test]
    fn test_shared_ticks_drop_undefined_positions() {
        let state = ChartState {
            range: RangeState::new(-1e-19, 1e-19),
            scale: ScaleType::Linear,
            axes: AxisList::from_specs(vec![AxisSpec::new(1, "m", "")]),
            ..Default::default()
        };
        let layout = build_layout(&state, &AxisConfig::default());
        let primary = layout.primary().unwrap();
        let overlay = &layout.overlays()[0];

        assert_eq!(primary.tick_values.len(), 6);
        assert!(overlay.tick_values.iter().all(|q| *q > 0.0));
        assert_eq!(overlay.tick_values.len(), overlay.tick_text.len());
        assert!(overlay.tick_values.len() < primary.tick_values.len());
    }

    #[test]
    fn test_independent_overlay_without_valid_range_is_empty() {
        let state = ChartState {
            range: RangeState::new(-1e-19, 1e-19),
            scale: ScaleType::Linear,
            independent_ticks: true,
            axes: AxisList::from_specs(vec![AxisSpec::new(1, "m", "")]),
            ..Default::default()
        };
        let layout = build_layout(&state, &AxisConfig::default());
        let overlay = &layout.overlays()[0];
        assert!(overlay.independent);
        assert!(overlay.tick_values.is_empty());
        assert!(overlay.tick_text.is_empty());
    }

    #[test]
    fn test_primary_fallback_to_base_units() {
        // negative energies have no wavelength
        let state = ChartState {
            range: RangeState::new(-2e-19, 2e-19),
            primary_unit: "m".to_string(),
            scale: ScaleType::Linear,
            axes: AxisList::empty(),
            ..Default::default()
        };
        let layout = build_layout(&state, &AxisConfig::default());
        let primary = layout.primary().unwrap();
        assert!(!primary.tick_values.is_empty());
        assert!(primary.tick_values.iter().all(|q| *q > 0.0));
        assert_eq!(primary.tick_values.len(), primary.tick_text.len());
    }
}
