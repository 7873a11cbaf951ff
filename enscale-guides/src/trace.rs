use enscale_units::RangeState;
use serde::{Deserialize, Serialize};

/// Invisible two-point trace bound to one axis so the renderer keeps that
/// axis alive and spanning the shared range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTrace {
    /// Anchor of the axis this trace belongs to, e.g. `x2`
    pub axis: String,
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub opacity: f64,
    pub show_legend: bool,
}

impl ReferenceTrace {
    pub fn new(axis: impl Into<String>, range: &RangeState) -> Self {
        Self {
            axis: axis.into(),
            x: [range.lower, range.upper],
            y: [0.0, 0.0],
            opacity: 0.0,
            show_legend: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_trace_spans_range() {
        let trace = ReferenceTrace::new("x3", &RangeState::new(2.0, 1.0));
        assert_eq!(trace.axis, "x3");
        assert_eq!(trace.x, [1.0, 2.0]);
        assert_eq!(trace.y, [0.0, 0.0]);
        assert_eq!(trace.opacity, 0.0);
        assert!(!trace.show_legend);
    }
}
