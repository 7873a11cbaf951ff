pub mod axis;
pub mod state;
pub mod trace;

pub use axis::layout::{build_layout, AxisLayout, ChartLayout};
pub use axis::opts::AxisConfig;
pub use state::ChartState;
