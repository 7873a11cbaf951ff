//! Tick placement for decade (log10) and evenly spaced (linear) axes.
//!
//! All functions are pure and never fail: invalid or degenerate input
//! produces the bounds themselves (or a synthesized fallback) rather than an
//! empty or infinite sequence.
use enscale_common::types::ScaleType;

/// Relative slack used when deciding whether a tick touches a bound
pub const TICK_TOLERANCE: f64 = 1e-7;

/// Linear tick count used when no hint is given
pub const DEFAULT_TICK_COUNT: usize = 6;

/// Largest linear tick count honoured, larger hints are clamped
pub const MAX_TICK_COUNT: usize = 1000;

/// Number of interior ticks synthesized for a linear axis left empty after
/// endpoint filtering
const LINEAR_FALLBACK_COUNT: usize = 3;

fn sorted_pair(a: f64, b: f64) -> (f64, f64) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

/// Resolve an optional tick-count hint. `None` and zero mean "use the
/// default", anything below two is raised to two and anything above
/// [`MAX_TICK_COUNT`] is lowered to it.
pub fn resolve_tick_count(count: Option<usize>) -> usize {
    match count {
        None | Some(0) => DEFAULT_TICK_COUNT,
        Some(n) => n.clamp(2, MAX_TICK_COUNT),
    }
}

fn decade(exponent: i32) -> f64 {
    10f64.powf(exponent as f64)
}

/// One tick per power of ten inside `[lo, hi]`.
///
/// When no decade touches a bound (within [`TICK_TOLERANCE`]) the bound itself
/// is inserted, so the sequence always starts at `lo` and ends at `hi`.
/// Reversed bounds are swapped. Non-positive or non-finite bounds have no
/// decades and yield the bounds unchanged.
pub fn decade_ticks(lo: f64, hi: f64) -> Vec<f64> {
    let (lo, hi) = sorted_pair(lo, hi);
    if !(lo > 0.0 && hi > 0.0) || !lo.is_finite() || !hi.is_finite() {
        return vec![lo, hi];
    }

    let slack = 1.0 + TICK_TOLERANCE;
    let start = lo.log10().floor() as i32;
    let end = hi.log10().ceil() as i32;

    let mut ticks: Vec<f64> = (start..=end)
        .map(decade)
        .filter(|&v| v >= lo / slack && v <= hi * slack)
        .collect();

    if ticks.first().map_or(true, |&first| first > lo * slack) {
        ticks.insert(0, lo);
    }
    if ticks.last().map_or(true, |&last| last * slack < hi) {
        ticks.push(hi);
    }
    ticks
}

/// `count` evenly spaced values from `lo` to `hi`, both included.
///
/// `count` is clamped to `[2, MAX_TICK_COUNT]`. Equal or non-finite bounds yield just
/// the two bounds.
pub fn linear_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() || lo == hi {
        return vec![lo, hi];
    }

    let count = count.clamp(2, MAX_TICK_COUNT);
    let last = count - 1;
    let step = (hi - lo) / last as f64;
    (0..count)
        .map(|i| if i == last { hi } else { lo + i as f64 * step })
        .collect()
}

/// Ticks for a scale mode: decades for log axes, `count` evenly spaced values
/// for linear axes (see [`resolve_tick_count`]).
pub fn ticks(lo: f64, hi: f64, scale: ScaleType, count: Option<usize>) -> Vec<f64> {
    match scale {
        ScaleType::Log10 => decade_ticks(lo, hi),
        ScaleType::Linear => linear_ticks(lo, hi, resolve_tick_count(count)),
    }
}

fn is_interior(value: f64, lo: f64, hi: f64) -> bool {
    value > lo + TICK_TOLERANCE * lo.abs() && value < hi - TICK_TOLERANCE * hi.abs()
}

/// Ticks for an overlay axis with its own cadence.
///
/// Ticks are computed in the axis' own space and restricted to points
/// strictly inside the bounds so they do not pile up on the shared edges.
/// If nothing survives, a log axis gets its geometric midpoint and a linear
/// axis three evenly spaced interior points, so a valid range always shows
/// at least one tick. Non-finite bounds (or non-positive ones on a log axis)
/// yield no ticks.
pub fn independent_ticks(lo: f64, hi: f64, scale: ScaleType, count: Option<usize>) -> Vec<f64> {
    let (lo, hi) = sorted_pair(lo, hi);
    if !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }

    let interior: Vec<f64> = ticks(lo, hi, scale, count)
        .into_iter()
        .filter(|&v| is_interior(v, lo, hi))
        .collect();
    if !interior.is_empty() {
        return interior;
    }

    log::trace!("no interior ticks in [{lo}, {hi}], using {scale} fallback");
    match scale {
        ScaleType::Log10 => {
            if !(lo > 0.0 && hi > 0.0) {
                return Vec::new();
            }
            let midpoint = 10f64.powf((lo.log10() + hi.log10()) / 2.0);
            vec![midpoint]
        }
        ScaleType::Linear => {
            let step = (hi - lo) / (LINEAR_FALLBACK_COUNT + 1) as f64;
            (1..=LINEAR_FALLBACK_COUNT)
                .map(|i| lo + i as f64 * step)
                .collect()
        }
    }
}
