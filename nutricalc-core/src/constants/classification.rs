//! Classification Tolerances
//!
//! The graded scheme widens a `[min, max]` band by a tolerance zone on each
//! side before calling a value low or high:
//!
//! ```text
//!        low     | moderate |  optimal  | moderate |   high
//!  ──────────────┼──────────┼───────────┼──────────┼──────────
//!            0.8·min       min         max      1.2·max
//! ```

/// Below `min × GRADED_LOW_FACTOR` a value is low.
pub const GRADED_LOW_FACTOR: f64 = 0.8;

/// Above `max × GRADED_HIGH_FACTOR` a value is high.
pub const GRADED_HIGH_FACTOR: f64 = 1.2;

/// A gauge is full at `max × GAUGE_HEADROOM_FACTOR`.
pub const GAUGE_HEADROOM_FACTOR: f64 = 1.2;

/// Gauge percentage cap.
pub const GAUGE_MAX_PERCENT: f64 = 100.0;
