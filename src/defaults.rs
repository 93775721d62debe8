//! Default values and DrawingML unit constants.

/// English Metric Units per inch.
pub const EMU_PER_INCH: f64 = 914_400.0;
/// CSS pixels per inch.
pub const PX_PER_INCH: f64 = 96.0;
/// DrawingML angles are stored in 60000ths of a degree.
pub const ANGLE_UNITS_PER_DEGREE: f64 = 60_000.0;
/// Guide values and percentages use 100000 for 100%.
pub const PERCENT_UNITS: f64 = 100_000.0;

/// Stroke width used when a line node is present without `w` (1pt).
pub const LINE_WIDTH_EMU: f64 = 12_700.0;

/// Arrowhead width/length multipliers of the line width for `sm`, `med`, `lg`.
pub const LINE_END_SMALL: f64 = 2.0;
pub const LINE_END_MEDIUM: f64 = 3.0;
pub const LINE_END_LARGE: f64 = 5.0;

/// Default shadow color alpha when an `outerShdw` has no alpha modifier.
pub const SHADOW_ALPHA: f64 = 0.35;

/// Significant digits kept by `Path::to_path_string`.
pub const PATH_PRECISION: i32 = 6;

/// Side of the square cell used for pattern fill tiles.
pub const PATTERN_TILE: f64 = 8.0;

/// Coincidence tolerance for welding and full-turn detection.
pub const EPSILON: f64 = 1e-9;
