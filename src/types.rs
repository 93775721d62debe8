//! Strongly-typed numeric primitives for drawml-geom (zero-cost newtypes).
//!
//! Raw `f64` values from the document are validated once at the boundary
//! (bounding box, scale factor) and then flow through formulas as plain
//! device-unit numbers.

use std::fmt;
use std::str::FromStr;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

#[inline]
fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Shape extent in device units. Origin is always the shape's own top-left.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BoundingBox {
    pub w: f64,
    pub h: f64,
}

impl BoundingBox {
    /// Create a bounding box (unchecked).
    /// Use `try_new` for document-provided values.
    #[inline]
    pub const fn new(w: f64, h: f64) -> Self {
        BoundingBox { w, h }
    }

    /// Create a bounding box with validation (rejects NaN, infinite and negative extents)
    pub fn try_new(w: f64, h: f64) -> Result<Self, NumericError> {
        for v in [w, h] {
            check_finite(v)?;
            if v < 0.0 {
                return Err(NumericError::Negative);
            }
        }
        Ok(BoundingBox { w, h })
    }

    /// `min(w, h)`, the `ss` of the preset definitions
    #[inline]
    pub fn short_side(self) -> f64 {
        self.w.min(self.h)
    }

    /// `max(w, h)`
    #[inline]
    pub fn long_side(self) -> f64 {
        self.w.max(self.h)
    }

    /// Scale both extents by `k`.
    #[inline]
    pub fn scaled(self, k: f64) -> Self {
        BoundingBox {
            w: self.w * k,
            h: self.h * k,
        }
    }

    pub fn is_degenerate(self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// Document-wide scale factor (EMU to device units).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Identity scale: guide values and widths stay in raw document units.
    pub const ONE: ScaleFactor = ScaleFactor(1.0);

    /// Create a ScaleFactor with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(val: f64) -> Result<Self, NumericError> {
        let val = check_finite(val)?;
        if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(ScaleFactor(val))
        }
    }

    /// The usual EMU -> CSS pixel factor (96 dpi).
    pub const fn emu_to_px() -> Self {
        ScaleFactor(crate::defaults::PX_PER_INCH / crate::defaults::EMU_PER_INCH)
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Apply the factor to a raw document value.
    #[inline]
    pub fn apply(self, raw: f64) -> f64 {
        raw * self.0
    }

    /// Undo the factor (recover the raw document value).
    #[inline]
    pub fn unapply(self, scaled: f64) -> f64 {
        scaled / self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        ScaleFactor::ONE
    }
}

/// Angle in degrees, clockwise-positive, 0 at 3 o'clock.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    /// Convert a DrawingML angle (60000ths of a degree).
    #[inline]
    pub fn from_drawingml(units: i64) -> Self {
        Angle(units as f64 / crate::defaults::ANGLE_UNITS_PER_DEGREE)
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Normalize into `[0, 360)`.
    pub fn normalized(self) -> Angle {
        Angle(self.0.rem_euclid(360.0))
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", self.0)
    }
}

/// A color reference as handed over by the theme resolver.
///
/// Scheme references that the caller did not resolve are passed through by
/// name so the emitter can map them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(u8, u8, u8),
    Scheme(String),
    Raw(String),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Scheme(s) => write!(f, "scheme({})", s),
            Color::Raw(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for Color {
    type Err = std::convert::Infallible;

    /// Parses `#rrggbb` / `rrggbb` (the `srgbClr@val` form); anything else is
    /// kept verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
            return Ok(Color::Rgb(channel(0), channel(2), channel(4)));
        }
        Ok(Color::Raw(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== BoundingBox tests ====================

    #[test]
    fn bbox_try_new_valid() {
        assert!(BoundingBox::try_new(1.0, 2.0).is_ok());
        assert!(BoundingBox::try_new(0.0, 0.0).is_ok());
    }

    #[test]
    fn bbox_try_new_rejects_nan() {
        assert_eq!(BoundingBox::try_new(f64::NAN, 1.0), Err(NumericError::NaN));
    }

    #[test]
    fn bbox_try_new_rejects_infinity() {
        assert_eq!(
            BoundingBox::try_new(1.0, f64::INFINITY),
            Err(NumericError::Infinite)
        );
    }

    #[test]
    fn bbox_try_new_rejects_negative() {
        assert_eq!(
            BoundingBox::try_new(-1.0, 1.0),
            Err(NumericError::Negative)
        );
    }

    #[test]
    fn bbox_short_and_long_side() {
        let b = BoundingBox::new(200.0, 100.0);
        assert_eq!(b.short_side(), 100.0);
        assert_eq!(b.long_side(), 200.0);
        assert_eq!(b.scaled(0.5), BoundingBox::new(100.0, 50.0));
    }

    // ==================== ScaleFactor tests ====================

    #[test]
    fn scale_try_new_valid() {
        assert!(ScaleFactor::try_new(1.0).is_ok());
        assert!(ScaleFactor::try_new(0.001).is_ok());
    }

    #[test]
    fn scale_try_new_rejects_zero() {
        assert_eq!(ScaleFactor::try_new(0.0), Err(NumericError::Zero));
    }

    #[test]
    fn scale_try_new_rejects_negative() {
        assert_eq!(ScaleFactor::try_new(-2.0), Err(NumericError::Negative));
    }

    #[test]
    fn scale_apply_unapply() {
        let s = ScaleFactor::try_new(0.5).unwrap();
        assert_eq!(s.apply(50000.0), 25000.0);
        assert_eq!(s.unapply(25000.0), 50000.0);
    }

    #[test]
    fn scale_emu_to_px() {
        let s = ScaleFactor::emu_to_px();
        assert!((s.apply(914400.0) - 96.0).abs() < 1e-9);
    }

    // ==================== Angle tests ====================

    #[test]
    fn angle_from_drawingml_units() {
        assert_eq!(Angle::from_drawingml(5_400_000), Angle(90.0));
        assert_eq!(Angle::from_drawingml(-2_700_000), Angle(-45.0));
    }

    #[test]
    fn angle_normalized() {
        assert_eq!(Angle(-90.0).normalized(), Angle(270.0));
        assert_eq!(Angle(720.0).normalized(), Angle(0.0));
    }

    // ==================== Color tests ====================

    #[test]
    fn color_parses_hex() {
        assert_eq!("FF8000".parse::<Color>().unwrap(), Color::Rgb(255, 128, 0));
        assert_eq!("#00ff00".parse::<Color>().unwrap(), Color::Rgb(0, 255, 0));
    }

    #[test]
    fn color_keeps_unknown_text() {
        assert_eq!(
            "tomato".parse::<Color>().unwrap(),
            Color::Raw("tomato".to_string())
        );
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::Rgb(255, 0, 16).to_string(), "#ff0010");
        assert_eq!(Color::Scheme("accent1".into()).to_string(), "scheme(accent1)");
    }
}
