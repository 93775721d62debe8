//! Ribbons, scrolls and waves.

use super::{Frame, Preset, pin};
use crate::geom::{Path, PathBuilder};

pub(super) const RIBBON: Preset = preset!(ribbon, "adj1" = 16667, "adj2" = 50000);
pub(super) const RIBBON2: Preset = preset!(ribbon2, "adj1" = 16667, "adj2" = 50000);
pub(super) const VERTICAL_SCROLL: Preset = preset!(vertical_scroll, "adj" = 12500);
pub(super) const HORIZONTAL_SCROLL: Preset = preset!(horizontal_scroll, "adj" = 12500);
pub(super) const WAVE: Preset = preset!(wave, "adj1" = 12500, "adj2" = 0);
pub(super) const DOUBLE_WAVE: Preset = preset!(double_wave, "adj1" = 6250, "adj2" = 0);

/// Banner whose center panel sits low and whose tails fold behind it.
fn ribbon(f: &Frame) -> Path {
    let a1 = pin(0.0, f.adj("adj1"), 33333.0);
    let a2 = pin(25000.0, f.adj("adj2"), 75000.0);
    let (w, h) = (f.w, f.h);
    let (wd8, wd32) = (w / 8.0, w / 32.0);

    let dx2 = w * a2 / 200000.0;
    let (x2, x9) = (f.hc() - dx2, f.hc() + dx2);
    let (x3, x8) = (x2 + wd32, x9 - wd32);
    let (x5, x6) = (x2 + wd8, x9 - wd8);
    let (x4, x7) = (x5 - wd32, x6 + wd32);
    let x10 = w - wd8;

    let y1 = h * a1 / 200000.0;
    let y2 = f.of_h(a1);
    let y4 = h - y2;
    let y3 = y4 / 2.0;
    let hr = h * a1 / 400000.0;
    let y5 = h - hr;

    let mut p = PathBuilder::new();
    p.move_to(0.0, 0.0)
        .line_to(x4, 0.0)
        .arc_to(wd32, hr, 270.0, 180.0)
        .line_to(x3, y1)
        .arc_to(wd32, hr, 270.0, -180.0)
        .line_to(x8, y2)
        .arc_to(wd32, hr, 90.0, -180.0)
        .line_to(x7, y1)
        .arc_to(wd32, hr, 90.0, 180.0)
        .line_to(w, 0.0)
        .line_to(x10, y3)
        .line_to(w, y4)
        .line_to(x9, y4)
        .line_to(x9, y5)
        .arc_to(wd32, hr, 0.0, 90.0)
        .line_to(x3, h)
        .arc_to(wd32, hr, 90.0, 90.0)
        .line_to(x2, y4)
        .line_to(0.0, y4)
        .line_to(wd8, y3)
        .close();
    p.build()
}

fn ribbon2(f: &Frame) -> Path {
    ribbon(f).flipped(f.w, f.h, false, true)
}

/// Scroll rolled at the top right and bottom left.
fn vertical_scroll(f: &Frame) -> Path {
    let ch = f.of_ss(pin(0.0, f.adj("adj"), 25000.0));
    let (ch2, ch4) = (ch / 2.0, ch / 4.0);
    let x4 = ch * 2.0;
    let x6 = f.w - ch;
    let x7 = f.w - ch2;
    let (y3, y4) = (f.h - ch, f.h - ch2);

    let mut p = PathBuilder::new();
    p.move_to(ch2, f.h)
        .arc_to(ch2, ch2, 90.0, -90.0)
        .line_to(ch2, y4)
        .arc_to(ch4, ch4, 90.0, -180.0)
        .line_to(ch, y3)
        .line_to(ch, ch2)
        .arc_to(ch2, ch2, 180.0, 90.0)
        .line_to(x7, 0.0)
        .arc_to(ch2, ch2, 270.0, 180.0)
        .line_to(x6, ch)
        .line_to(x6, y4)
        .arc_to(ch2, ch2, 0.0, 90.0)
        .close();
    // Top curl.
    p.move_to(x4, ch2)
        .arc_to(ch2, ch2, 0.0, 90.0)
        .arc_to(ch4, ch4, 90.0, 180.0)
        .close();
    p.build()
}

fn horizontal_scroll(f: &Frame) -> Path {
    vertical_scroll(&f.transposed()).transposed()
}

/// Wave guides: amplitude `y1`, control offset `dy2`, and the horizontal
/// shift of the top and bottom edges.
struct Wave {
    y1: f64,
    dy2: f64,
    /// Top edge runs from `x2` to `x_end`.
    x2: f64,
    x_end: f64,
    /// Bottom edge runs from `x_far` back to `x_start`.
    x_start: f64,
    x_far: f64,
}

impl Wave {
    fn new(f: &Frame, amplitude_max: f64) -> Self {
        let a1 = pin(0.0, f.adj("adj1"), amplitude_max);
        let a2 = pin(-10000.0, f.adj("adj2"), 10000.0);
        let y1 = f.of_h(a1);
        let of2 = f.w * a2 / 50000.0;
        let dx2 = if of2 > 0.0 { 0.0 } else { of2 };
        let dx5 = if of2 > 0.0 { of2 } else { 0.0 };
        Wave {
            y1,
            dy2: y1 * 10.0 / 3.0,
            x2: -dx2,
            x_end: f.w - dx5,
            x_start: dx5,
            x_far: f.w + dx2,
        }
    }
}

fn wave(f: &Frame) -> Path {
    let v = Wave::new(f, 20000.0);
    let (y1, y4) = (v.y1, f.h - v.y1);
    let (y2, y3) = (y1 - v.dy2, y1 + v.dy2);
    let (y5, y6) = (y4 - v.dy2, y4 + v.dy2);
    let dx3 = (v.x_end - v.x2) / 3.0;
    let x3 = v.x2 + dx3;
    let x4 = (x3 + v.x_end) / 2.0;
    let x7 = v.x_start + dx3;
    let x8 = (x7 + v.x_far) / 2.0;

    let mut p = PathBuilder::new();
    p.move_to(v.x2, y1)
        .cubic_to(x3, y2, x4, y3, v.x_end, y1)
        .line_to(v.x_far, y4)
        .cubic_to(x8, y6, x7, y5, v.x_start, y4)
        .close();
    p.build()
}

fn double_wave(f: &Frame) -> Path {
    let v = Wave::new(f, 12500.0);
    let (y1, y4) = (v.y1, f.h - v.y1);
    let (y2, y3) = (y1 - v.dy2, y1 + v.dy2);
    let (y5, y6) = (y4 - v.dy2, y4 + v.dy2);
    let span = v.x_end - v.x2;
    let (dx3, dx4) = (span / 6.0, span / 3.0);

    let (x2, x8) = (v.x2, v.x_end);
    let (x3, x4) = (x2 + dx3, x2 + dx4);
    let x5 = (x2 + x8) / 2.0;
    let x6 = x5 + dx3;
    let x7 = (x6 + x8) / 2.0;

    let (x9, x15) = (v.x_start, v.x_far);
    let (x10, x11) = (x9 + dx3, x9 + dx4);
    let x12 = (x9 + x15) / 2.0;
    let x13 = x12 + dx3;
    let x14 = (x13 + x15) / 2.0;

    let mut p = PathBuilder::new();
    p.move_to(x2, y1)
        .cubic_to(x3, y2, x4, y3, x5, y1)
        .cubic_to(x6, y2, x7, y3, x8, y1)
        .line_to(x15, y4)
        .cubic_to(x14, y6, x13, y5, x12, y4)
        .cubic_to(x11, y6, x10, y5, x9, y4)
        .close();
    p.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guides::RawGuide;
    use crate::presets::{ShapeKind, compute};
    use crate::types::ScaleFactor;

    fn build(kind: ShapeKind, w: f64, h: f64, raw: &[RawGuide]) -> Path {
        let guides = crate::guides::resolve(kind, raw, ScaleFactor::ONE);
        compute(kind, w, h, &guides)
    }

    #[test]
    fn ribbon2_is_ribbon_upside_down() {
        let down = build(ShapeKind::Ribbon, 160.0, 90.0, &[]);
        let up = build(ShapeKind::Ribbon2, 160.0, 90.0, &[]);
        assert_eq!(up, down.flipped(160.0, 90.0, false, true));
        assert!(up.is_closed());
    }

    #[test]
    fn ribbon_tails_notch_at_the_middle_of_the_band() {
        let path = build(ShapeKind::Ribbon, 160.0, 90.0, &[]);
        let v = path.vertices();
        // y4 = 90 - 15.0003, y3 = y4 / 2
        let notch = v.iter().find(|p| (p.x - 20.0).abs() < 1e-9).unwrap();
        assert!((notch.y - (90.0 - 15.0003) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn scrolls_have_a_body_and_a_curl() {
        for kind in [ShapeKind::VerticalScroll, ShapeKind::HorizontalScroll] {
            let path = build(kind, 100.0, 160.0, &[]);
            assert_eq!(path.subpath_count(), 2, "{kind}");
            assert!(path.is_closed(), "{kind}");
        }
    }

    #[test]
    fn wave_corners_follow_amplitude() {
        let path = build(ShapeKind::Wave, 100.0, 100.0, &[]);
        let v = path.vertices();
        assert_eq!((v[0].x, v[0].y), (0.0, 12.5));
        assert_eq!((v[1].x, v[1].y), (100.0, 12.5));
        assert_eq!((v[2].x, v[2].y), (100.0, 87.5));
        assert_eq!((v[3].x, v[3].y), (0.0, 87.5));
    }

    #[test]
    fn wave_skew_shifts_the_edges() {
        let path = build(ShapeKind::DoubleWave, 100.0, 100.0, &[RawGuide::val("adj2", 10000)]);
        let v = path.vertices();
        // Positive skew pulls the top edge in on the right and pushes the
        // bottom edge in on the left.
        assert_eq!(v[0].x, 0.0);
        assert_eq!(v[2].x, 80.0);
        assert_eq!(v[5].x, 20.0);
    }
}
