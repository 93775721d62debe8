//! Stars and seals.

use super::{Frame, PCT, Preset, pin};
use crate::geom::{Path, PathBuilder};

pub(super) const STAR4: Preset = preset!(star4, "adj" = 12500);
pub(super) const STAR5: Preset = preset!(star5, "adj" = 19098, "hf" = 105146, "vf" = 110557);
pub(super) const STAR6: Preset = preset!(star6, "adj" = 28868, "hf" = 115470);
pub(super) const STAR7: Preset = preset!(star7, "adj" = 34601, "hf" = 102572, "vf" = 105210);
pub(super) const STAR8: Preset = preset!(star8, "adj" = 38250);
pub(super) const STAR10: Preset = preset!(star10, "adj" = 42533, "hf" = 105146);
pub(super) const STAR12: Preset = preset!(star12, "adj" = 37500);
pub(super) const STAR16: Preset = preset!(star16, "adj" = 37500);
pub(super) const STAR24: Preset = preset!(star24, "adj" = 37500);
pub(super) const STAR32: Preset = preset!(star32, "adj" = 37500);
pub(super) const IRREGULAR_SEAL1: Preset = preset!(irregular_seal1);
pub(super) const IRREGULAR_SEAL2: Preset = preset!(irregular_seal2);

/// An `n`-pointed star inscribed in an ellipse.
struct Star {
    points: usize,
    /// Angle of the first outer point, degrees clockwise from 3 o'clock.
    start: f64,
    cx: f64,
    cy: f64,
    /// Outer radii.
    rx: f64,
    ry: f64,
    /// Inner radius as a fraction of the outer one.
    inner: f64,
}

impl Star {
    /// Star centered in the frame with the guide `adj` as inner ratio
    /// (`adj / 50000`).
    fn centered(f: &Frame, points: usize, start: f64) -> Self {
        Star {
            points,
            start,
            cx: f.hc(),
            cy: f.vc(),
            rx: f.wd2(),
            ry: f.hd2(),
            inner: pin(0.0, f.adj("adj"), 50000.0) / 50000.0,
        }
    }

    /// Widen by the `hf` guide.
    fn stretched_h(mut self, f: &Frame) -> Self {
        self.rx *= f.adj("hf") / PCT;
        self
    }

    /// Heighten by the `vf` guide; the center moves down with it.
    fn stretched_v(mut self, f: &Frame) -> Self {
        let vf = f.adj("vf") / PCT;
        self.ry *= vf;
        self.cy *= vf;
        self
    }

    fn build(&self) -> Path {
        let step = 360.0 / self.points as f64;
        let mut pts = Vec::with_capacity(self.points * 2);
        for i in 0..self.points {
            let outer = self.start + step * i as f64;
            pts.push(self.point(outer, 1.0));
            pts.push(self.point(outer + step / 2.0, self.inner));
        }
        let mut p = PathBuilder::new();
        p.polygon(&pts);
        p.build()
    }

    fn point(&self, deg: f64, k: f64) -> (f64, f64) {
        let (sin, cos) = crate::geom::arc::sin_cos_deg(deg);
        (self.cx + self.rx * k * cos, self.cy + self.ry * k * sin)
    }
}

fn star4(f: &Frame) -> Path {
    Star::centered(f, 4, 180.0).build()
}

fn star5(f: &Frame) -> Path {
    Star::centered(f, 5, 198.0)
        .stretched_h(f)
        .stretched_v(f)
        .build()
}

fn star6(f: &Frame) -> Path {
    Star::centered(f, 6, 210.0).stretched_h(f).build()
}

fn star7(f: &Frame) -> Path {
    Star::centered(f, 7, 270.0 - 2.0 * 360.0 / 7.0)
        .stretched_h(f)
        .stretched_v(f)
        .build()
}

fn star8(f: &Frame) -> Path {
    Star::centered(f, 8, 180.0).build()
}

fn star10(f: &Frame) -> Path {
    Star::centered(f, 10, 198.0).stretched_h(f).build()
}

fn star12(f: &Frame) -> Path {
    Star::centered(f, 12, 180.0).build()
}

fn star16(f: &Frame) -> Path {
    Star::centered(f, 16, 180.0).build()
}

fn star24(f: &Frame) -> Path {
    Star::centered(f, 24, 180.0).build()
}

fn star32(f: &Frame) -> Path {
    Star::centered(f, 32, 180.0).build()
}

/// Seal outlines are fixed point lists in a 21600 square.
fn seal(f: &Frame, pts: &[(f64, f64)]) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, 21600.0, 21600.0);
    p.polygon(pts);
    p.build()
}

fn irregular_seal1(f: &Frame) -> Path {
    seal(
        f,
        &[
            (10800.0, 5800.0),
            (14522.0, 0.0),
            (14155.0, 5325.0),
            (18380.0, 4457.0),
            (16702.0, 7315.0),
            (21097.0, 8137.0),
            (17607.0, 10475.0),
            (21600.0, 13290.0),
            (16837.0, 12942.0),
            (18145.0, 18095.0),
            (14020.0, 14457.0),
            (13247.0, 19737.0),
            (10532.0, 14935.0),
            (8485.0, 21600.0),
            (7715.0, 15627.0),
            (4762.0, 17617.0),
            (5667.0, 13937.0),
            (135.0, 14587.0),
            (3722.0, 11775.0),
            (0.0, 8615.0),
            (4627.0, 7617.0),
            (370.0, 2295.0),
            (7312.0, 6320.0),
            (8352.0, 2295.0),
        ],
    )
}

fn irregular_seal2(f: &Frame) -> Path {
    seal(
        f,
        &[
            (11462.0, 4342.0),
            (14790.0, 0.0),
            (14525.0, 5777.0),
            (18007.0, 3172.0),
            (16380.0, 6532.0),
            (21600.0, 6645.0),
            (16985.0, 9402.0),
            (18270.0, 11290.0),
            (16380.0, 12310.0),
            (18877.0, 15632.0),
            (14640.0, 14350.0),
            (14942.0, 17370.0),
            (12180.0, 15935.0),
            (11612.0, 18842.0),
            (9872.0, 17370.0),
            (8700.0, 19712.0),
            (7527.0, 18125.0),
            (4917.0, 21600.0),
            (4805.0, 18240.0),
            (1285.0, 17825.0),
            (3330.0, 15370.0),
            (0.0, 12877.0),
            (3935.0, 11592.0),
            (1172.0, 8270.0),
            (5372.0, 7817.0),
            (4502.0, 3625.0),
            (8550.0, 6382.0),
            (9722.0, 1887.0),
        ],
    )
}
