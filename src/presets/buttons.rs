//! Action buttons: a plain box with a pictogram centered in it.
//!
//! Pictograms are laid out on a unit square scaled to three quarters of the
//! short side.

use super::basic::rect;
use super::{Frame, Preset};
use crate::geom::{Path, PathBuilder};

pub(super) const BLANK: Preset = preset!(rect);
pub(super) const HOME: Preset = preset!(home);
pub(super) const HELP: Preset = preset!(help);
pub(super) const INFORMATION: Preset = preset!(information);
pub(super) const FORWARD_NEXT: Preset = preset!(forward_next);
pub(super) const BACK_PREVIOUS: Preset = preset!(back_previous);
pub(super) const END: Preset = preset!(end);
pub(super) const BEGINNING: Preset = preset!(beginning);
pub(super) const RETURN: Preset = preset!(return_button);
pub(super) const DOCUMENT: Preset = preset!(document);
pub(super) const SOUND: Preset = preset!(sound);
pub(super) const MOVIE: Preset = preset!(movie);

/// Builder for the button box plus a pictogram in unit coordinates.
struct Icon {
    p: PathBuilder,
    x0: f64,
    y0: f64,
    s: f64,
}

impl Icon {
    fn new(f: &Frame) -> Self {
        let half = f.ss() * 3.0 / 8.0;
        let mut p = PathBuilder::new();
        p.append(rect(f));
        Icon {
            p,
            x0: f.hc() - half,
            y0: f.vc() - half,
            s: half * 2.0,
        }
    }

    fn at(&self, u: f64, v: f64) -> (f64, f64) {
        (self.x0 + u * self.s, self.y0 + v * self.s)
    }

    fn polygon(&mut self, pts: &[(f64, f64)]) -> &mut Self {
        let mapped: Vec<_> = pts.iter().map(|&(u, v)| self.at(u, v)).collect();
        self.p.polygon(&mapped);
        self
    }

    fn bar(&mut self, u1: f64, v1: f64, u2: f64, v2: f64) -> &mut Self {
        self.polygon(&[(u1, v1), (u2, v1), (u2, v2), (u1, v2)])
    }

    fn segment(&mut self, u1: f64, v1: f64, u2: f64, v2: f64) -> &mut Self {
        let (x1, y1) = self.at(u1, v1);
        let (x2, y2) = self.at(u2, v2);
        self.p.segment(x1, y1, x2, y2);
        self
    }

    fn circle(&mut self, u: f64, v: f64, r: f64) -> &mut Self {
        let (cx, cy) = self.at(u, v);
        self.p.ellipse(cx, cy, r * self.s, r * self.s);
        self
    }

    fn move_to(&mut self, u: f64, v: f64) -> &mut Self {
        let (x, y) = self.at(u, v);
        self.p.move_to(x, y);
        self
    }

    fn line_to(&mut self, u: f64, v: f64) -> &mut Self {
        let (x, y) = self.at(u, v);
        self.p.line_to(x, y);
        self
    }

    fn arc_to(&mut self, r: f64, st: f64, sw: f64) -> &mut Self {
        self.p.arc_to(r * self.s, r * self.s, st, sw);
        self
    }

    fn close(&mut self) -> &mut Self {
        self.p.close();
        self
    }

    fn build(self) -> Path {
        self.p.build()
    }
}

fn home(f: &Frame) -> Path {
    let mut i = Icon::new(f);
    i.polygon(&[
        (0.5, 0.0),
        (0.6875, 0.1875),
        (0.6875, 0.0625),
        (0.8125, 0.0625),
        (0.8125, 0.3125),
        (1.0, 0.5),
        (0.875, 0.5),
        (0.875, 1.0),
        (0.125, 1.0),
        (0.125, 0.5),
        (0.0, 0.5),
    ])
    .bar(0.4, 0.65, 0.6, 1.0);
    i.build()
}

fn help(f: &Frame) -> Path {
    let mut i = Icon::new(f);
    // Hook: a band between two concentric arcs.
    i.move_to(0.2, 0.3)
        .arc_to(0.3, 180.0, 270.0)
        .line_to(0.5, 0.45)
        .arc_to(0.15, 90.0, -270.0)
        .close()
        .bar(0.425, 0.45, 0.575, 0.75)
        .circle(0.5, 0.875, 0.075);
    i.build()
}

fn information(f: &Frame) -> Path {
    let mut i = Icon::new(f);
    i.circle(0.5, 0.5, 0.5)
        .circle(0.5, 0.25, 0.0833)
        .bar(0.4, 0.4375, 0.6, 0.8125);
    i.build()
}

fn forward_next(f: &Frame) -> Path {
    let mut i = Icon::new(f);
    i.polygon(&[(0.0, 0.0), (1.0, 0.5), (0.0, 1.0)]);
    i.build()
}

fn back_previous(f: &Frame) -> Path {
    let mut i = Icon::new(f);
    i.polygon(&[(0.0, 0.5), (1.0, 0.0), (1.0, 1.0)]);
    i.build()
}

fn end(f: &Frame) -> Path {
    let mut i = Icon::new(f);
    i.polygon(&[(0.0, 0.0), (0.75, 0.5), (0.0, 1.0)])
        .bar(0.875, 0.0, 1.0, 1.0);
    i.build()
}

fn beginning(f: &Frame) -> Path {
    let mut i = Icon::new(f);
    i.bar(0.0, 0.0, 0.125, 1.0)
        .polygon(&[(0.25, 0.5), (1.0, 0.0), (1.0, 1.0)]);
    i.build()
}

/// U-turn arrow with its head pointing up on the right.
fn return_button(f: &Frame) -> Path {
    let mut i = Icon::new(f);
    i.move_to(1.0, 0.25)
        .line_to(0.875, 0.25)
        .line_to(0.875, 0.625)
        .arc_to(0.375, 0.0, 180.0)
        .line_to(0.125, 0.375)
        .line_to(0.25, 0.375)
        .line_to(0.25, 0.625)
        .arc_to(0.25, 180.0, -180.0)
        .line_to(0.75, 0.25)
        .line_to(0.625, 0.25)
        .line_to(0.8125, 0.0)
        .close();
    i.build()
}

fn document(f: &Frame) -> Path {
    let mut i = Icon::new(f);
    i.polygon(&[
        (0.125, 0.0),
        (0.6875, 0.0),
        (0.875, 0.1875),
        (0.875, 1.0),
        (0.125, 1.0),
    ])
    .polygon(&[(0.6875, 0.0), (0.6875, 0.1875), (0.875, 0.1875)]);
    i.build()
}

fn sound(f: &Frame) -> Path {
    let mut i = Icon::new(f);
    i.polygon(&[
        (0.0, 0.3125),
        (0.25, 0.3125),
        (0.5, 0.0),
        (0.5, 1.0),
        (0.25, 0.6875),
        (0.0, 0.6875),
    ])
    .segment(0.625, 0.5, 1.0, 0.5)
    .segment(0.625, 0.3125, 1.0, 0.125)
    .segment(0.625, 0.6875, 1.0, 0.875);
    i.build()
}

fn movie(f: &Frame) -> Path {
    let mut i = Icon::new(f);
    i.bar(0.0, 0.25, 0.6875, 0.75)
        .polygon(&[(0.6875, 0.4375), (1.0, 0.25), (1.0, 0.75), (0.6875, 0.5625)])
        .circle(0.1875, 0.125, 0.125)
        .circle(0.5, 0.125, 0.125);
    i.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{ShapeKind, compute};
    use crate::types::ScaleFactor;

    const BUTTONS: [ShapeKind; 12] = [
        ShapeKind::ActionButtonBlank,
        ShapeKind::ActionButtonHome,
        ShapeKind::ActionButtonHelp,
        ShapeKind::ActionButtonInformation,
        ShapeKind::ActionButtonForwardNext,
        ShapeKind::ActionButtonBackPrevious,
        ShapeKind::ActionButtonEnd,
        ShapeKind::ActionButtonBeginning,
        ShapeKind::ActionButtonReturn,
        ShapeKind::ActionButtonDocument,
        ShapeKind::ActionButtonSound,
        ShapeKind::ActionButtonMovie,
    ];

    fn build(kind: ShapeKind, w: f64, h: f64) -> Path {
        compute(kind, w, h, &kind.default_guides(ScaleFactor::ONE))
    }

    #[test]
    fn every_button_starts_with_its_box() {
        for kind in BUTTONS {
            let path = build(kind, 200.0, 100.0);
            let v = path.vertices();
            assert_eq!((v[0].x, v[0].y), (0.0, 0.0), "{kind}");
            assert_eq!((v[2].x, v[2].y), (200.0, 100.0), "{kind}");
        }
    }

    #[test]
    fn pictograms_stay_in_the_center_square() {
        for kind in BUTTONS {
            let path = build(kind, 100.0, 100.0);
            for p in path.vertices().iter().skip(4) {
                assert!(
                    (12.5 - 1e-9..=87.5 + 1e-9).contains(&p.x)
                        && (12.5 - 1e-9..=87.5 + 1e-9).contains(&p.y),
                    "{kind}: {p}"
                );
            }
        }
    }

    #[test]
    fn blank_is_only_the_box() {
        assert_eq!(build(ShapeKind::ActionButtonBlank, 50.0, 50.0).subpath_count(), 1);
        assert!(build(ShapeKind::ActionButtonSound, 50.0, 50.0).subpath_count() > 1);
    }

    #[test]
    fn forward_points_right() {
        let path = build(ShapeKind::ActionButtonForwardNext, 100.0, 100.0);
        insta::assert_snapshot!(path.to_path_string(), @"M0,0 L100,0 L100,100 L0,100 Z M12.5,12.5 L87.5,50 L12.5,87.5 Z");
    }
}
