//! Flowchart symbols. Most are fixed outlines in a small private path
//! space stretched over the box.

use super::basic::{diamond, ellipse, rect};
use super::corners::{Corner, cornered_rect};
use super::{Frame, Preset, at2};
use crate::geom::{Path, PathBuilder};

pub(super) const PROCESS: Preset = preset!(rect);
pub(super) const DECISION: Preset = preset!(diamond);
pub(super) const INPUT_OUTPUT: Preset = preset!(input_output);
pub(super) const PREDEFINED_PROCESS: Preset = preset!(predefined_process);
pub(super) const INTERNAL_STORAGE: Preset = preset!(internal_storage);
pub(super) const DOCUMENT: Preset = preset!(document);
pub(super) const MULTIDOCUMENT: Preset = preset!(multidocument);
pub(super) const TERMINATOR: Preset = preset!(terminator);
pub(super) const PREPARATION: Preset = preset!(preparation);
pub(super) const MANUAL_INPUT: Preset = preset!(manual_input);
pub(super) const MANUAL_OPERATION: Preset = preset!(manual_operation);
pub(super) const CONNECTOR: Preset = preset!(ellipse);
pub(super) const PUNCHED_CARD: Preset = preset!(punched_card);
pub(super) const PUNCHED_TAPE: Preset = preset!(punched_tape);
pub(super) const SUMMING_JUNCTION: Preset = preset!(summing_junction);
pub(super) const OR: Preset = preset!(or);
pub(super) const COLLATE: Preset = preset!(collate);
pub(super) const SORT: Preset = preset!(sort);
pub(super) const EXTRACT: Preset = preset!(extract);
pub(super) const MERGE: Preset = preset!(merge);
pub(super) const OFFLINE_STORAGE: Preset = preset!(offline_storage);
pub(super) const ONLINE_STORAGE: Preset = preset!(online_storage);
pub(super) const MAGNETIC_TAPE: Preset = preset!(magnetic_tape);
pub(super) const MAGNETIC_DISK: Preset = preset!(magnetic_disk);
pub(super) const MAGNETIC_DRUM: Preset = preset!(magnetic_drum);
pub(super) const DISPLAY: Preset = preset!(display);
pub(super) const DELAY: Preset = preset!(delay);
pub(super) const ALTERNATE_PROCESS: Preset = preset!(alternate_process);
pub(super) const OFFPAGE_CONNECTOR: Preset = preset!(offpage_connector);

/// Closed polygon in an `n` x `n` local space.
fn glyph(f: &Frame, n: f64, points: &[(f64, f64)]) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, n, n);
    p.polygon(points);
    p.build()
}

fn input_output(f: &Frame) -> Path {
    glyph(f, 5.0, &[(0.0, 5.0), (1.0, 0.0), (5.0, 0.0), (4.0, 5.0)])
}

fn predefined_process(f: &Frame) -> Path {
    let mut p = PathBuilder::new();
    p.append(rect(f));
    let (x1, x2) = (f.w / 8.0, f.w * 7.0 / 8.0);
    p.segment(x1, 0.0, x1, f.h).segment(x2, 0.0, x2, f.h);
    p.build()
}

fn internal_storage(f: &Frame) -> Path {
    let mut p = PathBuilder::new();
    p.append(rect(f));
    let (x1, y1) = (f.w / 8.0, f.h / 8.0);
    p.segment(x1, 0.0, x1, f.h).segment(0.0, y1, f.w, y1);
    p.build()
}

const SPACE: f64 = 21600.0;

fn document(f: &Frame) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, SPACE, SPACE);
    p.move_to(0.0, 0.0)
        .line_to(21600.0, 0.0)
        .line_to(21600.0, 17322.0)
        .cubic_to(10800.0, 17322.0, 10800.0, 23922.0, 0.0, 20172.0)
        .close();
    p.build()
}

/// Three stacked pages; the back two peek out above and to the right.
fn multidocument(f: &Frame) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, SPACE, SPACE);
    p.move_to(0.0, 20782.0)
        .cubic_to(9298.0, 23542.0, 9298.0, 18022.0, 18595.0, 18022.0)
        .line_to(18595.0, 3675.0)
        .line_to(0.0, 3675.0)
        .close();
    p.move_to(1532.0, 3675.0)
        .line_to(1532.0, 1815.0)
        .line_to(20000.0, 1815.0)
        .line_to(20000.0, 16252.0)
        .cubic_to(19298.0, 16252.0, 18595.0, 16352.0, 18595.0, 16352.0)
        .line_to(18595.0, 3675.0)
        .close();
    p.move_to(2972.0, 1815.0)
        .line_to(2972.0, 0.0)
        .line_to(21600.0, 0.0)
        .line_to(21600.0, 14392.0)
        .cubic_to(20800.0, 14392.0, 20000.0, 14467.0, 20000.0, 14467.0)
        .line_to(20000.0, 1815.0)
        .close();
    p.build()
}

fn terminator(f: &Frame) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, SPACE, SPACE);
    p.move_to(3475.0, 0.0)
        .line_to(18125.0, 0.0)
        .arc_to(3475.0, 10800.0, 270.0, 180.0)
        .line_to(3475.0, 21600.0)
        .arc_to(3475.0, 10800.0, 90.0, 180.0)
        .close();
    p.build()
}

fn preparation(f: &Frame) -> Path {
    glyph(
        f,
        10.0,
        &[
            (0.0, 5.0),
            (2.0, 0.0),
            (8.0, 0.0),
            (10.0, 5.0),
            (8.0, 10.0),
            (2.0, 10.0),
        ],
    )
}

fn manual_input(f: &Frame) -> Path {
    glyph(f, 5.0, &[(0.0, 1.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)])
}

fn manual_operation(f: &Frame) -> Path {
    glyph(f, 5.0, &[(0.0, 0.0), (5.0, 0.0), (4.0, 5.0), (1.0, 5.0)])
}

fn punched_card(f: &Frame) -> Path {
    glyph(f, 5.0, &[(0.0, 1.0), (1.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)])
}

fn punched_tape(f: &Frame) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, 20.0, 20.0);
    p.move_to(0.0, 2.0)
        .arc_to(5.0, 2.0, 180.0, -180.0)
        .arc_to(5.0, 2.0, 180.0, 180.0)
        .line_to(20.0, 18.0)
        .arc_to(5.0, 2.0, 0.0, -180.0)
        .arc_to(5.0, 2.0, 0.0, 180.0)
        .close();
    p.build()
}

fn summing_junction(f: &Frame) -> Path {
    let (s, c) = crate::geom::arc::sin_cos_deg(45.0);
    let (idx, idy) = (f.wd2() * c, f.hd2() * s);
    let (il, ir) = (f.hc() - idx, f.hc() + idx);
    let (it, ib) = (f.vc() - idy, f.vc() + idy);
    let mut p = PathBuilder::new();
    p.append(ellipse(f));
    p.segment(il, it, ir, ib).segment(ir, it, il, ib);
    p.build()
}

fn or(f: &Frame) -> Path {
    let mut p = PathBuilder::new();
    p.append(ellipse(f));
    p.segment(f.hc(), 0.0, f.hc(), f.h)
        .segment(0.0, f.vc(), f.w, f.vc());
    p.build()
}

fn collate(f: &Frame) -> Path {
    glyph(
        f,
        2.0,
        &[
            (0.0, 0.0),
            (2.0, 0.0),
            (1.0, 1.0),
            (2.0, 2.0),
            (0.0, 2.0),
            (1.0, 1.0),
        ],
    )
}

fn sort(f: &Frame) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, 2.0, 2.0);
    p.polygon(&[(0.0, 1.0), (1.0, 0.0), (2.0, 1.0), (1.0, 2.0)])
        .segment(0.0, 1.0, 2.0, 1.0);
    p.build()
}

fn extract(f: &Frame) -> Path {
    glyph(f, 2.0, &[(0.0, 2.0), (1.0, 0.0), (2.0, 2.0)])
}

fn merge(f: &Frame) -> Path {
    glyph(f, 2.0, &[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)])
}

fn offline_storage(f: &Frame) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, 5.0, 5.0);
    p.polygon(&[(0.0, 0.0), (5.0, 0.0), (2.5, 5.0)])
        .segment(2.0, 4.0, 3.0, 4.0);
    p.build()
}

fn online_storage(f: &Frame) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, 6.0, 6.0);
    p.move_to(1.0, 0.0)
        .line_to(6.0, 0.0)
        .arc_to(1.0, 3.0, 270.0, -180.0)
        .line_to(1.0, 6.0)
        .arc_to(1.0, 3.0, 90.0, 180.0)
        .close();
    p.build()
}

fn magnetic_tape(f: &Frame) -> Path {
    let (wd2, hd2) = (f.wd2(), f.hd2());
    let (s, _) = crate::geom::arc::sin_cos_deg(45.0);
    let ib = f.vc() + hd2 * s;
    let ang1 = at2(f.w, f.h);
    let mut p = PathBuilder::new();
    p.move_to(f.hc(), f.h)
        .arc_to(wd2, hd2, 90.0, 90.0)
        .arc_to(wd2, hd2, 180.0, 90.0)
        .arc_to(wd2, hd2, 270.0, 90.0)
        .arc_to(wd2, hd2, 0.0, ang1)
        .line_to(f.w, ib)
        .line_to(f.w, f.h)
        .close();
    p.build()
}

fn magnetic_disk(f: &Frame) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, 6.0, 6.0);
    p.move_to(0.0, 1.0)
        .arc_to(3.0, 1.0, 180.0, 180.0)
        .line_to(6.0, 5.0)
        .arc_to(3.0, 1.0, 0.0, 180.0)
        .close();
    p.move_to(6.0, 1.0).arc_to(3.0, 1.0, 0.0, 180.0);
    p.build()
}

fn magnetic_drum(f: &Frame) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, 6.0, 6.0);
    p.move_to(1.0, 0.0)
        .line_to(5.0, 0.0)
        .arc_to(1.0, 3.0, 270.0, 180.0)
        .line_to(1.0, 6.0)
        .arc_to(1.0, 3.0, 90.0, 180.0)
        .close();
    p.move_to(5.0, 6.0).arc_to(1.0, 3.0, 90.0, 180.0);
    p.build()
}

fn display(f: &Frame) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, 6.0, 6.0);
    p.move_to(0.0, 3.0)
        .line_to(1.0, 0.0)
        .line_to(5.0, 0.0)
        .arc_to(1.0, 3.0, 270.0, 180.0)
        .line_to(1.0, 6.0)
        .close();
    p.build()
}

fn delay(f: &Frame) -> Path {
    let mut p = PathBuilder::new();
    p.move_to(0.0, 0.0)
        .line_to(f.hc(), 0.0)
        .arc_to(f.wd2(), f.hd2(), 270.0, 180.0)
        .line_to(0.0, f.h)
        .close();
    p.build()
}

fn alternate_process(f: &Frame) -> Path {
    cornered_rect(f.w, f.h, [Corner::Round(f.ss() / 6.0); 4])
}

fn offpage_connector(f: &Frame) -> Path {
    glyph(
        f,
        10.0,
        &[(0.0, 0.0), (10.0, 0.0), (10.0, 8.0), (5.0, 10.0), (0.0, 8.0)],
    )
}
