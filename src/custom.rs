//! Custom geometry (`custGeom`): author-supplied path lists.
//!
//! A document stores each path's segments in command groups (all moves, all
//! lines, ...) and records the drawing order separately in an `order` key per
//! entry. [`assemble`] flattens the groups, restores that order and draws the
//! segments in the path's own coordinate space stretched onto the target box.

use glam::DVec2;

use crate::defaults::ANGLE_UNITS_PER_DEGREE;
use crate::geom::{Path, PathBuilder};
use crate::log::debug;
use crate::types::BoundingBox;

/// One drawing command of a custom path, in path-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(DVec2),
    LineTo(DVec2),
    /// Two control points and the end point.
    CubicTo([DVec2; 3]),
    /// Control point and end point.
    QuadTo([DVec2; 2]),
    /// DrawingML `arcTo`: radii in path units, angles in 60000ths of a degree.
    ArcTo { wr: f64, hr: f64, st: i64, sw: i64 },
    Close,
}

/// A segment tagged with its position in the drawing order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub order: i64,
    pub segment: Segment,
}

impl Entry {
    pub fn new(order: i64, segment: Segment) -> Self {
        Entry { order, segment }
    }
}

/// One `a:path` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomPath {
    /// Source coordinate space; `None` or zero means path units are device units.
    pub extent: Option<(f64, f64)>,
    /// Command groups as stored in the document, unsorted.
    pub groups: Vec<Vec<Entry>>,
}

impl CustomPath {
    pub fn new(extent: Option<(f64, f64)>) -> Self {
        CustomPath {
            extent,
            groups: Vec::new(),
        }
    }

    /// Add a command group.
    pub fn group(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.groups.push(entries.into_iter().collect());
        self
    }

    /// Entries in drawing order. Ties keep their document order.
    pub fn ordered(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.groups.iter().flatten().copied().collect();
        entries.sort_by_key(|e| e.order);
        entries
    }

    fn draw(&self, p: &mut PathBuilder) {
        for entry in self.ordered() {
            match entry.segment {
                Segment::MoveTo(to) => {
                    p.move_to(to.x, to.y);
                }
                Segment::LineTo(to) => {
                    p.line_to(to.x, to.y);
                }
                Segment::CubicTo([c1, c2, to]) => {
                    p.cubic_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
                }
                Segment::QuadTo([q, to]) => {
                    p.quad_to(q.x, q.y, to.x, to.y);
                }
                Segment::ArcTo { wr, hr, st, sw } => {
                    p.arc_to(
                        wr,
                        hr,
                        st as f64 / ANGLE_UNITS_PER_DEGREE,
                        sw as f64 / ANGLE_UNITS_PER_DEGREE,
                    );
                }
                Segment::Close => {
                    p.close();
                }
            }
        }
    }
}

/// A whole `custGeom`: one or more paths drawn into the same box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomGeometry {
    pub paths: Vec<CustomPath>,
}

impl CustomGeometry {
    pub fn new(paths: Vec<CustomPath>) -> Self {
        CustomGeometry { paths }
    }
}

/// Draw every path of `geometry` into `target`, each rescaled from its own
/// extent.
pub fn assemble(geometry: &CustomGeometry, target: BoundingBox) -> Path {
    let mut out = Path::new();
    for path in &geometry.paths {
        let (sw, sh) = path.extent.unwrap_or((0.0, 0.0));
        let mut p = PathBuilder::in_space(target.w, target.h, sw, sh);
        path.draw(&mut p);
        out.extend(p.build());
    }
    debug!(
        paths = geometry.paths.len(),
        commands = out.len(),
        "assembled custom geometry"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::PathCommand;
    use glam::dvec2;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn pt(x: f64, y: f64) -> DVec2 {
        dvec2(x, y)
    }

    fn square(orders: [i64; 4]) -> CustomPath {
        CustomPath::new(Some((10.0, 10.0)))
            .group([Entry::new(orders[0], Segment::MoveTo(pt(0.0, 0.0)))])
            .group([
                Entry::new(orders[1], Segment::LineTo(pt(10.0, 0.0))),
                Entry::new(orders[2], Segment::LineTo(pt(10.0, 10.0))),
            ])
            .group([Entry::new(orders[3], Segment::Close)])
    }

    // ==================== ordering tests ====================

    #[test]
    fn shuffled_orders_draw_the_same_path() {
        let shuffled = CustomGeometry::new(vec![
            CustomPath::new(None)
                .group([
                    Entry::new(3, Segment::LineTo(pt(5.0, 5.0))),
                    Entry::new(1, Segment::MoveTo(pt(0.0, 0.0))),
                ])
                .group([Entry::new(2, Segment::LineTo(pt(5.0, 0.0)))]),
        ]);
        let sorted = CustomGeometry::new(vec![
            CustomPath::new(None)
                .group([Entry::new(1, Segment::MoveTo(pt(0.0, 0.0)))])
                .group([Entry::new(2, Segment::LineTo(pt(5.0, 0.0)))])
                .group([Entry::new(3, Segment::LineTo(pt(5.0, 5.0)))]),
        ]);
        let target = BoundingBox::new(5.0, 5.0);
        assert_eq!(assemble(&shuffled, target), assemble(&sorted, target));
        insta::assert_snapshot!(assemble(&shuffled, target).to_path_string(), @"M0,0 L5,0 L5,5");
    }

    #[test]
    fn equal_orders_keep_document_order() {
        let path = CustomPath::new(None).group([
            Entry::new(0, Segment::MoveTo(pt(1.0, 1.0))),
            Entry::new(0, Segment::LineTo(pt(2.0, 2.0))),
        ]);
        let segments: Vec<_> = path.ordered().into_iter().map(|e| e.segment).collect();
        assert_eq!(
            segments,
            vec![Segment::MoveTo(pt(1.0, 1.0)), Segment::LineTo(pt(2.0, 2.0))]
        );
    }

    #[test]
    fn moves_in_one_group_start_new_subpaths() {
        let geometry = CustomGeometry::new(vec![
            CustomPath::new(None)
                .group([
                    Entry::new(0, Segment::MoveTo(pt(0.0, 0.0))),
                    Entry::new(3, Segment::MoveTo(pt(10.0, 10.0))),
                ])
                .group([
                    Entry::new(1, Segment::LineTo(pt(20.0, 0.0))),
                    Entry::new(4, Segment::LineTo(pt(20.0, 20.0))),
                ])
                .group([Entry::new(2, Segment::Close)]),
        ]);
        let path = assemble(&geometry, BoundingBox::new(20.0, 20.0));
        assert_eq!(path.subpath_count(), 2);
        assert!(path.has_open_subpath());
        insta::assert_snapshot!(path.to_path_string(), @"M0,0 L20,0 Z M10,10 L20,20");
    }

    #[test]
    fn empty_groups_contribute_nothing() {
        let geometry = CustomGeometry::new(vec![square([0, 1, 2, 3]).group(Vec::new())]);
        let path = assemble(&geometry, BoundingBox::new(10.0, 10.0));
        assert_eq!(path.len(), 4);
        assert!(assemble(&CustomGeometry::default(), BoundingBox::new(1.0, 1.0)).is_empty());
    }

    // ==================== rescaling tests ====================

    #[test]
    fn coordinates_stretch_per_axis() {
        let geometry = CustomGeometry::new(vec![square([0, 1, 2, 3])]);
        let path = assemble(&geometry, BoundingBox::new(200.0, 50.0));
        insta::assert_snapshot!(path.to_path_string(), @"M0,0 L200,0 L200,50 Z");
    }

    #[test]
    fn missing_extent_keeps_device_units() {
        let mut geometry = CustomGeometry::new(vec![square([0, 1, 2, 3])]);
        geometry.paths[0].extent = Some((0.0, 10.0));
        let path = assemble(&geometry, BoundingBox::new(200.0, 50.0));
        let v = path.vertices();
        assert_eq!((v[1].x, v[1].y), (10.0, 0.0));
        assert_eq!((v[2].x, v[2].y), (10.0, 50.0));
    }

    #[test]
    fn paths_share_the_box() {
        let geometry = CustomGeometry::new(vec![
            square([0, 1, 2, 3]),
            CustomPath::new(Some((1.0, 1.0)))
                .group([Entry::new(0, Segment::MoveTo(pt(0.5, 0.5)))])
                .group([Entry::new(1, Segment::LineTo(pt(1.0, 1.0)))]),
        ]);
        let path = assemble(&geometry, BoundingBox::new(20.0, 20.0));
        assert_eq!(path.subpath_count(), 2);
        assert!(path.has_open_subpath());
        assert_eq!(path.end_point(), Some(pt(20.0, 20.0)));
    }

    // ==================== curve tests ====================

    #[test]
    fn quad_is_elevated_to_cubic() {
        let geometry = CustomGeometry::new(vec![
            CustomPath::new(None)
                .group([Entry::new(0, Segment::MoveTo(pt(0.0, 0.0)))])
                .group([Entry::new(1, Segment::QuadTo([pt(3.0, 3.0), pt(6.0, 0.0)]))]),
        ]);
        let path = assemble(&geometry, BoundingBox::new(6.0, 3.0));
        let want = Path::from_commands(vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::CubicTo {
                c1: pt(2.0, 2.0),
                c2: pt(4.0, 2.0),
                to: pt(6.0, 0.0),
            },
        ]);
        assert!(path.approx_eq(&want, EPSILON), "{path}");
    }

    #[test]
    fn arc_continues_from_the_pen() {
        let geometry = CustomGeometry::new(vec![
            CustomPath::new(Some((100.0, 100.0)))
                .group([Entry::new(0, Segment::MoveTo(pt(0.0, 50.0)))])
                .group([Entry::new(
                    1,
                    Segment::ArcTo {
                        wr: 50.0,
                        hr: 50.0,
                        st: 180 * 60_000,
                        sw: 90 * 60_000,
                    },
                )]),
        ]);
        let path = assemble(&geometry, BoundingBox::new(200.0, 100.0));
        let end = path.end_point().unwrap();
        assert!((end - pt(100.0, 0.0)).length() < EPSILON, "{end}");
        let PathCommand::ArcTo { center, rx, ry, .. } = path.commands()[1] else {
            panic!("expected arc");
        };
        assert_eq!((center, rx, ry), (pt(100.0, 50.0), 100.0, 50.0));
    }

    #[test]
    fn zero_radius_arc_is_a_point() {
        let geometry = CustomGeometry::new(vec![
            CustomPath::new(None)
                .group([Entry::new(0, Segment::MoveTo(pt(4.0, 4.0)))])
                .group([Entry::new(
                    1,
                    Segment::ArcTo {
                        wr: 0.0,
                        hr: 10.0,
                        st: 0,
                        sw: 5_400_000,
                    },
                )]),
        ]);
        let path = assemble(&geometry, BoundingBox::new(10.0, 10.0));
        assert_eq!(path.commands()[1], PathCommand::LineTo(pt(4.0, 4.0)));
    }

    proptest! {
        #[test]
        fn assembly_ignores_group_layout(
            xs in prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), 2..8),
            split in 0usize..8,
        ) {
            let entries: Vec<Entry> = xs
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| {
                    let seg = if i == 0 { Segment::MoveTo(pt(x, y)) } else { Segment::LineTo(pt(x, y)) };
                    Entry::new(i as i64, seg)
                })
                .collect();
            let split = split.min(entries.len());
            let mut reversed_tail: Vec<Entry> = entries[split..].to_vec();
            reversed_tail.reverse();
            let regrouped = CustomPath::new(Some((100.0, 100.0)))
                .group(reversed_tail)
                .group(entries[..split].iter().copied());
            let plain = CustomPath::new(Some((100.0, 100.0))).group(entries);
            let target = BoundingBox::new(50.0, 80.0);
            prop_assert_eq!(
                assemble(&CustomGeometry::new(vec![regrouped]), target),
                assemble(&CustomGeometry::new(vec![plain]), target)
            );
        }
    }
}
