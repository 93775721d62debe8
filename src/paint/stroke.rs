//! Outline (`a:ln`) resolution: width, dashes, caps, joins and arrowheads.

use std::str::FromStr;

use glam::{DVec2, dvec2};

use crate::defaults::PERCENT_UNITS;
use crate::dispatch::CompileOptions;
use crate::geom::{Path, PathBuilder};
use crate::log::debug;
use crate::types::{Color, ScaleFactor};

/// `prstDash@val`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresetDash {
    #[default]
    Solid,
    Dot,
    Dash,
    LgDash,
    DashDot,
    LgDashDot,
    LgDashDotDot,
    SysDash,
    SysDot,
    SysDashDot,
    SysDashDotDot,
}

impl PresetDash {
    /// On/off lengths in multiples of the line width. Empty means solid.
    pub fn pattern(self) -> &'static [f64] {
        match self {
            PresetDash::Solid => &[],
            PresetDash::Dot => &[1.0, 3.0],
            PresetDash::Dash => &[4.0, 3.0],
            PresetDash::LgDash => &[8.0, 3.0],
            PresetDash::DashDot => &[4.0, 3.0, 1.0, 3.0],
            PresetDash::LgDashDot => &[8.0, 3.0, 1.0, 3.0],
            PresetDash::LgDashDotDot => &[8.0, 3.0, 1.0, 3.0, 1.0, 3.0],
            PresetDash::SysDash => &[3.0, 1.0],
            PresetDash::SysDot => &[1.0, 1.0],
            PresetDash::SysDashDot => &[3.0, 1.0, 1.0, 1.0],
            PresetDash::SysDashDotDot => &[3.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl FromStr for PresetDash {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "solid" => PresetDash::Solid,
            "dot" => PresetDash::Dot,
            "dash" => PresetDash::Dash,
            "lgDash" => PresetDash::LgDash,
            "dashDot" => PresetDash::DashDot,
            "lgDashDot" => PresetDash::LgDashDot,
            "lgDashDotDot" => PresetDash::LgDashDotDot,
            "sysDash" => PresetDash::SysDash,
            "sysDot" => PresetDash::SysDot,
            "sysDashDot" => PresetDash::SysDashDot,
            "sysDashDotDot" => PresetDash::SysDashDotDot,
            _ => return Err(()),
        })
    }
}

/// Dash specification of a line node.
#[derive(Debug, Clone, PartialEq)]
pub enum Dash {
    Preset(PresetDash),
    /// `custDash` stops: `(d, sp)` in 1000ths of a percent of the line width.
    Custom(Vec<(i64, i64)>),
}

impl Dash {
    /// Parse a `prstDash` tag; unknown tags draw solid.
    pub fn preset(tag: &str) -> Dash {
        Dash::Preset(tag.parse().unwrap_or_else(|()| {
            debug!(tag, "unknown preset dash, drawing solid");
            PresetDash::Solid
        }))
    }

    /// On/off lengths for a line of `width`.
    pub fn lengths(&self, width: f64) -> Vec<f64> {
        match self {
            Dash::Preset(p) => p.pattern().iter().map(|k| k * width).collect(),
            Dash::Custom(stops) => stops
                .iter()
                .flat_map(|&(d, sp)| [d, sp])
                .map(|v| v as f64 / PERCENT_UNITS * width)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineCap {
    #[default]
    Flat,
    Round,
    Square,
}

impl FromStr for LineCap {
    type Err = ();

    /// `ln@cap`: `flat`, `rnd`, `sq`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(LineCap::Flat),
            "rnd" => Ok(LineCap::Round),
            "sq" => Ok(LineCap::Square),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineJoin {
    #[default]
    Round,
    Bevel,
    Miter,
}

/// `headEnd` / `tailEnd` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineEndKind {
    #[default]
    None,
    Triangle,
    Stealth,
    Diamond,
    Oval,
    Arrow,
}

impl FromStr for LineEndKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(LineEndKind::None),
            "triangle" => Ok(LineEndKind::Triangle),
            "stealth" => Ok(LineEndKind::Stealth),
            "diamond" => Ok(LineEndKind::Diamond),
            "oval" => Ok(LineEndKind::Oval),
            "arrow" => Ok(LineEndKind::Arrow),
            _ => Err(()),
        }
    }
}

/// `headEnd@w` / `@len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineEndSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LineEndSize {
    /// Multiple of the line width, from the options table.
    pub fn factor(self, options: &CompileOptions) -> f64 {
        match self {
            LineEndSize::Small => options.arrowhead_sizes[0],
            LineEndSize::Medium => options.arrowhead_sizes[1],
            LineEndSize::Large => options.arrowhead_sizes[2],
        }
    }
}

impl FromStr for LineEndSize {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(LineEndSize::Small),
            "med" => Ok(LineEndSize::Medium),
            "lg" => Ok(LineEndSize::Large),
            _ => Err(()),
        }
    }
}

/// A line end decoration as read from the document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineEnd {
    pub kind: LineEndKind,
    pub width: LineEndSize,
    pub length: LineEndSize,
}

impl LineEnd {
    pub fn new(kind: LineEndKind) -> Self {
        LineEnd {
            kind,
            ..Default::default()
        }
    }
}

/// The `a:ln` node, colors already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct LineNode {
    /// Width in EMU; `None` uses the configured default.
    pub width: Option<f64>,
    /// Stroke color; `None` (or `noFill`) draws nothing.
    pub color: Option<Color>,
    pub alpha: f64,
    pub dash: Option<Dash>,
    pub cap: Option<LineCap>,
    pub join: Option<LineJoin>,
    /// Decoration at the path start.
    pub head: Option<LineEnd>,
    /// Decoration at the path end.
    pub tail: Option<LineEnd>,
}

impl Default for LineNode {
    fn default() -> Self {
        LineNode {
            width: None,
            color: None,
            alpha: 1.0,
            dash: None,
            cap: None,
            join: None,
            head: None,
            tail: None,
        }
    }
}

impl LineNode {
    pub fn solid(color: Color, width_emu: f64) -> Self {
        LineNode {
            width: Some(width_emu),
            color: Some(color),
            ..Default::default()
        }
    }
}

/// Resolved outline paint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrokeDescriptor {
    /// `None` is transparent.
    pub color: Option<Color>,
    pub alpha: f64,
    /// Device units.
    pub width: f64,
    /// On/off lengths in device units; empty is solid.
    pub dash: Vec<f64>,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl StrokeDescriptor {
    /// Zero-width transparent stroke.
    pub fn none() -> Self {
        StrokeDescriptor::default()
    }

    pub fn is_visible(&self) -> bool {
        self.color.is_some() && self.width > 0.0 && self.alpha > 0.0
    }
}

/// Resolve a line node. A missing node yields [`StrokeDescriptor::none`].
pub fn resolve_stroke(
    node: Option<&LineNode>,
    scale: ScaleFactor,
    options: &CompileOptions,
) -> StrokeDescriptor {
    let Some(node) = node else {
        return StrokeDescriptor::none();
    };
    let width = scale.apply(node.width.unwrap_or(options.default_stroke_width).max(0.0));
    StrokeDescriptor {
        color: node.color.clone(),
        alpha: node.alpha.clamp(0.0, 1.0),
        width,
        dash: node.dash.as_ref().map(|d| d.lengths(width)).unwrap_or_default(),
        cap: node.cap.unwrap_or_default(),
        join: node.join.unwrap_or_default(),
    }
}

/// Which end of the path a marker decorates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerEnd {
    Head,
    Tail,
}

/// Arrowhead placed at one end of an open path.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDescriptor {
    pub end: MarkerEnd,
    pub kind: LineEndKind,
    /// Tip position.
    pub at: DVec2,
    /// Unit vector the arrow points along.
    pub direction: DVec2,
    pub width: f64,
    pub length: f64,
}

impl MarkerDescriptor {
    /// Outline of the head in shape space. Triangles are closed, arrows are
    /// an open chevron.
    pub fn path(&self) -> Path {
        let back = self.at - self.direction * self.length;
        let side = dvec2(-self.direction.y, self.direction.x) * (self.width / 2.0);
        let (l, r) = (back + side, back - side);
        let mut p = PathBuilder::new();
        match self.kind {
            LineEndKind::Arrow => {
                p.polyline(&[(l.x, l.y), (self.at.x, self.at.y), (r.x, r.y)]);
            }
            _ => {
                p.polygon(&[(self.at.x, self.at.y), (l.x, l.y), (r.x, r.y)]);
            }
        }
        p.build()
    }
}

/// Markers for the ends of `path` decorated with a triangle or arrow.
/// Other end types produce nothing.
pub fn markers(
    node: Option<&LineNode>,
    path: &Path,
    stroke: &StrokeDescriptor,
    options: &CompileOptions,
) -> Vec<MarkerDescriptor> {
    let Some(node) = node else {
        return Vec::new();
    };
    let mut out = Vec::new();
    let ends = [
        (MarkerEnd::Head, node.head, path.start_point(), path.start_direction().map(|d| -d)),
        (MarkerEnd::Tail, node.tail, path.end_point(), path.end_direction()),
    ];
    for (end, decoration, at, direction) in ends {
        let Some(decoration) = decoration else {
            continue;
        };
        if !matches!(decoration.kind, LineEndKind::Triangle | LineEndKind::Arrow) {
            continue;
        }
        let (Some(at), Some(direction)) = (at, direction) else {
            debug!(?end, "line end on a degenerate path, skipping marker");
            continue;
        };
        out.push(MarkerDescriptor {
            end,
            kind: decoration.kind,
            at,
            direction,
            width: stroke.width * decoration.width.factor(options),
            length: stroke.width * decoration.length.factor(options),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn line() -> Path {
        let mut p = PathBuilder::new();
        p.move_to(0.0, 0.0).line_to(100.0, 0.0);
        p.build()
    }

    fn node(head: LineEndKind, tail: LineEndKind) -> LineNode {
        LineNode {
            head: Some(LineEnd::new(head)),
            tail: Some(LineEnd::new(tail)),
            ..LineNode::solid(Color::BLACK, 12_700.0)
        }
    }

    // ==================== width and dash tests ====================

    #[test]
    fn missing_node_is_transparent() {
        let stroke = resolve_stroke(None, ScaleFactor::ONE, &CompileOptions::default());
        assert_eq!(stroke, StrokeDescriptor::none());
        assert!(!stroke.is_visible());
    }

    #[test]
    fn width_defaults_to_one_point_and_scales() {
        let scale = ScaleFactor::emu_to_px();
        let node = LineNode {
            width: None,
            ..LineNode::solid(Color::BLACK, 0.0)
        };
        let stroke = resolve_stroke(Some(&node), scale, &CompileOptions::default());
        assert!((stroke.width - 12_700.0 * 96.0 / 914_400.0).abs() < EPSILON);
        assert!(stroke.is_visible());
    }

    #[test]
    fn preset_dashes_scale_with_width() {
        let node = LineNode {
            dash: Some(Dash::preset("dashDot")),
            ..LineNode::solid(Color::BLACK, 2.0)
        };
        let stroke = resolve_stroke(Some(&node), ScaleFactor::ONE, &CompileOptions::default());
        assert_eq!(stroke.dash, vec![8.0, 6.0, 2.0, 6.0]);
        assert_eq!(Dash::preset("squiggle"), Dash::Preset(PresetDash::Solid));
        assert!(Dash::preset("solid").lengths(3.0).is_empty());
    }

    #[test]
    fn custom_dashes_are_percent_of_width() {
        let dash = Dash::Custom(vec![(300_000, 100_000), (50_000, 100_000)]);
        assert_eq!(dash.lengths(2.0), vec![6.0, 2.0, 1.0, 2.0]);
    }

    #[test]
    fn default_node_is_opaque() {
        let node = LineNode {
            color: Some(Color::BLACK),
            ..Default::default()
        };
        let stroke = resolve_stroke(Some(&node), ScaleFactor::ONE, &CompileOptions::default());
        assert_eq!(stroke.alpha, 1.0);
        assert!(stroke.is_visible());
        assert!(!resolve_stroke(Some(&LineNode::default()), ScaleFactor::ONE, &CompileOptions::default()).is_visible());
    }

    #[test]
    fn caps_and_joins_pass_through() {
        let node = LineNode {
            cap: "rnd".parse().ok(),
            join: Some(LineJoin::Miter),
            ..LineNode::solid(Color::BLACK, 1.0)
        };
        let stroke = resolve_stroke(Some(&node), ScaleFactor::ONE, &CompileOptions::default());
        assert_eq!((stroke.cap, stroke.join), (LineCap::Round, LineJoin::Miter));
    }

    // ==================== marker tests ====================

    #[test]
    fn only_triangles_and_arrows_get_markers() {
        let path = line();
        let options = CompileOptions::default();
        for (kind, expected) in [
            (LineEndKind::Triangle, 2),
            (LineEndKind::Arrow, 2),
            (LineEndKind::Stealth, 0),
            (LineEndKind::Oval, 0),
            (LineEndKind::Diamond, 0),
            (LineEndKind::None, 0),
        ] {
            let node = node(kind, kind);
            let stroke = resolve_stroke(Some(&node), ScaleFactor::ONE, &options);
            assert_eq!(markers(Some(&node), &path, &stroke, &options).len(), expected, "{kind:?}");
        }
    }

    #[test]
    fn head_points_back_along_the_path() {
        let path = line();
        let options = CompileOptions::default();
        let node = node(LineEndKind::Triangle, LineEndKind::None);
        let stroke = resolve_stroke(Some(&node), ScaleFactor::ONE, &options);
        let marks = markers(Some(&node), &path, &stroke, &options);
        assert_eq!(marks.len(), 1);
        let head = &marks[0];
        assert_eq!(head.end, MarkerEnd::Head);
        assert_eq!(head.at, dvec2(0.0, 0.0));
        assert!((head.direction - dvec2(-1.0, 0.0)).length() < EPSILON);
        assert_eq!(head.width, 12_700.0 * 3.0);
    }

    #[test]
    fn line_end_sizes_scale_the_head() {
        let path = line();
        let options = CompileOptions::default();
        let mut node = node(LineEndKind::None, LineEndKind::Arrow);
        node.tail = Some(LineEnd {
            kind: LineEndKind::Arrow,
            width: LineEndSize::Small,
            length: LineEndSize::Large,
        });
        node.width = Some(2.0);
        let stroke = resolve_stroke(Some(&node), ScaleFactor::ONE, &options);
        let marks = markers(Some(&node), &path, &stroke, &options);
        assert_eq!((marks[0].width, marks[0].length), (4.0, 10.0));
        insta::assert_snapshot!(marks[0].path().to_path_string(), @"M90,2 L100,0 L90,-2");
    }
}
