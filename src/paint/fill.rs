//! Fill classification and paint resources.
//!
//! A fill node resolves to one [`FillDescriptor`] variant. Variants that need
//! a definition emitted next to the path (gradients, patterns, pictures)
//! intern that definition into the caller's style sink and carry the id.

use std::fmt::Write as _;
use std::io::Cursor;

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use super::pattern::{PatternPreset, PatternTile};
use super::style::{StyleId, StyleSink};
use super::{AuxResources, Resource};
use crate::defaults::{ANGLE_UNITS_PER_DEGREE, PERCENT_UNITS};
use crate::geom::{arc::sin_cos_deg, fmt_num};
use crate::log::debug;
use crate::presets::{ShapeKind, div};
use crate::types::{BoundingBox, Color};

// ============================================================================
// Input nodes
// ============================================================================

/// A gradient stop as read from the document. `pos` is in 1000ths of a
/// percent; stops without one are spaced evenly.
#[derive(Debug, Clone, PartialEq)]
pub struct StopNode {
    pub pos: Option<i64>,
    pub color: Color,
    pub alpha: f64,
}

impl StopNode {
    pub fn new(pos: i64, color: Color) -> Self {
        StopNode {
            pos: Some(pos),
            color,
            alpha: 1.0,
        }
    }
}

/// Focus rectangle of a path gradient: insets from each edge in 1000ths of
/// a percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FocusRect {
    pub l: i64,
    pub t: i64,
    pub r: i64,
    pub b: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GradientShade {
    /// `a:lin`, angle in 60000ths of a degree.
    Linear { angle: i64 },
    /// `a:path`, radiating from the focus rectangle.
    Radial { focus: FocusRect },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientNode {
    pub stops: Vec<StopNode>,
    pub shade: GradientShade,
}

/// `a:tile` scale, 100000 = 100%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileNode {
    pub sx: i64,
    pub sy: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PictureNode {
    /// Relationship id or name of the image part.
    pub image_ref: String,
    /// Image payload, when the caller has it loaded.
    pub data: Option<Vec<u8>>,
    pub tile: Option<TileNode>,
}

/// A fill node, colors already resolved by the theme layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FillNode {
    NoFill,
    Solid {
        color: Color,
        alpha: f64,
    },
    Gradient(GradientNode),
    Pattern {
        preset: String,
        foreground: Color,
        background: Color,
    },
    Picture(PictureNode),
    /// Take the fill of the enclosing group.
    GroupFill,
}

impl FillNode {
    pub fn solid(color: Color) -> Self {
        FillNode::Solid { color, alpha: 1.0 }
    }
}

// ============================================================================
// Descriptors
// ============================================================================

/// How a resolved fill is referenced from the emitted shape.
#[enum_dispatch]
pub trait PaintSource {
    /// Value of a `fill` attribute: `none`, a color, or `url(#id)`.
    fn paint_ref(&self) -> String;

    /// Id of the definition this paint needs emitted, if any.
    fn resource_id(&self) -> Option<StyleId> {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoPaint;

impl PaintSource for NoPaint {
    fn paint_ref(&self) -> String {
        "none".to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolidPaint {
    pub color: Color,
    pub alpha: f64,
}

impl PaintSource for SolidPaint {
    fn paint_ref(&self) -> String {
        self.color.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// In `[0, 1]`.
    pub offset: f64,
    pub color: Color,
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GradientGeometry {
    /// Start and end of the gradient vector as fractions of the box.
    Linear {
        angle: f64,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    /// Center and radius as fractions of the box.
    Radial { cx: f64, cy: f64, r: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    /// Ascending by offset.
    pub stops: Vec<GradientStop>,
    pub geometry: GradientGeometry,
}

impl Gradient {
    /// Definition text used for interning.
    pub fn style_text(&self) -> String {
        let mut out = match self.geometry {
            GradientGeometry::Linear { x1, y1, x2, y2, .. } => format!(
                "linear:{},{},{},{}",
                fmt_num(x1),
                fmt_num(y1),
                fmt_num(x2),
                fmt_num(y2)
            ),
            GradientGeometry::Radial { cx, cy, r } => {
                format!("radial:{},{},{}", fmt_num(cx), fmt_num(cy), fmt_num(r))
            }
        };
        for stop in &self.stops {
            let _ = write!(
                out,
                ";stop:{} {} {}",
                fmt_num(stop.offset),
                stop.color,
                fmt_num(stop.alpha)
            );
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientPaint {
    pub id: StyleId,
    pub gradient: Gradient,
}

impl PaintSource for GradientPaint {
    fn paint_ref(&self) -> String {
        format!("url(#{})", self.id)
    }

    fn resource_id(&self) -> Option<StyleId> {
        Some(self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternPaint {
    pub id: StyleId,
    pub preset: PatternPreset,
}

impl PaintSource for PatternPaint {
    fn paint_ref(&self) -> String {
        format!("url(#{})", self.id)
    }

    fn resource_id(&self) -> Option<StyleId> {
        Some(self.id)
    }
}

/// An image laid over the box.
#[derive(Debug, Clone, PartialEq)]
pub struct PictureTile {
    pub image_ref: String,
    /// Pixel size probed from the payload.
    pub pixel_size: Option<(u32, u32)>,
    /// Tile size as a fraction of the box; `(1, 1)` stretches over it.
    pub extent: (f64, f64),
}

impl PictureTile {
    pub fn style_text(&self) -> String {
        format!(
            "picture:{};tile:{},{}",
            self.image_ref,
            fmt_num(self.extent.0),
            fmt_num(self.extent.1)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PicturePaint {
    pub id: StyleId,
    pub tile: PictureTile,
}

impl PaintSource for PicturePaint {
    fn paint_ref(&self) -> String {
        format!("url(#{})", self.id)
    }

    fn resource_id(&self) -> Option<StyleId> {
        Some(self.id)
    }
}

/// The enclosing group's fill, resolved by whoever composes the group.
#[derive(Debug, Clone, PartialEq)]
pub struct InheritedPaint;

impl PaintSource for InheritedPaint {
    fn paint_ref(&self) -> String {
        "inherit".to_string()
    }
}

/// A resolved fill.
#[enum_dispatch(PaintSource)]
#[derive(Debug, Clone, PartialEq)]
pub enum FillDescriptor {
    None(NoPaint),
    Solid(SolidPaint),
    Gradient(GradientPaint),
    Pattern(PatternPaint),
    Picture(PicturePaint),
    GroupInherited(InheritedPaint),
}

impl FillDescriptor {
    pub fn is_none(&self) -> bool {
        matches!(self, FillDescriptor::None(_))
    }
}

impl Default for FillDescriptor {
    fn default() -> Self {
        FillDescriptor::None(NoPaint)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve a shape's fill.
///
/// `inherited` is the enclosing group's fill node, consulted once when the
/// shape asks for the group fill. `kind` is `None` for custom geometry.
pub fn resolve<S: StyleSink + ?Sized>(
    fill: Option<&FillNode>,
    inherited: Option<&FillNode>,
    kind: Option<ShapeKind>,
    bbox: BoundingBox,
    styles: &mut S,
) -> (FillDescriptor, AuxResources) {
    let node = match fill {
        Some(FillNode::GroupFill) => match inherited {
            None | Some(FillNode::GroupFill) => {
                return outline_filter(kind, (InheritedPaint.into(), AuxResources::default()));
            }
            Some(group) => group,
        },
        Some(node) => node,
        None => return (NoPaint.into(), AuxResources::default()),
    };

    if kind.is_some_and(ShapeKind::is_outline_only)
        && !matches!(node, FillNode::Solid { .. } | FillNode::Pattern { .. })
    {
        debug!(kind = ?kind, "outline-only shape, dropping fill");
        return (NoPaint.into(), AuxResources::default());
    }

    match node {
        FillNode::NoFill | FillNode::GroupFill => (NoPaint.into(), AuxResources::default()),
        FillNode::Solid { color, alpha } => (
            SolidPaint {
                color: color.clone(),
                alpha: alpha.clamp(0.0, 1.0),
            }
            .into(),
            AuxResources::default(),
        ),
        FillNode::Gradient(node) => {
            let gradient = gradient(node, bbox);
            let id = styles.intern(&gradient.style_text());
            let aux = AuxResources::single(id, Resource::Gradient(gradient.clone()));
            (GradientPaint { id, gradient }.into(), aux)
        }
        FillNode::Pattern {
            preset,
            foreground,
            background,
        } => {
            let tile = PatternTile::new(
                PatternPreset::from_tag_lossy(preset),
                foreground.clone(),
                background.clone(),
            );
            let id = styles.intern(&tile.style_text());
            let preset = tile.preset;
            (
                PatternPaint { id, preset }.into(),
                AuxResources::single(id, Resource::Pattern(tile)),
            )
        }
        FillNode::Picture(node) => {
            let tile = picture_tile(node, bbox);
            let id = styles.intern(&tile.style_text());
            let aux = AuxResources::single(id, Resource::Picture(tile.clone()));
            (PicturePaint { id, tile }.into(), aux)
        }
    }
}

fn outline_filter(
    kind: Option<ShapeKind>,
    resolved: (FillDescriptor, AuxResources),
) -> (FillDescriptor, AuxResources) {
    if kind.is_some_and(ShapeKind::is_outline_only) {
        (NoPaint.into(), AuxResources::default())
    } else {
        resolved
    }
}

/// Normalize stops and project the shading onto `bbox`.
pub fn gradient(node: &GradientNode, bbox: BoundingBox) -> Gradient {
    let n = node.stops.len();
    let mut stops: Vec<GradientStop> = node
        .stops
        .iter()
        .enumerate()
        .map(|(i, stop)| {
            let offset = match stop.pos {
                Some(pos) => (pos as f64 / PERCENT_UNITS).clamp(0.0, 1.0),
                None if n > 1 => i as f64 / (n - 1) as f64,
                None => 0.0,
            };
            GradientStop {
                offset,
                color: stop.color.clone(),
                alpha: stop.alpha.clamp(0.0, 1.0),
            }
        })
        .collect();
    stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));

    let geometry = match node.shade {
        GradientShade::Linear { angle } => linear_geometry(angle, bbox),
        GradientShade::Radial { focus } => radial_geometry(focus),
    };
    Gradient { stops, geometry }
}

/// The stored angle turned by +90 degrees, so that 0 points up and 90 to
/// the right, then projected so the vector spans the whole box.
fn linear_geometry(angle: i64, bbox: BoundingBox) -> GradientGeometry {
    let angle = angle as f64 / ANGLE_UNITS_PER_DEGREE + 90.0;
    let (s, c) = sin_cos_deg(angle);
    let dir = dvec2(s, -c);
    let half = (bbox.w * dir.x.abs() + bbox.h * dir.y.abs()) / 2.0;
    let dx = div(dir.x * half, bbox.w);
    let dy = div(dir.y * half, bbox.h);
    GradientGeometry::Linear {
        angle,
        x1: 0.5 - dx,
        y1: 0.5 - dy,
        x2: 0.5 + dx,
        y2: 0.5 + dy,
    }
}

/// Center of the focus rectangle, radius reaching the farthest corner.
fn radial_geometry(focus: FocusRect) -> GradientGeometry {
    let frac = |v: i64| v as f64 / PERCENT_UNITS;
    let center = dvec2(
        (frac(focus.l) + 1.0 - frac(focus.r)) / 2.0,
        (frac(focus.t) + 1.0 - frac(focus.b)) / 2.0,
    );
    let r = [
        DVec2::ZERO,
        DVec2::X,
        DVec2::Y,
        DVec2::ONE,
    ]
    .into_iter()
    .map(|corner| corner.distance(center))
    .fold(0.0, f64::max);
    GradientGeometry::Radial {
        cx: center.x,
        cy: center.y,
        r,
    }
}

fn picture_tile(node: &PictureNode, bbox: BoundingBox) -> PictureTile {
    let pixel_size = node.data.as_deref().and_then(probe_dimensions);
    let extent = match node.tile {
        None => (1.0, 1.0),
        Some(tile) => {
            let sx = tile.sx as f64 / PERCENT_UNITS;
            let sy = tile.sy as f64 / PERCENT_UNITS;
            match pixel_size {
                Some((pw, ph)) if !bbox.is_degenerate() => {
                    (pw as f64 * sx / bbox.w, ph as f64 * sy / bbox.h)
                }
                _ => (sx, sy),
            }
        }
    };
    PictureTile {
        image_ref: node.image_ref.clone(),
        pixel_size,
        extent,
    }
}

/// Pixel size of an encoded image, without decoding the pixels.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn probe_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    let reader = match image::ImageReader::new(Cursor::new(bytes)).with_guessed_format() {
        Ok(reader) => reader,
        Err(err) => {
            debug!(%err, "cannot read picture payload");
            return None;
        }
    };
    match reader.into_dimensions() {
        Ok(size) => Some(size),
        Err(err) => {
            debug!(%err, "unrecognized picture payload");
            None
        }
    }
}
