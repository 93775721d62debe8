//! Per-shape orchestration.
//!
//! [`build`] takes everything the document says about one shape and returns
//! its outline plus resolved paint:
//!
//! 1. custom geometry wins over the preset tag when both are present
//! 2. preset kinds resolve their guides, then run their formula
//! 3. flips mirror the path inside its own box; rotation is handed back
//!    untouched for the emitter's transform
//! 4. fill and stroke are resolved for every shape, drawable or not
//! 5. arrowheads are added for line-like outlines only

use crate::custom::{CustomGeometry, assemble};
use crate::defaults::{LINE_END_LARGE, LINE_END_MEDIUM, LINE_END_SMALL, LINE_WIDTH_EMU, SHADOW_ALPHA};
use crate::errors::BuildError;
use crate::geom::Path;
use crate::guides::{self, RawGuide};
use crate::log::debug;
use crate::paint::fill::{self, FillDescriptor, FillNode};
use crate::paint::shadow::{Shadow, ShadowNode};
use crate::paint::stroke::{self, LineNode, MarkerDescriptor, StrokeDescriptor};
use crate::paint::{AuxResources, Resource, StyleSink};
use crate::presets::{self, ShapeKind};
use crate::types::{Angle, BoundingBox, NumericError, ScaleFactor};

/// Knobs that are not part of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOptions {
    /// Stroke width in EMU for a line node without `w`.
    pub default_stroke_width: f64,
    /// Arrowhead width/length in multiples of the line width for `sm`,
    /// `med` and `lg`.
    pub arrowhead_sizes: [f64; 3],
    /// Shadow alpha when the effect node has none.
    pub shadow_alpha: f64,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            default_stroke_width: LINE_WIDTH_EMU,
            arrowhead_sizes: [LINE_END_SMALL, LINE_END_MEDIUM, LINE_END_LARGE],
            shadow_alpha: SHADOW_ALPHA,
        }
    }
}

/// Where a shape's outline comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometrySource {
    /// `prstGeom@prst`, kept as text so unknown tags degrade instead of failing.
    Preset(String),
    Custom(CustomGeometry),
}

impl GeometrySource {
    pub fn preset(kind: ShapeKind) -> Self {
        GeometrySource::Preset(kind.as_tag().to_string())
    }
}

/// Everything known about one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeInput {
    pub geometry: GeometrySource,
    pub bbox: BoundingBox,
    pub rotation: Angle,
    pub flip_h: bool,
    pub flip_v: bool,
    pub guides: Vec<RawGuide>,
    pub fill: Option<FillNode>,
    /// Fill of the enclosing group, for `grpFill`.
    pub group_fill: Option<FillNode>,
    pub line: Option<LineNode>,
    pub shadow: Option<ShadowNode>,
    pub scale: ScaleFactor,
    pub options: CompileOptions,
}

impl ShapeInput {
    pub fn new(geometry: GeometrySource, bbox: BoundingBox) -> Self {
        ShapeInput {
            geometry,
            bbox,
            rotation: Angle::default(),
            flip_h: false,
            flip_v: false,
            guides: Vec::new(),
            fill: None,
            group_fill: None,
            line: None,
            shadow: None,
            scale: ScaleFactor::ONE,
            options: CompileOptions::default(),
        }
    }

    pub fn preset(kind: ShapeKind, w: f64, h: f64) -> Self {
        Self::new(GeometrySource::preset(kind), BoundingBox::new(w, h))
    }

    /// Reject input that [`build`] would otherwise degrade silently.
    pub fn validate(&self) -> Result<(), BuildError> {
        let BoundingBox { w, h } = self.bbox;
        BoundingBox::try_new(w, h).map_err(|reason| BuildError::InvalidBounds { w, h, reason })?;
        ScaleFactor::try_new(self.scale.get()).map_err(|reason| BuildError::InvalidScale {
            value: self.scale.get(),
            reason,
        })?;
        let rotation = self.rotation.degrees();
        if !rotation.is_finite() {
            let reason = if rotation.is_nan() {
                NumericError::NaN
            } else {
                NumericError::Infinite
            };
            return Err(BuildError::InvalidRotation {
                value: rotation,
                reason,
            });
        }
        if let GeometrySource::Preset(tag) = &self.geometry {
            tag.parse::<ShapeKind>()?;
        }
        Ok(())
    }
}

/// The compiled shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    /// `None` for custom geometry and unknown tags.
    pub kind: Option<ShapeKind>,
    pub path: Path,
    pub fill: FillDescriptor,
    pub stroke: StrokeDescriptor,
    pub aux: AuxResources,
    pub markers: Vec<MarkerDescriptor>,
    pub rotation: Angle,
}

/// Compile one shape, interning shared definitions into `styles`.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn build<S: StyleSink + ?Sized>(input: &ShapeInput, styles: &mut S) -> ShapeGeometry {
    let BoundingBox { w, h } = input.bbox;

    let (kind, path, line_like) = match &input.geometry {
        GeometrySource::Custom(geometry) => {
            let path = assemble(geometry, input.bbox);
            let open = path.has_open_subpath();
            (None, path, open)
        }
        GeometrySource::Preset(tag) => match tag.parse::<ShapeKind>() {
            Ok(kind) => {
                let guides = guides::resolve(kind, &input.guides, input.scale);
                let path = presets::compute(kind, w, h, &guides);
                (Some(kind), path, kind.is_line_like())
            }
            Err(err) => {
                debug!(%err, "unknown preset tag, emitting empty path");
                (None, Path::new(), false)
            }
        },
    };
    let path = path.flipped(w, h, input.flip_h, input.flip_v);

    let (fill, mut aux) = fill::resolve(
        input.fill.as_ref(),
        input.group_fill.as_ref(),
        kind,
        input.bbox,
        styles,
    );
    let stroke = stroke::resolve_stroke(input.line.as_ref(), input.scale, &input.options);

    let markers = if line_like {
        stroke::markers(input.line.as_ref(), &path, &stroke, &input.options)
    } else {
        Vec::new()
    };

    if let Some(node) = &input.shadow {
        let shadow = Shadow::resolve(node, input.scale, input.options.shadow_alpha);
        let id = styles.intern(&shadow.style_text());
        aux.push(id, Resource::Shadow(shadow));
    }

    ShapeGeometry {
        kind,
        path,
        fill,
        stroke,
        aux,
        markers,
        rotation: input.rotation,
    }
}
