//! DrawingML preset and custom geometry compiler.
//!
//! Turns one shape's declarative description (box, `prstGeom` tag or
//! `custGeom` path list, adjustment guides, fill and line nodes) into an
//! outline [`Path`] in the box's own coordinate space plus resolved paint
//! descriptors. Parsing the document, resolving theme colors and writing
//! markup are left to the caller.
//!
//! ```ignore
//! use drawml_geom::{ShapeInput, ShapeKind, StyleTable, build};
//!
//! let mut styles = StyleTable::new();
//! let shape = build(&ShapeInput::preset(ShapeKind::RoundRect, 200.0, 100.0), &mut styles);
//! println!("{}", shape.path);
//! ```

pub mod custom;
pub mod defaults;
pub mod dispatch;
pub mod errors;
pub mod geom;
pub mod guides;
mod log;
pub mod paint;
pub mod presets;
pub mod types;

pub use custom::{CustomGeometry, CustomPath, assemble};
pub use dispatch::{CompileOptions, GeometrySource, ShapeGeometry, ShapeInput, build};
pub use errors::{BuildError, GuideError};
pub use geom::{Path, PathBuilder, PathCommand};
pub use guides::RawGuide;
pub use paint::{
    AuxResources, FillDescriptor, FillNode, LineNode, PaintSource, SharedStyleTable,
    StrokeDescriptor, StyleId, StyleSink, StyleTable,
};
pub use presets::{ShapeKind, UNSUPPORTED_KINDS, compute};
pub use types::{Angle, BoundingBox, Color, ScaleFactor};
