//! Path geometry: the command model, the arc primitive and the builder that
//! presets and custom geometry draw with.

pub mod arc;
mod builder;
mod path;

pub use arc::{ArcSpec, arc, clockwise_sweep, ellipse_point, visual_to_parametric};
pub use builder::PathBuilder;
pub use path::{Path, PathCommand};
pub(crate) use path::fmt_num;
