//! Error types with rich diagnostics using miette
//!
//! None of these abort a render: guide errors are reported and replaced by
//! the kind's default, build errors are only returned by the explicit
//! validation entry points.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

/// Formula text attached to a diagnostic, named after the guide it belongs to
pub(crate) fn formula_source(guide: &str, formula: &str) -> NamedSource<String> {
    NamedSource::new(format!("gd[{guide}]"), formula.to_string())
}

// ============================================================================
// Guide Errors
// ============================================================================

/// Errors raised while reading an adjustment guide formula
#[derive(Error, Diagnostic, Debug)]
pub enum GuideError {
    #[error("malformed guide formula: {message}")]
    #[diagnostic(
        code(drawml_geom::guide::malformed),
        help("adjust values are written as `val N`, e.g. `val 50000`")
    )]
    Malformed {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("operand `{name}` cannot be resolved outside a shape guide list")]
    #[diagnostic(code(drawml_geom::guide::unresolved_operand))]
    UnresolvedOperand {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a literal")]
        span: SourceSpan,
    },

    #[error("operator `{op}` takes {expected} operands, found {found}")]
    #[diagnostic(code(drawml_geom::guide::arity))]
    Arity {
        op: String,
        expected: usize,
        found: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("in this formula")]
        span: SourceSpan,
    },

    #[error("guide `{guide}` evaluated to a non-finite value")]
    #[diagnostic(code(drawml_geom::guide::non_finite))]
    NonFinite { guide: String },
}

// ============================================================================
// Build Errors
// ============================================================================

/// Errors reported by up-front validation of a shape input
#[derive(Error, Diagnostic, Debug)]
pub enum BuildError {
    #[error("invalid bounding box {w}x{h}: {reason}")]
    #[diagnostic(code(drawml_geom::build::invalid_bounds))]
    InvalidBounds {
        w: f64,
        h: f64,
        reason: NumericError,
    },

    #[error("invalid scale factor {value}: {reason}")]
    #[diagnostic(
        code(drawml_geom::build::invalid_scale),
        help("the scale factor converts EMU to device units and must be positive")
    )]
    InvalidScale { value: f64, reason: NumericError },

    #[error("invalid rotation {value}: {reason}")]
    #[diagnostic(code(drawml_geom::build::invalid_rotation))]
    InvalidRotation { value: f64, reason: NumericError },

    #[error("unknown preset shape kind `{tag}`")]
    #[diagnostic(
        code(drawml_geom::build::unknown_kind),
        help("preset tags are DrawingML ST_ShapeType values such as `rect` or `roundRect`")
    )]
    UnknownKind { tag: String },
}
