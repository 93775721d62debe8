//! Adjustment guide resolution.
//!
//! A shape's `avLst` arrives as name/formula pairs such as
//! `("adj", "val 50000")`. Resolution walks the guides a shape kind declares,
//! takes the document value when it is readable and the kind's default when
//! it is not, and multiplies by the document scale factor. Clamping is left
//! to the formulas, which know each guide's valid range.

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::{GuideError, formula_source};
use crate::log::{debug, warn};
use crate::presets::ShapeKind;
use crate::types::ScaleFactor;

#[derive(Parser)]
#[grammar = "guides.pest"]
pub(crate) struct GuideParser;

/// A raw `gd` entry as found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGuide {
    pub name: String,
    pub formula: String,
}

impl RawGuide {
    pub fn new(name: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
        }
    }

    /// `name = "val N"`
    pub fn val(name: impl Into<String>, value: i64) -> Self {
        Self::new(name, format!("val {value}"))
    }
}

/// A guide a shape kind reads, with its default in raw document units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideDecl {
    pub name: &'static str,
    pub default: f64,
}

impl GuideDecl {
    pub const fn new(name: &'static str, default: f64) -> Self {
        Self { name, default }
    }
}

/// Resolved guide values, scaled by the document scale factor.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideSet {
    scale: ScaleFactor,
    values: Vec<(&'static str, f64)>,
}

impl GuideSet {
    pub fn empty(scale: ScaleFactor) -> Self {
        Self {
            scale,
            values: Vec::new(),
        }
    }

    /// Every declared guide at its default.
    pub fn defaults(decls: &[GuideDecl], scale: ScaleFactor) -> Self {
        Self {
            scale,
            values: decls
                .iter()
                .map(|d| (d.name, scale.apply(d.default)))
                .collect(),
        }
    }

    pub fn try_get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    /// Scaled value of a declared guide.
    ///
    /// # Panics
    ///
    /// When `name` was never declared: the formula reading it is broken.
    pub fn get(&self, name: &str) -> f64 {
        match self.try_get(name) {
            Some(v) => v,
            None => panic!("guide `{name}` is not declared for this shape kind"),
        }
    }

    /// The guide in raw document units (`val N` -> `N`).
    pub fn raw(&self, name: &str) -> f64 {
        self.scale.unapply(self.get(name))
    }

    /// Override a declared guide with a raw document value.
    pub fn set_raw(&mut self, name: &str, raw: f64) {
        let scaled = self.scale.apply(raw);
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = scaled,
            None => panic!("guide `{name}` is not declared for this shape kind"),
        }
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.values.iter().copied()
    }
}

/// Resolve the guides `kind` declares.
pub fn resolve(kind: ShapeKind, raw: &[RawGuide], scale: ScaleFactor) -> GuideSet {
    resolve_declared(kind.guides(), raw, scale)
}

/// Resolve an explicit declaration list.
pub fn resolve_declared(decls: &[GuideDecl], raw: &[RawGuide], scale: ScaleFactor) -> GuideSet {
    for guide in raw {
        if !decls.iter().any(|d| d.name == guide.name) {
            debug!(guide = %guide.name, "ignoring undeclared adjust value");
        }
    }

    let values = decls
        .iter()
        .map(|decl| {
            let value = match raw.iter().find(|g| g.name == decl.name) {
                Some(guide) => match evaluate(&guide.name, &guide.formula) {
                    Ok(v) => v,
                    Err(err) => {
                        report_fallback(decl, err);
                        decl.default
                    }
                },
                None => decl.default,
            };
            (decl.name, scale.apply(value))
        })
        .collect();

    GuideSet { scale, values }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn report_fallback(decl: &GuideDecl, err: GuideError) {
    warn!(
        guide = decl.name,
        default = decl.default,
        "falling back to default: {:?}",
        miette::Report::new(err)
    );
}

// ============================================================================
// Formulas
// ============================================================================

/// DrawingML guide operators. Angles are in 60000ths of a degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `*/ x y z` = x * y / z
    MulDiv,
    /// `+- x y z` = x + y - z
    AddSub,
    /// `+/ x y z` = (x + y) / z
    AddDiv,
    /// `?: x y z` = x > 0 ? y : z
    IfElse,
    Abs,
    At2,
    Cat2,
    Cos,
    Max,
    Min,
    Mod,
    Pin,
    Sat2,
    Sin,
    Sqrt,
    Tan,
    Val,
}

impl Operator {
    fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "*/" => Operator::MulDiv,
            "+-" => Operator::AddSub,
            "+/" => Operator::AddDiv,
            "?:" => Operator::IfElse,
            "abs" => Operator::Abs,
            "at2" => Operator::At2,
            "cat2" => Operator::Cat2,
            "cos" => Operator::Cos,
            "max" => Operator::Max,
            "min" => Operator::Min,
            "mod" => Operator::Mod,
            "pin" => Operator::Pin,
            "sat2" => Operator::Sat2,
            "sin" => Operator::Sin,
            "sqrt" => Operator::Sqrt,
            "tan" => Operator::Tan,
            "val" => Operator::Val,
            _ => return None,
        })
    }

    pub fn token(self) -> &'static str {
        match self {
            Operator::MulDiv => "*/",
            Operator::AddSub => "+-",
            Operator::AddDiv => "+/",
            Operator::IfElse => "?:",
            Operator::Abs => "abs",
            Operator::At2 => "at2",
            Operator::Cat2 => "cat2",
            Operator::Cos => "cos",
            Operator::Max => "max",
            Operator::Min => "min",
            Operator::Mod => "mod",
            Operator::Pin => "pin",
            Operator::Sat2 => "sat2",
            Operator::Sin => "sin",
            Operator::Sqrt => "sqrt",
            Operator::Tan => "tan",
            Operator::Val => "val",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Operator::Abs | Operator::Sqrt | Operator::Val => 1,
            Operator::At2
            | Operator::Cos
            | Operator::Max
            | Operator::Min
            | Operator::Sin
            | Operator::Tan => 2,
            _ => 3,
        }
    }

    /// Apply to exactly `arity()` arguments.
    pub fn apply(self, a: &[f64]) -> f64 {
        let rad = |units: f64| (units / crate::defaults::ANGLE_UNITS_PER_DEGREE).to_radians();
        let units = |radians: f64| radians.to_degrees() * crate::defaults::ANGLE_UNITS_PER_DEGREE;
        match self {
            Operator::MulDiv => {
                if a[2] == 0.0 {
                    0.0
                } else {
                    a[0] * a[1] / a[2]
                }
            }
            Operator::AddSub => a[0] + a[1] - a[2],
            Operator::AddDiv => {
                if a[2] == 0.0 {
                    0.0
                } else {
                    (a[0] + a[1]) / a[2]
                }
            }
            Operator::IfElse => {
                if a[0] > 0.0 {
                    a[1]
                } else {
                    a[2]
                }
            }
            Operator::Abs => a[0].abs(),
            Operator::At2 => units(a[1].atan2(a[0])),
            Operator::Cat2 => a[0] * a[2].atan2(a[1]).cos(),
            Operator::Cos => a[0] * rad(a[1]).cos(),
            Operator::Max => a[0].max(a[1]),
            Operator::Min => a[0].min(a[1]),
            Operator::Mod => (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt(),
            Operator::Pin => {
                if a[1] < a[0] {
                    a[0]
                } else if a[1] > a[2] {
                    a[2]
                } else {
                    a[1]
                }
            }
            Operator::Sat2 => a[0] * a[2].atan2(a[1]).sin(),
            Operator::Sin => a[0] * rad(a[1]).sin(),
            Operator::Sqrt => a[0].sqrt(),
            Operator::Tan => a[0] * rad(a[1]).tan(),
            Operator::Val => a[0],
        }
    }
}

/// One operand of a formula.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Literal(f64),
    Name {
        name: String,
        span: std::ops::Range<usize>,
    },
}

/// Shape-independent named constants (angles).
fn builtin_constant(name: &str) -> Option<f64> {
    Some(match name {
        "cd2" => 10_800_000.0,
        "cd4" => 5_400_000.0,
        "cd8" => 2_700_000.0,
        "3cd4" => 16_200_000.0,
        "3cd8" => 8_100_000.0,
        "5cd8" => 13_500_000.0,
        "7cd8" => 18_900_000.0,
        _ => return None,
    })
}

/// A parsed guide formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    pub op: Operator,
    pub args: Vec<Operand>,
    guide: String,
    source: String,
}

impl Formula {
    /// Parse `text`, the formula of guide `guide`.
    pub fn parse(guide: &str, text: &str) -> Result<Self, GuideError> {
        let mut pairs = GuideParser::parse(Rule::formula, text)
            .map_err(|e| pest_error(guide, text, e))?;

        let malformed = |message: &str| GuideError::Malformed {
            message: message.to_string(),
            src: formula_source(guide, text),
            span: (0, text.len()).into(),
        };

        let root = pairs.next().ok_or_else(|| malformed("empty formula"))?;
        let body = root
            .into_inner()
            .find(|p| matches!(p.as_rule(), Rule::val_formula | Rule::op_formula))
            .ok_or_else(|| malformed("empty formula"))?;

        let (op, operands) = match body.as_rule() {
            Rule::val_formula => (Operator::Val, body.into_inner().collect::<Vec<_>>()),
            _ => {
                let mut inner = body.into_inner();
                let token = inner.next().ok_or_else(|| malformed("missing operator"))?;
                let op = Operator::from_token(token.as_str())
                    .ok_or_else(|| malformed("unknown operator"))?;
                (op, inner.collect())
            }
        };

        let args = operands
            .into_iter()
            .map(|p| parse_operand(guide, text, p))
            .collect::<Result<Vec<_>, _>>()?;

        if args.len() != op.arity() {
            return Err(GuideError::Arity {
                op: op.token().to_string(),
                expected: op.arity(),
                found: args.len(),
                src: formula_source(guide, text),
                span: (0, text.len()).into(),
            });
        }

        Ok(Formula {
            op,
            args,
            guide: guide.to_string(),
            source: text.to_string(),
        })
    }

    /// True for the plain `val N` form.
    pub fn is_literal(&self) -> bool {
        self.op == Operator::Val && matches!(self.args[..], [Operand::Literal(_)])
    }

    /// Evaluate with literal operands and the built-in angle constants.
    pub fn evaluate(&self) -> Result<f64, GuideError> {
        let args = self
            .args
            .iter()
            .map(|arg| match arg {
                Operand::Literal(v) => Ok(*v),
                Operand::Name { name, span } => {
                    builtin_constant(name).ok_or_else(|| GuideError::UnresolvedOperand {
                        name: name.clone(),
                        src: formula_source(&self.guide, &self.source),
                        span: (span.start, span.end - span.start).into(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let value = self.op.apply(&args);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GuideError::NonFinite {
                guide: self.guide.clone(),
            })
        }
    }
}

/// Parse and evaluate a guide formula to its raw (unscaled) value.
pub fn evaluate(guide: &str, text: &str) -> Result<f64, GuideError> {
    Formula::parse(guide, text)?.evaluate()
}

fn parse_operand(guide: &str, text: &str, pair: Pair<Rule>) -> Result<Operand, GuideError> {
    let span = pair.as_span();
    let inner = pair.into_inner().next();
    match inner {
        Some(p) if p.as_rule() == Rule::number => {
            p.as_str()
                .parse::<f64>()
                .map(Operand::Literal)
                .map_err(|e| GuideError::Malformed {
                    message: e.to_string(),
                    src: formula_source(guide, text),
                    span: (span.start(), span.end() - span.start()).into(),
                })
        }
        Some(p) => Ok(Operand::Name {
            name: p.as_str().to_string(),
            span: span.start()..span.end(),
        }),
        None => Err(GuideError::Malformed {
            message: "missing operand".to_string(),
            src: formula_source(guide, text),
            span: (span.start(), span.end() - span.start()).into(),
        }),
    }
}

fn pest_error(guide: &str, text: &str, err: pest::error::Error<Rule>) -> GuideError {
    let (start, end) = match err.location {
        pest::error::InputLocation::Pos(p) => (p, p),
        pest::error::InputLocation::Span(span) => span,
    };
    GuideError::Malformed {
        message: err.variant.message().into_owned(),
        src: formula_source(guide, text),
        span: (start, end.saturating_sub(start)).into(),
    }
}
