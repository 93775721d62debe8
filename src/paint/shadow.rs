//! Outer shadow effect (`a:outerShdw`).

use glam::{DVec2, dvec2};

use crate::defaults::ANGLE_UNITS_PER_DEGREE;
use crate::geom::{arc::sin_cos_deg, fmt_num};
use crate::types::{Color, ScaleFactor};

/// The effect node as read from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowNode {
    pub color: Color,
    /// `None` uses the configured default.
    pub alpha: Option<f64>,
    /// Blur radius in EMU.
    pub blur: f64,
    /// Offset distance in EMU.
    pub dist: f64,
    /// Offset direction in 60000ths of a degree, clockwise from 3 o'clock.
    pub dir: i64,
}

/// A resolved drop shadow in device units.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub alpha: f64,
    pub blur: f64,
    pub offset: DVec2,
}

impl Shadow {
    pub fn resolve(node: &ShadowNode, scale: ScaleFactor, default_alpha: f64) -> Shadow {
        let (s, c) = sin_cos_deg(node.dir as f64 / ANGLE_UNITS_PER_DEGREE);
        let dist = scale.apply(node.dist);
        Shadow {
            color: node.color.clone(),
            alpha: node.alpha.unwrap_or(default_alpha).clamp(0.0, 1.0),
            blur: scale.apply(node.blur.max(0.0)),
            offset: dvec2(c, s) * dist,
        }
    }

    pub fn style_text(&self) -> String {
        format!(
            "shadow:{},{};blur:{};color:{};alpha:{}",
            fmt_num(self.offset.x),
            fmt_num(self.offset.y),
            fmt_num(self.blur),
            self.color,
            fmt_num(self.alpha)
        )
    }
}
