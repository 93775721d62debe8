//! Preset geometry formulas, one pure function per DrawingML shape kind.
//!
//! Every formula takes a [`Frame`] (box size plus resolved guides) and returns
//! a [`Path`] whose origin is the top-left corner of the box. Formulas read
//! guides in raw document units through [`Frame::adj`] and clamp them
//! themselves, so each formula is linear in `w` and `h`.
//!
//! Kinds are grouped by family; shapes that share a construction share the
//! helper that draws it:
//!
//! - `basic`: polygons, ellipses, pies, frames and the other plain outlines
//! - `corners`: rounded, snipped and mixed-corner rectangles
//! - `stars`: stars and seals
//! - `arrows`: block arrows and arrow callouts
//! - `callouts`: wedge, leader and cloud callouts
//! - `flowchart`: flowchart glyphs, mostly drawn in a private path space
//! - `brackets`: brackets and braces
//! - `math`: math operators, tabs and chart glyphs
//! - `connectors`: lines and connectors
//! - `banners`: ribbons, scrolls and waves
//! - `buttons`: action buttons

use std::fmt;
use std::str::FromStr;

use crate::errors::BuildError;
use crate::geom::{Path, visual_to_parametric};
use crate::guides::{GuideDecl, GuideSet};
use crate::log::debug;
use crate::types::ScaleFactor;

/// Build a [`Preset`] from a formula and its guide declarations.
macro_rules! preset {
    ($build:path) => {
        $crate::presets::Preset {
            guides: &[],
            build: $build,
        }
    };
    ($build:path, $($name:literal = $default:expr),+ $(,)?) => {
        $crate::presets::Preset {
            guides: &[$($crate::guides::GuideDecl {
                name: $name,
                default: $default as f64,
            }),+],
            build: $build,
        }
    };
}

mod arrows;
mod banners;
mod basic;
mod brackets;
mod buttons;
mod callouts;
mod connectors;
mod corners;
mod flowchart;
mod math;
mod stars;

/// A formula together with the guides it reads.
#[derive(Clone, Copy)]
pub struct Preset {
    pub guides: &'static [GuideDecl],
    pub build: fn(&Frame) -> Path,
}

impl fmt::Debug for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preset")
            .field("guides", &self.guides)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Frame
// ============================================================================

/// Inputs of one formula evaluation: the box and its resolved guides.
///
/// Helper names follow the DrawingML built-in guides (`ss`, `hc`, `wd2`, ...).
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub w: f64,
    pub h: f64,
    guides: &'a GuideSet,
}

impl<'a> Frame<'a> {
    pub fn new(w: f64, h: f64, guides: &'a GuideSet) -> Self {
        Self { w, h, guides }
    }

    /// Same guides, axes swapped.
    pub fn transposed(&self) -> Frame<'a> {
        Frame::new(self.h, self.w, self.guides)
    }

    /// Short side.
    pub fn ss(&self) -> f64 {
        self.w.min(self.h)
    }

    /// Long side.
    pub fn ls(&self) -> f64 {
        self.w.max(self.h)
    }

    pub fn hc(&self) -> f64 {
        self.w / 2.0
    }

    pub fn vc(&self) -> f64 {
        self.h / 2.0
    }

    pub fn wd2(&self) -> f64 {
        self.w / 2.0
    }

    pub fn hd2(&self) -> f64 {
        self.h / 2.0
    }

    /// Guide in raw document units (100000 = 100%, angles in 60000ths).
    pub fn adj(&self, name: &str) -> f64 {
        self.guides.raw(name)
    }

    /// Angle guide in degrees.
    pub fn angle(&self, name: &str) -> f64 {
        self.adj(name) / crate::defaults::ANGLE_UNITS_PER_DEGREE
    }

    /// `ss * a / 100000`
    pub fn of_ss(&self, a: f64) -> f64 {
        self.ss() * a / PCT
    }

    /// `w * a / 100000`
    pub fn of_w(&self, a: f64) -> f64 {
        self.w * a / PCT
    }

    /// `h * a / 100000`
    pub fn of_h(&self, a: f64) -> f64 {
        self.h * a / PCT
    }

    /// `100000 * len / ss`: the guide value that makes `of_ss` return `len`.
    pub fn max_adj(&self, len: f64) -> f64 {
        div(PCT * len, self.ss())
    }
}

/// 100% in guide units.
pub(crate) const PCT: f64 = crate::defaults::PERCENT_UNITS;

/// DrawingML `pin lo v hi`.
pub(crate) fn pin(lo: f64, v: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Division that yields zero for a zero divisor, like the `*/` guide operator.
pub(crate) fn div(n: f64, d: f64) -> f64 {
    if d == 0.0 { 0.0 } else { n / d }
}

/// DrawingML `at2 x y`, in degrees.
pub(crate) fn at2(x: f64, y: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Sweep from `st` to `en` taken clockwise, a full turn when they coincide.
pub(crate) fn sweep_between(st: f64, en: f64) -> f64 {
    let sw = en - st;
    if sw > 0.0 { sw } else { sw + 360.0 }
}

/// Point where the ray at DrawingML angle `deg` leaves the ellipse.
pub(crate) fn point_at(cx: f64, cy: f64, rx: f64, ry: f64, deg: f64) -> (f64, f64) {
    let t = visual_to_parametric(deg, rx, ry);
    let p = crate::geom::ellipse_point(glam::dvec2(cx, cy), rx, ry, t);
    (p.x, p.y)
}

// ============================================================================
// Shape kinds
// ============================================================================

macro_rules! shape_kinds {
    ($($variant:ident => $tag:literal,)*) => {
        /// Every DrawingML `ST_ShapeType` value.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ShapeKind {
            $($variant,)*
        }

        impl ShapeKind {
            pub const ALL: &'static [ShapeKind] = &[$(ShapeKind::$variant,)*];

            /// The tag text as written in `prstGeom`.
            pub fn as_tag(self) -> &'static str {
                match self {
                    $(ShapeKind::$variant => $tag,)*
                }
            }
        }

        impl FromStr for ShapeKind {
            type Err = BuildError;

            fn from_str(tag: &str) -> Result<Self, Self::Err> {
                match tag {
                    $($tag => Ok(ShapeKind::$variant),)*
                    _ => Err(BuildError::UnknownKind { tag: tag.to_string() }),
                }
            }
        }
    };
}

shape_kinds! {
    Line => "line",
    LineInv => "lineInv",
    Triangle => "triangle",
    RtTriangle => "rtTriangle",
    Rect => "rect",
    Diamond => "diamond",
    Parallelogram => "parallelogram",
    Trapezoid => "trapezoid",
    NonIsoscelesTrapezoid => "nonIsoscelesTrapezoid",
    Pentagon => "pentagon",
    Hexagon => "hexagon",
    Heptagon => "heptagon",
    Octagon => "octagon",
    Decagon => "decagon",
    Dodecagon => "dodecagon",
    Star4 => "star4",
    Star5 => "star5",
    Star6 => "star6",
    Star7 => "star7",
    Star8 => "star8",
    Star10 => "star10",
    Star12 => "star12",
    Star16 => "star16",
    Star24 => "star24",
    Star32 => "star32",
    RoundRect => "roundRect",
    Round1Rect => "round1Rect",
    Round2SameRect => "round2SameRect",
    Round2DiagRect => "round2DiagRect",
    SnipRoundRect => "snipRoundRect",
    Snip1Rect => "snip1Rect",
    Snip2SameRect => "snip2SameRect",
    Snip2DiagRect => "snip2DiagRect",
    Plaque => "plaque",
    Ellipse => "ellipse",
    Teardrop => "teardrop",
    HomePlate => "homePlate",
    Chevron => "chevron",
    PieWedge => "pieWedge",
    Pie => "pie",
    BlockArc => "blockArc",
    Donut => "donut",
    NoSmoking => "noSmoking",
    RightArrow => "rightArrow",
    LeftArrow => "leftArrow",
    UpArrow => "upArrow",
    DownArrow => "downArrow",
    StripedRightArrow => "stripedRightArrow",
    NotchedRightArrow => "notchedRightArrow",
    BentUpArrow => "bentUpArrow",
    LeftRightArrow => "leftRightArrow",
    UpDownArrow => "upDownArrow",
    LeftUpArrow => "leftUpArrow",
    LeftRightUpArrow => "leftRightUpArrow",
    QuadArrow => "quadArrow",
    LeftArrowCallout => "leftArrowCallout",
    RightArrowCallout => "rightArrowCallout",
    UpArrowCallout => "upArrowCallout",
    DownArrowCallout => "downArrowCallout",
    LeftRightArrowCallout => "leftRightArrowCallout",
    UpDownArrowCallout => "upDownArrowCallout",
    QuadArrowCallout => "quadArrowCallout",
    BentArrow => "bentArrow",
    UturnArrow => "uturnArrow",
    CircularArrow => "circularArrow",
    LeftCircularArrow => "leftCircularArrow",
    LeftRightCircularArrow => "leftRightCircularArrow",
    CurvedRightArrow => "curvedRightArrow",
    CurvedLeftArrow => "curvedLeftArrow",
    CurvedUpArrow => "curvedUpArrow",
    CurvedDownArrow => "curvedDownArrow",
    SwooshArrow => "swooshArrow",
    Cube => "cube",
    Can => "can",
    LightningBolt => "lightningBolt",
    Heart => "heart",
    Sun => "sun",
    Moon => "moon",
    SmileyFace => "smileyFace",
    IrregularSeal1 => "irregularSeal1",
    IrregularSeal2 => "irregularSeal2",
    FoldedCorner => "foldedCorner",
    Bevel => "bevel",
    Frame => "frame",
    HalfFrame => "halfFrame",
    Corner => "corner",
    DiagStripe => "diagStripe",
    Chord => "chord",
    Arc => "arc",
    LeftBracket => "leftBracket",
    RightBracket => "rightBracket",
    LeftBrace => "leftBrace",
    RightBrace => "rightBrace",
    BracketPair => "bracketPair",
    BracePair => "bracePair",
    StraightConnector1 => "straightConnector1",
    BentConnector2 => "bentConnector2",
    BentConnector3 => "bentConnector3",
    BentConnector4 => "bentConnector4",
    BentConnector5 => "bentConnector5",
    CurvedConnector2 => "curvedConnector2",
    CurvedConnector3 => "curvedConnector3",
    CurvedConnector4 => "curvedConnector4",
    CurvedConnector5 => "curvedConnector5",
    Callout1 => "callout1",
    Callout2 => "callout2",
    Callout3 => "callout3",
    AccentCallout1 => "accentCallout1",
    AccentCallout2 => "accentCallout2",
    AccentCallout3 => "accentCallout3",
    BorderCallout1 => "borderCallout1",
    BorderCallout2 => "borderCallout2",
    BorderCallout3 => "borderCallout3",
    AccentBorderCallout1 => "accentBorderCallout1",
    AccentBorderCallout2 => "accentBorderCallout2",
    AccentBorderCallout3 => "accentBorderCallout3",
    WedgeRectCallout => "wedgeRectCallout",
    WedgeRoundRectCallout => "wedgeRoundRectCallout",
    WedgeEllipseCallout => "wedgeEllipseCallout",
    CloudCallout => "cloudCallout",
    Cloud => "cloud",
    Ribbon => "ribbon",
    Ribbon2 => "ribbon2",
    EllipseRibbon => "ellipseRibbon",
    EllipseRibbon2 => "ellipseRibbon2",
    LeftRightRibbon => "leftRightRibbon",
    VerticalScroll => "verticalScroll",
    HorizontalScroll => "horizontalScroll",
    Wave => "wave",
    DoubleWave => "doubleWave",
    Plus => "plus",
    FlowChartProcess => "flowChartProcess",
    FlowChartDecision => "flowChartDecision",
    FlowChartInputOutput => "flowChartInputOutput",
    FlowChartPredefinedProcess => "flowChartPredefinedProcess",
    FlowChartInternalStorage => "flowChartInternalStorage",
    FlowChartDocument => "flowChartDocument",
    FlowChartMultidocument => "flowChartMultidocument",
    FlowChartTerminator => "flowChartTerminator",
    FlowChartPreparation => "flowChartPreparation",
    FlowChartManualInput => "flowChartManualInput",
    FlowChartManualOperation => "flowChartManualOperation",
    FlowChartConnector => "flowChartConnector",
    FlowChartPunchedCard => "flowChartPunchedCard",
    FlowChartPunchedTape => "flowChartPunchedTape",
    FlowChartSummingJunction => "flowChartSummingJunction",
    FlowChartOr => "flowChartOr",
    FlowChartCollate => "flowChartCollate",
    FlowChartSort => "flowChartSort",
    FlowChartExtract => "flowChartExtract",
    FlowChartMerge => "flowChartMerge",
    FlowChartOfflineStorage => "flowChartOfflineStorage",
    FlowChartOnlineStorage => "flowChartOnlineStorage",
    FlowChartMagneticTape => "flowChartMagneticTape",
    FlowChartMagneticDisk => "flowChartMagneticDisk",
    FlowChartMagneticDrum => "flowChartMagneticDrum",
    FlowChartDisplay => "flowChartDisplay",
    FlowChartDelay => "flowChartDelay",
    FlowChartAlternateProcess => "flowChartAlternateProcess",
    FlowChartOffpageConnector => "flowChartOffpageConnector",
    ActionButtonBlank => "actionButtonBlank",
    ActionButtonHome => "actionButtonHome",
    ActionButtonHelp => "actionButtonHelp",
    ActionButtonInformation => "actionButtonInformation",
    ActionButtonForwardNext => "actionButtonForwardNext",
    ActionButtonBackPrevious => "actionButtonBackPrevious",
    ActionButtonEnd => "actionButtonEnd",
    ActionButtonBeginning => "actionButtonBeginning",
    ActionButtonReturn => "actionButtonReturn",
    ActionButtonDocument => "actionButtonDocument",
    ActionButtonSound => "actionButtonSound",
    ActionButtonMovie => "actionButtonMovie",
    Gear6 => "gear6",
    Gear9 => "gear9",
    Funnel => "funnel",
    MathPlus => "mathPlus",
    MathMinus => "mathMinus",
    MathMultiply => "mathMultiply",
    MathDivide => "mathDivide",
    MathEqual => "mathEqual",
    MathNotEqual => "mathNotEqual",
    CornerTabs => "cornerTabs",
    SquareTabs => "squareTabs",
    PlaqueTabs => "plaqueTabs",
    ChartX => "chartX",
    ChartStar => "chartStar",
    ChartPlus => "chartPlus",
}

/// Kinds without a formula. They compile to an empty path.
pub const UNSUPPORTED_KINDS: &[ShapeKind] = &[
    ShapeKind::CircularArrow,
    ShapeKind::LeftCircularArrow,
    ShapeKind::LeftRightCircularArrow,
    ShapeKind::CurvedRightArrow,
    ShapeKind::CurvedLeftArrow,
    ShapeKind::CurvedUpArrow,
    ShapeKind::CurvedDownArrow,
    ShapeKind::SwooshArrow,
    ShapeKind::EllipseRibbon,
    ShapeKind::EllipseRibbon2,
    ShapeKind::LeftRightRibbon,
    ShapeKind::Gear6,
    ShapeKind::Gear9,
    ShapeKind::Funnel,
];

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl ShapeKind {
    /// The formula for this kind, `None` for unsupported kinds.
    pub fn preset(self) -> Option<&'static Preset> {
        use ShapeKind as K;
        Some(match self {
            K::Line | K::StraightConnector1 => &connectors::LINE,
            K::LineInv => &connectors::LINE_INV,
            K::BentConnector2 => &connectors::BENT_CONNECTOR2,
            K::BentConnector3 => &connectors::BENT_CONNECTOR3,
            K::BentConnector4 => &connectors::BENT_CONNECTOR4,
            K::BentConnector5 => &connectors::BENT_CONNECTOR5,
            K::CurvedConnector2 => &connectors::CURVED_CONNECTOR2,
            K::CurvedConnector3 => &connectors::CURVED_CONNECTOR3,
            K::CurvedConnector4 => &connectors::CURVED_CONNECTOR4,
            K::CurvedConnector5 => &connectors::CURVED_CONNECTOR5,

            K::Rect => &basic::RECT,
            K::Triangle => &basic::TRIANGLE,
            K::RtTriangle => &basic::RT_TRIANGLE,
            K::Diamond => &basic::DIAMOND,
            K::Parallelogram => &basic::PARALLELOGRAM,
            K::Trapezoid => &basic::TRAPEZOID,
            K::NonIsoscelesTrapezoid => &basic::NON_ISOSCELES_TRAPEZOID,
            K::Pentagon => &basic::PENTAGON,
            K::Hexagon => &basic::HEXAGON,
            K::Heptagon => &basic::HEPTAGON,
            K::Octagon => &basic::OCTAGON,
            K::Decagon => &basic::DECAGON,
            K::Dodecagon => &basic::DODECAGON,
            K::Plus => &basic::PLUS,
            K::Ellipse => &basic::ELLIPSE,
            K::Teardrop => &basic::TEARDROP,
            K::HomePlate => &basic::HOME_PLATE,
            K::Chevron => &basic::CHEVRON,
            K::PieWedge => &basic::PIE_WEDGE,
            K::Pie => &basic::PIE,
            K::BlockArc => &basic::BLOCK_ARC,
            K::Donut => &basic::DONUT,
            K::NoSmoking => &basic::NO_SMOKING,
            K::Chord => &basic::CHORD,
            K::Arc => &basic::ARC,
            K::Frame => &basic::FRAME,
            K::HalfFrame => &basic::HALF_FRAME,
            K::Corner => &basic::CORNER,
            K::DiagStripe => &basic::DIAG_STRIPE,
            K::Bevel => &basic::BEVEL,
            K::FoldedCorner => &basic::FOLDED_CORNER,
            K::Can => &basic::CAN,
            K::Cube => &basic::CUBE,
            K::SmileyFace => &basic::SMILEY_FACE,
            K::Heart => &basic::HEART,
            K::LightningBolt => &basic::LIGHTNING_BOLT,
            K::Sun => &basic::SUN,
            K::Moon => &basic::MOON,

            K::RoundRect => &corners::ROUND_RECT,
            K::Round1Rect => &corners::ROUND1_RECT,
            K::Round2SameRect => &corners::ROUND2_SAME_RECT,
            K::Round2DiagRect => &corners::ROUND2_DIAG_RECT,
            K::SnipRoundRect => &corners::SNIP_ROUND_RECT,
            K::Snip1Rect => &corners::SNIP1_RECT,
            K::Snip2SameRect => &corners::SNIP2_SAME_RECT,
            K::Snip2DiagRect => &corners::SNIP2_DIAG_RECT,
            K::Plaque => &corners::PLAQUE,

            K::Star4 => &stars::STAR4,
            K::Star5 => &stars::STAR5,
            K::Star6 => &stars::STAR6,
            K::Star7 => &stars::STAR7,
            K::Star8 => &stars::STAR8,
            K::Star10 => &stars::STAR10,
            K::Star12 => &stars::STAR12,
            K::Star16 => &stars::STAR16,
            K::Star24 => &stars::STAR24,
            K::Star32 => &stars::STAR32,
            K::IrregularSeal1 => &stars::IRREGULAR_SEAL1,
            K::IrregularSeal2 => &stars::IRREGULAR_SEAL2,

            K::RightArrow => &arrows::RIGHT_ARROW,
            K::LeftArrow => &arrows::LEFT_ARROW,
            K::UpArrow => &arrows::UP_ARROW,
            K::DownArrow => &arrows::DOWN_ARROW,
            K::StripedRightArrow => &arrows::STRIPED_RIGHT_ARROW,
            K::NotchedRightArrow => &arrows::NOTCHED_RIGHT_ARROW,
            K::LeftRightArrow => &arrows::LEFT_RIGHT_ARROW,
            K::UpDownArrow => &arrows::UP_DOWN_ARROW,
            K::QuadArrow => &arrows::QUAD_ARROW,
            K::LeftRightUpArrow => &arrows::LEFT_RIGHT_UP_ARROW,
            K::LeftUpArrow => &arrows::LEFT_UP_ARROW,
            K::BentUpArrow => &arrows::BENT_UP_ARROW,
            K::BentArrow => &arrows::BENT_ARROW,
            K::UturnArrow => &arrows::UTURN_ARROW,
            K::RightArrowCallout => &arrows::RIGHT_ARROW_CALLOUT,
            K::LeftArrowCallout => &arrows::LEFT_ARROW_CALLOUT,
            K::UpArrowCallout => &arrows::UP_ARROW_CALLOUT,
            K::DownArrowCallout => &arrows::DOWN_ARROW_CALLOUT,
            K::LeftRightArrowCallout => &arrows::LEFT_RIGHT_ARROW_CALLOUT,
            K::UpDownArrowCallout => &arrows::UP_DOWN_ARROW_CALLOUT,
            K::QuadArrowCallout => &arrows::QUAD_ARROW_CALLOUT,

            K::WedgeRectCallout => &callouts::WEDGE_RECT_CALLOUT,
            K::WedgeRoundRectCallout => &callouts::WEDGE_ROUND_RECT_CALLOUT,
            K::WedgeEllipseCallout => &callouts::WEDGE_ELLIPSE_CALLOUT,
            K::Cloud => &callouts::CLOUD,
            K::CloudCallout => &callouts::CLOUD_CALLOUT,
            K::Callout1 | K::BorderCallout1 => &callouts::CALLOUT1,
            K::Callout2 | K::BorderCallout2 => &callouts::CALLOUT2,
            K::Callout3 | K::BorderCallout3 => &callouts::CALLOUT3,
            K::AccentCallout1 | K::AccentBorderCallout1 => &callouts::ACCENT_CALLOUT1,
            K::AccentCallout2 | K::AccentBorderCallout2 => &callouts::ACCENT_CALLOUT2,
            K::AccentCallout3 | K::AccentBorderCallout3 => &callouts::ACCENT_CALLOUT3,

            K::FlowChartProcess => &flowchart::PROCESS,
            K::FlowChartDecision => &flowchart::DECISION,
            K::FlowChartInputOutput => &flowchart::INPUT_OUTPUT,
            K::FlowChartPredefinedProcess => &flowchart::PREDEFINED_PROCESS,
            K::FlowChartInternalStorage => &flowchart::INTERNAL_STORAGE,
            K::FlowChartDocument => &flowchart::DOCUMENT,
            K::FlowChartMultidocument => &flowchart::MULTIDOCUMENT,
            K::FlowChartTerminator => &flowchart::TERMINATOR,
            K::FlowChartPreparation => &flowchart::PREPARATION,
            K::FlowChartManualInput => &flowchart::MANUAL_INPUT,
            K::FlowChartManualOperation => &flowchart::MANUAL_OPERATION,
            K::FlowChartConnector => &flowchart::CONNECTOR,
            K::FlowChartPunchedCard => &flowchart::PUNCHED_CARD,
            K::FlowChartPunchedTape => &flowchart::PUNCHED_TAPE,
            K::FlowChartSummingJunction => &flowchart::SUMMING_JUNCTION,
            K::FlowChartOr => &flowchart::OR,
            K::FlowChartCollate => &flowchart::COLLATE,
            K::FlowChartSort => &flowchart::SORT,
            K::FlowChartExtract => &flowchart::EXTRACT,
            K::FlowChartMerge => &flowchart::MERGE,
            K::FlowChartOfflineStorage => &flowchart::OFFLINE_STORAGE,
            K::FlowChartOnlineStorage => &flowchart::ONLINE_STORAGE,
            K::FlowChartMagneticTape => &flowchart::MAGNETIC_TAPE,
            K::FlowChartMagneticDisk => &flowchart::MAGNETIC_DISK,
            K::FlowChartMagneticDrum => &flowchart::MAGNETIC_DRUM,
            K::FlowChartDisplay => &flowchart::DISPLAY,
            K::FlowChartDelay => &flowchart::DELAY,
            K::FlowChartAlternateProcess => &flowchart::ALTERNATE_PROCESS,
            K::FlowChartOffpageConnector => &flowchart::OFFPAGE_CONNECTOR,

            K::LeftBracket => &brackets::LEFT_BRACKET,
            K::RightBracket => &brackets::RIGHT_BRACKET,
            K::LeftBrace => &brackets::LEFT_BRACE,
            K::RightBrace => &brackets::RIGHT_BRACE,
            K::BracketPair => &brackets::BRACKET_PAIR,
            K::BracePair => &brackets::BRACE_PAIR,

            K::MathPlus => &math::MATH_PLUS,
            K::MathMinus => &math::MATH_MINUS,
            K::MathMultiply => &math::MATH_MULTIPLY,
            K::MathDivide => &math::MATH_DIVIDE,
            K::MathEqual => &math::MATH_EQUAL,
            K::MathNotEqual => &math::MATH_NOT_EQUAL,
            K::CornerTabs => &math::CORNER_TABS,
            K::SquareTabs => &math::SQUARE_TABS,
            K::PlaqueTabs => &math::PLAQUE_TABS,
            K::ChartX => &math::CHART_X,
            K::ChartStar => &math::CHART_STAR,
            K::ChartPlus => &math::CHART_PLUS,

            K::Ribbon => &banners::RIBBON,
            K::Ribbon2 => &banners::RIBBON2,
            K::VerticalScroll => &banners::VERTICAL_SCROLL,
            K::HorizontalScroll => &banners::HORIZONTAL_SCROLL,
            K::Wave => &banners::WAVE,
            K::DoubleWave => &banners::DOUBLE_WAVE,

            K::ActionButtonBlank => &buttons::BLANK,
            K::ActionButtonHome => &buttons::HOME,
            K::ActionButtonHelp => &buttons::HELP,
            K::ActionButtonInformation => &buttons::INFORMATION,
            K::ActionButtonForwardNext => &buttons::FORWARD_NEXT,
            K::ActionButtonBackPrevious => &buttons::BACK_PREVIOUS,
            K::ActionButtonEnd => &buttons::END,
            K::ActionButtonBeginning => &buttons::BEGINNING,
            K::ActionButtonReturn => &buttons::RETURN,
            K::ActionButtonDocument => &buttons::DOCUMENT,
            K::ActionButtonSound => &buttons::SOUND,
            K::ActionButtonMovie => &buttons::MOVIE,

            K::CircularArrow
            | K::LeftCircularArrow
            | K::LeftRightCircularArrow
            | K::CurvedRightArrow
            | K::CurvedLeftArrow
            | K::CurvedUpArrow
            | K::CurvedDownArrow
            | K::SwooshArrow
            | K::EllipseRibbon
            | K::EllipseRibbon2
            | K::LeftRightRibbon
            | K::Gear6
            | K::Gear9
            | K::Funnel => return None,
        })
    }

    pub fn is_supported(self) -> bool {
        self.preset().is_some()
    }

    /// Guides this kind reads, with their defaults.
    pub fn guides(self) -> &'static [GuideDecl] {
        self.preset().map_or(&[], |p| p.guides)
    }

    /// Every guide at its default.
    pub fn default_guides(self, scale: ScaleFactor) -> GuideSet {
        GuideSet::defaults(self.guides(), scale)
    }

    /// Lines and connectors: outlines that may carry arrowheads.
    pub fn is_line_like(self) -> bool {
        use ShapeKind as K;
        matches!(
            self,
            K::Line
                | K::LineInv
                | K::StraightConnector1
                | K::BentConnector2
                | K::BentConnector3
                | K::BentConnector4
                | K::BentConnector5
                | K::CurvedConnector2
                | K::CurvedConnector3
                | K::CurvedConnector4
                | K::CurvedConnector5
                | K::Arc
        )
    }

    /// Kinds drawn as bare outlines; only solid and pattern fills apply.
    pub fn is_outline_only(self) -> bool {
        use ShapeKind as K;
        matches!(
            self,
            K::Arc
                | K::LeftBracket
                | K::RightBracket
                | K::LeftBrace
                | K::RightBrace
                | K::BracketPair
                | K::BracePair
        )
    }
}

/// Compute the outline of `kind` in a `w` x `h` box.
///
/// `guides` must hold every guide `kind` declares (see [`crate::guides::resolve`]).
/// Unsupported kinds produce an empty path.
pub fn compute(kind: ShapeKind, w: f64, h: f64, guides: &GuideSet) -> Path {
    match kind.preset() {
        Some(preset) => (preset.build)(&Frame::new(w, h, guides)),
        None => {
            debug!(kind = kind.as_tag(), "unsupported preset geometry, emitting empty path");
            Path::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::PathCommand;

    fn defaults(kind: ShapeKind) -> GuideSet {
        kind.default_guides(ScaleFactor::ONE)
    }

    fn corners(path: &Path) -> Vec<(f64, f64)> {
        path.vertices().iter().map(|p| (p.x, p.y)).collect()
    }

    // ==================== table tests ====================

    #[test]
    fn every_tag_round_trips() {
        for &kind in ShapeKind::ALL {
            assert_eq!(kind.as_tag().parse::<ShapeKind>().unwrap(), kind);
        }
        assert_eq!(ShapeKind::ALL.len(), 187);
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let err = "squircle".parse::<ShapeKind>().unwrap_err();
        assert!(matches!(err, BuildError::UnknownKind { ref tag } if tag == "squircle"));
    }

    #[test]
    fn unsupported_list_matches_table() {
        for &kind in ShapeKind::ALL {
            assert_eq!(kind.is_supported(), !UNSUPPORTED_KINDS.contains(&kind), "{kind}");
        }
    }

    #[test]
    fn guide_names_are_unique_per_kind() {
        for &kind in ShapeKind::ALL {
            let guides = kind.guides();
            for (i, g) in guides.iter().enumerate() {
                assert!(
                    guides[i + 1..].iter().all(|o| o.name != g.name),
                    "{kind} declares {} twice",
                    g.name
                );
            }
        }
    }

    // ==================== library property tests ====================

    #[test]
    fn supported_kinds_are_finite_and_non_empty() {
        for &kind in ShapeKind::ALL.iter().filter(|k| k.is_supported()) {
            for (w, h) in [(100.0, 50.0), (40.0, 120.0), (75.0, 75.0)] {
                let path = compute(kind, w, h, &defaults(kind));
                assert!(!path.is_empty(), "{kind} {w}x{h} is empty");
                assert!(path.is_finite(), "{kind} {w}x{h} is not finite: {path}");
                assert!(
                    matches!(path.commands()[0], PathCommand::MoveTo(_)),
                    "{kind} does not start with a move"
                );
            }
        }
    }

    #[test]
    fn unsupported_kinds_are_empty() {
        for &kind in UNSUPPORTED_KINDS {
            assert!(compute(kind, 100.0, 50.0, &defaults(kind)).is_empty());
        }
    }

    #[test]
    fn formulas_are_deterministic() {
        for &kind in ShapeKind::ALL {
            let g = defaults(kind);
            let a = compute(kind, 120.0, 80.0, &g);
            let b = compute(kind, 120.0, 80.0, &g);
            assert_eq!(a.to_path_string(), b.to_path_string(), "{kind}");
        }
    }

    #[test]
    fn formulas_are_scale_invariant() {
        for &kind in ShapeKind::ALL {
            let g = defaults(kind);
            let small = compute(kind, 120.0, 80.0, &g);
            let big = compute(kind, 300.0, 200.0, &g);
            assert!(
                small.scaled(2.5, 2.5).approx_eq(&big, 1e-9),
                "{kind}:\n{small}\n{big}"
            );
        }
    }

    #[test]
    fn zero_sized_boxes_stay_finite() {
        for &kind in ShapeKind::ALL {
            let g = defaults(kind);
            assert!(compute(kind, 0.0, 50.0, &g).is_finite(), "{kind} w=0");
            assert!(compute(kind, 50.0, 0.0, &g).is_finite(), "{kind} h=0");
        }
    }

    // ==================== end-to-end scenarios ====================

    #[test]
    fn rect_has_four_corners() {
        let path = compute(ShapeKind::Rect, 100.0, 50.0, &defaults(ShapeKind::Rect));
        assert_eq!(
            corners(&path),
            vec![(0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (0.0, 50.0)]
        );
        assert!(path.is_closed());
    }

    #[test]
    fn chevron_notch_sits_at_half_the_short_side() {
        let mut g = defaults(ShapeKind::Chevron);
        g.set_raw("adj", 50000.0);
        let path = compute(ShapeKind::Chevron, 200.0, 100.0, &g);
        let pts = corners(&path);
        assert_eq!(pts.len(), 6);
        assert!(path.is_closed());
        assert!(pts.contains(&(50.0, 50.0)));
        assert!(pts.contains(&(200.0, 50.0)));
    }

    #[test]
    fn frame_transpose_swaps_sides() {
        let g = defaults(ShapeKind::Rect);
        let f = Frame::new(10.0, 20.0, &g).transposed();
        assert_eq!((f.w, f.h), (20.0, 10.0));
    }

    #[test]
    fn point_at_follows_the_ray() {
        let (x, y) = point_at(0.0, 0.0, 40.0, 10.0, 45.0);
        assert!((x - y).abs() < 1e-9);
        assert_eq!(point_at(5.0, 5.0, 2.0, 3.0, 90.0), (5.0, 8.0));
    }

    #[test]
    fn pin_follows_drawingml_order() {
        assert_eq!(pin(0.0, -5.0, 10.0), 0.0);
        assert_eq!(pin(0.0, 15.0, 10.0), 10.0);
        assert_eq!(pin(0.0, 5.0, 10.0), 5.0);
    }
}
