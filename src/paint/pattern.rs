//! Pattern fill tiles.
//!
//! DrawingML pattern presets are 8x8 two-color bitmaps. Each tile is
//! rebuilt here as the set of foreground cells, merged into one rectangle
//! per horizontal run, inside a square of side [`PATTERN_TILE`].

use std::fmt;
use std::str::FromStr;

use crate::defaults::PATTERN_TILE;
use crate::geom::{Path, PathBuilder, fmt_num};
use crate::log::debug;
use crate::types::Color;

macro_rules! pattern_presets {
    ($($variant:ident => $tag:literal, [$($row:literal),*],)*) => {
        /// `prstPattern@prst` values.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PatternPreset {
            $($variant,)*
        }

        impl PatternPreset {
            pub const ALL: &'static [PatternPreset] = &[$(PatternPreset::$variant,)*];

            pub fn as_tag(self) -> &'static str {
                match self {
                    $(PatternPreset::$variant => $tag,)*
                }
            }

            /// Foreground bitmap, one byte per row, most significant bit on the left.
            pub fn rows(self) -> [u8; 8] {
                match self {
                    $(PatternPreset::$variant => [$($row),*],)*
                }
            }
        }

        impl FromStr for PatternPreset {
            type Err = ();

            fn from_str(tag: &str) -> Result<Self, Self::Err> {
                match tag {
                    $($tag => Ok(PatternPreset::$variant),)*
                    _ => Err(()),
                }
            }
        }
    };
}

pattern_presets! {
    Pct5 => "pct5", [0x80, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00],
    Pct10 => "pct10", [0x80, 0x00, 0x08, 0x00, 0x80, 0x00, 0x08, 0x00],
    Pct20 => "pct20", [0x88, 0x00, 0x22, 0x00, 0x88, 0x00, 0x22, 0x00],
    Pct25 => "pct25", [0x88, 0x22, 0x88, 0x22, 0x88, 0x22, 0x88, 0x22],
    Pct30 => "pct30", [0xAA, 0x44, 0xAA, 0x11, 0xAA, 0x44, 0xAA, 0x11],
    Pct40 => "pct40", [0xAA, 0x55, 0xAA, 0x54, 0xAA, 0x55, 0xAA, 0x45],
    Pct50 => "pct50", [0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55],
    Pct60 => "pct60", [0xEE, 0x55, 0xBB, 0x55, 0xEE, 0x55, 0xBB, 0x55],
    Pct70 => "pct70", [0xEE, 0x77, 0xBB, 0xDD, 0xEE, 0x77, 0xBB, 0xDD],
    Pct75 => "pct75", [0xEE, 0xBB, 0xEE, 0xBB, 0xEE, 0xBB, 0xEE, 0xBB],
    Pct80 => "pct80", [0xF7, 0xFF, 0x7F, 0xFF, 0xF7, 0xFF, 0x7F, 0xFF],
    Pct90 => "pct90", [0xFF, 0xF7, 0xFF, 0xFF, 0xFF, 0x7F, 0xFF, 0xFF],
    Horz => "horz", [0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    Vert => "vert", [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    LtHorz => "ltHorz", [0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00],
    LtVert => "ltVert", [0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88],
    DkHorz => "dkHorz", [0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00],
    DkVert => "dkVert", [0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC],
    NarHorz => "narHorz", [0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00],
    NarVert => "narVert", [0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA],
    DashHorz => "dashHorz", [0xF0, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00],
    DashVert => "dashVert", [0x80, 0x80, 0x80, 0x80, 0x08, 0x08, 0x08, 0x08],
    Cross => "cross", [0xFF, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    DnDiag => "dnDiag", [0x88, 0x44, 0x22, 0x11, 0x88, 0x44, 0x22, 0x11],
    UpDiag => "upDiag", [0x11, 0x22, 0x44, 0x88, 0x11, 0x22, 0x44, 0x88],
    LtDnDiag => "ltDnDiag", [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01],
    LtUpDiag => "ltUpDiag", [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80],
    DkDnDiag => "dkDnDiag", [0xCC, 0x66, 0x33, 0x99, 0xCC, 0x66, 0x33, 0x99],
    DkUpDiag => "dkUpDiag", [0x33, 0x66, 0xCC, 0x99, 0x33, 0x66, 0xCC, 0x99],
    WdDnDiag => "wdDnDiag", [0xC1, 0xE0, 0x70, 0x38, 0x1C, 0x0E, 0x07, 0x83],
    WdUpDiag => "wdUpDiag", [0x83, 0x07, 0x0E, 0x1C, 0x38, 0x70, 0xE0, 0xC1],
    DashDnDiag => "dashDnDiag", [0x88, 0x44, 0x22, 0x11, 0x00, 0x00, 0x00, 0x00],
    DashUpDiag => "dashUpDiag", [0x11, 0x22, 0x44, 0x88, 0x00, 0x00, 0x00, 0x00],
    DiagCross => "diagCross", [0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81],
    SmCheck => "smCheck", [0xCC, 0xCC, 0x33, 0x33, 0xCC, 0xCC, 0x33, 0x33],
    LgCheck => "lgCheck", [0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F],
    SmGrid => "smGrid", [0xFF, 0x88, 0x88, 0x88, 0xFF, 0x88, 0x88, 0x88],
    LgGrid => "lgGrid", [0xFF, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    DotGrid => "dotGrid", [0xAA, 0x00, 0x80, 0x00, 0x80, 0x00, 0x80, 0x00],
    SmConfetti => "smConfetti", [0x80, 0x04, 0x40, 0x02, 0x10, 0x01, 0x20, 0x08],
    LgConfetti => "lgConfetti", [0xC0, 0xCC, 0x0C, 0x30, 0x33, 0x03, 0x60, 0x06],
    HorzBrick => "horzBrick", [0xFF, 0x80, 0x80, 0x80, 0xFF, 0x08, 0x08, 0x08],
    DiagBrick => "diagBrick", [0x80, 0x40, 0x20, 0x10, 0x18, 0x24, 0x42, 0x81],
    SolidDmnd => "solidDmnd", [0x10, 0x38, 0x7C, 0xFE, 0x7C, 0x38, 0x10, 0x00],
    OpenDmnd => "openDmnd", [0x80, 0x41, 0x22, 0x14, 0x08, 0x14, 0x22, 0x41],
    DotDmnd => "dotDmnd", [0x80, 0x00, 0x22, 0x00, 0x08, 0x00, 0x22, 0x00],
    Plaid => "plaid", [0xAA, 0x55, 0xAA, 0x55, 0xF0, 0xF0, 0xF0, 0xF0],
    Sphere => "sphere", [0x3C, 0x42, 0x81, 0x81, 0x81, 0x81, 0x42, 0x3C],
    Weave => "weave", [0x88, 0x54, 0x22, 0x45, 0x88, 0x14, 0x22, 0x51],
    Divot => "divot", [0x00, 0x10, 0x08, 0x10, 0x00, 0x01, 0x80, 0x01],
    Shingle => "shingle", [0x03, 0x84, 0x48, 0x30, 0x0C, 0x02, 0x01, 0x01],
    Wave => "wave", [0x00, 0x18, 0xA4, 0x03, 0x00, 0x18, 0xA4, 0x03],
    Trellis => "trellis", [0xFF, 0x66, 0xFF, 0x99, 0xFF, 0x66, 0xFF, 0x99],
    ZigZag => "zigZag", [0x81, 0x42, 0x24, 0x18, 0x81, 0x42, 0x24, 0x18],
}

impl fmt::Display for PatternPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl PatternPreset {
    /// Parse a preset tag, falling back to a half-tone for unknown names.
    pub fn from_tag_lossy(tag: &str) -> PatternPreset {
        tag.parse().unwrap_or_else(|()| {
            debug!(tag, "unknown pattern preset, using pct50");
            PatternPreset::Pct50
        })
    }

    /// Number of foreground cells out of 64.
    pub fn coverage(self) -> u32 {
        self.rows().iter().map(|r| r.count_ones()).sum()
    }
}

/// A pattern tile: background square plus foreground marks.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternTile {
    pub preset: PatternPreset,
    pub foreground: Color,
    pub background: Color,
    /// Side of the square tile.
    pub size: f64,
    /// Foreground cells inside `0..size`.
    pub marks: Path,
}

impl PatternTile {
    pub fn new(preset: PatternPreset, foreground: Color, background: Color) -> Self {
        PatternTile {
            preset,
            foreground,
            background,
            size: PATTERN_TILE,
            marks: tile_marks(preset, PATTERN_TILE),
        }
    }

    /// Definition text used for interning.
    pub fn style_text(&self) -> String {
        format!(
            "pattern:{};fg:{};bg:{};size:{};d:{}",
            self.preset,
            self.foreground,
            self.background,
            fmt_num(self.size),
            self.marks
        )
    }
}

/// Foreground cells of `preset`, one rectangle per horizontal run.
fn tile_marks(preset: PatternPreset, size: f64) -> Path {
    let cell = size / 8.0;
    let mut p = PathBuilder::new();
    for (y, row) in preset.rows().into_iter().enumerate() {
        let mut x = 0;
        while x < 8 {
            if row & (0x80 >> x) == 0 {
                x += 1;
                continue;
            }
            let run_start = x;
            while x < 8 && row & (0x80 >> x) != 0 {
                x += 1;
            }
            let (x0, x1) = (run_start as f64 * cell, x as f64 * cell);
            let (y0, y1) = (y as f64 * cell, (y + 1) as f64 * cell);
            p.polygon(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)]);
        }
    }
    p.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(preset: PatternPreset) -> PatternTile {
        PatternTile::new(preset, Color::BLACK, Color::WHITE)
    }

    // ==================== preset table tests ====================

    #[test]
    fn tags_round_trip() {
        for &preset in PatternPreset::ALL {
            assert_eq!(preset.as_tag().parse::<PatternPreset>(), Ok(preset));
        }
    }

    #[test]
    fn unknown_tag_falls_back_to_half_tone() {
        assert_eq!(PatternPreset::from_tag_lossy("plaidish"), PatternPreset::Pct50);
        assert_eq!(PatternPreset::from_tag_lossy("cross"), PatternPreset::Cross);
    }

    #[test]
    fn percent_presets_get_denser() {
        let pct = [
            PatternPreset::Pct5,
            PatternPreset::Pct10,
            PatternPreset::Pct20,
            PatternPreset::Pct25,
            PatternPreset::Pct50,
            PatternPreset::Pct75,
            PatternPreset::Pct90,
        ];
        for pair in pct.windows(2) {
            assert!(pair[0].coverage() < pair[1].coverage(), "{} vs {}", pair[0], pair[1]);
        }
        assert_eq!(PatternPreset::Pct50.coverage(), 32);
    }

    // ==================== tile geometry tests ====================

    #[test]
    fn horizontal_runs_merge() {
        insta::assert_snapshot!(tile(PatternPreset::Horz).marks.to_path_string(), @"M0,0 L8,0 L8,1 L0,1 Z");
    }

    #[test]
    fn cells_become_separate_squares() {
        let marks = tile(PatternPreset::Pct50).marks;
        assert_eq!(marks.subpath_count(), 32);
        assert!(marks.is_closed());
        let marks = tile(PatternPreset::Vert).marks;
        assert_eq!(marks.subpath_count(), 8);
        assert!(marks.vertices().iter().all(|p| p.x <= 1.0));
    }

    #[test]
    fn style_text_names_colors_and_preset() {
        let text = PatternTile::new(PatternPreset::LtHorz, Color::Rgb(255, 0, 0), Color::WHITE).style_text();
        assert!(text.starts_with("pattern:ltHorz;fg:#ff0000;bg:#ffffff;size:8;d:M0,0 L8,0"));
    }
}
