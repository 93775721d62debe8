//! Paint resolution: fills, strokes, arrowheads, shadows and the style table
//! their shared definitions are interned into.

pub mod fill;
pub mod pattern;
pub mod shadow;
pub mod stroke;
pub mod style;

pub use fill::{FillDescriptor, FillNode, PaintSource};
pub use shadow::{Shadow, ShadowNode};
pub use stroke::{LineNode, MarkerDescriptor, StrokeDescriptor};
pub use style::{SharedStyleTable, StyleId, StyleSink, StyleTable};

/// A definition the emitter writes once, referenced by its id.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Gradient(fill::Gradient),
    Pattern(pattern::PatternTile),
    Picture(fill::PictureTile),
    Shadow(Shadow),
}

/// Definitions a shape refers to, in the order they were produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuxResources {
    pub defs: Vec<(StyleId, Resource)>,
}

impl AuxResources {
    pub fn single(id: StyleId, resource: Resource) -> Self {
        AuxResources {
            defs: vec![(id, resource)],
        }
    }

    pub fn push(&mut self, id: StyleId, resource: Resource) {
        self.defs.push((id, resource));
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn get(&self, id: StyleId) -> Option<&Resource> {
        self.defs.iter().find(|(i, _)| *i == id).map(|(_, r)| r)
    }
}
