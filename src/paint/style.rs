//! Style definition table.
//!
//! Generated definitions (pattern tiles, gradients, shadows) are interned by
//! their text so that identical definitions produced by many shapes are
//! emitted once. The table lives for one document render and is passed in
//! explicitly; there is no global instance.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Identifier of an interned style definition, unique within one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(u32);

impl StyleId {
    /// Allocation index (0 for the first definition).
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "st{}", self.0)
    }
}

/// Anything that can hand out ids for style text.
pub trait StyleSink {
    /// Return the id of `text`, allocating one on first sight.
    fn intern(&mut self, text: &str) -> StyleId;
}

/// Per-render style table.
#[derive(Debug, Default, Clone)]
pub struct StyleTable {
    ids: HashMap<String, StyleId>,
    /// Definitions in allocation order.
    defs: Vec<String>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Definition text for `id`.
    pub fn get(&self, id: StyleId) -> Option<&str> {
        self.defs.get(id.index()).map(String::as_str)
    }

    /// Look up an id without allocating.
    pub fn lookup(&self, text: &str) -> Option<StyleId> {
        self.ids.get(text).copied()
    }

    /// Definitions in allocation order, ready for emission.
    pub fn iter(&self) -> impl Iterator<Item = (StyleId, &str)> + '_ {
        self.defs
            .iter()
            .enumerate()
            .map(|(i, text)| (StyleId(i as u32), text.as_str()))
    }
}

impl StyleSink for StyleTable {
    fn intern(&mut self, text: &str) -> StyleId {
        if let Some(&id) = self.ids.get(text) {
            return id;
        }
        let id = StyleId(self.defs.len() as u32);
        self.defs.push(text.to_string());
        self.ids.insert(text.to_string(), id);
        id
    }
}

/// A [`StyleTable`] that several threads can intern into.
///
/// Check and insert happen under one lock, so the first caller to submit a
/// text owns its id.
#[derive(Debug, Default)]
pub struct SharedStyleTable {
    inner: Mutex<StyleTable>,
}

impl SharedStyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&self, text: &str) -> StyleId {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .intern(text)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finish the render and take the table.
    pub fn into_inner(self) -> StyleTable {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StyleSink for &SharedStyleTable {
    fn intern(&mut self, text: &str) -> StyleId {
        SharedStyleTable::intern(*self, text)
    }
}
