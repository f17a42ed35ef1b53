// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

use rustc_hash::FxHashMap;

use super::{AttrKey, AttrValue, StyleSet};
use crate::InlineVec;

/// A flattened `key -> value` mapping produced by resolving a [`StyleSet`] in order.
///
/// Resolution is deterministic: styles are visited in set order, entries within a style
/// in declaration order, and the last write to a key wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextAttributes {
    map: FxHashMap<AttrKey, AttrValue>,
}

impl TextAttributes {
    #[must_use]
    pub fn resolve(styles: &StyleSet) -> Self {
        let mut map = FxHashMap::default();
        for style in styles {
            for (key, value) in style.attrs() {
                map.insert(*key, value.clone());
            }
        }
        Self { map }
    }

    #[must_use]
    pub fn get(&self, key: AttrKey) -> Option<&AttrValue> { self.map.get(&key) }

    #[must_use]
    pub fn len(&self) -> usize { self.map.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// The font-relevant subset of these attributes ([`AttrKey::is_font_key`]), in key
    /// order. Two runs look the same to a font-only comparison iff their signatures are
    /// equal; see [`crate::RichText::eq_text_and_font`].
    #[must_use]
    pub fn font_signature(&self) -> FontSignature {
        let mut entries: InlineVec<(AttrKey, AttrValue)> = self
            .map
            .iter()
            .filter(|(key, _)| key.is_font_key())
            .map(|(key, value)| (*key, value.clone()))
            .collect();
        entries.sort_by_key(|(key, _)| *key);
        FontSignature { entries }
    }
}

/// Canonical, order-independent representation of a run's font attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontSignature {
    entries: InlineVec<(AttrKey, AttrValue)>,
}
