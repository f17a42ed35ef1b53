// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::AddAssign;

use super::Style;
use crate::InlineVec;

/// An ordered set of [`Style`]s, deduplicated by style name.
///
/// Order is insertion order and is significant: [`crate::TextAttributes::resolve`]
/// gives later styles precedence over earlier ones for conflicting attribute keys.
/// Inserting a style whose name is already present is a no-op (the earlier entry keeps
/// its position and payload).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StyleSet {
    inner: InlineVec<Style>,
}

impl StyleSet {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns `true` if the style was added, `false` if a style with the same name is
    /// already present.
    pub fn insert(&mut self, style: Style) -> bool {
        if self.contains(style.name()) {
            return false;
        }
        self.inner.push(style);
        true
    }

    /// Remove the style with the given name. Returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.inner.len();
        self.inner.retain(|it| it.name() != name);
        self.inner.len() != before
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.iter().any(|it| it.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Style> { self.inner.iter() }

    #[must_use]
    pub fn len(&self) -> usize { self.inner.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.inner.is_empty() }
}

impl AddAssign<Style> for StyleSet {
    fn add_assign(&mut self, rhs: Style) { self.insert(rhs); }
}

impl FromIterator<Style> for StyleSet {
    fn from_iter<T: IntoIterator<Item = Style>>(iter: T) -> Self {
        let mut set = StyleSet::new();
        for style in iter {
            set.insert(style);
        }
        set
    }
}

impl<'a> IntoIterator for &'a StyleSet {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter { self.inner.iter() }
}

impl Hash for StyleSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for style in &self.inner {
            style.hash(state);
        }
    }
}

/// Pretty print that is compact and easier to read than the derived output, eg:
/// `{bold, italic}`.
impl Debug for StyleSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut delim = "";
        for style in &self.inner {
            write!(f, "{delim}{}", style.name())?;
            delim = ", ";
        }
        write!(f, "}}")
    }
}
