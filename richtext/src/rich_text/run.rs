// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::StyleSet;

/// `Run` represents a contiguous span of the backing text of a [`crate::RichText`],
/// with one fixed set of active styles.
///
/// # Performance, memory latency, access, allocation
///
/// 1. This struct does not allocate text; it stores byte offsets only.
/// 2. The [`crate::RichText`] owns the backing memory (a reference counted `str`), and
///    this struct is a "view" into part of it. Many runs, across many `RichText`
///    values produced by subsequencing and splitting, share one backing allocation.
///
/// Invariants (enforced at construction sites, checked in debug builds):
/// - `start <= end <= backing.len()`, both on `char` boundaries.
/// - Within one `RichText`, run ranges are contiguous and non-overlapping, and no two
///   adjacent runs carry an identical style set.
#[derive(Clone, PartialEq, Eq)]
pub struct Run {
    /// The start index (bytes) in the backing text.
    pub(crate) start: usize,
    /// The end index (bytes, exclusive) in the backing text.
    pub(crate) end: usize,
    /// The styles active over this span.
    pub(crate) styles: StyleSet,
}

impl Run {
    pub(crate) fn new(start: usize, end: usize, styles: StyleSet) -> Self {
        debug_assert!(start <= end);
        Self { start, end, styles }
    }

    #[must_use]
    pub fn styles(&self) -> &StyleSet { &self.styles }

    /// Get the string slice for this run. The `backing` parameter is the text the run
    /// offsets were created against.
    pub(crate) fn get_str<'a>(&self, backing: &'a (impl AsRef<str> + ?Sized)) -> &'a str {
        &backing.as_ref()[self.start..self.end]
    }

    pub(crate) fn len_bytes(&self) -> usize { self.end - self.start }
}

/// Pretty print for [`Run`] that is compact and easier to read. The default output
/// takes up too much space and makes it difficult to debug.
impl Debug for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Run[byte {s:>2}..{e:>2}] {styles:?}",
            s = self.start,
            e = self.end,
            styles = self.styles,
        )
    }
}

/// A renderer-facing view of one run: the resolved text slice plus the styles active
/// over it. Yielded by [`crate::RichText::runs`].
#[derive(Clone, Copy, Debug)]
pub struct StyledFragment<'a> {
    pub text: &'a str,
    pub styles: &'a StyleSet,
}

/// The character plus the styles active at one logical index. Returned by
/// [`crate::RichText::attributed_char_at`].
#[derive(Clone, Copy, Debug)]
pub struct AttributedChar<'a> {
    pub ch: char,
    pub styles: &'a StyleSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Style, assert_eq2};

    #[test]
    fn test_get_str_slices_backing() {
        let backing = "Hello world";
        let styles: StyleSet = [Style::bold()].into_iter().collect();
        let run = Run::new(6, 11, styles);
        assert_eq2!(run.get_str(backing), "world");
        assert_eq2!(run.len_bytes(), 5);
    }

    #[test]
    fn test_debug_is_compact() {
        let run = Run::new(0, 5, [Style::bold()].into_iter().collect());
        assert_eq2!(format!("{run:?}"), "Run[byte  0.. 5] {bold}");
    }
}
