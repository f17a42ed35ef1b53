// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Range};
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::run::{AttributedChar, Run, StyledFragment};
use crate::{FontSignature, InlineVec, Style, StyleSet, TextAttributes};

pub(crate) mod sizing {
    use smallvec::SmallVec;

    use super::Run;

    /// Default internal storage for the run list. Most values carry only a few runs.
    pub(crate) type RunStorage = SmallVec<[Run; MAX_INLINE_RUNS]>;
    pub(crate) const MAX_INLINE_RUNS: usize = 4;
}

/// An immutable sequence of [`Run`]s representing styled text.
///
/// The backing string is reference counted and shared: [`RichText::sub_sequence`],
/// [`RichText::split`] and [`RichText::lines`] re-slice runs without copying text.
/// Every transformation returns a new value; a completed `RichText` is never mutated
/// and is safe to share across threads.
///
/// Logical indices in this API are `char` (Unicode scalar value) positions, not byte
/// offsets.
///
/// Use the [`crate::rich_text`!] macro or [`crate::RichTextBuilder`] for construction.
#[derive(Clone)]
pub struct RichText {
    pub(crate) text: Arc<str>,
    pub(crate) runs: sizing::RunStorage,
    pub(crate) len_chars: usize,
}

/// Drop empty runs and merge adjacent runs with an identical style set. This maintains
/// the minimality invariant: no two adjacent runs of a `RichText` carry the same style
/// set.
fn normalize(runs: impl IntoIterator<Item = Run>) -> sizing::RunStorage {
    let mut out = sizing::RunStorage::new();
    for run in runs {
        if run.start == run.end {
            continue;
        }
        match out.last_mut() {
            Some(prev) if prev.end == run.start && prev.styles == run.styles => {
                prev.end = run.end;
            }
            _ => out.push(run),
        }
    }
    out
}

/// Copy every fragment of `source` to the end of `buf`, recording runs at the new
/// offsets. Shared by concatenation, joining and regex substitution.
pub(crate) fn push_fragments(buf: &mut String, runs: &mut Vec<Run>, source: &RichText) {
    for frag in source.runs() {
        let start = buf.len();
        buf.push_str(frag.text);
        runs.push(Run::new(start, buf.len(), frag.styles.clone()));
    }
}

impl RichText {
    /// The empty value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: Arc::from(""),
            runs: sizing::RunStorage::new(),
            len_chars: 0,
        }
    }

    /// Wrap plain text as a single-run `RichText` under the given initial styles.
    /// `RichText::styled(text, [])` is equivalent to `RichText::from(text)`.
    pub fn styled(text: impl AsRef<str>, styles: impl IntoIterator<Item = Style>) -> Self {
        let text: Arc<str> = Arc::from(text.as_ref());
        let styles: StyleSet = styles.into_iter().collect();
        let end = text.len();
        let runs = if end == 0 {
            sizing::RunStorage::new()
        } else {
            let mut it = sizing::RunStorage::new();
            it.push(Run::new(0, end, styles));
            it
        };
        Self::from_parts(text, runs)
    }

    /// Assemble a value from a backing text and a run list. Runs are normalized here;
    /// callers only guarantee that ranges are ascending, non-overlapping, and lie on
    /// `char` boundaries.
    pub(crate) fn from_parts(text: Arc<str>, runs: impl IntoIterator<Item = Run>) -> Self {
        let runs = normalize(runs);
        debug_assert!(
            runs.windows(2).all(|pair| pair[0].end == pair[1].start),
            "run ranges must be contiguous"
        );
        let len_chars = match (runs.first(), runs.last()) {
            (Some(first), Some(last)) => text[first.start..last.end].chars().count(),
            _ => 0,
        };
        Self { text, runs, len_chars }
    }

    /// Byte offset of the logical start within the backing text.
    pub(crate) fn base_offset(&self) -> usize {
        self.runs.first().map_or(0, |run| run.start)
    }

    /// The plain character sequence, ignoring styles.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match (self.runs.first(), self.runs.last()) {
            (Some(first), Some(last)) => &self.text[first.start..last.end],
            _ => "",
        }
    }

    /// Logical length in `char`s. Cached at construction.
    #[must_use]
    pub fn len(&self) -> usize { self.len_chars }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len_chars == 0 }

    /// Number of runs. The run sequence is minimal: adjacent runs never share a style
    /// set.
    #[must_use]
    pub fn run_count(&self) -> usize { self.runs.len() }

    /// Iterate the runs as renderer-facing fragments.
    pub fn runs(&self) -> impl Iterator<Item = StyledFragment<'_>> {
        self.runs.iter().map(|run| StyledFragment {
            text: run.get_str(self.text.as_ref()),
            styles: &run.styles,
        })
    }

    /// The character at logical index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn char_at(&self, index: usize) -> char {
        match self.as_str().chars().nth(index) {
            Some(ch) => ch,
            None => panic!(
                "char index {index} out of range for rich text of length {}",
                self.len_chars
            ),
        }
    }

    /// The character at logical index `index`, together with the styles active there.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn attributed_char_at(&self, index: usize) -> AttributedChar<'_> {
        let found = self.as_str().char_indices().nth(index);
        let run_of = |abs: usize| self.runs.iter().find(|run| abs < run.end);
        match found.and_then(|(rel, ch)| run_of(self.base_offset() + rel).map(|run| (ch, run))) {
            Some((ch, run)) => AttributedChar { ch, styles: &run.styles },
            None => panic!(
                "char index {index} out of range for rich text of length {}",
                self.len_chars
            ),
        }
    }

    /// Convert a logical `char` index in `0..=len` to a byte offset relative to
    /// [`Self::as_str`].
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    fn byte_of_char_index(&self, index: usize) -> usize {
        if index == self.len_chars {
            return self.as_str().len();
        }
        match self.as_str().char_indices().nth(index) {
            Some((byte, _)) => byte,
            None => panic!(
                "char index {index} out of range for rich text of length {}",
                self.len_chars
            ),
        }
    }

    /// A new value covering `range` (logical `char` indices) of this text, sharing the
    /// backing allocation. Guarantees `result.len() == range.len()` and
    /// `result.as_str() == &self.as_str()[..]` sliced at the equivalent byte offsets.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or `range.end > self.len()`.
    #[must_use]
    pub fn sub_sequence(&self, range: Range<usize>) -> RichText {
        assert!(
            range.start <= range.end && range.end <= self.len_chars,
            "sub-sequence range {}..{} out of range for rich text of length {}",
            range.start,
            range.end,
            self.len_chars
        );
        let start = self.byte_of_char_index(range.start);
        let end = self.byte_of_char_index(range.end);
        self.sub_bytes(start..end)
    }

    /// Like [`Self::sub_sequence`] but with byte offsets relative to
    /// [`Self::as_str`]. Offsets must lie on `char` boundaries.
    pub(crate) fn sub_bytes(&self, range: Range<usize>) -> RichText {
        let abs_start = self.base_offset() + range.start;
        let abs_end = self.base_offset() + range.end;
        let mut runs = sizing::RunStorage::new();
        for run in &self.runs {
            let start = run.start.max(abs_start);
            let end = run.end.min(abs_end);
            if start < end {
                runs.push(Run::new(start, end, run.styles.clone()));
            }
        }
        Self::from_parts(self.text.clone(), runs)
    }

    /// A new value with the given styles added to every run's active set. Style sets
    /// deduplicate by name, so re-applying a style is idempotent.
    #[must_use]
    pub fn apply(&self, styles: &[Style]) -> RichText {
        let mut runs = self.runs.clone();
        for run in &mut runs {
            for style in styles {
                run.styles.insert(style.clone());
            }
        }
        Self::from_parts(self.text.clone(), runs)
    }

    #[must_use]
    pub fn apply_style(&self, style: Style) -> RichText {
        self.apply(std::slice::from_ref(&style))
    }

    /// A new value with the named style removed from every run's active set.
    #[must_use]
    pub fn unapply(&self, style: &Style) -> RichText {
        let mut runs = self.runs.clone();
        for run in &mut runs {
            run.styles.remove(style.name());
        }
        Self::from_parts(self.text.clone(), runs)
    }

    /// Logical `char` index of the first occurrence of `needle`, ignoring styles.
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.as_str()
            .find(needle)
            .map(|byte| self.as_str()[..byte].chars().count())
    }

    #[must_use]
    pub fn contains(&self, needle: &str) -> bool { self.as_str().contains(needle) }

    #[must_use]
    pub fn starts_with(&self, needle: &str) -> bool { self.as_str().starts_with(needle) }

    #[must_use]
    pub fn ends_with(&self, needle: &str) -> bool { self.as_str().ends_with(needle) }

    /// A new value with leading and trailing whitespace removed, styling of the
    /// retained span preserved.
    #[must_use]
    pub fn trim(&self) -> RichText {
        let s = self.as_str();
        let start = s.len() - s.trim_start().len();
        let end = start + s.trim_start().trim_end().len();
        self.sub_bytes(start..end)
    }

    /// Display width in terminal columns, via [`unicode_width`].
    #[must_use]
    pub fn display_width(&self) -> usize { UnicodeWidthStr::width(self.as_str()) }

    /// Iterate extended grapheme clusters of the plain text, via
    /// [`unicode_segmentation`].
    pub fn graphemes(&self) -> impl Iterator<Item = &str> {
        UnicodeSegmentation::graphemes(self.as_str(), true)
    }

    /// Concatenate `parts` with `delimiter` between each, preserving per-fragment
    /// styling.
    pub fn join<I: IntoIterator<Item = RichText>>(delimiter: &RichText, parts: I) -> RichText {
        let mut buf = String::new();
        let mut runs = Vec::new();
        let mut first = true;
        for part in parts {
            if !first {
                push_fragments(&mut buf, &mut runs, delimiter);
            }
            first = false;
            push_fragments(&mut buf, &mut runs, &part);
        }
        RichText::from_parts(Arc::from(buf), runs)
    }
}

mod equality {
    use super::{FontSignature, Hash, Hasher, InlineVec, RichText, TextAttributes};

    impl RichText {
        /// True iff the plain character sequences are equal, ignoring styles. Weaker
        /// than `==`: structural equality additionally requires identical effective
        /// run boundaries and style sets.
        #[must_use]
        pub fn eq_text(&self, other: &RichText) -> bool { self.as_str() == other.as_str() }

        /// Like [`Self::eq_text`] but case-insensitive.
        #[must_use]
        pub fn eq_text_ignore_case(&self, other: &RichText) -> bool {
            self.as_str().to_lowercase() == other.as_str().to_lowercase()
        }

        /// True iff the plain texts are equal and the resolved font attributes agree
        /// at every position. Spans are re-merged by equal font signature first, so
        /// two values that were subsequenced from unrelated backings, with different
        /// raw run boundaries, still compare equal when their visible content and font
        /// are equal.
        #[must_use]
        pub fn eq_text_and_font(&self, other: &RichText) -> bool {
            self.eq_text(other) && self.font_spans() == other.font_spans()
        }

        /// Relative byte spans with their resolved font signatures, adjacent equal
        /// signatures merged.
        fn font_spans(&self) -> InlineVec<(usize, usize, FontSignature)> {
            let base = self.base_offset();
            let mut out: InlineVec<(usize, usize, FontSignature)> = InlineVec::new();
            for run in &self.runs {
                let sig = TextAttributes::resolve(&run.styles).font_signature();
                match out.last_mut() {
                    Some((_, end, last)) if *last == sig && *end == run.start - base => {
                        *end = run.end - base;
                    }
                    _ => out.push((run.start - base, run.end - base, sig)),
                }
            }
            out
        }
    }

    /// Structural equality: equal plain text plus identical effective (relative,
    /// normalized) run boundaries and style sets. Backing-text sharing is irrelevant.
    impl PartialEq for RichText {
        fn eq(&self, other: &Self) -> bool {
            if self.as_str() != other.as_str() || self.runs.len() != other.runs.len() {
                return false;
            }
            let (lhs_base, rhs_base) = (self.base_offset(), other.base_offset());
            self.runs.iter().zip(&other.runs).all(|(lhs, rhs)| {
                lhs.start - lhs_base == rhs.start - rhs_base
                    && lhs.end - lhs_base == rhs.end - rhs_base
                    && lhs.styles == rhs.styles
            })
        }
    }

    impl Eq for RichText {}

    impl Hash for RichText {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.as_str().hash(state);
            let base = self.base_offset();
            for run in &self.runs {
                (run.start - base).hash(state);
                (run.end - base).hash(state);
                run.styles.hash(state);
            }
        }
    }
}

mod convert {
    use super::{Arc, RichText, Run, sizing};

    impl Default for RichText {
        fn default() -> Self { Self::new() }
    }

    impl From<&str> for RichText {
        fn from(text: &str) -> Self { Self::styled(text, std::iter::empty()) }
    }

    impl From<String> for RichText {
        fn from(text: String) -> Self {
            let text: Arc<str> = Arc::from(text);
            let end = text.len();
            let runs = if end == 0 {
                sizing::RunStorage::new()
            } else {
                let mut it = sizing::RunStorage::new();
                it.push(Run::new(0, end, crate::StyleSet::new()));
                it
            };
            Self::from_parts(text, runs)
        }
    }

    impl FromIterator<RichText> for RichText {
        fn from_iter<T: IntoIterator<Item = RichText>>(iter: T) -> Self {
            RichText::join(&RichText::new(), iter)
        }
    }
}

mod ops {
    use super::{Add, AddAssign, RichText};

    impl Add for RichText {
        type Output = RichText;

        fn add(self, rhs: RichText) -> RichText { [self, rhs].into_iter().collect() }
    }

    impl AddAssign for RichText {
        fn add_assign(&mut self, rhs: RichText) {
            let lhs = std::mem::take(self);
            *self = lhs + rhs;
        }
    }
}

mod fmt_helper {
    use super::{Debug, Display, Formatter, RichText};

    impl Display for RichText {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.as_str())
        }
    }

    /// Pretty print that lists one run per line, eg: `0: [{bold}, "Hello"]`.
    impl Debug for RichText {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            if self.runs.is_empty() {
                return write!(f, "RichText(empty)");
            }
            let mut delim = "";
            for (index, frag) in self.runs().enumerate() {
                write!(f, "{delim}{index}: [{:?}, {:?}]", frag.styles, frag.text)?;
                delim = "\n";
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_value_of_round_trips_plain_text() {
        for s in ["", "a", "Hello world", "päck📦age"] {
            assert_eq2!(RichText::from(s).to_string(), s);
        }
    }

    #[test]
    fn test_len_counts_chars_not_bytes() {
        let rt = RichText::from("päck📦");
        assert_eq2!(rt.len(), 5);
        assert_eq2!(rt.char_at(4), '📦');
    }

    #[test]
    fn test_char_at_matches_plain_string() {
        let rt = RichText::styled("Hello", [Style::bold()]);
        let s = rt.to_string();
        for (i, expected) in s.chars().enumerate() {
            assert_eq2!(rt.char_at(i), expected);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_char_at_out_of_range_panics() {
        let _ = RichText::from("abc").char_at(3);
    }

    #[test]
    fn test_attributed_char_at_reports_run_styles() {
        let hello = RichText::from("Hello ");
        let world = RichText::styled("world", [Style::bold()]);
        let rt = hello + world;

        let plain = rt.attributed_char_at(0);
        assert_eq2!(plain.ch, 'H');
        assert!(plain.styles.is_empty());

        let styled = rt.attributed_char_at(6);
        assert_eq2!(styled.ch, 'w');
        assert!(styled.styles.contains("bold"));
    }

    #[test]
    fn test_sub_sequence_length_and_text() {
        let rt = RichText::from("Hello world");
        let s = rt.to_string();
        for (i, j) in [(0, 0), (0, 5), (3, 8), (6, 11), (11, 11)] {
            let sub = rt.sub_sequence(i..j);
            assert_eq2!(sub.len(), j - i);
            assert_eq2!(sub.to_string(), s[i..j].to_string());
        }
    }

    #[test]
    fn test_sub_sequence_shares_backing() {
        let rt = RichText::from("Hello world");
        let sub = rt.sub_sequence(6..11);
        assert!(Arc::ptr_eq(&rt.text, &sub.text));
    }

    #[test]
    fn test_sub_sequence_slices_runs_at_boundaries() {
        let rt = RichText::from("Hello ")
            + RichText::styled("world", [Style::bold()])
            + RichText::from("!");
        let sub = rt.sub_sequence(4..8);
        assert_eq2!(sub.to_string(), "o wo");
        assert_eq2!(sub.run_count(), 2);
        let frags: Vec<_> = sub.runs().collect();
        assert_eq2!(frags[0].text, "o ");
        assert!(frags[0].styles.is_empty());
        assert_eq2!(frags[1].text, "wo");
        assert!(frags[1].styles.contains("bold"));
    }

    #[test]
    fn test_sub_sequence_on_unicode_boundaries() {
        let rt = RichText::styled("a📦b🙏c", [Style::italic()]);
        let sub = rt.sub_sequence(1..4);
        assert_eq2!(sub.to_string(), "📦b🙏");
        assert_eq2!(sub.len(), 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_sub_sequence_out_of_range_panics() {
        let _ = RichText::from("abc").sub_sequence(1..4);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let rt = RichText::from("Hello");
        let once = rt.apply(&[Style::bold()]);
        let twice = once.apply(&[Style::bold()]);
        assert_eq2!(once, twice);
        let frags: Vec<_> = twice.runs().collect();
        assert_eq2!(frags[0].styles.len(), 1);
    }

    #[test]
    fn test_unapply_removes_style_and_remerges_runs() {
        let rt = RichText::from("Hello ") + RichText::styled("world", [Style::bold()]);
        assert_eq2!(rt.run_count(), 2);
        let plain = rt.unapply(&Style::bold());
        // With the bold span gone, the two runs have identical (empty) style sets and
        // must merge back into one.
        assert_eq2!(plain.run_count(), 1);
        assert_eq2!(plain.to_string(), "Hello world");
    }

    #[test]
    fn test_equality_hierarchy() {
        let plain = RichText::from("text");
        let bold = RichText::styled("text", [Style::bold()]);
        let upper = RichText::from("TEXT");

        // equals_text false implies equals false.
        assert!(!plain.eq_text(&upper));
        assert!(plain != upper);

        // Same text, different styles: text-equal but not structurally equal.
        assert!(plain.eq_text(&bold));
        assert!(plain != bold);

        // eq_text_and_font implies eq_text.
        assert!(bold.eq_text_and_font(&bold.clone()));
        assert!(bold.eq_text(&bold.clone()));
    }

    #[test]
    fn test_eq_text_ignore_case_scenario() {
        let lower = RichText::from("text");
        let upper = RichText::from("TEXT");
        assert!(lower.eq_text_ignore_case(&upper));
        assert!(!lower.eq_text(&upper));
    }

    #[test]
    fn test_text_and_font_equal_across_unrelated_backings() {
        // Regression case: independently subsequenced values that share no backing
        // object must still compare text+font equal when their visible content and
        // style agree.
        let lhs = RichText::styled("xxabcdefyy", [Style::bold()]).sub_sequence(2..8);
        let rhs = RichText::styled("abcdefzz", [Style::bold()]).sub_sequence(0..6);
        assert!(!Arc::ptr_eq(&lhs.text, &rhs.text));
        assert!(lhs.eq_text_and_font(&rhs));
        assert_eq2!(lhs, rhs);
    }

    #[test]
    fn test_text_and_font_ignores_style_names() {
        // Two differently named styles with the same font payload are font-equal even
        // though they are different styles by identity.
        let strong = Style::new("strong", [(crate::AttrKey::FontWeight, crate::AttrValue::Flag(true))]);
        let lhs = RichText::styled("abc", [strong]);
        let rhs = RichText::styled("abc", [Style::bold()]);
        assert!(lhs.eq_text_and_font(&rhs));
        assert!(lhs != rhs);
    }

    #[test]
    fn test_find_reports_char_indices() {
        let rt = RichText::from("📦 package");
        assert_eq2!(rt.find("package"), Some(2));
        assert_eq2!(rt.find("missing"), None);
        assert!(rt.contains("pack"));
        assert!(rt.starts_with("📦"));
        assert!(rt.ends_with("age"));
    }

    #[test]
    fn test_trim_preserves_styling() {
        let rt = RichText::styled("  padded  ", [Style::bold()]).trim();
        assert_eq2!(rt.to_string(), "padded");
        let frags: Vec<_> = rt.runs().collect();
        assert!(frags[0].styles.contains("bold"));
    }

    #[test]
    fn test_join_preserves_fragment_styling() {
        let delim = RichText::from(", ");
        let parts = vec![
            RichText::styled("one", [Style::bold()]),
            RichText::from("two"),
        ];
        let joined = RichText::join(&delim, parts);
        assert_eq2!(joined.to_string(), "one, two");
        let frags: Vec<_> = joined.runs().collect();
        assert!(frags[0].styles.contains("bold"));
        assert!(frags[1].styles.is_empty());
    }

    #[test]
    fn test_concat_rebases_runs() {
        let rt = RichText::styled("ab", [Style::bold()]) + RichText::styled("cd", [Style::italic()]);
        assert_eq2!(rt.to_string(), "abcd");
        assert_eq2!(rt.run_count(), 2);
        // Concatenating the text slices of all runs in order reproduces to_string().
        let rebuilt: String = rt.runs().map(|frag| frag.text).collect();
        assert_eq2!(rebuilt, rt.to_string());
    }

    #[test]
    fn test_display_width_and_graphemes() {
        let rt = RichText::from("Hi📦");
        assert_eq2!(rt.display_width(), 4);
        assert_eq2!(rt.graphemes().count(), 3);
    }

    #[test]
    fn test_debug_lists_runs() {
        let rt = RichText::from("Hello ") + RichText::styled("world", [Style::bold()]);
        let dump = format!("{rt:?}");
        assert_eq2!(dump, "0: [{}, \"Hello \"]\n1: [{bold}, \"world\"]");
    }
}
