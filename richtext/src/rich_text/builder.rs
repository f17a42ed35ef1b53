// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use super::rich_text_impl::push_fragments;
use super::run::Run;
use crate::{InlineVec, RichText, Style, StyleSet, TextError, TextResult};

/// A mutable accumulator that produces an immutable [`RichText`] from append and style
/// push/pop operations.
///
/// Styles nest: `pop` must name the innermost open style, and every pushed style must
/// be popped before [`RichTextBuilder::build`]. Violations are reported as
/// [`TextError`]s; the builder is consumed by `build` either way, so a failed build
/// discards the accumulated state.
///
/// Runs are created lazily: appending text only records a segment boundary when the
/// set of open styles differs from the previous segment's. Compaction at build time
/// then guarantees the minimality invariant (no two adjacent runs with an identical
/// style set).
///
/// A builder instance is a single-threaded accumulator; confine it to one thread while
/// accumulating. The produced [`RichText`] is freely shareable.
#[derive(Debug, Default)]
pub struct RichTextBuilder {
    buf: String,
    open: InlineVec<Style>,
    seeds: Vec<Seed>,
}

/// A pending run: text from `start` to the next seed's start (or the end of the
/// buffer) under one fixed style set.
#[derive(Debug)]
struct Seed {
    start: usize,
    styles: StyleSet,
}

impl RichTextBuilder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Append raw characters under the currently open styles.
    pub fn append(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if text.is_empty() {
            return self;
        }
        self.ensure_seed();
        self.buf.push_str(text);
        self
    }

    /// Splice an existing [`RichText`] in. Each spliced run keeps its own styles,
    /// merged after the currently open ones (open styles resolve first, the spliced
    /// run's styles win on conflicts).
    pub fn append_rich_text(&mut self, text: &RichText) -> &mut Self {
        for frag in text.runs() {
            let mut styles = self.snapshot();
            for style in frag.styles {
                styles.insert(style.clone());
            }
            if !matches!(self.seeds.last(), Some(seed) if seed.styles == styles) {
                self.seeds.push(Seed { start: self.buf.len(), styles });
            }
            self.buf.push_str(frag.text);
        }
        self
    }

    /// Open a style: it applies to subsequently appended text until popped.
    pub fn push(&mut self, style: Style) -> &mut Self {
        self.open.push(style);
        self
    }

    /// Close the innermost open style.
    ///
    /// # Errors
    ///
    /// [`TextError::StyleNotOpen`] if no open style has this name;
    /// [`TextError::PopOutOfOrder`] if a more recently pushed style is still open.
    pub fn pop(&mut self, style: &Style) -> TextResult<&mut Self> {
        if !self.open.contains(style) {
            return TextError::StyleNotOpen { name: style.name().to_owned() }.into_result();
        }
        match self.open.last() {
            Some(top) if top == style => {
                self.open.pop();
                Ok(self)
            }
            Some(top) => TextError::PopOutOfOrder {
                name: style.name().to_owned(),
                innermost: top.name().to_owned(),
            }
            .into_result(),
            // contains() above guarantees a non-empty stack.
            None => TextError::StyleNotOpen { name: style.name().to_owned() }.into_result(),
        }
    }

    /// Finalize into an immutable [`RichText`], compacting accumulated text and style
    /// transitions into a minimal run sequence.
    ///
    /// # Errors
    ///
    /// [`TextError::UnclosedStyles`] if any pushed style has not been popped; an
    /// unterminated style would make the run boundaries of the result ambiguous.
    pub fn build(self) -> TextResult<RichText> {
        if !self.open.is_empty() {
            let names = self
                .open
                .iter()
                .map(Style::name)
                .collect::<Vec<_>>()
                .join(", ");
            return TextError::UnclosedStyles { count: self.open.len(), names }.into_result();
        }

        let buf_len = self.buf.len();
        let mut runs = Vec::with_capacity(self.seeds.len());
        let mut seeds = self.seeds.into_iter().peekable();
        while let Some(seed) = seeds.next() {
            let end = seeds.peek().map_or(buf_len, |next| next.start);
            runs.push(Run::new(seed.start, end, seed.styles));
        }

        tracing::trace!(runs = runs.len(), bytes = buf_len, "building rich text");
        Ok(RichText::from_parts(Arc::from(self.buf), runs))
    }

    /// The currently open styles as an ordered set (outermost first).
    fn snapshot(&self) -> StyleSet {
        self.open.iter().cloned().collect()
    }

    /// Start a new segment unless the last one already carries the current open style
    /// set. Re-opening the same styles after a balanced push/pop round trip therefore
    /// continues the previous segment.
    fn ensure_seed(&mut self) {
        let styles = self.snapshot();
        if !matches!(self.seeds.last(), Some(seed) if seed.styles == styles) {
            self.seeds.push(Seed { start: self.buf.len(), styles });
        }
    }
}

impl std::fmt::Write for RichTextBuilder {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.append(s);
        Ok(())
    }
}

/// A reduction helper that concatenates a sequence of [`RichText`] values with a
/// delimiter between each, preserving per-fragment styling. Obtained from
/// [`RichText::joiner`].
#[derive(Debug)]
pub struct RichTextJoiner {
    delimiter: RichText,
    buf: String,
    runs: Vec<Run>,
    first: bool,
}

impl RichTextJoiner {
    #[must_use]
    pub fn new(delimiter: RichText) -> Self {
        Self {
            delimiter,
            buf: String::new(),
            runs: Vec::new(),
            first: true,
        }
    }

    pub fn push(&mut self, part: &RichText) -> &mut Self {
        if !self.first {
            push_fragments(&mut self.buf, &mut self.runs, &self.delimiter);
        }
        self.first = false;
        push_fragments(&mut self.buf, &mut self.runs, part);
        self
    }

    #[must_use]
    pub fn finish(self) -> RichText {
        RichText::from_parts(Arc::from(self.buf), self.runs)
    }
}

impl Extend<RichText> for RichTextJoiner {
    fn extend<T: IntoIterator<Item = RichText>>(&mut self, iter: T) {
        for part in iter {
            self.push(&part);
        }
    }
}

impl RichText {
    /// A [`RichTextJoiner`] that concatenates values with `delimiter` between each.
    #[must_use]
    pub fn joiner(delimiter: RichText) -> RichTextJoiner { RichTextJoiner::new(delimiter) }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write as _;

    use super::*;
    use crate::{assert_eq2, throws};

    #[test]
    fn test_scenario_hello_bold_world() -> TextResult<()> {
        throws!({
            let mut builder = RichTextBuilder::new();
            builder.append("Hello ");
            builder.push(Style::bold());
            builder.append("world");
            builder.pop(&Style::bold())?;
            builder.append("!");
            let text = builder.build()?;

            assert_eq2!(text.to_string(), "Hello world!");
            assert_eq2!(text.run_count(), 3);

            let world = text.sub_sequence(6..11);
            assert_eq2!(world.to_string(), "world");
            assert_eq2!(world.run_count(), 1);
            let frags: Vec<_> = world.runs().collect();
            assert!(frags[0].styles.contains("bold"));
        });
    }

    #[test]
    fn test_unbalanced_push_fails_build() {
        let mut builder = RichTextBuilder::new();
        builder.push(Style::bold());
        builder.append("open-ended");
        let result = builder.build();
        assert!(result.is_err());
        let report = result.unwrap_err();
        assert!(report.to_string().contains("left open"));
    }

    #[test]
    fn test_pop_without_push_fails() {
        let mut builder = RichTextBuilder::new();
        builder.append("plain");
        assert!(builder.pop(&Style::bold()).is_err());
    }

    #[test]
    fn test_pop_out_of_order_fails() {
        let mut builder = RichTextBuilder::new();
        builder.push(Style::bold());
        builder.push(Style::italic());
        let result = builder.pop(&Style::bold());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("out of order"));
    }

    #[test]
    fn test_adjacent_equal_style_sets_merge() -> TextResult<()> {
        throws!({
            let mut builder = RichTextBuilder::new();
            builder.append("one ");
            builder.push(Style::bold());
            builder.pop(&Style::bold())?;
            // The push/pop round trip added no text; "one two" is a single run.
            builder.append("two");
            let text = builder.build()?;
            assert_eq2!(text.to_string(), "one two");
            assert_eq2!(text.run_count(), 1);
        });
    }

    #[test]
    fn test_nested_styles_produce_nested_sets() -> TextResult<()> {
        throws!({
            let mut builder = RichTextBuilder::new();
            builder.push(Style::bold());
            builder.append("a");
            builder.push(Style::italic());
            builder.append("b");
            builder.pop(&Style::italic())?;
            builder.append("c");
            builder.pop(&Style::bold())?;
            let text = builder.build()?;

            let frags: Vec<_> = text.runs().collect();
            assert_eq2!(frags.len(), 3);
            assert_eq2!(frags[0].styles.len(), 1);
            assert_eq2!(frags[1].styles.len(), 2);
            assert!(frags[1].styles.contains("italic"));
            assert_eq2!(frags[2].styles.len(), 1);
        });
    }

    #[test]
    fn test_append_rich_text_merges_open_styles() -> TextResult<()> {
        throws!({
            let quoted = RichText::styled("quoted", [Style::italic()]);
            let mut builder = RichTextBuilder::new();
            builder.push(Style::bold());
            builder.append("say ");
            builder.append_rich_text(&quoted);
            builder.pop(&Style::bold())?;
            let text = builder.build()?;

            let frags: Vec<_> = text.runs().collect();
            assert_eq2!(frags.len(), 2);
            assert!(frags[1].styles.contains("bold"));
            assert!(frags[1].styles.contains("italic"));
        });
    }

    #[test]
    fn test_empty_builder_builds_empty_value() -> TextResult<()> {
        throws!({
            let text = RichTextBuilder::new().build()?;
            assert!(text.is_empty());
            assert_eq2!(text.run_count(), 0);
        });
    }

    #[test]
    fn test_fmt_write_integration() -> TextResult<()> {
        throws!({
            let mut builder = RichTextBuilder::new();
            write!(builder, "{} + {} = {}", 1, 1, 2).ok();
            assert_eq2!(builder.build()?.to_string(), "1 + 1 = 2");
        });
    }

    #[test]
    fn test_joiner_matches_join() {
        let parts = vec![
            RichText::styled("a", [Style::bold()]),
            RichText::from("b"),
            RichText::from("c"),
        ];
        let delim = RichText::from("-");

        let mut joiner = RichText::joiner(delim.clone());
        for part in &parts {
            joiner.push(part);
        }
        let lhs = joiner.finish();
        let rhs = RichText::join(&delim, parts);
        assert_eq2!(lhs, rhs);
        assert_eq2!(lhs.to_string(), "a-b-c");
    }
}
