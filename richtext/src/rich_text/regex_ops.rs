// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

//! Regex-based substitution and splitting. Operations take a compiled [`Regex`], so
//! pattern-syntax errors surface at `Regex::new` time in the caller, unchanged.

use std::sync::Arc;

use regex::Regex;

use super::rich_text_impl::push_fragments;
use super::run::Run;
use crate::RichText;

impl RichText {
    /// Replace every match of `pattern` with `replacement`.
    ///
    /// Retained spans keep their styling. Inserted spans carry the replacement's own
    /// styling; `$1`-style group references inside the replacement's text are expanded
    /// per match (see [`regex::Captures::expand`] for the syntax). For styling-neutral
    /// inputs this agrees with [`Regex::replace_all`] on the plain strings.
    #[must_use]
    pub fn replace_all(&self, pattern: &Regex, replacement: &RichText) -> RichText {
        let hay = self.as_str();
        let mut buf = String::with_capacity(hay.len());
        let mut runs: Vec<Run> = Vec::new();
        let mut last = 0;
        let mut matches = 0;

        for caps in pattern.captures_iter(hay) {
            let Some(m) = caps.get(0) else { continue };
            self.copy_span(last..m.start(), &mut buf, &mut runs);
            for frag in replacement.runs() {
                let start = buf.len();
                caps.expand(frag.text, &mut buf);
                runs.push(Run::new(start, buf.len(), frag.styles.clone()));
            }
            last = m.end();
            matches += 1;
        }
        self.copy_span(last..hay.len(), &mut buf, &mut runs);

        tracing::trace!(%pattern, matches, "replace_all");
        RichText::from_parts(Arc::from(buf), runs)
    }

    /// Split at every match of `pattern` into an eagerly materialized sequence of
    /// fragments sharing this value's backing text. Fragment boundaries agree with
    /// [`Regex::split`] on the plain text, including leading/trailing empty fragments.
    #[must_use]
    pub fn split(&self, pattern: &Regex) -> Vec<RichText> {
        let hay = self.as_str();
        let mut out = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(hay) {
            out.push(self.sub_bytes(last..m.start()));
            last = m.end();
        }
        out.push(self.sub_bytes(last..hay.len()));
        out
    }

    /// Split into lines, sharing the backing text. Semantics match [`str::lines`]:
    /// both `\n` and `\r\n` terminate a line, and a final line ending produces no
    /// trailing empty fragment.
    #[must_use]
    pub fn lines(&self) -> Vec<RichText> {
        let hay = self.as_str();
        let mut out = Vec::new();
        let mut start = 0;
        // '\n' is ASCII, so scanning bytes stays on char boundaries.
        for (index, byte) in hay.bytes().enumerate() {
            if byte == b'\n' {
                let mut end = index;
                if end > start && hay.as_bytes()[end - 1] == b'\r' {
                    end -= 1;
                }
                out.push(self.sub_bytes(start..end));
                start = index + 1;
            }
        }
        if start < hay.len() {
            out.push(self.sub_bytes(start..hay.len()));
        }
        out
    }
}

mod span_copy {
    use super::{RichText, Run};

    impl RichText {
        /// Copy the runs overlapping `range` (bytes, relative to `as_str()`) to the
        /// end of `buf`, preserving their styles at the new offsets.
        pub(super) fn copy_span(
            &self,
            range: std::ops::Range<usize>,
            buf: &mut String,
            runs: &mut Vec<Run>,
        ) {
            if range.is_empty() {
                return;
            }
            let retained = self.sub_bytes(range);
            super::push_fragments(buf, runs, &retained);
        }
    }
}
