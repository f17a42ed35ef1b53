// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

//! Error types for builder contract violations.
//!
//! Out-of-range index access ([`crate::RichText::char_at`],
//! [`crate::RichText::sub_sequence`]) is a programmer error and panics, same as slice
//! indexing in [std]. The errors below are the recoverable kind: they are reported
//! through [`TextResult`] and carry enough context to locate the offending push/pop.

use thiserror::Error;

/// Type alias to make it easy to work with [`core::result::Result`] and
/// [`miette::Report`]. Works hand in hand with [`TextError`] and any other type of
/// error.
pub type TextResult<T> = miette::Result<T>;

/// Contract violations surfaced by [`crate::RichTextBuilder`].
#[non_exhaustive]
#[derive(Debug, Clone, Error)]
pub enum TextError {
    /// A style was popped that is not currently open.
    #[error("style '{name}' was popped but is not open")]
    StyleNotOpen { name: String },

    /// A style was popped while a more recently pushed style is still open. Push/pop
    /// must nest.
    #[error("style '{name}' was popped out of order; innermost open style is '{innermost}'")]
    PopOutOfOrder { name: String, innermost: String },

    /// `build()` was called while styles are still open. An unterminated style would
    /// make the run boundaries of the result ambiguous.
    #[error("{count} style(s) left open when building rich text: {names}")]
    UnclosedStyles { count: usize, names: String },

    /// A style with an empty name was added to a [`crate::Stylesheet`]. Without a name
    /// it can never be looked up again.
    #[error("style name must not be empty")]
    EmptyStyleName,
}

impl TextError {
    /// Wrap this error in a [`miette::Report`] and return it as the `Err` variant.
    pub fn into_result<T>(self) -> TextResult<T> { Err(miette::miette!(self)) }
}
