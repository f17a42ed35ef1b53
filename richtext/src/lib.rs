// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

//! # richtext
//!
//! Immutable attributed text for Rust. A [`RichText`] is an ordered sequence of
//! [`Run`]s, where each run is a contiguous span of one shared backing string with a
//! fixed set of active [`Style`]s. The backing string is reference counted, so
//! subsequencing and splitting never copy text.
//!
//! Values are built with [`RichTextBuilder`], which accumulates plain text and a stack
//! of open styles, then compacts everything into a minimal run sequence:
//!
//! ```
//! use richtext::{RichTextBuilder, Style, TextResult};
//!
//! fn main() -> TextResult<()> {
//!     let mut builder = RichTextBuilder::new();
//!     builder.append("Hello ");
//!     builder.push(Style::bold());
//!     builder.append("world");
//!     builder.pop(&Style::bold())?;
//!     builder.append("!");
//!     let text = builder.build()?;
//!
//!     assert_eq!(text.to_string(), "Hello world!");
//!     let world = text.sub_sequence(6..11);
//!     assert_eq!(world.to_string(), "world");
//!     assert!(world.runs().next().unwrap().styles.contains("bold"));
//!     Ok(())
//! }
//! ```
//!
//! Once constructed, a [`RichText`] is an immutable value: every transformation
//! ([`RichText::sub_sequence`], [`RichText::apply`], [`RichText::replace_all`], ...)
//! returns a new instance. Completed values are `Send + Sync` and can be shared across
//! threads without locking.
//!
//! Rendering backends consume [`RichText::runs`] and resolve each run's style set into
//! flat [`TextAttributes`] for their platform's native styled-text representation.

// Attach sources.
pub mod error;
pub mod macros;
pub mod rich_text;
pub mod sizes;
pub mod style;

// Re-export.
pub use error::*;
pub use rich_text::*;
pub use sizes::*;
pub use style::*;
