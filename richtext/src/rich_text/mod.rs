// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

//! The immutable attributed-text value type and its builder.

// Attach sources.
pub mod builder;
pub mod regex_ops;
pub mod rich_text_impl;
pub mod run;

// Re-export.
pub use builder::*;
pub use rich_text_impl::*;
pub use run::*;
