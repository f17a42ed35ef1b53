// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

//! Named, immutable bundles of text-formatting attributes, and their resolution into
//! flat attribute maps.

// Attach sources.
pub mod attr;
pub mod color;
pub mod style_impl;
pub mod style_lite;
pub mod style_set;
pub mod stylesheet;
pub mod text_attributes;

// Re-export.
pub use attr::*;
pub use color::*;
pub use style_impl::*;
pub use style_set::*;
pub use stylesheet::*;
pub use text_attributes::*;
