// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

//! Inline storage tuning for the crate. Smaller static allocation sizes are better
//! than larger ones; these values cover the common cases (short style names, a handful
//! of styles per run, a handful of runs per value) without spilling to the heap.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Stack allocated string storage for style names and other short strings. When this
/// gets larger than [`DEFAULT_STRING_STORAGE_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated tiny string storage for attribute values like font family names.
pub type TinyInlineString = SmallString<[u8; DEFAULT_ATTR_TEXT_STORAGE_SIZE]>;
pub const DEFAULT_ATTR_TEXT_STORAGE_SIZE: usize = 8;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
