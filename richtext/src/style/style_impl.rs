// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use super::{AttrKey, AttrValue, Color};
use crate::{InlineString, InlineVec};

/// A named, immutable bundle of text-formatting attributes.
///
/// Please use the [`crate::style`!] declarative macro to generate code for this struct,
/// or one of the predefined constructors ([`Style::bold`], [`Style::italic`], ...).
///
/// # Identity is the name
///
/// Equality and hashing use the name **only**. Two styles with the same name are the
/// same style even if constructed separately with different attribute payloads. Callers
/// must not rely on attribute-value equality for style comparison; see the colocated
/// `test_same_name_different_payload_is_equal` test which documents this contract.
#[derive(Clone)]
pub struct Style {
    name: InlineString,
    attrs: InlineVec<(AttrKey, AttrValue)>,
}

impl Style {
    pub fn new(
        name: impl AsRef<str>,
        attrs: impl IntoIterator<Item = (AttrKey, AttrValue)>,
    ) -> Self {
        Self {
            name: name.as_ref().into(),
            attrs: attrs.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str { self.name.as_str() }

    #[must_use]
    pub fn attrs(&self) -> &[(AttrKey, AttrValue)] { &self.attrs }

    /// The value this style sets for `key`, if any. If the style sets the same key
    /// more than once, the last entry wins.
    #[must_use]
    pub fn get(&self, key: AttrKey) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .rev()
            .find(|(it, _)| *it == key)
            .map(|(_, value)| value)
    }
}

mod predefined {
    use std::fmt::Write as _;

    use super::{AttrKey, AttrValue, Color, InlineString, Style};

    impl Style {
        #[must_use]
        pub fn bold() -> Self {
            Self::new("bold", [(AttrKey::FontWeight, AttrValue::Flag(true))])
        }

        #[must_use]
        pub fn italic() -> Self {
            Self::new("italic", [(AttrKey::FontStyle, AttrValue::Flag(true))])
        }

        #[must_use]
        pub fn underline() -> Self {
            Self::new("underline", [(AttrKey::Underline, AttrValue::Flag(true))])
        }

        #[must_use]
        pub fn strikethrough() -> Self {
            Self::new(
                "strikethrough",
                [(AttrKey::Strikethrough, AttrValue::Flag(true))],
            )
        }

        /// Foreground color style. The color is part of the name so that two
        /// different colors produce two distinct styles.
        #[must_use]
        pub fn fg(color: Color) -> Self {
            let mut name = InlineString::new();
            // We don't care about the result of this operation.
            write!(name, "fg-{color}").ok();
            Self::new(name, [(AttrKey::ColorFg, AttrValue::Color(color))])
        }

        /// Background color style, named like [`Style::fg`].
        #[must_use]
        pub fn bg(color: Color) -> Self {
            let mut name = InlineString::new();
            // We don't care about the result of this operation.
            write!(name, "bg-{color}").ok();
            Self::new(name, [(AttrKey::ColorBg, AttrValue::Color(color))])
        }
    }
}

mod identity {
    use super::{Hash, Hasher, Style};

    impl PartialEq for Style {
        fn eq(&self, other: &Self) -> bool { self.name == other.name }
    }

    impl Eq for Style {}

    impl Hash for Style {
        fn hash<H: Hasher>(&self, state: &mut H) { self.name.as_str().hash(state); }
    }
}

mod style_helper {
    use super::{Debug, Display, Formatter, Style};

    impl Display for Style {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.name)
        }
    }

    /// Pretty print that is compact and easier to read than the derived output.
    impl Debug for Style {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "Style {{ {}", self.name)?;
            let mut delim = " | ";
            for (key, value) in &self.attrs {
                write!(f, "{delim}{key}: {value}")?;
                delim = ", ";
            }
            write!(f, " }}")
        }
    }
}
