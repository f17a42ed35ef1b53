// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

//! Attribute keys and values carried by [`crate::Style`].

use strum_macros::Display;

use super::Color;
use crate::TinyInlineString;

/// The keys a [`crate::Style`] may set. Resolution into [`crate::TextAttributes`] is
/// keyed on this enum, so two styles setting the same key conflict (last one in the
/// style set wins).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum AttrKey {
    FontFamily,
    FontSize,
    FontWeight,
    FontStyle,
    Underline,
    Strikethrough,
    ColorFg,
    ColorBg,
}

impl AttrKey {
    /// Keys that participate in font selection and decoration. These are the keys
    /// compared by [`crate::RichText::eq_text_and_font`]. Background color is
    /// presentation, not font.
    #[must_use]
    pub fn is_font_key(self) -> bool { !matches!(self, AttrKey::ColorBg) }
}

/// A tagged attribute value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttrValue {
    Flag(bool),
    Number(i64),
    Text(TinyInlineString),
    Color(Color),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self { AttrValue::Flag(value) }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self { AttrValue::Number(value) }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self { AttrValue::Text(value.into()) }
}

impl From<Color> for AttrValue {
    fn from(value: Color) -> Self { AttrValue::Color(value) }
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::Flag(it) => write!(f, "{it}"),
            AttrValue::Number(it) => write!(f, "{it}"),
            AttrValue::Text(it) => write!(f, "{it}"),
            AttrValue::Color(it) => write!(f, "{it}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_key_display_is_kebab_case() {
        assert_eq2!(AttrKey::FontWeight.to_string(), "font-weight");
        assert_eq2!(AttrKey::ColorFg.to_string(), "color-fg");
    }

    #[test]
    fn test_font_keys_exclude_background() {
        assert!(AttrKey::FontWeight.is_font_key());
        assert!(AttrKey::Underline.is_font_key());
        assert!(AttrKey::ColorFg.is_font_key());
        assert!(!AttrKey::ColorBg.is_font_key());
    }
}
