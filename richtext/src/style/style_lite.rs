// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

/// Macro to create a new [`crate::Style`] with the given name and attributes. And
/// return it.
///
/// - Note that all the symbols that are values must be passed in enclosing `{` and `}`.
/// - Commas are not used to separate the tokens in the macro.
/// - Attribute flags are simply symbols like `bold`, `italic`, `underline`,
///   `strikethrough` that correspond to [`crate::AttrKey`] entries.
///
/// Example:
///
/// ```
/// use richtext::{style, Color};
///
/// let color_fg = Color::from(0x07_6D_EB);
/// let style = style!(
///     name: {"link"} underline color_fg: {color_fg}
/// );
/// assert_eq!(style.name(), "link");
/// ```
#[macro_export]
macro_rules! style {
    (name: $name:block $($rem:tt)*) => {{
        #[allow(unused_mut)]
        let mut attrs: $crate::InlineVec<($crate::AttrKey, $crate::AttrValue)> =
            $crate::InlineVec::new();
        $crate::add_style_attr!(attrs, $($rem)*);
        $crate::Style::new($name, attrs)
    }};
}

#[macro_export]
macro_rules! add_style_attr {
    // Attrib flags.
    ($attrs:ident, bold $($rem:tt)*) => {{
        $attrs.push(($crate::AttrKey::FontWeight, $crate::AttrValue::Flag(true)));
        $crate::add_style_attr!($attrs, $($rem)*);
    }};
    ($attrs:ident, italic $($rem:tt)*) => {{
        $attrs.push(($crate::AttrKey::FontStyle, $crate::AttrValue::Flag(true)));
        $crate::add_style_attr!($attrs, $($rem)*);
    }};
    ($attrs:ident, underline $($rem:tt)*) => {{
        $attrs.push(($crate::AttrKey::Underline, $crate::AttrValue::Flag(true)));
        $crate::add_style_attr!($attrs, $($rem)*);
    }};
    ($attrs:ident, strikethrough $($rem:tt)*) => {{
        $attrs.push(($crate::AttrKey::Strikethrough, $crate::AttrValue::Flag(true)));
        $crate::add_style_attr!($attrs, $($rem)*);
    }};
    // Color fg.
    ($attrs:ident, color_fg: $color:block $($rem:tt)*) => {{
        $attrs.push(($crate::AttrKey::ColorFg, $crate::AttrValue::Color($color)));
        $crate::add_style_attr!($attrs, $($rem)*);
    }};
    // Color bg.
    ($attrs:ident, color_bg: $color:block $($rem:tt)*) => {{
        $attrs.push(($crate::AttrKey::ColorBg, $crate::AttrValue::Color($color)));
        $crate::add_style_attr!($attrs, $($rem)*);
    }};
    // Font family.
    ($attrs:ident, font_family: $family:block $($rem:tt)*) => {{
        $attrs.push(($crate::AttrKey::FontFamily, $crate::AttrValue::Text($family.into())));
        $crate::add_style_attr!($attrs, $($rem)*);
    }};
    // Font size.
    ($attrs:ident, font_size: $size:block $($rem:tt)*) => {{
        $attrs.push(($crate::AttrKey::FontSize, $crate::AttrValue::Number($size)));
        $crate::add_style_attr!($attrs, $($rem)*);
    }};
    // Base case: do nothing if no tokens are left.
    ($attrs:ident,) => {};
}

#[cfg(test)]
mod tests {
    use crate::{AttrKey, AttrValue, Color};

    #[test]
    fn test_syntax_flags_only() {
        let s = style!(name: {"emphasis"} bold italic);
        assert_eq!(s.name(), "emphasis");
        assert_eq!(s.get(AttrKey::FontWeight), Some(&AttrValue::Flag(true)));
        assert_eq!(s.get(AttrKey::FontStyle), Some(&AttrValue::Flag(true)));
        assert_eq!(s.get(AttrKey::Underline), None);
    }

    #[test]
    fn test_syntax_no_attrs() {
        let s = style!(name: {"marker"});
        assert_eq!(s.name(), "marker");
        assert!(s.attrs().is_empty());
    }

    #[test]
    fn test_syntax_mixed_flags_and_values() {
        const BLACK: Color = Color::from_u8(0, 0, 0);
        let s = style!(
            name: {"code"} bold font_family: {"monospace"} font_size: {12} color_bg: {BLACK}
        );
        assert_eq!(s.get(AttrKey::FontFamily), Some(&AttrValue::Text("monospace".into())));
        assert_eq!(s.get(AttrKey::FontSize), Some(&AttrValue::Number(12)));
        assert_eq!(s.get(AttrKey::ColorBg), Some(&AttrValue::Color(BLACK)));
    }
}
