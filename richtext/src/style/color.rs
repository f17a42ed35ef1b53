// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation for text foreground / background
//! attributes.

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// Interpret a `0xRRGGBB` literal, eg: `Color::from(0x33_FF_33)`.
impl From<u32> for Color {
    fn from(value: u32) -> Self {
        let red = ((value >> 16) & 0xFF) as u8;
        let green = ((value >> 8) & 0xFF) as u8;
        let blue = (value & 0xFF) as u8;
        Self { red, green, blue }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_from_tuple_and_u32_agree() {
        let lhs = Color::from((0x33, 0xFF, 0x33));
        let rhs = Color::from(0x33_FF_33);
        assert_eq2!(lhs, rhs);
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        let color = Color::from_u8(252, 157, 248);
        assert_eq2!(color.to_string(), "#fc9df8");
    }
}
