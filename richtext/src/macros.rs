// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

//! Declarative macros: construction sugar and test assertions.

/// Macro to make building a single-run [`crate::RichText`] easy.
///
/// Here's an example.
/// ```
/// use richtext::{rich_text, Style};
///
/// let plain = rich_text!(@text: "Hello World");
/// let bold = rich_text!(@style: Style::bold(), @text: "Hello World");
/// ```
#[macro_export]
macro_rules! rich_text {
    (
        @style: $style_arg: expr,
        @text: $text_arg: expr
        $(,)* /* Optional trailing comma. */
    ) => {
        $crate::RichText::styled($text_arg, [$style_arg])
    };
    (
        @text: $text_arg: expr
        $(,)*
    ) => {
        $crate::RichText::from($text_arg)
    };
}

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps from having to write `Ok(())` repeatedly.
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Wrap the given block or stmt so that it returns a `Result<$it>`. It is just
/// syntactic sugar that helps from having to write `Ok($it)` repeatedly.
#[macro_export]
macro_rules! throws_with_return {
    ($it: block) => {{
        return Ok($it);
    }};
    ($it: stmt) => {{
        return Ok($it);
    }};
}

/// Shorthand for `Ok(())` or `Ok($value)`.
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value: expr) => {
        Ok($value)
    };
}

/// Similar to [`assert_eq!`] but automatically prints the left and right hand side
/// variables if the assertion fails. Useful for debugging tests, since the cargo test
/// runner won't print any `println!` or `dbg!` statements in a passing test.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
