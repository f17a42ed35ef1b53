// Copyright (c) 2025 the richtext authors. Licensed under Apache License, Version 2.0.

use super::Style;
use crate::{TextError, TextResult, throws};

/// A named collection of [`Style`]s, typically created once per document and consulted
/// by name afterwards.
#[derive(Default, Debug, Clone)]
pub struct Stylesheet {
    pub styles: Vec<Style>,
}

impl Stylesheet {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// # Errors
    ///
    /// Fails if the style has an empty name; it could never be retrieved again,
    /// rendering it useless.
    pub fn add_style(&mut self, style: Style) -> TextResult<()> {
        throws!({
            if style.name().is_empty() {
                return TextError::EmptyStyleName.into_result();
            }
            self.styles.push(style);
        });
    }

    /// # Errors
    ///
    /// Fails on the first style with an empty name.
    pub fn add_styles(&mut self, styles: Vec<Style>) -> TextResult<()> {
        throws!({
            for style in styles {
                self.add_style(style)?;
            }
        });
    }

    #[must_use]
    pub fn find_style_by_name(&self, name: &str) -> Option<Style> {
        self.styles.iter().find(|style| style.name() == name).cloned()
    }

    /// Returns [None] if no style in `names` is found.
    #[must_use]
    pub fn find_styles_by_names(&self, names: &[&str]) -> Option<Vec<Style>> {
        let mut styles = Vec::new();

        for name in names {
            if let Some(style) = self.find_style_by_name(name) {
                styles.push(style);
            }
        }

        if styles.is_empty() { None } else { Some(styles) }
    }
}
