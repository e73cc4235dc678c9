use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{DisplayError, DisplayResult};

/// Named font files available to `text` commands.
///
/// Lookups of unknown names fall back to the first registered font.
#[derive(Clone, Debug, Default)]
pub struct FontBook {
    fonts: HashMap<String, Arc<Vec<u8>>>,
    fallback: Option<String>,
}

impl FontBook {
    /// Empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `bytes` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        let name = name.into();
        if self.fallback.is_none() {
            self.fallback = Some(name.clone());
        }
        self.fonts.insert(name, Arc::new(bytes));
    }

    /// Read a font file from disk and register it under `name`.
    pub fn load(&mut self, name: &str, path: &Path) -> DisplayResult<()> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font file '{}'", path.display()))?;
        if bytes.is_empty() {
            return Err(DisplayError::validation(format!(
                "font file '{}' is empty",
                path.display()
            )));
        }
        self.insert(name, bytes);
        Ok(())
    }

    /// Font registered as `name`, or the fallback font. Returns the name actually used.
    pub fn resolve(&self, name: &str) -> Option<(&str, &Arc<Vec<u8>>)> {
        if let Some((k, v)) = self.fonts.get_key_value(name) {
            return Some((k.as_str(), v));
        }
        let fallback = self.fallback.as_deref()?;
        self.fonts.get(fallback).map(|v| (fallback, v))
    }

    /// Number of registered fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// `true` when no font is registered.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

/// Shapes single-line text with parley, registering each named font once.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    families: HashMap<String, String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayoutEngine")
            .field("families", &self.families)
            .finish_non_exhaustive()
    }
}

impl TextLayoutEngine {
    /// Engine with no fonts registered yet.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    fn family_for(&mut self, font_name: &str, font_bytes: &[u8]) -> DisplayResult<String> {
        if let Some(family) = self.families.get(font_name) {
            return Ok(family.clone());
        }
        let registered = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = registered.first().map(|(id, _)| *id).ok_or_else(|| {
            DisplayError::validation(format!("font \"{font_name}\" has no usable face"))
        })?;
        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| {
                DisplayError::validation(format!("font \"{font_name}\" has no family name"))
            })?
            .to_owned();
        tracing::debug!(font = font_name, family = %family, "registered display font");
        self.families.insert(font_name.to_owned(), family.clone());
        Ok(family)
    }

    /// Lay out `text` on one unbroken line.
    pub fn layout_line(
        &mut self,
        font_name: &str,
        font_bytes: &[u8],
        size_px: f32,
        text: &str,
    ) -> DisplayResult<parley::Layout<()>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(DisplayError::validation(
                "font size must be finite and > 0",
            ));
        }
        let family = self.family_for(font_name, font_bytes)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
