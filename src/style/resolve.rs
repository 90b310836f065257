use kurbo::Insets;

use crate::style::color::ColorCode;
use crate::style::value::StyleMap;

/// Image size relative to the document font size when `Ratio` is unset.
pub const DEFAULT_RATIO: f64 = 1.5;

/// Effective style for one section after defaults and coercion.
///
/// Resolution never fails: a property that is absent, mistyped, or
/// unparseable reads as unset and its default applies.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    /// Font size; defaults to the document-wide current size.
    pub font_size: f64,
    /// Foreground color, when set and parseable.
    pub color: Option<ColorCode>,
    /// Background color, when set and parseable.
    pub background: Option<ColorCode>,
    /// Bold flag, default false.
    pub bold: bool,
    /// Image size relative to font size, default 1.5.
    pub ratio: f64,
    /// Outer margins (left, top, right, bottom), each defaulting to 0.
    pub margin: Insets,
}

impl ResolvedStyle {
    /// Resolve `style` against the document-wide `doc_font_size`.
    pub fn resolve(style: &StyleMap, doc_font_size: f64) -> Self {
        Self {
            font_size: style.number_or("FontSize", doc_font_size),
            color: style.color("Color"),
            background: style.color("BackgroundColor"),
            bold: style.boolean("Bold").unwrap_or(false),
            ratio: style.number_or("Ratio", DEFAULT_RATIO),
            margin: Insets::new(
                style.number_or("Margin-Left", 0.0),
                style.number_or("Margin-Top", 0.0),
                style.number_or("Margin-Right", 0.0),
                style.number_or("Margin-Bottom", 0.0),
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/resolve.rs"]
mod tests;
