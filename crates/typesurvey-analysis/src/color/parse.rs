//! Extraction of RGB channels from resolved `color` values.

use std::sync::LazyLock;

use regex::Regex;
use typesurvey_core::types::collections::SmallVec3;
use typesurvey_core::types::StyleSnapshot;

use super::conversion::Rgb;

static NUMERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("numeral pattern is valid"));

/// Parse an RGB triple from a computed color string such as
/// `rgb(12, 34, 56)` or `rgba(12, 34, 56, 0.5)`.
///
/// The first three decimal numerals in the string are read as channels.
/// Returns `None` when fewer than three numerals are present or a channel
/// is out of the 0-255 range.
pub fn parse_rgb(value: &str) -> Option<Rgb> {
    let channels: SmallVec3<u8> = NUMERAL_RE
        .find_iter(value)
        .take(3)
        .map(|m| m.as_str().parse::<u8>().ok())
        .collect::<Option<_>>()?;

    match channels.as_slice() {
        [r, g, b] => Some(Rgb::new(*r, *g, *b)),
        _ => None,
    }
}

/// RGB of a snapshot's `color` property, if present and parseable.
pub fn rgb_from_style(style: &StyleSnapshot) -> Option<Rgb> {
    let value = style.get("color")?;
    let rgb = parse_rgb(value);
    if rgb.is_none() {
        tracing::warn!(color = value, "unparseable color, treating as white");
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_and_rgba() {
        assert_eq!(parse_rgb("rgb(120, 125, 122)"), Some(Rgb::new(120, 125, 122)));
        assert_eq!(parse_rgb("rgba(200, 50, 50, 0.5)"), Some(Rgb::new(200, 50, 50)));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_rgb("red"), None);
        assert_eq!(parse_rgb("rgb(1, 2)"), None);
        assert_eq!(parse_rgb("rgb(300, 0, 0)"), None);
        assert_eq!(parse_rgb(""), None);
    }

    #[test]
    fn test_missing_color_property() {
        let style = StyleSnapshot::new().with("font-size", "12px");
        assert_eq!(rgb_from_style(&style), None);
    }
}
