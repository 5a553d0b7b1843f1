//! Conversion between colour formats.
//!
//! Everything goes through hex: `to_hex` normalizes a literal of any format,
//! `from_hex` renders a hex colour in any format. Neither ever fails; input
//! that cannot be read produces a black fallback in the requested format.

use crate::grammar;
use crate::types::{Alpha, Format, Rgb};

/// Returned by `to_hex` when the literal cannot be read.
pub const HEX_FALLBACK: &str = "#000000";

/// Normalize a literal in `source` format to hex.
///
/// Hex input (or anything already starting with `#`) passes through with the
/// `#` ensured, so 3-digit shorthand is kept as-is. Other formats produce a
/// lowercase `#rrggbb`; the alpha of RGBA input is dropped.
pub fn to_hex(literal: &str, source: Format) -> String {
    if literal.starts_with('#') {
        return literal.to_string();
    }

    let rgb = match source {
        Format::Hex => return format!("#{}", literal),
        Format::Rgb => grammar::parse_rgb(literal).ok(),
        Format::Rgba => grammar::parse_rgba(literal).ok().map(|(rgb, _)| rgb),
        Format::Hsl => grammar::parse_hsl(literal).ok().map(|hsl| hsl.to_rgb()),
    };

    rgb.map_or_else(|| HEX_FALLBACK.to_string(), Rgb::to_hex)
}

/// Render a hex colour (with or without `#`, shorthand allowed) in `target`
/// format.
///
/// Unreadable hex yields black in the target format: `rgb(0, 0, 0)`,
/// `rgba(0, 0, 0, 1)` or `hsl(0, 0%, 0%)`. Hex targets pass through.
pub fn from_hex(hex: &str, target: Format) -> String {
    if target == Format::Hex {
        return ensure_hash(hex);
    }

    let rgb = Rgb::from_hex(hex).unwrap_or(Rgb::BLACK);
    render(rgb, target)
}

/// Convert a literal between two formats.
pub fn convert(literal: &str, from: Format, to: Format) -> String {
    from_hex(&to_hex(literal, from), to)
}

/// Write `rgb` as a literal in `format`. RGBA output is always opaque.
pub fn render(rgb: Rgb, format: Format) -> String {
    let Rgb { r, g, b } = rgb;
    match format {
        Format::Hex => rgb.to_hex(),
        Format::Rgb => format!("rgb({}, {}, {})", r, g, b),
        Format::Rgba => format!("rgba({}, {}, {}, {})", r, g, b, Alpha::OPAQUE),
        Format::Hsl => rgb.to_hsl().to_string(),
    }
}

fn ensure_hash(hex: &str) -> String {
    if hex.starts_with('#') {
        hex.to_string()
    } else {
        format!("#{}", hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_hex_from_hex_passthrough() {
        assert_eq!(to_hex("#fff", Format::Hex), "#fff");
        assert_eq!(to_hex("ABCDEF", Format::Hex), "#ABCDEF");
    }

    #[test]
    fn test_to_hex_from_rgb() {
        assert_eq!(to_hex("rgb(255, 0, 0)", Format::Rgb), "#ff0000");
        assert_eq!(to_hex("rgb(30,41,59)", Format::Rgb), "#1e293b");
    }

    #[test]
    fn test_to_hex_from_rgba_drops_alpha() {
        assert_eq!(to_hex("rgba(0, 128, 255, 0.5)", Format::Rgba), "#0080ff");
    }

    #[test]
    fn test_to_hex_from_hsl() {
        assert_eq!(to_hex("hsl(0, 100%, 50%)", Format::Hsl), "#ff0000");
        assert_eq!(to_hex("hsl(360, 100%, 50%)", Format::Hsl), "#ff0000");
        assert_eq!(to_hex("hsl(0, 0%, 100%)", Format::Hsl), "#ffffff");
    }

    #[test]
    fn test_to_hex_fallback() {
        assert_eq!(to_hex("rgb(300, 0, 0)", Format::Rgb), HEX_FALLBACK);
        assert_eq!(to_hex("nonsense", Format::Hsl), HEX_FALLBACK);
        assert_eq!(to_hex("", Format::Rgba), HEX_FALLBACK);
    }

    #[test]
    fn test_to_hex_hash_input_passes_through_any_format() {
        assert_eq!(to_hex("#123", Format::Rgb), "#123");
    }

    #[test]
    fn test_from_hex_formats() {
        assert_eq!(from_hex("#ff0000", Format::Hex), "#ff0000");
        assert_eq!(from_hex("ff0000", Format::Hex), "#ff0000");
        assert_eq!(from_hex("#ff0000", Format::Rgb), "rgb(255, 0, 0)");
        assert_eq!(from_hex("#ff0000", Format::Rgba), "rgba(255, 0, 0, 1)");
        assert_eq!(from_hex("#ff0000", Format::Hsl), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn test_from_hex_expands_shorthand() {
        assert_eq!(from_hex("#abc", Format::Rgb), "rgb(170, 187, 204)");
        assert_eq!(from_hex("fff", Format::Rgba), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn test_from_hex_fallbacks() {
        assert_eq!(from_hex("#zzzzzz", Format::Rgb), "rgb(0, 0, 0)");
        assert_eq!(from_hex("", Format::Rgba), "rgba(0, 0, 0, 1)");
        assert_eq!(from_hex("#12", Format::Hsl), "hsl(0, 0%, 0%)");
    }

    #[test]
    fn test_convert_between_formats() {
        assert_eq!(convert("rgb(0, 0, 255)", Format::Rgb, Format::Hsl), "hsl(240, 100%, 50%)");
        assert_eq!(convert("hsl(120, 100%, 25%)", Format::Hsl, Format::Rgb), "rgb(0, 128, 0)");
        assert_eq!(convert("#fff", Format::Hex, Format::Rgba), "rgba(255, 255, 255, 1)");
        assert_eq!(convert("#fff", Format::Hex, Format::Hex), "#fff");
    }

    #[test]
    fn test_round_trip_values() {
        for (literal, format) in [
            ("rgb(12, 200, 99)", Format::Rgb),
            ("rgba(1, 2, 3, 1)", Format::Rgba),
            ("hsl(0, 100%, 50%)", Format::Hsl),
            ("#1e293b", Format::Hex),
        ] {
            assert_eq!(from_hex(&to_hex(literal, format), format), literal);
        }
    }
}
