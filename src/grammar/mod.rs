//! Colour literal grammar and validator.
//!
//! Each format has a strict recognizer that must consume the whole literal.
//! Syntax is checked before ranges, so `rgb(300,0,0)` is well formed but out
//! of range, while `rgb(1000,0,0)` is a syntax error (at most three digits).

mod diagnostic;
mod scanner;

pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::types::{Alpha, Format, Hsl, Rgb};
use scanner::Scanner;

/// Outcome of reading a literal against one format's grammar.
pub type Parsed<T> = std::result::Result<T, Diagnostic>;

/// Check `literal` against the grammar of `format`.
pub fn is_valid(literal: &str, format: Format) -> bool {
    !validate(literal, format).has_errors()
}

/// Validate `literal` against the grammar of `format`, collecting diagnostics.
///
/// Warnings never make a literal invalid.
pub fn validate(literal: &str, format: Format) -> ValidationResult {
    let mut result = ValidationResult::new();

    let outcome = match format {
        Format::Hex => parse_hex(literal).map(|_| None),
        Format::Rgb => parse_rgb(literal).map(|_| None),
        Format::Rgba => parse_rgba(literal).map(|_| None),
        Format::Hsl => parse_hsl(literal).map(|hsl| (hsl.h == 360).then(hue_360_warning)),
    };

    match outcome {
        Ok(Some(warning)) => result.push(warning),
        Ok(None) => {}
        Err(d) => result.push(d),
    }

    result
}

/// Read `#rgb`, `#rrggbb`, `rgb` or `rrggbb`, expanding shorthand.
pub fn parse_hex(literal: &str) -> Parsed<Rgb> {
    check_empty(literal, Format::Hex)?;

    let digits = literal.strip_prefix('#').unwrap_or(literal);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(syntax_error(literal, Format::Hex));
    }

    let bytes = digits.as_bytes();
    match bytes.len() {
        3 => {
            // #RGB -> #RRGGBB
            let [r, g, b] = [bytes[0], bytes[1], bytes[2]].map(|c| hex_value(c) * 17);
            Ok(Rgb::new(r, g, b))
        }
        6 => Ok(Rgb::new(
            hex_value(bytes[0]) << 4 | hex_value(bytes[1]),
            hex_value(bytes[2]) << 4 | hex_value(bytes[3]),
            hex_value(bytes[4]) << 4 | hex_value(bytes[5]),
        )),
        n => Err(Diagnostic::error(
            "contrast::grammar::hex-length",
            format!("Hex colour `{}` has {} digits", literal, n),
        )
        .with_help("Use 3 or 6 hex digits, e.g. #fff or #ffffff")),
    }
}

/// Read `rgb(r, g, b)` with every channel in `0..=255`.
pub fn parse_rgb(literal: &str) -> Parsed<Rgb> {
    check_empty(literal, Format::Rgb)?;

    let [r, g, b] = rgb_syntax(literal).ok_or_else(|| syntax_error(literal, Format::Rgb))?;
    to_rgb([r, g, b])
}

/// Read `rgba(r, g, b, a)` with channels in `0..=255` and alpha in `[0, 1]`.
pub fn parse_rgba(literal: &str) -> Parsed<(Rgb, Alpha)> {
    check_empty(literal, Format::Rgba)?;

    let (channels, alpha) =
        rgba_syntax(literal).ok_or_else(|| syntax_error(literal, Format::Rgba))?;
    let rgb = to_rgb(channels)?;
    let alpha = Alpha::new(alpha).ok_or_else(|| {
        out_of_range(format!("Alpha {} is outside 0-1", alpha))
            .with_help("Alpha is a number from 0 (transparent) to 1 (opaque)")
    })?;

    Ok((rgb, alpha))
}

/// Read `hsl(h, s%, l%)` with hue in `0..=360` and percentages in `0..=100`.
pub fn parse_hsl(literal: &str) -> Parsed<Hsl> {
    check_empty(literal, Format::Hsl)?;

    let [h, s, l] = hsl_syntax(literal).ok_or_else(|| syntax_error(literal, Format::Hsl))?;

    if h > 360 {
        return Err(out_of_range(format!("Hue {} is outside 0-360", h))
            .with_help("Hue is an angle in degrees from 0 to 360"));
    }

    Ok(Hsl::new(h, percent("Saturation", s)?, percent("Lightness", l)?))
}

fn rgb_syntax(literal: &str) -> Option<[u16; 3]> {
    let mut s = Scanner::new(literal);
    if !s.eat("rgb(") {
        return None;
    }
    let channels = channels(&mut s)?;
    close(&mut s)?;
    Some(channels)
}

fn rgba_syntax(literal: &str) -> Option<([u16; 3], f64)> {
    let mut s = Scanner::new(literal);
    if !s.eat("rgba(") {
        return None;
    }
    let channels = channels(&mut s)?;
    if !s.eat(",") {
        return None;
    }
    s.skip_whitespace();
    let alpha = s.decimal()?;
    s.skip_whitespace();
    close(&mut s)?;
    Some((channels, alpha))
}

fn hsl_syntax(literal: &str) -> Option<[u16; 3]> {
    let mut s = Scanner::new(literal);
    if !s.eat("hsl(") {
        return None;
    }
    let h = component(&mut s, "")?;
    if !s.eat(",") {
        return None;
    }
    let sat = component(&mut s, "%")?;
    if !s.eat(",") {
        return None;
    }
    let l = component(&mut s, "%")?;
    close(&mut s)?;
    Some([h, sat, l])
}

/// Three comma-separated integer components.
fn channels(s: &mut Scanner<'_>) -> Option<[u16; 3]> {
    let r = component(s, "")?;
    if !s.eat(",") {
        return None;
    }
    let g = component(s, "")?;
    if !s.eat(",") {
        return None;
    }
    let b = component(s, "")?;
    Some([r, g, b])
}

/// An integer of at most three digits, directly followed by `suffix`, with
/// optional whitespace around it.
fn component(s: &mut Scanner<'_>, suffix: &str) -> Option<u16> {
    s.skip_whitespace();
    let value = s.digits(3)?.parse().ok()?;
    if !s.eat(suffix) {
        return None;
    }
    s.skip_whitespace();
    Some(value)
}

fn close(s: &mut Scanner<'_>) -> Option<()> {
    (s.eat(")") && s.is_at_end()).then_some(())
}

fn to_rgb([r, g, b]: [u16; 3]) -> Parsed<Rgb> {
    Ok(Rgb::new(channel("Red", r)?, channel("Green", g)?, channel("Blue", b)?))
}

fn channel(name: &str, value: u16) -> Parsed<u8> {
    u8::try_from(value).map_err(|_| {
        out_of_range(format!("{} channel {} is outside 0-255", name, value))
            .with_help("RGB channels are integers from 0 to 255")
    })
}

fn percent(name: &str, value: u16) -> Parsed<u8> {
    match u8::try_from(value) {
        Ok(v) if v <= 100 => Ok(v),
        _ => Err(out_of_range(format!("{} {}% is outside 0-100%", name, value))
            .with_help("Saturation and lightness are percentages from 0% to 100%")),
    }
}

fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

fn check_empty(literal: &str, format: Format) -> Parsed<()> {
    if literal.is_empty() {
        return Err(Diagnostic::error("contrast::grammar::empty", "Colour literal is empty")
            .with_help(format!("Enter a {} colour such as {}", format, format.placeholder())));
    }
    Ok(())
}

fn syntax_error(literal: &str, format: Format) -> Diagnostic {
    Diagnostic::error(
        "contrast::grammar::syntax",
        format!("`{}` is not a valid {} colour", literal, format),
    )
    .with_help(format!("Use the form {}", format.placeholder()))
}

fn out_of_range(message: String) -> Diagnostic {
    Diagnostic::error("contrast::grammar::out-of-range", message)
}

fn hue_360_warning() -> Diagnostic {
    Diagnostic::warning(
        "contrast::grammar::hue-360",
        "Hue 360 is the same angle as hue 0",
    )
    .with_help("Write the hue as 0 instead")
}
