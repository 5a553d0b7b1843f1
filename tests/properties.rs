//! End-to-end properties of the public facade.

use contrast::{
    calculate_contrast_ratio, classify, format_placeholder, from_hex_to_format, is_valid_color,
    relative_luminance, to_hex_format, Format, Rgb, Tier,
};
use pretty_assertions::assert_eq;

/// A spread of colours covering greys, primaries, and awkward mid-tones.
fn sample_hexes() -> Vec<String> {
    let steps = [0u8, 1, 17, 64, 118, 127, 128, 200, 254, 255];
    let mut out = Vec::new();
    for r in steps {
        for g in [0u8, 85, 170, 255] {
            for b in [0u8, 51, 255] {
                out.push(Rgb::new(r, g, b).to_hex());
            }
        }
    }
    out
}

fn luminance_of_hex(hex: &str) -> f64 {
    relative_luminance(Rgb::from_hex(hex).unwrap())
}

#[test]
fn hex_round_trips_through_every_format() {
    for hex in sample_hexes() {
        for format in [Format::Rgb, Format::Rgba] {
            let literal = from_hex_to_format(&hex, format);
            assert!(is_valid_color(&literal, format), "{literal}");
            assert_eq!(to_hex_format(&literal, format), hex);
        }
    }
}

#[test]
fn hsl_round_trip_matches_luminance() {
    for hex in sample_hexes() {
        let literal = from_hex_to_format(&hex, Format::Hsl);
        assert!(is_valid_color(&literal, Format::Hsl), "{literal}");

        let back = to_hex_format(&literal, Format::Hsl);
        let diff = (luminance_of_hex(&hex) - luminance_of_hex(&back)).abs();
        assert!(diff < 0.05, "{hex} -> {literal} -> {back}");
    }
}

#[test]
fn hsl_agrees_with_palette() {
    use palette::{Hsl, IntoColor, Srgb};

    for hex in sample_hexes() {
        let rgb = Rgb::from_hex(&hex).unwrap();
        let ours = rgb.to_hsl();

        let theirs: Hsl = Srgb::new(
            f32::from(rgb.r) / 255.0,
            f32::from(rgb.g) / 255.0,
            f32::from(rgb.b) / 255.0,
        )
        .into_color();

        let s = theirs.saturation * 100.0;
        let l = theirs.lightness * 100.0;
        assert!((f32::from(ours.l) - l).abs() <= 1.0, "{hex} lightness");

        // Hue and saturation are meaningless for greys
        if rgb.r == rgb.g && rgb.g == rgb.b {
            assert_eq!((ours.h, ours.s), (0, 0));
            continue;
        }

        assert!((f32::from(ours.s) - s).abs() <= 1.0, "{hex} saturation");

        let hue = theirs.hue.into_positive_degrees();
        let delta = (f32::from(ours.h) - hue).abs();
        assert!(delta.min(360.0 - delta) <= 1.0, "{hex} hue {} vs {}", ours.h, hue);
    }
}

#[test]
fn contrast_is_symmetric() {
    let hexes = sample_hexes();
    for a in hexes.iter().step_by(7) {
        for b in hexes.iter().step_by(5) {
            assert_eq!(calculate_contrast_ratio(a, b), calculate_contrast_ratio(b, a));
        }
    }
    assert_eq!(
        calculate_contrast_ratio("rgb(10, 20, 30)", "hsl(200, 40%, 60%)"),
        calculate_contrast_ratio("hsl(200, 40%, 60%)", "rgb(10, 20, 30)")
    );
}

#[test]
fn contrast_extremes() {
    assert_eq!(calculate_contrast_ratio("#000000", "#ffffff"), "21.00:1");
    assert_eq!(calculate_contrast_ratio("#ffffff", "#ffffff"), "1.00:1");
}

#[test]
fn contrast_fallback_for_unreadable_input() {
    assert_eq!(calculate_contrast_ratio("garbage", "#fff"), "1:1");
    assert_eq!(calculate_contrast_ratio("#fff", "rgb()"), "1:1");
}

#[test]
fn contrast_stays_in_range() {
    let hexes = sample_hexes();
    for a in hexes.iter().step_by(3) {
        for b in hexes.iter().step_by(11) {
            let ratio = calculate_contrast_ratio(a, b);
            let value: f64 = ratio.trim_end_matches(":1").parse().unwrap();
            assert!((1.0..=21.0).contains(&value), "{a} vs {b}: {ratio}");
        }
    }
}

#[test]
fn validation_boundaries() {
    assert!(!is_valid_color("rgb(256,0,0)", Format::Rgb));
    assert!(is_valid_color("rgb(255,0,0)", Format::Rgb));
    assert!(!is_valid_color("hsl(361,0%,0%)", Format::Hsl));
    assert!(is_valid_color("hsl(360,100%,50%)", Format::Hsl));
}

#[test]
fn red_to_hsl() {
    assert_eq!(from_hex_to_format("#ff0000", Format::Hsl), "hsl(0, 100%, 50%)");
}

#[test]
fn classification() {
    assert_eq!(classify("4.50:1").tier.label(), "AA (Good)");
    assert_eq!(classify("2.99:1").tier.label(), "Fails");
    assert_eq!(classify(&calculate_contrast_ratio("#000", "#fff")).tier, Tier::Enhanced);
}

#[test]
fn placeholders_validate_in_their_format() {
    for format in Format::ALL {
        assert!(is_valid_color(format_placeholder(format), format));
    }
}

#[test]
fn shorthand_hex_is_preserved_by_to_hex() {
    assert_eq!(to_hex_format("#abc", Format::Hex), "#abc");
    assert_eq!(from_hex_to_format("#abc", Format::Rgb), "rgb(170, 187, 204)");
}
