//! Color palette shared with the web styling layer.

/// Editor palette, `#RRGGBB` hex as the stylesheets expect it.
pub mod color {
    pub const PRIMARY: &str = "#24292e";
    pub const SECONDARY: &str = "#1f8ceb";
    pub const DANGER: &str = "#e34c4c";
    pub const MUTED: &str = "#959da5";
}

/// Convert a `#RRGGBB` hex color plus an alpha into a CSS `rgba()` string.
///
/// Channels that fail to parse come out as the literal text `NaN`; the
/// alpha is interpolated verbatim, without clamping or validation.
pub fn rgba(hex: &str, alpha: f64) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        channel(hex, 1, 3),
        channel(hex, 3, 5),
        channel(hex, 5, 7),
        alpha
    )
}

fn channel(hex: &str, start: usize, end: usize) -> String {
    match hex
        .get(start..end)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    {
        Some(value) => value.to_string(),
        None => "NaN".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_opaque() {
        assert_eq!(rgba("#000000", 1.0), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn white_half_transparent() {
        assert_eq!(rgba("#ffffff", 0.5), "rgba(255, 255, 255, 0.5)");
    }

    #[test]
    fn palette_secondary() {
        assert_eq!(rgba(color::SECONDARY, 0.2), "rgba(31, 140, 235, 0.2)");
    }

    #[test]
    fn malformed_hex_renders_nan() {
        assert_eq!(rgba("#zzzzzz", 1.0), "rgba(NaN, NaN, NaN, 1)");
    }

    #[test]
    fn short_input_renders_nan_for_missing_channels() {
        assert_eq!(rgba("#fff", 1.0), "rgba(255, NaN, NaN, 1)");
        assert_eq!(rgba("", 0.3), "rgba(NaN, NaN, NaN, 0.3)");
    }

    #[test]
    fn alpha_is_passed_through_unclamped() {
        assert_eq!(rgba("#000000", 2.5), "rgba(0, 0, 0, 2.5)");
        assert_eq!(rgba("#000000", -1.0), "rgba(0, 0, 0, -1)");
    }
}
