//! Hex color conversion.
//!
//! UI color pickers hand out `#rrggbb` strings; materials store linear
//! `Vec3` channels in `0.0..=1.0`. Each channel maps to `byte / 255`.

use glam::Vec3;

use crate::errors::ColorParseError;

/// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb` (case-insensitive) into RGB.
pub fn parse_hex(input: &str) -> Result<Vec3, ColorParseError> {
    let err = || ColorParseError {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(err());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());

    let (r, g, b) = match digits.len() {
        6 => (
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ),
        // #rgb expands each nibble: #abc == #aabbcc
        3 => (
            channel(&digits[0..1])? * 17,
            channel(&digits[1..2])? * 17,
            channel(&digits[2..3])? * 17,
        ),
        _ => return Err(err()),
    };

    Ok(from_bytes(r, g, b))
}

#[inline]
#[must_use]
pub fn from_bytes(r: u8, g: u8, b: u8) -> Vec3 {
    Vec3::new(f32::from(r), f32::from(g), f32::from(b)) / 255.0
}

/// Formats a color as lowercase `#rrggbb`, clamping out-of-range channels.
#[must_use]
pub fn to_hex(color: Vec3) -> String {
    let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", byte(color.x), byte(color.y), byte(color.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let c = parse_hex("#8B4513").unwrap();
        assert_eq!(c, from_bytes(0x8b, 0x45, 0x13));
    }

    #[test]
    fn parses_without_hash_and_lowercase() {
        assert_eq!(parse_hex("ff0000").unwrap(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn parses_short_form() {
        assert_eq!(parse_hex("#fff").unwrap(), Vec3::ONE);
        assert_eq!(parse_hex("#abc").unwrap(), parse_hex("#aabbcc").unwrap());
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "#12345", "#gggggg", "red", "#1234567", "#ééé", "#+f+f+f", "+ff"] {
            assert!(parse_hex(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn hex_output_matches_input() {
        assert_eq!(to_hex(parse_hex("#8B4513").unwrap()), "#8b4513");
        assert_eq!(to_hex(Vec3::new(2.0, -1.0, 0.5)), "#ff0080");
    }
}
