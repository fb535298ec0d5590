/// Straight-alpha RGBA color with components in `[0, 1]`.
///
/// Surfaces decide how to blend; the driver only carries the value through.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const GREEN: Color = Color::rgba(0.0, 1.0, 0.0, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parses `#RGB` or `#RRGGBB` (leading `#` optional).
    ///
    /// Returns `None` for any other shape.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }

        match digits.len() {
            3 => {
                let mut c = [0u8; 3];
                for (i, ch) in digits.chars().enumerate() {
                    let v = ch.to_digit(16)? as u8;
                    c[i] = v * 17;
                }
                Some(Self::from_rgb_u8(c[0], c[1], c[2]))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Self::from_rgb_u8(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_short_form_expands_nibbles() {
        assert_eq!(Color::from_hex("#0F0"), Some(Color::GREEN));
        assert_eq!(Color::from_hex("fff"), Some(Color::WHITE));
    }

    #[test]
    fn from_hex_long_form() {
        let c = Color::from_hex("#00FFAA").unwrap();
        assert_eq!(c.r, 0.0);
        assert_eq!(c.g, 1.0);
        assert_eq!(c.b, 170.0 / 255.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn from_hex_rejects_malformed() {
        assert!(Color::from_hex("#12").is_none());
        assert!(Color::from_hex("#GGGGGG").is_none());
        assert!(Color::from_hex("#1234567").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }
}
