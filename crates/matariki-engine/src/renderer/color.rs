//! RGBA colors for the 2D surface, with hex parsing for catalog colors.

/// RGBA color. Channels are 0-255 integers for RGB and 0.0-1.0 for alpha,
/// which is what CSS color strings on a 2D canvas expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    /// Create a color from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse `#rrggbb` (leading `#` optional, case-insensitive).
    /// Anything else yields opaque white.
    pub fn from_hex(hex: &str) -> Self {
        Self::try_from_hex(hex).unwrap_or(Self::WHITE)
    }

    /// Strict variant of [`Color::from_hex`].
    pub fn try_from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Color::from_hex("#FF8000"), Color::rgb(255, 128, 0));
        assert_eq!(Color::from_hex("4a90e2"), Color::rgb(0x4a, 0x90, 0xe2));
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Color::from_hex("#FFF"), Color::WHITE);
        assert_eq!(Color::from_hex("#GG0000"), Color::WHITE);
        assert_eq!(Color::from_hex(""), Color::WHITE);
        assert_eq!(Color::from_hex("#ééé"), Color::WHITE);
        assert_eq!(Color::from_hex("#+F+F+F"), Color::WHITE);
        assert_eq!(Color::try_from_hex("+F+F+F"), None);
    }

    #[test]
    fn css_string_clamps_alpha() {
        let c = Color::rgb(10, 20, 30).with_alpha(1.7);
        assert_eq!(c.to_css(), "rgba(10, 20, 30, 1)");
        assert_eq!(Color::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0)");
    }
}
