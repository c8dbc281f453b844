/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
///
/// # Examples
///
/// ```rust
/// use govdeck::common::RGBColor;
///
/// let navy = RGBColor::new(0x0F, 0x17, 0x2A);
/// assert_eq!(navy.to_hex(), "0F172A");
/// assert_eq!(RGBColor::from_hex("#0f172a"), Some(navy));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string such as `"FF0000"` or `"#FF0000"`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to the uppercase hex form used by `<a:srgbClr val="..."/>`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting() {
        assert_eq!(RGBColor::new(255, 0, 0).to_hex(), "FF0000");
        assert_eq!(RGBColor::new(0x06, 0xB6, 0xD4).to_hex(), "06B6D4");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(RGBColor::from_hex("A855F7"), Some(RGBColor::new(0xA8, 0x55, 0xF7)));
        assert_eq!(RGBColor::from_hex("#ec4899"), Some(RGBColor::new(0xEC, 0x48, 0x99)));
        assert_eq!(RGBColor::from_hex("12345"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
        assert_eq!(RGBColor::from_hex("ñ1234"), None);
    }
}
