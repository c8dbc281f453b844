//! Colors and font shared by every slide.

use crate::common::RGBColor;

/// Deep navy slide background.
pub const BG_DARK: RGBColor = RGBColor::new(0x0F, 0x17, 0x2A);
/// Card panel background.
pub const BG_CARD: RGBColor = RGBColor::new(0x1E, 0x29, 0x3B);
/// Primary indigo.
pub const PURPLE: RGBColor = RGBColor::new(0x63, 0x66, 0xF1);
/// AI purple.
pub const PURPLE_LIGHT: RGBColor = RGBColor::new(0xA8, 0x55, 0xF7);
pub const PINK: RGBColor = RGBColor::new(0xEC, 0x48, 0x99);
pub const CYAN: RGBColor = RGBColor::new(0x06, 0xB6, 0xD4);
pub const GREEN: RGBColor = RGBColor::new(0x10, 0xB9, 0x81);
/// Amber, used for warnings.
pub const AMBER: RGBColor = RGBColor::new(0xF5, 0x9E, 0x0B);
/// Red, used for critical items.
pub const RED: RGBColor = RGBColor::new(0xEF, 0x44, 0x44);
pub const WHITE: RGBColor = RGBColor::new(0xFF, 0xFF, 0xFF);
pub const GRAY: RGBColor = RGBColor::new(0x94, 0xA3, 0xB8);
pub const LIGHT_GRAY: RGBColor = RGBColor::new(0xCB, 0xD5, 0xE1);

// One-off tones
pub const SLATE: RGBColor = RGBColor::new(0x64, 0x74, 0x8B);
pub const VIOLET: RGBColor = RGBColor::new(0x8B, 0x5C, 0xF6);
pub const ORANGE: RGBColor = RGBColor::new(0xF9, 0x73, 0x16);
pub const YELLOW: RGBColor = RGBColor::new(0xFB, 0xBF, 0x24);

/// Font used for all text.
pub const FONT: &str = "Calibri";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_hex() {
        assert_eq!(BG_DARK.to_hex(), "0F172A");
        assert_eq!(PURPLE_LIGHT.to_hex(), "A855F7");
        assert_eq!(LIGHT_GRAY.to_hex(), "CBD5E1");
        assert_eq!(YELLOW.to_hex(), "FBBF24");
    }
}
