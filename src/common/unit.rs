//! Unit conversion utilities.
//!
//! DrawingML measures geometry in English Metric Units (EMU). Font sizes are
//! stored in hundredths of a point and preset-geometry adjustments in
//! 1/100000 of the shape's shorter side.

pub const EMUS_PER_INCH: i64 = 914_400;

/// Scale used by `<a:gd fmla="val ..."/>` adjustment values.
pub const ADJUST_SCALE: f64 = 100_000.0;

/// Convert inches to EMU, truncating toward zero.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64) as i64
}

/// Convert a font size in points to the `sz` attribute (hundredths of a point).
#[inline]
pub fn pt_to_centipoints(value: f64) -> u32 {
    (value * 100.0).round() as u32
}

/// Convert a fractional adjustment (e.g. `0.05`) to its `val` form (`5000`).
#[inline]
pub fn adjust_to_val(value: f64) -> i64 {
    (value * ADJUST_SCALE).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(7.5), 6_858_000);
        assert_eq!(inches(13.333), 12_191_695);
        assert_eq!(inches(0.0), 0);
    }

    #[test]
    fn test_inches_truncates() {
        // 4.1 * 914400 is slightly below 3749040 in binary floating point
        assert_eq!(inches(4.1), 3_749_039);
        assert_eq!(inches(-0.5), -457_200);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt_to_centipoints(18.0), 1800);
        assert_eq!(pt_to_centipoints(10.5), 1050);
    }

    #[test]
    fn test_adjust_values() {
        assert_eq!(adjust_to_val(0.05), 5000);
        assert_eq!(adjust_to_val(0.15), 15000);
        assert_eq!(adjust_to_val(0.04), 4000);
    }
}
