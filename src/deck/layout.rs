//! Small layout computations used by the slide builders.

use crate::common::RGBColor;

use super::palette::{AMBER, CYAN, GREEN};

/// Width of a bar for `weight` out of `max_weight`, scaled from `reference`
/// (the width of a full bar). Truncates toward zero.
///
/// ```
/// use govdeck::common::inches;
/// use govdeck::deck::layout::bar_width;
/// assert_eq!(bar_width(inches(2.5), 25, 25), inches(2.5));
/// assert_eq!(bar_width(inches(2.5), 10, 25), 914_400);
/// ```
pub fn bar_width(reference: i64, weight: u32, max_weight: u32) -> i64 {
    if max_weight == 0 {
        return 0;
    }
    reference * i64::from(weight) / i64::from(max_weight)
}

/// Bar color for a category weight: 20 and up GREEN, 10 and up CYAN,
/// otherwise AMBER.
pub fn weight_color(weight: u32) -> RGBColor {
    match weight {
        w if w >= 20 => GREEN,
        w if w >= 10 => CYAN,
        _ => AMBER,
    }
}

/// Label color for an HTTP method: GET is GREEN, anything else AMBER.
pub fn method_color(method: &str) -> RGBColor {
    if method == "GET" { GREEN } else { AMBER }
}

/// `(column, row)` of item `index` in a grid with `columns` columns.
pub fn grid_cell(index: usize, columns: usize) -> (usize, usize) {
    (index % columns, index / columns)
}

/// Offset of the `n`th item in a row or column with the given pitch.
#[inline]
pub fn step(start: i64, n: usize, pitch: i64) -> i64 {
    start + n as i64 * pitch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::inches;
    use proptest::prelude::*;

    #[test]
    fn test_weight_color_boundaries() {
        assert_eq!(weight_color(25), GREEN);
        assert_eq!(weight_color(20), GREEN);
        assert_eq!(weight_color(19), CYAN);
        assert_eq!(weight_color(10), CYAN);
        assert_eq!(weight_color(9), AMBER);
        assert_eq!(weight_color(5), AMBER);
        assert_eq!(weight_color(0), AMBER);
    }

    #[test]
    fn test_method_color() {
        assert_eq!(method_color("GET"), GREEN);
        assert_eq!(method_color("POST"), AMBER);
        assert_eq!(method_color("get"), AMBER);
    }

    #[test]
    fn test_bar_width_values() {
        let max_bar = inches(2.5);
        assert_eq!(max_bar, 2_286_000);
        assert_eq!(bar_width(max_bar, 20, 25), 1_828_800);
        assert_eq!(bar_width(max_bar, 5, 25), 457_200);
        assert_eq!(bar_width(max_bar, 7, 0), 0);
    }

    #[test]
    fn test_grid_cell() {
        assert_eq!(grid_cell(0, 3), (0, 0));
        assert_eq!(grid_cell(4, 3), (1, 1));
        assert_eq!(grid_cell(7, 4), (3, 1));
        assert_eq!(step(inches(0.8), 2, inches(4.1)), inches(0.8) + 2 * inches(4.1));
    }

    proptest! {
        #[test]
        fn bar_width_is_monotonic(reference in 0i64..100_000_000, a in 0u32..=25, b in 0u32..=25) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(bar_width(reference, lo, 25) <= bar_width(reference, hi, 25));
        }

        #[test]
        fn bar_width_matches_formula(reference in 0i64..100_000_000, w in 0u32..=25) {
            prop_assert_eq!(bar_width(reference, w, 25), reference * w as i64 / 25);
            prop_assert!(bar_width(reference, w, 25) <= reference);
        }
    }
}
