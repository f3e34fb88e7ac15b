//! Scalar-to-RGB palettes.

use donutfractals_core::ColorScheme;

/// Colour of points inside the set and of rays that hit nothing.
pub const IN_SET_COLOR: [u8; 3] = [0, 0, 0];

/// Map a normalized value to RGB with the default donut palette.
pub fn colorize(value: f64, in_set: bool) -> [u8; 3] {
    colorize_with(ColorScheme::Donut, value, in_set)
}

pub fn colorize_with(scheme: ColorScheme, value: f64, in_set: bool) -> [u8; 3] {
    if in_set {
        return IN_SET_COLOR;
    }
    match scheme {
        ColorScheme::Donut => donut(value),
        ColorScheme::Glaze => glaze(value),
    }
}

fn donut(t: f64) -> [u8; 3] {
    [
        channel(255.0 * (0.8 + 0.2 * (t * 10.0).sin())),
        channel(182.0 * (0.7 + 0.3 * (t * 8.0).cos())),
        channel(193.0 * (0.5 + 0.5 * (t * 6.0).sin())),
    ]
}

fn glaze(t: f64) -> [u8; 3] {
    [
        channel(255.0 * t * 0.9),
        channel(182.0 * t * 0.8),
        channel(193.0 * t * 0.7),
    ]
}

/// Truncate into a byte, clamping to [0, 255]; NaN maps to 0.
#[inline]
fn channel(v: f64) -> u8 {
    if v.is_nan() {
        0
    } else {
        v.clamp(0.0, 255.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_set_is_black_for_any_value() {
        for v in [0.0, 0.3, 1.0, -5.0, f64::NAN] {
            assert_eq!(colorize(v, true), [0, 0, 0]);
            assert_eq!(colorize_with(ColorScheme::Glaze, v, true), [0, 0, 0]);
        }
    }

    #[test]
    fn deterministic() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            assert_eq!(colorize(v, false), colorize(v, false));
        }
    }

    #[test]
    fn donut_at_zero() {
        // sin 0 = 0, cos 0 = 1
        assert_eq!(colorize(0.0, false), [204, 182, 96]);
    }

    #[test]
    fn escaped_pixels_are_never_black() {
        // red never drops below 255 * 0.6
        for i in 0..=1000 {
            let [r, _, _] = colorize(i as f64 / 1000.0, false);
            assert!(r >= 153);
        }
    }

    #[test]
    fn donut_is_continuous() {
        let step = 1e-4;
        let mut prev = colorize(0.0, false);
        for i in 1..=10_000 {
            let next = colorize(i as f64 * step, false);
            for c in 0..3 {
                assert!((prev[c] as i32 - next[c] as i32).abs() <= 1);
            }
            prev = next;
        }
    }

    #[test]
    fn glaze_scales_linearly() {
        assert_eq!(colorize_with(ColorScheme::Glaze, 0.0, false), [0, 0, 0]);
        assert_eq!(
            colorize_with(ColorScheme::Glaze, 1.0, false),
            [229, 145, 135]
        );
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(
            colorize_with(ColorScheme::Glaze, 10.0, false),
            [255, 255, 255]
        );
        assert_eq!(colorize_with(ColorScheme::Glaze, -1.0, false), [0, 0, 0]);
    }
}
