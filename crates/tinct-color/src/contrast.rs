// SPDX-License-Identifier: MIT
//
// WCAG 2.x relative luminance and contrast ratio on 8-bit sRGB.
//
// Both functions are evaluated on the exact bytes a theme will ship with,
// so "passes 4.5:1" here means the emitted color really passes.

use crate::color::Rgb;

/// Linearize one 8-bit sRGB channel (WCAG 2.x threshold of 0.03928).
#[inline]
fn channel_to_linear(c: u8) -> f64 {
    let s = f64::from(c) / 255.0;
    if s <= 0.039_28 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x:
///   L = 0.2126 · `R_lin` + 0.7152 · `G_lin` + 0.0722 · `B_lin`
///
/// Returns a value in [0.0, 1.0]; black is exactly 0, white exactly 1.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = channel_to_linear(color.r);
    let g = channel_to_linear(color.g);
    let b = channel_to_linear(color.b);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG contrast ratio: (`L_lighter` + 0.05) / (`L_darker` + 0.05).
///
/// Symmetric, always in [1.0, 21.0]. Black on white is exactly 21.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(relative_luminance(Rgb::BLACK).abs() < f64::EPSILON);
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Rgb::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-12), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = relative_luminance(Rgb::new(255, 0, 0));
        assert!(approx_eq(lum, 0.2126, 1e-9), "Red luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance(Rgb::new(0, 255, 0));
        assert!(approx_eq(lum, 0.7152, 1e-9), "Green luminance: {lum}");
    }

    #[test]
    fn luminance_low_channel_is_linear() {
        // 10/255 ≈ 0.0392 sits just under the threshold.
        let lum = relative_luminance(Rgb::new(10, 10, 10));
        assert!(approx_eq(lum, 10.0 / 255.0 / 12.92, 1e-12));
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance(Rgb::new(128, 128, 128));
        assert!(lum > 0.20 && lum < 0.23, "Mid-gray luminance: {lum}");
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_exactly_21() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!((ratio - 21.0).abs() < f64::EPSILON, "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = Rgb::hex("#3ab5c8").unwrap();
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-12));
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Rgb::hex("#cc334d").unwrap();
        let b = Rgb::hex("#1a1a66").unwrap();
        assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-12));
    }

    #[test]
    fn contrast_reference_text_on_surface() {
        // Default dark neutral: #b5b5b5 text on #363636 surface.
        let ratio = contrast_ratio(Rgb::hex("#b5b5b5").unwrap(), Rgb::hex("#363636").unwrap());
        assert!(ratio > 5.0 && ratio < 6.0, "ratio {ratio}");
    }
}
