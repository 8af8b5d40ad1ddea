//! Property-based invariant tests for the color math.
//!
//! 1. HSL → hex → HSL round-trips within ±1 unit: lightness everywhere,
//!    saturation away from the lightness extremes, hue wherever chroma
//!    survives 8-bit rounding
//! 2. hex → Rgb → hex is the identity
//! 3. contrast_ratio is symmetric and bounded in [1, 21]
//! 4. adjust_lightness never moves lightness the wrong way
//! 5. lerp endpoints reproduce their inputs' HSL lightness
//! 6. hue_distance is bounded in [0, 180]

use proptest::prelude::*;
use tinct_color::{Hsl, Rgb, contrast_ratio, hue_distance};

// ── Helpers ──────────────────────────────────────────────────────────

fn arb_rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. HSL round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    // Below ~50% saturation or near the lightness extremes, 8-bit rounding
    // can move hue by more than a degree, so the strategy stays where hue
    // and saturation are well defined.
    #[test]
    fn hsl_hex_roundtrip_within_one_unit(
        h in 0.0f64..360.0,
        s in 60.0f64..=100.0,
        l in 35.0f64..=65.0,
    ) {
        let hex = Rgb::from_hsl(Hsl::new(h, s, l)).to_hex();
        let back = Rgb::hex(&hex).unwrap().to_hsl();
        prop_assert!(hue_distance(back.h, h) <= 1.0, "h {} -> {} via {}", h, back.h, hex);
        prop_assert!((back.s - s).abs() <= 1.0, "s {} -> {} via {}", s, back.s, hex);
        prop_assert!((back.l - l).abs() <= 1.0, "l {} -> {} via {}", l, back.l, hex);
    }
}

proptest! {
    #[test]
    fn full_range_roundtrip_within_one_unit(h in 0.0f64..360.0, s in 0.0f64..=100.0, l in 0.0f64..=100.0) {
        let hex = Rgb::from_hsl(Hsl::new(h, s, l)).to_hex();
        let back = Rgb::hex(&hex).unwrap().to_hsl();
        prop_assert!((back.l - l).abs() <= 1.0, "l {} -> {} via {}", l, back.l, hex);
        if (22.0..=78.0).contains(&l) {
            prop_assert!((back.s - s).abs() <= 1.0, "s {} -> {} via {}", s, back.s, hex);
        }
        let chroma = s * (1.0 - (2.0 * l / 100.0 - 1.0).abs());
        if chroma >= 25.0 {
            prop_assert!(hue_distance(back.h, h) <= 1.0, "h {} -> {} via {}", h, back.h, hex);
        }
    }

    #[test]
    fn lightness_roundtrip_for_any_saturation(h in 0.0f64..360.0, s in 0.0f64..=100.0, l in 0.0f64..=100.0) {
        let back = Rgb::from_hsl(Hsl::new(h, s, l)).to_hsl();
        prop_assert!((back.l - l).abs() <= 1.0, "l {} -> {}", l, back.l);
    }
}

/// Near black one 8-bit step is a large share of the chroma, so
/// saturation cannot round-trip there.
#[test]
fn saturation_is_ill_conditioned_near_black() {
    let c = Rgb::from_hsl(Hsl::new(200.0, 50.0, 1.0));
    assert_eq!(c, Rgb::new(1, 3, 4));
    assert!((c.to_hsl().s - 60.0).abs() < 1e-9);
}

// ═════════════════════════════════════════════════════════════════════════
// 2. hex identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hex_identity(c in arb_rgb()) {
        prop_assert_eq!(Rgb::hex(&c.to_hex()).unwrap(), c);
        prop_assert_eq!(c.to_hex().len(), 7);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. contrast bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contrast_symmetric_and_bounded(a in arb_rgb(), b in arb_rgb()) {
        let ab = contrast_ratio(a, b);
        let ba = contrast_ratio(b, a);
        prop_assert!((ab - ba).abs() < 1e-12);
        prop_assert!((1.0..=21.0 + 1e-9).contains(&ab), "ratio {}", ab);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. lightness nudges are monotonic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn adjust_lightness_direction(c in arb_rgb(), delta in 0.0f64..=50.0) {
        let l = c.lightness();
        prop_assert!(c.adjust_lightness(delta).lightness() >= l - 0.5);
        prop_assert!(c.adjust_lightness(-delta).lightness() <= l + 0.5);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. lerp endpoints
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lerp_endpoint_lightness(a in arb_rgb(), b in arb_rgb()) {
        prop_assert!((a.lerp(b, 0.0).lightness() - a.lightness()).abs() <= 0.5);
        prop_assert!((a.lerp(b, 1.0).lightness() - b.lightness()).abs() <= 0.5);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. hue distance bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hue_distance_bounded(a in -720.0f64..720.0, b in -720.0f64..720.0) {
        let d = hue_distance(a, b);
        prop_assert!((0.0..=180.0).contains(&d), "distance {}", d);
        prop_assert!((d - hue_distance(b, a)).abs() < 1e-9);
    }
}
