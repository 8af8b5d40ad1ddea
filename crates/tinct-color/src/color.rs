// SPDX-License-Identifier: MIT
//
// 8-bit sRGB and HSL colors with the handful of operations the theme
// derivation needs: lightness/saturation nudges, shortest-path
// interpolation, alpha suffixes and hex round-tripping.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard convention in color math and match the published HSL formulas.
#![allow(clippy::many_single_char_names)]
//
// HSL here is the classic CSS cylinder: hue in degrees [0, 360),
// saturation and lightness in percent [0, 100]. Conversions round to the
// nearest byte, so a trip through HSL can move each channel by at most one
// step; callers that need exact bytes keep the `Rgb` around.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A hex color string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Wrong number of hex digits (3, 6 or 8 accepted, `#` optional).
    #[error("invalid hex color {input:?}: expected 3, 6 or 8 hex digits, found {len}")]
    InvalidLength { input: String, len: usize },

    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex color {input:?}: {digit:?} is not a hex digit")]
    InvalidDigit { input: String, digit: char },
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// This is the storage type for every role, neutral stop and parameter in
/// tinct. Equality is exact byte equality.
///
/// ```
/// use tinct_color::Rgb;
///
/// let steel = Rgb::hex("#2d3440").unwrap();
/// assert_eq!(steel, Rgb::new(0x2d, 0x34, 0x40));
/// assert_eq!(steel.to_hex(), "#2d3440");
///
/// let lifted = steel.adjust_lightness(10.0);
/// assert!(lifted.lightness() > steel.lightness());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` literal. Bits above 24 are ignored.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Pack into `0xRRGGBB`.
    #[inline]
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (with or without `#`).
    ///
    /// An alpha component is accepted and discarded; use [`Rgba::hex`] to
    /// keep it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if the string is not a hex color.
    pub fn hex(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s).map(|rgba| rgba.rgb)
    }

    /// Build from HSL (hue wrapped into [0, 360), s/l clamped to [0, 100]).
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl.h, hsl.s, hsl.l)
    }

    /// Shorthand for `Rgb::from_hsl(Hsl::new(h, s, l))`.
    #[must_use]
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        hsl_to_rgb(h, s, l)
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Attach an alpha byte.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Rgba {
        Rgba::new(self, alpha)
    }

    // ─── HSL accessors ───────────────────────────────────────────────────

    /// HSL hue in degrees, 0 for achromatic colors.
    #[must_use]
    pub fn hue(self) -> f64 {
        self.to_hsl().h
    }

    /// HSL saturation in percent.
    #[must_use]
    pub fn saturation(self) -> f64 {
        self.to_hsl().s
    }

    /// HSL lightness in percent.
    #[must_use]
    pub fn lightness(self) -> f64 {
        self.to_hsl().l
    }

    // ─── HSL operations ──────────────────────────────────────────────────
    //
    // Each of these converts to HSL, changes one component, and rounds back.

    /// Add `delta` to HSL lightness (clamped to [0, 100]).
    #[must_use]
    pub fn adjust_lightness(self, delta: f64) -> Self {
        let hsl = self.to_hsl();
        Self::from_hsl(hsl.with_lightness(hsl.l + delta))
    }

    /// Add `delta` to HSL saturation (clamped to [0, 100]).
    #[must_use]
    pub fn adjust_saturation(self, delta: f64) -> Self {
        let hsl = self.to_hsl();
        Self::from_hsl(hsl.with_saturation(hsl.s + delta))
    }

    /// Replace HSL lightness with an absolute value (clamped to [0, 100]).
    #[must_use]
    pub fn set_lightness(self, l: f64) -> Self {
        Self::from_hsl(self.to_hsl().with_lightness(l))
    }

    /// Interpolate toward `other` in HSL at position `t` (clamped to [0, 1]).
    ///
    /// Hue takes the shortest path around the wheel: of `+delta` and
    /// `delta ∓ 360`, whichever has magnitude ≤ 180.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let a = self.to_hsl();
        let b = other.to_hsl();
        Self::from_hsl(Hsl::new(
            interpolate_hue(a.h, b.h, t),
            (b.s - a.s).mul_add(t, a.s),
            (b.l - a.l).mul_add(t, a.l),
        ))
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({})", self.to_hex())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::hex(s)
    }
}

// ─── Rgba ────────────────────────────────────────────────────────────────────

/// An 8-bit color with an optional alpha byte.
///
/// Parameter values like `#b0ddeb7f` carry an alpha suffix; most don't.
/// `alpha: None` formats as 6 digits, `Some(a)` as 8, even when `a` is
/// `0xff`, because the distinction is meaningful to theme documents.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: Option<u8>,
}

impl Rgba {
    #[inline]
    #[must_use]
    pub const fn new(rgb: Rgb, alpha: u8) -> Self {
        Self {
            rgb,
            alpha: Some(alpha),
        }
    }

    #[inline]
    #[must_use]
    pub const fn opaque(rgb: Rgb) -> Self {
        Self { rgb, alpha: None }
    }

    /// `0xRRGGBB` literal without alpha.
    #[inline]
    #[must_use]
    pub const fn from_u32(packed: u32) -> Self {
        Self::opaque(Rgb::from_u32(packed))
    }

    /// `0xRRGGBB` literal with an alpha byte.
    #[inline]
    #[must_use]
    pub const fn from_u32_alpha(packed: u32, alpha: u8) -> Self {
        Self::new(Rgb::from_u32(packed), alpha)
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if the string is not a hex color.
    pub fn hex(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s)
    }

    /// `#rrggbb` or `#rrggbbaa`.
    #[must_use]
    pub fn to_hex(self) -> String {
        match self.alpha {
            None => self.rgb.to_hex(),
            Some(a) => format!("{}{a:02x}", self.rgb.to_hex()),
        }
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self::opaque(rgb)
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgba({})", self.to_hex())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::hex(s)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// HSL components: hue in degrees [0, 360), saturation and lightness in
/// percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Build a normalized HSL value: hue wrapped, s/l clamped.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    #[must_use]
    pub fn with_hue(self, h: f64) -> Self {
        Self::new(h, self.s, self.l)
    }

    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        Self::new(self.h, s, self.l)
    }

    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Round to the nearest 8-bit color.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        Rgb::from_hsl(self)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

// ─── Hue helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Circular distance between two hues, in [0, 180].
#[inline]
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Interpolate between two hue angles taking the shortest path.
#[inline]
fn interpolate_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_hue(diff.mul_add(t, h1))
}

// ─── RGB ↔ HSL ───────────────────────────────────────────────────────────────

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    // Branch order matters on ties: red wins, then green.
    #[allow(clippy::float_cmp)]
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: normalize_hue(h * 60.0),
        s: s * 100.0,
        l: l * 100.0,
    }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = normalize_hue(h) / 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    if s == 0.0 {
        let v = to_u8(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let p = 2.0f64.mul_add(l, -q);

    Rgb::new(
        to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_channel(p, q, h)),
        to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

/// Convert a unit float (0.0–1.0) to a byte with round-half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(input: &str) -> Result<Rgba, ParseColorError> {
    let s = input.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    let digits = s
        .chars()
        .map(|c| {
            c.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or_else(|| ParseColorError::InvalidDigit {
                    input: input.to_string(),
                    digit: c,
                })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let byte = |i: usize| digits[i] << 4 | digits[i + 1];
    let short = |i: usize| digits[i] << 4 | digits[i];

    match digits.len() {
        3 => Ok(Rgba::opaque(Rgb::new(short(0), short(1), short(2)))),
        4 => Ok(Rgba::new(Rgb::new(short(0), short(1), short(2)), short(3))),
        6 => Ok(Rgba::opaque(Rgb::new(byte(0), byte(2), byte(4)))),
        8 => Ok(Rgba::new(Rgb::new(byte(0), byte(2), byte(4)), byte(6))),
        len => Err(ParseColorError::InvalidLength {
            input: input.to_string(),
            len,
        }),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        assert_eq!(Rgb::hex("#ff8000").unwrap(), Rgb::new(255, 128, 0));
    }

    #[test]
    fn hex_parsing_uppercase_and_no_hash() {
        assert_eq!(Rgb::hex("2D3440").unwrap(), Rgb::new(0x2d, 0x34, 0x40));
    }

    #[test]
    fn hex_parsing_short() {
        assert_eq!(Rgb::hex("#f80").unwrap(), Rgb::new(255, 136, 0));
    }

    #[test]
    fn hex_parsing_with_alpha() {
        let c = Rgba::hex("#ff000080").unwrap();
        assert_eq!(c.rgb, Rgb::new(255, 0, 0));
        assert_eq!(c.alpha, Some(0x80));
        // Rgb drops the alpha byte.
        assert_eq!(Rgb::hex("#ff000080").unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn hex_parsing_invalid_length() {
        let err = Rgb::hex("#12345").unwrap_err();
        assert!(matches!(err, ParseColorError::InvalidLength { len: 5, .. }));
        assert!(Rgb::hex("").is_err());
    }

    #[test]
    fn hex_parsing_invalid_digit() {
        let err = Rgb::hex("#12g456").unwrap_err();
        assert_eq!(
            err,
            ParseColorError::InvalidDigit {
                input: "#12g456".to_string(),
                digit: 'g',
            }
        );
    }

    #[test]
    fn hex_roundtrip() {
        let original = "#c86432";
        assert_eq!(Rgb::hex(original).unwrap().to_hex(), original);
        assert_eq!(Rgba::hex("#b0ddeb7f").unwrap().to_hex(), "#b0ddeb7f");
    }

    #[test]
    fn packed_literal() {
        let c = Rgb::from_u32(0x2d_3440);
        assert_eq!(c, Rgb::new(0x2d, 0x34, 0x40));
        assert_eq!(c.to_u32(), 0x2d_3440);
    }

    #[test]
    fn with_alpha_formats_eight_digits() {
        assert_eq!(Rgb::WHITE.with_alpha(0x59).to_hex(), "#ffffff59");
        assert_eq!(Rgba::from(Rgb::WHITE).to_hex(), "#ffffff");
    }

    // ── Known Values ─────────────────────────────────────────────────────

    #[test]
    fn red_is_hue_zero_full_saturation() {
        let hsl = Rgb::new(255, 0, 0).to_hsl();
        assert!(approx_eq(hsl.h, 0.0, 1e-9));
        assert!(approx_eq(hsl.s, 100.0, 1e-9));
        assert!(approx_eq(hsl.l, 50.0, 1e-9));
    }

    #[test]
    fn gray_has_no_saturation() {
        let hsl = Rgb::new(0x36, 0x36, 0x36).to_hsl();
        assert!(approx_eq(hsl.s, 0.0, 1e-9));
        assert!(approx_eq(hsl.l, 21.176, 0.01));
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(Rgb::hsl(120.0, 100.0, 50.0), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::hsl(240.0, 100.0, 50.0), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::hsl(0.0, 0.0, 100.0), Rgb::WHITE);
    }

    #[test]
    fn hsl_wraps_hue_and_clamps() {
        assert_eq!(Rgb::hsl(480.0, 100.0, 50.0), Rgb::hsl(120.0, 100.0, 50.0));
        assert_eq!(Rgb::hsl(-120.0, 100.0, 50.0), Rgb::hsl(240.0, 100.0, 50.0));
        assert_eq!(Rgb::hsl(10.0, 150.0, 140.0), Rgb::WHITE);
    }

    // ── Operations ───────────────────────────────────────────────────────

    #[test]
    fn adjust_lightness_clamps() {
        assert_eq!(Rgb::new(250, 250, 250).adjust_lightness(20.0), Rgb::WHITE);
        assert_eq!(Rgb::new(5, 5, 5).adjust_lightness(-20.0), Rgb::BLACK);
    }

    #[test]
    fn adjust_lightness_preserves_hue() {
        let c = Rgb::hex("#e8943a").unwrap();
        let darker = c.adjust_lightness(-15.0);
        assert!(hue_distance(c.hue(), darker.hue()) < 1.5);
        assert!(darker.lightness() < c.lightness());
    }

    #[test]
    fn adjust_saturation_to_gray() {
        let c = Rgb::hex("#3ab5c8").unwrap().adjust_saturation(-100.0);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgb::hex("#2d3440").unwrap();
        let b = Rgb::hex("#c8d0dc").unwrap();
        assert_eq!(a.lerp(b, 0.0), a.lerp(a, 0.5));
        let end = a.lerp(b, 1.0);
        assert!(hue_distance(end.hue(), b.hue()) < 1.5);
        assert!(approx_eq(end.lightness(), b.lightness(), 0.5));
    }

    #[test]
    fn lerp_takes_shortest_hue_path() {
        // 350° → 30°: the midpoint must be near 10°, not 190°.
        let a = Rgb::hsl(350.0, 80.0, 50.0);
        let b = Rgb::hsl(30.0, 80.0, 50.0);
        let mid = a.lerp(b, 0.5).hue();
        assert!(hue_distance(mid, 10.0) < 2.0, "midpoint hue was {mid}");
    }

    #[test]
    fn hue_distance_is_circular() {
        assert!(approx_eq(hue_distance(350.0, 10.0), 20.0, 1e-9));
        assert!(approx_eq(hue_distance(0.0, 180.0), 180.0, 1e-9));
        assert!(approx_eq(hue_distance(90.0, 90.0), 0.0, 1e-9));
    }

    #[test]
    fn normalize_hue_handles_non_finite() {
        assert!(approx_eq(normalize_hue(f64::NAN), 0.0, 1e-9));
        assert!(approx_eq(normalize_hue(-30.0), 330.0, 1e-9));
    }
}
