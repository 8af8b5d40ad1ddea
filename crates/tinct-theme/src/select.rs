// SPDX-License-Identifier: MIT

//! Assign the four anchor roles from an extracted palette.
//!
//! The surface is picked by a pluggable [`SurfaceStrategy`]; text and
//! accents are then chosen relative to it:
//!
//! - **text**: the candidate with the highest contrast against the surface,
//!   provided it reaches 4.5:1 and is not a near-copy of the surface
//! - **accent primary**: the most saturated unused candidate, nudged toward
//!   hues roughly 150° from the surface
//! - **accent secondary**: a saturated candidate at least 60° from the
//!   primary, or the primary's complement when none exists

use tinct_color::{Hsl, Rgb, contrast_ratio, hue_distance};

use crate::error::{Result, ThemeError};
use crate::extract::{ExtractedColor, Location};
use crate::roles::{SemanticColorRoles, Tone};

const MIN_TEXT_CONTRAST: f64 = 4.5;
/// A text candidate closer than both of these to the surface is a variant
/// of the surface, not text.
const TEXT_MIN_HUE_DISTANCE: f64 = 30.0;
const TEXT_MIN_LIGHTNESS_DISTANCE: f64 = 20.0;

const FALLBACK_TEXT_DARK: Rgb = Rgb::WHITE;
const FALLBACK_TEXT_LIGHT: Rgb = Rgb::from_u32(0x12_1212);

const MIN_ACCENT_SATURATION: f64 = 35.0;
const MIN_ACCENT_HUE_DISTANCE: f64 = 60.0;
const HARMONY_ANGLE: f64 = 150.0;
const HARMONY_MAX_BONUS: f64 = 20.0;
const SYNTHESIZED_SATURATION_FACTOR: f64 = 0.8;

/// Lightness a surface is moved to when nothing in the image fits the tone.
const DARK_SURFACE_LIGHTNESS: f64 = 16.0;
const LIGHT_SURFACE_LIGHTNESS: f64 = 92.0;
const DARK_SYNTH_SATURATION: f64 = 22.0;
const LIGHT_SYNTH_SATURATION: f64 = 20.0;

/// Bonus for hue pairs near a split-complementary angle.
fn harmony_bonus(distance: f64) -> f64 {
    (HARMONY_MAX_BONUS - (distance - HARMONY_ANGLE).abs()).max(0.0)
}

// ---------------------------------------------------------------------------
// Surface strategies
// ---------------------------------------------------------------------------

/// The chosen surface and the palette entry it came from, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceChoice {
    pub color: Rgb,
    pub source: Option<usize>,
}

/// Policy for turning a ranked palette into a surface color.
pub trait SurfaceStrategy {
    fn name(&self) -> &'static str;

    /// `colors` is non-empty and sorted by descending population.
    fn select_surface(&self, colors: &[ExtractedColor], tone: Tone) -> SurfaceChoice;
}

fn matches_tone(hsl: &Hsl, tone: Tone) -> bool {
    match tone {
        Tone::Dark => hsl.l < 50.0,
        Tone::Light => hsl.l >= 50.0,
    }
}

/// Use the image's own most prominent tone-matching color, saturation
/// capped so vivid regions never become the backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProminentSurface {
    pub max_saturation: f64,
}

impl ProminentSurface {
    pub const FAITHFUL: Self = Self { max_saturation: 35.0 };
    pub const MUTED: Self = Self { max_saturation: 20.0 };
}

impl SurfaceStrategy for ProminentSurface {
    fn name(&self) -> &'static str {
        "prominent"
    }

    fn select_surface(&self, colors: &[ExtractedColor], tone: Tone) -> SurfaceChoice {
        let cap = self.max_saturation;

        let calm = colors
            .iter()
            .enumerate()
            .find(|(_, c)| matches_tone(&c.hsl, tone) && c.hsl.s <= cap);
        if let Some((i, c)) = calm {
            return SurfaceChoice { color: c.color, source: Some(i) };
        }
        if let Some((i, c)) = colors.iter().enumerate().find(|(_, c)| matches_tone(&c.hsl, tone)) {
            return SurfaceChoice {
                color: c.hsl.with_saturation(cap).to_rgb(),
                source: Some(i),
            };
        }
        let lightness = if tone.is_dark() { DARK_SURFACE_LIGHTNESS } else { LIGHT_SURFACE_LIGHTNESS };
        let top = colors[0].hsl;
        SurfaceChoice {
            color: Hsl::new(top.h, top.s.min(cap), lightness).to_rgb(),
            source: Some(0),
        }
    }
}

/// Synthesize the surface from the image's dominant hue at a fixed,
/// calibrated lightness and saturation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HueSynthesis;

impl HueSynthesis {
    /// Circular mean hue weighted by saturation × population, or `None`
    /// for an achromatic palette.
    fn dominant_hue(colors: &[ExtractedColor]) -> Option<f64> {
        let (sin, cos, weight) = colors.iter().fold((0.0, 0.0, 0.0), |(s, c, w), color| {
            let weight = color.hsl.s * f64::from(color.population);
            let rad = color.hsl.h.to_radians();
            (weight.mul_add(rad.sin(), s), weight.mul_add(rad.cos(), c), w + weight)
        });
        (weight > f64::EPSILON).then(|| sin.atan2(cos).to_degrees())
    }
}

impl SurfaceStrategy for HueSynthesis {
    fn name(&self) -> &'static str {
        "hue-synthesis"
    }

    fn select_surface(&self, colors: &[ExtractedColor], tone: Tone) -> SurfaceChoice {
        let (lightness, saturation) = if tone.is_dark() {
            (DARK_SURFACE_LIGHTNESS, DARK_SYNTH_SATURATION)
        } else {
            (LIGHT_SURFACE_LIGHTNESS, LIGHT_SYNTH_SATURATION)
        };
        let color = match Self::dominant_hue(colors) {
            Some(hue) => Hsl::new(hue, saturation, lightness),
            None => Hsl::new(0.0, 0.0, lightness),
        };
        SurfaceChoice {
            color: color.to_rgb(),
            source: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Options & output
// ---------------------------------------------------------------------------

/// Named surface policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VariantMode {
    /// Prominent image color, saturation ≤ 35.
    #[default]
    Faithful,
    /// Prominent image color, saturation ≤ 20.
    Muted,
    /// Synthesized from the dominant hue.
    Atmospheric,
}

impl VariantMode {
    #[must_use]
    pub fn strategy(self) -> &'static dyn SurfaceStrategy {
        match self {
            Self::Faithful => &ProminentSurface::FAITHFUL,
            Self::Muted => &ProminentSurface::MUTED,
            Self::Atmospheric => &HueSynthesis,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Faithful => "faithful",
            Self::Muted => "muted",
            Self::Atmospheric => "atmospheric",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Faithful, Self::Muted, Self::Atmospheric]
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectionOptions {
    /// Forced tone; inferred from the most prominent color when `None`.
    pub tone: Option<Tone>,
    pub variant: VariantMode,
}

/// Where in the image each role came from. `None` for synthesized or
/// fallback colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleLocations {
    pub surface_base: Option<Location>,
    pub text_primary: Option<Location>,
    pub accent_primary: Option<Location>,
    pub accent_secondary: Option<Location>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionDebug {
    /// Text against surface.
    pub contrast_ratio: f64,
    pub primary_saturation: f64,
    pub secondary_hue_distance: f64,
    pub surface_strategy: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteSelection {
    /// Tone plus the four anchors; nothing else is set.
    pub roles: SemanticColorRoles,
    pub locations: RoleLocations,
    pub debug: SelectionDebug,
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Pick tone and anchor roles from a ranked palette.
///
/// # Errors
///
/// [`ThemeError::InvalidInput`] if `colors` is empty.
pub fn select_palette(colors: &[ExtractedColor], options: &SelectionOptions) -> Result<PaletteSelection> {
    select_palette_with(colors, options.tone, options.variant.strategy())
}

/// [`select_palette`] with an explicit surface strategy.
///
/// # Errors
///
/// [`ThemeError::InvalidInput`] if `colors` is empty.
pub fn select_palette_with(
    colors: &[ExtractedColor],
    tone: Option<Tone>,
    strategy: &dyn SurfaceStrategy,
) -> Result<PaletteSelection> {
    let Some(first) = colors.first() else {
        return Err(ThemeError::invalid("no colors to select a palette from"));
    };
    let _span = tracing::debug_span!("select_palette", candidates = colors.len(), strategy = strategy.name()).entered();

    let tone = tone.unwrap_or_else(|| Tone::from_lightness(first.hsl.l));
    let surface = strategy.select_surface(colors, tone);
    let surface_hsl = surface.color.to_hsl();

    // Text.
    let mut text: Option<(usize, f64)> = None;
    for (i, c) in colors.iter().enumerate() {
        let similar = hue_distance(c.hsl.h, surface_hsl.h) < TEXT_MIN_HUE_DISTANCE
            && (c.hsl.l - surface_hsl.l).abs() < TEXT_MIN_LIGHTNESS_DISTANCE;
        if similar {
            continue;
        }
        let ratio = contrast_ratio(c.color, surface.color);
        if ratio >= MIN_TEXT_CONTRAST && text.is_none_or(|(_, best)| ratio > best) {
            text = Some((i, ratio));
        }
    }
    let text_index = text.map(|(i, _)| i);
    let text_color = text_index.map_or(
        if tone.is_dark() { FALLBACK_TEXT_DARK } else { FALLBACK_TEXT_LIGHT },
        |i| colors[i].color,
    );

    let unused = |i: usize, c: &ExtractedColor| {
        Some(i) != surface.source
            && Some(i) != text_index
            && c.color != surface.color
            && c.color != text_color
    };

    // Accent primary: saturation plus harmony with the surface.
    let mut ranked: Vec<(usize, f64)> = colors
        .iter()
        .enumerate()
        .filter(|&(i, c)| c.hsl.s >= MIN_ACCENT_SATURATION && unused(i, c))
        .map(|(i, c)| (i, c.hsl.s + harmony_bonus(hue_distance(c.hsl.h, surface_hsl.h))))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let primary_index = ranked
        .first()
        .map(|&(i, _)| i)
        .or_else(|| colors.iter().enumerate().position(|(i, c)| unused(i, c)))
        .unwrap_or(0);
    let primary = &colors[primary_index];

    // Accent secondary: spread from the primary, else its complement.
    let mut secondary: Option<(usize, f64, f64)> = None;
    for &(i, _) in &ranked {
        if i == primary_index {
            continue;
        }
        let d = hue_distance(colors[i].hsl.h, primary.hsl.h);
        if d < MIN_ACCENT_HUE_DISTANCE {
            continue;
        }
        let score = d + harmony_bonus(d);
        if secondary.is_none_or(|(_, _, best)| score > best) {
            secondary = Some((i, d, score));
        }
    }
    let (secondary_color, secondary_location, secondary_distance) = match secondary {
        Some((i, d, _)) => (colors[i].color, Some(colors[i].location), d),
        None => {
            let p = primary.hsl;
            let synthesized = Hsl::new(p.h + 180.0, p.s * SYNTHESIZED_SATURATION_FACTOR, p.l).to_rgb();
            tracing::debug!(color = %synthesized, "synthesized complementary secondary accent");
            (synthesized, None, 180.0)
        }
    };

    let selection = PaletteSelection {
        roles: SemanticColorRoles::new(tone, surface.color, text_color, primary.color, secondary_color),
        locations: RoleLocations {
            surface_base: surface.source.map(|i| colors[i].location),
            text_primary: text_index.map(|i| colors[i].location),
            accent_primary: Some(primary.location),
            accent_secondary: secondary_location,
        },
        debug: SelectionDebug {
            contrast_ratio: contrast_ratio(text_color, surface.color),
            primary_saturation: primary.hsl.s,
            secondary_hue_distance: secondary_distance,
            surface_strategy: strategy.name().to_owned(),
        },
    };

    tracing::debug!(
        tone = tone.name(),
        surface = %selection.roles.surface_base,
        text = %selection.roles.text_primary,
        accent_primary = %selection.roles.accent_primary,
        accent_secondary = %selection.roles.accent_secondary,
        "selected palette roles"
    );
    Ok(selection)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
