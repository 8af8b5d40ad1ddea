// SPDX-License-Identifier: MIT

//! Semantic color roles: the minimal input and its fully resolved form.
//!
//! A theme is described by a tone and four anchors (surface, text, two
//! accents). Every other role is derived from those unless the caller
//! overrides it. Resolution only fills gaps: a role the caller supplied is
//! passed through byte-for-byte, so resolving an already resolved set is
//! the identity.

use tinct_color::{Hsl, Rgb};

use crate::error::Result;

// ---------------------------------------------------------------------------
// Tone & contrast level
// ---------------------------------------------------------------------------

/// Overall brightness family of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tone {
    Dark,
    Light,
}

impl Tone {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Dark if `lightness` (HSL percent) is below 50.
    #[must_use]
    pub fn from_lightness(lightness: f64) -> Self {
        if lightness < 50.0 { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse `dark` / `light` (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// How far derived surfaces are pushed away from `surface_base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ContrastLevel {
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl ContrastLevel {
    /// Scale applied to every lightness offset during resolution.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 1.4,
            Self::High => 1.8,
            Self::VeryHigh => 2.2,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very-high",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|c| c.name() == name.to_ascii_lowercase()).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High, Self::VeryHigh]
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A named, purpose-bound color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    SurfaceBase,
    SurfaceHighlight,
    SurfaceBorder,
    DetailBg,
    ControlBg,
    TextPrimary,
    TextSecondary,
    AccentPrimary,
    AccentSecondary,
    SelectionBg,
    SelectionFg,
    /// Extension: falls back to `surface_highlight` when absent.
    SurfaceSecondary,
    /// Extension: falls back to `accent_secondary` when absent.
    AccentTertiary,
}

impl Role {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SurfaceBase => "surface_base",
            Self::SurfaceHighlight => "surface_highlight",
            Self::SurfaceBorder => "surface_border",
            Self::DetailBg => "detail_bg",
            Self::ControlBg => "control_bg",
            Self::TextPrimary => "text_primary",
            Self::TextSecondary => "text_secondary",
            Self::AccentPrimary => "accent_primary",
            Self::AccentSecondary => "accent_secondary",
            Self::SelectionBg => "selection_bg",
            Self::SelectionFg => "selection_fg",
            Self::SurfaceSecondary => "surface_secondary",
            Self::AccentTertiary => "accent_tertiary",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|r| r.name() == name).copied()
    }

    /// Every role, core roles first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::SurfaceBase, Self::SurfaceHighlight, Self::SurfaceBorder,
            Self::DetailBg, Self::ControlBg, Self::TextPrimary,
            Self::TextSecondary, Self::AccentPrimary, Self::AccentSecondary,
            Self::SelectionBg, Self::SelectionFg, Self::SurfaceSecondary,
            Self::AccentTertiary,
        ]
    }

    /// The eleven roles every resolved theme has.
    #[must_use]
    pub fn core() -> &'static [Self] {
        &Self::all()[..11]
    }
}

// ---------------------------------------------------------------------------
// SemanticColorRoles (input)
// ---------------------------------------------------------------------------

/// The minimal role set a theme is generated from.
///
/// `tone` and the four anchors are mandatory; every `Option` is an override
/// that suppresses the corresponding derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SemanticColorRoles {
    pub tone: Tone,
    pub surface_base: Rgb,
    pub text_primary: Rgb,
    pub accent_primary: Rgb,
    pub accent_secondary: Rgb,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub surface_highlight: Option<Rgb>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub surface_border: Option<Rgb>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub detail_bg: Option<Rgb>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub control_bg: Option<Rgb>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub text_secondary: Option<Rgb>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub selection_bg: Option<Rgb>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub selection_fg: Option<Rgb>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub contrast_level: Option<ContrastLevel>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub surface_secondary: Option<Rgb>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub accent_tertiary: Option<Rgb>,
}

impl SemanticColorRoles {
    /// The four mandatory anchors, nothing overridden.
    #[must_use]
    pub const fn new(
        tone: Tone,
        surface_base: Rgb,
        text_primary: Rgb,
        accent_primary: Rgb,
        accent_secondary: Rgb,
    ) -> Self {
        Self {
            tone,
            surface_base,
            text_primary,
            accent_primary,
            accent_secondary,
            surface_highlight: None,
            surface_border: None,
            detail_bg: None,
            control_bg: None,
            text_secondary: None,
            selection_bg: None,
            selection_fg: None,
            contrast_level: None,
            surface_secondary: None,
            accent_tertiary: None,
        }
    }

    /// Parse the four anchors from hex strings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ThemeError::Color`] for a malformed hex string.
    pub fn from_hex(
        tone: Tone,
        surface_base: &str,
        text_primary: &str,
        accent_primary: &str,
        accent_secondary: &str,
    ) -> Result<Self> {
        Ok(Self::new(
            tone,
            Rgb::hex(surface_base)?,
            Rgb::hex(text_primary)?,
            Rgb::hex(accent_primary)?,
            Rgb::hex(accent_secondary)?,
        ))
    }

    /// Override a single role. Anchors are replaced, derivable roles become
    /// fixed.
    #[must_use]
    pub const fn with_role(mut self, role: Role, color: Rgb) -> Self {
        match role {
            Role::SurfaceBase => self.surface_base = color,
            Role::TextPrimary => self.text_primary = color,
            Role::AccentPrimary => self.accent_primary = color,
            Role::AccentSecondary => self.accent_secondary = color,
            Role::SurfaceHighlight => self.surface_highlight = Some(color),
            Role::SurfaceBorder => self.surface_border = Some(color),
            Role::DetailBg => self.detail_bg = Some(color),
            Role::ControlBg => self.control_bg = Some(color),
            Role::TextSecondary => self.text_secondary = Some(color),
            Role::SelectionBg => self.selection_bg = Some(color),
            Role::SelectionFg => self.selection_fg = Some(color),
            Role::SurfaceSecondary => self.surface_secondary = Some(color),
            Role::AccentTertiary => self.accent_tertiary = Some(color),
        }
        self
    }

    #[must_use]
    pub const fn with_contrast_level(mut self, level: ContrastLevel) -> Self {
        self.contrast_level = Some(level);
        self
    }
}

impl From<ResolvedColorRoles> for SemanticColorRoles {
    /// Every derivable role becomes an override, so re-resolving is exact.
    fn from(r: ResolvedColorRoles) -> Self {
        Self {
            tone: r.tone,
            surface_base: r.surface_base,
            text_primary: r.text_primary,
            accent_primary: r.accent_primary,
            accent_secondary: r.accent_secondary,
            surface_highlight: Some(r.surface_highlight),
            surface_border: Some(r.surface_border),
            detail_bg: Some(r.detail_bg),
            control_bg: Some(r.control_bg),
            text_secondary: Some(r.text_secondary),
            selection_bg: Some(r.selection_bg),
            selection_fg: Some(r.selection_fg),
            contrast_level: None,
            surface_secondary: r.surface_secondary,
            accent_tertiary: r.accent_tertiary,
        }
    }
}

// ---------------------------------------------------------------------------
// ResolvedColorRoles (output)
// ---------------------------------------------------------------------------

/// Every role populated. Never mutated in place; see [`Self::with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedColorRoles {
    pub tone: Tone,
    pub surface_base: Rgb,
    pub surface_highlight: Rgb,
    pub surface_border: Rgb,
    pub detail_bg: Rgb,
    pub control_bg: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub accent_primary: Rgb,
    pub accent_secondary: Rgb,
    pub selection_bg: Rgb,
    pub selection_fg: Rgb,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub surface_secondary: Option<Rgb>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub accent_tertiary: Option<Rgb>,
}

impl ResolvedColorRoles {
    /// Look up a role. Extension roles fall back to their nearest core role.
    #[must_use]
    pub fn get(&self, role: Role) -> Rgb {
        match role {
            Role::SurfaceBase => self.surface_base,
            Role::SurfaceHighlight => self.surface_highlight,
            Role::SurfaceBorder => self.surface_border,
            Role::DetailBg => self.detail_bg,
            Role::ControlBg => self.control_bg,
            Role::TextPrimary => self.text_primary,
            Role::TextSecondary => self.text_secondary,
            Role::AccentPrimary => self.accent_primary,
            Role::AccentSecondary => self.accent_secondary,
            Role::SelectionBg => self.selection_bg,
            Role::SelectionFg => self.selection_fg,
            Role::SurfaceSecondary => self.surface_secondary.unwrap_or(self.surface_highlight),
            Role::AccentTertiary => self.accent_tertiary.unwrap_or(self.accent_secondary),
        }
    }

    /// A copy with one role replaced.
    #[must_use]
    pub const fn with(mut self, role: Role, color: Rgb) -> Self {
        match role {
            Role::SurfaceBase => self.surface_base = color,
            Role::SurfaceHighlight => self.surface_highlight = color,
            Role::SurfaceBorder => self.surface_border = color,
            Role::DetailBg => self.detail_bg = color,
            Role::ControlBg => self.control_bg = color,
            Role::TextPrimary => self.text_primary = color,
            Role::TextSecondary => self.text_secondary = color,
            Role::AccentPrimary => self.accent_primary = color,
            Role::AccentSecondary => self.accent_secondary = color,
            Role::SelectionBg => self.selection_bg = color,
            Role::SelectionFg => self.selection_fg = color,
            Role::SurfaceSecondary => self.surface_secondary = Some(color),
            Role::AccentTertiary => self.accent_tertiary = Some(color),
        }
        self
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.tone.is_dark()
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Dark-tone surface highlight must sit at least this far above the base.
const MIN_HIGHLIGHT_SPREAD: f64 = 12.0;

/// One 8-bit step moves HSL lightness by at most ~0.196, so aiming this far
/// past the minimum keeps the rounded result above it.
const SPREAD_ROUNDING_MARGIN: f64 = 0.25;

const DARK_HIGHLIGHT_CEILING: f64 = 95.0;
const DARK_CONTROL_FLOOR: f64 = 5.0;
/// Below a surface lightness of 7.5 the floor follows the surface down.
const DARK_CONTROL_FLOOR_FRACTION: f64 = 2.0 / 3.0;
const DARK_BORDER_MIN_FRACTION: f64 = 0.5;
const LIGHT_CONTROL_CEILING: f64 = 95.0;

const SELECTION_MAX_SATURATION: f64 = 40.0;

/// Per-tone base offsets (lightness points at contrast multiplier 1.0).
struct Offsets {
    highlight: f64,
    border: f64,
    control: f64,
    selection_lightness: f64,
    selection_fg: Rgb,
}

const DARK: Offsets = Offsets {
    highlight: 6.0,
    border: 4.0,
    control: 9.0,
    selection_lightness: 78.0,
    selection_fg: Rgb::from_u32(0x07_0707),
};

const LIGHT: Offsets = Offsets {
    highlight: 9.0,
    border: 5.0,
    control: 16.0,
    selection_lightness: 88.0,
    selection_fg: Rgb::from_u32(0x12_1212),
};

/// Expand a minimal role set into every role.
///
/// Only missing roles are derived; supplied ones pass through unchanged.
#[must_use]
pub fn resolve_roles(input: &SemanticColorRoles) -> ResolvedColorRoles {
    let is_dark = input.tone.is_dark();
    let offsets = if is_dark { &DARK } else { &LIGHT };
    let m = input.contrast_level.unwrap_or_default().multiplier();
    let base = input.surface_base.to_hsl();

    let surface_highlight = input.surface_highlight.unwrap_or_else(|| {
        let l = if is_dark {
            let target = offsets
                .highlight
                .mul_add(m, base.l)
                .max(base.l + MIN_HIGHLIGHT_SPREAD + SPREAD_ROUNDING_MARGIN);
            target.min(DARK_HIGHLIGHT_CEILING)
        } else {
            offsets.highlight.mul_add(m, base.l).min(100.0)
        };
        base.with_lightness(l).to_rgb()
    });

    let detail_bg = input
        .detail_bg
        .unwrap_or_else(|| input.surface_base.lerp(surface_highlight, 0.5));

    let control_bg = input.control_bg.unwrap_or_else(|| {
        let l = if is_dark {
            let floor = DARK_CONTROL_FLOOR.min(base.l * DARK_CONTROL_FLOOR_FRACTION);
            (-offsets.control).mul_add(m, base.l).max(floor)
        } else {
            offsets.control.mul_add(m, base.l).min(LIGHT_CONTROL_CEILING)
        };
        base.with_lightness(l).to_rgb()
    });

    let surface_border = input.surface_border.unwrap_or_else(|| {
        let mut l = (-offsets.border).mul_add(m, base.l);
        let control = control_bg.lightness();
        if is_dark && control < base.l {
            // n3 < n4 < n5 < n6: the border keeps to the upper half of the
            // control..surface gap, n4 sits in the lower half.
            l = l.max((base.l - control).mul_add(DARK_BORDER_MIN_FRACTION, control));
        }
        base.with_lightness(l).to_rgb()
    });

    let text_secondary = input
        .text_secondary
        .unwrap_or_else(|| input.surface_base.lerp(input.text_primary, 0.5));

    let selection_bg = input.selection_bg.unwrap_or_else(|| {
        let accent = input.accent_secondary.to_hsl();
        Hsl::new(
            accent.h,
            accent.s.min(SELECTION_MAX_SATURATION),
            offsets.selection_lightness,
        )
        .to_rgb()
    });

    let selection_fg = input.selection_fg.unwrap_or(offsets.selection_fg);

    let resolved = ResolvedColorRoles {
        tone: input.tone,
        surface_base: input.surface_base,
        surface_highlight,
        surface_border,
        detail_bg,
        control_bg,
        text_primary: input.text_primary,
        text_secondary,
        accent_primary: input.accent_primary,
        accent_secondary: input.accent_secondary,
        selection_bg,
        selection_fg,
        surface_secondary: input.surface_secondary,
        accent_tertiary: input.accent_tertiary,
    };

    tracing::debug!(
        tone = input.tone.name(),
        multiplier = m,
        surface_highlight = %resolved.surface_highlight,
        control_bg = %resolved.control_bg,
        "resolved semantic roles"
    );

    resolved
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn steel_blue() -> SemanticColorRoles {
        SemanticColorRoles::from_hex(Tone::Dark, "#2D3440", "#C8D0DC", "#E8943A", "#3AB5C8").unwrap()
    }

    fn light_rose() -> SemanticColorRoles {
        SemanticColorRoles::from_hex(Tone::Light, "#FFE0E0", "#1A1A1A", "#D32F2F", "#1976D2").unwrap()
    }

    #[test]
    fn dark_highlight_spread_at_least_twelve() {
        let input = steel_blue();
        let r = resolve_roles(&input);
        let spread = r.surface_highlight.lightness() - input.surface_base.lightness();
        assert!(spread >= 12.0, "spread {spread}");
    }

    #[test]
    fn dark_control_is_darker_than_surface() {
        let r = resolve_roles(&steel_blue());
        assert!(r.control_bg.lightness() < r.surface_base.lightness());
    }

    #[test]
    fn dark_highlight_spread_survives_every_level() {
        for &level in ContrastLevel::all() {
            for hex in ["#141414", "#2d3440", "#8b2020", "#3d4f5f"] {
                let input = SemanticColorRoles::from_hex(Tone::Dark, hex, "#d0d0d0", "#ff9800", "#00bcd4")
                    .unwrap()
                    .with_contrast_level(level);
                let r = resolve_roles(&input);
                let spread = r.surface_highlight.lightness() - input.surface_base.lightness();
                assert!(spread >= 12.0, "{hex} at {level:?}: spread {spread}");
            }
        }
    }

    #[test]
    fn dark_highlight_respects_ceiling() {
        let input = SemanticColorRoles::from_hex(Tone::Dark, "#f0f0f0", "#101010", "#ff9800", "#00bcd4").unwrap();
        let r = resolve_roles(&input);
        assert!(r.surface_highlight.lightness() <= 95.2);
    }

    #[test]
    fn dark_control_floor() {
        let input = SemanticColorRoles::from_hex(Tone::Dark, "#141414", "#d0d0d0", "#ff9800", "#00bcd4").unwrap();
        let r = resolve_roles(&input);
        assert!(r.control_bg.lightness() >= 4.8, "control {}", r.control_bg.lightness());
    }

    #[test]
    fn dark_structural_roles_stay_ordered() {
        for &level in ContrastLevel::all() {
            for hex in ["#0d0d0d", "#141414", "#1a1020", "#2d3440"] {
                let input = SemanticColorRoles::from_hex(Tone::Dark, hex, "#d0d0d0", "#ff9800", "#00bcd4")
                    .unwrap()
                    .with_contrast_level(level);
                let r = resolve_roles(&input);
                let (control, border, surface) = (
                    r.control_bg.lightness(),
                    r.surface_border.lightness(),
                    r.surface_base.lightness(),
                );
                assert!(control < border && border < surface, "{hex} at {level:?}: {control} {border} {surface}");
            }
        }
    }

    #[test]
    fn light_control_is_lighter_than_surface() {
        let input = SemanticColorRoles::from_hex(Tone::Light, "#a5a5a5", "#121212", "#ff6d00", "#0086c2").unwrap();
        let r = resolve_roles(&input);
        assert!(r.control_bg.lightness() > r.surface_base.lightness());
        assert!(r.surface_border.lightness() < r.surface_base.lightness());
    }

    #[test]
    fn light_highlight_clamps_at_white() {
        let r = resolve_roles(&light_rose());
        assert!(r.surface_highlight.lightness() <= 100.0);
        assert!(r.surface_highlight.lightness() >= r.surface_base.lightness());
    }

    #[test]
    fn higher_contrast_level_spreads_further() {
        let low = resolve_roles(&steel_blue().with_contrast_level(ContrastLevel::Low));
        let high = resolve_roles(&steel_blue().with_contrast_level(ContrastLevel::VeryHigh));
        assert!(high.control_bg.lightness() < low.control_bg.lightness());
        assert!(high.surface_border.lightness() < low.surface_border.lightness());
    }

    #[test]
    fn selection_roles_by_tone() {
        let dark = resolve_roles(&steel_blue());
        assert_eq!(dark.selection_fg, Rgb::from_u32(0x07_0707));
        assert!((dark.selection_bg.lightness() - 78.0).abs() < 0.5);
        assert!(dark.selection_bg.saturation() <= 40.5);

        let light = resolve_roles(&light_rose());
        assert_eq!(light.selection_fg, Rgb::from_u32(0x12_1212));
        assert!((light.selection_bg.lightness() - 88.0).abs() < 0.5);
    }

    #[test]
    fn midpoints_sit_between_their_endpoints() {
        let r = resolve_roles(&steel_blue());
        let (lo, hi) = (r.surface_base.lightness(), r.text_primary.lightness());
        let mid = r.text_secondary.lightness();
        assert!(mid > lo && mid < hi);
        let d = r.detail_bg.lightness();
        assert!(d > lo && d < r.surface_highlight.lightness());
    }

    #[test]
    fn supplied_roles_pass_through() {
        let pinned = Rgb::from_u32(0x12_3456);
        let r = resolve_roles(&steel_blue().with_role(Role::ControlBg, pinned));
        assert_eq!(r.control_bg, pinned);
    }

    #[test]
    fn resolving_resolved_roles_is_identity() {
        let once = resolve_roles(&steel_blue());
        let twice = resolve_roles(&SemanticColorRoles::from(once));
        assert_eq!(once, twice);
    }

    #[test]
    fn extension_roles_fall_back() {
        let r = resolve_roles(&steel_blue());
        assert_eq!(r.get(Role::SurfaceSecondary), r.surface_highlight);
        assert_eq!(r.get(Role::AccentTertiary), r.accent_secondary);

        let purple = Rgb::from_u32(0x9c_27b0);
        let r = resolve_roles(&steel_blue().with_role(Role::AccentTertiary, purple));
        assert_eq!(r.get(Role::AccentTertiary), purple);
    }

    #[test]
    fn with_returns_new_value() {
        let r = resolve_roles(&steel_blue());
        let changed = r.with(Role::TextPrimary, Rgb::WHITE);
        assert_eq!(changed.text_primary, Rgb::WHITE);
        assert_ne!(r.text_primary, Rgb::WHITE);
    }

    #[test]
    fn role_names_roundtrip() {
        for &role in Role::all() {
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
        assert_eq!(Role::core().len(), 11);
        assert_eq!(Role::from_name("nope"), None);
    }

    #[test]
    fn tone_and_level_names() {
        assert_eq!(Tone::from_name("DARK"), Some(Tone::Dark));
        assert_eq!(ContrastLevel::from_name("very-high"), Some(ContrastLevel::VeryHigh));
        assert_eq!(ContrastLevel::default().multiplier(), 1.4);
    }
}
