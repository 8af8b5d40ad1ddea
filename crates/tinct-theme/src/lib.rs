// SPDX-License-Identifier: MIT

//! # tinct-theme: contrast-safe themes from four colors
//!
//! Expands a tone plus four anchor colors (surface, text, two accents) into
//! a complete theme: every derived UI role, a neutral ramp and a table of
//! named color parameters, with minimum legibility contrast enforced on the
//! way. The anchors can be typed in or picked from an image.
//!
//! # Architecture
//!
//! ```text
//! PixelBuffer
//!     │
//!     ▼
//! extract.rs:  median-cut clustering + outlier rescue → ranked colors
//!     │
//!     ▼
//! select.rs:   surface strategy, text, accents → SemanticColorRoles
//!     │
//!     ▼
//! roles.rs:    derive missing roles (highlight, border, control, …)
//!     │
//!     ▼
//! contrast.rs: validate requirement pairs, bisect lightness to fix them
//!     │
//!     ├──▶ scale.rs:   n0..n12 neutral ramp + half stops n9b, n11b
//!     │
//!     ▼
//! params.rs:   evaluate the rule table (rules.rs) → ParameterTable
//! ```
//!
//! `blend.rs` contributes the tone-dependent numeric factors and meter
//! gradients; `config.rs` bundles the tables a [`ThemeGenerator`] reads.
//!
//! # Color Space
//!
//! Roles are stored as 8-bit sRGB and manipulated in HSL. Every stage
//! rounds back to bytes, so contrast is always checked on the colors that
//! are actually emitted.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Pixel counts and channel sums are small enough to convert losslessly.
#![allow(clippy::cast_precision_loss)]
// Lightness/saturation percentages are clamped before narrowing.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Hue/lightness/saturation variable names are inherently similar.
#![allow(clippy::similar_names)]
// The rule table is one long literal.
#![allow(clippy::too_many_lines)]

pub mod blend;
pub mod builtin;
pub mod config;
pub mod contrast;
pub mod error;
pub mod extract;
pub mod params;
pub mod roles;
mod rules;
pub mod scale;
pub mod select;

pub use blend::{BlendFactors, VuMeter};
pub use builtin::{builtin_names, builtin_roles};
pub use config::ThemeConfig;
pub use contrast::{
    AdjustSide, ContrastCorrection, ContrastIssue, ContrastReport, ContrastRequirement, adjust_for_contrast,
    correct_contrast, validate_contrast,
};
pub use error::{Result, ThemeError};
pub use extract::{ExtractedColor, ExtractionOptions, PixelBuffer, extract_colors};
pub use params::{ParameterRule, ParameterTable, RuleTable, generate_parameters};
pub use roles::{ContrastLevel, ResolvedColorRoles, Role, SemanticColorRoles, Tone, resolve_roles};
pub use scale::{NeutralScale, Stop, build_neutral_scale};
pub use select::{PaletteSelection, SelectionOptions, SurfaceStrategy, VariantMode, select_palette};

/// Everything generated for one theme.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ThemeData {
    /// Resolved and contrast-corrected roles.
    pub roles: ResolvedColorRoles,
    pub neutral_scale: NeutralScale,
    pub parameters: ParameterTable,
    pub vu_meters: Vec<(String, VuMeter)>,
    pub blend_factors: BlendFactors,
    /// What the corrector changed and what it could not fix.
    pub contrast: ContrastCorrection,
}

/// Runs the role → theme pipeline against one configuration.
#[derive(Debug, Clone, Default)]
pub struct ThemeGenerator {
    config: ThemeConfig,
}

impl ThemeGenerator {
    #[must_use]
    pub const fn new(config: ThemeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Resolve, correct and expand `input` into a full theme.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidInput`] if the configuration holds an
    /// impossible contrast requirement; [`ThemeError::UnsatisfiableContrast`]
    /// if `strict_contrast` is set and a requirement cannot be met.
    pub fn generate(&self, input: &SemanticColorRoles) -> Result<ThemeData> {
        generate_with(&self.config, input)
    }
}

/// [`ThemeGenerator::generate`] with the builtin configuration.
///
/// # Errors
///
/// See [`ThemeGenerator::generate`]. The builtin configuration is not
/// strict, so in practice this only fails on malformed input.
pub fn generate_theme(input: &SemanticColorRoles) -> Result<ThemeData> {
    generate_with(ThemeConfig::builtin(), input)
}

fn generate_with(config: &ThemeConfig, input: &SemanticColorRoles) -> Result<ThemeData> {
    let _span = tracing::debug_span!("generate_theme", tone = input.tone.name()).entered();
    config.validate()?;

    let resolved = resolve_roles(input);
    let contrast = correct_contrast(&resolved, &config.requirements);
    if config.strict_contrast && !contrast.is_satisfied() {
        return Err(ThemeError::UnsatisfiableContrast {
            issues: contrast.unresolved,
        });
    }

    let roles = contrast.roles;
    let neutral_scale = build_neutral_scale(&roles);
    let parameters = generate_parameters(&roles, &neutral_scale, &config.rules);

    tracing::debug!(
        adjustments = contrast.adjustments.len(),
        unresolved = contrast.unresolved.len(),
        parameters = parameters.len(),
        "generated theme"
    );

    Ok(ThemeData {
        roles,
        neutral_scale,
        parameters,
        vu_meters: config.vu_meters.clone(),
        blend_factors: config.blend_factors(roles.tone),
        contrast,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::DEFAULT_REQUIREMENTS;
    use pretty_assertions::assert_eq;
    use tinct_color::Rgb;

    #[test]
    fn every_preset_generates_a_passing_theme() {
        for name in builtin_names() {
            let theme = generate_theme(&builtin_roles(name).unwrap()).unwrap();
            assert!(theme.contrast.is_satisfied(), "{name}: {}", theme.contrast.report());
            assert!(validate_contrast(&theme.roles, DEFAULT_REQUIREMENTS).is_empty(), "{name}");
            assert_eq!(theme.parameters.len(), 236, "{name}");
            assert!(theme.parameters.omitted.is_empty(), "{name}");
        }
    }

    #[test]
    fn reference_dark_neutral_needs_one_fix() {
        let theme = generate_theme(&builtin_roles("dark-neutral").unwrap()).unwrap();
        assert_eq!(theme.contrast.adjustments.len(), 1);
        assert_eq!(theme.contrast.adjustments[0].role, Role::TextSecondary);
        assert_eq!(theme.blend_factors, BlendFactors::DARK);
        assert_eq!(theme.parameters.get_hex("ControlForeground").unwrap(), "#b5b5b5");
        assert_eq!(theme.parameters.get_hex("SelectionForeground").unwrap(), "#070707");
    }

    #[test]
    fn parameters_use_corrected_roles() {
        let theme = generate_theme(&builtin_roles("dark-neutral").unwrap()).unwrap();
        let secondary = theme.roles.text_secondary;
        assert_ne!(secondary, Rgb::from_u32(0x75_7575));
        assert_eq!(theme.parameters.get("TextSecondary").map(|c| c.rgb), Some(secondary));
    }

    #[test]
    fn light_theme_gets_light_factors() {
        let theme = generate_theme(&builtin_roles("light-high-saturation").unwrap()).unwrap();
        assert_eq!(theme.blend_factors, BlendFactors::LIGHT);
        assert_eq!(theme.roles.tone, Tone::Light);
        assert_eq!(theme.vu_meters.len(), blend::VU_METERS.len());
    }

    #[test]
    fn generation_is_deterministic() {
        let input = builtin_roles("multi-color-harmony").unwrap();
        assert_eq!(generate_theme(&input).unwrap(), generate_theme(&input).unwrap());
    }

    #[test]
    fn custom_rule_table_is_honored() {
        let rules = RuleTable::new(vec![params::RuleEntry {
            name: "Desktop".into(),
            rule: ParameterRule::Scale { source: Stop::N0 },
        }]);
        let generator = ThemeGenerator::new(ThemeConfig::default().with_rules(rules));
        let theme = generator.generate(&builtin_roles("steel-blue").unwrap()).unwrap();
        assert_eq!(theme.parameters.len(), 1);
        assert_eq!(theme.parameters.get("Desktop").map(|c| c.rgb), Some(theme.neutral_scale.get(Stop::N0)));
    }

    #[test]
    fn strict_mode_surfaces_unsatisfiable_contrast() {
        let requirement = ContrastRequirement {
            foreground: Role::AccentPrimary,
            background: Role::SurfaceBase,
            min_ratio: 20.0,
            adjust: AdjustSide::Foreground,
            label: "unreachable".into(),
        };
        let config = ThemeConfig::default()
            .with_requirements(vec![requirement])
            .with_strict_contrast(true);
        let input = builtin_roles("steel-blue").unwrap();

        let err = ThemeGenerator::new(config.clone()).generate(&input).unwrap_err();
        assert!(matches!(err, ThemeError::UnsatisfiableContrast { ref issues } if issues.len() == 1));

        let lenient = ThemeGenerator::new(config.with_strict_contrast(false)).generate(&input).unwrap();
        assert_eq!(lenient.contrast.unresolved.len(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let requirement = ContrastRequirement {
            foreground: Role::TextPrimary,
            background: Role::SurfaceBase,
            min_ratio: f64::NAN,
            adjust: AdjustSide::Foreground,
            label: "nan".into(),
        };
        let generator = ThemeGenerator::new(ThemeConfig::default().with_requirements(vec![requirement]));
        let err = generator.generate(&builtin_roles("steel-blue").unwrap()).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidInput { .. }));
    }
}
