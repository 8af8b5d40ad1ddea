// SPDX-License-Identifier: MIT

//! Everything the generator reads besides the input roles.

use std::sync::LazyLock;

use crate::blend::{BlendFactors, VuMeter, default_vu_meters};
use crate::contrast::{ContrastRequirement, default_requirements};
use crate::error::{Result, ThemeError};
use crate::params::RuleTable;
use crate::roles::Tone;

/// WCAG ratios live in `[1, 21]`.
const MAX_CONTRAST_RATIO: f64 = 21.0;

/// Tables and policies for [`crate::ThemeGenerator`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThemeConfig {
    pub rules: RuleTable,
    pub requirements: Vec<ContrastRequirement>,
    pub blend_dark: BlendFactors,
    pub blend_light: BlendFactors,
    pub vu_meters: Vec<(String, VuMeter)>,
    /// Fail generation when a requirement cannot be met instead of
    /// reporting it in the output.
    pub strict_contrast: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            rules: RuleTable::builtin(),
            requirements: default_requirements(),
            blend_dark: BlendFactors::DARK,
            blend_light: BlendFactors::LIGHT,
            vu_meters: default_vu_meters(),
            strict_contrast: false,
        }
    }
}

static BUILTIN: LazyLock<ThemeConfig> = LazyLock::new(ThemeConfig::default);

impl ThemeConfig {
    /// The shared default configuration.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    #[must_use]
    pub const fn blend_factors(&self, tone: Tone) -> BlendFactors {
        match tone {
            Tone::Dark => self.blend_dark,
            Tone::Light => self.blend_light,
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_requirements(mut self, requirements: Vec<ContrastRequirement>) -> Self {
        self.requirements = requirements;
        self
    }

    #[must_use]
    pub const fn with_strict_contrast(mut self, strict: bool) -> Self {
        self.strict_contrast = strict;
        self
    }

    /// Check that every requirement is a satisfiable WCAG ratio.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidInput`] naming the first bad requirement.
    pub fn validate(&self) -> Result<()> {
        for req in &self.requirements {
            if !req.min_ratio.is_finite() || !(1.0..=MAX_CONTRAST_RATIO).contains(&req.min_ratio) {
                return Err(ThemeError::invalid(format!(
                    "contrast requirement {:?} has ratio {} outside 1..=21",
                    req.label, req.min_ratio
                )));
            }
        }
        Ok(())
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidInput`] for malformed JSON or an invalid
    /// requirement.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| ThemeError::invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::AdjustSide;
    use crate::roles::Role;

    #[test]
    fn builtin_is_default() {
        assert_eq!(ThemeConfig::builtin(), &ThemeConfig::default());
        assert_eq!(ThemeConfig::builtin().rules.len(), 236);
        assert_eq!(ThemeConfig::builtin().requirements.len(), 11);
        assert!(ThemeConfig::builtin().validate().is_ok());
    }

    #[test]
    fn blend_factors_follow_tone() {
        let config = ThemeConfig::default();
        assert_eq!(config.blend_factors(Tone::Light), BlendFactors::LIGHT);
        assert_eq!(config.blend_factors(Tone::Dark), BlendFactors::DARK);
    }

    #[test]
    fn out_of_range_ratio_is_rejected() {
        let config = ThemeConfig::default().with_requirements(vec![ContrastRequirement {
            foreground: Role::TextPrimary,
            background: Role::SurfaceBase,
            min_ratio: 25.0,
            adjust: AdjustSide::Foreground,
            label: "impossible".into(),
        }]);
        assert!(matches!(config.validate(), Err(ThemeError::InvalidInput { .. })));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_overrides_merge_with_defaults() {
        let config = ThemeConfig::from_json(r#"{"strict_contrast": true}"#).unwrap();
        assert!(config.strict_contrast);
        assert_eq!(config.rules.len(), 236);
    }
}
