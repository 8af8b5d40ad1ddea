// SPDX-License-Identifier: MIT

//! WCAG contrast validation and automatic correction for resolved roles.
//!
//! Every check runs against the exact 8-bit colors the theme will ship
//! with. Correction only ever moves HSL lightness (hue and saturation are
//! preserved) and only on the side each requirement designates:
//!
//! - text, accents and selection foregrounds are adjusted as foregrounds
//! - `control_bg` over `accent_primary` adjusts the background (icons
//!   drawn in `control_bg` sit on an accent-colored button)
//!
//! Because each bisection step tests the rounded candidate color, a pair
//! reported as fixed really passes; there is no numeric epsilon on the
//! guarantee.

use std::borrow::Cow;
use std::fmt;

use tinct_color::{Rgb, contrast_ratio, relative_luminance};

use crate::error::{Result, ThemeError};
use crate::roles::{ResolvedColorRoles, Role};

/// Luminance at which white and black offer equal contrast. Counterparts
/// at or below it are read against a lightened color, above it against a
/// darkened one.
const LUMINANCE_PIVOT: f64 = 0.1791;

const BISECTION_STEPS: usize = 20;

/// Later fixes can break earlier pairs (e.g. darkening `control_bg` for an
/// icon); a few passes settle the interactions.
const MAX_PASSES: usize = 3;

// ---------------------------------------------------------------------------
// Requirements
// ---------------------------------------------------------------------------

/// Which color of a pair the corrector is allowed to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AdjustSide {
    Foreground,
    Background,
}

/// A minimum contrast between two roles.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContrastRequirement {
    pub foreground: Role,
    pub background: Role,
    pub min_ratio: f64,
    pub adjust: AdjustSide,
    pub label: Cow<'static, str>,
}

impl ContrastRequirement {
    const fn builtin(
        foreground: Role,
        background: Role,
        min_ratio: f64,
        adjust: AdjustSide,
        label: &'static str,
    ) -> Self {
        Self {
            foreground,
            background,
            min_ratio,
            adjust,
            label: Cow::Borrowed(label),
        }
    }

    /// The current ratio of this pair in `roles`.
    #[must_use]
    pub fn ratio(&self, roles: &ResolvedColorRoles) -> f64 {
        contrast_ratio(roles.get(self.foreground), roles.get(self.background))
    }

    /// `(role to move, role it is measured against)`.
    #[must_use]
    pub const fn adjusted_pair(&self) -> (Role, Role) {
        match self.adjust {
            AdjustSide::Foreground => (self.foreground, self.background),
            AdjustSide::Background => (self.background, self.foreground),
        }
    }
}

use AdjustSide::{Background, Foreground};

/// The builtin legibility requirements.
pub const DEFAULT_REQUIREMENTS: &[ContrastRequirement] = &[
    ContrastRequirement::builtin(Role::TextPrimary, Role::SurfaceBase, 4.5, Foreground, "primary text on main background"),
    ContrastRequirement::builtin(Role::TextPrimary, Role::SurfaceHighlight, 4.5, Foreground, "primary text on selected track"),
    ContrastRequirement::builtin(Role::TextPrimary, Role::DetailBg, 4.5, Foreground, "primary text on detail view"),
    ContrastRequirement::builtin(Role::TextPrimary, Role::ControlBg, 4.5, Foreground, "primary text on input fields"),
    ContrastRequirement::builtin(Role::TextSecondary, Role::SurfaceBase, 3.0, Foreground, "secondary text on main background"),
    ContrastRequirement::builtin(Role::TextSecondary, Role::ControlBg, 3.0, Foreground, "secondary text on input fields"),
    ContrastRequirement::builtin(Role::SelectionFg, Role::SelectionBg, 4.5, Foreground, "selection text on selection highlight"),
    ContrastRequirement::builtin(Role::AccentPrimary, Role::SurfaceBase, 3.0, Foreground, "active toggle on main background"),
    ContrastRequirement::builtin(Role::AccentPrimary, Role::ControlBg, 3.0, Foreground, "active toggle on input fields"),
    ContrastRequirement::builtin(Role::AccentSecondary, Role::SurfaceBase, 3.0, Foreground, "secondary accent on main background"),
    ContrastRequirement::builtin(Role::ControlBg, Role::AccentPrimary, 3.0, Background, "icon on active button"),
];

/// Owned copy of [`DEFAULT_REQUIREMENTS`], for configuration.
#[must_use]
pub fn default_requirements() -> Vec<ContrastRequirement> {
    DEFAULT_REQUIREMENTS.to_vec()
}

// ---------------------------------------------------------------------------
// Issues & reports
// ---------------------------------------------------------------------------

/// A requirement that does not hold.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContrastIssue {
    pub label: Cow<'static, str>,
    pub foreground_role: Role,
    pub background_role: Role,
    pub foreground: Rgb,
    pub background: Rgb,
    pub ratio: f64,
    pub required: f64,
}

impl fmt::Display for ContrastIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FAIL: {} ({}) on {} ({}): ratio {:.2}:1, required {}:1 [{}]",
            self.foreground_role.name(),
            self.foreground,
            self.background_role.name(),
            self.background,
            self.ratio,
            self.required,
            self.label,
        )
    }
}

/// Human-readable summary of a validation run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContrastReport {
    pub issues: Vec<ContrastIssue>,
}

impl ContrastReport {
    #[must_use]
    pub const fn new(issues: Vec<ContrastIssue>) -> Self {
        Self { issues }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ContrastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return f.write_str("All contrast checks passed.");
        }
        write!(f, "{} contrast issue(s):", self.issues.len())?;
        for issue in &self.issues {
            write!(f, "\n{issue}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Every requirement in `requirements` that `roles` fails, in order.
#[must_use]
pub fn validate_contrast(
    roles: &ResolvedColorRoles,
    requirements: &[ContrastRequirement],
) -> Vec<ContrastIssue> {
    requirements
        .iter()
        .filter_map(|req| {
            let ratio = req.ratio(roles);
            (ratio < req.min_ratio).then(|| ContrastIssue {
                label: req.label.clone(),
                foreground_role: req.foreground,
                background_role: req.background,
                foreground: roles.get(req.foreground),
                background: roles.get(req.background),
                ratio,
                required: req.min_ratio,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Correction
// ---------------------------------------------------------------------------

/// One role change made by the corrector.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContrastAdjustment {
    pub role: Role,
    pub from: Rgb,
    pub to: Rgb,
    pub label: Cow<'static, str>,
}

/// Outcome of [`correct_contrast`]: the corrected roles, what changed, and
/// whatever could not be fixed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContrastCorrection {
    pub roles: ResolvedColorRoles,
    pub adjustments: Vec<ContrastAdjustment>,
    pub unresolved: Vec<ContrastIssue>,
}

impl ContrastCorrection {
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.unresolved.is_empty()
    }

    #[must_use]
    pub fn report(&self) -> ContrastReport {
        ContrastReport::new(self.unresolved.clone())
    }

    /// The corrected roles, or an error listing the residual failures.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnsatisfiableContrast`] if any requirement
    /// still fails.
    pub fn into_result(self) -> Result<ResolvedColorRoles> {
        if self.unresolved.is_empty() {
            Ok(self.roles)
        } else {
            Err(ThemeError::UnsatisfiableContrast {
                issues: self.unresolved,
            })
        }
    }
}

/// Move `color`'s lightness until it reaches `min_ratio` against
/// `against`, changing it as little as possible.
///
/// The preferred direction depends on `against`'s luminance; if even the
/// extreme of that direction fails, the opposite direction is tried.
/// Returns `None` when neither extreme is sufficient.
#[must_use]
pub fn ensure_contrast(color: Rgb, against: Rgb, min_ratio: f64) -> Option<Rgb> {
    if contrast_ratio(color, against) >= min_ratio {
        return Some(color);
    }
    let lighten_first = relative_luminance(against) <= LUMINANCE_PIVOT;
    bisect_lightness(color, against, min_ratio, lighten_first)
        .or_else(|| bisect_lightness(color, against, min_ratio, !lighten_first))
}

fn bisect_lightness(color: Rgb, against: Rgb, min_ratio: f64, lighten: bool) -> Option<Rgb> {
    let hsl = color.to_hsl();
    let extreme = hsl.with_lightness(if lighten { 100.0 } else { 0.0 }).to_rgb();
    if contrast_ratio(extreme, against) < min_ratio {
        return None;
    }

    // `near` always fails, `far` always passes.
    let (mut near, mut far) = if lighten { (hsl.l, 100.0) } else { (hsl.l, 0.0) };
    let mut best = extreme;
    for _ in 0..BISECTION_STEPS {
        let mid = (near + far) * 0.5;
        let candidate = hsl.with_lightness(mid).to_rgb();
        if contrast_ratio(candidate, against) >= min_ratio {
            best = candidate;
            far = mid;
        } else {
            near = mid;
        }
    }
    Some(best)
}

/// The lightness extreme of `color` with the higher ratio against
/// `against`. Ties go to the direction [`ensure_contrast`] tries first.
fn best_extreme(color: Rgb, against: Rgb) -> Rgb {
    let hsl = color.to_hsl();
    let lighten_first = relative_luminance(against) <= LUMINANCE_PIVOT;
    let (preferred, other) = if lighten_first { (100.0, 0.0) } else { (0.0, 100.0) };
    let preferred = hsl.with_lightness(preferred).to_rgb();
    let other = hsl.with_lightness(other).to_rgb();
    if contrast_ratio(other, against) > contrast_ratio(preferred, against) {
        other
    } else {
        preferred
    }
}

/// Correct `roles` against the builtin requirements.
#[must_use]
pub fn adjust_for_contrast(roles: &ResolvedColorRoles) -> ResolvedColorRoles {
    correct_contrast(roles, DEFAULT_REQUIREMENTS).roles
}

/// Fix every failing requirement by moving its designated side.
///
/// Runs up to three passes. A pair no lightness can satisfy gets the
/// extreme that comes closest; anything still failing afterwards is
/// returned in [`ContrastCorrection::unresolved`] and logged.
#[must_use]
pub fn correct_contrast(
    roles: &ResolvedColorRoles,
    requirements: &[ContrastRequirement],
) -> ContrastCorrection {
    let _span = tracing::debug_span!("correct_contrast", requirements = requirements.len()).entered();

    let mut current = *roles;
    let mut adjustments = Vec::new();

    for pass in 0..MAX_PASSES {
        let mut changed = false;
        for req in requirements {
            if req.ratio(&current) >= req.min_ratio {
                continue;
            }
            let (role, counterpart) = req.adjusted_pair();
            let from = current.get(role);
            let against = current.get(counterpart);
            let to = ensure_contrast(from, against, req.min_ratio).unwrap_or_else(|| best_extreme(from, against));
            if to != from {
                tracing::debug!(pass, role = role.name(), %from, %to, "adjusted for contrast");
                current = current.with(role, to);
                adjustments.push(ContrastAdjustment {
                    role,
                    from,
                    to,
                    label: req.label.clone(),
                });
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    let unresolved = validate_contrast(&current, requirements);
    for issue in &unresolved {
        tracing::warn!(%issue, "contrast requirement left unsatisfied");
    }

    ContrastCorrection {
        roles: current,
        adjustments,
        unresolved,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
