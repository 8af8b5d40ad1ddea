// SPDX-License-Identifier: MIT

//! Rule-driven derivation of the named color parameters.
//!
//! Each parameter maps to exactly one [`ParameterRule`]. Most rules are
//! plain lookups (a role, a neutral stop, a literal), optionally
//! tone-dependent or alpha-suffixed. The handful of parameters that need
//! real color math are the closed [`DerivedRule`] set.
//!
//! A rule that cannot be evaluated (an unknown rule kind in a loaded table,
//! or a `derived` rule for a name without a formula) omits that single
//! parameter; the rest of the table is still produced.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use tinct_color::{Rgb, Rgba};

use crate::roles::{ResolvedColorRoles, Role, Tone};
use crate::scale::{NeutralScale, Stop};

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Where a rule takes its color from.
///
/// Textual form (used by loaded tables): a role name (`accent_primary`), a
/// stop name (`n9b`), or a hex literal (`#ffffff`, `#00000080`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Source {
    Role(Role),
    Stop(Stop),
    Literal(Rgba),
}

impl Source {
    fn resolve(self, roles: &ResolvedColorRoles, scale: &NeutralScale) -> Rgba {
        match self {
            Self::Role(role) => Rgba::opaque(roles.get(role)),
            Self::Stop(stop) => Rgba::opaque(scale.get(stop)),
            Self::Literal(color) => color,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role(role) => f.write_str(role.name()),
            Self::Stop(stop) => f.write_str(stop.name()),
            Self::Literal(color) => write!(f, "{color}"),
        }
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(role) = Role::from_name(s) {
            return Ok(Self::Role(role));
        }
        if let Some(stop) = Stop::from_name(s) {
            return Ok(Self::Stop(stop));
        }
        Rgba::hex(s)
            .map(Self::Literal)
            .map_err(|_| format!("{s:?} is neither a role, a neutral stop nor a hex color"))
    }
}

impl TryFrom<String> for Source {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Source> for String {
    fn from(source: Source) -> Self {
        source.to_string()
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// How one parameter is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ParameterRule {
    /// A resolved role.
    Role { source: Role },
    /// A neutral-scale stop.
    Scale { source: Stop },
    /// A literal, identical in both tones.
    Fixed { value: Rgba },
    /// A different source per tone. In light themes `light_alpha`, when
    /// present, replaces `light` with an alpha-suffixed color.
    Tone {
        dark: Source,
        light: Source,
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        light_alpha: Option<(Source, u8)>,
    },
    /// A source with a fixed alpha suffix.
    Alpha { source: Source, alpha: u8 },
    /// A literal per tone, independent of the roles (e.g. alert red).
    Semantic { dark: Rgba, light: Rgba },
    /// Computed by the [`DerivedRule`] registered for the parameter name.
    Derived,
    /// A rule kind this build does not understand.
    #[cfg_attr(feature = "serde", serde(other))]
    Unrecognized,
}

/// Parameters whose value needs bespoke color math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivedRule {
    /// Desaturated, darkened `selection_bg` for unfocused selections.
    StandbySelectionBackground,
    /// Between `selection_bg` and its standby variant.
    SelectionBackgroundContrast,
    /// Slightly recessed `surface_base`.
    SurfaceRecess,
    /// Between `surface_base` and `text_secondary`.
    MutedAuditionClip,
    /// `accent_secondary` with reduced lightness.
    RangeEditField,
}

impl DerivedRule {
    /// The formula registered for `parameter`, if any.
    #[must_use]
    pub fn for_parameter(parameter: &str) -> Option<Self> {
        Some(match parameter {
            "StandbySelectionBackground" => Self::StandbySelectionBackground,
            "SelectionBackgroundContrast" => Self::SelectionBackgroundContrast,
            "TakeLaneTrackNotHighlighted" | "WarperTimeBarMarkerBackground" => Self::SurfaceRecess,
            "MutedAuditionClip" => Self::MutedAuditionClip,
            "RangeEditField" => Self::RangeEditField,
            _ => return None,
        })
    }

    #[must_use]
    pub fn apply(self, roles: &ResolvedColorRoles) -> Rgb {
        let dark = roles.is_dark();
        match self {
            Self::StandbySelectionBackground => standby_selection(roles),
            Self::SelectionBackgroundContrast => roles.selection_bg.lerp(standby_selection(roles), 0.55),
            Self::SurfaceRecess => roles
                .surface_base
                .adjust_lightness(if dark { -2.2 } else { -3.5 }),
            Self::MutedAuditionClip => roles
                .surface_base
                .lerp(roles.text_secondary, if dark { 0.65 } else { 0.55 }),
            Self::RangeEditField => {
                let hsl = roles.accent_secondary.to_hsl();
                hsl.with_lightness(hsl.l * if dark { 0.55 } else { 0.85 }).to_rgb()
            }
        }
    }
}

fn standby_selection(roles: &ResolvedColorRoles) -> Rgb {
    let (saturation, lightness) = if roles.is_dark() { (-25.0, -30.0) } else { (-20.0, -15.0) };
    roles
        .selection_bg
        .adjust_saturation(saturation)
        .adjust_lightness(lightness)
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// A named rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleEntry {
    pub name: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub rule: ParameterRule,
}

/// Ordered parameter rules; output order follows table order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleTable {
    entries: Vec<RuleEntry>,
}

impl RuleTable {
    #[must_use]
    pub const fn new(entries: Vec<RuleEntry>) -> Self {
        Self { entries }
    }

    /// The stock table for the host application's color parameters.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(crate::rules::BUILTIN_RULES.to_vec())
    }

    /// Load a table from a JSON array of `{"name", "type", ...}` objects.
    ///
    /// Unknown `type` values load as [`ParameterRule::Unrecognized`].
    ///
    /// # Errors
    ///
    /// [`crate::ThemeError::RuleTable`] if the document is not such an array
    /// or a source string is malformed.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::ThemeError::RuleTable {
            reason: e.to_string(),
        })
    }

    #[must_use]
    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParameterRule> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.rule)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Generated parameter values in rule-table order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterTable {
    entries: Vec<(String, Rgba)>,
    /// Parameters whose rule could not be evaluated.
    pub omitted: Vec<String>,
}

impl ParameterTable {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Rgba> {
        self.entries.iter().find(|(n, _)| n == name).map(|&(_, c)| c)
    }

    /// `#rrggbb` or `#rrggbbaa`.
    #[must_use]
    pub fn get_hex(&self, name: &str) -> Option<String> {
        self.get(name).map(Rgba::to_hex)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgba)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ParameterTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, color) in &self.entries {
            map.serialize_entry(name, color)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

fn evaluate(
    name: &str,
    rule: &ParameterRule,
    roles: &ResolvedColorRoles,
    scale: &NeutralScale,
) -> Option<Rgba> {
    let tone = roles.tone;
    Some(match *rule {
        ParameterRule::Role { source } => Rgba::opaque(roles.get(source)),
        ParameterRule::Scale { source } => Rgba::opaque(scale.get(source)),
        ParameterRule::Fixed { value } => value,
        ParameterRule::Tone {
            dark,
            light,
            light_alpha,
        } => match (tone, light_alpha) {
            (Tone::Dark, _) => dark.resolve(roles, scale),
            (Tone::Light, Some((source, alpha))) => source.resolve(roles, scale).rgb.with_alpha(alpha),
            (Tone::Light, None) => light.resolve(roles, scale),
        },
        ParameterRule::Alpha { source, alpha } => source.resolve(roles, scale).rgb.with_alpha(alpha),
        ParameterRule::Semantic { dark, light } => {
            if tone.is_dark() {
                dark
            } else {
                light
            }
        }
        ParameterRule::Derived => Rgba::opaque(DerivedRule::for_parameter(name)?.apply(roles)),
        ParameterRule::Unrecognized => return None,
    })
}

/// Evaluate every rule in `table`.
///
/// Never fails: parameters whose rule cannot be evaluated are listed in
/// [`ParameterTable::omitted`] and logged.
#[must_use]
pub fn generate_parameters(
    roles: &ResolvedColorRoles,
    scale: &NeutralScale,
    table: &RuleTable,
) -> ParameterTable {
    let _span = tracing::debug_span!("generate_parameters", rules = table.len()).entered();

    let mut out = ParameterTable::default();
    for entry in &table.entries {
        match evaluate(&entry.name, &entry.rule, roles, scale) {
            Some(color) => out.entries.push((entry.name.to_string(), color)),
            None => {
                tracing::warn!(parameter = %entry.name, rule = ?entry.rule, "omitting parameter without a usable rule");
                out.omitted.push(entry.name.to_string());
            }
        }
    }

    tracing::debug!(generated = out.len(), omitted = out.omitted.len(), "generated parameters");
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
