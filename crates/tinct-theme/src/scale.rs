// SPDX-License-Identifier: MIT

//! The 13-stop neutral ramp (plus two half stops) derived from resolved roles.
//!
//! Seven stops are role aliases; the rest are synthesized in the surface hue
//! at lightness fractions calibrated against the stock neutral themes. In a
//! dark theme the ramp runs from near-black (`n0`) to `text_primary`
//! (`n12`). Light themes reuse the same slots but the stops are not
//! monotonic, matching how the host application consumes them.

use std::fmt;

use tinct_color::{Hsl, Rgb};

use crate::roles::ResolvedColorRoles;

/// A neutral-scale slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stop {
    N0,
    N1,
    N2,
    N3,
    N4,
    N5,
    N6,
    N7,
    N8,
    N9,
    /// Between `n9` and `n10`.
    N9b,
    N10,
    N11,
    /// Between `n11` and `n12`; used for rulers and grid lines.
    N11b,
    N12,
}

impl Stop {
    /// The thirteen primary stops, darkest first in a dark theme.
    pub const PRIMARY: [Self; 13] = [
        Self::N0, Self::N1, Self::N2, Self::N3, Self::N4, Self::N5, Self::N6,
        Self::N7, Self::N8, Self::N9, Self::N10, Self::N11, Self::N12,
    ];

    /// Every stop, half stops in ramp position.
    pub const ALL: [Self; 15] = [
        Self::N0, Self::N1, Self::N2, Self::N3, Self::N4, Self::N5, Self::N6,
        Self::N7, Self::N8, Self::N9, Self::N9b, Self::N10, Self::N11,
        Self::N11b, Self::N12,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::N0 => "n0",
            Self::N1 => "n1",
            Self::N2 => "n2",
            Self::N3 => "n3",
            Self::N4 => "n4",
            Self::N5 => "n5",
            Self::N6 => "n6",
            Self::N7 => "n7",
            Self::N8 => "n8",
            Self::N9 => "n9",
            Self::N9b => "n9b",
            Self::N10 => "n10",
            Self::N11 => "n11",
            Self::N11b => "n11b",
            Self::N12 => "n12",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|s| s.name() == name).copied()
    }

    /// Index into the thirteen primary stops; `None` for half stops.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        Some(match self {
            Self::N0 => 0,
            Self::N1 => 1,
            Self::N2 => 2,
            Self::N3 => 3,
            Self::N4 => 4,
            Self::N5 => 5,
            Self::N6 => 6,
            Self::N7 => 7,
            Self::N8 => 8,
            Self::N9 => 9,
            Self::N10 => 10,
            Self::N11 => 11,
            Self::N12 => 12,
            Self::N9b | Self::N11b => return None,
        })
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered neutral ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeutralScale {
    pub stops: [Rgb; 13],
    pub n9b_mid: Rgb,
    pub n11b_ruler: Rgb,
}

impl NeutralScale {
    #[must_use]
    pub const fn get(&self, stop: Stop) -> Rgb {
        match stop {
            Stop::N9b => self.n9b_mid,
            Stop::N11b => self.n11b_ruler,
            Stop::N0 => self.stops[0],
            Stop::N1 => self.stops[1],
            Stop::N2 => self.stops[2],
            Stop::N3 => self.stops[3],
            Stop::N4 => self.stops[4],
            Stop::N5 => self.stops[5],
            Stop::N6 => self.stops[6],
            Stop::N7 => self.stops[7],
            Stop::N8 => self.stops[8],
            Stop::N9 => self.stops[9],
            Stop::N10 => self.stops[10],
            Stop::N11 => self.stops[11],
            Stop::N12 => self.stops[12],
        }
    }

    /// `(stop, color)` for every stop in ramp order.
    pub fn iter(&self) -> impl Iterator<Item = (Stop, Rgb)> + '_ {
        Stop::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

// Saturation multipliers per zone, relative to the surface.
const DEEP_SATURATION: f64 = 1.4;
const DEEP_SATURATION_CAP: f64 = 70.0;
const AREA_SATURATION: f64 = 1.0;
const FAR_MID_SATURATION: f64 = 0.45;
const NEAR_TEXT_SATURATION: f64 = 0.20;

/// Lightness targets for the synthesized stops.
struct Targets {
    n0: f64,
    n1: f64,
    n2: f64,
    n4: f64,
    n9: f64,
    n9b: f64,
    n11: f64,
    n11b: f64,
}

fn dark_targets(control: f64, surface: f64, highlight: f64, secondary: f64, text: f64) -> Targets {
    let n9 = (secondary - highlight).mul_add(0.49, highlight);
    Targets {
        n0: control * 0.23,
        n1: control * 0.57,
        n2: control * 0.80,
        n4: (surface - control).mul_add(0.25, control),
        n9,
        n9b: (secondary - n9).mul_add(0.5, n9),
        n11: (text - secondary).mul_add(0.26, secondary),
        n11b: (text - secondary).mul_add(0.44, secondary),
    }
}

fn light_targets(control: f64, surface: f64, secondary: f64, text: f64) -> Targets {
    let n9 = (secondary - text).mul_add(-0.34, secondary);
    Targets {
        n0: text * 0.38,
        n1: (secondary - text).mul_add(0.20, text),
        n2: (secondary - text).mul_add(0.47, text),
        n4: secondary,
        n9,
        n9b: (secondary - n9).mul_add(0.38, n9),
        n11: surface,
        n11b: control,
    }
}

/// Build the neutral ramp for `roles`.
#[must_use]
pub fn build_neutral_scale(roles: &ResolvedColorRoles) -> NeutralScale {
    let surface = roles.surface_base.to_hsl();
    let control = roles.control_bg.lightness();
    let secondary = roles.text_secondary.lightness();
    let text = roles.text_primary.lightness();

    let t = if roles.is_dark() {
        dark_targets(control, surface.l, roles.surface_highlight.lightness(), secondary, text)
    } else {
        light_targets(control, surface.l, secondary, text)
    };

    let tint = |lightness: f64, saturation: f64| Hsl::new(surface.h, saturation, lightness).to_rgb();
    let deep = (surface.s * DEEP_SATURATION).min(DEEP_SATURATION_CAP);
    let far = surface.s * FAR_MID_SATURATION;
    let near = surface.s * NEAR_TEXT_SATURATION;

    let scale = NeutralScale {
        stops: [
            tint(t.n0, deep),
            tint(t.n1, deep),
            tint(t.n2, deep),
            roles.control_bg,
            tint(t.n4, surface.s * AREA_SATURATION),
            roles.surface_border,
            roles.surface_base,
            roles.detail_bg,
            roles.surface_highlight,
            tint(t.n9, far),
            roles.text_secondary,
            tint(t.n11, near),
            roles.text_primary,
        ],
        n9b_mid: tint(t.n9b, far),
        n11b_ruler: tint(t.n11b, near),
    };

    tracing::debug!(
        tone = roles.tone.name(),
        n0 = %scale.stops[0],
        n9 = %scale.stops[9],
        "built neutral scale"
    );
    scale
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
