// SPDX-License-Identifier: MIT

//! Named preset role sets, ready to feed to the generator.
//!
//! `dark-neutral` pins every core role and reproduces the stock neutral
//! theme; the others supply only anchors and let resolution fill in the
//! rest.

use tinct_color::Rgb;

use crate::roles::{Role, SemanticColorRoles, Tone};

const fn anchors(tone: Tone, surface: u32, text: u32, accent: u32, secondary: u32) -> SemanticColorRoles {
    SemanticColorRoles::new(
        tone,
        Rgb::from_u32(surface),
        Rgb::from_u32(text),
        Rgb::from_u32(accent),
        Rgb::from_u32(secondary),
    )
}

const STEEL_BLUE: SemanticColorRoles = anchors(Tone::Dark, 0x2d_3440, 0xc8_d0dc, 0xe8_943a, 0x3a_b5c8);

const DARK_NEUTRAL: SemanticColorRoles = anchors(Tone::Dark, 0x36_3636, 0xb5_b5b5, 0xff_ad56, 0x03_c3d5)
    .with_role(Role::SurfaceHighlight, Rgb::from_u32(0x46_4646))
    .with_role(Role::SurfaceBorder, Rgb::from_u32(0x2a_2a2a))
    .with_role(Role::DetailBg, Rgb::from_u32(0x3e_3e3e))
    .with_role(Role::ControlBg, Rgb::from_u32(0x1e_1e1e))
    .with_role(Role::TextSecondary, Rgb::from_u32(0x75_7575))
    .with_role(Role::SelectionBg, Rgb::from_u32(0xb0_ddeb))
    .with_role(Role::SelectionFg, Rgb::from_u32(0x07_0707));

/// Look up a preset by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_roles(name: &str) -> Option<SemanticColorRoles> {
    Some(match name {
        "default" | "steel-blue" => STEEL_BLUE,
        "dark-neutral" => DARK_NEUTRAL,
        "high-saturation-red" => anchors(Tone::Dark, 0x8b_2020, 0xe0_e0e0, 0xff_b74d, 0x4f_c3f7),
        "very-dark-base" => anchors(Tone::Dark, 0x14_1414, 0xd0_d0d0, 0xff_9800, 0x00_bcd4),
        "multi-color-harmony" => anchors(Tone::Dark, 0x2c_3e50, 0xec_f0f1, 0xe7_4c3c, 0x34_98db),
        "pastel-muted" => anchors(Tone::Dark, 0x3d_4f5f, 0xc8_d0dc, 0xe8_943a, 0x3a_b5c8),
        "light-high-saturation" => anchors(Tone::Light, 0xff_e0e0, 0x1a_1a1a, 0xd3_2f2f, 0x19_76d2),
        "extended-palette" => STEEL_BLUE
            .with_role(Role::SurfaceSecondary, Rgb::from_u32(0x3d_4f5f))
            .with_role(Role::AccentTertiary, Rgb::from_u32(0x9c_27b0)),
        _ => return None,
    })
}

/// List all preset names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &[
        "steel-blue",
        "dark-neutral",
        "high-saturation-red",
        "very-dark-base",
        "multi-color-harmony",
        "pastel-muted",
        "light-high-saturation",
        "extended-palette",
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
