// SPDX-License-Identifier: MIT

//! Numeric theme factors and VU meter gradients.
//!
//! Neither depends on the input roles: blend factors vary only by tone, and
//! the meter gradients are shared by every theme.

use tinct_color::Rgb;

use crate::roles::Tone;

/// Per-tone numeric factors the host application applies on top of the
/// color parameters.
///
/// `*BlendFactor` values are mix weights in `[0, 1]`, `*Alpha` values are
/// opacities in `[0, 1]`, and the `*Lightness`/`*Saturation` pairs are
/// multipliers applied to clip colors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct BlendFactors {
    pub default_blend_factor: f64,
    pub icon_blend_factor: f64,
    pub clip_blend_factor: f64,
    pub note_border_standby_blend_factor: f64,
    pub retro_display_blend_factor: f64,
    pub check_control_not_checked_blend_factor: f64,
    pub mix_surface_area_blend_factor: f64,
    pub text_frame_segment_blend_factor: f64,
    pub note_disabled_selected_blend_factor: f64,
    pub min_velocity_note_blend_factor: f64,
    pub striped_background_shade_factor: f64,
    pub non_editable_automation_alpha: f64,
    pub disabled_context_menu_icon_alpha: f64,
    pub clip_border_alpha: f64,
    pub scroll_bar_alpha: f64,
    pub scroll_bar_on_hover_alpha: f64,
    pub scroll_bar_background_alpha: f64,
    pub inaudible_take_lightness: f64,
    pub inaudible_take_saturation: f64,
    pub inaudible_take_name_lightness: f64,
    pub inaudible_take_name_saturation: f64,
    pub automation_lane_clip_body_lightness: f64,
    pub automation_lane_clip_body_saturation: f64,
    pub automation_lane_header_lightness: f64,
    pub automation_lane_header_saturation: f64,
    pub take_lane_header_lightness: f64,
    pub take_lane_header_saturation: f64,
    pub take_lane_header_name_lightness: f64,
    pub take_lane_header_name_saturation: f64,
    pub automation_lane_header_name_lightness: f64,
    pub automation_lane_header_name_saturation: f64,
    pub clip_contrast_color_adjustment: f64,
    pub session_slot_oklab_l_compensation_factor: f64,
}

impl BlendFactors {
    pub const DARK: Self = Self {
        default_blend_factor: 0.5,
        icon_blend_factor: 0.6,
        clip_blend_factor: 0.5,
        note_border_standby_blend_factor: 0.4,
        retro_display_blend_factor: 0.3,
        check_control_not_checked_blend_factor: 0.55,
        mix_surface_area_blend_factor: 0.3,
        text_frame_segment_blend_factor: 0.45,
        note_disabled_selected_blend_factor: 0.4,
        min_velocity_note_blend_factor: 0.8,
        striped_background_shade_factor: 0.92,
        non_editable_automation_alpha: 0.5,
        disabled_context_menu_icon_alpha: 0.3,
        clip_border_alpha: 0.2,
        scroll_bar_alpha: 0.25,
        scroll_bar_on_hover_alpha: 0.35,
        scroll_bar_background_alpha: 0.1,
        inaudible_take_lightness: 0.6,
        inaudible_take_saturation: 0.4,
        inaudible_take_name_lightness: 0.8,
        inaudible_take_name_saturation: 0.5,
        automation_lane_clip_body_lightness: 0.35,
        automation_lane_clip_body_saturation: 0.7,
        automation_lane_header_lightness: 0.45,
        automation_lane_header_saturation: 0.8,
        take_lane_header_lightness: 0.5,
        take_lane_header_saturation: 0.8,
        take_lane_header_name_lightness: 1.0,
        take_lane_header_name_saturation: 0.6,
        automation_lane_header_name_lightness: 1.0,
        automation_lane_header_name_saturation: 0.6,
        clip_contrast_color_adjustment: 0.1,
        session_slot_oklab_l_compensation_factor: 0.0,
    };

    pub const LIGHT: Self = Self {
        default_blend_factor: 0.5,
        icon_blend_factor: 0.5,
        clip_blend_factor: 0.4,
        note_border_standby_blend_factor: 0.5,
        retro_display_blend_factor: 0.2,
        check_control_not_checked_blend_factor: 0.45,
        mix_surface_area_blend_factor: 0.2,
        text_frame_segment_blend_factor: 0.35,
        note_disabled_selected_blend_factor: 0.5,
        min_velocity_note_blend_factor: 0.7,
        striped_background_shade_factor: 0.96,
        non_editable_automation_alpha: 0.4,
        disabled_context_menu_icon_alpha: 0.35,
        clip_border_alpha: 0.3,
        scroll_bar_alpha: 0.3,
        scroll_bar_on_hover_alpha: 0.45,
        scroll_bar_background_alpha: 0.08,
        inaudible_take_lightness: 1.15,
        inaudible_take_saturation: 0.4,
        inaudible_take_name_lightness: 0.7,
        inaudible_take_name_saturation: 0.5,
        automation_lane_clip_body_lightness: 1.25,
        automation_lane_clip_body_saturation: 0.6,
        automation_lane_header_lightness: 1.15,
        automation_lane_header_saturation: 0.7,
        take_lane_header_lightness: 1.1,
        take_lane_header_saturation: 0.7,
        take_lane_header_name_lightness: 0.6,
        take_lane_header_name_saturation: 0.6,
        automation_lane_header_name_lightness: 0.6,
        automation_lane_header_name_saturation: 0.6,
        clip_contrast_color_adjustment: -0.1,
        session_slot_oklab_l_compensation_factor: 0.05,
    };

    #[must_use]
    pub const fn for_tone(tone: Tone) -> Self {
        match tone {
            Tone::Dark => Self::DARK,
            Tone::Light => Self::LIGHT,
        }
    }
}

/// A level meter gradient, loudest stop first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VuMeter {
    /// Draw a single minimum-to-maximum ramp, ignoring the dB stops.
    pub only_minimum_to_maximum: bool,
    pub maximum: Rgb,
    pub above_zero_decibel: Rgb,
    pub zero_decibel: Rgb,
    pub below_zero_decibel1: Rgb,
    pub below_zero_decibel2: Rgb,
    pub minimum: Rgb,
}

impl VuMeter {
    const fn ramp(minimum: u32, maximum: u32) -> Self {
        Self {
            only_minimum_to_maximum: true,
            maximum: Rgb::from_u32(maximum),
            above_zero_decibel: Rgb::from_u32(maximum),
            zero_decibel: Rgb::from_u32(maximum),
            below_zero_decibel1: Rgb::from_u32(minimum),
            below_zero_decibel2: Rgb::from_u32(minimum),
            minimum: Rgb::from_u32(minimum),
        }
    }

    /// The stops in gradient order, loudest first.
    #[must_use]
    pub const fn stops(&self) -> [Rgb; 6] {
        [
            self.maximum,
            self.above_zero_decibel,
            self.zero_decibel,
            self.below_zero_decibel1,
            self.below_zero_decibel2,
            self.minimum,
        ]
    }
}

/// The meter gradients every theme ships with.
pub const VU_METERS: &[(&str, VuMeter)] = &[
    (
        "StandardVuMeter",
        VuMeter {
            only_minimum_to_maximum: false,
            maximum: Rgb::from_u32(0xff_2a2a),
            above_zero_decibel: Rgb::from_u32(0xff_7a1f),
            zero_decibel: Rgb::from_u32(0xff_d21f),
            below_zero_decibel1: Rgb::from_u32(0xc8_f032),
            below_zero_decibel2: Rgb::from_u32(0x3c_d248),
            minimum: Rgb::from_u32(0x1e_8c3c),
        },
    ),
    (
        "OverloadVuMeter",
        VuMeter {
            only_minimum_to_maximum: false,
            maximum: Rgb::from_u32(0xff_0000),
            above_zero_decibel: Rgb::from_u32(0xff_2a2a),
            zero_decibel: Rgb::from_u32(0xff_5a3c),
            below_zero_decibel1: Rgb::from_u32(0xff_7a1f),
            below_zero_decibel2: Rgb::from_u32(0xff_9a1f),
            minimum: Rgb::from_u32(0xff_b432),
        },
    ),
    ("DisabledVuMeter", VuMeter::ramp(0x50_5050, 0xa0_a0a0)),
    ("HeadphonesVuMeter", VuMeter::ramp(0x1e_5a8c, 0x5a_c8ff)),
    ("SendsOnlyVuMeter", VuMeter::ramp(0x3c_3c8c, 0x8c_8cff)),
    ("BipolarGainReductionVuMeter", VuMeter::ramp(0x8c_501e, 0xff_b432)),
];

/// Owned copy of [`VU_METERS`].
#[must_use]
pub fn default_vu_meters() -> Vec<(String, VuMeter)> {
    VU_METERS.iter().map(|(name, meter)| ((*name).to_owned(), *meter)).collect()
}
