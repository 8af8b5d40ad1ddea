// SPDX-License-Identifier: MIT

//! The stock parameter rule table.
//!
//! Grouped roughly by UI area. Order matters: it is the order parameters are
//! emitted in.
#![allow(clippy::enum_glob_use)]

use std::borrow::Cow;

use tinct_color::Rgba;

use crate::params::{ParameterRule, RuleEntry, Source};
use crate::roles::Role::{self, *};
use crate::scale::Stop::{self, *};

const fn entry(name: &'static str, rule: ParameterRule) -> RuleEntry {
    RuleEntry {
        name: Cow::Borrowed(name),
        rule,
    }
}

const fn role(name: &'static str, source: Role) -> RuleEntry {
    entry(name, ParameterRule::Role { source })
}

const fn stop(name: &'static str, source: Stop) -> RuleEntry {
    entry(name, ParameterRule::Scale { source })
}

const fn fixed(name: &'static str, rgb: u32) -> RuleEntry {
    entry(name, ParameterRule::Fixed { value: Rgba::from_u32(rgb) })
}

const fn fixed_alpha(name: &'static str, rgb: u32, alpha: u8) -> RuleEntry {
    entry(name, ParameterRule::Fixed { value: Rgba::from_u32_alpha(rgb, alpha) })
}

const fn tone(name: &'static str, dark: Source, light: Source) -> RuleEntry {
    entry(name, ParameterRule::Tone { dark, light, light_alpha: None })
}

const fn tone_alpha(name: &'static str, dark: Source, light: Source, alpha: u8) -> RuleEntry {
    entry(name, ParameterRule::Tone { dark, light, light_alpha: Some((light, alpha)) })
}

const fn alpha(name: &'static str, source: Source, alpha: u8) -> RuleEntry {
    entry(name, ParameterRule::Alpha { source, alpha })
}

const fn semantic(name: &'static str, dark: u32, light: u32) -> RuleEntry {
    entry(name, ParameterRule::Semantic { dark: Rgba::from_u32(dark), light: Rgba::from_u32(light) })
}

const fn derived(name: &'static str) -> RuleEntry {
    entry(name, ParameterRule::Derived)
}

const fn r(role: Role) -> Source {
    Source::Role(role)
}

const fn s(stop: Stop) -> Source {
    Source::Stop(stop)
}

const fn lit(rgb: u32) -> Source {
    Source::Literal(Rgba::from_u32(rgb))
}

pub(crate) const BUILTIN_RULES: &[RuleEntry] = &[
    // ── Controls ─────────────────────────────────────────────────────
    role("ControlForeground", TextPrimary),
    stop("TextDisabled", N9b),
    stop("ControlDisabled", N9),
    role("ControlOnForeground", SelectionFg),
    role("ControlOffForeground", TextPrimary),
    stop("ControlOnDisabledForeground", N8),
    stop("ControlOffDisabledForeground", N9b),
    role("ControlOnAlternativeForeground", SelectionFg),
    stop("ControlTextBack", N2),
    stop("ControlContrastFrame", N3),
    role("ControlSelectionFrame", AccentSecondary),
    stop("ControlContrastTransport", N1),
    role("ControlBackground", ControlBg),
    stop("ControlFillHandle", N9),
    tone("ControlForegroundHover", s(N12), s(N0)),
    tone("ControlFrameHover", s(N9), s(N9)),
    role("ChosenDefault", AccentPrimary),
    semantic("ChosenRecord", 0xff_3636, 0xe5_2b2b),
    role("ChosenPreListen", AccentSecondary),
    semantic("ChosenPlay", 0x7a_d85d, 0x38_a33a),
    role("ChosenAlternative", AccentSecondary),
    semantic("ChosenAlert", 0xff_b532, 0xf0_9a00),
    stop("Poti", N11),
    stop("PotiNeedle", N12),
    stop("BipolarPotiTriangle", N10),
    role("ViewCheckControlEnabledOn", AccentPrimary),
    stop("ViewCheckControlEnabledOff", N9),
    stop("ViewCheckControlDisabledOn", N9b),
    stop("ViewCheckControlDisabledOff", N5),
    tone_alpha("ViewControlOn", r(AccentPrimary), r(TextPrimary), 0x59),
    stop("ViewControlOff", N9),
    stop("Progress", N10),
    role("ProgressText", TextPrimary),
    role("TransportProgress", AccentPrimary),
    // ── Surfaces ─────────────────────────────────────────────────────
    stop("Desktop", N4),
    role("SurfaceBackground", SurfaceBase),
    stop("SurfaceArea", N4),
    role("SurfaceHighlight", SurfaceHighlight),
    stop("SurfaceAreaFocus", N7),
    role("DetailViewBackground", DetailBg),
    stop("DisplayBackground", N1),
    stop("PreferencesTab", N2),
    role("SelectionFrame", AccentSecondary),
    tone("ShadowDark", lit(0x00_0000), s(N9)),
    tone("ShadowLight", s(N8), lit(0xff_ffff)),
    stop("SplitLine", N3),
    role("SurfaceBorder", SurfaceBorder),
    role("SurfaceSecondary", SurfaceSecondary),
    stop("PanelHeaderBackground", N5),
    stop("PanelHeaderForeground", N11),
    alpha("PanelDropShadow", lit(0x00_0000), 0x40),
    alpha("PopupShadow", lit(0x00_0000), 0x59),
    stop("ToolTipBackground", N11b),
    stop("ToolTipForeground", N0),
    stop("InfoViewBackground", N5),
    role("InfoViewForeground", TextSecondary),
    // ── Selection ────────────────────────────────────────────────────
    role("SelectionBackground", SelectionBg),
    role("SelectionForeground", SelectionFg),
    derived("StandbySelectionBackground"),
    role("StandbySelectionForeground", SelectionFg),
    derived("SelectionBackgroundContrast"),
    tone_alpha("SelectionHighlightOverlay", r(SelectionBg), r(SelectionBg), 0x66),
    alpha("SelectionRangeBackground", r(SelectionBg), 0x4d),
    // ── Text ─────────────────────────────────────────────────────────
    role("TextPrimary", TextPrimary),
    role("TextSecondary", TextSecondary),
    stop("TextTertiary", N9),
    stop("TextInverted", N0),
    role("HyperlinkText", AccentSecondary),
    // ── Ranges & edit fields ─────────────────────────────────────────
    stop("RangeDefault", N10),
    stop("RangeDisabled", N8),
    stop("RangeDisabledOff", N5),
    derived("RangeEditField"),
    role("RangeEditField2", AccentPrimary),
    role("RangeEditField3", AccentSecondary),
    stop("RangeEditFieldDisabled", N9),
    // ── Learn modes ──────────────────────────────────────────────────
    semantic("LearnMidi", 0x69_4ac8, 0x7c_5fd9),
    semantic("LearnKey", 0xff_6400, 0xf5_7600),
    semantic("LearnMacro", 0x00_9de0, 0x00_88c7),
    alpha("LearnMidiOverlay", lit(0x69_4ac8), 0x80),
    alpha("LearnKeyOverlay", lit(0xff_6400), 0x80),
    // ── Retro displays ───────────────────────────────────────────────
    stop("RetroDisplayBackground", N1),
    stop("RetroDisplayBackgroundLine", N3),
    semantic("RetroDisplayGreen", 0x22_ff88, 0x1a_c46a),
    role("RetroDisplayForeground", AccentSecondary),
    stop("RetroDisplayForegroundDisabled", N9),
    semantic("RetroDisplayRed", 0xff_4f4f, 0xe0_3131),
    role("RetroDisplayTitle", TextPrimary),
    role("RetroDisplayHandle1", AccentPrimary),
    role("RetroDisplayHandle2", AccentSecondary),
    stop("RetroDisplayScaleText", N10),
    // ── Dynamics & spectrum displays ─────────────────────────────────
    semantic("ThresholdLineColor", 0xff_b532, 0xe8_8a00),
    semantic("GainReductionLineColor", 0xff_4f4f, 0xe0_3131),
    role("InputCurveColor", AccentSecondary),
    alpha("InputCurveOutlineColor", r(AccentSecondary), 0x80),
    role("OutputCurveColor", AccentPrimary),
    alpha("OutputCurveOutlineColor", r(AccentPrimary), 0x80),
    role("SpectrumDefaultColor", AccentSecondary),
    role("SpectrumAlternativeColor", AccentPrimary),
    stop("SpectrumGridLines", N5),
    semantic("Operator1", 0xff_5e5e, 0xe0_4545),
    semantic("Operator2", 0xff_c23d, 0xe0_a020),
    semantic("Operator3", 0x3d_d6ff, 0x1a_a8d6),
    semantic("Operator4", 0x8a_ff5e, 0x5c_c43a),
    // ── Drum rack & instruments ──────────────────────────────────────
    stop("DrumRackScroller1", N9),
    stop("DrumRackScroller2", N10),
    role("FilledDrumRackPad", AccentSecondary),
    stop("EmptyDrumRackPad", N5),
    role("DrumRackPadSelected", SelectionBg),
    stop("KeyZoneBackground", N5),
    stop("KeyZoneCrossfadeRamp", N9),
    stop("VelocityZoneBackground", N5),
    stop("VelocityZoneCrossfadeRamp", N9),
    stop("SelectorZoneBackground", N5),
    role("FreezeColor", AccentSecondary),
    alpha("FreezeOverlay", r(AccentSecondary), 0x33),
    // ── Grid & rulers ────────────────────────────────────────────────
    stop("GridLabel", N10),
    stop("GridLineBase", N3),
    stop("ArrangerGridTiles", N5),
    stop("DetailGridTiles", N5),
    stop("GridGuideline", N9),
    stop("OffGridGuideline", N8),
    stop("ArrangementRulerMarkings", N11b),
    stop("DetailViewRulerMarkings", N11b),
    stop("ArrangementRulerBackground", N3),
    stop("DetailViewRulerBackground", N3),
    stop("RulerText", N11),
    tone("BeatTimeRulerHighlight", s(N9b), s(N9)),
    // ── Browser ──────────────────────────────────────────────────────
    stop("BrowserBar", N5),
    stop("BrowserBarOverlayHintTextColor", N9b),
    stop("BrowserDisabledItem", N9),
    role("BrowserSampleWaveform", TextSecondary),
    stop("BrowserTagBackground", N8),
    role("BrowserTagForeground", TextPrimary),
    role("BrowserFolderIcon", AccentPrimary),
    stop("TreeColumnHeadBackground", N5),
    role("TreeColumnHeadForeground", TextSecondary),
    role("TreeColumnHeadSelected", TextPrimary),
    role("TreeColumnHeadFocus", AccentSecondary),
    stop("TreeColumnHeadControl", N9),
    role("TreeRowCategoryForeground", TextPrimary),
    stop("TreeRowCategoryBackground", N4),
    role("SearchIndication", AccentPrimary),
    stop("SearchIndicationStandby", N9),
    // ── Clips & scenes ───────────────────────────────────────────────
    stop("ClipText", N0),
    stop("ClipBorder", N1),
    alpha("ClipBorderOverlay", lit(0x00_0000), 0x33),
    stop("SceneContrast", N9),
    role("SelectedSceneContrast", TextPrimary),
    stop("ClipSlotButton", N8),
    stop("ClipSlotButtonEmpty", N5),
    role("ClipLoopMarker", AccentPrimary),
    stop("DeactivatedClipHeader", N8),
    stop("DeactivatedClipHeaderForeground", N10),
    derived("MutedAuditionClip"),
    stop("StoppedClipIndicator", N9b),
    semantic("PlayingClipIndicator", 0x7a_d85d, 0x38_a33a),
    semantic("RecordingClipIndicator", 0xff_3636, 0xe5_2b2b),
    role("LaunchQuantizationIndicator", AccentPrimary),
    // ── Tracks & lanes ───────────────────────────────────────────────
    stop("TakeLaneTrackHighlighted", N7),
    derived("TakeLaneTrackNotHighlighted"),
    stop("TakeLaneHeaderBackground", N5),
    role("TakeLaneHeaderForeground", TextSecondary),
    stop("TrackHeaderBackground", N5),
    role("TrackHeaderForeground", TextPrimary),
    role("SelectedTrackHeader", SurfaceHighlight),
    role("LinkedTrackHover", AccentTertiary),
    stop("ExpressionLaneHeaderHighlight", N8),
    stop("GroupTrackBackground", N4),
    stop("ReturnTrackBackground", N7),
    stop("MainTrackBackground", N8),
    stop("MixerStripBackground", N4),
    role("MixerStripSelected", SurfaceHighlight),
    stop("FoldButton", N10),
    // ── Automation ───────────────────────────────────────────────────
    semantic("AutomationColor", 0xff_4f4f, 0xe0_3131),
    stop("AutomationGrid", N5),
    alpha("AutomationDisabled", lit(0xff_4f4f), 0x66),
    role("AutomationTransformToolFrame", AccentSecondary),
    role("AutomationTransformToolHandle", AccentPrimary),
    alpha("AutomationLaneBackground", s(N1), 0xb3),
    stop("AutomationLaneHeader", N5),
    role("AutomationMouseOver", TextPrimary),
    semantic("ModulationColor", 0x00_c8ff, 0x00_8fc2),
    alpha("ModulationDisabled", lit(0x00_c8ff), 0x66),
    // ── Loop & locators ──────────────────────────────────────────────
    role("LoopColor", AccentPrimary),
    alpha("LoopBraceBackground", r(AccentPrimary), 0x40),
    role("LocatorMarker", TextPrimary),
    stop("LocatorMarkerStandby", N9),
    role("PunchInOutMarker", AccentSecondary),
    role("StartMarker", AccentPrimary),
    role("EndMarker", AccentPrimary),
    // ── Waveforms & notes ────────────────────────────────────────────
    tone("WaveformColor", s(N0), s(N0)),
    alpha("DimmedWaveformColor", s(N0), 0x66),
    role("AbletonColor", AccentPrimary),
    stop("VelocityColor", N10),
    role("VelocitySelectedOrHovered", AccentPrimary),
    role("NoteProbability", AccentSecondary),
    stop("NoteBorderStandby", N3),
    stop("NoteDisabled", N9),
    role("NoteSelected", SelectionBg),
    stop("MinVelocityNoteBlendColor", N6),
    stop("StripedBackgroundShadeColor", N4),
    role("NoteChordHighlight", AccentTertiary),
    stop("PianoBlackKey", N2),
    stop("PianoWhiteKey", N11),
    role("PianoKeyHighlight", AccentSecondary),
    stop("PianoRollBlackRow", N5),
    stop("PianoRollWhiteRow", N6),
    // ── Transport ────────────────────────────────────────────────────
    stop("TransportOffBackground", N4),
    stop("TransportOffDisabledForeground", N9),
    role("TransportOffForeground", TextPrimary),
    role("TransportSelectionBackground", SelectionBg),
    role("TransportOnForeground", SelectionFg),
    semantic("MetronomeOn", 0xff_b532, 0xf0_9a00),
    semantic("ArrangementRecordButton", 0xff_3636, 0xe5_2b2b),
    // ── Warping ──────────────────────────────────────────────────────
    stop("WarperTimeBarRulerBackground", N3),
    derived("WarperTimeBarMarkerBackground"),
    role("WarpMarker", AccentPrimary),
    stop("WarpMarkerStandby", N9b),
    alpha("TransientMarker", r(TextSecondary), 0x80),
    // ── Scrollbars ───────────────────────────────────────────────────
    alpha("ScrollbarInnerHandle", r(TextPrimary), 0x40),
    alpha("ScrollbarInnerTrack", lit(0x00_0000), 0x1a),
    stop("ScrollbarLCDHandle", N9),
    stop("ScrollbarLCDTrack", N2),
    alpha("ScrollbarOuterHandle", r(TextPrimary), 0x59),
    alpha("ScrollbarOuterTrack", lit(0x00_0000), 0x26),
    // ── Meters ───────────────────────────────────────────────────────
    stop("MeterBackground", N1),
    semantic("Alert", 0xe7_6942, 0xd5_1c00),
    semantic("ClipWarning", 0xff_b532, 0xe8_8a00),
    semantic("PeakLevelClip", 0xff_2a2a, 0xe0_1010),
    fixed("WhiteText", 0xff_ffff),
    fixed("BlackText", 0x00_0000),
    fixed_alpha("TransparentOverlay", 0x00_0000, 0x00),
    fixed_alpha("DisabledContextMenuIcon", 0xff_ffff, 0x4d),
    // ── Extensions ───────────────────────────────────────────────────
    role("AccentTertiary", AccentTertiary),
    role("SecondarySurfaceBackground", SurfaceSecondary),
    alpha("AccentTertiaryOverlay", r(AccentTertiary), 0x40),
];
