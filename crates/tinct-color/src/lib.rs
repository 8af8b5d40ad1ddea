// SPDX-License-Identifier: MIT
//
// tinct-color: the color math underneath the tinct theme engine.
//
// Everything in tinct is expressed as 8-bit sRGB triples at rest and HSL
// while being manipulated. The theme pipeline never stores floating-point
// colors between stages: every derived role is rounded back to `Rgb`, so
// the exact bytes that get validated for contrast are the bytes that end
// up in the parameter table.
//
//   Rgb ──to_hsl──▶ Hsl ──(nudge l / s, interpolate h)──▶ Hsl ──from_hsl──▶ Rgb
//
// Contrast math follows WCAG 2.x relative luminance, evaluated directly on
// the 8-bit channels.
//
// All functions here are total. The only fallible entry point is hex
// parsing, which reports a `ParseColorError`.

pub mod color;
pub mod contrast;

#[cfg(feature = "serde")]
mod serde_impl;

pub use color::{Hsl, ParseColorError, Rgb, Rgba, hue_distance};
pub use contrast::{contrast_ratio, relative_luminance};
