// SPDX-License-Identifier: MIT
//
// tinct: contrast-safe color themes from four colors or an image.
//
// This binary is a thin front end over the library crates:
//
//   tinct-color → 8-bit sRGB, HSL, hex parsing, WCAG contrast
//   tinct-theme → extraction, role selection/resolution, contrast
//                 correction, neutral scale, parameter derivation
//
// Every command ends in a ThemeData value that is printed as text or JSON:
//
//   image file ──decode, ≤400 px──▶ PixelBuffer ──extract──▶ palette
//       ──select──▶ SemanticColorRoles ──ThemeGenerator──▶ ThemeData
//
//   --surface/--text/--accent/--secondary or a preset name
//       ──────────▶ SemanticColorRoles ──ThemeGenerator──▶ ThemeData

mod cli;
mod error;
mod render;

fn main() {
    if let Err(error) = cli::run_from_env() {
        eprintln!("tinct: {error}");
        std::process::exit(error.exit_code());
    }
}
