// SPDX-License-Identifier: MIT
//
// Text and JSON output for the CLI.
//
// Text output is meant for a terminal: one section per pipeline stage,
// colors as lowercase hex. JSON output serializes the library types
// directly, so it carries everything the text output summarizes.

use std::io::{self, Write};

use serde::Serialize;
use tinct_theme::{ExtractedColor, PaletteSelection, Role, ThemeData};

/// `tinct image --json` payload.
#[derive(Debug, Serialize)]
pub struct ImageReport<'a> {
    pub palette: &'a [ExtractedColor],
    pub selection: &'a PaletteSelection,
    pub theme: &'a ThemeData,
}

// ─── Sections ───────────────────────────────────────────────────────────────

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{title}")?;
    writeln!(out, "{}", "─".repeat(title.chars().count()))
}

pub fn palette(out: &mut impl Write, colors: &[ExtractedColor], selection: &PaletteSelection) -> io::Result<()> {
    heading(out, "Palette")?;
    for c in colors {
        writeln!(
            out,
            "  {}  {:5.1}%  h{:>3.0} s{:>3.0} l{:>3.0}",
            c.hex(),
            c.percentage,
            c.hsl.h,
            c.hsl.s,
            c.hsl.l
        )?;
    }

    let debug = &selection.debug;
    heading(out, "Selection")?;
    writeln!(out, "  tone              {}", selection.roles.tone.name())?;
    writeln!(out, "  surface strategy  {}", debug.surface_strategy)?;
    writeln!(out, "  text contrast     {:.2}:1", debug.contrast_ratio)?;
    writeln!(out, "  accent saturation {:.0}", debug.primary_saturation)?;
    writeln!(out, "  accent separation {:.0}°", debug.secondary_hue_distance)
}

pub fn theme(out: &mut impl Write, theme: &ThemeData, show_parameters: bool) -> io::Result<()> {
    heading(out, "Roles")?;
    for &role in Role::all() {
        writeln!(out, "  {:<18} {}", role.name(), theme.roles.get(role))?;
    }

    heading(out, "Neutral scale")?;
    for (stop, color) in theme.neutral_scale.iter() {
        writeln!(out, "  {:<5} {color}", stop.name())?;
    }

    heading(out, "Contrast")?;
    for adj in &theme.contrast.adjustments {
        writeln!(out, "  adjusted {} {} → {} ({})", adj.role.name(), adj.from, adj.to, adj.label)?;
    }
    writeln!(out, "  {}", theme.contrast.report())?;

    heading(out, "Parameters")?;
    writeln!(out, "  {} generated, {} omitted", theme.parameters.len(), theme.parameters.omitted.len())?;
    for name in &theme.parameters.omitted {
        writeln!(out, "  omitted {name}")?;
    }
    if show_parameters {
        for (name, color) in theme.parameters.iter() {
            writeln!(out, "  {name:<40} {color}")?;
        }
    }
    Ok(())
}

pub fn json(out: &mut impl Write, value: &impl Serialize) -> crate::error::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_theme::{builtin_roles, generate_theme};

    fn render_theme(show_parameters: bool) -> String {
        let data = generate_theme(&builtin_roles("dark-neutral").unwrap()).unwrap();
        let mut out = Vec::new();
        theme(&mut out, &data, show_parameters).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_lists_every_role_and_stop() {
        let text = render_theme(false);
        for &role in Role::all() {
            assert!(text.contains(role.name()), "missing {}", role.name());
        }
        assert!(text.contains("n11b"));
        assert!(text.contains("236 generated, 0 omitted"));
        assert!(text.contains("All contrast checks passed."));
        assert!(text.contains("adjusted text_secondary #757575"));
    }

    #[test]
    fn parameters_only_on_request() {
        assert!(!render_theme(false).contains("ControlForeground"));
        assert!(render_theme(true).contains("ControlForeground"));
    }

    #[test]
    fn json_carries_the_parameter_map() {
        let data = generate_theme(&builtin_roles("steel-blue").unwrap()).unwrap();
        let mut out = Vec::new();
        json(&mut out, &data).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["parameters"].as_object().unwrap().len(), 236);
        assert_eq!(value["roles"]["surface_base"], "#2d3440");
        assert_eq!(value["roles"]["tone"], "dark");
    }
}
