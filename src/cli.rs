// SPDX-License-Identifier: MIT

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use image::GenericImageView;
use image::imageops::FilterType;
use tinct_color::Rgb;
use tinct_theme::{
    ContrastLevel, ExtractionOptions, PixelBuffer, RuleTable, SelectionOptions, SemanticColorRoles, ThemeConfig,
    ThemeData, ThemeGenerator, Tone, VariantMode, builtin_names, builtin_roles, extract_colors, select_palette,
};
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, Result};
use crate::render;

/// Longest image side fed to extraction; larger images are downscaled.
const MAX_IMAGE_SIDE: u32 = 400;

#[derive(Debug, Parser)]
#[command(name = "tinct", about = "Generate contrast-safe color themes from four colors or an image", version)]
pub struct Cli {
    /// More logging: -v for debug, -vv for trace. `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract a palette from an image and build a theme from it.
    Image(ImageArgs),

    /// Build a theme from explicit anchor colors.
    Roles(RolesArgs),

    /// Build a theme from a named preset.
    Preset(PresetArgs),

    /// Print preset names.
    Presets,
}

/// Options shared by every theme-producing command.
#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// How far derived surfaces move from the base: low, medium, high, very-high.
    #[arg(long, value_parser = parse_level)]
    pub contrast_level: Option<ContrastLevel>,

    /// JSON theme configuration; missing fields take builtin values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON parameter rule table replacing the builtin one.
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Fail (exit 2) when a contrast requirement cannot be met.
    #[arg(long)]
    pub strict: bool,

    /// List every parameter in text output.
    #[arg(long)]
    pub parameters: bool,
}

#[derive(Debug, Args)]
pub struct ImageArgs {
    pub path: PathBuf,

    /// Force the tone instead of inferring it from the dominant color.
    #[arg(long, value_parser = parse_tone)]
    pub tone: Option<Tone>,

    /// Surface policy: faithful, muted or atmospheric.
    #[arg(long, value_parser = parse_variant, default_value = "faithful")]
    pub variant: VariantMode,

    /// Number of median-cut buckets.
    #[arg(long, default_value_t = 10)]
    pub colors: usize,

    /// Skip promoting small saturated regions into the palette.
    #[arg(long)]
    pub no_rescue: bool,

    #[command(flatten)]
    pub theme: ThemeArgs,
}

#[derive(Debug, Args)]
pub struct RolesArgs {
    #[arg(long, value_parser = parse_tone, default_value = "dark")]
    pub tone: Tone,
    #[arg(long)]
    pub surface: Rgb,
    #[arg(long)]
    pub text: Rgb,
    #[arg(long)]
    pub accent: Rgb,
    #[arg(long)]
    pub secondary: Rgb,

    #[command(flatten)]
    pub theme: ThemeArgs,
}

#[derive(Debug, Args)]
pub struct PresetArgs {
    pub name: String,

    #[command(flatten)]
    pub theme: ThemeArgs,
}

fn parse_tone(s: &str) -> std::result::Result<Tone, String> {
    Tone::from_name(s).ok_or_else(|| format!("expected dark or light, got {s:?}"))
}

fn parse_level(s: &str) -> std::result::Result<ContrastLevel, String> {
    ContrastLevel::from_name(s).ok_or_else(|| format!("expected low, medium, high or very-high, got {s:?}"))
}

fn parse_variant(s: &str) -> std::result::Result<VariantMode, String> {
    VariantMode::from_name(s).ok_or_else(|| format!("expected faithful, muted or atmospheric, got {s:?}"))
}

// ─── Entry points ───────────────────────────────────────────────────────────

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli, &mut io::stdout().lock())
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Image(args) => run_image(&args, cli.json, out),
        Commands::Roles(args) => {
            let input = SemanticColorRoles::new(args.tone, args.surface, args.text, args.accent, args.secondary);
            emit_theme(&generate(input, &args.theme)?, &args.theme, cli.json, out)
        }
        Commands::Preset(args) => {
            let input = builtin_roles(&args.name).ok_or_else(|| CliError::UnknownPreset { name: args.name.clone() })?;
            emit_theme(&generate(input, &args.theme)?, &args.theme, cli.json, out)
        }
        Commands::Presets => {
            for name in builtin_names() {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
    }
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn run_image(args: &ImageArgs, json: bool, out: &mut impl Write) -> Result<()> {
    let image = load_image(&args.path)?;
    let (width, height) = image.dimensions();
    let pixels = PixelBuffer::new(width, height, image.as_raw())?;

    let options = ExtractionOptions {
        color_count: args.colors,
        rescue_outliers: !args.no_rescue,
        ..ExtractionOptions::default()
    };
    let colors = extract_colors(&pixels, &options)?;
    let selection = select_palette(
        &colors,
        &SelectionOptions {
            tone: args.tone,
            variant: args.variant,
        },
    )?;
    let theme = generate(selection.roles.clone(), &args.theme)?;

    if json {
        render::json(
            out,
            &render::ImageReport {
                palette: &colors,
                selection: &selection,
                theme: &theme,
            },
        )
    } else {
        render::palette(out, &colors, &selection)?;
        render::theme(out, &theme, args.theme.parameters)?;
        Ok(())
    }
}

/// Decode `path` and shrink it so neither side exceeds [`MAX_IMAGE_SIDE`].
fn load_image(path: &Path) -> Result<image::RgbaImage> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = image.dimensions();
    let image = if width.max(height) > MAX_IMAGE_SIDE {
        tracing::debug!(width, height, max = MAX_IMAGE_SIDE, "downscaling image");
        image.resize(MAX_IMAGE_SIDE, MAX_IMAGE_SIDE, FilterType::Triangle)
    } else {
        image
    };
    Ok(image.to_rgba8())
}

fn load_config(args: &ThemeArgs) -> Result<ThemeConfig> {
    let mut config = match &args.config {
        Some(path) => ThemeConfig::from_json(&read_text(path)?)?,
        None => ThemeConfig::default(),
    };
    if let Some(path) = &args.rules {
        config = config.with_rules(RuleTable::from_json(&read_text(path)?)?);
    }
    if args.strict {
        config = config.with_strict_contrast(true);
    }
    Ok(config)
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn generate(input: SemanticColorRoles, args: &ThemeArgs) -> Result<ThemeData> {
    let input = match args.contrast_level {
        Some(level) => input.with_contrast_level(level),
        None => input,
    };
    let generator = ThemeGenerator::new(load_config(args)?);
    Ok(generator.generate(&input)?)
}

fn emit_theme(theme: &ThemeData, args: &ThemeArgs, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        render::json(out, theme)
    } else {
        render::theme(out, theme, args.parameters)?;
        Ok(())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
