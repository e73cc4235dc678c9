use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "displaywall", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize a persisted display record as a PNG.
    Render(RenderArgs),
    /// Report queued lines that do not decode under the record's mode.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input display record JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Font for `text` commands, as `name=path`. The first one is the fallback.
    #[arg(long = "font", value_parser = parse_font_arg)]
    fonts: Vec<(String, PathBuf)>,

    /// Glyph atlas PNG for text-grid displays.
    #[arg(long, requires = "glyphs")]
    atlas: Option<PathBuf>,

    /// Glyph metrics JSON matching `--atlas`.
    #[arg(long, requires = "atlas")]
    glyphs: Option<PathBuf>,

    /// Display config JSON; defaults apply otherwise.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input display record JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn parse_font_arg(s: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=path, got '{s}'"))?;
    if name.is_empty() || path.is_empty() {
        return Err(format!("expected name=path, got '{s}'"));
    }
    Ok((name.to_owned(), PathBuf::from(path)))
}

fn read_surface_json(path: &Path) -> anyhow::Result<displaywall::DisplaySurface> {
    let f = File::open(path).with_context(|| format!("open display record '{}'", path.display()))?;
    let r = BufReader::new(f);
    let surface: displaywall::DisplaySurface =
        serde_json::from_reader(r).with_context(|| "parse display record JSON")?;
    Ok(surface)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let surface = read_surface_json(&args.in_path)?;
    let config = match &args.config {
        Some(p) => displaywall::DisplayConfig::from_path(p)?,
        None => displaywall::DisplayConfig::from_env(),
    };

    let mut fonts = displaywall::FontBook::new();
    for (name, path) in &args.fonts {
        fonts.load(name, path)?;
    }
    let atlas = match (&args.atlas, &args.glyphs) {
        (Some(image), Some(glyphs)) => Some(displaywall::GlyphAtlas::load(
            image,
            glyphs,
            config.glyph_cell_width,
        )?),
        _ => None,
    };

    let mut registry = displaywall::RendererRegistry::with_defaults(&config, fonts, atlas);
    let frame = registry.rasterize(surface.mode.as_deref(), &surface.data);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {} ({}x{})", args.out.display(), frame.width, frame.height);
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let surface = read_surface_json(&args.in_path)?;
    let Some(mode) = surface.mode.as_deref() else {
        eprintln!("display has no mode; {} queued lines", surface.data.len());
        return Ok(());
    };
    let mode: displaywall::DisplayMode = mode.parse()?;

    let mut bad = 0usize;
    if mode.kind == displaywall::SurfaceKind::Graphics {
        for (i, line) in surface.data.iter().enumerate() {
            if let Err(e) = displaywall::DrawCommand::decode(line) {
                eprintln!("line {i}: {e}");
                bad += 1;
            }
        }
    } else {
        if surface.data.len() > mode.height as usize {
            eprintln!(
                "{} rows queued for a {}-row grid",
                surface.data.len(),
                mode.height
            );
            bad += 1;
        }
        for (i, row) in surface.data.iter().enumerate() {
            let len = row.chars().count();
            if len > mode.width as usize {
                eprintln!("row {i}: {len} characters exceed {} columns", mode.width);
                bad += 1;
            }
        }
    }

    if bad > 0 {
        anyhow::bail!("{bad} problem(s) in '{}'", args.in_path.display());
    }
    eprintln!("ok: {mode}, {} queued lines", surface.data.len());
    Ok(())
}
