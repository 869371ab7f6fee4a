use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "refractor", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Log engine diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Blend the image with its point-mirrored copy through a diamond mask.
    Reflect(ReflectArgs),
    /// Tile rotated copies of one wedge around the center.
    Kaleidoscope(KaleidoscopeArgs),
    /// Resample at randomly jittered polar coordinates.
    Distort(DistortArgs),
    /// Apply an effect described by a JSON file (`{"kind": ..., "params": {...}}`).
    Apply(ApplyArgs),
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct ReflectArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Diamond size as a fraction of the image.
    #[arg(long, default_value_t = refractor::defaults::DIAMOND_SIZE)]
    diamond_size: f32,

    /// Mask edge softness (Gaussian sigma in pixels).
    #[arg(long, default_value_t = refractor::defaults::EDGE_SOFTNESS)]
    edge_softness: f32,
}

#[derive(Parser, Debug)]
struct KaleidoscopeArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Number of rotated copies (>= 2).
    #[arg(long, default_value_t = refractor::defaults::SEGMENT_COUNT)]
    segments: u32,

    /// Clockwise phase offset in degrees.
    #[arg(long, default_value_t = refractor::defaults::ROTATION_DEGREES)]
    rotation: f32,
}

#[derive(Parser, Debug)]
struct DistortArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Refraction divisor; larger values tighten the jitter radius.
    #[arg(long, default_value_t = refractor::defaults::REFRACTION_COUNT)]
    refraction_count: f32,

    /// Jitter blend in [0, 1]; 0 leaves the image untouched.
    #[arg(long, default_value_t = refractor::defaults::REFRACTION_FOCUS)]
    focus: f32,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Effect description JSON.
    #[arg(long)]
    params: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (io, effect) = match cli.cmd {
        Command::Reflect(args) => (
            args.io,
            refractor::Effect::Reflection {
                diamond_size: args.diamond_size,
                edge_softness: args.edge_softness,
            },
        ),
        Command::Kaleidoscope(args) => (
            args.io,
            refractor::Effect::Kaleidoscope {
                segment_count: args.segments,
                rotation_degrees: args.rotation,
            },
        ),
        Command::Distort(args) => (
            args.io,
            refractor::Effect::Distortion {
                refraction_count: args.refraction_count,
                refraction_focus: args.focus,
                seed: args.seed,
            },
        ),
        Command::Apply(args) => {
            let spec = read_effect_json(&args.params)?;
            (args.io, refractor::parse_effect(&spec)?)
        }
    };

    run(&io, &effect)
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_effect_json(path: &Path) -> anyhow::Result<refractor::EffectSpec> {
    let f = File::open(path).with_context(|| format!("open effect '{}'", path.display()))?;
    let r = BufReader::new(f);
    let spec: refractor::EffectSpec =
        serde_json::from_reader(r).with_context(|| "parse effect JSON")?;
    Ok(spec)
}

fn run(io: &IoArgs, effect: &refractor::Effect) -> anyhow::Result<()> {
    let mut opts = refractor::EngineOpts::default();
    if let Some(n) = io.threads {
        opts = opts.with_threads(n)?;
    }

    let bytes = std::fs::read(&io.in_path)
        .with_context(|| format!("read image '{}'", io.in_path.display()))?;
    let png = refractor::process_image(&bytes, effect, &opts)
        .with_context(|| format!("apply {} to '{}'", effect.name(), io.in_path.display()))?;

    if let Some(parent) = io.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&io.out, png).with_context(|| format!("write png '{}'", io.out.display()))?;

    eprintln!("wrote {}", io.out.display());
    Ok(())
}
