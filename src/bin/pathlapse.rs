use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use pathlapse::{
    Aggregation, Animation, EntityKind, FfmpegSink, FfmpegSinkOpts, FrameSink, LevelFile,
    PngSequenceSink, RenderConfig, RenderInputs, Rgb8, TimeMapping,
};

#[derive(Parser, Debug)]
#[command(name = "pathlapse", version, about = "Render pathway activity time-lapses")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the whole animation to an MP4 (requires `ffmpeg` on PATH) or a PNG sequence.
    Render(RenderArgs),
    /// Render the frame shown at one point in time as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// KGML pathway description.
    #[arg(long)]
    kgml: PathBuf,

    /// Background pathway image (PNG, ...).
    #[arg(long)]
    image: PathBuf,

    /// Gene level CSV (repeatable).
    #[arg(long = "genes")]
    genes: Vec<PathBuf>,

    /// Compound level CSV (repeatable).
    #[arg(long = "compounds")]
    compounds: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// JSON render config; flags given on the command line override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// How levels of entities sharing one box are combined.
    #[arg(long, value_enum)]
    aggregation: Option<AggregationChoice>,

    /// Color of level 0 as `r,g,b`.
    #[arg(long)]
    start_color: Option<Rgb8>,

    /// Color of level 0.5 as `r,g,b`.
    #[arg(long)]
    mid_color: Option<Rgb8>,

    /// Color of level 1 as `r,g,b`.
    #[arg(long)]
    end_color: Option<Rgb8>,

    /// Gaussian blur radius of overlay edges in pixels.
    #[arg(long)]
    blur: Option<u32>,

    /// Overlay transparency, 0 (opaque) to 255 (invisible).
    #[arg(long)]
    transparency: Option<u8>,

    /// Overlay size multiplier (>= 1.0).
    #[arg(long)]
    scale: Option<f64>,

    /// Output frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Output length in seconds (default: number of time points).
    #[arg(long)]
    duration: Option<u32>,

    /// Spread the measured time points evenly over the whole duration.
    #[arg(long)]
    stretch_time: bool,

    /// Seed for `random` aggregation.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    style: StyleArgs,

    /// Output MP4 path.
    #[arg(long, required_unless_present = "frames_dir", conflicts_with = "frames_dir")]
    out: Option<PathBuf>,

    /// Write numbered PNG frames into this directory instead of an MP4.
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Fail instead of replacing an existing MP4.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    style: StyleArgs,

    /// Output time in seconds.
    #[arg(long)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AggregationChoice {
    Mean,
    Median,
    Lowest,
    Highest,
    Random,
}

impl From<AggregationChoice> for Aggregation {
    fn from(c: AggregationChoice) -> Self {
        match c {
            AggregationChoice::Mean => Self::Mean,
            AggregationChoice::Median => Self::Median,
            AggregationChoice::Lowest => Self::Lowest,
            AggregationChoice::Highest => Self::Highest,
            AggregationChoice::Random => Self::Random,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct Loaded {
    pathway: pathlapse::Pathway,
    levels: pathlapse::LevelTable,
    background: image::RgbImage,
}

impl Loaded {
    fn inputs(&self) -> RenderInputs<'_> {
        RenderInputs {
            pathway: &self.pathway,
            levels: &self.levels,
            background: &self.background,
        }
    }
}

fn load_inputs(args: &InputArgs) -> anyhow::Result<Loaded> {
    if args.genes.is_empty() && args.compounds.is_empty() {
        anyhow::bail!("at least one --genes or --compounds file is required");
    }

    let pathway = pathlapse::load_kgml(&args.kgml)
        .with_context(|| format!("load pathway '{}'", args.kgml.display()))?;

    let mut files: Vec<LevelFile> = Vec::new();
    for (paths, kind) in [
        (&args.genes, EntityKind::Gene),
        (&args.compounds, EntityKind::Compound),
    ] {
        for path in paths {
            files.push(
                pathlapse::load_level_csv(path, kind)
                    .with_context(|| format!("load levels '{}'", path.display()))?,
            );
        }
    }
    let levels = pathlapse::build_level_table(&files, &pathway.organism)
        .context("combine level files")?;

    let background = image::open(&args.image)
        .with_context(|| format!("open background image '{}'", args.image.display()))?
        .to_rgb8();

    tracing::info!(
        pathway = %pathway.name,
        elements = pathway.associations.len(),
        entities = levels.len(),
        timepoints = levels.time_points().len(),
        "inputs loaded"
    );
    Ok(Loaded {
        pathway,
        levels,
        background,
    })
}

fn build_config(style: &StyleArgs) -> anyhow::Result<RenderConfig> {
    let mut cfg = match &style.config {
        Some(path) => RenderConfig::from_path(path)?,
        None => RenderConfig::default(),
    };
    if let Some(a) = style.aggregation {
        cfg.aggregation = a.into();
    }
    if let Some(c) = style.start_color {
        cfg.colors.start = c;
    }
    if let Some(c) = style.mid_color {
        cfg.colors.mid = c;
    }
    if let Some(c) = style.end_color {
        cfg.colors.end = c;
    }
    if let Some(b) = style.blur {
        cfg.blur_radius = b;
    }
    if let Some(t) = style.transparency {
        cfg.transparency = t;
    }
    if let Some(s) = style.scale {
        cfg.scale = s;
    }
    if let Some(f) = style.fps {
        cfg.fps = f;
    }
    if style.duration.is_some() {
        cfg.duration_secs = style.duration;
    }
    if style.stretch_time {
        cfg.time_mapping = TimeMapping::Stretch;
    }
    if style.seed.is_some() {
        cfg.seed = style.seed;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args.style)?;
    let loaded = load_inputs(&args.input)?;

    let (mut sink, dest): (Box<dyn FrameSink>, &Path) = match (&args.out, &args.frames_dir) {
        (_, Some(dir)) => (Box::new(PngSequenceSink::new(dir)), dir.as_path()),
        (Some(out), None) => {
            let mut opts = FfmpegSinkOpts::new(out);
            opts.overwrite = !args.no_overwrite;
            (Box::new(FfmpegSink::new(opts)), out.as_path())
        }
        (None, None) => anyhow::bail!("either --out or --frames-dir is required"),
    };

    let stats = pathlapse::render(loaded.inputs(), &cfg, sink.as_mut())
        .with_context(|| format!("render '{}'", dest.display()))?;

    eprintln!(
        "wrote {} ({} frames, {} colored elements)",
        dest.display(),
        stats.frames_total,
        stats.elements_colored
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args.style)?;
    let loaded = load_inputs(&args.input)?;

    let mut rng = pathlapse::make_rng(cfg.seed);
    let animation = Animation::prepare(loaded.inputs(), &cfg, &mut rng)?;
    let frame = animation.frame_at(args.time)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
