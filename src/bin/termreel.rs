use std::fs::File;
use std::io::{BufReader, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "termreel", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    /// Pretty-print JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pretty: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered compositions.
    Compositions(SceneArgs),
    /// Print the phase markers of a composition.
    Timeline(CompositionArgs),
    /// Evaluate a single frame.
    Frame(FrameArgs),
    /// Evaluate a frame range.
    Frames(FramesArgs),
    /// Replay page events and print the resulting commands.
    Page(PageArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Scene configuration JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CompositionArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Composition id (MacOSTerminal, Logo, Master).
    #[arg(long, short)]
    composition: termreel::CompositionId,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    target: CompositionArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    target: CompositionArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the composition duration.
    #[arg(long)]
    end: Option<u64>,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Page document snapshot JSON.
    #[arg(long)]
    document: PathBuf,

    /// JSON array of page events.
    #[arg(long)]
    events: PathBuf,

    /// Layout snapshot JSON; an empty viewport when omitted.
    #[arg(long)]
    viewport: Option<PathBuf>,

    /// Page configuration JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct CompositionInfo {
    id: termreel::CompositionId,
    fps: termreel::Fps,
    canvas: termreel::Canvas,
    duration_frames: u64,
}

#[derive(serde::Serialize)]
struct PageStep {
    event: termreel::PageEvent,
    commands: Vec<termreel::PageCommand>,
}

#[derive(serde::Serialize)]
struct PageReplay {
    features: Vec<&'static str>,
    init: Vec<termreel::PageCommand>,
    steps: Vec<PageStep>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let pretty = cli.pretty;
    match cli.cmd {
        Command::Compositions(args) => cmd_compositions(args, pretty),
        Command::Timeline(args) => cmd_timeline(args, pretty),
        Command::Frame(args) => cmd_frame(args, pretty),
        Command::Frames(args) => cmd_frames(args, pretty),
        Command::Page(args) => cmd_page(args, pretty),
    }
}

fn init_logging(verbose: bool) {
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

fn load_scene(args: &SceneArgs) -> anyhow::Result<termreel::SceneConfig> {
    match &args.config {
        Some(path) => termreel::SceneConfig::from_path(path)
            .with_context(|| format!("load scene config '{}'", path.display())),
        None => Ok(termreel::SceneConfig::default()),
    }
}

fn load_composition(args: &CompositionArgs) -> anyhow::Result<termreel::Composition> {
    let config = load_scene(&args.scene)?;
    termreel::Composition::new(args.composition, config)
        .with_context(|| format!("build composition '{}'", args.composition))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse {what} '{}'", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout).context("write stdout")?;
    Ok(())
}

fn cmd_compositions(args: SceneArgs, pretty: bool) -> anyhow::Result<()> {
    let config = load_scene(&args)?;
    let infos: Vec<CompositionInfo> = termreel::Composition::registry(&config)?
        .iter()
        .map(|c| CompositionInfo {
            id: c.id(),
            fps: c.fps(),
            canvas: c.canvas(),
            duration_frames: c.duration().0,
        })
        .collect();
    print_json(&infos, pretty)
}

fn cmd_timeline(args: CompositionArgs, pretty: bool) -> anyhow::Result<()> {
    let comp = load_composition(&args)?;
    print_json(&comp.markers(), pretty)
}

fn cmd_frame(args: FrameArgs, pretty: bool) -> anyhow::Result<()> {
    let comp = load_composition(&args.target)?;
    let frame = termreel::Evaluator::eval_frame(&comp, termreel::FrameIndex(args.frame))?;
    print_json(&frame, pretty)
}

fn cmd_frames(args: FramesArgs, pretty: bool) -> anyhow::Result<()> {
    let comp = load_composition(&args.target)?;
    let end = args.end.unwrap_or(comp.duration().0);
    let range =
        termreel::FrameRange::new(termreel::FrameIndex(args.start), termreel::FrameIndex(end))?;

    let frames = match args.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("build rayon thread pool")?
            .install(|| termreel::Evaluator::eval_range(&comp, range))?,
        None => termreel::Evaluator::eval_range(&comp, range)?,
    };
    print_json(&frames, pretty)
}

fn cmd_page(args: PageArgs, pretty: bool) -> anyhow::Result<()> {
    let doc = termreel::PageDocument::from_path(&args.document)
        .with_context(|| format!("load page document '{}'", args.document.display()))?;
    let config = match &args.config {
        Some(path) => termreel::PageConfig::from_path(path)
            .with_context(|| format!("load page config '{}'", path.display()))?,
        None => termreel::PageConfig::default(),
    };
    let events: Vec<termreel::PageEvent> = read_json(&args.events, "page events")?;
    let mut viewport: termreel::StaticViewport = match &args.viewport {
        Some(path) => read_json(path, "viewport")?,
        None => termreel::StaticViewport::default(),
    };

    let (mut page, init) = termreel::Page::init(&doc, config);
    let mut steps = Vec::with_capacity(events.len());
    for event in events {
        if let termreel::PageEvent::Scroll { y } = event {
            viewport.scroll_y = y;
        }
        let commands = page.handle(&event, &viewport);
        steps.push(PageStep { event, commands });
    }

    print_json(
        &PageReplay {
            features: page.features(),
            init,
            steps,
        },
        pretty,
    )
}
