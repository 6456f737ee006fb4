use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use folio_motion::{
    ManualScheduler, NodeId, PageConfig, ParallaxFrame, RecordingSink, RevealState,
    RevealTransition, ScrollDirection, SectionMotion, Size,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "folio-motion", version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a page config.
    Validate(InArgs),
    /// Solve the page's radial stage and print placements as JSON.
    Radial(InArgs),
    /// Sample every parallax layer over a sweep of top offsets.
    Parallax(ParallaxArgs),
    /// Drive scroll telemetry and reveal over a list of scroll offsets.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct InArgs {
    /// Input page config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ParallaxArgs {
    /// Input page config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 800.0)]
    viewport_height: f64,

    /// First sampled top offset of the reference element.
    #[arg(long, allow_negative_numbers = true)]
    from: f64,

    /// Last sampled top offset of the reference element.
    #[arg(long, allow_negative_numbers = true)]
    to: f64,

    /// Number of intervals between `from` and `to`.
    #[arg(long, default_value_t = 10)]
    steps: u32,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input page config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll offsets to visit, in order.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
    offsets: Vec<f64>,

    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280.0)]
    viewport_width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 800.0)]
    viewport_height: f64,

    /// Leave exiting targets in `leaving` instead of finishing their motion.
    #[arg(long, default_value_t = false)]
    hold_exits: bool,
}

#[derive(serde::Serialize)]
struct LayerSweep {
    node: NodeId,
    samples: Vec<SweepSample>,
}

#[derive(serde::Serialize)]
struct SweepSample {
    top: f64,
    frame: ParallaxFrame,
}

#[derive(serde::Serialize)]
struct SimulationStep {
    offset: f64,
    direction: ScrollDirection,
    transitions: Vec<RevealTransition>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Radial(args) => cmd_radial(args),
        Command::Parallax(args) => cmd_parallax(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load(path: &Path) -> anyhow::Result<PageConfig> {
    PageConfig::from_path(path).with_context(|| format!("load page config '{}'", path.display()))
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{out}");
    Ok(())
}

fn cmd_validate(args: InArgs) -> anyhow::Result<()> {
    let page = load(&args.in_path)?;
    println!(
        "ok: {} reveal targets, {} parallax layers, radial stage: {}",
        page.targets.len(),
        page.parallax.len(),
        if page.radial.is_some() { "yes" } else { "no" }
    );
    Ok(())
}

fn cmd_radial(args: InArgs) -> anyhow::Result<()> {
    let page = load(&args.in_path)?;
    let placements = page
        .solve_radial()
        .with_context(|| format!("'{}' has no radial stage", args.in_path.display()))?;
    print_json(&placements)
}

fn cmd_parallax(args: ParallaxArgs) -> anyhow::Result<()> {
    if !(args.viewport_height.is_finite() && args.from.is_finite() && args.to.is_finite()) {
        anyhow::bail!("viewport height and sweep bounds must be finite");
    }
    let page = load(&args.in_path)?;
    let vh = args.viewport_height;
    let steps = args.steps.max(1);

    let sweeps: Vec<_> = page
        .parallax
        .iter()
        .map(|layer| {
            let height = layer.bounds.map_or(vh, |b| b.height());
            let samples = (0..=steps)
                .map(|i| {
                    let top = args.from + (args.to - args.from) * f64::from(i) / f64::from(steps);
                    let p = layer.profile.progress(top, height, vh);
                    SweepSample {
                        top,
                        frame: layer.profile.sample(p),
                    }
                })
                .collect();
            LayerSweep {
                node: layer.node,
                samples,
            }
        })
        .collect();
    print_json(&sweeps)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let page = load(&args.in_path)?;
    let viewport = Size::new(args.viewport_width, args.viewport_height);
    let mut doc = page.layout_document(viewport);
    let mut sink = RecordingSink::new();
    let mut scheduler = ManualScheduler::new();
    let mut section = SectionMotion::mount(&page, &mut sink, &mut scheduler);

    let mut steps = Vec::with_capacity(args.offsets.len());
    for &offset in &args.offsets {
        doc.scroll_to(Some(offset));
        let mut transitions = section.on_scroll(&doc, &mut sink);
        if !args.hold_exits {
            let leaving: Vec<_> = transitions
                .iter()
                .filter(|t| t.to == RevealState::Leaving)
                .map(|t| t.target)
                .collect();
            for id in leaving {
                transitions.extend(section.on_motion_end(id, &mut sink));
            }
        }
        for due in scheduler.advance() {
            section.on_frame(due, &doc, &mut sink, &mut scheduler);
        }
        steps.push(SimulationStep {
            offset,
            direction: section.scroll_state().direction,
            transitions,
        });
    }
    section.unmount(&mut sink, &mut scheduler);
    print_json(&steps)
}
