use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aperture", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the built-in photographer page scene as JSON.
    Preset(PresetArgs),
    /// Replay a recorded event trace and print scene snapshots as JSON lines.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// JSON array of input events.
    #[arg(long)]
    trace: PathBuf,

    /// Scene config JSON (built-in preset when omitted).
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Seed for the preloader tick jitter. Unseeded runs differ from one another.
    #[arg(long)]
    seed: Option<u64>,

    /// Print a snapshot after every Nth frame event.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Preset(args) => cmd_preset(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let json = aperture::photographer_page().to_json_pretty()?;
    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&path, json + "\n")
                .with_context(|| format!("write scene '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let config = match &args.scene {
        Some(path) => read_scene_json(path)?,
        None => aperture::photographer_page(),
    };
    let events = read_trace_json(&args.trace)?;
    let mut scene = aperture::Scene::with_seed(config, args.seed)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut frames = 0u64;
    for event in events {
        let is_frame = matches!(event, aperture::InputEvent::Frame { .. });
        scene.handle(event);
        if !is_frame {
            continue;
        }
        frames += 1;
        if frames % args.every == 0 {
            serde_json::to_writer(&mut out, &scene.snapshot()).context("encode snapshot")?;
            writeln!(out).context("write snapshot")?;
        }
    }
    scene.unmount();
    out.flush().context("flush snapshots")?;

    tracing::debug!(frames, "replay finished");
    Ok(())
}

fn read_scene_json(path: &Path) -> anyhow::Result<aperture::SceneConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("open scene '{}'", path.display()))?;
    aperture::SceneConfig::from_json_str(&s)
        .with_context(|| format!("load scene '{}'", path.display()))
}

fn read_trace_json(path: &Path) -> anyhow::Result<Vec<aperture::InputEvent>> {
    let f = File::open(path).with_context(|| format!("open trace '{}'", path.display()))?;
    let r = BufReader::new(f);
    let events: Vec<aperture::InputEvent> =
        serde_json::from_reader(r).with_context(|| "parse trace JSON")?;
    Ok(events)
}
