use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "termsvg", version, about = "Render scripted terminal sessions as animated SVG")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a script to an animated SVG.
    Render(RenderArgs),
    /// Print the animation timeline of a script as JSON.
    Frames(FramesArgs),
    /// Render the final terminal state as a PNG poster.
    Snapshot(SnapshotArgs),
    /// Draw an ASCII box around the given lines.
    Box(BoxArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Parse the generated document before writing it.
    #[arg(long, default_value_t = false)]
    verify: bool,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SnapshotArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct BoxArgs {
    /// Border style: `double` or `rounded`.
    #[arg(long, default_value = "double")]
    style: String,

    /// Total width in cells.
    #[arg(long, default_value_t = 56)]
    width: usize,

    /// Content lines.
    lines: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Snapshot(args) => cmd_snapshot(args),
        Command::Box(args) => cmd_box(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let script = termsvg::Script::read(&args.in_path)?;
    let svg = termsvg::render_script(&script)?;

    if args.verify {
        let stats = termsvg::verify_svg(&svg)?;
        eprintln!("verified:");
        eprintln!("  size:       {}x{}", stats.width, stats.height);
        eprintln!("  text_nodes: {}", stats.text_nodes);
    }

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let script = termsvg::Script::read(&args.in_path)?;
    script.validate()?;
    let opts = termsvg::TimelineOpts::from_config(&script.config());
    let timeline = termsvg::build_timeline(&script.sequences, &opts)?;

    let json = serde_json::to_string_pretty(&timeline).context("serialize timeline")?;
    println!("{json}");
    Ok(())
}

fn cmd_snapshot(args: SnapshotArgs) -> anyhow::Result<()> {
    let script = termsvg::Script::read(&args.in_path)?;
    script.validate()?;
    let config = script.config();
    let timeline =
        termsvg::build_timeline(&script.sequences, &termsvg::TimelineOpts::from_config(&config))?;
    let img = termsvg::rasterize_snapshot(&config, &timeline)?;

    ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &img.to_straight_rgba(),
        img.width,
        img.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_box(args: BoxArgs) -> anyhow::Result<()> {
    let out = termsvg::boxes::draw_box_named(&args.lines, &args.style, args.width)?;
    println!("{out}");
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
