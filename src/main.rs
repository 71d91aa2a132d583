use std::{io::Write, path::PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use tracing::Level;
use unicode_width::UnicodeWidthChar;

use signmaze::{
    Coord, Maze,
    generators::{FrontierOrder, GeneratorConfig, generate_maze},
    logging,
    render::{self, Charset, RenderOptions},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FrontierArg {
    /// Expand turns and branch points before resuming a corridor
    BranchFirst,
    /// Keep carving the newest corridor, return to branch points when stalled
    CorridorFirst,
}

impl From<FrontierArg> for FrontierOrder {
    fn from(arg: FrontierArg) -> Self {
        match arg {
            FrontierArg::BranchFirst => FrontierOrder::BranchFirst,
            FrontierArg::CorridorFirst => FrontierOrder::CorridorFirst,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CharsetArg {
    Box,
    Ascii,
}

impl From<CharsetArg> for Charset {
    fn from(arg: CharsetArg) -> Self {
        match arg {
            CharsetArg::Box => Charset::Box,
            CharsetArg::Ascii => Charset::Ascii,
        }
    }
}

/// Generate a perfect maze and print it as text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Maze height in cells
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// Random seed for a reproducible maze
    #[arg(long)]
    seed: Option<u64>,

    /// Start cell as `x,y`
    #[arg(long, value_parser = parse_coord, default_value = "0,0")]
    start: Coord,

    /// Order in which pending cells are expanded
    #[arg(long, value_enum, default_value_t = FrontierArg::CorridorFirst)]
    frontier: FrontierArg,

    /// Glyph set used to draw passages
    #[arg(long, value_enum, default_value_t = CharsetArg::Box)]
    charset: CharsetArg,

    /// Print row and column indices
    #[arg(long)]
    axes: bool,

    /// Color cells by their role
    #[arg(long)]
    color: bool,

    /// Glyph for cells left unconnected
    #[arg(long, default_value_t = '?')]
    hole: char,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Maximum log level
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{}`", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u16>()
            .map_err(|e| format!("invalid coordinate `{}`: {}", v, e))
    };
    Ok((parse(x)?, parse(y)?))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = logging::init(args.log_level, args.log_file.as_deref())?;

    if args.hole.width() != Some(1) {
        bail!("hole glyph {:?} must be exactly one column wide", args.hole);
    }

    let mut maze = Maze::new(args.width, args.height).context("Cannot create maze")?;
    if !maze.is_in_bounds(args.start) {
        bail!(
            "start cell {:?} is outside the {}x{} maze",
            args.start,
            args.width,
            args.height
        );
    }

    let config = GeneratorConfig {
        start: args.start,
        frontier_order: args.frontier.into(),
        ..Default::default()
    };
    tracing::info!(
        "Generating {}x{} maze from {:?} ({}, seed {:?})",
        args.width,
        args.height,
        config.start,
        config.frontier_order,
        args.seed
    );
    generate_maze(&mut maze, &config, args.seed);
    tracing::info!("Generation finished: {}", maze.stats());

    let options = RenderOptions {
        charset: args.charset.into(),
        axes: args.axes,
        hole: args.hole,
    };
    let text = if args.color {
        render::render_colored(&maze, &options)
    } else {
        render::render(&maze, &options)
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write maze to stdout")?;
    eprintln!(
        "{}x{} maze, {} passages: {}",
        maze.width(),
        maze.height(),
        maze.edge_count(),
        maze.stats()
    );
    Ok(())
}
