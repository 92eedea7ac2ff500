use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

mod app;
mod command;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal minesweeper with replay review", long_about = None)]
pub(crate) struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Preset board to start on
    #[arg(short, long, value_enum)]
    difficulty: Option<settings::Preset>,

    /// Rows of a custom board, needs --cols and --mines
    #[arg(long, requires_all = ["cols", "mines"])]
    rows: Option<u32>,

    /// Columns of a custom board
    #[arg(long, requires_all = ["rows", "mines"])]
    cols: Option<u32>,

    /// Mines on a custom board
    #[arg(long, requires_all = ["rows", "cols"])]
    mines: Option<u32>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with default settings, command line values win
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every frame as JSON instead of a text grid
    #[arg(long)]
    json: bool,

    /// Refuse the `cheat` command
    #[arg(long)]
    no_cheats: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let file = match &args.config {
        Some(path) => settings::FileSettings::load(path)
            .with_context(|| format!("Could not load settings from {}", path.display()))?,
        None => Default::default(),
    };
    let settings = settings::Settings::resolve(&args, file)?;
    log::debug!("settings: {:?}", settings);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app::App::new(settings).run(stdin.lock(), stdout.lock())
}
