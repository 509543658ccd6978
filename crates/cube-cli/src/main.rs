mod app;
mod config;
mod render;
mod theme;

use app::App;
use clap::{Parser, Subcommand};
use config::Config;
use render::Renderer;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use theme::Theme;

#[derive(Parser)]
#[command(name = "cube")]
#[command(about = "Solve, scramble and validate 3x3 cube move sequences")]
#[command(version)]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scramble a solved cube with MOVES and solve it
    Solve {
        /// Move sequence, e.g. R U R' U'
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,
    },
    /// Print a random scramble and the state it produces
    Scramble {
        /// Number of moves (1-100)
        #[arg(long, short)]
        length: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(long, short)]
        seed: Option<u64>,
    },
    /// Check move-sequence grammar without solving
    Validate {
        moves: Vec<String>,
    },
    /// Solve a fixed set of demonstration scrambles
    Demo,
    /// Read scrambles from standard input until `quit`
    Interactive,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::load();

    let colored = config.color && !cli.no_color && !cli.json && io::stdout().is_terminal();
    let theme = colored.then(|| Theme::named(config.theme));
    let app = App::new(config, Renderer::new(theme), cli.json);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Solve { moves } => app.solve(&mut out, &moves.join(" ")),
        Commands::Scramble { length, seed } => app.scramble(&mut out, length, seed).map(|()| true),
        Commands::Validate { moves } => app.validate(&mut out, &moves.join(" ")),
        Commands::Demo => app.demo(&mut out),
        Commands::Interactive => app
            .interactive(io::stdin().lock(), &mut out)
            .map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            log::debug!("command failed: {:?}", err);
            let _ = app.renderer().error(&mut io::stderr(), &err.to_string());
            ExitCode::FAILURE
        }
    }
}
