//! CLI entry point for torview

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Args, Parser, Subcommand};
use env_logger::Env;
use log::debug;
use torview::{Session, SessionConfig, TraversalConfig, ViewMode};

#[derive(Parser, Debug)]
#[command(name = "torview")]
#[command(about = "Inspect .torrent metadata files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the contents of torrent files (default: every .torrent in the current directory)
    View(ViewArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("verbosity").args(["short", "basic", "long"])))]
struct ViewArgs {
    /// Files or directories to inspect
    paths: Vec<PathBuf>,

    /// Inspect directories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Don't use terminal colors
    #[arg(short = 'n', long = "no-color")]
    no_color: bool,

    /// Short output, two lines per file, brief info
    #[arg(short, long)]
    short: bool,

    /// Basic output, a couple of lines per file (default)
    #[arg(short, long)]
    basic: bool,

    /// Long output, prints every bit of information
    #[arg(short, long)]
    long: bool,
}

impl ViewArgs {
    fn mode(&self) -> ViewMode {
        if self.short {
            ViewMode::Short
        } else if self.long {
            ViewMode::Long
        } else {
            ViewMode::Basic
        }
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            mode: self.mode(),
            use_color: should_use_color(self.no_color),
            walk: TraversalConfig {
                recursive: self.recursive,
            },
        }
    }
}

/// Colors are on unless disabled by flag or by NO_COLOR (https://no-color.org/).
fn should_use_color(no_color: bool) -> bool {
    if no_color {
        return false;
    }
    !std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::View(args) => view(&args),
    }
}

fn view(args: &ViewArgs) {
    let config = args.session_config();
    debug!("view config: {:?}", config);

    let mut session = Session::new(config, io::stdout().lock());
    if let Err(e) = session.run(&args.paths) {
        eprintln!("torview: error writing output: {}", e);
        process::exit(1);
    }
}
