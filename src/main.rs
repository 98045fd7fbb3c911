use leveltree::cli::{Cli, args::Args};
use log::LevelFilter;

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // `--color` forces escape codes even when stdout is not a terminal.
    if args.color {
        colored::control::set_override(true);
    }

    if let Err(e) = Cli::with_args(args).run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
