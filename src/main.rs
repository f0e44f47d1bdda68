use std::env;
use std::process::ExitCode;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use sanctuary_engine::board::{
    search, Position, SearchConfig, SearchLogger, SearchState, StdoutLogger,
};

const USAGE: &str = "usage: sanctuary_engine [--time MS] [--depth N] [--verbose] \
[--position \"<notation>\"] [--moves <move>...]";

struct Options {
    time_ms: u64,
    depth: Option<u32>,
    verbose: bool,
    position: Option<String>,
    moves: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options {
        time_ms: 1000,
        depth: None,
        verbose: false,
        position: None,
        moves: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--time" => {
                let value = iter.next().ok_or("--time needs a value")?;
                opts.time_ms = value.parse().map_err(|_| format!("bad time '{value}'"))?;
            }
            "--depth" => {
                let value = iter.next().ok_or("--depth needs a value")?;
                opts.depth = Some(value.parse().map_err(|_| format!("bad depth '{value}'"))?);
            }
            "--verbose" | "-v" => opts.verbose = true,
            "--position" => {
                let value = iter.next().ok_or("--position needs a value")?;
                opts.position = Some(value.clone());
            }
            "--moves" => opts.moves.extend(iter.by_ref().cloned()),
            "--help" | "-h" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument '{other}'\n{USAGE}")),
        }
    }
    Ok(opts)
}

fn run(opts: &Options) -> Result<(), String> {
    let mut pos = match &opts.position {
        Some(text) => Position::from_notation(text).map_err(|e| e.to_string())?,
        None => Position::start(),
    };
    for text in &opts.moves {
        let mv = pos.parse_move(text).map_err(|e| e.to_string())?;
        pos = pos.make_move(mv);
    }

    let mut config = SearchConfig::time(opts.time_ms);
    config.max_depth = opts.depth;
    if opts.verbose {
        config = config.with_info_callback(Arc::new(|info| StdoutLogger.info(info)));
    }

    let mut state = SearchState::default();
    let stop = AtomicBool::new(false);
    let result = search(&pos, &mut state, config, &stop).map_err(|e| e.to_string())?;

    match result.best_move {
        Some(mv) => {
            if let Some(source) = result.source {
                println!("source {source:?}");
            }
            println!("bestmove {mv}");
        }
        None => println!("bestmove (none)"),
    }
    Ok(())
}

/// Warnings only unless `--verbose`; `RUST_LOG` overrides either.
#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging(_verbose: bool) {}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(opts.verbose);

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}
