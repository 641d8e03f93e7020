//! Command-line interface for leet
//! Runs the codec over a file or stdin and prints the result.
//!
//! Usage:
//!   leet encode [`<path>`] [--intensity `<1-5>`] [--seed `<n>`]   - Obfuscate text
//!   leet decode [`<path>`] [--strategy `<strategy>` | --quick]  - Turn leetspeak back into text
//!   leet detect [`<path>`] [--json]                            - Report whether text looks like leetspeak
//!   leet normalize [`<path>`]                                  - Decode markdown-like text, keeping its structure
//!
//! Without a path (or with `-`) input is read from stdin. Settings come from the
//! built-in defaults, `./leet.toml`, `LEET_*` variables, `--config`, then flags.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use leet_codec::{fold_common_substitutions, Codec, LeetScore};
use leet_config::{LeetConfig, LoadError, Loader};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::{self, Read};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] LoadError),

    #[error("could not serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct DetectReport {
    #[serde(flatten)]
    score: LeetScore,
    ratio: f64,
    threshold: f64,
    looks_like_leetspeak: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Input file; stdin when absent or '-'")
        .index(1)
}

fn cli() -> Command {
    Command::new("leet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Encode, decode, and detect leetspeak")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .subcommand(
            Command::new("encode")
                .about("Turn normal text into leetspeak")
                .arg(path_arg())
                .arg(
                    Arg::new("intensity")
                        .long("intensity")
                        .short('i')
                        .help("1 (light) to 5 (heavy); clamped into range")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for reproducible output")
                        .value_parser(value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("decode")
                .about("Turn leetspeak back into normal text")
                .arg(path_arg())
                .arg(
                    Arg::new("strategy")
                        .long("strategy")
                        .help("Decoding strategy")
                        .value_parser(["two-pass", "longest-match"])
                        .conflicts_with("quick"),
                )
                .arg(
                    Arg::new("quick")
                        .long("quick")
                        .help("Only fold common digit and symbol substitutions")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("detect")
                .about("Report whether text already looks like leetspeak")
                .arg(path_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the full score as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Decode markdown-like text while keeping line structure")
                .arg(path_arg()),
        )
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some(("encode", sub)) => handle_encode(sub),
        Some(("decode", sub)) => handle_decode(sub),
        Some(("detect", sub)) => handle_detect(sub),
        Some(("normalize", sub)) => handle_normalize(sub),
        _ => unreachable!(),
    }
}

fn loader(sub: &ArgMatches) -> Loader {
    let loader = Loader::new().with_optional_file("leet.toml").with_env();
    match sub.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    }
}

fn finish(loader: Loader) -> Result<LeetConfig, CliError> {
    let config = loader.build()?;
    tracing::debug!(options = ?config.codec_options(), "loaded configuration");
    Ok(config)
}

fn read_input(sub: &ArgMatches) -> Result<String, CliError> {
    let path = sub.get_one::<String>("path").map(String::as_str);
    let mut text = match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Read {
                    path: "stdin".to_string(),
                    source,
                })?;
            buf
        }
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        })?,
    };

    // The trailing newline belongs to the terminal, not the text
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn handle_encode(sub: &ArgMatches) -> Result<(), CliError> {
    let mut loader = loader(sub);
    if let Some(&level) = sub.get_one::<i64>("intensity") {
        loader = loader
            .set_override("encoder.intensity", level)
            .map_err(LoadError::from)?;
    }
    if let Some(&seed) = sub.get_one::<u64>("seed") {
        loader = loader
            .set_override("encoder.seed", seed)
            .map_err(LoadError::from)?;
    }
    let config = finish(loader)?;
    let text = read_input(sub)?;

    let codec = Codec::new(config.codec_options());
    let mut rng = match config.encoder.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    println!("{}", codec.encode_with(&text, &mut rng));
    Ok(())
}

fn handle_decode(sub: &ArgMatches) -> Result<(), CliError> {
    if sub.get_flag("quick") {
        let text = read_input(sub)?;
        println!("{}", fold_common_substitutions(&text));
        return Ok(());
    }

    let mut loader = loader(sub);
    if let Some(strategy) = sub.get_one::<String>("strategy") {
        loader = loader
            .set_override("decoder.strategy", strategy.as_str())
            .map_err(LoadError::from)?;
    }
    let config = finish(loader)?;
    let text = read_input(sub)?;

    println!("{}", Codec::new(config.codec_options()).decode(&text));
    Ok(())
}

fn handle_detect(sub: &ArgMatches) -> Result<(), CliError> {
    let config = finish(loader(sub))?;
    let text = read_input(sub)?;

    let codec = Codec::new(config.codec_options());
    let verdict = codec.looks_like_leetspeak(&text);

    if sub.get_flag("json") {
        let score = codec.score(&text);
        let report = DetectReport {
            score,
            ratio: score.ratio(),
            threshold: codec.options().threshold,
            looks_like_leetspeak: verdict,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", verdict);
    }
    Ok(())
}

fn handle_normalize(sub: &ArgMatches) -> Result<(), CliError> {
    let config = finish(loader(sub))?;
    let text = read_input(sub)?;

    println!(
        "{}",
        Codec::new(config.codec_options()).normalize_structured_text(&text)
    );
    Ok(())
}
