//! graphiter - inspect how an iterator tree is optimized and evaluated
//!
//! Builds a fixed-value iterator from the values given on the command line,
//! runs it through the optimizer, prints the resulting tree and one line per
//! binding.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Log filter (default: the config's `log_filter`)

use std::path::PathBuf;
use std::process::ExitCode;

use graphiter::engine::{EngineConfig, Executor, Explain, Optimizer, ResultSet};
use graphiter::graph::Value;
use graphiter::iterator::{BoxedIterator, Fixed, GraphIterator};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut tags: Vec<String> = Vec::new();
    let mut no_optimize = false;
    let mut values: Vec<Value> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                i += 1;
                if i < args.len() {
                    config_path = Some(PathBuf::from(&args[i]));
                }
            }
            "-t" | "--tag" => {
                i += 1;
                if i < args.len() {
                    tags.push(args[i].clone());
                }
            }
            "--no-optimize" => {
                no_optimize = true;
            }
            "-h" | "--help" => {
                print_help();
                return ExitCode::SUCCESS;
            }
            "--version" => {
                println!("graphiter v{}", env!("CARGO_PKG_VERSION"));
                return ExitCode::SUCCESS;
            }
            arg => {
                if !arg.starts_with('-') {
                    values.push(Value::parse(arg));
                } else {
                    eprintln!("Unknown option: {}", arg);
                    return ExitCode::FAILURE;
                }
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => match EngineConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };
    let config = if no_optimize { config.optimize(false) } else { config };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    fmt().with_env_filter(filter).with_target(true).init();

    let mut root = Fixed::new(values);
    for tag in &tags {
        root.tagger_mut().add(tag.clone());
    }
    info!(uid = root.uid(), size = root.values().len(), "built root iterator");

    let mut root: BoxedIterator = Box::new(root);
    if config.optimize {
        root = Optimizer::from_config(&config).optimize(root);
    }
    print!("{}", Explain(root.as_ref()));

    let executor = Executor::new(config.optimize(false));
    let results = executor.collect(root.as_mut());
    root.close();

    print_results(&results);
    ExitCode::SUCCESS
}

fn print_help() {
    println!("graphiter - iterator tree inspector");
    println!();
    println!("Usage: graphiter [OPTIONS] [VALUE...]");
    println!();
    println!("Options:");
    println!("  -c, --config PATH      Load engine config from a JSON file");
    println!("  -t, --tag NAME         Tag the root iterator's results");
    println!("  --no-optimize          Skip the optimizer");
    println!("  -h, --help             Show this help message");
    println!("  --version              Show version");
    println!();
    println!("Examples:");
    println!("  graphiter -t who alice bob      Two bindings for ?who");
    println!("  graphiter -t who                Empty set, optimized to null");
}

fn print_results(results: &ResultSet) {
    if results.is_empty() {
        println!("(0 results)");
        return;
    }

    println!("{}", results.columns.join("\t"));
    for row in results.iter() {
        let values: Vec<String> = results
            .columns
            .iter()
            .map(|col| match row.get(col) {
                Some(Some(v)) => v.to_string(),
                _ => "_".to_string(),
            })
            .collect();
        println!("{}", values.join("\t"));
    }
    println!("({} results)", results.len());
}
