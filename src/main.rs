//! CLI entry point for library-loans
//!
//! This runs the loan demo against a configurable book store.

use library_loans::cli::catalog::CatalogFormat;
use library_loans::cli::demo::run_demo;
use library_loans::config::LibraryConfig;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "demo" => match parse_demo_options(&args[2..]) {
            Ok((config_path, format)) => run(config_path, format),
            Err(message) => {
                eprintln!("Error: {message}");
                eprintln!();
                print_usage();
                process::exit(1);
            }
        },
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Error: Unknown command '{command}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("library-loans - Single-copy library circulation");
    println!();
    println!("USAGE:");
    println!("    cargo run -- demo [--config <file.json>] [--json]");
    println!();
    println!("COMMANDS:");
    println!("    demo          Seed a store, then lend, lend again and return a book");
    println!("    --help, -h    Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    JSON config, e.g. {{\"store\": \"fixed\", \"capacity\": 10}}");
    println!("    --json             Print the catalog as JSON");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG=debug     Log store mutations and loan transitions");
}

fn parse_demo_options(args: &[String]) -> Result<(Option<PathBuf>, CatalogFormat), String> {
    let mut config_path = None;
    let mut format = CatalogFormat::Text;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or("Missing value for --config")?;
                config_path = Some(PathBuf::from(path));
            }
            "--json" => format = CatalogFormat::Json,
            other => return Err(format!("Unknown option '{other}'")),
        }
    }

    Ok((config_path, format))
}

fn run(config_path: Option<PathBuf>, format: CatalogFormat) {
    let config = match config_path {
        Some(path) => match LibraryConfig::from_path(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: Failed to load config '{}'", path.display());
                eprintln!("Reason: {err}");
                process::exit(1);
            }
        },
        None => LibraryConfig::default(),
    };
    log::info!("Using {:?} store", config.store);

    if let Err(err) = run_demo(&config, format, &mut std::io::stdout()) {
        eprintln!("Error: Demo failed");
        eprintln!("Reason: {err:#}");
        process::exit(1);
    }
}
