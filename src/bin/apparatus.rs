//! Command-line interface for apparatus
//! Collates three witness documents into a critical-apparatus document, or
//! renders an existing collated document as a linear reading view.
//!
//! Usage:
//!   apparatus collate `<modern>` `<left>` `<right>` [--canto N] [--format json|text] [--output PATH]
//!   apparatus render `<collated.json>`

use apparatus::processor::{collate_files, format_collated, load_collated, OutputFormat};
use clap::{Arg, Command};
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("apparatus")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A three-way collation engine producing critical-apparatus documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("collate")
                .about("Collate one canto of three witness documents")
                .arg(
                    Arg::new("modern")
                        .help("Path to the modernized, tagged witness (JSON)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("left")
                        .help("Path to the left transcription (JSON)")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("right")
                        .help("Path to the right transcription (JSON)")
                        .required(true)
                        .index(3),
                )
                .arg(
                    Arg::new("canto")
                        .long("canto")
                        .short('c')
                        .help("Canto number to collate")
                        .default_value("1"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'text')")
                        .default_value("json"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the result to this path instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render an existing collated document as a linear reading view")
                .arg(
                    Arg::new("path")
                        .help("Path to the collated document (JSON)")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("collate", collate_matches)) => {
            let modern = collate_matches.get_one::<String>("modern").unwrap();
            let left = collate_matches.get_one::<String>("left").unwrap();
            let right = collate_matches.get_one::<String>("right").unwrap();
            let canto = collate_matches.get_one::<String>("canto").unwrap();
            let format = collate_matches.get_one::<String>("format").unwrap();
            let output = collate_matches.get_one::<String>("output");
            handle_collate_command(modern, left, right, canto, format, output);
        }
        Some(("render", render_matches)) => {
            let path = render_matches.get_one::<String>("path").unwrap();
            handle_render_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the collate command
fn handle_collate_command(
    modern: &str,
    left: &str,
    right: &str,
    canto: &str,
    format: &str,
    output: Option<&String>,
) {
    let canto: u32 = match canto.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: invalid canto number '{}'", canto);
            std::process::exit(1);
        }
    };
    let format = match OutputFormat::from_string(format) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match collate_files(modern, left, right, canto, format) {
        Ok(result) => write_result(&result, output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the render command
fn handle_render_command(path: &str) {
    match load_collated(path).and_then(|doc| format_collated(&doc, OutputFormat::Text)) {
        Ok(result) => print!("{}", result),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn write_result(result: &str, output: Option<&String>) {
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, result) {
                eprintln!("Error: failed to write {}: {}", path, e);
                std::process::exit(1);
            }
        }
        None => println!("{}", result),
    }
}
