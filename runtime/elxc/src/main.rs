//! Elx CLI
//!
//! Encodes bitstring literals from the command line.

use elxc::{encode_literal, parse_encode_options};

fn main() {
    elxc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "encode" => {
            let (literal, config) = parse_encode_options(&args[2..]);
            let Some(literal) = literal else {
                eprintln!("Usage: elx encode '<<segment, ...>>' [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --hex, -x              Print bytes as hex");
                eprintln!("  --format=<fmt>         Output format: decimal, hex");
                eprintln!("  --segments, -s         List each segment's encoding");
                std::process::exit(1);
            };

            match encode_literal(&literal, &config) {
                Ok(out) => println!("{out}"),
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("elx {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Elx bitstring tool");
    println!();
    println!("Usage: elx <command> [options]");
    println!();
    println!("Commands:");
    println!("  encode '<<...>>'     Encode a bitstring literal");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Encode options:");
    println!("  --hex, -x           Print bytes as hex");
    println!("  --format=<fmt>      Output format: decimal, hex");
    println!("  --segments, -s      List each segment's encoding");
    println!();
    println!("Logging:");
    println!("  ELX_LOG=<filter>    Enable tracing output (falls back to RUST_LOG)");
}
