use std::fs;

use clap::Parser;
use lumina::{get_result, interpreter::value::core::Value, util::num::f64_to_exit_code};

/// lumina runs programs in a deliberately chaotic scripting language
/// where any token is a name, booleans are probabilities, and execution
/// can reverse mid-run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the script to execute.
    file: String,
}

fn main() {
    let args = Args::parse();

    let script = fs::read_to_string(&args.file).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.file);
        std::process::exit(1);
    });

    match get_result(&script) {
        Ok(Value::Number(code)) => std::process::exit(f64_to_exit_code(code)),
        Ok(_) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
