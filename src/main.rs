use anyhow::{bail, Context, Result};
use std::process;
use ui_recode::args;
use ui_recode::dispatch::{self, Outcome};

/// Main entry point of the application
/// Handles argument parsing and executes the program with error handling
fn main() -> Result<()> {
    // Parse command line arguments
    let args = args::parse().context("Failed to parse arguments")?;

    // Execute the program
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    Ok(())
}

/// Runs the styling pass on the target file
///
/// # Arguments
/// * `args` - Parsed command line arguments
fn run(args: args::Args) -> Result<()> {
    if !args.path.exists() {
        bail!("File not found: {}", args.path.display());
    }

    println!("Recoding UI for: {}", args.path.display());

    // A patcher failure is logged and swallowed; the process still exits 0
    match dispatch::recode_ui(&args.path) {
        Ok(Outcome::Patched) => {}
        Ok(Outcome::Skipped) => println!("Unsupported file type: {}", args.path.display()),
        Err(e) => eprintln!("Error processing file {}: {:#}", args.path.display(), e),
    }

    Ok(())
}
