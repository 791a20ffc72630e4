use anyhow::{bail, Context, Result};
use std::process;
use ui_recode::dispatch::{self, Outcome};
use ui_recode::{args, installer};

/// Entry point of the engine-side styling pass
/// Patches the target file, then installs build dependencies
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

/// Runs the styling pass and the build trigger
///
/// # Arguments
/// * `args` - Parsed command line arguments
fn run(args: args::Args) -> Result<()> {
    if !args.path.exists() {
        bail!("File not found: {}", args.path.display());
    }

    println!("Recoding UI for: {}", args.path.display());

    // A patcher failure is logged and swallowed, like the desktop pass
    match dispatch::recode_hexa(&args.path) {
        Ok(Outcome::Patched) => {}
        Ok(Outcome::Skipped) => println!("Unsupported file type: {}", args.path.display()),
        Err(e) => eprintln!("Error processing file {}: {:#}", args.path.display(), e),
    }

    // The install step runs whatever the patch outcome was; its failure is fatal
    installer::install_build_deps()?;

    Ok(())
}
