use anyhow::{anyhow, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments parser
#[derive(Parser, Debug)]
#[command(version, about = "Rewrite UI theme properties to the fixed Windows 11 styling")]
pub struct Args {
    /// File to retheme
    #[arg(long = "path", value_name = "FILE-PATH")]
    pub path: PathBuf,

    /// Theme to apply (currently ignored, the Windows 11 styling is always used)
    #[arg(long = "theme", value_name = "THEME")]
    pub theme: Option<String>,
}

/// Parse command line arguments
///
/// Usage errors exit the process with status 1 rather than clap's default,
/// while `--help` and `--version` keep their stdout output and status 0.
///
/// # Returns
/// * `Result<Args>` - Parsed arguments
pub fn parse() -> Result<Args> {
    match Args::try_parse() {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => Err(anyhow!("{}", e)),
    }
}
