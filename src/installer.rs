use anyhow::{bail, Context, Result};
use duct::cmd;
use std::path::Path;

/// Directory holding the build manifest, relative to the working directory
const BUILD_DIR: &str = "build";

/// Install build dependencies by running the package manager in `build/`
///
/// The child process shares stdin, stdout and stderr with this process, so
/// installer output goes straight to the terminal. There is no timeout and
/// no retry; any failure here is fatal to the caller.
///
/// # Returns
/// * `Result<()>` - Ok when the install command exits zero
pub fn install_build_deps() -> Result<()> {
    let build_dir = Path::new(BUILD_DIR);
    if !build_dir.is_dir() {
        bail!("Build directory not found: {}", build_dir.display());
    }

    which::which("npm").context("npm is not available on PATH")?;

    cmd("npm", ["install"])
        .dir(build_dir)
        .run()
        .context("npm install failed in build/")?;

    Ok(())
}
