//! Global generator config and the first-run setup prompt.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::store::{load_record, save_record};

const SETUP_BANNER: &str = "
============================================================
         VST Boilerplate Generator Configuration
============================================================

Make sure to download and extract the Steinberg VST SDK from
http://www.steinberg.net/en/company/developers.html
if you haven't already.

";

const SDK_PROMPT: &str = "Please enter absolute path to the Steinberg VST SDK: ";

/// Settings shared by every effect (`vst-boilerplate-generator-config.json`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Absolute path of the extracted VST SDK; linked into each effect as `vst_sdk`.
    pub sdk_abs_path: PathBuf,
}

/// Load the global config, running the interactive setup if it does not exist yet.
pub fn load_or_setup<R: BufRead, W: Write>(path: &Path, input: R, output: W) -> Result<GlobalConfig> {
    if path.exists() {
        let config: GlobalConfig = load_record(path)?;
        debug!(sdk = %config.sdk_abs_path.display(), "global config loaded");
        return Ok(config);
    }
    run_setup(path, input, output)
}

/// Ask for the SDK location once and persist it to `path`.
///
/// The answer is trimmed and must be a non-empty absolute path; nothing is
/// written otherwise.
pub fn run_setup<R: BufRead, W: Write>(path: &Path, mut input: R, mut output: W) -> Result<GlobalConfig> {
    write!(output, "{SETUP_BANNER}{SDK_PROMPT}").context("write setup prompt")?;
    output.flush().context("flush setup prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("read SDK path")?;
    let answer = line.trim();
    if answer.is_empty() {
        bail!("no SDK path entered; {} was not written", path.display());
    }
    let sdk_abs_path = PathBuf::from(answer);
    if !sdk_abs_path.is_absolute() {
        bail!("the SDK path must be absolute, got '{answer}'");
    }

    let config = GlobalConfig { sdk_abs_path };
    save_record(path, &config)?;
    info!(path = %path.display(), "global config created");
    writeln!(output, "Saved configuration to {}", path.display()).context("write setup result")?;
    Ok(config)
}
