//! `--create-effect-config`: create an effect directory with a default config.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::info;

use crate::effect::Effect;
use crate::io::global::GlobalConfig;
use crate::io::paths::GeneratorPaths;

/// Name of the SDK symlink created inside every effect directory.
pub const SDK_LINK_NAME: &str = "vst_sdk";

/// Outcome of `--create-effect-config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureOutcome {
    pub effect_name: String,
    pub dir_path: PathBuf,
    pub config_path: PathBuf,
    pub sdk_link: PathBuf,
}

/// Create `<vsts>/<name>/`, write its default config and link the SDK into it.
///
/// Fails without touching anything if the effect directory already exists.
pub fn create_effect_config(
    paths: &GeneratorPaths,
    global: &GlobalConfig,
    name: &str,
) -> Result<ConfigureOutcome> {
    let mut effect = Effect::create(name, &paths.vst_dir)?;
    let dir_path = effect.dir_path();
    if dir_path.exists() {
        return Err(anyhow!("the effect \"{name}\" already exists"));
    }

    fs::create_dir_all(&paths.vst_dir)
        .with_context(|| format!("create directory {}", paths.vst_dir.display()))?;
    // Non-recursive so a directory created since the check above is not reused.
    fs::create_dir(&dir_path).map_err(|err| match err.kind() {
        ErrorKind::AlreadyExists => anyhow!("the effect \"{name}\" already exists"),
        _ => anyhow!(err).context(format!("create directory {}", dir_path.display())),
    })?;

    effect.save_config()?;

    let sdk_link = dir_path.join(SDK_LINK_NAME);
    symlink_dir(&global.sdk_abs_path, &sdk_link).with_context(|| {
        format!(
            "link {} -> {}",
            sdk_link.display(),
            global.sdk_abs_path.display()
        )
    })?;

    let config_path = effect.config_file_path();
    info!(effect = %name, config = %config_path.display(), "effect config created");
    Ok(ConfigureOutcome {
        effect_name: name.to_string(),
        dir_path,
        config_path,
        sdk_link,
    })
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
