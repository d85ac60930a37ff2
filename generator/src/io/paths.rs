//! Canonical paths within a generator root.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File name of the global config inside the generator root.
pub const GLOBAL_CONFIG_FILE: &str = "vst-boilerplate-generator-config.json";
/// Directory holding the `*.jinja2` templates.
pub const TEMPLATES_DIR: &str = "templates";
/// Directory every effect directory is created under.
pub const VSTS_DIR: &str = "vsts";

/// All canonical paths for a generator root.
#[derive(Debug, Clone)]
pub struct GeneratorPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub template_dir: PathBuf,
    pub vst_dir: PathBuf,
}

impl GeneratorPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_path: root.join(GLOBAL_CONFIG_FILE),
            template_dir: root.join(TEMPLATES_DIR),
            vst_dir: root.join(VSTS_DIR),
            root,
        }
    }
}

/// Directory containing the running executable.
///
/// Used when neither `--root` nor `VSTGEN_ROOT` is given, so the generator
/// keeps its config and templates beside the program.
pub fn default_root() -> Result<PathBuf> {
    let exe = env::current_exe().context("locate current executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("executable has no parent directory: {}", exe.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_derived_from_root() {
        let paths = GeneratorPaths::new("/work/gen");
        assert_eq!(paths.root, PathBuf::from("/work/gen"));
        assert_eq!(
            paths.config_path,
            PathBuf::from("/work/gen/vst-boilerplate-generator-config.json")
        );
        assert_eq!(paths.template_dir, PathBuf::from("/work/gen/templates"));
        assert_eq!(paths.vst_dir, PathBuf::from("/work/gen/vsts"));
    }

    #[test]
    fn default_root_is_an_existing_directory() {
        let root = default_root().expect("root");
        assert!(root.is_dir());
    }
}
