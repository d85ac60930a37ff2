//! Test-only helpers for building a throwaway generator root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::global::GlobalConfig;
use crate::io::paths::GeneratorPaths;
use crate::io::render::BUILTIN_TEMPLATES;
use crate::io::store::save_record;

/// A generator root in a temp directory with the builtin templates installed
/// and a global config pointing at an (empty) `sdk/` directory.
///
/// `vsts/` is not created; the first `--create-effect-config` creates it.
pub struct TestLayout {
    _temp: TempDir,
    pub paths: GeneratorPaths,
    pub global: GlobalConfig,
}

impl TestLayout {
    pub fn new() -> Result<Self> {
        let layout = Self::without_global_config()?;
        fs::create_dir(&layout.global.sdk_abs_path).context("create sdk dir")?;
        save_record(&layout.paths.config_path, &layout.global)?;
        Ok(layout)
    }

    /// Same layout, but the global config is not written, so the first run
    /// goes through the setup prompt.
    pub fn without_global_config() -> Result<Self> {
        let temp = tempfile::tempdir().context("tempdir")?;
        let paths = GeneratorPaths::new(temp.path());
        install_templates(&paths.template_dir)?;
        let global = GlobalConfig {
            sdk_abs_path: temp.path().join("sdk"),
        };
        Ok(Self {
            _temp: temp,
            paths,
            global,
        })
    }

    pub fn root(&self) -> &Path {
        &self.paths.root
    }
}

/// Write [`BUILTIN_TEMPLATES`] into `dir`, creating it if needed.
pub fn install_templates(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    for (name, contents) in BUILTIN_TEMPLATES {
        let path = dir.join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}
