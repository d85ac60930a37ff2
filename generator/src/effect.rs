//! One scaffolded effect: its name, directory and config record.

use std::path::PathBuf;

use anyhow::Result;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::core::name::{canonical_name, class_name, validate_name};
use crate::core::record::{EffectRecord, UNIQUE_ID_RANGE};
use crate::io::store::{load_record, save_record};

/// Suffix appended to the class name to form the config file name.
pub const CONFIG_FILE_SUFFIX: &str = "-config.json";

/// An effect rooted at `<parent_dir>/<name>`.
#[derive(Debug, Clone)]
pub struct Effect {
    name: String,
    parent_dir: PathBuf,
    pub config: EffectRecord,
}

/// View of an [`Effect`] handed to templates as the `effect` variable.
#[derive(Debug, Serialize)]
pub struct EffectContext<'a> {
    pub name: &'a str,
    pub class_name: String,
    pub canonical_name: String,
    pub dir_path: String,
    pub config: &'a EffectRecord,
}

impl Effect {
    /// Validate `name` and build an effect with a default record.
    pub fn create(name: &str, parent_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::create_with_rng(name, parent_dir, &mut rand::thread_rng())
    }

    /// Like [`Effect::create`], drawing `unique_id` from `rng`.
    pub fn create_with_rng<R: Rng>(
        name: &str,
        parent_dir: impl Into<PathBuf>,
        rng: &mut R,
    ) -> Result<Self> {
        validate_name(name)?;
        let unique_id = rng.gen_range(UNIQUE_ID_RANGE);
        Ok(Self {
            name: name.to_string(),
            parent_dir: parent_dir.into(),
            config: EffectRecord::new(name, class_name(name), unique_id),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_name(&self) -> String {
        class_name(&self.name)
    }

    pub fn canonical_name(&self) -> String {
        canonical_name(&self.name)
    }

    pub fn dir_path(&self) -> PathBuf {
        self.parent_dir.join(&self.name)
    }

    pub fn config_file_path(&self) -> PathBuf {
        self.dir_path()
            .join(format!("{}{}", self.class_name(), CONFIG_FILE_SUFFIX))
    }

    pub fn sanitize(&mut self) {
        self.config.sanitize();
    }

    /// Sanitize and write the record to [`Effect::config_file_path`].
    pub fn save_config(&mut self) -> Result<()> {
        self.sanitize();
        let path = self.config_file_path();
        save_record(&path, &self.config)?;
        debug!(effect = %self.name, path = %path.display(), "effect config saved");
        Ok(())
    }

    /// Replace the in-memory record with the one on disk, then sanitize it.
    pub fn load_config(&mut self) -> Result<()> {
        let path = self.config_file_path();
        self.config = load_record(&path)?;
        self.sanitize();
        debug!(effect = %self.name, unique_id = self.config.unique_id, "effect config loaded");
        Ok(())
    }

    pub fn context(&self) -> EffectContext<'_> {
        EffectContext {
            name: &self.name,
            class_name: self.class_name(),
            canonical_name: self.canonical_name(),
            dir_path: self.dir_path().display().to_string(),
            config: &self.config,
        }
    }
}
