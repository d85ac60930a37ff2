//! `--create-effect`: render the template set for a configured effect.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use tracing::info;

use crate::effect::Effect;
use crate::io::paths::GeneratorPaths;
use crate::io::render::{TemplateEngine, render_effect};

/// Load the effect's config and render every template into its directory.
///
/// Returns the written files in rendering order.
pub fn create_effect<E: TemplateEngine + ?Sized>(
    paths: &GeneratorPaths,
    engine: &E,
    name: &str,
) -> Result<Vec<PathBuf>> {
    let mut effect = Effect::create(name, &paths.vst_dir)?;
    if !effect.dir_path().is_dir() {
        return Err(anyhow!("the effect \"{name}\" does not exist"));
    }
    effect.load_config()?;
    let written = render_effect(engine, &paths.template_dir, &effect)?;
    info!(effect = %name, files = written.len(), "effect generated");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configure::create_effect_config;
    use crate::io::render::MiniJinjaEngine;
    use crate::test_support::TestLayout;
    use std::fs;

    #[test]
    fn renders_four_non_empty_files() {
        let layout = TestLayout::new().expect("layout");
        create_effect_config(&layout.paths, &layout.global, "My Effect").expect("configure");

        let written = create_effect(&layout.paths, &MiniJinjaEngine, "My Effect").expect("generate");

        let dir = layout.paths.vst_dir.join("My Effect");
        let expected: Vec<PathBuf> = ["Makefile", "linuxmain.cpp", "effect.h", "effect.cpp"]
            .iter()
            .map(|name| dir.join(name))
            .collect();
        assert_eq!(written, expected);
        for path in &written {
            assert!(!fs::read_to_string(path).expect("read").is_empty());
        }
    }

    #[test]
    fn uses_edited_config() {
        let layout = TestLayout::new().expect("layout");
        let outcome =
            create_effect_config(&layout.paths, &layout.global, "My Effect").expect("configure");
        let edited = fs::read_to_string(&outcome.config_path)
            .expect("read")
            .replace("\"vendor_name\": \"My Effect\"", "\"vendor_name\": \"Acme \\\"Audio\\\"\"");
        fs::write(&outcome.config_path, edited).expect("write");

        create_effect(&layout.paths, &MiniJinjaEngine, "My Effect").expect("generate");

        let source = fs::read_to_string(outcome.dir_path.join("effect.cpp")).expect("read");
        assert!(source.contains("\"Acme Audio\""));
    }

    #[test]
    fn unknown_effect_is_rejected() {
        let layout = TestLayout::new().expect("layout");

        let err = create_effect(&layout.paths, &MiniJinjaEngine, "Unknown Effect").unwrap_err();

        assert!(err.to_string().contains("does not exist"));
        assert!(!layout.paths.vst_dir.join("Unknown Effect").exists());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let layout = TestLayout::new().expect("layout");
        let dir = layout.paths.vst_dir.join("Bare");
        fs::create_dir_all(&dir).expect("mkdir");

        let err = create_effect(&layout.paths, &MiniJinjaEngine, "Bare").unwrap_err();

        assert!(format!("{err:#}").contains("Bare-config.json"));
        assert_eq!(fs::read_dir(&dir).expect("read dir").count(), 0);
    }
}
