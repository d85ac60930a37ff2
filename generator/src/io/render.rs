//! Template rendering for a configured effect.
//!
//! The template set is fixed and rendered in order into the effect directory.
//! A failure stops the run; files rendered before it are left in place.
//! Templates missing from the template directory fall back to the copies
//! compiled into the binary.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};
use tracing::debug;

use crate::effect::{Effect, EffectContext};

/// Templates rendered by `--create-effect`, in rendering order.
pub const TEMPLATES: [&str; 4] = [
    "Makefile.jinja2",
    "linuxmain.cpp.jinja2",
    "effect.h.jinja2",
    "effect.cpp.jinja2",
];

const TEMPLATE_SUFFIX: &str = ".jinja2";

/// Stock templates from `generator/templates/`, keyed by file name.
pub const BUILTIN_TEMPLATES: [(&str, &str); 4] = [
    (
        "Makefile.jinja2",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/Makefile.jinja2")),
    ),
    (
        "linuxmain.cpp.jinja2",
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/linuxmain.cpp.jinja2"
        )),
    ),
    (
        "effect.h.jinja2",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/effect.h.jinja2")),
    ),
    (
        "effect.cpp.jinja2",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/effect.cpp.jinja2")),
    ),
];

/// Text templating backend.
pub trait TemplateEngine {
    /// Render `source` with `effect` bound as the only context variable.
    fn render(&self, name: &str, source: &str, effect: &EffectContext<'_>) -> Result<String>;
}

/// [`TemplateEngine`] backed by minijinja.
///
/// Undefined variables are errors, so a misspelled field fails the render
/// instead of producing an empty string. Output is never escaped; the
/// templates produce C++ and make syntax, not markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct MiniJinjaEngine;

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, name: &str, source: &str, effect: &EffectContext<'_>) -> Result<String> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template(name, source)
            .with_context(|| format!("parse template {name}"))?;
        let template = env.get_template(name)?;
        let rendered = template
            .render(context! { effect => effect })
            .with_context(|| format!("render template {name}"))?;
        Ok(rendered)
    }
}

/// Output file name for a template (`Makefile.jinja2` -> `Makefile`).
pub fn output_name(template: &str) -> &str {
    template.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(template)
}

/// Source of `template`: the file in `template_dir` if present, otherwise the
/// builtin copy.
pub fn template_source(template_dir: &Path, template: &str) -> Result<String> {
    let template_path = template_dir.join(template);
    match fs::read_to_string(&template_path) {
        Ok(source) => Ok(source),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let (_, source) = BUILTIN_TEMPLATES
                .iter()
                .find(|(name, _)| *name == template)
                .with_context(|| format!("read template {}: {err}", template_path.display()))?;
            debug!(template, "using builtin template");
            Ok((*source).to_string())
        }
        Err(err) => Err(anyhow::Error::new(err)
            .context(format!("read template {}", template_path.display()))),
    }
}

/// Render every template in [`TEMPLATES`] into the effect's directory,
/// overwriting existing outputs. Sources come from [`template_source`].
///
/// Returns the written paths in rendering order.
pub fn render_effect<E: TemplateEngine + ?Sized>(
    engine: &E,
    template_dir: &Path,
    effect: &Effect,
) -> Result<Vec<PathBuf>> {
    let ctx = effect.context();
    let out_dir = effect.dir_path();
    let mut written = Vec::with_capacity(TEMPLATES.len());
    for template in TEMPLATES {
        let source = template_source(template_dir, template)?;
        let rendered = engine.render(template, &source, &ctx)?;
        let out_path = out_dir.join(output_name(template));
        fs::write(&out_path, rendered)
            .with_context(|| format!("write {}", out_path.display()))?;
        debug!(template, out = %out_path.display(), "rendered template");
        written.push(out_path);
    }
    Ok(written)
}
