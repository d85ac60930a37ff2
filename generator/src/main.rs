//! Boilerplate generator for VST audio-plugin projects.
//!
//! `--create-effect-config NAME` writes `vsts/NAME/<ClassName>-config.json`
//! for the user to edit; `--create-effect NAME` then renders the template set
//! into the same directory.
//!
//! Templates are read from `templates/` under the generator root (`--root`,
//! `VSTGEN_ROOT`, or the executable's directory); any that are missing there
//! fall back to the stock set compiled into the binary.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Result, bail};
use clap::{ArgGroup, Parser};

use vstgen::configure::create_effect_config;
use vstgen::exit_codes;
use vstgen::generate::create_effect;
use vstgen::io::global::load_or_setup;
use vstgen::io::paths::{GeneratorPaths, default_root};
use vstgen::io::render::MiniJinjaEngine;
use vstgen::logging;

#[derive(Parser)]
#[command(
    name = "vstgen",
    version,
    about = "Scaffold VST effect projects from templates"
)]
#[command(group(
    ArgGroup::new("command")
        .required(true)
        .args(["create_effect_config", "create_effect"])
))]
struct Cli {
    /// Write a default config for a new effect (step 1).
    #[arg(long, value_name = "EFFECT_NAME", num_args = 1..)]
    create_effect_config: Option<Vec<String>>,

    /// Render the templates for a configured effect (step 2).
    #[arg(long, value_name = "EFFECT_NAME", num_args = 1..)]
    create_effect: Option<Vec<String>>,

    /// Generator root holding the global config, `templates/` and `vsts/`.
    /// Defaults to the directory containing this executable.
    #[arg(long, env = "VSTGEN_ROOT", value_name = "DIR")]
    root: Option<PathBuf>,
}

enum Action {
    CreateEffectConfig(String),
    CreateEffect(String),
}

impl Cli {
    /// Effect names are every remaining word joined with single spaces.
    fn action(&self) -> Result<Action> {
        match (&self.create_effect_config, &self.create_effect) {
            (Some(words), None) => Ok(Action::CreateEffectConfig(words.join(" "))),
            (None, Some(words)) => Ok(Action::CreateEffect(words.join(" "))),
            _ => bail!("expected exactly one of --create-effect-config or --create-effect"),
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            process::exit(code);
        }
    };
    logging::init();
    if let Err(err) = run(&cli) {
        eprintln!("{:#}", err);
        process::exit(exit_codes::INVALID);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let action = cli.action()?;
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => default_root()?,
    };
    let paths = GeneratorPaths::new(root);
    let global = load_or_setup(&paths.config_path, io::stdin().lock(), io::stdout())?;

    match action {
        Action::CreateEffectConfig(name) => {
            let outcome = create_effect_config(&paths, &global, &name)?;
            let program = std::env::args().next().unwrap_or_else(|| "vstgen".to_string());
            println!("A configuration file for your effect has been written to:\n");
            println!("    {}\n", outcome.config_path.display());
            println!("Edit the config to your liking and then execute:\n");
            println!("    {} --create-effect {}\n", program, outcome.effect_name);
        }
        Action::CreateEffect(name) => {
            for path in create_effect(&paths, &MiniJinjaEngine, &name)? {
                println!("wrote {}", path.display());
            }
        }
    }
    Ok(())
}
