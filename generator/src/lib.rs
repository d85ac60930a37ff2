//! Boilerplate generator for VST audio-plugin projects.
//!
//! Scaffolding an effect happens in two invocations: the first writes a
//! per-effect config file the user can edit, the second renders the fixed
//! template set against that config. The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (name derivation, record defaults,
//!   sanitization). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config files, first-run prompt,
//!   template rendering, generator layout).
//!
//! Orchestration modules ([`configure`], [`generate`]) combine the two to
//! implement the CLI commands. [`effect`] ties one effect's name, directory and
//! record together.

pub mod configure;
pub mod core;
pub mod effect;
pub mod exit_codes;
pub mod generate;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
