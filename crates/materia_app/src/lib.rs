//! `materia` command line front end: reads one raw entry and prints its display forms.
pub mod cli;
pub mod config;
pub mod render;

pub use cli::{Cli, Mode};
pub use config::{load_settings, resolve_settings, ConfigError};
pub use render::{render_entry, render_guarded, run, RenderOptions};
