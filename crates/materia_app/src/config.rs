use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use materia_logging::materia_info;
use materia_text::MarkupSettings;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Load markup settings from a RON file. Missing fields take their defaults.
pub fn load_settings(path: &Path) -> Result<MarkupSettings, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    materia_info!("Loaded markup settings from {:?}", path);
    Ok(settings)
}

/// Settings file (or defaults) with command line overrides applied.
pub fn resolve_settings(path: Option<&Path>, no_books: bool) -> Result<MarkupSettings, ConfigError> {
    let mut settings = match path {
        Some(path) => load_settings(path)?,
        None => MarkupSettings::default(),
    };
    if no_books {
        settings.expand_books = false;
    }
    Ok(settings)
}
