use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use materia_core::{render_fn, BoundaryOutput, ErrorBoundary, RenderError};
use materia_logging::{materia_info, materia_warn};
use materia_text::{annotate_with, strip_to_plain_text, summarize, MarkupSettings, NormalizedEntry};

use crate::{resolve_settings, Cli, Mode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: Mode,
    pub json: bool,
    pub settings: MarkupSettings,
}

/// Renders one raw entry in the requested form. Fails on non UTF-8 input.
pub fn render_entry(raw: &[u8], options: &RenderOptions) -> Result<String, RenderError> {
    let raw = std::str::from_utf8(raw)
        .map_err(|err| RenderError::with_source("entry is not valid UTF-8", err))?;

    let text = match options.mode {
        Mode::Plain => strip_to_plain_text(raw),
        Mode::Summary => summarize(&strip_to_plain_text(raw)),
        Mode::Markup => annotate_with(raw, &options.settings),
        Mode::All => {
            let entry = NormalizedEntry::from_raw(raw, &options.settings);
            return if options.json {
                serde_json::to_string_pretty(&entry)
                    .map_err(|err| RenderError::with_source("serializing entry", err))
            } else {
                Ok(format!(
                    "plain:\n{}\n\nsummary:\n{}\n\nmarkup:\n{}",
                    entry.plain, entry.summary, entry.markup
                ))
            };
        }
    };

    if options.json {
        let mut value = serde_json::Map::new();
        value.insert(options.mode.as_str().to_string(), serde_json::Value::String(text));
        serde_json::to_string_pretty(&value)
            .map_err(|err| RenderError::with_source("serializing entry", err))
    } else {
        Ok(text)
    }
}

/// Renders under an error boundary, pressing "Try Again" up to `retries` times.
pub fn render_guarded(raw: &[u8], options: &RenderOptions, retries: u32) -> BoundaryOutput<String> {
    let mut boundary = ErrorBoundary::new(render_fn("entry", || render_entry(raw, options)));
    let mut output = boundary.render();
    let mut attempt = 0;
    while output.is_fallback() && attempt < retries {
        attempt += 1;
        materia_info!("Retrying entry render ({}/{})", attempt, retries);
        boundary.try_again();
        output = boundary.render();
    }
    output
}

pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let settings = resolve_settings(cli.config.as_deref(), cli.no_books)?;
    let raw = read_input(cli)?;
    let options = RenderOptions {
        mode: cli.mode,
        json: cli.json,
        settings,
    };

    match render_guarded(&raw, &options, cli.retries) {
        BoundaryOutput::Content(text) => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}").context("writing output")?;
            Ok(ExitCode::SUCCESS)
        }
        BoundaryOutput::Fallback(view) => {
            materia_warn!("Entry could not be rendered; showing fallback");
            eprintln!("{}", view.message);
            eprintln!("[{}]", view.action_label);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_input(cli: &Cli) -> anyhow::Result<Vec<u8>> {
    match &cli.file {
        Some(path) => fs::read(path).with_context(|| format!("reading entry from {path:?}")),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("reading entry from stdin")?;
            Ok(buf)
        }
    }
}
