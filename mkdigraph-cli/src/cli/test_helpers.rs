//! Helpers shared across CLI tests.
//!
//! Builds parsed [`Cli`] values and temporary files, and captures `tracing`
//! events so tests can assert on the structured diagnostics a run emits.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use clap::Parser;
use tempfile::TempDir;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

use super::{Cli, CliError, GenerationSummary, run_with_writer};

pub(super) fn parse(args: &[&str]) -> Cli {
    let argv = std::iter::once("mkdigraph").chain(args.iter().copied());
    match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) => panic!("arguments {args:?} must parse: {err}"),
    }
}

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Err(err) = fs::write(&path, contents) {
        panic!("failed to write {}: {err}", path.display());
    }
    path
}

/// Runs `cli` against an in-memory buffer and returns the summary and output.
pub(super) fn run_to_string(cli: &Cli) -> Result<(GenerationSummary, String), CliError> {
    let mut buffer = Vec::new();
    let summary = run_with_writer(cli, &mut buffer)?;
    match String::from_utf8(buffer) {
        Ok(text) => Ok((summary, text)),
        Err(err) => panic!("output must be UTF-8: {err}"),
    }
}

pub(super) fn run_expecting_error(cli: &Cli, panic_msg: &str) -> CliError {
    match run_to_string(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

/// One captured `tracing` event.
#[derive(Debug, Clone)]
pub(super) struct CapturedEvent {
    pub(super) level: Level,
    pub(super) fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub(super) fn message(&self) -> Option<&str> {
        self.fields.get("message").map(String::as_str)
    }
}

/// Layer that stores every event it observes.
#[derive(Clone, Default)]
pub(super) struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl EventCapture {
    pub(super) fn events(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldCollector::default();
        event.record(&mut visitor);
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedEvent {
                level: *event.metadata().level(),
                fields: visitor.fields,
            });
    }
}

#[derive(Default)]
struct FieldCollector {
    fields: HashMap<String, String>,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .insert(field.name().to_owned(), format!("{value:?}"));
    }
}
