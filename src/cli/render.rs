//! Render command handler.
//!
//! Implements the `render` subcommand: one page of a document printed as
//! plain text, with the query given on the command line.

use crate::model::{IndexDocument, Record};
use crate::query::IndexQuery;
use crate::render::{TextOptions, render_page};
use crate::source::{DataSource, MemorySource};
use crate::table::{IndexPage, Labels};
use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::PathBuf;

/// Everything the `render` command needs.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub document: PathBuf,
    pub query: IndexQuery,
    /// Column key to sort the page by
    pub sort: Option<String>,
    pub descending: bool,
    pub labels: Labels,
    /// Print title, actions and the filter summary
    pub chrome: bool,
    pub output: Option<PathBuf>,
}

/// Parse a `key=value` filter argument.
pub fn parse_filter_arg(arg: &str) -> std::result::Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{arg}'")),
    }
}

/// Run the render command.
#[allow(clippy::needless_pass_by_value)]
pub fn run_render(config: RenderConfig) -> Result<()> {
    let document = IndexDocument::load(&config.document)?;
    let text = render_document(&document, &config)?;

    match &config.output {
        Some(path) => std::fs::write(path, &text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Fetch the requested page of `document` and render it.
pub fn render_document(document: &IndexDocument, config: &RenderConfig) -> Result<String> {
    let source = MemorySource::from_document(document);
    let result = source
        .fetch(&config.query)
        .context("failed to fetch page")?;
    tracing::debug!(
        rows = result.rows.len(),
        total = result.pagination.total,
        "rendering page"
    );

    let mut page: IndexPage<Record> = IndexPage::from_document(document)
        .with_labels(config.labels.clone())
        .with_filter_values(config.query.filters.clone())
        .with_search_value(config.query.search.clone());
    page.set_data(result.rows, Some(result.pagination));

    if let Some(key) = &config.sort {
        if !page.click_header(key) {
            bail!("column '{key}' does not exist or is not sortable");
        }
        if config.descending {
            page.click_header(key);
        }
    }

    Ok(render_page(
        &page,
        &TextOptions {
            chrome: config.chrome,
            ..TextOptions::default()
        },
    ))
}
