//! View command handler.
//!
//! Implements the `view` subcommand: an interactive index page over a
//! document, optionally with the notification bell polling a feed file.

use crate::config::AppConfig;
use crate::model::{IndexDocument, Record};
use crate::notify::{FileFeed, Poller};
use crate::query::IndexQuery;
use crate::source::MemorySource;
use crate::table::IndexPage;
use crate::tui::{IndexApp, Theme, run_index_tui, set_theme};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Everything the `view` command needs.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub document: PathBuf,
    /// Initial request; page and filters may come from `--query`
    pub query: IndexQuery,
    pub app: AppConfig,
}

/// Build the app for a document without starting the terminal.
pub fn build_app(document: &IndexDocument, config: &ViewConfig) -> IndexApp {
    let page: IndexPage<Record> =
        IndexPage::from_document(document).with_labels(config.app.labels.clone());
    let source = MemorySource::from_document(document);
    let mut app = IndexApp::new(page, Box::new(source), config.query.clone());

    if let Some(feed) = config.app.notifications.active_feed() {
        tracing::info!(feed = %feed.display(), "starting notification poller");
        let poller = Poller::spawn(
            FileFeed::new(feed.clone()),
            config.app.notifications.poller_config(),
        );
        app = app.with_poller(poller);
    }
    app
}

/// Run the view command.
#[allow(clippy::needless_pass_by_value)]
pub fn run_view(config: ViewConfig) -> Result<()> {
    let document = IndexDocument::load(&config.document)?;
    set_theme(Theme::from_name(&config.app.tui.theme));

    let mut app = build_app(&document, &config);
    run_index_tui(&mut app, config.app.tui.tick_rate_ms).context("terminal UI failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_app_uses_query_and_labels() {
        let document = IndexDocument::from_json(
            r#"{"title": "Ruangan", "columns": [{"key": "name", "label": "Nama"}],
                "rows": [{"id": 1, "name": "Melati"}]}"#,
        )
        .unwrap();
        let mut app_config = AppConfig::default();
        app_config.labels.of = "of".to_string();
        let config = ViewConfig {
            document: PathBuf::from("unused.json"),
            query: IndexQuery::new().with_per_page(25),
            app: app_config,
        };

        let mut app = build_app(&document, &config);
        assert!(app.is_fetch_pending());
        assert_eq!(app.query.per_page, 25);
        app.perform_fetch();
        assert!(!app.page.is_loading());
        assert_eq!(app.page.data().len(), 1);
        let bar = app.page.pagination_bar().unwrap();
        assert_eq!(bar.range_label(&app.page.labels().of), "1–1 of 1");
    }
}
