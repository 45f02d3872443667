use anyhow::Result;
use axum::http::StatusCode;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

use bookalytic::client::SearchClient;
use bookalytic::controller::SearchController;
use bookalytic::view::SearchOutcome;

mod common;
use common::*;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

/// Keeps every `log` record emitted in this test binary.
struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

fn install_logger() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

// tests share the logger, so each one filters on its own query text
fn records_mentioning(needle: &str) -> Vec<(Level, String)> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, msg)| msg.contains(needle))
        .cloned()
        .collect()
}

fn errors_mentioning(needle: &str) -> Vec<String> {
    records_mentioning(needle)
        .into_iter()
        .filter(|(level, _)| *level == Level::Error)
        .map(|(_, msg)| msg)
        .collect()
}

#[tokio::test]
async fn test_server_error_is_logged_once() -> Result<()> {
    install_logger();
    let api = MockSearchApi::spawn(StatusCode::INTERNAL_SERVER_ERROR, "boom").await?;
    let controller = SearchController::new(SearchClient::new(&api.base_url));

    controller.set_query("haunted lighthouse").await;
    assert_eq!(controller.search().await, SearchOutcome::Failed);

    let errors = errors_mentioning("haunted lighthouse");
    assert_eq!(errors.len(), 1, "expected one error record, got {:?}", errors);
    assert!(errors[0].contains("500"), "unexpected message: {}", errors[0]);
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_logged() -> Result<()> {
    install_logger();
    let api = MockSearchApi::spawn(StatusCode::OK, "{not a list").await?;
    let controller = SearchController::new(SearchClient::new(&api.base_url));

    controller.set_query("garbled catalogue").await;
    assert_eq!(controller.search().await, SearchOutcome::Failed);

    let errors = errors_mentioning("garbled catalogue");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("malformed response body"));
    Ok(())
}

#[tokio::test]
async fn test_successful_search_logs_no_error() -> Result<()> {
    install_logger();
    let api = MockSearchApi::spawn(StatusCode::OK, QUIET_VILLAGE).await?;
    let controller = SearchController::new(SearchClient::new(&api.base_url));

    controller.set_query("sunny orchard").await;
    assert_eq!(controller.search().await, SearchOutcome::Applied { count: 1 });

    assert!(errors_mentioning("sunny orchard").is_empty());
    assert!(!records_mentioning("sunny orchard").is_empty());
    Ok(())
}

#[tokio::test]
async fn test_post_request_only_logs() -> Result<()> {
    install_logger();
    let api = MockSearchApi::spawn(StatusCode::OK, QUIET_VILLAGE).await?;
    let controller = SearchController::new(SearchClient::new(&api.base_url));

    controller.post_request("velvet almanac").await;

    let records = records_mentioning("velvet almanac");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Info);
    assert!(api.received().is_empty());
    Ok(())
}
