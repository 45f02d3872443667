#![allow(dead_code)]

use anyhow::Result;
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const QUIET_VILLAGE: &str = r#"[{"id":1,"title":"The Quiet Village","authors":"A. Smith","description":"A cozy whodunit.","publishedDate":"NaN","pageCount":0}]"#;

/// A stand-in for the search collaborator that answers every request with a
/// fixed status and body and records the decoded `query` parameters.
pub struct MockSearchApi {
    pub base_url: String,
    received: Arc<Mutex<Vec<String>>>,
}

impl MockSearchApi {
    pub async fn spawn(status: StatusCode, body: &str) -> Result<MockSearchApi> {
        Self::spawn_with(vec![(status, body.to_string())]).await
    }

    /// Replies are handed out in order; the last one repeats.
    pub async fn spawn_with(replies: Vec<(StatusCode, String)>) -> Result<MockSearchApi> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            replies: Arc::new(replies),
            received: received.clone(),
        };
        let app = Router::new()
            .route("/api/search", get(mock_search))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(MockSearchApi {
            base_url: format!("http://{addr}"),
            received,
        })
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct MockState {
    replies: Arc<Vec<(StatusCode, String)>>,
    received: Arc<Mutex<Vec<String>>>,
}

async fn mock_search(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    let mut received = state.received.lock().unwrap();
    received.push(params.get("query").cloned().unwrap_or_default());
    let idx = (received.len() - 1).min(state.replies.len() - 1);
    state.replies[idx].clone()
}

/// Base URL of a port nothing is listening on.
pub async fn dead_base_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}
