//! Fake deployed site, serving the search index over HTTP with axum.
//!
//! The server binds `127.0.0.1:0` and counts requests so harnesses can check
//! that the client fetches the index exactly once.

use axum::{extract::State, http::StatusCode, routing::get, Router};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

pub struct FakeSite {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FakeSite {
    /// Serve `body` with `200 OK` at `/static/search-index.json`.
    pub async fn serving(body: &'static str) -> Self {
        Self::with_status(StatusCode::OK, body).await
    }

    pub async fn with_status(status: StatusCode, body: &'static str) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route(
                "/static/search-index.json",
                get(move |State(hits): State<Arc<AtomicUsize>>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    (status, body)
                }),
            )
            .with_state(hits.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake site");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake site server");
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
        }
    }

    /// Number of index requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}
