#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use hanadayori_core::{FetchFailed, ImageProvider, SearchQuery};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub fn photo_json(id: u64, photographer: &str) -> Value {
    let src = |size: &str| {
        format!("https://images.pexels.com/photos/{id}/{size}.jpeg")
    };
    let profile =
        format!("https://www.pexels.com/@{}", photographer.to_lowercase());
    json!({
        "id": id,
        "width": 3000,
        "height": 4500,
        "url": format!("https://www.pexels.com/photo/{id}/"),
        "photographer": photographer,
        "photographer_url": profile,
        "photographer_id": id * 10,
        "avg_color": "#7B6D5A",
        "src": {
            "original": src("original"),
            "large2x": src("large2x"),
            "large": src("large"),
            "medium": src("medium"),
            "small": src("small"),
            "portrait": src("portrait"),
            "landscape": src("landscape"),
            "tiny": src("tiny")
        },
        "liked": false,
        "alt": format!("flowers by {photographer}")
    })
}

pub fn page_json(page: u32, ids: &[u64]) -> Value {
    let photos: Vec<Value> =
        ids.iter().map(|id| photo_json(*id, "Aiko")).collect();
    let next = format!("https://api.pexels.com/v1/search/?page={}", page + 1);
    json!({
        "page": page,
        "per_page": ids.len(),
        "total_results": 8000,
        "photos": photos,
        "next_page": next
    })
}

/// What the stub upstream saw for one request.
#[derive(Debug, Clone)]
pub struct Seen {
    pub authorization: Option<String>,
    pub query: HashMap<String, String>,
}

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

async fn stub_search(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    upstream.seen.lock().expect("seen lock").push(Seen {
        authorization,
        query,
    });

    (
        upstream.status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body.clone(),
    )
        .into_response()
}

/// Serve `/v1/search` on an ephemeral port. Returns the API base URL.
pub async fn spawn_upstream(
    status: StatusCode,
    body: impl Into<String>,
) -> (String, Arc<Mutex<Vec<Seen>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let upstream = Upstream {
        status,
        body: body.into(),
        seen: Arc::clone(&seen),
    };
    let app = Router::new()
        .route("/v1/search", get(stub_search))
        .with_state(upstream);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub upstream");
    });

    (format!("http://{addr}/v1"), seen)
}

/// A base URL nothing is listening on.
pub async fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}/v1")
}

/// In-process provider that replays scripted responses and records every
/// query it was asked for.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<Value, FetchFailed>>>,
    pub queries: Mutex<Vec<SearchQuery>>,
}

impl ScriptedProvider {
    pub fn new(
        responses: impl IntoIterator<Item = Result<Value, FetchFailed>>,
    ) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().expect("queries lock").clone()
    }
}

#[async_trait]
impl ImageProvider for ScriptedProvider {
    async fn search_raw(
        &self,
        query: &SearchQuery,
    ) -> Result<Value, FetchFailed> {
        self.queries
            .lock()
            .expect("queries lock")
            .push(query.clone());
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or_else(|| Ok(page_json(query.page, &[])))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
