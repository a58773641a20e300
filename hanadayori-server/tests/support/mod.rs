#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_test::TestServer;
use hanadayori_config::{Config, ConfigMetadata, EnvConfig, compose};
use hanadayori_core::{FetchFailed, ImageProvider, SearchQuery};
use hanadayori_server::{AppState, create_app};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const SERVER_KEY: &str = "server-side-pexels-key";
pub const PUBLIC_ORIGIN: &str = "https://hana.example";

pub fn test_config(env: EnvConfig) -> Config {
    let env = EnvConfig {
        pexels_api_key: Some(SERVER_KEY.into()),
        public_origin: Some(PUBLIC_ORIGIN.into()),
        dev_mode: env.dev_mode.or(Some(true)),
        ..env
    };
    compose(None, env, ConfigMetadata::default())
        .expect("test config")
        .config
}

pub fn sample_page() -> Value {
    json!({
        "page": 1,
        "per_page": 2,
        "total_results": 2,
        "photos": [
            {
                "id": 2,
                "photographer": "Aiko",
                "src": {"large": "https://images.example/2.jpg"}
            },
            {
                "id": 1,
                "photographer": "Ren",
                "src": {"large": "https://images.example/1.jpg"}
            }
        ],
        "extra": "kept verbatim"
    })
}

/// Provider that answers every search with one canned result.
#[derive(Debug)]
pub struct StubImages {
    response: Result<Value, FetchFailed>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl StubImages {
    pub fn ok(body: Value) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(body),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            response: Err(FetchFailed),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().expect("queries lock").clone()
    }
}

#[async_trait]
impl ImageProvider for StubImages {
    async fn search_raw(
        &self,
        query: &SearchQuery,
    ) -> Result<Value, FetchFailed> {
        self.queries
            .lock()
            .expect("queries lock")
            .push(query.clone());
        self.response.clone()
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

pub fn server_with(images: Arc<StubImages>) -> TestServer {
    server_with_config(test_config(EnvConfig::default()), images)
}

pub fn server_with_config(
    config: Config,
    images: Arc<StubImages>,
) -> TestServer {
    let state = AppState::new(config, images);
    TestServer::new(create_app(state)).expect("test server")
}

/// What the stub upstream saw for one request.
#[derive(Debug, Clone)]
pub struct Seen {
    pub authorization: Option<String>,
    pub query: HashMap<String, String>,
}

type SeenLog = Arc<Mutex<Vec<Seen>>>;

async fn stub_search(
    State((seen, body)): State<(SeenLog, String)>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    seen.lock().expect("seen lock").push(Seen {
        authorization,
        query,
    });

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Stand-in for the Pexels API on an ephemeral port. Returns its base URL.
pub async fn spawn_upstream(body: Value) -> (String, SeenLog) {
    let seen: SeenLog = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/v1/search", get(stub_search))
        .with_state((Arc::clone(&seen), body.to_string()));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub upstream");
    });

    (format!("http://{addr}/v1"), seen)
}
