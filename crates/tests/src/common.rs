use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::MethodRouter,
    Json, Router,
};
use client::ApiClient;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One request as seen by the mock API.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub request_id: Option<String>,
    pub body: Value,
}

type RequestLog = Arc<Mutex<Vec<Recorded>>>;

/// A mock API bound to an ephemeral local port.
pub struct MockApi {
    pub base_url: String,
    log: RequestLog,
}

impl MockApi {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }

    pub fn client_with_token(&self, token: &str) -> ApiClient {
        self.client().with_token(Some(token.to_string()))
    }

    /// Every request the mock has received so far, in order.
    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("mock API received no requests")
    }
}

async fn record(State(log): State<RequestLog>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();
    let header = |name: &str| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    log.lock().unwrap().push(Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        authorization: header("authorization"),
        request_id: header("x-request-id"),
        body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
    });
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// Serve `router` under `/api` on 127.0.0.1 with a random port. Every
/// matched request is recorded.
pub async fn spawn_api(router: Router) -> MockApi {
    let log: RequestLog = Arc::default();
    let app = Router::new()
        .nest("/api", router)
        .layer(middleware::from_fn_with_state(log.clone(), record));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base_url: format!("http://{addr}/api"),
        log,
    }
}

/// A GET route that always answers with `body`.
pub fn get_json(body: Value) -> MethodRouter {
    axum::routing::get(move || {
        let body = body.clone();
        async move { Json(body) }
    })
}

/// A route that always fails with `status` and `body`.
pub fn failing(status: StatusCode, body: Value) -> MethodRouter {
    axum::routing::any(move || {
        let body = body.clone();
        async move { (status, Json(body)).into_response() }
    })
}
