#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, RwLock};

type Objects = Arc<RwLock<HashMap<(String, String), Value>>>;

#[derive(Clone, Default)]
struct DoubleState {
    objects: Objects,
    tokens: Arc<RwLock<Vec<Option<String>>>>,
}

impl DoubleState {
    async fn remember_token(&self, headers: &HeaderMap) {
        let token = headers
            .get("x-auth-token")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.tokens.write().await.push(token);
    }
}

/// Minimal stand-in for the backing store's REST API server.
pub struct ApiServerDouble {
    addr: SocketAddr,
    state: DoubleState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServerDouble {
    pub async fn start() -> Self {
        Self::start_on(SocketAddr::from(([127, 0, 0, 1], 0))).await
    }

    /// Starts on a fixed address, e.g. one a client already points at.
    pub async fn start_on(addr: SocketAddr) -> Self {
        let state = DoubleState::default();
        let app = Router::new()
            .route("/", get(|| async { Json(json!({"links": []})) }))
            .route("/fqname-to-id", post(fqname_to_id))
            .route("/{collection}", post(create))
            .route(
                "/{kind}/{id}",
                get(read).put(update).delete(remove),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind(addr).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn seed(&self, kind: &str, body: Value) {
        let id = body["uuid"].as_str().unwrap().to_string();
        self.state
            .objects
            .write()
            .await
            .insert((kind.to_string(), id), body);
    }

    pub async fn object(&self, kind: &str, id: &str) -> Option<Value> {
        self.state
            .objects
            .read()
            .await
            .get(&(kind.to_string(), id.to_string()))
            .cloned()
    }

    pub async fn tokens(&self) -> Vec<Option<String>> {
        self.state.tokens.read().await.clone()
    }
}

impl Drop for ApiServerDouble {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn read(
    State(state): State<DoubleState>,
    Path((kind, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    state.remember_token(&headers).await;
    let objects = state.objects.read().await;
    let body = objects.get(&(kind.clone(), id)).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(wrap(kind, body.clone())))
}

fn wrap(kind: String, body: Value) -> Value {
    let mut envelope = serde_json::Map::new();
    envelope.insert(kind, body);
    Value::Object(envelope)
}

async fn create(
    State(state): State<DoubleState>,
    Path(collection): Path<String>,
    headers: HeaderMap,
    Json(envelope): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    state.remember_token(&headers).await;
    let kind = collection
        .strip_suffix('s')
        .ok_or(StatusCode::NOT_FOUND)?
        .to_string();
    let body = envelope.get(&kind).cloned().ok_or(StatusCode::BAD_REQUEST)?;
    let id = body["uuid"]
        .as_str()
        .ok_or(StatusCode::BAD_REQUEST)?
        .to_string();

    let mut objects = state.objects.write().await;
    let key = (kind.clone(), id.clone());
    if objects.contains_key(&key) {
        return Err(StatusCode::CONFLICT);
    }
    objects.insert(key, body);
    Ok(Json(wrap(kind, json!({ "uuid": id }))))
}

async fn update(
    State(state): State<DoubleState>,
    Path((kind, id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(envelope): Json<Value>,
) -> StatusCode {
    state.remember_token(&headers).await;
    let Some(body) = envelope.get(&kind).cloned() else {
        return StatusCode::BAD_REQUEST;
    };
    let mut objects = state.objects.write().await;
    match objects.get_mut(&(kind, id)) {
        Some(existing) => {
            *existing = body;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn remove(
    State(state): State<DoubleState>,
    Path((kind, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> StatusCode {
    state.remember_token(&headers).await;
    match state.objects.write().await.remove(&(kind, id)) {
        Some(_) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    }
}

async fn fqname_to_id(
    State(state): State<DoubleState>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    state.remember_token(&headers).await;
    let kind = request["type"].as_str().ok_or(StatusCode::BAD_REQUEST)?;
    let fq_name = &request["fq_name"];

    state
        .objects
        .read()
        .await
        .iter()
        .find(|((k, _), body)| k == kind && &body["fq_name"] == fq_name)
        .map(|((_, id), _)| Json(json!({ "uuid": id })))
        .ok_or(StatusCode::NOT_FOUND)
}
