//! Generic JSON-RPC passthrough, mirroring the original dashboard's
//! catch-all proxying: no method allowlist, the daemon itself is the
//! authority on what's permitted.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

pub async fn call(
    State(state): State<AppState>,
    Path(method): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, AppError> {
    let params = match body.map(|Json(v)| v) {
        Some(Value::Array(params)) => params,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => vec![other],
    };
    let result = state.rpc().call(&method, params).await?;
    Ok(Json(result))
}
