//! JSON-RPC forwarding to the full-node daemon, mirroring the original
//! dashboard's `rpc_call`: HTTP Basic auth from either a user/password pair
//! or a cookie file, one JSON-RPC 1.0 request per call.

use std::fs;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

use crate::config::Config;
use crate::error::AppError;

pub struct RpcClient {
    http: reqwest::Client,
    url: String,
    auth_user: String,
    auth_password: String,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(config: &Config) -> Self {
        let (auth_user, auth_password) = resolve_auth(config);
        RpcClient {
            http: reqwest::Client::new(),
            url: config.rpc_url(),
            auth_user,
            auth_password,
            next_id: AtomicU64::new(1),
        }
    }

    /// Calls `method` with `params`, returning the RPC `result` field.
    ///
    /// Logs the method name only — never the auth header or request body,
    /// which may contain descriptors.
    pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(method, "forwarding RPC call");

        let body = serde_json::json!({
            "jsonrpc": "1.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(&self.url)
            .basic_auth(&self.auth_user, Some(&self.auth_password))
            .json(&body)
            .send()
            .await?;

        let payload: Value = response.json().await?;
        if let Some(error) = payload.get("error") {
            if !error.is_null() {
                return Err(AppError::Upstream(
                    error
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("RPC error")
                        .to_string(),
                ));
            }
        }
        Ok(payload.get("result").cloned().unwrap_or(Value::Null))
    }
}

/// Resolves the (user, password) pair to send as HTTP Basic auth: an
/// explicit `RPC_USER`/`RPC_PASSWORD` pair takes priority, falling back to
/// the daemon's cookie file, and finally a placeholder that the daemon will
/// reject cleanly rather than the process failing to start.
fn resolve_auth(config: &Config) -> (String, String) {
    if !config.rpc_user.is_empty() && !config.rpc_password.is_empty() {
        return (config.rpc_user.clone(), config.rpc_password.clone());
    }
    match fs::read_to_string(&config.rpc_cookie) {
        Ok(contents) => match contents.trim().split_once(':') {
            Some((user, password)) => (user.to_string(), password.to_string()),
            None => ("__cookie__".to_string(), "password".to_string()),
        },
        Err(_) => ("__cookie__".to_string(), "password".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_auth_prefers_user_password_over_cookie() {
        let config = Config {
            rpc_host: "127.0.0.1".into(),
            rpc_port: 19443,
            rpc_user: "alice".into(),
            rpc_password: "hunter2".into(),
            rpc_cookie: std::path::PathBuf::from("/nonexistent"),
            dashboard_port: 5000,
            wallet_name: "default".into(),
            static_dir: std::path::PathBuf::from("."),
        };
        assert_eq!(resolve_auth(&config), ("alice".to_string(), "hunter2".to_string()));
    }

    #[test]
    fn resolve_auth_falls_back_when_cookie_missing() {
        let config = Config {
            rpc_host: "127.0.0.1".into(),
            rpc_port: 19443,
            rpc_user: String::new(),
            rpc_password: String::new(),
            rpc_cookie: std::path::PathBuf::from("/nonexistent/cookie/path"),
            dashboard_port: 5000,
            wallet_name: "default".into(),
            static_dir: std::path::PathBuf::from("."),
        };
        assert_eq!(resolve_auth(&config), ("__cookie__".to_string(), "password".to_string()));
    }
}
