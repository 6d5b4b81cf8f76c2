//! Lazily fetches and memoizes the wallet's master `tprv`, read from
//! `listdescriptors`. Held as a per-instance value on [`crate::AppState`]
//! with explicit invalidation, per the original dashboard's
//! `_get_master_tprv` (module-level cache, no expiry).

use regex::Regex;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::rpc::RpcClient;

pub struct DescriptorCache {
    cached: RwLock<Option<String>>,
}

impl DescriptorCache {
    pub fn new() -> Self {
        DescriptorCache { cached: RwLock::new(None) }
    }

    /// Returns the cached master `tprv`, fetching it on first use.
    pub async fn master_tprv(&self, rpc: &RpcClient) -> Result<String, AppError> {
        if let Some(cached) = self.cached.read().await.as_ref() {
            return Ok(cached.clone());
        }

        let result = rpc.call("listdescriptors", vec![Value::Bool(true)]).await?;
        let tprv = extract_master_tprv(&result).ok_or_else(|| {
            AppError::Upstream("no receive descriptor with a private key found".into())
        })?;

        *self.cached.write().await = Some(tprv.clone());
        Ok(tprv)
    }

    /// Drops the memoized value, forcing the next call to re-fetch.
    pub async fn invalidate(&self) {
        *self.cached.write().await = None;
    }
}

impl Default for DescriptorCache {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_master_tprv(descriptors_result: &Value) -> Option<String> {
    let pattern = Regex::new(r"^wpkh\((tprv[A-Za-z0-9]+)/").ok()?;
    let descriptors = descriptors_result.get("descriptors")?.as_array()?;
    for entry in descriptors {
        let desc = match entry.get("desc").and_then(Value::as_str) {
            Some(desc) => desc,
            None => continue,
        };
        if !desc.contains("/0/*)") {
            continue;
        }
        if let Some(captures) = pattern.captures(desc) {
            return Some(captures[1].to_string());
        }
    }
    None
}
