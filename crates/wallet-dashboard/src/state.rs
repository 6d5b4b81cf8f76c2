//! Shared Axum application state.

use std::sync::Arc;

use crate::config::Config;
use crate::descriptor_cache::DescriptorCache;
use crate::richlist::RichListCache;
use crate::rpc::RpcClient;

#[derive(Clone)]
pub struct AppState(Arc<Inner>);

struct Inner {
    config: Config,
    rpc: RpcClient,
    descriptors: DescriptorCache,
    richlist: RichListCache,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let rpc = RpcClient::new(&config);
        AppState(Arc::new(Inner {
            config,
            rpc,
            descriptors: DescriptorCache::new(),
            richlist: RichListCache::new(),
        }))
    }

    pub fn config(&self) -> &Config {
        &self.0.config
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.0.rpc
    }

    pub fn descriptors(&self) -> &DescriptorCache {
        &self.0.descriptors
    }

    pub fn richlist(&self) -> &RichListCache {
        &self.0.richlist
    }
}
