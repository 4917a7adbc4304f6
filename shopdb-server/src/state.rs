//! Application state shared across handlers

use std::sync::Arc;

use crate::db::Gateway;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    gateway: Gateway,
}

impl AppState {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            inner: Arc::new(AppStateInner { gateway }),
        }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.inner.gateway
    }
}
