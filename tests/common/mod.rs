//! Shared helpers for integration tests.

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;
use wiremock::MockServer;

use codefolio::app::App;
use codefolio::config::Config;
use codefolio::store::MemoryStore;

/// Build an unsigned JWT whose payload expires `ttl_secs` from now.
pub fn jwt(ttl_secs: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\",\"typ\":\"JWT\"}");
    let exp = Utc::now().timestamp() + ttl_secs;
    let payload = URL_SAFE_NO_PAD.encode(format!("{{\"sub\":\"admin\",\"exp\":{exp}}}").as_bytes());
    format!("{header}.{payload}.sig")
}

/// App wired against a mock server, with an in-memory state store.
pub fn app_for(server: &MockServer) -> App {
    let mut config = Config::default();
    config.network.graphql_url = format!("{}/graphql", server.uri());
    App::with_store(&config, Arc::new(MemoryStore::new())).expect("wire app")
}
