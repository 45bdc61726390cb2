pub mod clients { pub mod shields; }
pub mod config;
pub mod telemetry;
pub mod state;
pub mod error;
pub mod domain { pub mod badge; }
pub mod services { pub mod counter; pub mod hashing; pub mod stats; }
pub mod web { pub mod router; pub mod handlers; pub mod utils; }

use std::sync::Arc;

use crate::clients::shields::ShieldsClient;
use crate::services::{counter::CounterStore, stats::Stats};
use crate::state::AppState;

pub async fn build_app(cfg: crate::config::Config) -> anyhow::Result<(axum::Router, u16)> {
    tracing::info!(key = %cfg.key, shields = %cfg.shields_url, "configuring cache");
    let shields = ShieldsClient::new(&cfg.shields_url)?;

    let state = AppState {
        counter: Arc::new(CounterStore::new()),
        shields: Arc::new(shields),
        stats: Arc::new(Stats::new()),
        key: Arc::from(cfg.key),
    };

    Ok((crate::web::router::build_router(state), cfg.port))
}
