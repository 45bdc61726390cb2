use crate::clients::shields::ShieldsClient;
use crate::services::counter::CounterStore;
use crate::services::stats::Stats;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub counter: Arc<CounterStore>,
    pub shields: Arc<ShieldsClient>,
    pub stats: Arc<Stats>,
    pub key: Arc<str>,
}
