//! Shared application state

use std::sync::Arc;

use tokio::sync::RwLock;

use comfort_core::{ComfortEngine, ComfortResult, RoomConfig, SystemClock};

/// State shared by every handler.
///
/// One engine behind one lock: submissions and source toggles take the write
/// half, everything else reads.
#[derive(Clone)]
pub struct AppState {
    /// The room engine
    pub engine: Arc<RwLock<ComfortEngine<SystemClock>>>,
}

impl AppState {
    /// State serving `config`
    pub fn new(config: RoomConfig) -> ComfortResult<Self> {
        let engine = ComfortEngine::new(config)?;
        Ok(Self {
            engine: Arc::new(RwLock::new(engine)),
        })
    }
}
