use tokio::sync::Mutex;

use crate::ai::chat::Session;
use crate::core::AppConfig;

pub struct AppState {
    // One conversation for the lifetime of the process. The mutex
    // serializes turns so the transcript never interleaves.
    pub session: Mutex<Session>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(session: Session, config: AppConfig) -> Self {
        Self {
            session: Mutex::new(session),
            config,
        }
    }
}
