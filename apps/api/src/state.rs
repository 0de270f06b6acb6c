use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::document::models::ResumeDocument;
use crate::enhancement::EnhancementService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single in-memory session document. Section replaces are last-write-wins.
    pub document: Arc<RwLock<ResumeDocument>>,
    pub enhancer: EnhancementService,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, enhancer: EnhancementService) -> Self {
        Self {
            document: Arc::new(RwLock::new(ResumeDocument::new())),
            enhancer,
            config,
        }
    }

    /// Owned copy of the current document; the lock is released before returning.
    pub async fn snapshot(&self) -> ResumeDocument {
        self.document.read().await.clone()
    }
}
