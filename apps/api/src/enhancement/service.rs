//! Enhancement service — one remote attempt per call, local fallback on any failure.
//!
//! The busy indicator counts in-flight calls and is released by a guard on every exit
//! path, so callers polling `is_busy()` never see a stale "busy" after a failure.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::enhancement::content_type::ContentType;
use crate::enhancement::fallback::fallback_enhance;
use crate::enhancement::prompts::build_prompt;
use crate::llm_client::{LlmError, TextGenerator};

#[derive(Clone)]
pub struct EnhancementService {
    generator: Option<Arc<dyn TextGenerator>>,
    in_flight: Arc<AtomicUsize>,
}

/// Marks one call as in flight for as long as it lives.
struct BusyGuard {
    in_flight: Arc<AtomicUsize>,
}

impl BusyGuard {
    fn acquire(in_flight: &Arc<AtomicUsize>) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self {
            in_flight: Arc::clone(in_flight),
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl EnhancementService {
    /// `None` means no credential was configured; every call then takes the fallback path.
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            generator,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn has_remote(&self) -> bool {
        self.generator.is_some()
    }

    /// Returns an improved version of `text`, or `None` when `text` is blank.
    pub async fn enhance(&self, text: &str, content_type: &ContentType) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        let _busy = BusyGuard::acquire(&self.in_flight);

        match self.try_remote(text, content_type).await {
            Ok(improved) => {
                debug!("Enhanced {content_type} via remote generator");
                Some(improved)
            }
            Err(LlmError::MissingCredential) => {
                warn!("No generator credential configured; using local {content_type} rewrite");
                Some(fallback_enhance(content_type, text))
            }
            Err(e) => {
                warn!("Remote enhancement of {content_type} failed, using fallback: {e}");
                Some(fallback_enhance(content_type, text))
            }
        }
    }

    async fn try_remote(&self, text: &str, content_type: &ContentType) -> Result<String, LlmError> {
        let generator = self.generator.as_ref().ok_or(LlmError::MissingCredential)?;
        let prompt = build_prompt(content_type, text);
        generator.generate(&prompt).await
    }
}
