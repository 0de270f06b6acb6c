// Content Enhancement: rewrites a text fragment through the remote generator and falls
// back to a deterministic local rewrite when the remote path fails. Never fails outward.

pub mod content_type;
pub mod fallback;
pub mod handlers;
pub mod prompts;
pub mod service;

pub use content_type::ContentType;
pub use service::EnhancementService;
