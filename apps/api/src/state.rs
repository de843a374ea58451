use crate::config::Config;
use crate::gemini::GeminiClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// The Gemini client is built once at startup and reused immutably — handlers
/// never construct their own client contexts.
#[derive(Clone)]
pub struct AppState {
    pub gemini: GeminiClient,
    /// Full config retained for handlers that grow settings later; only the
    /// bootstrap reads it today.
    #[allow(dead_code)]
    pub config: Config,
}
