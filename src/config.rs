//! Widget configuration

/// Knobs for the chat widget. The defaults match the local demo backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Endpoints tried in order; later ones are only used on transport failure
    pub endpoints: Vec<String>,
    /// Number of results requested per query
    pub top_k: u32,
    /// Maximum draft length in characters
    pub max_chars: usize,
    /// Maximum number of remembered queries
    pub history_limit: usize,
    /// LocalStorage key for the query history
    pub storage_key: String,
}

pub const DEFAULT_ENDPOINTS: [&str; 2] = ["/api/chat", "http://127.0.0.1:8000/api/chat"];
pub const DEFAULT_TOP_K: u32 = 5;
pub const MAX_CHARS: usize = 1000;
pub const HISTORY_LIMIT: usize = 20;
pub const STORAGE_KEY_HISTORY: &str = "npc_history";

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            top_k: DEFAULT_TOP_K,
            max_chars: MAX_CHARS,
            history_limit: HISTORY_LIMIT,
            storage_key: STORAGE_KEY_HISTORY.to_string(),
        }
    }
}

impl ChatConfig {
    pub fn with_endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.endpoints = endpoints.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }
}
