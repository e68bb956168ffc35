//! Chat widget state

use crate::config::ChatConfig;
use crate::error::{ChatError, Result};
use crate::history::{History, HistoryStore};
use crate::types::{Message, SearchOutcome, SearchRequest};

/// Text of the bot message appended when a search fails
pub const FETCH_FAILED_TEXT: &str = "Sorry, I could not fetch results.";

/// Trim the draft and check it against the length limit.
pub fn prepare_query(draft: &str, max_chars: usize) -> Result<String> {
    let query = draft.trim();
    if query.is_empty() {
        return Err(ChatError::EmptyQuery);
    }
    if query.chars().count() > max_chars {
        return Err(ChatError::InputTooLong { max: max_chars });
    }
    Ok(query.to_string())
}

/// Cut `text` down to at most `max_chars` characters.
pub fn clamp_draft(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Everything the chat widget shows, minus the draft text.
///
/// The message log is append-only between clears. History is written
/// through to the given store whenever it changes.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    error: Option<String>,
    history: History,
    loading: bool,
    max_chars: usize,
    top_k: u32,
}

impl ChatSession {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            messages: Vec::new(),
            error: None,
            history: History::new(config.history_limit),
            loading: false,
            max_chars: config.max_chars,
            top_k: config.top_k,
        }
    }

    /// New session with history restored from `store`
    pub fn load(config: &ChatConfig, store: &dyn HistoryStore) -> Self {
        let mut session = Self::new(config);
        session.history = History::from_entries(store.load(), config.history_limit);
        session
    }

    /// Validate the draft and record the user message.
    ///
    /// On success the returned request must be sent and its outcome passed to
    /// [`finish_submit`](Self::finish_submit). An empty draft changes nothing;
    /// an over-long one only sets the error.
    pub fn begin_submit(&mut self, draft: &str) -> Result<SearchRequest> {
        if self.loading {
            return Err(ChatError::Busy);
        }

        let query = match prepare_query(draft, self.max_chars) {
            Ok(query) => query,
            Err(e) => {
                if matches!(e, ChatError::InputTooLong { .. }) {
                    self.error = Some(e.to_string());
                }
                return Err(e);
            }
        };

        tracing::debug!("Submitting query ({} chars)", query.chars().count());
        self.error = None;
        self.messages.push(Message::user(&query));
        self.loading = true;

        Ok(SearchRequest {
            message: query,
            top_k: self.top_k,
        })
    }

    /// Record the outcome of a search started with `begin_submit`.
    pub fn finish_submit(
        &mut self,
        request: &SearchRequest,
        outcome: Result<SearchOutcome>,
        store: &dyn HistoryStore,
    ) {
        self.loading = false;

        match outcome {
            Ok(SearchOutcome { results, echo }) => {
                tracing::debug!("Received {} results", results.len());
                self.messages.push(Message::bot(results, echo));
                if self.history.record(&request.message) {
                    store.save(self.history.entries());
                }
            }
            Err(e) => {
                tracing::error!("Search failed: {}", e);
                self.error = Some(e.to_string());
                self.messages.push(Message::bot(Vec::new(), FETCH_FAILED_TEXT));
            }
        }
    }

    /// Drop the message log and error; history is kept.
    pub fn clear_conversation(&mut self) {
        self.messages.clear();
        self.error = None;
    }

    /// History entry to place in the draft box, if `query` is one of them.
    pub fn select_recent(&self, query: &str) -> Option<String> {
        self.history
            .entries()
            .iter()
            .find(|e| e.as_str() == query)
            .cloned()
    }

    /// Empty the history and remove it from the store; the log is kept.
    pub fn clear_history(&mut self, store: &dyn HistoryStore) {
        self.history.clear();
        store.remove();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }
}
