//! Chat widget - query box, recent queries and result log

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::{ChatInput, ChatMessage, HistoryBar, SearchingIndicator};
use crate::api::{search, GlooTransport};
use crate::config::ChatConfig;
use crate::history::LocalHistoryStore;
use crate::state::ChatSession;

/// Delay before refocusing the textarea, so the re-enabled controls have rendered
const FOCUS_DELAY_MS: u32 = 50;

/// The chat widget.
///
/// Owns the draft, the message log, the loading flag, the inline error and
/// the recent-query history. Configuration comes from the `config` prop, then
/// from context, then from [`ChatConfig::default`].
#[component]
pub fn ChatWidget(#[prop(optional)] config: Option<ChatConfig>) -> impl IntoView {
    let config = config
        .or_else(use_context::<ChatConfig>)
        .unwrap_or_default();
    let store = LocalHistoryStore::new(config.storage_key.clone());
    let max_chars = config.max_chars;

    let session = RwSignal::new(ChatSession::load(&config, &store));
    let endpoints = StoredValue::new(config.endpoints);
    let draft = RwSignal::new(String::new());
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    let focus_input = move |select: bool| {
        Timeout::new(FOCUS_DELAY_MS, move || {
            if let Some(el) = textarea_ref.get_untracked() {
                let _ = el.focus();
                if select {
                    el.select();
                }
            }
        })
        .forget();
    };

    // Keep the newest message in view
    Effect::new(move |_| {
        session.track();
        if let Some(el) = messages_end_ref.get_untracked() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let send_message = {
        let store = store.clone();
        move || {
            let text = draft.get_untracked();
            let Some(Ok(request)) = session.try_update(|s| s.begin_submit(&text)) else {
                return;
            };

            let store = store.clone();
            spawn_local(async move {
                let outcome = search(&GlooTransport, &endpoints.get_value(), &request).await;
                session.update(|s| s.finish_submit(&request, outcome, &store));
                focus_input(true);
            });
        }
    };

    let clear_conversation = move |_| {
        session.update(|s| s.clear_conversation());
        focus_input(false);
    };

    let select_recent = move |query: String| {
        if let Some(query) = session.with_untracked(|s| s.select_recent(&query)) {
            draft.set(query);
            focus_input(true);
        }
    };

    let clear_history = move || session.update(|s| s.clear_history(&store));

    let loading = Signal::derive(move || session.with(|s| s.is_loading()));
    let message_count = Signal::derive(move || session.with(|s| s.messages().len()));
    let history = Signal::derive(move || session.with(|s| s.history().entries().to_vec()));

    view! {
        <div class="chatbot flex flex-col h-full gap-4">
            <div class="chat-top">
                <div class="flex items-center gap-3">
                    <div class="title text-lg font-semibold">"Ask about nonprofit resources"</div>
                    <div class="text-sm text-slate-400">"Spanish & English"</div>
                </div>
                <div class="subtitle text-xs text-slate-500">"Fast semantic matching · Multilingual"</div>
            </div>

            <div class="chat-controls flex flex-col gap-3">
                <HistoryBar entries=history on_select=select_recent on_clear=clear_history />

                <ChatInput
                    value=draft
                    textarea_ref=textarea_ref
                    on_submit=send_message
                    loading=loading
                    max_chars=max_chars
                    message_count=message_count
                />

                <div class="actions flex gap-2">
                    <button
                        on:click=clear_conversation
                        class="px-4 py-2 text-slate-400 hover:text-slate-100 border border-slate-700 rounded-xl transition-colors"
                    >
                        "Clear"
                    </button>
                </div>

                {move || session.with(|s| s.error().map(str::to_string)).map(|e| view! {
                    <div class="error text-sm text-red-400">{e}</div>
                })}
            </div>

            <div class="chat-results flex-1 overflow-y-auto space-y-4">
                <Show when=move || session.with(|s| s.messages().is_empty() && !s.is_loading())>
                    <div class="empty text-slate-500 text-sm">
                        "No conversation yet. Ask something to start."
                    </div>
                </Show>

                {move || {
                    session
                        .with(|s| s.messages().to_vec())
                        .into_iter()
                        .map(|msg| view! { <ChatMessage message=msg /> })
                        .collect::<Vec<_>>()
                }}

                <Show when=move || loading.get()>
                    <SearchingIndicator />
                </Show>

                // Scroll anchor
                <div node_ref=messages_end_ref></div>
            </div>
        </div>
    }
}
