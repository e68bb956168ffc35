//! Chat message component

use leptos::prelude::*;

use super::ResultCard;
use crate::types::{Message, SearchResult};

/// Render a single chat message
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_user = message.is_user();
    let time = message.timestamp.format("%H:%M").to_string();

    let body = if is_user {
        view! {
            <div class="px-4 py-3 rounded-2xl rounded-tr-sm bg-blue-600 text-white whitespace-pre-wrap break-words">
                {message.text.clone().unwrap_or_default()}
            </div>
        }
        .into_any()
    } else {
        view! {
            <BotReply
                text=message.text.clone()
                results=message.results.clone().unwrap_or_default()
            />
        }
        .into_any()
    };

    view! {
        <div class=format!(
            "flex flex-col gap-1 message-appear {}",
            if is_user { "items-end" } else { "items-start" }
        )>
            {body}
            <span class="text-xs text-slate-600">{time}</span>
        </div>
    }
}

/// Bot bubble: optional translation line, then cards or a "no results" note
#[component]
fn BotReply(text: Option<String>, results: Vec<SearchResult>) -> impl IntoView {
    let has_results = !results.is_empty();

    view! {
        <div class="w-full px-4 py-3 rounded-2xl rounded-tl-sm bg-slate-800 text-slate-100">
            {text.map(|t| view! {
                <div class="bot-text text-sm text-slate-400 mb-2">{format!("Translated: {}", t)}</div>
            })}

            {if has_results {
                view! {
                    <div class="results grid gap-3">
                        {results
                            .into_iter()
                            .map(|result| view! { <ResultCard result=result /> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            } else {
                view! { <div class="no-results text-sm text-slate-400">"No results returned."</div> }
                    .into_any()
            }}
        </div>
    }
}
