//! Chat input component

use leptos::prelude::*;

use crate::state::clamp_draft;

/// Query textarea with character counter and send button.
///
/// Enter submits, Shift+Enter inserts a newline. The draft is clamped to
/// `max_chars` on every edit, which also covers pasting.
#[component]
pub fn ChatInput(
    /// Current draft
    value: RwSignal<String>,
    /// Handle used by the widget to refocus the textarea
    textarea_ref: NodeRef<leptos::html::Textarea>,
    /// Called when user submits
    on_submit: impl Fn() + 'static + Clone,
    /// True while a search is in flight
    #[prop(into)]
    loading: Signal<bool>,
    /// Maximum draft length in characters
    max_chars: usize,
    /// Number of messages in the log, shown next to the counter
    #[prop(into)]
    message_count: Signal<usize>,
    /// Placeholder text
    #[prop(default = "Ask about nonprofit resources (Enter to send, Shift+Enter for new line)")]
    placeholder: &'static str,
) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| {
        value.set(clamp_draft(&event_target_value(&ev), max_chars));
    };

    // Enter to submit, Shift+Enter for newline
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                on_submit();
            }
        }
    };

    let on_button_click = move |_| on_submit();

    view! {
        <div class="flex flex-col gap-2">
            <textarea
                node_ref=textarea_ref
                prop:value=move || value.get()
                on:input=on_input
                on:keydown=on_keydown
                placeholder=placeholder
                rows="3"
                class="w-full px-4 py-3 bg-slate-900 border border-slate-700 rounded-xl resize-none
                       text-slate-100 placeholder-slate-500
                       focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
            ></textarea>

            <div class="flex items-center justify-between text-xs text-slate-500">
                <span class="char-counter">
                    {move || format!("{}/{}", value.with(|v| v.chars().count()), max_chars)}
                </span>
                <span>{move || format!("{} messages", message_count.get())}</span>
            </div>

            <button
                on:click=on_button_click
                disabled=move || loading.get()
                class="self-start flex items-center gap-2 px-4 py-2 bg-blue-600 hover:bg-blue-700
                       disabled:bg-slate-700 disabled:cursor-not-allowed rounded-xl transition-colors
                       text-white font-medium"
            >
                {move || {
                    if loading.get() {
                        view! { <span>"Searching..."</span> }.into_any()
                    } else {
                        view! {
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                class="w-4 h-4"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            >
                                <line x1="22" y1="2" x2="11" y2="13"></line>
                                <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                            </svg>
                            <span>"Send"</span>
                        }
                        .into_any()
                    }
                }}
            </button>
        </div>
    }
}
